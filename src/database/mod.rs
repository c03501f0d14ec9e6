// ABOUTME: Database manager for the library backend
// ABOUTME: Connection pool setup, schema migration fan-out, and shared helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Biblio Server Contributors

//! # Database Management
//!
//! This module provides storage for the library backend: users, authors,
//! books, and borrowing orders over SQLite. Each entity's operations live in
//! its own file as methods on [`Database`]; the `repositories` submodule
//! exposes the per-entity trait seams handed to the web-framework
//! collaborator.

mod authors;
mod books;
mod errors;
mod orders;
mod users;

/// Per-entity repository traits and their SQLite implementations
pub mod repositories;

pub use errors::DatabaseError;

use std::str::FromStr;

use anyhow::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use tracing::info;

use crate::config::environment::DatabaseConfig;

/// Database manager for entity storage
#[derive(Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    /// Open a database at the given URL with default pool settings
    ///
    /// # Errors
    ///
    /// Returns an error if the connection or schema migration fails.
    pub async fn new(database_url: &str) -> Result<Self> {
        let config = DatabaseConfig {
            url: database_url.to_string(),
            ..DatabaseConfig::default()
        };
        Self::from_config(&config).await
    }

    /// Open a database from configuration
    ///
    /// SQLite files are created if missing; foreign-key enforcement is
    /// enabled on every connection.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection or schema migration fails.
    pub async fn from_config(config: &DatabaseConfig) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(&config.url)?
            .create_if_missing(true)
            .foreign_keys(true);

        // A pooled in-memory database is one database per connection; a
        // single connection keeps the schema visible to every query.
        let max_connections = if config.url.contains(":memory:") {
            1
        } else {
            config.max_connections
        };

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        let db = Self { pool };
        db.migrate().await?;
        Ok(db)
    }

    /// Get a reference to the pool for advanced operations
    #[must_use]
    pub fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    /// Run schema migrations; safe to call repeatedly
    ///
    /// # Errors
    ///
    /// Returns an error if any table or index creation fails.
    pub async fn migrate(&self) -> Result<()> {
        self.migrate_users().await?;
        self.migrate_authors().await?;
        self.migrate_books().await?;
        self.migrate_orders().await?;
        info!("database schema ready");
        Ok(())
    }
}

/// True when the error is a `UNIQUE` constraint violation
pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_unique_violation())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn migrate_is_idempotent() {
        let db = Database::new("sqlite::memory:").await.unwrap();
        db.migrate().await.unwrap();
    }
}
