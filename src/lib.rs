// ABOUTME: Main library entry point for the biblio server backend
// ABOUTME: Exposes domain models, database operations, configuration, and logging setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Biblio Server Contributors

#![deny(unsafe_code)]

//! # Biblio Server
//!
//! A library-management backend: user accounts, authors, books, and borrowing
//! orders persisted in SQLite and exposed as an async data-access API for a
//! web framework to call into.
//!
//! ## Architecture
//!
//! - **Models**: domain types with validation helpers and JSON rendering
//! - **Database**: per-entity CRUD operations on a shared connection pool
//! - **Repositories**: per-entity trait seams handed to the web layer
//! - **Config**: environment-based runtime configuration
//!
//! Expected failures (validation, not-found, business-rule violations) are
//! signalled by value (`Ok(None)` / `Ok(false)`); errors are reserved for
//! storage faults.
//!
//! ## Example
//!
//! ```rust,no_run
//! use biblio_server::config::environment::DatabaseConfig;
//! use biblio_server::database::Database;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = DatabaseConfig::from_env()?;
//!     let db = Database::from_config(&config).await?;
//!
//!     let user = db
//!         .create_user("reader@example.com", "secret", Some("Ada"), None, None)
//!         .await?;
//!     println!("created: {user:?}");
//!     Ok(())
//! }
//! ```

/// Environment-based configuration management
pub mod config;

/// SQLite-backed storage operations and repository seams
pub mod database;

/// Structured logging setup
pub mod logging;

/// Domain models for users, authors, books, and orders
pub mod models;
