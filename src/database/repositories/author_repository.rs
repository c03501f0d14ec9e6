// ABOUTME: Author catalog repository implementation
// ABOUTME: Wraps the database manager and maps storage faults to DatabaseError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Biblio Server Contributors

use async_trait::async_trait;

use super::AuthorRepository;
use crate::database::{Database, DatabaseError};
use crate::models::{Author, AuthorUpdate};

/// SQLite implementation of `AuthorRepository`
pub struct AuthorRepositoryImpl {
    db: Database,
}

impl AuthorRepositoryImpl {
    /// Create a new `AuthorRepository` with the given database handle
    #[must_use]
    pub const fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AuthorRepository for AuthorRepositoryImpl {
    async fn create(
        &self,
        name: &str,
        surname: &str,
        patronymic: &str,
    ) -> Result<Option<Author>, DatabaseError> {
        self.db
            .create_author(name, surname, patronymic)
            .await
            .map_err(|e| DatabaseError::QueryError {
                context: e.to_string(),
            })
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Author>, DatabaseError> {
        self.db
            .get_author(id)
            .await
            .map_err(|e| DatabaseError::QueryError {
                context: e.to_string(),
            })
    }

    async fn update(
        &self,
        id: i64,
        update: &AuthorUpdate,
    ) -> Result<Option<Author>, DatabaseError> {
        self.db
            .update_author(id, update)
            .await
            .map_err(|e| DatabaseError::QueryError {
                context: e.to_string(),
            })
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, DatabaseError> {
        self.db
            .delete_author(id)
            .await
            .map_err(|e| DatabaseError::QueryError {
                context: e.to_string(),
            })
    }

    async fn get_all(&self) -> Result<Vec<Author>, DatabaseError> {
        self.db
            .get_all_authors()
            .await
            .map_err(|e| DatabaseError::QueryError {
                context: e.to_string(),
            })
    }
}
