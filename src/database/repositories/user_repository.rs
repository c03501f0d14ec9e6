// ABOUTME: User directory repository implementation
// ABOUTME: Wraps the database manager and maps storage faults to DatabaseError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Biblio Server Contributors

use async_trait::async_trait;

use super::UserRepository;
use crate::database::{Database, DatabaseError};
use crate::models::{User, UserUpdate};

/// SQLite implementation of `UserRepository`
pub struct UserRepositoryImpl {
    db: Database,
}

impl UserRepositoryImpl {
    /// Create a new `UserRepository` with the given database handle
    #[must_use]
    pub const fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn create(
        &self,
        email: &str,
        password: &str,
        first_name: Option<&str>,
        middle_name: Option<&str>,
        last_name: Option<&str>,
    ) -> Result<Option<User>, DatabaseError> {
        self.db
            .create_user(email, password, first_name, middle_name, last_name)
            .await
            .map_err(|e| DatabaseError::QueryError {
                context: e.to_string(),
            })
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<User>, DatabaseError> {
        self.db
            .get_user(id)
            .await
            .map_err(|e| DatabaseError::QueryError {
                context: e.to_string(),
            })
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<User>, DatabaseError> {
        self.db
            .get_user_by_email(email)
            .await
            .map_err(|e| DatabaseError::QueryError {
                context: e.to_string(),
            })
    }

    async fn update(&self, id: i64, update: &UserUpdate) -> Result<(), DatabaseError> {
        self.db
            .update_user(id, update)
            .await
            .map_err(|e| DatabaseError::QueryError {
                context: e.to_string(),
            })
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, DatabaseError> {
        self.db
            .delete_user(id)
            .await
            .map_err(|e| DatabaseError::QueryError {
                context: e.to_string(),
            })
    }

    async fn get_all(&self) -> Result<Vec<User>, DatabaseError> {
        self.db
            .get_all_users()
            .await
            .map_err(|e| DatabaseError::QueryError {
                context: e.to_string(),
            })
    }
}
