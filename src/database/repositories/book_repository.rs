// ABOUTME: Book catalog repository implementation
// ABOUTME: Wraps the database manager and maps storage faults to DatabaseError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Biblio Server Contributors

use async_trait::async_trait;
use serde_json::Value;

use super::BookRepository;
use crate::database::{Database, DatabaseError};
use crate::models::{Book, BookUpdate};

/// SQLite implementation of `BookRepository`
pub struct BookRepositoryImpl {
    db: Database,
}

impl BookRepositoryImpl {
    /// Create a new `BookRepository` with the given database handle
    #[must_use]
    pub const fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BookRepository for BookRepositoryImpl {
    async fn create(
        &self,
        name: &str,
        description: &str,
        count: Option<i64>,
        author_ids: Option<&[i64]>,
    ) -> Result<Option<Book>, DatabaseError> {
        self.db
            .create_book(name, description, count, author_ids)
            .await
            .map_err(|e| DatabaseError::QueryError {
                context: e.to_string(),
            })
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Book>, DatabaseError> {
        self.db
            .get_book(id)
            .await
            .map_err(|e| DatabaseError::QueryError {
                context: e.to_string(),
            })
    }

    async fn update(&self, id: i64, update: &BookUpdate) -> Result<Option<Book>, DatabaseError> {
        self.db
            .update_book(id, update)
            .await
            .map_err(|e| DatabaseError::QueryError {
                context: e.to_string(),
            })
    }

    async fn add_authors(&self, id: i64, author_ids: &[i64]) -> Result<(), DatabaseError> {
        self.db
            .add_book_authors(id, author_ids)
            .await
            .map_err(|e| DatabaseError::QueryError {
                context: e.to_string(),
            })
    }

    async fn remove_authors(&self, id: i64, author_ids: &[i64]) -> Result<(), DatabaseError> {
        self.db
            .remove_book_authors(id, author_ids)
            .await
            .map_err(|e| DatabaseError::QueryError {
                context: e.to_string(),
            })
    }

    async fn to_dict(&self, book: &Book) -> Result<Value, DatabaseError> {
        self.db
            .book_to_dict(book)
            .await
            .map_err(|e| DatabaseError::QueryError {
                context: e.to_string(),
            })
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, DatabaseError> {
        self.db
            .delete_book(id)
            .await
            .map_err(|e| DatabaseError::QueryError {
                context: e.to_string(),
            })
    }

    async fn get_all(&self) -> Result<Vec<Book>, DatabaseError> {
        self.db
            .get_all_books()
            .await
            .map_err(|e| DatabaseError::QueryError {
                context: e.to_string(),
            })
    }
}
