// ABOUTME: Repository trait definitions for the library entities
// ABOUTME: Per-entity seams handed to the web-framework collaborator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Biblio Server Contributors

//! Per-entity repository traits over the database manager. Each trait has a
//! SQLite implementation wrapping [`Database`](super::Database); storage
//! faults cross this boundary as [`DatabaseError`].

mod author_repository;
mod book_repository;
mod order_repository;
mod user_repository;

pub use author_repository::AuthorRepositoryImpl;
pub use book_repository::BookRepositoryImpl;
pub use order_repository::OrderRepositoryImpl;
pub use user_repository::UserRepositoryImpl;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;

use super::DatabaseError;
use crate::models::{
    Author, AuthorUpdate, Book, BookUpdate, Order, OrderUpdate, User, UserUpdate,
};

/// User directory operations
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Create an account; `None` on validation failure or duplicate email
    async fn create(
        &self,
        email: &str,
        password: &str,
        first_name: Option<&str>,
        middle_name: Option<&str>,
        last_name: Option<&str>,
    ) -> Result<Option<User>, DatabaseError>;

    /// Look up by id
    async fn get_by_id(&self, id: i64) -> Result<Option<User>, DatabaseError>;

    /// Look up by email
    async fn get_by_email(&self, email: &str) -> Result<Option<User>, DatabaseError>;

    /// Apply the provided fields and refresh `updated_at`
    async fn update(&self, id: i64, update: &UserUpdate) -> Result<(), DatabaseError>;

    /// Delete by id; true exactly once per existing id
    async fn delete_by_id(&self, id: i64) -> Result<bool, DatabaseError>;

    /// All accounts ordered by id
    async fn get_all(&self) -> Result<Vec<User>, DatabaseError>;
}

/// Author catalog operations
#[async_trait]
pub trait AuthorRepository: Send + Sync {
    /// Create an author; `None` on validation failure
    async fn create(
        &self,
        name: &str,
        surname: &str,
        patronymic: &str,
    ) -> Result<Option<Author>, DatabaseError>;

    /// Look up by id
    async fn get_by_id(&self, id: i64) -> Result<Option<Author>, DatabaseError>;

    /// Apply the provided fields; a violating change set is a net no-op
    async fn update(&self, id: i64, update: &AuthorUpdate)
        -> Result<Option<Author>, DatabaseError>;

    /// Delete by id; true exactly once per existing id
    async fn delete_by_id(&self, id: i64) -> Result<bool, DatabaseError>;

    /// All authors ordered by id
    async fn get_all(&self) -> Result<Vec<Author>, DatabaseError>;
}

/// Book catalog operations
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Create a book with an optional initial author set; `None` on
    /// validation failure
    async fn create(
        &self,
        name: &str,
        description: &str,
        count: Option<i64>,
        author_ids: Option<&[i64]>,
    ) -> Result<Option<Book>, DatabaseError>;

    /// Look up by id
    async fn get_by_id(&self, id: i64) -> Result<Option<Book>, DatabaseError>;

    /// Apply the provided fields and return the reloaded row
    async fn update(&self, id: i64, update: &BookUpdate) -> Result<Option<Book>, DatabaseError>;

    /// Link authors to a book
    async fn add_authors(&self, id: i64, author_ids: &[i64]) -> Result<(), DatabaseError>;

    /// Unlink authors from a book
    async fn remove_authors(&self, id: i64, author_ids: &[i64]) -> Result<(), DatabaseError>;

    /// JSON rendering with the current author-id list
    async fn to_dict(&self, book: &Book) -> Result<Value, DatabaseError>;

    /// Delete by id; true exactly once per existing id
    async fn delete_by_id(&self, id: i64) -> Result<bool, DatabaseError>;

    /// All books ordered by id
    async fn get_all(&self) -> Result<Vec<Book>, DatabaseError>;
}

/// Order ledger operations
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Create a loan; `None` if the user or book is missing or the book is
    /// already checked out
    async fn create(
        &self,
        user_id: i64,
        book_id: i64,
        plated_end_at: DateTime<Utc>,
    ) -> Result<Option<Order>, DatabaseError>;

    /// Look up by id
    async fn get_by_id(&self, id: i64) -> Result<Option<Order>, DatabaseError>;

    /// Set whichever of the deadline and return time is provided
    async fn update(&self, id: i64, update: &OrderUpdate) -> Result<(), DatabaseError>;

    /// Delete by id; true exactly once per existing id
    async fn delete_by_id(&self, id: i64) -> Result<bool, DatabaseError>;

    /// All orders ordered by id
    async fn get_all(&self) -> Result<Vec<Order>, DatabaseError>;

    /// Orders whose book has not been returned yet
    async fn get_not_returned(&self) -> Result<Vec<Order>, DatabaseError>;
}
