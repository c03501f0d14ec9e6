// ABOUTME: Order ledger repository implementation
// ABOUTME: Wraps the database manager and maps storage faults to DatabaseError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Biblio Server Contributors

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::OrderRepository;
use crate::database::{Database, DatabaseError};
use crate::models::{Order, OrderUpdate};

/// SQLite implementation of `OrderRepository`
pub struct OrderRepositoryImpl {
    db: Database,
}

impl OrderRepositoryImpl {
    /// Create a new `OrderRepository` with the given database handle
    #[must_use]
    pub const fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderRepository for OrderRepositoryImpl {
    async fn create(
        &self,
        user_id: i64,
        book_id: i64,
        plated_end_at: DateTime<Utc>,
    ) -> Result<Option<Order>, DatabaseError> {
        self.db
            .create_order(user_id, book_id, plated_end_at)
            .await
            .map_err(|e| DatabaseError::QueryError {
                context: e.to_string(),
            })
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Order>, DatabaseError> {
        self.db
            .get_order(id)
            .await
            .map_err(|e| DatabaseError::QueryError {
                context: e.to_string(),
            })
    }

    async fn update(&self, id: i64, update: &OrderUpdate) -> Result<(), DatabaseError> {
        self.db
            .update_order(id, update)
            .await
            .map_err(|e| DatabaseError::QueryError {
                context: e.to_string(),
            })
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, DatabaseError> {
        self.db
            .delete_order(id)
            .await
            .map_err(|e| DatabaseError::QueryError {
                context: e.to_string(),
            })
    }

    async fn get_all(&self) -> Result<Vec<Order>, DatabaseError> {
        self.db
            .get_all_orders()
            .await
            .map_err(|e| DatabaseError::QueryError {
                context: e.to_string(),
            })
    }

    async fn get_not_returned(&self) -> Result<Vec<Order>, DatabaseError> {
        self.db
            .get_not_returned_orders()
            .await
            .map_err(|e| DatabaseError::QueryError {
                context: e.to_string(),
            })
    }
}
