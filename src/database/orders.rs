// ABOUTME: Order ledger database operations
// ABOUTME: Transactional loan creation with the single-outstanding-loan invariant
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Biblio Server Contributors

use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::Row;
use tracing::{debug, info, warn};

use super::{is_unique_violation, Database};
use crate::models::{Order, OrderUpdate};

impl Database {
    /// Create the orders table
    ///
    /// The partial unique index is the invariant backstop: at most one
    /// outstanding order (end_at IS NULL) may exist per book.
    pub(super) async fn migrate_orders(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS orders (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
                book_id INTEGER NOT NULL REFERENCES books(id) ON DELETE CASCADE,
                created_at DATETIME NOT NULL,
                end_at DATETIME,
                plated_end_at DATETIME NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE UNIQUE INDEX IF NOT EXISTS idx_orders_outstanding_book
            ON orders(book_id) WHERE end_at IS NULL
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_orders_user ON orders(user_id)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Create a loan for a book
    ///
    /// Returns `Ok(None)` if the user or book row does not exist, or if an
    /// outstanding order already exists for the book. The checks and the
    /// insert run in one transaction; a concurrent writer that slips past
    /// the check fails on the partial unique index and is reported the same
    /// way.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn create_order(
        &self,
        user_id: i64,
        book_id: i64,
        plated_end_at: DateTime<Utc>,
    ) -> Result<Option<Order>> {
        let mut tx = self.pool.begin().await?;

        let user_exists: Option<i64> = sqlx::query_scalar("SELECT id FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_optional(&mut *tx)
            .await?;
        if user_exists.is_none() {
            warn!(user_id, "rejected order creation: no such user");
            return Ok(None);
        }

        let book_exists: Option<i64> = sqlx::query_scalar("SELECT id FROM books WHERE id = $1")
            .bind(book_id)
            .fetch_optional(&mut *tx)
            .await?;
        if book_exists.is_none() {
            warn!(book_id, "rejected order creation: no such book");
            return Ok(None);
        }

        let outstanding: Option<i64> =
            sqlx::query_scalar("SELECT id FROM orders WHERE book_id = $1 AND end_at IS NULL")
                .bind(book_id)
                .fetch_optional(&mut *tx)
                .await?;
        if outstanding.is_some() {
            warn!(book_id, "rejected order creation: book already checked out");
            return Ok(None);
        }

        let created_at = Utc::now();
        let insert = sqlx::query(
            r"
            INSERT INTO orders (user_id, book_id, created_at, plated_end_at)
            VALUES ($1, $2, $3, $4)
            ",
        )
        .bind(user_id)
        .bind(book_id)
        .bind(created_at)
        .bind(plated_end_at)
        .execute(&mut *tx)
        .await;

        let id = match insert {
            Ok(result) => result.last_insert_rowid(),
            Err(err) if is_unique_violation(&err) => {
                warn!(book_id, "rejected order creation: book already checked out");
                return Ok(None);
            }
            Err(err) => return Err(err.into()),
        };

        tx.commit().await?;

        info!(order_id = id, user_id, book_id, "created order");
        self.get_order(id).await
    }

    /// Get an order by id
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn get_order(&self, order_id: i64) -> Result<Option<Order>> {
        debug!(order_id, "looking up order by id");
        let row = sqlx::query(
            r"
            SELECT id, user_id, book_id, created_at, end_at, plated_end_at
            FROM orders WHERE id = $1
            ",
        )
        .bind(order_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|row| Self::row_to_order(&row)))
    }

    /// Set whichever of the deadline and return time is provided
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn update_order(&self, order_id: i64, update: &OrderUpdate) -> Result<()> {
        sqlx::query(
            r"
            UPDATE orders SET
                plated_end_at = COALESCE($2, plated_end_at),
                end_at = COALESCE($3, end_at)
            WHERE id = $1
            ",
        )
        .bind(order_id)
        .bind(update.plated_end_at)
        .bind(update.end_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Get all orders ordered by id
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn get_all_orders(&self) -> Result<Vec<Order>> {
        let rows = sqlx::query(
            r"
            SELECT id, user_id, book_id, created_at, end_at, plated_end_at
            FROM orders ORDER BY id
            ",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(Self::row_to_order).collect())
    }

    /// All orders whose book has not been returned yet
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn get_not_returned_orders(&self) -> Result<Vec<Order>> {
        let rows = sqlx::query(
            r"
            SELECT id, user_id, book_id, created_at, end_at, plated_end_at
            FROM orders WHERE end_at IS NULL ORDER BY id
            ",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(Self::row_to_order).collect())
    }

    /// Delete an order by id; true exactly once per existing id
    ///
    /// Deletion has no side effects on the book's copy count.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn delete_order(&self, order_id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM orders WHERE id = $1")
            .bind(order_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    fn row_to_order(row: &sqlx::sqlite::SqliteRow) -> Order {
        Order {
            id: row.get("id"),
            user_id: row.get("user_id"),
            book_id: row.get("book_id"),
            created_at: row.get("created_at"),
            end_at: row.get("end_at"),
            plated_end_at: row.get("plated_end_at"),
        }
    }
}
