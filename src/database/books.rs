// ABOUTME: Book catalog database operations
// ABOUTME: Creation with author attachment, partial updates, association management
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Biblio Server Contributors

use anyhow::Result;
use serde_json::Value;
use sqlx::Row;
use tracing::{debug, info, warn};

use super::Database;
use crate::models::book::DEFAULT_COUNT;
use crate::models::{Book, BookUpdate};

impl Database {
    /// Create the books and book_authors tables
    pub(super) async fn migrate_books(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS books (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL DEFAULT '',
                description TEXT NOT NULL DEFAULT '',
                count INTEGER NOT NULL DEFAULT 10
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS book_authors (
                book_id INTEGER NOT NULL REFERENCES books(id) ON DELETE CASCADE,
                author_id INTEGER NOT NULL REFERENCES authors(id) ON DELETE CASCADE,
                PRIMARY KEY (book_id, author_id)
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_book_authors_author ON book_authors(author_id)",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Create a book, optionally attaching an initial author set
    ///
    /// The name bound is validated before the row is written; association
    /// writes happen only after the base row persists. A missing `count`
    /// defaults to [`DEFAULT_COUNT`].
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails, including when an
    /// attached author id does not exist.
    pub async fn create_book(
        &self,
        name: &str,
        description: &str,
        count: Option<i64>,
        author_ids: Option<&[i64]>,
    ) -> Result<Option<Book>> {
        if !Book::name_ok(name) {
            warn!("rejected book creation: name too long");
            return Ok(None);
        }

        let id = sqlx::query("INSERT INTO books (name, description, count) VALUES ($1, $2, $3)")
            .bind(name)
            .bind(description)
            .bind(count.unwrap_or(DEFAULT_COUNT))
            .execute(&self.pool)
            .await?
            .last_insert_rowid();

        if let Some(author_ids) = author_ids {
            self.add_book_authors(id, author_ids).await?;
        }

        info!(book_id = id, "created book");
        self.get_book(id).await
    }

    /// Get a book by id
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn get_book(&self, book_id: i64) -> Result<Option<Book>> {
        debug!(book_id, "looking up book by id");
        let row = sqlx::query("SELECT id, name, description, count FROM books WHERE id = $1")
            .bind(book_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|row| Self::row_to_book(&row)))
    }

    /// Apply the provided fields and return the reloaded row
    ///
    /// No re-validation is applied on update.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn update_book(&self, book_id: i64, update: &BookUpdate) -> Result<Option<Book>> {
        if self.get_book(book_id).await?.is_none() {
            return Ok(None);
        }

        sqlx::query(
            r"
            UPDATE books SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                count = COALESCE($4, count)
            WHERE id = $1
            ",
        )
        .bind(book_id)
        .bind(update.name.as_deref())
        .bind(update.description.as_deref())
        .bind(update.count)
        .execute(&self.pool)
        .await?;

        self.get_book(book_id).await
    }

    /// Link authors to a book; already-linked authors are skipped
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails, including when an
    /// author id does not exist.
    pub async fn add_book_authors(&self, book_id: i64, author_ids: &[i64]) -> Result<()> {
        for &author_id in author_ids {
            sqlx::query("INSERT OR IGNORE INTO book_authors (book_id, author_id) VALUES ($1, $2)")
                .bind(book_id)
                .bind(author_id)
                .execute(&self.pool)
                .await?;
        }
        Ok(())
    }

    /// Unlink authors from a book
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn remove_book_authors(&self, book_id: i64, author_ids: &[i64]) -> Result<()> {
        for &author_id in author_ids {
            sqlx::query("DELETE FROM book_authors WHERE book_id = $1 AND author_id = $2")
                .bind(book_id)
                .bind(author_id)
                .execute(&self.pool)
                .await?;
        }
        Ok(())
    }

    /// Ids of the authors currently linked to a book
    ///
    /// Queried per call rather than cached, so the result always reflects
    /// the current association state.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn get_book_author_ids(&self, book_id: i64) -> Result<Vec<i64>> {
        let ids = sqlx::query_scalar(
            "SELECT author_id FROM book_authors WHERE book_id = $1 ORDER BY author_id",
        )
        .bind(book_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(ids)
    }

    /// JSON rendering of a book with its current author-id list
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn book_to_dict(&self, book: &Book) -> Result<Value> {
        let author_ids = self.get_book_author_ids(book.id).await?;
        Ok(book.to_dict(&author_ids))
    }

    /// Delete a book by id; association rows cascade, authors persist
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn delete_book(&self, book_id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(book_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Get all books ordered by id
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn get_all_books(&self) -> Result<Vec<Book>> {
        let rows = sqlx::query("SELECT id, name, description, count FROM books ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.iter().map(Self::row_to_book).collect())
    }

    fn row_to_book(row: &sqlx::sqlite::SqliteRow) -> Book {
        Book {
            id: row.get("id"),
            name: row.get("name"),
            description: row.get("description"),
            count: row.get("count"),
        }
    }
}
