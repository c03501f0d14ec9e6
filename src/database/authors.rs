// ABOUTME: Author catalog database operations
// ABOUTME: Schema-validated creation, lookups, net-no-op updates on violation, deletion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Biblio Server Contributors

use anyhow::Result;
use sqlx::Row;
use tracing::{debug, info, warn};

use super::Database;
use crate::models::{Author, AuthorUpdate};

impl Database {
    /// Create the authors table
    pub(super) async fn migrate_authors(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS authors (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL DEFAULT '',
                surname TEXT NOT NULL DEFAULT '',
                patronymic TEXT NOT NULL DEFAULT ''
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Create an author
    ///
    /// All fields are validated against the length bound before anything is
    /// written; a violation yields `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn create_author(
        &self,
        name: &str,
        surname: &str,
        patronymic: &str,
    ) -> Result<Option<Author>> {
        if !Author::fields_valid(name, surname, patronymic) {
            warn!("rejected author creation: field too long");
            return Ok(None);
        }

        let id = sqlx::query("INSERT INTO authors (name, surname, patronymic) VALUES ($1, $2, $3)")
            .bind(name)
            .bind(surname)
            .bind(patronymic)
            .execute(&self.pool)
            .await?
            .last_insert_rowid();

        info!(author_id = id, "created author");
        self.get_author(id).await
    }

    /// Get an author by id
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn get_author(&self, author_id: i64) -> Result<Option<Author>> {
        debug!(author_id, "looking up author by id");
        let row = sqlx::query("SELECT id, name, surname, patronymic FROM authors WHERE id = $1")
            .bind(author_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|row| Self::row_to_author(&row)))
    }

    /// Apply the provided fields, re-validating the full record
    ///
    /// On a validation violation nothing is persisted and the stored row is
    /// returned unchanged; the result always reflects persisted state.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn update_author(
        &self,
        author_id: i64,
        update: &AuthorUpdate,
    ) -> Result<Option<Author>> {
        let Some(current) = self.get_author(author_id).await? else {
            return Ok(None);
        };

        let name = update.name.as_deref().unwrap_or(&current.name);
        let surname = update.surname.as_deref().unwrap_or(&current.surname);
        let patronymic = update.patronymic.as_deref().unwrap_or(&current.patronymic);

        if !Author::fields_valid(name, surname, patronymic) {
            warn!(author_id, "rejected author update: field too long, keeping stored values");
            return Ok(Some(current));
        }

        sqlx::query("UPDATE authors SET name = $2, surname = $3, patronymic = $4 WHERE id = $1")
            .bind(author_id)
            .bind(name)
            .bind(surname)
            .bind(patronymic)
            .execute(&self.pool)
            .await?;

        self.get_author(author_id).await
    }

    /// Delete an author by id; true exactly once per existing id
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn delete_author(&self, author_id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM authors WHERE id = $1")
            .bind(author_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Get all authors ordered by id
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn get_all_authors(&self) -> Result<Vec<Author>> {
        let rows = sqlx::query("SELECT id, name, surname, patronymic FROM authors ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.iter().map(Self::row_to_author).collect())
    }

    fn row_to_author(row: &sqlx::sqlite::SqliteRow) -> Author {
        Author {
            id: row.get("id"),
            name: row.get("name"),
            surname: row.get("surname"),
            patronymic: row.get("patronymic"),
        }
    }
}
