// ABOUTME: User directory database operations
// ABOUTME: Validated account creation, lookups by id and email, partial updates, deletion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Biblio Server Contributors

use anyhow::{anyhow, Result};
use chrono::Utc;
use sqlx::Row;
use tracing::{debug, info, warn};

use super::{is_unique_violation, Database};
use crate::models::{User, UserRole, UserUpdate};

impl Database {
    /// Create the users table
    pub(super) async fn migrate_users(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                email TEXT NOT NULL UNIQUE,
                password TEXT NOT NULL,
                first_name TEXT,
                middle_name TEXT,
                last_name TEXT,
                role INTEGER NOT NULL DEFAULT 0,
                is_active BOOLEAN NOT NULL DEFAULT 0,
                created_at INTEGER NOT NULL,
                updated_at INTEGER NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_users_email ON users(email)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Create a user account
    ///
    /// Returns `Ok(None)` if a name part exceeds the length bound, the email
    /// lacks `@` or `.`, or the email is already registered. The password is
    /// stored as provided.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn create_user(
        &self,
        email: &str,
        password: &str,
        first_name: Option<&str>,
        middle_name: Option<&str>,
        last_name: Option<&str>,
    ) -> Result<Option<User>> {
        if !User::email_is_valid(email) {
            warn!(email = %email, "rejected user creation: malformed email");
            return Ok(None);
        }
        if !User::name_part_ok(first_name)
            || !User::name_part_ok(middle_name)
            || !User::name_part_ok(last_name)
        {
            warn!(email = %email, "rejected user creation: name part too long");
            return Ok(None);
        }
        if self.get_user_by_email(email).await?.is_some() {
            warn!(email = %email, "rejected user creation: email already registered");
            return Ok(None);
        }

        let now = Utc::now().timestamp();
        let insert = sqlx::query(
            r"
            INSERT INTO users (email, password, first_name, middle_name, last_name,
                               role, is_active, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ",
        )
        .bind(email)
        .bind(password)
        .bind(first_name)
        .bind(middle_name)
        .bind(last_name)
        .bind(UserRole::Visitor.code())
        .bind(false)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await;

        let id = match insert {
            Ok(result) => result.last_insert_rowid(),
            // Lost a concurrent race on the UNIQUE email column
            Err(err) if is_unique_violation(&err) => {
                warn!(email = %email, "rejected user creation: email already registered");
                return Ok(None);
            }
            Err(err) => return Err(err.into()),
        };

        info!(user_id = id, "created user account");
        self.get_user(id).await
    }

    /// Get a user by id
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn get_user(&self, user_id: i64) -> Result<Option<User>> {
        debug!(user_id, "looking up user by id");
        let row = sqlx::query(
            r"
            SELECT id, email, password, first_name, middle_name, last_name,
                   role, is_active, created_at, updated_at
            FROM users WHERE id = $1
            ",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|row| Self::row_to_user(&row)).transpose()
    }

    /// Get a user by email
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        debug!(email = %email, "looking up user by email");
        let row = sqlx::query(
            r"
            SELECT id, email, password, first_name, middle_name, last_name,
                   role, is_active, created_at, updated_at
            FROM users WHERE email = $1
            ",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|row| Self::row_to_user(&row)).transpose()
    }

    /// Apply the provided fields and refresh `updated_at`
    ///
    /// Unlike author and book updates there is no validation gate; the
    /// change set is persisted unconditionally.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn update_user(&self, user_id: i64, update: &UserUpdate) -> Result<()> {
        sqlx::query(
            r"
            UPDATE users SET
                first_name = COALESCE($2, first_name),
                middle_name = COALESCE($3, middle_name),
                last_name = COALESCE($4, last_name),
                password = COALESCE($5, password),
                role = COALESCE($6, role),
                is_active = COALESCE($7, is_active),
                updated_at = $8
            WHERE id = $1
            ",
        )
        .bind(user_id)
        .bind(update.first_name.as_deref())
        .bind(update.middle_name.as_deref())
        .bind(update.last_name.as_deref())
        .bind(update.password.as_deref())
        .bind(update.role.map(UserRole::code))
        .bind(update.is_active)
        .bind(Utc::now().timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Delete a user by id; true exactly once per existing id
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn delete_user(&self, user_id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Get all users ordered by id
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn get_all_users(&self) -> Result<Vec<User>> {
        let rows = sqlx::query(
            r"
            SELECT id, email, password, first_name, middle_name, last_name,
                   role, is_active, created_at, updated_at
            FROM users ORDER BY id
            ",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::row_to_user).collect()
    }

    /// Convert a database row to a `User`
    fn row_to_user(row: &sqlx::sqlite::SqliteRow) -> Result<User> {
        let role_code: i64 = row.get("role");
        let role = UserRole::from_code(role_code)
            .ok_or_else(|| anyhow!("unknown role code in users table: {role_code}"))?;

        Ok(User {
            id: row.get("id"),
            email: row.get("email"),
            password: row.get("password"),
            first_name: row.get("first_name"),
            middle_name: row.get("middle_name"),
            last_name: row.get("last_name"),
            role,
            is_active: row.get("is_active"),
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        })
    }
}
