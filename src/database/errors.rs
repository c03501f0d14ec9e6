// ABOUTME: Structured error types for the repository seam
// ABOUTME: Maps storage faults into variants the web-framework collaborator can match on
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Biblio Server Contributors

use thiserror::Error;

/// Errors surfaced by the repository traits
///
/// Expected domain conditions (validation failures, not-found, business-rule
/// violations) are values, not errors; these variants cover storage faults
/// only.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// The database could not be reached or opened
    #[error("database connection failed: {context}")]
    ConnectionError {
        /// Underlying failure description
        context: String,
    },

    /// A query failed to execute
    #[error("database query failed: {context}")]
    QueryError {
        /// Underlying failure description
        context: String,
    },

    /// Schema bootstrap failed
    #[error("database migration failed: {context}")]
    MigrationError {
        /// Underlying failure description
        context: String,
    },
}
