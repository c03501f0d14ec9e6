// ABOUTME: Book catalog model with author associations
// ABOUTME: Defines Book and the BookUpdate change set
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Biblio Server Contributors

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Maximum length of a book name, in characters
pub const MAX_NAME_LEN: usize = 128;

/// Copy count assigned when creation does not specify one
pub const DEFAULT_COUNT: i64 = 10;

/// A book record; associated authors live in the `book_authors` table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Book {
    /// Surrogate row id
    pub id: i64,
    pub name: String,
    pub description: String,
    pub count: i64,
}

impl Book {
    /// Name bound check applied before any write
    #[must_use]
    pub fn name_ok(name: &str) -> bool {
        name.chars().count() <= MAX_NAME_LEN
    }

    /// JSON rendering for the web-facing collaborator; the caller supplies
    /// the current association state (see `Database::book_to_dict`)
    #[must_use]
    pub fn to_dict(&self, author_ids: &[i64]) -> Value {
        json!({
            "id": self.id,
            "name": self.name,
            "description": self.description,
            "count": self.count,
            "authors": author_ids,
        })
    }
}

impl Display for Book {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Book(id={})", self.id)
    }
}

/// Change set for `update_book`; `None` leaves the stored field untouched
#[derive(Debug, Clone, Default)]
pub struct BookUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub count: Option<i64>,
}
