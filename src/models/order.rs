// ABOUTME: Borrowing order model linking a user and a book
// ABOUTME: Defines Order and the OrderUpdate change set
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Biblio Server Contributors

use std::fmt::{Display, Formatter, Result as FmtResult};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// A loan linking one user and one book
///
/// An order with `end_at` unset is outstanding: the book has not yet been
/// returned, and no second order may be created for that book.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Order {
    /// Surrogate row id
    pub id: i64,
    pub user_id: i64,
    pub book_id: i64,
    /// Set at creation time
    pub created_at: DateTime<Utc>,
    /// Actual return time; `None` while the book is checked out
    pub end_at: Option<DateTime<Utc>>,
    /// Planned return deadline
    pub plated_end_at: DateTime<Utc>,
}

impl Order {
    /// True once the book has been returned
    #[must_use]
    pub fn is_returned(&self) -> bool {
        self.end_at.is_some()
    }

    /// JSON rendering for the web-facing collaborator
    #[must_use]
    pub fn to_dict(&self) -> Value {
        json!({
            "id": self.id,
            "user": self.user_id,
            "book": self.book_id,
            "created_at": self.created_at.to_rfc3339(),
            "end_at": self.end_at.map(|t| t.to_rfc3339()),
            "plated_end_at": self.plated_end_at.to_rfc3339(),
        })
    }
}

impl Display for Order {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Order(id={})", self.id)
    }
}

/// Change set for `update_order`; `None` leaves the stored field untouched
///
/// A provided value always wins, so any timestamp is expressible; clearing
/// `end_at` back to outstanding is not.
#[derive(Debug, Clone, Default)]
pub struct OrderUpdate {
    pub plated_end_at: Option<DateTime<Utc>>,
    pub end_at: Option<DateTime<Utc>>,
}
