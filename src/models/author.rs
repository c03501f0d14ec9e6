// ABOUTME: Author catalog model with length-bounded name fields
// ABOUTME: Defines Author and the AuthorUpdate change set
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Biblio Server Contributors

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Maximum length of each author field, in characters
pub const MAX_FIELD_LEN: usize = 20;

/// An author record; all fields may be blank
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Author {
    /// Surrogate row id
    pub id: i64,
    pub name: String,
    pub surname: String,
    pub patronymic: String,
}

impl Author {
    /// Single field bound check
    #[must_use]
    pub fn field_ok(value: &str) -> bool {
        value.chars().count() <= MAX_FIELD_LEN
    }

    /// Full schema check applied before any write
    #[must_use]
    pub fn fields_valid(name: &str, surname: &str, patronymic: &str) -> bool {
        Self::field_ok(name) && Self::field_ok(surname) && Self::field_ok(patronymic)
    }

    /// JSON rendering for the web-facing collaborator
    #[must_use]
    pub fn to_dict(&self) -> Value {
        json!({
            "id": self.id,
            "name": self.name,
            "surname": self.surname,
            "patronymic": self.patronymic,
        })
    }
}

impl Display for Author {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Author(id={})", self.id)
    }
}

/// Change set for `update_author`; `None` leaves the stored field untouched
#[derive(Debug, Clone, Default)]
pub struct AuthorUpdate {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub patronymic: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_bounds() {
        assert!(Author::field_ok(""));
        assert!(Author::field_ok(&"x".repeat(20)));
        assert!(!Author::field_ok(&"x".repeat(21)));
        assert!(Author::fields_valid("Leo", "Tolstoy", ""));
        assert!(!Author::fields_valid("Leo", &"x".repeat(21), ""));
    }

    #[test]
    fn to_dict_shape() {
        let author = Author {
            id: 8,
            name: "fn".into(),
            surname: "mn".into(),
            patronymic: "ln".into(),
        };
        assert_eq!(
            author.to_dict(),
            json!({"id": 8, "name": "fn", "surname": "mn", "patronymic": "ln"})
        );
        assert_eq!(author.to_string(), "Author(id=8)");
    }
}
