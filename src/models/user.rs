// ABOUTME: User account model with role enumeration and JSON rendering
// ABOUTME: Defines User, UserRole, and the UserUpdate change set
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Biblio Server Contributors

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use anyhow::bail;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Maximum length of each name part, in characters
pub const MAX_NAME_LEN: usize = 20;

/// User role for the permission system
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Regular account, may browse and borrow
    #[default]
    Visitor,
    /// Administrative account
    Admin,
}

impl UserRole {
    /// Integer code stored in the users table
    #[must_use]
    pub const fn code(self) -> i64 {
        match self {
            Self::Visitor => 0,
            Self::Admin => 1,
        }
    }

    /// Decode from the stored integer code
    #[must_use]
    pub const fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::Visitor),
            1 => Some(Self::Admin),
            _ => None,
        }
    }

    /// Lowercase name used in API payloads
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Visitor => "visitor",
            Self::Admin => "admin",
        }
    }
}

impl Display for UserRole {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "visitor" => Ok(Self::Visitor),
            "admin" => Ok(Self::Admin),
            _ => bail!("invalid user role: {s}"),
        }
    }
}

/// A registered account in the user directory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Surrogate row id
    pub id: i64,
    /// Unique address used for identification
    pub email: String,
    /// Opaque credential; hashing is an external collaborator's concern
    pub password: String,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub role: UserRole,
    /// New accounts start inactive
    pub is_active: bool,
    /// Unix seconds
    pub created_at: i64,
    /// Unix seconds, refreshed on every update
    pub updated_at: i64,
}

impl User {
    /// Minimal shape check: an address must contain both `@` and `.`
    #[must_use]
    pub fn email_is_valid(email: &str) -> bool {
        email.contains('@') && email.contains('.')
    }

    /// Name parts are bounded; an absent part always passes
    #[must_use]
    pub fn name_part_ok(part: Option<&str>) -> bool {
        part.map_or(true, |p| p.chars().count() <= MAX_NAME_LEN)
    }

    /// Lowercase role name, `"visitor"` or `"admin"`
    #[must_use]
    pub fn role_name(&self) -> &'static str {
        self.role.as_str()
    }

    /// JSON rendering for the web-facing collaborator; omits the credential
    #[must_use]
    pub fn to_dict(&self) -> Value {
        json!({
            "id": self.id,
            "first_name": self.first_name,
            "middle_name": self.middle_name,
            "last_name": self.last_name,
            "email": self.email,
            "created_at": self.created_at,
            "updated_at": self.updated_at,
            "role": self.role.code(),
            "is_active": self.is_active,
        })
    }
}

impl Display for User {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "User(id={})", self.id)
    }
}

/// Change set for `update_user`; `None` leaves the stored field untouched
#[derive(Debug, Clone, Default)]
pub struct UserUpdate {
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub password: Option<String>,
    pub role: Option<UserRole>,
    pub is_active: Option<bool>,
}
