//! The user record as served by the data source.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A user's role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Administrator.
    Admin,
    /// Regular member.
    #[default]
    Member,
}

impl Role {
    /// Every role, in display order.
    pub const ALL: [Role; 2] = [Role::Admin, Role::Member];

    /// The lowercase wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Member => "member",
        }
    }

    /// The other role.
    pub fn toggled(self) -> Role {
        match self {
            Role::Admin => Role::Member,
            Role::Member => Role::Admin,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Role::Admin => "Admin",
            Role::Member => "Member",
        })
    }
}

/// Returned when a string names no role.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown role {0:?}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "member" => Ok(Role::Member),
            _ => Err(UnknownRole(s.to_string())),
        }
    }
}

/// One user. `id` is unique and never changes while the record is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Stable identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Role.
    pub role: Role,
}

impl Record {
    /// Creates a record.
    pub fn new(id: i64, name: impl Into<String>, email: impl Into<String>, role: Role) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            role,
        }
    }

    /// The string-valued fields, in column order.
    pub fn text_fields(&self) -> [&str; 3] {
        [&self.name, &self.email, self.role.as_str()]
    }

    /// Case-insensitive substring match against every string field.
    ///
    /// `needle` must already be lowercase; an empty needle matches everything.
    pub fn matches(&self, needle: &str) -> bool {
        self.text_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

/// An editable column of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// The name column.
    Name,
    /// The email column.
    Email,
    /// The role column.
    Role,
}

impl Field {
    /// Editable fields in column order.
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Role];

    /// The field after this one, wrapping around.
    pub fn next(self) -> Field {
        match self {
            Field::Name => Field::Email,
            Field::Email => Field::Role,
            Field::Role => Field::Name,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Role => "Role",
        })
    }
}
