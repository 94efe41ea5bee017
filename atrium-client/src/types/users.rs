//! User account types
//!
//! Accounts carry one of four roles. The two admin roles are scoped to a
//! console area (HR or IT); `admin` sees both.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Access role attached to an account
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Portal-only account, no console access
    Staff,
    /// HR console area
    Hr,
    /// IT console area
    It,
    /// Full console access
    Admin,
}

impl Role {
    /// Whether this role opens any admin console area
    pub fn is_console(&self) -> bool {
        *self != Role::Staff
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Role::Staff => "staff",
            Role::Hr => "hr",
            Role::It => "it",
            Role::Admin => "admin",
        };
        write!(f, "{}", s)
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "staff" => Ok(Role::Staff),
            "hr" => Ok(Role::Hr),
            "it" => Ok(Role::It),
            "admin" => Ok(Role::Admin),
            other => Err(format!("unknown role: {}", other)),
        }
    }
}

/// User account as returned by the API
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub full_name: String,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default = "default_role")]
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

fn default_role() -> Role {
    Role::Staff
}

/// Payload for creating or replacing an account.
///
/// `password` is required on create and optional on update; leaving it out
/// keeps the stored credential untouched.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UserInput {
    pub username: String,
    pub full_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}
