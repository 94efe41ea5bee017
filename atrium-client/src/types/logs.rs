//! Server-side log records
//!
//! All four kinds are written by the backend; the console only reads and
//! deletes them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sign-in visit record
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Visit {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub ip: Option<String>,
    #[serde(default)]
    pub user_agent: Option<String>,
    pub visited_at: DateTime<Utc>,
}

/// Per-page hit counter entry
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PageVisit {
    pub id: String,
    /// Portal page path, e.g. "/articles"
    pub page: String,
    #[serde(default)]
    pub visitor: Option<String>,
    pub visited_at: DateTime<Utc>,
}

/// Live socket session opened against the realtime gateway
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UserSocket {
    pub id: String,
    pub username: String,
    pub socket_id: String,
    pub connected_at: DateTime<Utc>,
}

/// Message left through the portal contact box
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub sender: String,
    pub body: String,
    pub sent_at: DateTime<Utc>,
}
