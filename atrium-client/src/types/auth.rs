//! Sign-in and credential types

use serde::{Deserialize, Serialize};

use crate::types::User;

/// Sign-in request body
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Successful sign-in response
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SignInResponse {
    /// Bearer token for subsequent requests
    pub token: String,
    pub user: User,
}

/// Password change request for the signed-in account
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}
