//! Sign-in session and role gates
//!
//! Holds the signed-in user and answers "which console areas may this
//! role open". The gates only decide what the console shows; the backend
//! runs its own checks on every call.

use crate::store::Store;
use atrium_client::{ApiClient, ApiError, Role, User};
use std::sync::Arc;
use tokio::sync::watch;

/// Console area an admin role opens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminArea {
    /// Announcements, activities, people content
    Hr,
    /// Knowledge base, security bulletins, system logs
    It,
}

impl std::fmt::Display for AdminArea {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdminArea::Hr => write!(f, "HR"),
            AdminArea::It => write!(f, "IT"),
        }
    }
}

/// Signed-in state shared by every page
#[derive(Clone)]
pub struct Session {
    client: Arc<ApiClient>,
    user: Arc<Store<Option<User>>>,
}

impl Session {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            client,
            user: Arc::new(Store::default()),
        }
    }

    /// Client this session authenticates
    pub fn client(&self) -> Arc<ApiClient> {
        self.client.clone()
    }

    /// Sign in; on success the client keeps the bearer token
    pub async fn sign_in(&self, username: &str, password: &str) -> Result<User, ApiError> {
        let signed_in = self.client.sign_in(username, password).await?;
        self.user.set(Some(signed_in.user.clone()));
        Ok(signed_in.user)
    }

    /// Sign out server-side, then forget the local user.
    ///
    /// A failed call leaves the session as it was, so the caller can
    /// surface the error and retry.
    pub async fn sign_out(&self) -> Result<(), ApiError> {
        self.client.sign_out().await?;
        self.user.set(None);
        Ok(())
    }

    /// Change the signed-in account's password
    pub async fn change_password(&self, current: &str, new: &str) -> Result<(), ApiError> {
        self.client.change_password(current, new).await
    }

    pub fn current_user(&self) -> Option<User> {
        self.user.get()
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.get().is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.user.get().map(|u| u.role)
    }

    pub fn is_admin(&self) -> bool {
        self.role() == Some(Role::Admin)
    }

    /// Console areas the current role may open
    pub fn areas(&self) -> Vec<AdminArea> {
        match self.role() {
            Some(Role::Admin) => vec![AdminArea::Hr, AdminArea::It],
            Some(Role::Hr) => vec![AdminArea::Hr],
            Some(Role::It) => vec![AdminArea::It],
            Some(Role::Staff) | None => Vec::new(),
        }
    }

    pub fn can_enter(&self, area: AdminArea) -> bool {
        self.areas().contains(&area)
    }

    /// Watch sign-in and sign-out transitions
    pub fn subscribe(&self) -> watch::Receiver<Option<User>> {
        self.user.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atrium_client::ApiConfig;
    use chrono::Utc;

    fn session_as(role: Option<Role>) -> Session {
        let client = Arc::new(ApiClient::new(ApiConfig::default()));
        let session = Session::new(client);
        if let Some(role) = role {
            session.user.set(Some(User {
                id: "u1".into(),
                username: "test".into(),
                full_name: "Test User".into(),
                department: None,
                role,
                created_at: Utc::now(),
            }));
        }
        session
    }

    #[test]
    fn test_admin_opens_both_areas() {
        let session = session_as(Some(Role::Admin));
        assert!(session.is_admin());
        assert!(session.can_enter(AdminArea::Hr));
        assert!(session.can_enter(AdminArea::It));
    }

    #[test]
    fn test_hr_opens_only_hr() {
        let session = session_as(Some(Role::Hr));
        assert!(session.can_enter(AdminArea::Hr));
        assert!(!session.can_enter(AdminArea::It));
    }

    #[test]
    fn test_it_opens_only_it() {
        let session = session_as(Some(Role::It));
        assert!(!session.can_enter(AdminArea::Hr));
        assert!(session.can_enter(AdminArea::It));
    }

    #[test]
    fn test_staff_and_anonymous_open_nothing() {
        for session in [session_as(Some(Role::Staff)), session_as(None)] {
            assert!(session.areas().is_empty());
            assert!(!session.can_enter(AdminArea::Hr));
            assert!(!session.can_enter(AdminArea::It));
        }
    }
}
