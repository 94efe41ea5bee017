//! User management screen
//!
//! Present in both console areas. Creating an account needs a password;
//! updates leave the stored credential alone unless a new one is given.

use crate::list::ListState;
use crate::notify::Notifier;
use crate::pages::{failure_text, PageError};
use atrium_client::{ApiClient, User, UserInput};
use std::sync::Arc;

pub struct UsersPage {
    client: Arc<ApiClient>,
    notifier: Notifier,
    pub list: ListState<User>,
}

impl UsersPage {
    pub fn new(client: Arc<ApiClient>, notifier: Notifier, page_size: usize) -> Self {
        Self {
            client,
            notifier,
            list: ListState::new(page_size),
        }
    }

    pub async fn load(&mut self) -> Result<(), PageError> {
        let users = self.client.list_users().await?;
        self.list.set_items(users);
        Ok(())
    }

    /// Create an account, then reload the list
    pub async fn create(&mut self, input: UserInput) -> Result<(), PageError> {
        if input.password.as_deref().unwrap_or("").is_empty() {
            let message = "A password is required for new accounts".to_string();
            self.notifier.error(message.clone()).await;
            return Err(PageError::Invalid(message));
        }

        match self.client.create_user(&input).await {
            Ok(_) => {
                self.notifier.success("Account created").await;
                self.load().await
            }
            Err(e) => {
                self.notifier.error(failure_text("Create account", &e)).await;
                Err(e.into())
            }
        }
    }

    /// Replace an account's editable fields, then reload the list
    pub async fn update(&mut self, id: &str, input: UserInput) -> Result<(), PageError> {
        match self.client.update_user(id, &input).await {
            Ok(_) => {
                self.notifier.success("Account updated").await;
                self.load().await
            }
            Err(e) => {
                self.notifier.error(failure_text("Update account", &e)).await;
                Err(e.into())
            }
        }
    }

    /// Delete an account after confirmation
    pub async fn remove(&mut self, id: &str, confirmed: bool) -> Result<bool, PageError> {
        if !confirmed {
            return Ok(false);
        }

        match self.client.delete_user(id).await {
            Ok(()) => {
                self.notifier.success("Account deleted").await;
                self.load().await?;
                Ok(true)
            }
            Err(e) => {
                self.notifier.error(failure_text("Delete account", &e)).await;
                Err(e.into())
            }
        }
    }
}
