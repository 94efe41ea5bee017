//! Security bulletins screen

use crate::list::ListState;
use crate::notify::Notifier;
use crate::pages::{failure_text, PageError};
use atrium_client::{ApiClient, SecurityPost, SecurityPostInput};
use std::sync::Arc;

pub struct SecurityPage {
    client: Arc<ApiClient>,
    notifier: Notifier,
    pub list: ListState<SecurityPost>,
}

impl SecurityPage {
    pub fn new(client: Arc<ApiClient>, notifier: Notifier, page_size: usize) -> Self {
        Self {
            client,
            notifier,
            list: ListState::new(page_size),
        }
    }

    pub async fn load(&mut self) -> Result<(), PageError> {
        let posts = self.client.list_security_posts().await?;
        self.list.set_items(posts);
        Ok(())
    }

    pub async fn create(&mut self, input: SecurityPostInput) -> Result<(), PageError> {
        match self.client.create_security_post(&input).await {
            Ok(_) => {
                self.notifier.success("Bulletin published").await;
                self.load().await
            }
            Err(e) => {
                self.notifier.error(failure_text("Publish bulletin", &e)).await;
                Err(e.into())
            }
        }
    }

    pub async fn update(&mut self, id: &str, input: SecurityPostInput) -> Result<(), PageError> {
        match self.client.update_security_post(id, &input).await {
            Ok(_) => {
                self.notifier.success("Bulletin updated").await;
                self.load().await
            }
            Err(e) => {
                self.notifier.error(failure_text("Update bulletin", &e)).await;
                Err(e.into())
            }
        }
    }

    pub async fn remove(&mut self, id: &str, confirmed: bool) -> Result<bool, PageError> {
        if !confirmed {
            return Ok(false);
        }

        match self.client.delete_security_post(id).await {
            Ok(()) => {
                self.notifier.success("Bulletin deleted").await;
                self.load().await?;
                Ok(true)
            }
            Err(e) => {
                self.notifier.error(failure_text("Delete bulletin", &e)).await;
                Err(e.into())
            }
        }
    }
}
