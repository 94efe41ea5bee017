//! Portal quick links screen

use crate::list::ListState;
use crate::notify::Notifier;
use crate::pages::{failure_text, PageError};
use atrium_client::{ApiClient, Link, LinkInput};
use std::sync::Arc;

pub struct LinksPage {
    client: Arc<ApiClient>,
    notifier: Notifier,
    pub list: ListState<Link>,
}

impl LinksPage {
    pub fn new(client: Arc<ApiClient>, notifier: Notifier, page_size: usize) -> Self {
        Self {
            client,
            notifier,
            list: ListState::new(page_size),
        }
    }

    pub async fn load(&mut self) -> Result<(), PageError> {
        let links = self.client.list_links().await?;
        self.list.set_items(links);
        Ok(())
    }

    pub async fn create(&mut self, input: LinkInput) -> Result<(), PageError> {
        match self.client.create_link(&input).await {
            Ok(_) => {
                self.notifier.success("Link added").await;
                self.load().await
            }
            Err(e) => {
                self.notifier.error(failure_text("Add link", &e)).await;
                Err(e.into())
            }
        }
    }

    pub async fn update(&mut self, id: &str, input: LinkInput) -> Result<(), PageError> {
        match self.client.update_link(id, &input).await {
            Ok(_) => {
                self.notifier.success("Link updated").await;
                self.load().await
            }
            Err(e) => {
                self.notifier.error(failure_text("Update link", &e)).await;
                Err(e.into())
            }
        }
    }

    pub async fn remove(&mut self, id: &str, confirmed: bool) -> Result<bool, PageError> {
        if !confirmed {
            return Ok(false);
        }

        match self.client.delete_link(id).await {
            Ok(()) => {
                self.notifier.success("Link deleted").await;
                self.load().await?;
                Ok(true)
            }
            Err(e) => {
                self.notifier.error(failure_text("Delete link", &e)).await;
                Err(e.into())
            }
        }
    }
}
