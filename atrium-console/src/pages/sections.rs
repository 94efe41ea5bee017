//! Portal landing sections screen

use crate::list::ListState;
use crate::notify::Notifier;
use crate::pages::{failure_text, PageError};
use atrium_client::{ApiClient, Section, SectionInput};
use std::sync::Arc;

pub struct SectionsPage {
    client: Arc<ApiClient>,
    notifier: Notifier,
    pub list: ListState<Section>,
}

impl SectionsPage {
    pub fn new(client: Arc<ApiClient>, notifier: Notifier, page_size: usize) -> Self {
        Self {
            client,
            notifier,
            list: ListState::new(page_size),
        }
    }

    pub async fn load(&mut self) -> Result<(), PageError> {
        let sections = self.client.list_sections().await?;
        self.list.set_items(sections);
        Ok(())
    }

    pub async fn create(&mut self, input: SectionInput) -> Result<(), PageError> {
        match self.client.create_section(&input).await {
            Ok(_) => {
                self.notifier.success("Section created").await;
                self.load().await
            }
            Err(e) => {
                self.notifier.error(failure_text("Create section", &e)).await;
                Err(e.into())
            }
        }
    }

    pub async fn update(&mut self, id: &str, input: SectionInput) -> Result<(), PageError> {
        match self.client.update_section(id, &input).await {
            Ok(_) => {
                self.notifier.success("Section updated").await;
                self.load().await
            }
            Err(e) => {
                self.notifier.error(failure_text("Update section", &e)).await;
                Err(e.into())
            }
        }
    }

    pub async fn remove(&mut self, id: &str, confirmed: bool) -> Result<bool, PageError> {
        if !confirmed {
            return Ok(false);
        }

        match self.client.delete_section(id).await {
            Ok(()) => {
                self.notifier.success("Section deleted").await;
                self.load().await?;
                Ok(true)
            }
            Err(e) => {
                self.notifier.error(failure_text("Delete section", &e)).await;
                Err(e.into())
            }
        }
    }
}
