//! IT knowledge base screen

use crate::list::ListState;
use crate::notify::Notifier;
use crate::pages::{failure_text, PageError};
use atrium_client::{ApiClient, Knowledge, KnowledgeInput};
use std::sync::Arc;

pub struct KnowledgePage {
    client: Arc<ApiClient>,
    notifier: Notifier,
    pub list: ListState<Knowledge>,
}

impl KnowledgePage {
    pub fn new(client: Arc<ApiClient>, notifier: Notifier, page_size: usize) -> Self {
        Self {
            client,
            notifier,
            list: ListState::new(page_size),
        }
    }

    pub async fn load(&mut self) -> Result<(), PageError> {
        let posts = self.client.list_knowledge().await?;
        self.list.set_items(posts);
        Ok(())
    }

    pub async fn create(&mut self, input: KnowledgeInput) -> Result<(), PageError> {
        match self.client.create_knowledge(&input).await {
            Ok(_) => {
                self.notifier.success("Knowledge post published").await;
                self.load().await
            }
            Err(e) => {
                self.notifier.error(failure_text("Publish post", &e)).await;
                Err(e.into())
            }
        }
    }

    pub async fn update(&mut self, id: &str, input: KnowledgeInput) -> Result<(), PageError> {
        match self.client.update_knowledge(id, &input).await {
            Ok(_) => {
                self.notifier.success("Knowledge post updated").await;
                self.load().await
            }
            Err(e) => {
                self.notifier.error(failure_text("Update post", &e)).await;
                Err(e.into())
            }
        }
    }

    pub async fn remove(&mut self, id: &str, confirmed: bool) -> Result<bool, PageError> {
        if !confirmed {
            return Ok(false);
        }

        match self.client.delete_knowledge(id).await {
            Ok(()) => {
                self.notifier.success("Knowledge post deleted").await;
                self.load().await?;
                Ok(true)
            }
            Err(e) => {
                self.notifier.error(failure_text("Delete post", &e)).await;
                Err(e.into())
            }
        }
    }
}
