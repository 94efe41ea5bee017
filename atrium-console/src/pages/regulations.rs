//! Company regulations screen

use crate::list::ListState;
use crate::notify::Notifier;
use crate::pages::{failure_text, PageError};
use crate::uploads::{check_upload, UploadKind};
use atrium_client::{ApiClient, FilePart, Regulation, RegulationInput};
use std::sync::Arc;

pub struct RegulationsPage {
    client: Arc<ApiClient>,
    notifier: Notifier,
    pub list: ListState<Regulation>,
}

impl RegulationsPage {
    pub fn new(client: Arc<ApiClient>, notifier: Notifier, page_size: usize) -> Self {
        Self {
            client,
            notifier,
            list: ListState::new(page_size),
        }
    }

    pub async fn load(&mut self) -> Result<(), PageError> {
        let regulations = self.client.list_regulations().await?;
        self.list.set_items(regulations);
        Ok(())
    }

    /// Upload the PDF and create the regulation in one go, then reload
    pub async fn publish(&mut self, title: &str, file: FilePart) -> Result<(), PageError> {
        if let Err(e) = check_upload(UploadKind::Document, &file) {
            self.notifier.error(e.to_string()).await;
            return Err(e.into());
        }

        let stored = match self.client.upload_file(&file).await {
            Ok(stored) => stored,
            Err(e) => {
                self.notifier
                    .error(failure_text("Upload regulation", &e))
                    .await;
                return Err(e.into());
            }
        };

        let input = RegulationInput {
            title: title.to_string(),
            file_id: stored.id,
        };
        match self.client.create_regulation(&input).await {
            Ok(_) => {
                self.notifier.success("Regulation published").await;
                self.load().await
            }
            Err(e) => {
                self.notifier
                    .error(failure_text("Publish regulation", &e))
                    .await;
                Err(e.into())
            }
        }
    }

    /// Rename a regulation, keeping its file
    pub async fn rename(&mut self, id: &str, title: &str, file_id: &str) -> Result<(), PageError> {
        let input = RegulationInput {
            title: title.to_string(),
            file_id: file_id.to_string(),
        };

        match self.client.update_regulation(id, &input).await {
            Ok(_) => {
                self.notifier.success("Regulation updated").await;
                self.load().await
            }
            Err(e) => {
                self.notifier
                    .error(failure_text("Update regulation", &e))
                    .await;
                Err(e.into())
            }
        }
    }

    pub async fn remove(&mut self, id: &str, confirmed: bool) -> Result<bool, PageError> {
        if !confirmed {
            return Ok(false);
        }

        match self.client.delete_regulation(id).await {
            Ok(()) => {
                self.notifier.success("Regulation deleted").await;
                self.load().await?;
                Ok(true)
            }
            Err(e) => {
                self.notifier
                    .error(failure_text("Delete regulation", &e))
                    .await;
                Err(e.into())
            }
        }
    }
}
