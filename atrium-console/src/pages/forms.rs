//! Form templates screen
//!
//! A form template is a title over a stored PDF, so publishing is a
//! two-step call: upload the file, create the record with the returned
//! id.

use crate::list::ListState;
use crate::notify::Notifier;
use crate::pages::{failure_text, PageError};
use crate::uploads::{check_upload, UploadKind};
use atrium_client::{ApiClient, FilePart, FormDoc, FormDocInput};
use std::sync::Arc;

pub struct FormsPage {
    client: Arc<ApiClient>,
    notifier: Notifier,
    pub list: ListState<FormDoc>,
}

impl FormsPage {
    pub fn new(client: Arc<ApiClient>, notifier: Notifier, page_size: usize) -> Self {
        Self {
            client,
            notifier,
            list: ListState::new(page_size),
        }
    }

    pub async fn load(&mut self) -> Result<(), PageError> {
        let forms = self.client.list_forms().await?;
        self.list.set_items(forms);
        Ok(())
    }

    /// Upload the PDF and create the template in one go, then reload
    pub async fn publish(&mut self, title: &str, file: FilePart) -> Result<(), PageError> {
        if let Err(e) = check_upload(UploadKind::Document, &file) {
            self.notifier.error(e.to_string()).await;
            return Err(e.into());
        }

        let stored = match self.client.upload_file(&file).await {
            Ok(stored) => stored,
            Err(e) => {
                self.notifier.error(failure_text("Upload form", &e)).await;
                return Err(e.into());
            }
        };

        let input = FormDocInput {
            title: title.to_string(),
            file_id: stored.id,
        };
        match self.client.create_form(&input).await {
            Ok(_) => {
                self.notifier.success("Form template published").await;
                self.load().await
            }
            Err(e) => {
                self.notifier.error(failure_text("Publish form", &e)).await;
                Err(e.into())
            }
        }
    }

    /// Rename a template, keeping its file
    pub async fn rename(&mut self, id: &str, title: &str, file_id: &str) -> Result<(), PageError> {
        let input = FormDocInput {
            title: title.to_string(),
            file_id: file_id.to_string(),
        };

        match self.client.update_form(id, &input).await {
            Ok(_) => {
                self.notifier.success("Form template updated").await;
                self.load().await
            }
            Err(e) => {
                self.notifier.error(failure_text("Update form", &e)).await;
                Err(e.into())
            }
        }
    }

    pub async fn remove(&mut self, id: &str, confirmed: bool) -> Result<bool, PageError> {
        if !confirmed {
            return Ok(false);
        }

        match self.client.delete_form(id).await {
            Ok(()) => {
                self.notifier.success("Form template deleted").await;
                self.load().await?;
                Ok(true)
            }
            Err(e) => {
                self.notifier.error(failure_text("Delete form", &e)).await;
                Err(e.into())
            }
        }
    }
}
