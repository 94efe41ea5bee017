//! Activities screen
//!
//! Activities carry an optional cover image; the cover is uploaded first
//! and referenced by id.

use crate::list::ListState;
use crate::notify::Notifier;
use crate::pages::{failure_text, PageError};
use crate::uploads::{check_upload, UploadKind};
use atrium_client::{Activity, ActivityInput, ApiClient, FilePart, StoredFile};
use std::sync::Arc;

pub struct ActivitiesPage {
    client: Arc<ApiClient>,
    notifier: Notifier,
    pub list: ListState<Activity>,
}

impl ActivitiesPage {
    pub fn new(client: Arc<ApiClient>, notifier: Notifier, page_size: usize) -> Self {
        Self {
            client,
            notifier,
            list: ListState::new(page_size),
        }
    }

    pub async fn load(&mut self) -> Result<(), PageError> {
        let activities = self.client.list_activities().await?;
        self.list.set_items(activities);
        Ok(())
    }

    /// Upload a cover image for a new or edited activity
    pub async fn upload_cover(&mut self, part: FilePart) -> Result<StoredFile, PageError> {
        if let Err(e) = check_upload(UploadKind::Image, &part) {
            self.notifier.error(e.to_string()).await;
            return Err(e.into());
        }

        match self.client.upload_file(&part).await {
            Ok(stored) => Ok(stored),
            Err(e) => {
                self.notifier.error(failure_text("Upload cover", &e)).await;
                Err(e.into())
            }
        }
    }

    /// Create an activity, then reload the list
    pub async fn create(&mut self, input: ActivityInput) -> Result<(), PageError> {
        match self.client.create_activity(&input).await {
            Ok(_) => {
                self.notifier.success("Activity created").await;
                self.load().await
            }
            Err(e) => {
                self.notifier.error(failure_text("Create activity", &e)).await;
                Err(e.into())
            }
        }
    }

    /// Replace an activity, then reload the list
    pub async fn update(&mut self, id: &str, input: ActivityInput) -> Result<(), PageError> {
        match self.client.update_activity(id, &input).await {
            Ok(_) => {
                self.notifier.success("Activity updated").await;
                self.load().await
            }
            Err(e) => {
                self.notifier.error(failure_text("Update activity", &e)).await;
                Err(e.into())
            }
        }
    }

    /// Delete an activity after confirmation
    pub async fn remove(&mut self, id: &str, confirmed: bool) -> Result<bool, PageError> {
        if !confirmed {
            return Ok(false);
        }

        match self.client.delete_activity(id).await {
            Ok(()) => {
                self.notifier.success("Activity deleted").await;
                self.load().await?;
                Ok(true)
            }
            Err(e) => {
                self.notifier.error(failure_text("Delete activity", &e)).await;
                Err(e.into())
            }
        }
    }
}
