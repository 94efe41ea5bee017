//! Announcements screen
//!
//! Announcements can carry one attached document. The attachment is
//! uploaded first; the returned file id goes into the announcement
//! payload.

use crate::list::ListState;
use crate::notify::Notifier;
use crate::pages::{failure_text, PageError};
use crate::uploads::{check_upload, UploadKind};
use atrium_client::{Announcement, AnnouncementInput, ApiClient, FilePart, StoredFile};
use std::sync::Arc;

pub struct AnnouncementsPage {
    client: Arc<ApiClient>,
    notifier: Notifier,
    pub list: ListState<Announcement>,
}

impl AnnouncementsPage {
    pub fn new(client: Arc<ApiClient>, notifier: Notifier, page_size: usize) -> Self {
        Self {
            client,
            notifier,
            list: ListState::new(page_size),
        }
    }

    pub async fn load(&mut self) -> Result<(), PageError> {
        let announcements = self.client.list_announcements().await?;
        self.list.set_items(announcements);
        Ok(())
    }

    /// Stage an attachment. The size and type gate runs before any bytes
    /// go over the wire.
    pub async fn upload_attachment(&mut self, part: FilePart) -> Result<StoredFile, PageError> {
        if let Err(e) = check_upload(UploadKind::Document, &part) {
            self.notifier.error(e.to_string()).await;
            return Err(e.into());
        }

        match self.client.upload_file(&part).await {
            Ok(stored) => Ok(stored),
            Err(e) => {
                self.notifier
                    .error(failure_text("Upload attachment", &e))
                    .await;
                Err(e.into())
            }
        }
    }

    /// Post an announcement, then reload the list
    pub async fn create(&mut self, input: AnnouncementInput) -> Result<(), PageError> {
        match self.client.create_announcement(&input).await {
            Ok(_) => {
                self.notifier.success("Announcement posted").await;
                self.load().await
            }
            Err(e) => {
                self.notifier
                    .error(failure_text("Post announcement", &e))
                    .await;
                Err(e.into())
            }
        }
    }

    /// Replace an announcement, then reload the list
    pub async fn update(&mut self, id: &str, input: AnnouncementInput) -> Result<(), PageError> {
        match self.client.update_announcement(id, &input).await {
            Ok(_) => {
                self.notifier.success("Announcement updated").await;
                self.load().await
            }
            Err(e) => {
                self.notifier
                    .error(failure_text("Update announcement", &e))
                    .await;
                Err(e.into())
            }
        }
    }

    /// Delete an announcement after confirmation
    pub async fn remove(&mut self, id: &str, confirmed: bool) -> Result<bool, PageError> {
        if !confirmed {
            return Ok(false);
        }

        match self.client.delete_announcement(id).await {
            Ok(()) => {
                self.notifier.success("Announcement deleted").await;
                self.load().await?;
                Ok(true)
            }
            Err(e) => {
                self.notifier
                    .error(failure_text("Delete announcement", &e))
                    .await;
                Err(e.into())
            }
        }
    }
}
