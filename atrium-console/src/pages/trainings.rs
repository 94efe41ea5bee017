//! Training courses screen
//!
//! Courses are built around one uploaded video. The video gate runs
//! before upload; anything over the limit never leaves the console.

use crate::list::ListState;
use crate::notify::Notifier;
use crate::pages::{failure_text, PageError};
use crate::uploads::{check_upload, UploadKind};
use atrium_client::{ApiClient, FilePart, Training, TrainingInput};
use std::sync::Arc;

pub struct TrainingsPage {
    client: Arc<ApiClient>,
    notifier: Notifier,
    pub list: ListState<Training>,
}

impl TrainingsPage {
    pub fn new(client: Arc<ApiClient>, notifier: Notifier, page_size: usize) -> Self {
        Self {
            client,
            notifier,
            list: ListState::new(page_size),
        }
    }

    pub async fn load(&mut self) -> Result<(), PageError> {
        let trainings = self.client.list_trainings().await?;
        self.list.set_items(trainings);
        Ok(())
    }

    /// Upload the video and create the course in one go, then reload
    pub async fn publish(
        &mut self,
        title: &str,
        description: Option<&str>,
        video: FilePart,
    ) -> Result<(), PageError> {
        if let Err(e) = check_upload(UploadKind::Video, &video) {
            self.notifier.error(e.to_string()).await;
            return Err(e.into());
        }

        let stored = match self.client.upload_file(&video).await {
            Ok(stored) => stored,
            Err(e) => {
                self.notifier.error(failure_text("Upload video", &e)).await;
                return Err(e.into());
            }
        };

        let input = TrainingInput {
            title: title.to_string(),
            description: description.map(|d| d.to_string()),
            video_id: stored.id,
        };
        match self.client.create_training(&input).await {
            Ok(_) => {
                self.notifier.success("Training published").await;
                self.load().await
            }
            Err(e) => {
                self.notifier.error(failure_text("Publish training", &e)).await;
                Err(e.into())
            }
        }
    }

    /// Replace a course's title and description, keeping its video
    pub async fn update(&mut self, id: &str, input: TrainingInput) -> Result<(), PageError> {
        match self.client.update_training(id, &input).await {
            Ok(_) => {
                self.notifier.success("Training updated").await;
                self.load().await
            }
            Err(e) => {
                self.notifier.error(failure_text("Update training", &e)).await;
                Err(e.into())
            }
        }
    }

    pub async fn remove(&mut self, id: &str, confirmed: bool) -> Result<bool, PageError> {
        if !confirmed {
            return Ok(false);
        }

        match self.client.delete_training(id).await {
            Ok(()) => {
                self.notifier.success("Training deleted").await;
                self.load().await?;
                Ok(true)
            }
            Err(e) => {
                self.notifier.error(failure_text("Delete training", &e)).await;
                Err(e.into())
            }
        }
    }
}
