//! Popup carousel manager
//!
//! The portal popup cycles through a handful of images whose order is
//! server state. This screen uploads, deletes, and reorders them. A
//! reorder sends the complete path sequence, first slot to last, so the
//! backend never has to merge partial moves.

use crate::notify::Notifier;
use crate::pages::{failure_text, PageError};
use crate::uploads::{check_upload, UploadKind};
use atrium_client::{ApiClient, FilePart, PopupImage};
use std::sync::Arc;
use tracing::warn;

pub struct PopupManager {
    client: Arc<ApiClient>,
    notifier: Notifier,
    images: Vec<PopupImage>,
}

impl PopupManager {
    pub fn new(client: Arc<ApiClient>, notifier: Notifier) -> Self {
        Self {
            client,
            notifier,
            images: Vec::new(),
        }
    }

    /// Images in display order, first slot first
    pub fn images(&self) -> &[PopupImage] {
        &self.images
    }

    /// Paths in display order, the exact sequence a save sends
    pub fn order(&self) -> Vec<String> {
        self.images.iter().map(|i| i.path.clone()).collect()
    }

    pub async fn load(&mut self) -> Result<(), PageError> {
        let images = self.client.list_popup_images().await?;
        self.images = images;
        Ok(())
    }

    /// Upload new images; the paths the server returns take the front
    /// slots, ahead of everything already in the carousel.
    ///
    /// Every file is gated before the first byte goes out; one bad file
    /// fails the whole batch.
    pub async fn upload(&mut self, parts: Vec<FilePart>) -> Result<(), PageError> {
        for part in &parts {
            if let Err(e) = check_upload(UploadKind::Image, part) {
                self.notifier.error(e.to_string()).await;
                return Err(e.into());
            }
        }

        match self.client.upload_popup_images(&parts).await {
            Ok(mut uploaded) => {
                uploaded.extend(self.images.drain(..));
                self.images = uploaded;
                self.notifier.success("Images uploaded").await;
                Ok(())
            }
            Err(e) => {
                self.notifier.error(failure_text("Upload images", &e)).await;
                Err(e.into())
            }
        }
    }

    /// Delete one image by path after confirmation, then reload
    pub async fn remove(&mut self, path: &str, confirmed: bool) -> Result<bool, PageError> {
        if !confirmed {
            return Ok(false);
        }

        match self.client.delete_popup_image(path).await {
            Ok(()) => {
                self.notifier.success("Image deleted").await;
                self.load().await?;
                Ok(true)
            }
            Err(e) => {
                self.notifier.error(failure_text("Delete image", &e)).await;
                Err(e.into())
            }
        }
    }

    /// Move the image at `from` into slot `to` and persist the whole
    /// order.
    ///
    /// The move is remove-then-insert, not a swap: everything between
    /// the two slots shifts one step. `[a, b, c]` with the last image
    /// moved to the front becomes `[c, a, b]`. Out-of-range or
    /// same-slot moves are ignored.
    ///
    /// When the save fails the reordered list stays on screen; the
    /// server keeps its previous order until a later save succeeds.
    pub async fn move_image(&mut self, from: usize, to: usize) -> Result<(), PageError> {
        if from == to || from >= self.images.len() || to >= self.images.len() {
            return Ok(());
        }

        let image = self.images.remove(from);
        self.images.insert(to, image);

        let order = self.order();
        match self.client.save_popup_order(&order).await {
            Ok(()) => {
                self.notifier.success("Carousel order saved").await;
                Ok(())
            }
            Err(e) => {
                warn!("Carousel order save failed: {}", e);
                self.notifier
                    .error(failure_text("Save carousel order", &e))
                    .await;
                Err(e.into())
            }
        }
    }

    #[cfg(test)]
    fn with_images(client: Arc<ApiClient>, notifier: Notifier, paths: &[&str]) -> Self {
        Self {
            client,
            notifier,
            images: paths
                .iter()
                .map(|p| PopupImage {
                    path: p.to_string(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atrium_client::ApiConfig;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn manager(server: &MockServer, paths: &[&str]) -> PopupManager {
        let client = Arc::new(ApiClient::new(ApiConfig {
            base_url: server.uri(),
            ..Default::default()
        }));
        PopupManager::with_images(client, Notifier::new(), paths)
    }

    #[tokio::test]
    async fn test_move_to_front_shifts_the_rest_right() {
        let server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/api/popup-images/order"))
            .and(body_json(json!({"images": ["c.png", "a.png", "b.png"]})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "saved"})))
            .expect(1)
            .mount(&server)
            .await;

        let mut popup = manager(&server, &["a.png", "b.png", "c.png"]);
        popup.move_image(2, 0).await.expect("save order");

        assert_eq!(popup.order(), vec!["c.png", "a.png", "b.png"]);
    }

    #[tokio::test]
    async fn test_move_down_is_not_a_swap() {
        let server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/api/popup-images/order"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "saved"})))
            .mount(&server)
            .await;

        let mut popup = manager(&server, &["a.png", "b.png", "c.png", "d.png"]);
        popup.move_image(0, 2).await.expect("save order");

        // a slides past b and c; nothing trades places pairwise
        assert_eq!(popup.order(), vec!["b.png", "c.png", "a.png", "d.png"]);
    }

    #[tokio::test]
    async fn test_uploaded_images_take_the_front_slots() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/popup-images"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!([
                {"path": "new1.png"},
                {"path": "new2.png"}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let mut popup = manager(&server, &["old.png"]);
        let parts = vec![
            FilePart::new("new1.png", "image/png", vec![1]),
            FilePart::new("new2.png", "image/png", vec![2]),
        ];
        popup.upload(parts).await.expect("upload");

        assert_eq!(popup.order(), vec!["new1.png", "new2.png", "old.png"]);
        // The upload was the only request; no refetch happens
        let requests = server.received_requests().await.expect("recorded");
        assert_eq!(requests.len(), 1);
    }

    #[tokio::test]
    async fn test_out_of_range_move_is_ignored() {
        let server = MockServer::start().await;
        // No mock mounted: a request here would 404 and fail the call

        let mut popup = manager(&server, &["a.png", "b.png"]);
        popup.move_image(5, 0).await.expect("no-op");
        popup.move_image(0, 5).await.expect("no-op");
        popup.move_image(1, 1).await.expect("no-op");

        assert_eq!(popup.order(), vec!["a.png", "b.png"]);
        assert!(server.received_requests().await.expect("recorded").is_empty());
    }

    #[tokio::test]
    async fn test_failed_save_keeps_local_order() {
        let server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/api/popup-images/order"))
            .respond_with(
                ResponseTemplate::new(500).set_body_json(json!({"error": "disk full"})),
            )
            .mount(&server)
            .await;

        let mut popup = manager(&server, &["a.png", "b.png", "c.png"]);
        let err = popup.move_image(2, 0).await.expect_err("save fails");

        assert!(matches!(err, PageError::Api(_)));
        // No rollback: the moved order stays until a later save lands
        assert_eq!(popup.order(), vec!["c.png", "a.png", "b.png"]);
    }
}
