//! Public portal state
//!
//! Read-only views over what the console publishes: the landing page
//! (sections, quick links, popup carousel) and the searchable content
//! feeds. No sign-in required; the backend serves these to everyone.

use crate::list::ListState;
use atrium_client::{ApiClient, ApiError, Article, Knowledge, Link, PopupImage, Section, SecurityPost};
use std::sync::Arc;

/// Rotating popup carousel
#[derive(Debug, Default)]
pub struct Carousel {
    images: Vec<PopupImage>,
    index: usize,
}

impl Carousel {
    /// Replace the images and rewind to the first slot
    pub fn set_images(&mut self, images: Vec<PopupImage>) {
        self.images = images;
        self.index = 0;
    }

    pub fn images(&self) -> &[PopupImage] {
        &self.images
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Image currently showing
    pub fn current(&self) -> Option<&PopupImage> {
        self.images.get(self.index)
    }

    /// Step to the next image, wrapping at the end
    pub fn advance(&mut self) {
        if self.images.is_empty() {
            return;
        }
        self.index = (self.index + 1) % self.images.len();
    }
}

/// Landing page: sections, quick links, and the popup carousel
pub struct PortalHome {
    client: Arc<ApiClient>,
    pub sections: Vec<Section>,
    pub links: Vec<Link>,
    pub carousel: Carousel,
}

impl PortalHome {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            client,
            sections: Vec::new(),
            links: Vec::new(),
            carousel: Carousel::default(),
        }
    }

    /// Fetch everything the landing page shows
    pub async fn load(&mut self) -> Result<(), ApiError> {
        self.sections = self.client.list_sections().await?;
        self.links = self.client.list_links().await?;
        let images = self.client.list_popup_images().await?;
        self.carousel.set_images(images);
        Ok(())
    }
}

/// Searchable feeds over the three public content kinds
pub struct PortalFeed {
    client: Arc<ApiClient>,
    pub articles: ListState<Article>,
    pub knowledge: ListState<Knowledge>,
    pub security: ListState<SecurityPost>,
}

impl PortalFeed {
    pub fn new(client: Arc<ApiClient>, page_size: usize) -> Self {
        Self {
            client,
            articles: ListState::new(page_size),
            knowledge: ListState::new(page_size),
            security: ListState::new(page_size),
        }
    }

    /// Fetch all three feeds
    pub async fn load(&mut self) -> Result<(), ApiError> {
        self.articles.set_items(self.client.list_articles().await?);
        self.knowledge.set_items(self.client.list_knowledge().await?);
        self.security
            .set_items(self.client.list_security_posts().await?);
        Ok(())
    }

    /// Apply one search term across all three feeds
    pub fn search(&mut self, query: &str) {
        self.articles.set_query(query);
        self.knowledge.set_query(query);
        self.security.set_query(query);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(path: &str) -> PopupImage {
        PopupImage {
            path: path.to_string(),
        }
    }

    #[test]
    fn test_carousel_wraps_around() {
        let mut carousel = Carousel::default();
        carousel.set_images(vec![image("a.png"), image("b.png"), image("c.png")]);

        assert_eq!(carousel.current().map(|i| i.path.as_str()), Some("a.png"));

        carousel.advance();
        carousel.advance();
        assert_eq!(carousel.current().map(|i| i.path.as_str()), Some("c.png"));

        carousel.advance();
        assert_eq!(carousel.current().map(|i| i.path.as_str()), Some("a.png"));
    }

    #[test]
    fn test_empty_carousel_shows_nothing() {
        let mut carousel = Carousel::default();
        assert!(carousel.current().is_none());

        carousel.advance();
        assert!(carousel.current().is_none());
    }

    #[test]
    fn test_set_images_rewinds() {
        let mut carousel = Carousel::default();
        carousel.set_images(vec![image("a.png"), image("b.png")]);
        carousel.advance();

        carousel.set_images(vec![image("x.png"), image("y.png")]);
        assert_eq!(carousel.current().map(|i| i.path.as_str()), Some("x.png"));
    }
}
