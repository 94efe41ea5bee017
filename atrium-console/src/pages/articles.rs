//! Articles screen

use crate::list::ListState;
use crate::notify::Notifier;
use crate::pages::{failure_text, PageError};
use atrium_client::{ApiClient, Article, ArticleInput};
use std::sync::Arc;

pub struct ArticlesPage {
    client: Arc<ApiClient>,
    notifier: Notifier,
    pub list: ListState<Article>,
}

impl ArticlesPage {
    pub fn new(client: Arc<ApiClient>, notifier: Notifier, page_size: usize) -> Self {
        Self {
            client,
            notifier,
            list: ListState::new(page_size),
        }
    }

    /// Fetch the full list from the backend
    pub async fn load(&mut self) -> Result<(), PageError> {
        let articles = self.client.list_articles().await?;
        self.list.set_items(articles);
        Ok(())
    }

    /// Publish a new article, then reload the list
    pub async fn create(&mut self, input: ArticleInput) -> Result<(), PageError> {
        match self.client.create_article(&input).await {
            Ok(_) => {
                self.notifier.success("Article published").await;
                self.load().await
            }
            Err(e) => {
                self.notifier.error(failure_text("Publish article", &e)).await;
                Err(e.into())
            }
        }
    }

    /// Replace an article's editable fields, then reload the list
    pub async fn update(&mut self, id: &str, input: ArticleInput) -> Result<(), PageError> {
        match self.client.update_article(id, &input).await {
            Ok(_) => {
                self.notifier.success("Article updated").await;
                self.load().await
            }
            Err(e) => {
                self.notifier.error(failure_text("Update article", &e)).await;
                Err(e.into())
            }
        }
    }

    /// Delete an article. Without confirmation nothing is sent; the
    /// return value says whether the delete went out.
    pub async fn remove(&mut self, id: &str, confirmed: bool) -> Result<bool, PageError> {
        if !confirmed {
            return Ok(false);
        }

        match self.client.delete_article(id).await {
            Ok(()) => {
                self.notifier.success("Article deleted").await;
                self.load().await?;
                Ok(true)
            }
            Err(e) => {
                self.notifier.error(failure_text("Delete article", &e)).await;
                Err(e.into())
            }
        }
    }
}
