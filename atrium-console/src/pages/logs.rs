//! Log screens: visits, page hits, socket sessions, contact messages
//!
//! The backend writes these records; the console only lists and deletes
//! them. All four screens share the same shape.

use crate::list::ListState;
use crate::notify::Notifier;
use crate::pages::{failure_text, PageError};
use atrium_client::{ApiClient, Message, PageVisit, UserSocket, Visit};
use std::sync::Arc;

pub struct VisitsPage {
    client: Arc<ApiClient>,
    notifier: Notifier,
    pub list: ListState<Visit>,
}

impl VisitsPage {
    pub fn new(client: Arc<ApiClient>, notifier: Notifier, page_size: usize) -> Self {
        Self {
            client,
            notifier,
            list: ListState::new(page_size),
        }
    }

    pub async fn load(&mut self) -> Result<(), PageError> {
        let visits = self.client.list_visits().await?;
        self.list.set_items(visits);
        Ok(())
    }

    pub async fn remove(&mut self, id: &str, confirmed: bool) -> Result<bool, PageError> {
        if !confirmed {
            return Ok(false);
        }

        match self.client.delete_visit(id).await {
            Ok(()) => {
                self.notifier.success("Visit record deleted").await;
                self.load().await?;
                Ok(true)
            }
            Err(e) => {
                self.notifier.error(failure_text("Delete visit record", &e)).await;
                Err(e.into())
            }
        }
    }
}

pub struct PageVisitsPage {
    client: Arc<ApiClient>,
    notifier: Notifier,
    pub list: ListState<PageVisit>,
}

impl PageVisitsPage {
    pub fn new(client: Arc<ApiClient>, notifier: Notifier, page_size: usize) -> Self {
        Self {
            client,
            notifier,
            list: ListState::new(page_size),
        }
    }

    pub async fn load(&mut self) -> Result<(), PageError> {
        let hits = self.client.list_page_visits().await?;
        self.list.set_items(hits);
        Ok(())
    }

    pub async fn remove(&mut self, id: &str, confirmed: bool) -> Result<bool, PageError> {
        if !confirmed {
            return Ok(false);
        }

        match self.client.delete_page_visit(id).await {
            Ok(()) => {
                self.notifier.success("Page hit deleted").await;
                self.load().await?;
                Ok(true)
            }
            Err(e) => {
                self.notifier.error(failure_text("Delete page hit", &e)).await;
                Err(e.into())
            }
        }
    }
}

pub struct SocketsPage {
    client: Arc<ApiClient>,
    notifier: Notifier,
    pub list: ListState<UserSocket>,
}

impl SocketsPage {
    pub fn new(client: Arc<ApiClient>, notifier: Notifier, page_size: usize) -> Self {
        Self {
            client,
            notifier,
            list: ListState::new(page_size),
        }
    }

    pub async fn load(&mut self) -> Result<(), PageError> {
        let sockets = self.client.list_user_sockets().await?;
        self.list.set_items(sockets);
        Ok(())
    }

    pub async fn remove(&mut self, id: &str, confirmed: bool) -> Result<bool, PageError> {
        if !confirmed {
            return Ok(false);
        }

        match self.client.delete_user_socket(id).await {
            Ok(()) => {
                self.notifier.success("Socket session deleted").await;
                self.load().await?;
                Ok(true)
            }
            Err(e) => {
                self.notifier
                    .error(failure_text("Delete socket session", &e))
                    .await;
                Err(e.into())
            }
        }
    }
}

pub struct MessagesPage {
    client: Arc<ApiClient>,
    notifier: Notifier,
    pub list: ListState<Message>,
}

impl MessagesPage {
    pub fn new(client: Arc<ApiClient>, notifier: Notifier, page_size: usize) -> Self {
        Self {
            client,
            notifier,
            list: ListState::new(page_size),
        }
    }

    pub async fn load(&mut self) -> Result<(), PageError> {
        let messages = self.client.list_messages().await?;
        self.list.set_items(messages);
        Ok(())
    }

    pub async fn remove(&mut self, id: &str, confirmed: bool) -> Result<bool, PageError> {
        if !confirmed {
            return Ok(false);
        }

        match self.client.delete_message(id).await {
            Ok(()) => {
                self.notifier.success("Message deleted").await;
                self.load().await?;
                Ok(true)
            }
            Err(e) => {
                self.notifier.error(failure_text("Delete message", &e)).await;
                Err(e.into())
            }
        }
    }
}
