//! Admin console screens
//!
//! Each page owns the list state for one resource and drives the same
//! cycle: call the API, toast the outcome, refetch the whole list after
//! any successful mutation. Failed mutations leave the local list
//! untouched. Destructive calls go out only when the caller has
//! confirmed them.

mod activities;
mod announcements;
mod articles;
mod forms;
mod knowledge;
mod links;
mod logs;
mod popup;
mod regulations;
mod sections;
mod security;
mod trainings;
mod users;

pub use activities::ActivitiesPage;
pub use announcements::AnnouncementsPage;
pub use articles::ArticlesPage;
pub use forms::FormsPage;
pub use knowledge::KnowledgePage;
pub use links::LinksPage;
pub use logs::{MessagesPage, PageVisitsPage, SocketsPage, VisitsPage};
pub use popup::PopupManager;
pub use regulations::RegulationsPage;
pub use sections::SectionsPage;
pub use security::SecurityPage;
pub use trainings::TrainingsPage;
pub use users::UsersPage;

use crate::uploads::UploadError;
use atrium_client::ApiError;
use thiserror::Error;

/// Page operation error
#[derive(Debug, Error)]
pub enum PageError {
    /// Backend call failed
    #[error(transparent)]
    Api(#[from] ApiError),

    /// File rejected before any bytes went out
    #[error(transparent)]
    Upload(#[from] UploadError),

    /// Form input rejected locally
    #[error("{0}")]
    Invalid(String),
}

/// Toast text for a failed call: the server's own message when it sent
/// one, a generic fallback otherwise
pub(crate) fn failure_text(context: &str, err: &ApiError) -> String {
    match err.server_message() {
        Some(message) => format!("{}: {}", context, message),
        None => format!("{} failed", context),
    }
}
