//! Wire types for the Atrium intranet API
//!
//! Every struct mirrors the JSON the Node backend sends. Field names are
//! camelCase on the wire; list endpoints return plain arrays and leave
//! paging to the caller.

mod auth;
mod content;
mod files;
mod logs;
mod users;

pub use auth::{ChangePasswordRequest, Credentials, SignInResponse};
pub use content::{
    Activity, ActivityInput, Announcement, AnnouncementInput, Article, ArticleInput, FormDoc,
    FormDocInput, Knowledge, KnowledgeInput, Link, LinkInput, Regulation, RegulationInput,
    SecurityPost, SecurityPostInput, Section, SectionInput, Training, TrainingInput,
};
pub use files::{FilePart, PopupImage, PopupOrderRequest, StoredFile};
pub use logs::{Message, PageVisit, UserSocket, Visit};
pub use users::{Role, User, UserInput};
