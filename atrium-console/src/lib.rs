//! Administrative console and portal front for the Atrium intranet
//!
//! Headless application state over the `atrium-client` SDK: sign-in
//! session and role gates, per-screen list state with client-side search
//! and paging, upload gates, toasts, the guided tour, and the popup
//! carousel manager. The two binaries (`atrium-console`, `atrium-portal`) are
//! thin shells over these modules.

pub mod audit;
pub mod cli;
pub mod config;
pub mod layout;
pub mod list;
pub mod notify;
pub mod pages;
pub mod paging;
pub mod portal;
pub mod session;
pub mod store;
pub mod tour;
pub mod uploads;

pub use audit::{ActionLog, ActionRecord, Outcome};
pub use config::Args;
pub use list::{ListState, Searchable};
pub use notify::{Notice, NoticeLevel, Notifier, DISMISS_AFTER};
pub use pages::PageError;
pub use paging::Pager;
pub use portal::{Carousel, PortalFeed, PortalHome};
pub use session::{AdminArea, Session};
pub use store::Store;
pub use tour::{TourGuide, TourState, TourStop};
pub use uploads::{check_upload, UploadError, UploadKind, MAX_DOCUMENT_BYTES, MAX_VIDEO_BYTES};
