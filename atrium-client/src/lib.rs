//! Rust client SDK for the Atrium intranet API
//!
//! # Example
//!
//! ```rust,no_run
//! use atrium_client::{ApiClient, ApiConfig, ArticleInput};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create client
//! let client = ApiClient::new(ApiConfig {
//!     base_url: "http://localhost:4000".into(),
//!     ..Default::default()
//! });
//!
//! // Sign in; the bearer token is kept for later calls
//! client.sign_in("amara", "s3cret").await?;
//!
//! // Publish an article
//! let article = client
//!     .create_article(&ArticleInput {
//!         title: "Cafeteria hours".into(),
//!         body: "Open 8 to 18 starting Monday.".into(),
//!         tags: vec!["facilities".into()],
//!     })
//!     .await?;
//!
//! println!("published {}", article.id);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod types;

// Re-export main types
pub use client::{ApiClient, ApiConfig};
pub use error::{ApiError, Result};
pub use types::*;
