//! HTTP client for the Atrium intranet API
//!
//! One thin wrapper per backend endpoint. Wrappers never panic: every
//! failure, including non-success statuses, comes back as an [`ApiError`].

use crate::error::{ApiError, Result};
use crate::types::*;
use reqwest::{multipart, Client, Method};
use std::sync::RwLock;
use std::time::Duration;

/// Client configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the backend, without a trailing slash
    pub base_url: String,
    /// Bearer token to start with, if a session already exists
    pub token: Option<String>,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:4000".to_string(),
            token: None,
            timeout_secs: 30,
        }
    }
}

/// HTTP client for the Atrium intranet API
///
/// # Example
///
/// ```rust,no_run
/// use atrium_client::{ApiClient, ApiConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ApiClient::new(ApiConfig {
///     base_url: "http://localhost:4000".into(),
///     ..Default::default()
/// });
///
/// client.sign_in("amara", "s3cret").await?;
/// let articles = client.list_articles().await?;
/// println!("{} articles", articles.len());
/// # Ok(())
/// # }
/// ```
pub struct ApiClient {
    config: ApiConfig,
    client: Client,
    token: RwLock<Option<String>>,
}

impl ApiClient {
    /// Create a new API client
    pub fn new(config: ApiConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to build HTTP client");

        let token = RwLock::new(config.token.clone());
        Self {
            config,
            client,
            token,
        }
    }

    /// Base URL this client talks to
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Replace the bearer token used on subsequent requests
    pub fn set_token(&self, token: impl Into<String>) {
        let mut guard = self.token.write().unwrap_or_else(|e| e.into_inner());
        *guard = Some(token.into());
    }

    /// Drop the bearer token; subsequent requests go out unauthenticated
    pub fn clear_token(&self) {
        let mut guard = self.token.write().unwrap_or_else(|e| e.into_inner());
        *guard = None;
    }

    /// Whether a bearer token is currently held
    pub fn has_token(&self) -> bool {
        let guard = self.token.read().unwrap_or_else(|e| e.into_inner());
        guard.is_some()
    }

    // ==================== Auth API ====================

    /// Sign in and keep the returned token for subsequent requests
    pub async fn sign_in(&self, username: &str, password: &str) -> Result<SignInResponse> {
        let url = format!("{}/api/auth/sign-in", self.config.base_url);
        let body = Credentials {
            username: username.to_string(),
            password: password.to_string(),
        };

        let response = self.client.post(&url).json(&body).send().await?;
        let signed_in: SignInResponse = self.handle_response(response).await?;
        self.set_token(&signed_in.token);
        Ok(signed_in)
    }

    /// Sign out and drop the local token
    pub async fn sign_out(&self) -> Result<()> {
        let url = format!("{}/api/auth/sign-out", self.config.base_url);
        let response = self.request(Method::POST, &url).send().await?;
        self.handle_empty(response).await?;
        self.clear_token();
        Ok(())
    }

    /// Change the password of the signed-in account
    pub async fn change_password(&self, current: &str, new: &str) -> Result<()> {
        let url = format!("{}/api/auth/password", self.config.base_url);
        let body = ChangePasswordRequest {
            current_password: current.to_string(),
            new_password: new.to_string(),
        };

        let response = self.request(Method::PUT, &url).json(&body).send().await?;
        self.handle_empty(response).await
    }

    // ==================== Users API ====================

    /// List all user accounts
    pub async fn list_users(&self) -> Result<Vec<User>> {
        let url = format!("{}/api/users", self.config.base_url);
        let response = self.request(Method::GET, &url).send().await?;
        self.handle_response(response).await
    }

    /// Get a single user account
    pub async fn get_user(&self, id: &str) -> Result<User> {
        let url = format!(
            "{}/api/users/{}",
            self.config.base_url,
            urlencoding::encode(id)
        );
        let response = self.request(Method::GET, &url).send().await?;
        self.handle_response(response).await
    }

    /// Create a user account
    pub async fn create_user(&self, input: &UserInput) -> Result<User> {
        let url = format!("{}/api/users", self.config.base_url);
        let response = self.request(Method::POST, &url).json(input).send().await?;
        self.handle_response(response).await
    }

    /// Replace a user account's editable fields
    pub async fn update_user(&self, id: &str, input: &UserInput) -> Result<User> {
        let url = format!(
            "{}/api/users/{}",
            self.config.base_url,
            urlencoding::encode(id)
        );
        let response = self.request(Method::PUT, &url).json(input).send().await?;
        self.handle_response(response).await
    }

    /// Delete a user account
    pub async fn delete_user(&self, id: &str) -> Result<()> {
        let url = format!(
            "{}/api/users/{}",
            self.config.base_url,
            urlencoding::encode(id)
        );
        let response = self.request(Method::DELETE, &url).send().await?;
        self.handle_empty(response).await
    }

    // ==================== Files API ====================

    /// Upload a file and get back its stored handle
    pub async fn upload_file(&self, part: &FilePart) -> Result<StoredFile> {
        let url = format!("{}/api/files", self.config.base_url);
        let form = multipart::Form::new().part("file", to_part(part)?);

        let response = self
            .request(Method::POST, &url)
            .multipart(form)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Download a stored file's bytes
    pub async fn download_file(&self, id: &str) -> Result<Vec<u8>> {
        let url = format!(
            "{}/api/files/{}",
            self.config.base_url,
            urlencoding::encode(id)
        );

        let response = self.request(Method::GET, &url).send().await?;
        if !response.status().is_success() {
            return Err(self.server_error(response).await);
        }
        Ok(response.bytes().await?.to_vec())
    }

    /// Public URL of a stored file
    pub fn file_url(&self, id: &str) -> String {
        format!(
            "{}/api/files/{}",
            self.config.base_url,
            urlencoding::encode(id)
        )
    }

    // ==================== Announcements API ====================

    /// List announcements, newest first
    pub async fn list_announcements(&self) -> Result<Vec<Announcement>> {
        let url = format!("{}/api/announcements", self.config.base_url);
        let response = self.request(Method::GET, &url).send().await?;
        self.handle_response(response).await
    }

    /// Create an announcement
    pub async fn create_announcement(&self, input: &AnnouncementInput) -> Result<Announcement> {
        let url = format!("{}/api/announcements", self.config.base_url);
        let response = self.request(Method::POST, &url).json(input).send().await?;
        self.handle_response(response).await
    }

    /// Replace an announcement
    pub async fn update_announcement(
        &self,
        id: &str,
        input: &AnnouncementInput,
    ) -> Result<Announcement> {
        let url = format!(
            "{}/api/announcements/{}",
            self.config.base_url,
            urlencoding::encode(id)
        );
        let response = self.request(Method::PUT, &url).json(input).send().await?;
        self.handle_response(response).await
    }

    /// Delete an announcement
    pub async fn delete_announcement(&self, id: &str) -> Result<()> {
        let url = format!(
            "{}/api/announcements/{}",
            self.config.base_url,
            urlencoding::encode(id)
        );
        let response = self.request(Method::DELETE, &url).send().await?;
        self.handle_empty(response).await
    }

    // ==================== Activities API ====================

    /// List activities
    pub async fn list_activities(&self) -> Result<Vec<Activity>> {
        let url = format!("{}/api/activities", self.config.base_url);
        let response = self.request(Method::GET, &url).send().await?;
        self.handle_response(response).await
    }

    /// Create an activity
    pub async fn create_activity(&self, input: &ActivityInput) -> Result<Activity> {
        let url = format!("{}/api/activities", self.config.base_url);
        let response = self.request(Method::POST, &url).json(input).send().await?;
        self.handle_response(response).await
    }

    /// Replace an activity
    pub async fn update_activity(&self, id: &str, input: &ActivityInput) -> Result<Activity> {
        let url = format!(
            "{}/api/activities/{}",
            self.config.base_url,
            urlencoding::encode(id)
        );
        let response = self.request(Method::PUT, &url).json(input).send().await?;
        self.handle_response(response).await
    }

    /// Delete an activity
    pub async fn delete_activity(&self, id: &str) -> Result<()> {
        let url = format!(
            "{}/api/activities/{}",
            self.config.base_url,
            urlencoding::encode(id)
        );
        let response = self.request(Method::DELETE, &url).send().await?;
        self.handle_empty(response).await
    }

    // ==================== Articles API ====================

    /// List articles, newest first
    pub async fn list_articles(&self) -> Result<Vec<Article>> {
        let url = format!("{}/api/articles", self.config.base_url);
        let response = self.request(Method::GET, &url).send().await?;
        self.handle_response(response).await
    }

    /// Create an article
    pub async fn create_article(&self, input: &ArticleInput) -> Result<Article> {
        let url = format!("{}/api/articles", self.config.base_url);
        let response = self.request(Method::POST, &url).json(input).send().await?;
        self.handle_response(response).await
    }

    /// Replace an article
    pub async fn update_article(&self, id: &str, input: &ArticleInput) -> Result<Article> {
        let url = format!(
            "{}/api/articles/{}",
            self.config.base_url,
            urlencoding::encode(id)
        );
        let response = self.request(Method::PUT, &url).json(input).send().await?;
        self.handle_response(response).await
    }

    /// Delete an article
    pub async fn delete_article(&self, id: &str) -> Result<()> {
        let url = format!(
            "{}/api/articles/{}",
            self.config.base_url,
            urlencoding::encode(id)
        );
        let response = self.request(Method::DELETE, &url).send().await?;
        self.handle_empty(response).await
    }

    // ==================== Knowledge API ====================

    /// List IT knowledge posts
    pub async fn list_knowledge(&self) -> Result<Vec<Knowledge>> {
        let url = format!("{}/api/knowledge", self.config.base_url);
        let response = self.request(Method::GET, &url).send().await?;
        self.handle_response(response).await
    }

    /// Create a knowledge post
    pub async fn create_knowledge(&self, input: &KnowledgeInput) -> Result<Knowledge> {
        let url = format!("{}/api/knowledge", self.config.base_url);
        let response = self.request(Method::POST, &url).json(input).send().await?;
        self.handle_response(response).await
    }

    /// Replace a knowledge post
    pub async fn update_knowledge(&self, id: &str, input: &KnowledgeInput) -> Result<Knowledge> {
        let url = format!(
            "{}/api/knowledge/{}",
            self.config.base_url,
            urlencoding::encode(id)
        );
        let response = self.request(Method::PUT, &url).json(input).send().await?;
        self.handle_response(response).await
    }

    /// Delete a knowledge post
    pub async fn delete_knowledge(&self, id: &str) -> Result<()> {
        let url = format!(
            "{}/api/knowledge/{}",
            self.config.base_url,
            urlencoding::encode(id)
        );
        let response = self.request(Method::DELETE, &url).send().await?;
        self.handle_empty(response).await
    }

    // ==================== Security Posts API ====================

    /// List security bulletins
    pub async fn list_security_posts(&self) -> Result<Vec<SecurityPost>> {
        let url = format!("{}/api/security-posts", self.config.base_url);
        let response = self.request(Method::GET, &url).send().await?;
        self.handle_response(response).await
    }

    /// Create a security bulletin
    pub async fn create_security_post(&self, input: &SecurityPostInput) -> Result<SecurityPost> {
        let url = format!("{}/api/security-posts", self.config.base_url);
        let response = self.request(Method::POST, &url).json(input).send().await?;
        self.handle_response(response).await
    }

    /// Replace a security bulletin
    pub async fn update_security_post(
        &self,
        id: &str,
        input: &SecurityPostInput,
    ) -> Result<SecurityPost> {
        let url = format!(
            "{}/api/security-posts/{}",
            self.config.base_url,
            urlencoding::encode(id)
        );
        let response = self.request(Method::PUT, &url).json(input).send().await?;
        self.handle_response(response).await
    }

    /// Delete a security bulletin
    pub async fn delete_security_post(&self, id: &str) -> Result<()> {
        let url = format!(
            "{}/api/security-posts/{}",
            self.config.base_url,
            urlencoding::encode(id)
        );
        let response = self.request(Method::DELETE, &url).send().await?;
        self.handle_empty(response).await
    }

    // ==================== Sections API ====================

    /// List portal landing sections
    pub async fn list_sections(&self) -> Result<Vec<Section>> {
        let url = format!("{}/api/sections", self.config.base_url);
        let response = self.request(Method::GET, &url).send().await?;
        self.handle_response(response).await
    }

    /// Create a section
    pub async fn create_section(&self, input: &SectionInput) -> Result<Section> {
        let url = format!("{}/api/sections", self.config.base_url);
        let response = self.request(Method::POST, &url).json(input).send().await?;
        self.handle_response(response).await
    }

    /// Replace a section
    pub async fn update_section(&self, id: &str, input: &SectionInput) -> Result<Section> {
        let url = format!(
            "{}/api/sections/{}",
            self.config.base_url,
            urlencoding::encode(id)
        );
        let response = self.request(Method::PUT, &url).json(input).send().await?;
        self.handle_response(response).await
    }

    /// Delete a section
    pub async fn delete_section(&self, id: &str) -> Result<()> {
        let url = format!(
            "{}/api/sections/{}",
            self.config.base_url,
            urlencoding::encode(id)
        );
        let response = self.request(Method::DELETE, &url).send().await?;
        self.handle_empty(response).await
    }

    // ==================== Links API ====================

    /// List portal quick links
    pub async fn list_links(&self) -> Result<Vec<Link>> {
        let url = format!("{}/api/links", self.config.base_url);
        let response = self.request(Method::GET, &url).send().await?;
        self.handle_response(response).await
    }

    /// Create a quick link
    pub async fn create_link(&self, input: &LinkInput) -> Result<Link> {
        let url = format!("{}/api/links", self.config.base_url);
        let response = self.request(Method::POST, &url).json(input).send().await?;
        self.handle_response(response).await
    }

    /// Replace a quick link
    pub async fn update_link(&self, id: &str, input: &LinkInput) -> Result<Link> {
        let url = format!(
            "{}/api/links/{}",
            self.config.base_url,
            urlencoding::encode(id)
        );
        let response = self.request(Method::PUT, &url).json(input).send().await?;
        self.handle_response(response).await
    }

    /// Delete a quick link
    pub async fn delete_link(&self, id: &str) -> Result<()> {
        let url = format!(
            "{}/api/links/{}",
            self.config.base_url,
            urlencoding::encode(id)
        );
        let response = self.request(Method::DELETE, &url).send().await?;
        self.handle_empty(response).await
    }

    // ==================== Forms API ====================

    /// List downloadable form templates
    pub async fn list_forms(&self) -> Result<Vec<FormDoc>> {
        let url = format!("{}/api/forms", self.config.base_url);
        let response = self.request(Method::GET, &url).send().await?;
        self.handle_response(response).await
    }

    /// Create a form template
    pub async fn create_form(&self, input: &FormDocInput) -> Result<FormDoc> {
        let url = format!("{}/api/forms", self.config.base_url);
        let response = self.request(Method::POST, &url).json(input).send().await?;
        self.handle_response(response).await
    }

    /// Replace a form template
    pub async fn update_form(&self, id: &str, input: &FormDocInput) -> Result<FormDoc> {
        let url = format!(
            "{}/api/forms/{}",
            self.config.base_url,
            urlencoding::encode(id)
        );
        let response = self.request(Method::PUT, &url).json(input).send().await?;
        self.handle_response(response).await
    }

    /// Delete a form template
    pub async fn delete_form(&self, id: &str) -> Result<()> {
        let url = format!(
            "{}/api/forms/{}",
            self.config.base_url,
            urlencoding::encode(id)
        );
        let response = self.request(Method::DELETE, &url).send().await?;
        self.handle_empty(response).await
    }

    // ==================== Regulations API ====================

    /// List company regulations
    pub async fn list_regulations(&self) -> Result<Vec<Regulation>> {
        let url = format!("{}/api/regulations", self.config.base_url);
        let response = self.request(Method::GET, &url).send().await?;
        self.handle_response(response).await
    }

    /// Create a regulation
    pub async fn create_regulation(&self, input: &RegulationInput) -> Result<Regulation> {
        let url = format!("{}/api/regulations", self.config.base_url);
        let response = self.request(Method::POST, &url).json(input).send().await?;
        self.handle_response(response).await
    }

    /// Replace a regulation
    pub async fn update_regulation(&self, id: &str, input: &RegulationInput) -> Result<Regulation> {
        let url = format!(
            "{}/api/regulations/{}",
            self.config.base_url,
            urlencoding::encode(id)
        );
        let response = self.request(Method::PUT, &url).json(input).send().await?;
        self.handle_response(response).await
    }

    /// Delete a regulation
    pub async fn delete_regulation(&self, id: &str) -> Result<()> {
        let url = format!(
            "{}/api/regulations/{}",
            self.config.base_url,
            urlencoding::encode(id)
        );
        let response = self.request(Method::DELETE, &url).send().await?;
        self.handle_empty(response).await
    }

    // ==================== Trainings API ====================

    /// List training courses
    pub async fn list_trainings(&self) -> Result<Vec<Training>> {
        let url = format!("{}/api/trainings", self.config.base_url);
        let response = self.request(Method::GET, &url).send().await?;
        self.handle_response(response).await
    }

    /// Create a training course
    pub async fn create_training(&self, input: &TrainingInput) -> Result<Training> {
        let url = format!("{}/api/trainings", self.config.base_url);
        let response = self.request(Method::POST, &url).json(input).send().await?;
        self.handle_response(response).await
    }

    /// Replace a training course
    pub async fn update_training(&self, id: &str, input: &TrainingInput) -> Result<Training> {
        let url = format!(
            "{}/api/trainings/{}",
            self.config.base_url,
            urlencoding::encode(id)
        );
        let response = self.request(Method::PUT, &url).json(input).send().await?;
        self.handle_response(response).await
    }

    /// Delete a training course
    pub async fn delete_training(&self, id: &str) -> Result<()> {
        let url = format!(
            "{}/api/trainings/{}",
            self.config.base_url,
            urlencoding::encode(id)
        );
        let response = self.request(Method::DELETE, &url).send().await?;
        self.handle_empty(response).await
    }

    // ==================== Logs API ====================

    /// List sign-in visit records
    pub async fn list_visits(&self) -> Result<Vec<Visit>> {
        let url = format!("{}/api/logs/visits", self.config.base_url);
        let response = self.request(Method::GET, &url).send().await?;
        self.handle_response(response).await
    }

    /// Delete a visit record
    pub async fn delete_visit(&self, id: &str) -> Result<()> {
        let url = format!(
            "{}/api/logs/visits/{}",
            self.config.base_url,
            urlencoding::encode(id)
        );
        let response = self.request(Method::DELETE, &url).send().await?;
        self.handle_empty(response).await
    }

    /// List per-page hit records
    pub async fn list_page_visits(&self) -> Result<Vec<PageVisit>> {
        let url = format!("{}/api/logs/page-visits", self.config.base_url);
        let response = self.request(Method::GET, &url).send().await?;
        self.handle_response(response).await
    }

    /// Delete a page hit record
    pub async fn delete_page_visit(&self, id: &str) -> Result<()> {
        let url = format!(
            "{}/api/logs/page-visits/{}",
            self.config.base_url,
            urlencoding::encode(id)
        );
        let response = self.request(Method::DELETE, &url).send().await?;
        self.handle_empty(response).await
    }

    /// List open realtime socket sessions
    pub async fn list_user_sockets(&self) -> Result<Vec<UserSocket>> {
        let url = format!("{}/api/logs/sockets", self.config.base_url);
        let response = self.request(Method::GET, &url).send().await?;
        self.handle_response(response).await
    }

    /// Delete a socket session record
    pub async fn delete_user_socket(&self, id: &str) -> Result<()> {
        let url = format!(
            "{}/api/logs/sockets/{}",
            self.config.base_url,
            urlencoding::encode(id)
        );
        let response = self.request(Method::DELETE, &url).send().await?;
        self.handle_empty(response).await
    }

    /// List contact-box messages
    pub async fn list_messages(&self) -> Result<Vec<Message>> {
        let url = format!("{}/api/messages", self.config.base_url);
        let response = self.request(Method::GET, &url).send().await?;
        self.handle_response(response).await
    }

    /// Delete a contact-box message
    pub async fn delete_message(&self, id: &str) -> Result<()> {
        let url = format!(
            "{}/api/messages/{}",
            self.config.base_url,
            urlencoding::encode(id)
        );
        let response = self.request(Method::DELETE, &url).send().await?;
        self.handle_empty(response).await
    }

    // ==================== Popup Images API ====================

    /// List popup carousel images in display order
    pub async fn list_popup_images(&self) -> Result<Vec<PopupImage>> {
        let url = format!("{}/api/popup-images", self.config.base_url);
        let response = self.request(Method::GET, &url).send().await?;
        self.handle_response(response).await
    }

    /// Upload one or more carousel images in a single multipart request
    pub async fn upload_popup_images(&self, parts: &[FilePart]) -> Result<Vec<PopupImage>> {
        let url = format!("{}/api/popup-images", self.config.base_url);

        let mut form = multipart::Form::new();
        for part in parts {
            form = form.part("images", to_part(part)?);
        }

        let response = self
            .request(Method::POST, &url)
            .multipart(form)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Delete a carousel image by its server path
    pub async fn delete_popup_image(&self, path: &str) -> Result<()> {
        let url = format!(
            "{}/api/popup-images/{}",
            self.config.base_url,
            urlencoding::encode(path)
        );
        let response = self.request(Method::DELETE, &url).send().await?;
        self.handle_empty(response).await
    }

    /// Persist the full display order of the carousel
    pub async fn save_popup_order(&self, paths: &[String]) -> Result<()> {
        let url = format!("{}/api/popup-images/order", self.config.base_url);
        let body = PopupOrderRequest {
            images: paths.to_vec(),
        };

        let response = self.request(Method::PUT, &url).json(&body).send().await?;
        self.handle_empty(response).await
    }

    /// Public URL of a carousel image
    pub fn popup_image_url(&self, image: &PopupImage) -> String {
        format!(
            "{}/{}",
            self.config.base_url,
            image.path.trim_start_matches('/')
        )
    }

    // ==================== Helper Methods ====================

    fn request(&self, method: Method, url: &str) -> reqwest::RequestBuilder {
        let builder = self.client.request(method, url);
        let guard = self.token.read().unwrap_or_else(|e| e.into_inner());
        match guard.as_deref() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        if !response.status().is_success() {
            return Err(self.server_error(response).await);
        }

        let body = response.json().await?;
        Ok(body)
    }

    async fn handle_empty(&self, response: reqwest::Response) -> Result<()> {
        if !response.status().is_success() {
            return Err(self.server_error(response).await);
        }
        Ok(())
    }

    async fn server_error(&self, response: reqwest::Response) -> ApiError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        ApiError::Server {
            status,
            message: error_message(&body),
        }
    }
}

/// Pull the error string out of a failure body.
///
/// Bodies look like `{"error": "..."}` or, on a few older endpoints,
/// `{"message": "..."}`. Anything else (empty body, HTML error page,
/// plain text) yields `None`.
fn error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let message = value.get("error").or_else(|| value.get("message"))?;
    message.as_str().map(|s| s.to_string())
}

fn to_part(part: &FilePart) -> Result<multipart::Part> {
    let built = multipart::Part::bytes(part.bytes.clone())
        .file_name(part.file_name.clone())
        .mime_str(&part.mime)?;
    Ok(built)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_prefers_error_key() {
        let body = r#"{"error": "title required", "message": "ignored"}"#;
        assert_eq!(error_message(body), Some("title required".to_string()));
    }

    #[test]
    fn test_error_message_falls_back_to_message_key() {
        let body = r#"{"message": "not found"}"#;
        assert_eq!(error_message(body), Some("not found".to_string()));
    }

    #[test]
    fn test_error_message_none_for_garbage() {
        assert_eq!(error_message(""), None);
        assert_eq!(error_message("<html>502</html>"), None);
        assert_eq!(error_message(r#"{"error": 42}"#), None);
    }

    #[test]
    fn test_token_round_trip() {
        let client = ApiClient::new(ApiConfig::default());
        assert!(!client.has_token());

        client.set_token("abc");
        assert!(client.has_token());

        client.clear_token();
        assert!(!client.has_token());
    }
}
