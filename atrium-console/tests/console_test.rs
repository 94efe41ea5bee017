//! Console page flows against a mock backend

use atrium_client::{ApiClient, ApiConfig, ArticleInput, FilePart};
use atrium_console::notify::{NoticeLevel, Notifier};
use atrium_console::pages::{ArticlesPage, PageError, PopupManager, TrainingsPage, UsersPage};
use atrium_console::portal::PortalHome;
use atrium_console::session::Session;
use atrium_console::uploads::MAX_VIDEO_BYTES;
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> Arc<ApiClient> {
    Arc::new(ApiClient::new(ApiConfig {
        base_url: server.uri(),
        ..Default::default()
    }))
}

fn sample_article(id: &str, title: &str) -> serde_json::Value {
    json!({
        "id": id,
        "title": title,
        "body": "body text",
        "author": "amara",
        "tags": [],
        "createdAt": "2026-02-01T08:00:00Z",
        "updatedAt": "2026-02-01T08:00:00Z"
    })
}

fn sample_user() -> serde_json::Value {
    json!({
        "id": "u1",
        "username": "amara",
        "fullName": "Amara Osei",
        "department": "People",
        "role": "admin",
        "createdAt": "2026-01-10T09:00:00Z"
    })
}

#[tokio::test]
async fn test_create_refreshes_list_from_backend() {
    let server = MockServer::start().await;

    // First load sees one article, the post-create refetch sees two
    Mock::given(method("GET"))
        .and(path("/api/articles"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([sample_article("a1", "First")])),
        )
        .up_to_n_times(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/articles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            sample_article("a1", "First"),
            sample_article("a2", "Second"),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/articles"))
        .respond_with(ResponseTemplate::new(201).set_body_json(sample_article("a2", "Second")))
        .expect(1)
        .mount(&server)
        .await;

    let notifier = Notifier::new();
    let mut page = ArticlesPage::new(client_for(&server), notifier.clone(), 10);
    page.load().await.expect("initial load");
    assert_eq!(page.list.len(), 1);

    let input = ArticleInput {
        title: "Second".into(),
        body: "body text".into(),
        tags: vec![],
    };
    page.create(input).await.expect("create");

    assert_eq!(page.list.len(), 2);
    let toasts = notifier.active().await;
    assert_eq!(toasts[0].level, NoticeLevel::Success);
    assert_eq!(toasts[0].message, "Article published");
}

#[tokio::test]
async fn test_failed_create_keeps_list_and_toasts_server_message() {
    let server = MockServer::start().await;

    // Only the initial load; a failed create must not refetch
    Mock::given(method("GET"))
        .and(path("/api/articles"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([sample_article("a1", "First")])),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/articles"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({"error": "title required"})))
        .expect(1)
        .mount(&server)
        .await;

    let notifier = Notifier::new();
    let mut page = ArticlesPage::new(client_for(&server), notifier.clone(), 10);
    page.load().await.expect("initial load");

    let input = ArticleInput {
        title: String::new(),
        body: String::new(),
        tags: vec![],
    };
    let err = page.create(input).await.expect_err("must fail");
    assert!(matches!(err, PageError::Api(_)));

    assert_eq!(page.list.len(), 1);
    let toasts = notifier.active().await;
    assert_eq!(toasts[0].level, NoticeLevel::Error);
    assert_eq!(toasts[0].message, "Publish article: title required");
}

#[tokio::test]
async fn test_unconfirmed_delete_sends_nothing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/articles"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([sample_article("a1", "First")])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let notifier = Notifier::new();
    let mut page = ArticlesPage::new(client_for(&server), notifier.clone(), 10);
    page.load().await.expect("initial load");

    let deleted = page.remove("a1", false).await.expect("no-op");
    assert!(!deleted);
    assert_eq!(page.list.len(), 1);

    // The load was the only request
    let requests = server.received_requests().await.expect("recorded");
    assert_eq!(requests.len(), 1);
    assert!(notifier.active().await.is_empty());
}

#[tokio::test]
async fn test_deleting_into_a_shorter_list_pulls_the_page_back() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/articles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            sample_article("a1", "One"),
            sample_article("a2", "Two"),
            sample_article("a3", "Three"),
            sample_article("a4", "Four"),
            sample_article("a5", "Five"),
        ])))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/articles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            sample_article("a1", "One"),
            sample_article("a2", "Two"),
            sample_article("a3", "Three"),
            sample_article("a4", "Four"),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/api/articles/a5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "deleted"})))
        .expect(1)
        .mount(&server)
        .await;

    let notifier = Notifier::new();
    let mut page = ArticlesPage::new(client_for(&server), notifier.clone(), 2);
    page.load().await.expect("initial load");

    page.list.pager.jump(3);
    assert_eq!(page.list.pager.current_page(), 3);

    let deleted = page.remove("a5", true).await.expect("delete");
    assert!(deleted);

    // Page 3 no longer exists after the refetch
    assert_eq!(page.list.pager.total_pages(), 2);
    assert_eq!(page.list.pager.current_page(), 2);
}

#[tokio::test]
async fn test_oversized_video_never_reaches_backend() {
    let server = MockServer::start().await;

    let notifier = Notifier::new();
    let mut page = TrainingsPage::new(client_for(&server), notifier.clone(), 10);

    let video = FilePart::new(
        "onboarding.mp4",
        "video/mp4",
        vec![0u8; (MAX_VIDEO_BYTES + 1) as usize],
    );
    let err = page
        .publish("Onboarding", None, video)
        .await
        .expect_err("must reject");
    assert!(matches!(err, PageError::Upload(_)));

    let requests = server.received_requests().await.expect("recorded");
    assert!(requests.is_empty());

    let toasts = notifier.active().await;
    assert_eq!(toasts[0].level, NoticeLevel::Error);
    assert!(toasts[0].message.contains("over the"));
}

#[tokio::test]
async fn test_mixed_popup_batch_is_blocked_whole() {
    let server = MockServer::start().await;

    let notifier = Notifier::new();
    let mut popup = PopupManager::new(client_for(&server), notifier.clone());

    // One good image, one PDF: nothing may go out
    let parts = vec![
        FilePart::new("spring.png", "image/png", vec![1, 2, 3]),
        FilePart::new("rules.pdf", "application/pdf", vec![4, 5, 6]),
    ];
    let err = popup.upload(parts).await.expect_err("must reject");
    assert!(matches!(err, PageError::Upload(_)));

    let requests = server.received_requests().await.expect("recorded");
    assert!(requests.is_empty());
}

#[tokio::test]
async fn test_session_token_flows_into_pages() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/sign-in"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"token": "tok-9", "user": sample_user()})),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/users"))
        .and(header("authorization", "Bearer tok-9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([sample_user()])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let session = Session::new(client.clone());
    session.sign_in("amara", "s3cret").await.expect("sign in");
    assert!(session.is_signed_in());

    // Pages share the client, so they inherit the bearer token
    let mut page = UsersPage::new(client, Notifier::new(), 10);
    page.load().await.expect("list users");
    assert_eq!(page.list.len(), 1);
}

#[tokio::test]
async fn test_portal_home_loads_all_surfaces() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/sections"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": "s1",
            "title": "Welcome",
            "body": "Glad you are here.",
            "createdAt": "2026-01-01T00:00:00Z",
            "updatedAt": "2026-01-01T00:00:00Z"
        }])))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/links"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": "l1",
            "label": "Payroll",
            "url": "https://payroll.example.com",
            "createdAt": "2026-01-01T00:00:00Z"
        }])))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/popup-images"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"path": "uploads/popup/a.png"},
            {"path": "uploads/popup/b.png"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let mut home = PortalHome::new(client_for(&server));
    home.load().await.expect("load home");

    assert_eq!(home.sections.len(), 1);
    assert_eq!(home.links[0].label, "Payroll");
    assert_eq!(home.carousel.images().len(), 2);
    assert_eq!(
        home.carousel.current().map(|i| i.path.as_str()),
        Some("uploads/popup/a.png")
    );
}
