//! API client integration tests against a mock backend

use atrium_client::{ApiClient, ApiConfig, ApiError, ArticleInput, FilePart, Role};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(ApiConfig {
        base_url: server.uri(),
        ..Default::default()
    })
}

fn sample_user() -> serde_json::Value {
    json!({
        "id": "u1",
        "username": "amara",
        "fullName": "Amara Osei",
        "department": "People",
        "role": "hr",
        "createdAt": "2026-01-10T09:00:00Z"
    })
}

fn sample_article(id: &str, title: &str) -> serde_json::Value {
    json!({
        "id": id,
        "title": title,
        "body": "body text",
        "author": "amara",
        "tags": ["general"],
        "createdAt": "2026-02-01T08:00:00Z",
        "updatedAt": "2026-02-01T08:00:00Z"
    })
}

#[tokio::test]
async fn test_sign_in_stores_token_and_parses_user() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/sign-in"))
        .and(body_json(json!({"username": "amara", "password": "s3cret"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"token": "tok-123", "user": sample_user()})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let signed_in = client.sign_in("amara", "s3cret").await.expect("sign in");

    assert_eq!(signed_in.token, "tok-123");
    assert_eq!(signed_in.user.username, "amara");
    assert_eq!(signed_in.user.role, Role::Hr);
    assert!(client.has_token());
}

#[tokio::test]
async fn test_bearer_token_attached_after_sign_in() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/sign-in"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"token": "tok-123", "user": sample_user()})),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/users"))
        .and(header("authorization", "Bearer tok-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([sample_user()])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.sign_in("amara", "s3cret").await.expect("sign in");

    let users = client.list_users().await.expect("list users");
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].full_name, "Amara Osei");
}

#[tokio::test]
async fn test_list_articles_parses_array() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/articles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            sample_article("a1", "First"),
            sample_article("a2", "Second"),
        ])))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let articles = client.list_articles().await.expect("list articles");

    assert_eq!(articles.len(), 2);
    assert_eq!(articles[0].title, "First");
    assert_eq!(articles[1].tags, vec!["general".to_string()]);
}

#[tokio::test]
async fn test_create_article_parses_created_record() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/articles"))
        .and(body_json(json!({
            "title": "Cafeteria hours",
            "body": "Open 8 to 18.",
            "tags": ["facilities"]
        })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(sample_article("a9", "Cafeteria hours")),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let input = ArticleInput {
        title: "Cafeteria hours".into(),
        body: "Open 8 to 18.".into(),
        tags: vec!["facilities".into()],
    };

    let created = client.create_article(&input).await.expect("create");
    assert_eq!(created.id, "a9");
}

#[tokio::test]
async fn test_server_error_carries_extracted_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/articles"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": "title required"})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let input = ArticleInput {
        title: String::new(),
        body: String::new(),
        tags: vec![],
    };

    let err = client.create_article(&input).await.expect_err("must fail");
    assert_eq!(err.status(), Some(500));
    assert_eq!(err.server_message(), Some("title required"));
}

#[tokio::test]
async fn test_server_error_without_json_body_has_no_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/articles"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>bad gateway</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.list_articles().await.expect_err("must fail");

    assert_eq!(err.status(), Some(502));
    assert_eq!(err.server_message(), None);
}

#[tokio::test]
async fn test_not_found_is_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/users/ghost"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "no such user"})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.get_user("ghost").await.expect_err("must fail");

    assert_eq!(err.status(), Some(404));
    assert_eq!(err.server_message(), Some("no such user"));
}

#[tokio::test]
async fn test_network_failure_maps_to_http_error() {
    // Nothing listens on this port
    let client = ApiClient::new(ApiConfig {
        base_url: "http://127.0.0.1:1".to_string(),
        timeout_secs: 2,
        ..Default::default()
    });

    let err = client.list_articles().await.expect_err("must fail");
    assert!(matches!(err, ApiError::Http(_)));
    assert_eq!(err.server_message(), None);
}

#[tokio::test]
async fn test_save_popup_order_sends_full_sequence() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/popup-images/order"))
        .and(body_json(json!({"images": ["c.png", "a.png", "b.png"]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "saved"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let order = vec!["c.png".to_string(), "a.png".to_string(), "b.png".to_string()];
    client.save_popup_order(&order).await.expect("save order");
}

#[tokio::test]
async fn test_delete_popup_image_encodes_path() {
    let server = MockServer::start().await;

    // Slashes in the image path must not create extra URL segments
    Mock::given(method("DELETE"))
        .and(path("/api/popup-images/uploads%2Fpopup%2Fspring.png"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "deleted"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client
        .delete_popup_image("uploads/popup/spring.png")
        .await
        .expect("delete image");
}

#[tokio::test]
async fn test_upload_file_sends_multipart_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/files"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "f1",
            "fileName": "leave-form.pdf",
            "size": 4,
            "mime": "application/pdf"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let part = FilePart::new("leave-form.pdf", "application/pdf", b"%PDF".to_vec());
    let stored = client.upload_file(&part).await.expect("upload");

    assert_eq!(stored.id, "f1");
    assert_eq!(stored.file_name, "leave-form.pdf");

    let requests = server.received_requests().await.expect("recorded");
    let upload = &requests[0];
    let content_type = upload
        .headers
        .get("content-type")
        .expect("content type")
        .to_str()
        .expect("ascii");
    assert!(content_type.starts_with("multipart/form-data"));

    let body = String::from_utf8_lossy(&upload.body);
    assert!(body.contains("leave-form.pdf"));
    assert!(body.contains("%PDF"));
}

#[tokio::test]
async fn test_upload_popup_images_sends_one_part_per_file() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/popup-images"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([
            {"path": "uploads/popup/a.png"},
            {"path": "uploads/popup/b.png"}
        ])))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let parts = vec![
        FilePart::new("a.png", "image/png", vec![1, 2, 3]),
        FilePart::new("b.png", "image/png", vec![4, 5, 6]),
    ];

    let uploaded = client.upload_popup_images(&parts).await.expect("upload");
    assert_eq!(uploaded.len(), 2);

    let requests = server.received_requests().await.expect("recorded");
    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(body.contains("a.png"));
    assert!(body.contains("b.png"));
}

#[tokio::test]
async fn test_download_file_returns_bytes() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/files/f1"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![7u8, 8, 9]))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let bytes = client.download_file("f1").await.expect("download");
    assert_eq!(bytes, vec![7u8, 8, 9]);
}

#[tokio::test]
async fn test_delete_ignores_response_body() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/logs/visits/v1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "gone"})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.delete_visit("v1").await.expect("delete visit");
}

#[tokio::test]
async fn test_sign_out_clears_token() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/sign-out"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "bye"})))
        .mount(&server)
        .await;

    let client = ApiClient::new(ApiConfig {
        base_url: server.uri(),
        token: Some("tok-123".to_string()),
        ..Default::default()
    });
    assert!(client.has_token());

    client.sign_out().await.expect("sign out");
    assert!(!client.has_token());
}
