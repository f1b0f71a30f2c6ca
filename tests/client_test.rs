mod common;

use common::{LIST_PATH, app_json, detail_path};
use devapps::application::ApplicationData;
use devapps::client::{ApplicationDataClient, RequestError, Unserialized};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn test_unserialize_list() {
    let payload = json!({ "data": [app_json("http://x", "a", "A"), app_json("http://x", "b", "B")] });

    match ApplicationDataClient::unserialize(&payload) {
        Some(Unserialized::Many(apps)) => {
            assert_eq!(apps.len(), 2);
            assert_eq!(apps[0].client_id(), Some("a"));
            assert_eq!(apps[1].client_id(), Some("b"));
        }
        other => panic!("expected a list, got {:?}", other),
    }
}

#[test]
fn test_unserialize_one() {
    let payload = json!({ "data": app_json("http://x", "a", "A") });

    match ApplicationDataClient::unserialize(&payload) {
        Some(Unserialized::One(app)) => assert_eq!(app.name(), Some("A")),
        other => panic!("expected a single application, got {:?}", other),
    }
}

#[test]
fn test_unserialize_nothing() {
    assert_eq!(ApplicationDataClient::unserialize(&json!({})), None);
    assert_eq!(ApplicationDataClient::unserialize(&json!({ "data": null })), None);

    // An empty list is still a list
    assert_eq!(
        ApplicationDataClient::unserialize(&json!({ "data": [] })),
        Some(Unserialized::Many(Vec::new()))
    );
}

#[tokio::test]
async fn test_fetch_list() {
    let mock_server = MockServer::start().await;
    let base = mock_server.uri();

    Mock::given(method("GET"))
        .and(path(LIST_PATH))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [app_json(&base, "a", "Alpha"), app_json(&base, "b", "Beta")]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ApplicationDataClient::new(format!("{}{}", base, LIST_PATH));
    let apps = client.fetch_list().await.unwrap();

    let names: Vec<&str> = apps.iter().map(|a| a.name().unwrap()).collect();
    assert_eq!(names, vec!["Alpha", "Beta"]);
}

#[tokio::test]
async fn test_fetch_list_sends_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(LIST_PATH))
        .and(header("authorization", "Bearer t0ken"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ApplicationDataClient::new(format!("{}{}", mock_server.uri(), LIST_PATH))
        .with_token(Some("t0ken".to_string()));

    assert!(client.fetch_list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_fetch_list_error_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(LIST_PATH))
        .respond_with(ResponseTemplate::new(403).set_body_string("forbidden"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let url = format!("{}{}", mock_server.uri(), LIST_PATH);
    let client = ApplicationDataClient::new(url.clone());
    let err = client.fetch_list().await.unwrap_err();

    assert_eq!(err.status(), Some(403));
    assert_eq!(err.url(), url);
    match err {
        RequestError::Status { message, .. } => assert_eq!(message, "forbidden"),
        other => panic!("expected a status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_fetch_one() {
    let mock_server = MockServer::start().await;
    let base = mock_server.uri();

    Mock::given(method("GET"))
        .and(path(detail_path("a")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "data": app_json(&base, "a", "Alpha") })),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ApplicationDataClient::new(format!("{}{}", base, LIST_PATH));
    let app = client
        .fetch_one(&format!("{}{}", base, detail_path("a")))
        .await
        .unwrap();

    assert_eq!(app.name(), Some("Alpha"));
    assert_eq!(app.api_detail_url(), Some(format!("{}{}", base, detail_path("a")).as_str()));
}

#[tokio::test]
async fn test_fetch_one_rejects_list() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(detail_path("a")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .mount(&mock_server)
        .await;

    let client = ApplicationDataClient::new(format!("{}{}", mock_server.uri(), LIST_PATH));
    let err = client
        .fetch_one(&format!("{}{}", mock_server.uri(), detail_path("a")))
        .await
        .unwrap_err();

    assert!(matches!(err, RequestError::Payload { .. }));
}

#[tokio::test]
async fn test_create_one_posts_serialized_fields() {
    let mock_server = MockServer::start().await;
    let base = mock_server.uri();

    Mock::given(method("POST"))
        .and(path(LIST_PATH))
        .and(body_json(json!({
            "name": "Blog",
            "home_url": "http://blog.example.com",
            "callback_url": "http://blog.example.com/oauth"
        })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({ "data": app_json(&base, "new", "Blog") })),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut app = ApplicationData::new(None);
    app.set_name("Blog")
        .set_home_url("blog.example.com")
        .set_callback_url("blog.example.com/oauth");

    let client = ApplicationDataClient::new(format!("{}{}", base, LIST_PATH));
    let created = client.create_one(&app).await.unwrap();

    assert_eq!(created.client_id(), Some("new"));
    assert_eq!(created.client_secret(), Some("new-secret"));
}

#[tokio::test]
async fn test_update_one_patches_detail_url() {
    let mock_server = MockServer::start().await;
    let base = mock_server.uri();

    let mut renamed = app_json(&base, "a", "Renamed");
    renamed["description"] = json!("Alpha description");

    Mock::given(method("PATCH"))
        .and(path(detail_path("a")))
        .and(body_json(json!({
            "name": "Renamed",
            "description": "Alpha description",
            "home_url": "http://home.example.com",
            "callback_url": "https://home.example.com/callback",
            "client_id": "a",
            "client_secret": "a-secret",
            "owner": "user1"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": renamed })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut app = ApplicationData::new(Some(&app_json(&base, "a", "Alpha")));
    app.set_name("Renamed");

    let client = ApplicationDataClient::new(format!("{}{}", base, LIST_PATH));
    let updated = client.update_one(&app).await.unwrap();

    assert_eq!(updated.name(), Some("Renamed"));
}

#[tokio::test]
async fn test_update_one_without_detail_url() {
    let client = ApplicationDataClient::new("http://127.0.0.1:9/v2/applications/");
    let err = client.update_one(&ApplicationData::new(None)).await.unwrap_err();

    assert!(matches!(err, RequestError::MissingDetailUrl));
}

#[tokio::test]
async fn test_delete_one() {
    let mock_server = MockServer::start().await;
    let base = mock_server.uri();

    Mock::given(method("DELETE"))
        .and(path(detail_path("a")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let app = ApplicationData::new(Some(&app_json(&base, "a", "Alpha")));
    let client = ApplicationDataClient::new(format!("{}{}", base, LIST_PATH));

    assert!(client.delete_one(&app).await.is_ok());
}

#[tokio::test]
async fn test_delete_one_failure_is_reported_once() {
    let mock_server = MockServer::start().await;
    let base = mock_server.uri();

    Mock::given(method("DELETE"))
        .and(path(detail_path("a")))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    let app = ApplicationData::new(Some(&app_json(&base, "a", "Alpha")));
    let client = ApplicationDataClient::new(format!("{}{}", base, LIST_PATH));
    let err = client.delete_one(&app).await.unwrap_err();

    assert_eq!(err.status(), Some(500));
    match err {
        RequestError::Status { message, .. } => assert_eq!(message, "Internal Server Error"),
        other => panic!("expected a status error, got {:?}", other),
    }
}
