//! Integration tests for the users client using wiremock mock server

use ud_client::{CacheKey, Client, ClientError};
use ud_core::UserId;

use std::time::Duration;

use serde_json::{Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

fn user_json(id: u64) -> Value {
    json!({
        "id": id,
        "name": format!("User {id}"),
        "username": format!("user{id}"),
        "email": format!("user{id}@april.biz"),
        "address": {
            "street": "Kulas Light",
            "suite": "Apt. 556",
            "city": "Gwenborough",
            "zipcode": "92998-3874",
            "geo": { "lat": "-37.3159", "lng": "81.1496" }
        },
        "phone": "1-770-736-8031 x56442",
        "website": "hildegard.org",
        "company": {
            "name": "Romaguera-Crona",
            "catchPhrase": "Multi-layered client-server neural-net",
            "bs": "harness real-time e-markets"
        }
    })
}

fn users_json(count: u64) -> Value {
    Value::Array((1..=count).map(user_json).collect())
}

#[tokio::test]
async fn test_fetch_list_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(users_json(10)))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri());
    let users = client.fetch_list().await.unwrap();

    assert_eq!(users.len(), 10);
    assert_eq!(users[0].id, UserId(1));
    assert_eq!(users[0].city(), "Gwenborough");
    assert_eq!(users[0].company_name(), "Romaguera-Crona");
}

#[tokio::test]
async fn test_fetch_one_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json(3)))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri());
    let user = client.fetch_one(UserId(3)).await.unwrap();

    assert_eq!(user.id, UserId(3));
    assert_eq!(user.username, "user3");
}

#[tokio::test]
async fn test_server_error_is_network_error_without_retry() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri());
    let result = client.fetch_list().await;

    match result {
        Err(ClientError::Network { status, url, .. }) => {
            assert_eq!(status, 500);
            assert!(url.ends_with("/users"));
        }
        other => panic!("expected network error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_not_found_user_is_network_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/999"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({})))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri());
    let result = client.fetch_one(UserId(999)).await;

    assert!(matches!(
        result,
        Err(ClientError::Network { status: 404, .. })
    ));
}

#[tokio::test]
async fn test_malformed_body_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri());
    let result = client.fetch_list().await;

    assert!(matches!(result, Err(ClientError::Parse { .. })));
}

#[tokio::test]
async fn test_object_instead_of_list_is_invalid_payload() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "users": [] })))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri());
    let result = client.fetch_list().await;

    let err = result.unwrap_err();
    assert!(matches!(err, ClientError::InvalidPayload { .. }));
    assert_eq!(
        err.user_message(),
        "Data not loaded or has an invalid format."
    );
    assert!(client.cache().is_empty().await);
}

#[tokio::test]
async fn test_second_fetch_inside_window_served_from_cache() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(users_json(2)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri());
    let first = client.fetch_list().await.unwrap();
    let second = client.fetch_list().await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_zero_freshness_refetches_every_time() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(users_json(2)))
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri()).with_freshness(Duration::ZERO);
    client.fetch_list().await.unwrap();
    client.fetch_list().await.unwrap();
}

#[tokio::test]
async fn test_failures_are_not_cached() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/1"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/users/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json(1)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri());
    assert!(client.fetch_one(UserId(1)).await.is_err());

    let user = client.fetch_one(UserId(1)).await.unwrap();
    assert_eq!(user.id, UserId(1));
}

#[tokio::test]
async fn test_invalidate_forces_refetch() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json(2)))
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri());
    client.fetch_one(UserId(2)).await.unwrap();
    assert!(client.invalidate(&CacheKey::User(UserId(2))).await);
    client.fetch_one(UserId(2)).await.unwrap();
}

#[tokio::test]
async fn test_list_and_single_keys_are_independent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(users_json(1)))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/users/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json(1)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri());
    client.fetch_list().await.unwrap();
    client.fetch_one(UserId(1)).await.unwrap();
    client.fetch_list().await.unwrap();
    client.fetch_one(UserId(1)).await.unwrap();
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    // Bind then drop a listener so the port is known to be closed
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = Client::new(&format!("http://{}", addr));
    let result = client.fetch_list().await;

    assert!(matches!(result, Err(ClientError::Transport { .. })));
}
