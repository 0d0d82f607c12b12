use ud_cli::App;
use ud_client::Client;
use ud_config::Config;

use serde_json::{Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

pub fn user_json(id: u64) -> Value {
    json!({
        "id": id,
        "name": format!("User {id}"),
        "username": format!("user{id}"),
        "email": format!("user{id}@april.biz"),
        "address": { "street": "Kulas Light", "city": "Gwenborough" },
        "phone": "1-770-736-8031 x56442",
        "website": "hildegard.org",
        "company": { "name": "Romaguera-Crona", "bs": "harness real-time e-markets" }
    })
}

/// Mock server answering `/users` with `count` users and `/users/{id}` for each
pub async fn users_server(count: u64) -> MockServer {
    let mock_server = MockServer::start().await;

    let users: Vec<Value> = (1..=count).map(user_json).collect();
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(Value::Array(users)))
        .mount(&mock_server)
        .await;

    for id in 1..=count {
        Mock::given(method("GET"))
            .and(path(format!("/users/{id}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(user_json(id)))
            .mount(&mock_server)
            .await;
    }

    mock_server
}

pub fn app_for(server: &MockServer) -> App {
    let mut config = Config::default();
    config.api.base_url = server.uri();
    App::new(Client::new(&server.uri()), config)
}
