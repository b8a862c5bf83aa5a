#![allow(dead_code)]

use marquee_config::{ApiKey, TmdbConfig};
use marquee_core::ContentClient;
use serde_json::{Value, json};
use url::Url;
use wiremock::MockServer;

pub const TEST_KEY: &str = "test-key";

pub fn config_for(server: &MockServer, api_key: Option<&str>) -> TmdbConfig {
    let base = Url::parse(&server.uri()).expect("mock server uri");
    TmdbConfig::new(api_key.and_then(ApiKey::new)).with_base_url(base)
}

pub fn client_for(server: &MockServer) -> ContentClient {
    ContentClient::new(config_for(server, Some(TEST_KEY)))
}

pub fn keyless_client_for(server: &MockServer) -> ContentClient {
    ContentClient::new(config_for(server, None))
}

pub fn movie(id: u64, title: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "release_date": "2024-05-01",
        "poster_path": format!("/poster-{id}.jpg"),
        "backdrop_path": format!("/backdrop-{id}.jpg"),
        "overview": format!("{title} overview"),
    })
}

pub fn show(id: u64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "first_air_date": "2019-09-10",
        "poster_path": format!("/poster-{id}.jpg"),
        "overview": format!("{name} overview"),
    })
}

pub fn page(results: Vec<Value>) -> Value {
    json!({
        "page": 1,
        "results": results,
        "total_pages": 1,
        "total_results": 0,
    })
}
