//! Integration tests for the connect-event HTTP surface.
//!
//! These start a real listener with the full application state wired up
//! (phrase cache fed by a mock listing endpoint, directory loaded from a
//! JSON file) and make actual requests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::io::Write;
use std::net::SocketAddr;
use std::sync::Arc;

use chrono::{Days, Local};
use herald_directory::{DirectorySource, JsonFileSource, ServerDirectory};
use herald_phrases::{ListingClient, PhraseCache};
use herald_server::AppState;
use serde_json::{Value, json};
use tempfile::NamedTempFile;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

const LISTING_BODY: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
    <ListBucketResult><Name>files</Name><Prefix>pages/gifs/</Prefix>\
    <Contents><Key>pages/gifs/sunrise.jpg</Key></Contents>\
    </ListBucketResult>";

/// Write a servers.json whose survival server opened ten days ago.
fn servers_file() -> NamedTempFile {
    let founded = Local::now()
        .date_naive()
        .checked_sub_days(Days::new(10))
        .expect("date arithmetic");
    let mut file = NamedTempFile::new().expect("temp servers file");
    let json = json!([
        {"server_id": "lobby", "display_name": "The Lobby", "founded": "2019-11-02", "priority": 1},
        {"server_id": "survival", "founded": founded.to_string(), "priority": 2}
    ]);
    file.write_all(json.to_string().as_bytes())
        .expect("write servers file");
    file
}

async fn loaded_directory() -> (Arc<ServerDirectory>, NamedTempFile) {
    let file = servers_file();
    let source = JsonFileSource::new(file.path());
    let directory = ServerDirectory::new();
    directory.load(source.fetch_records().await.expect("records"));
    (Arc::new(directory), file)
}

async fn refreshed_cache() -> (Arc<PhraseCache>, MockServer) {
    let listing = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(LISTING_BODY))
        .mount(&listing)
        .await;

    let client = ListingClient::new(format!("{}/static?prefix=pages/gifs/", listing.uri()))
        .expect("listing client");
    let cache = PhraseCache::new(client);
    cache.refresh().await;
    (Arc::new(cache), listing)
}

async fn start_test_server(state: Arc<AppState>) -> SocketAddr {
    let app = herald_server::http::create_router(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("listener addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("test server");
    });
    addr
}

async fn greet(addr: SocketAddr, body: Value) -> Value {
    let response = reqwest::Client::new()
        .post(format!("http://{addr}/v1/greet"))
        .json(&body)
        .send()
        .await
        .expect("greet request");
    assert!(response.status().is_success());
    response.json().await.expect("greet body")
}

#[tokio::test]
async fn greet_composes_the_full_message() {
    let (directory, _servers) = loaded_directory().await;
    let (cache, _listing) = refreshed_cache().await;
    let state = Arc::new(AppState::new(directory, cache, "BSR"));
    let addr = start_test_server(state).await;

    let body = greet(
        addr,
        json!({
            "player": "andy",
            "server": "survival",
            "roster": ["lobby", "survival"]
        }),
    )
    .await;

    let text = body["text"].as_str().expect("text");
    assert!(text.contains("§e§landy§r, welcome back to §bBSR§r!"));
    assert!(text.contains("survival has been open for 10 days"));
    assert!(text.contains("[§aSaying§r] sunrise"));
    assert!(text.contains("[§lsurvival§r]"));
    assert!(text.contains("[§alobby§r]"));

    // Exactly one current entry, the rest clickable to join.
    let spans = body["spans"].as_array().expect("spans");
    let current: Vec<_> = spans
        .iter()
        .filter(|s| s["hover_text"].as_str() == Some("Current server"))
        .collect();
    assert_eq!(current.len(), 1);
    assert_eq!(current[0]["text"].as_str(), Some("[§lsurvival§r]"));

    let joinable: Vec<_> = spans
        .iter()
        .filter(|s| s["click_command"].is_string())
        .collect();
    assert_eq!(joinable.len(), 1);
    assert_eq!(joinable[0]["click_command"].as_str(), Some("/server lobby"));
}

#[tokio::test]
async fn greet_before_directory_load_uses_fallback_data() {
    let (cache, _listing) = refreshed_cache().await;
    let state = Arc::new(AppState::new(
        Arc::new(ServerDirectory::new()),
        cache,
        "BSR",
    ));
    let addr = start_test_server(state).await;

    let body = greet(
        addr,
        json!({"player": "andy", "server": "creative", "roster": ["creative"]}),
    )
    .await;

    let text = body["text"].as_str().expect("text");
    assert!(text.contains("creative has been open for 0 days"));
}

#[tokio::test]
async fn greet_with_empty_roster_is_degenerate_but_valid() {
    let (cache, _listing) = refreshed_cache().await;
    let state = Arc::new(AppState::new(
        Arc::new(ServerDirectory::new()),
        cache,
        "BSR",
    ));
    let addr = start_test_server(state).await;

    let body = greet(addr, json!({"player": "andy", "server": "lobby"})).await;

    let text = body["text"].as_str().expect("text");
    assert!(text.starts_with(&"-".repeat(40)));
    assert!(text.ends_with(&"-".repeat(40)));
}

#[tokio::test]
async fn healthz_reports_cache_and_directory_sizes() {
    let (directory, _servers) = loaded_directory().await;
    let (cache, _listing) = refreshed_cache().await;
    let state = Arc::new(AppState::new(directory, cache, "BSR"));
    let addr = start_test_server(state).await;

    let body: Value = reqwest::get(format!("http://{addr}/healthz"))
        .await
        .expect("health request")
        .json()
        .await
        .expect("health body");

    assert_eq!(body["status"].as_str(), Some("ok"));
    assert_eq!(body["phrases"].as_u64(), Some(1));
    assert_eq!(body["servers"].as_u64(), Some(2));
}
