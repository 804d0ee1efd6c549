//! Integration tests for the Genius lyrics pipeline, driven against a
//! mock HTTP server.

mod common;

use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{bearer_token, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use gomu::commands::dj::utils::genius::GeniusClient;
use gomu::commands::dj::utils::lyrics_format;
use gomu::commands::dj::utils::voice_manager::DjError;

fn client_for(server: &MockServer) -> GeniusClient {
    GeniusClient::new("test-token".to_string()).with_base_url(server.uri())
}

#[tokio::test]
async fn resolves_lyrics_through_search_and_page_scrape() {
    common::init();
    let server = MockServer::start().await;

    let page_url = format!("{}/songs/airborne", server.uri());
    let search_body = json!({
        "response": {
            "hits": [
                {
                    "result": {
                        "full_title": "Airborne by The Examples",
                        "url": page_url,
                    }
                }
            ]
        }
    });

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "Airborne"))
        .and(bearer_token("test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_body))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/songs/airborne"))
        .respond_with(ResponseTemplate::new(200).set_body_string(common::sample_song_page()))
        .mount(&server)
        .await;

    let lyrics = client_for(&server).fetch("Airborne").await.unwrap();
    assert_eq!(lyrics.source_url, page_url);

    let formatted = lyrics_format::format_lyrics(&lyrics.text);
    assert!(formatted.starts_with("**Verse 1**"), "got: {}", formatted);
    assert!(formatted.contains("Up in the sky"));
    assert!(formatted.contains("**Chorus**"));
    assert!(formatted.contains("Airborne & free"));
    assert!(formatted.contains("**Outro**"));
    assert!(!formatted.contains("Embed"));
    assert!(!formatted.contains("Contributors"));
}

#[tokio::test]
async fn no_hits_reports_lyrics_not_found() {
    common::init();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"response": {"hits": []}})),
        )
        .mount(&server)
        .await;

    let result = client_for(&server).search_song("Unknown Song").await;
    assert_matches!(result, Err(DjError::LyricsNotFound(_)));
}

#[tokio::test]
async fn provider_failures_surface_as_external_api_errors() {
    common::init();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let result = client_for(&server).search_song("Airborne").await;
    assert_matches!(result, Err(DjError::ExternalApi(_)));
}

#[tokio::test]
async fn pages_without_lyric_containers_report_not_found() {
    common::init();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/songs/empty"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("<html><body>no lyrics here</body></html>"),
        )
        .mount(&server)
        .await;

    let page_url = format!("{}/songs/empty", server.uri());
    let result = client_for(&server).lyrics_text(&page_url).await;
    assert_matches!(result, Err(DjError::LyricsNotFound(_)));
}
