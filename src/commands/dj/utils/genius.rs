//! Genius API client for lyrics lookups.
//!
//! Search goes through the documented `/search` endpoint; the lyrics
//! themselves are not part of the API, so they are pulled out of the
//! song page's lyric containers.

use regex::Regex;
use reqwest::header;
use std::env;
use std::sync::LazyLock;

use super::voice_manager::{DjError, DjResult};
use crate::HTTP_CLIENT;

const GENIUS_API_URL: &str = "https://api.genius.com";

/// First search hit for a lyrics query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongHit {
    pub title: String,
    pub url: String,
}

/// Fetched lyrics plus the page they came from
#[derive(Debug, Clone)]
pub struct Lyrics {
    pub text: String,
    pub source_url: String,
}

/// Genius API client
pub struct GeniusClient {
    token: String,
    base_url: String,
}

impl GeniusClient {
    /// Build a client from the GENIUS_ACCESS_TOKEN environment variable
    pub fn from_env() -> DjResult<Self> {
        let token = env::var("GENIUS_ACCESS_TOKEN")
            .map_err(|_| DjError::Config("GENIUS_ACCESS_TOKEN not set".to_string()))?;
        Ok(Self::new(token))
    }

    pub fn new(token: String) -> Self {
        Self {
            token,
            base_url: GENIUS_API_URL.to_string(),
        }
    }

    /// Point the client at a different API host
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Search for a song by title, taking the first hit
    pub async fn search_song(&self, query: &str) -> DjResult<SongHit> {
        let url = format!("{}/search", self.base_url);

        let response = HTTP_CLIENT
            .get(&url)
            .query(&[("q", query)])
            .header(header::AUTHORIZATION, format!("Bearer {}", self.token))
            .send()
            .await
            .map_err(|e| {
                DjError::ExternalApi(format!("Failed to search lyrics provider: {}", e))
            })?;

        if !response.status().is_success() {
            return Err(DjError::ExternalApi(format!(
                "Lyrics provider error: {}",
                response.status()
            )));
        }

        let body: serde_json::Value = response.json().await.map_err(|e| {
            DjError::ExternalApi(format!("Failed to parse search response: {}", e))
        })?;

        let hit = body["response"]["hits"]
            .as_array()
            .and_then(|hits| hits.first())
            .ok_or_else(|| DjError::LyricsNotFound(query.to_string()))?;

        let result = &hit["result"];

        let title = result["full_title"]
            .as_str()
            .or_else(|| result["title"].as_str())
            .unwrap_or(query)
            .to_string();

        let url = result["url"]
            .as_str()
            .ok_or_else(|| {
                DjError::ExternalApi("Search hit is missing a page URL".to_string())
            })?
            .to_string();

        Ok(SongHit { title, url })
    }

    /// Fetch a song page and pull the raw lyrics text out of it
    pub async fn lyrics_text(&self, page_url: &str) -> DjResult<String> {
        let response = HTTP_CLIENT.get(page_url).send().await.map_err(|e| {
            DjError::ExternalApi(format!("Failed to fetch lyrics page: {}", e))
        })?;

        if !response.status().is_success() {
            return Err(DjError::ExternalApi(format!(
                "Lyrics page error: {}",
                response.status()
            )));
        }

        let html = response.text().await.map_err(|e| {
            DjError::ExternalApi(format!("Failed to read lyrics page: {}", e))
        })?;

        extract_lyrics(&html).ok_or_else(|| DjError::LyricsNotFound(page_url.to_string()))
    }

    /// Full pipeline: search by (already normalized) title, then scrape
    /// the hit's page
    pub async fn fetch(&self, title: &str) -> DjResult<Lyrics> {
        let hit = self.search_song(title).await?;
        let text = self.lyrics_text(&hit.url).await?;

        Ok(Lyrics {
            text,
            source_url: hit.url,
        })
    }
}

static LYRICS_CONTAINER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)<div[^>]*data-lyrics-container="true"[^>]*>(.*?)</div>"#).unwrap()
});

static BR_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<br\s*/?>").unwrap());

static TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());

/// Pull the raw lyrics text out of a song page
fn extract_lyrics(html: &str) -> Option<String> {
    let mut text = String::new();

    for captures in LYRICS_CONTAINER_REGEX.captures_iter(html) {
        let block = &captures[1];
        let block = BR_REGEX.replace_all(block, "\n");
        let block = TAG_REGEX.replace_all(&block, "");
        text.push_str(decode_entities(&block).trim_matches('\n'));
        text.push('\n');
    }

    if text.trim().is_empty() { None } else { Some(text) }
}

// &amp; last, so already-escaped entities do not double-decode
fn decode_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#x27;", "'")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn extracts_text_from_lyric_containers() {
        let html = concat!(
            "<html><body><div class=\"header\">Header junk</div>",
            "<div data-lyrics-container=\"true\" class=\"Lyrics__Container\">",
            "Line one<br>Line two<br/><i>Line three</i></div>",
            "<div data-lyrics-container=\"true\">Line four</div>",
            "</body></html>"
        );

        let text = extract_lyrics(html).unwrap();
        assert_eq!(text, "Line one\nLine two\nLine three\nLine four\n");
    }

    #[test]
    fn pages_without_containers_yield_nothing() {
        assert_eq!(extract_lyrics("<html><body>Nope</body></html>"), None);
    }

    #[test]
    fn entities_decode_once() {
        assert_eq!(decode_entities("Me &amp; You"), "Me & You");
        assert_eq!(decode_entities("don&#x27;t"), "don't");
        assert_eq!(decode_entities("&amp;lt;"), "&lt;");
    }
}
