//! Defines `ResolvedTrack`, the product of one extractor resolution.

use std::time::Duration;

use crate::commands::dj::utils::voice_manager::{DjError, DjResult};

/// Metadata for a playable track, extracted from one yt-dlp run.
///
/// `url` is the canonical page URL, not a stream locator; stream
/// locators expire and are extracted again when playback starts.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTrack {
    pub title: String,
    pub url: String,
    pub duration: Option<Duration>,
    pub thumbnail: Option<String>,
}

impl ResolvedTrack {
    /// Parse the output of `yt-dlp -j` into a track reference.
    ///
    /// Search targets can come back as a result list; the first entry
    /// wins, matching the resolver's first-match contract.
    pub fn from_ytdlp_json(json: &str) -> DjResult<Self> {
        let value: serde_json::Value = serde_json::from_str(json).map_err(|e| {
            DjError::Resolution(format!("Failed to parse extractor output: {}", e))
        })?;

        let entry = match value.get("entries").and_then(|e| e.as_array()) {
            Some(entries) => entries
                .first()
                .ok_or_else(|| DjError::Resolution("No results for query".to_string()))?,
            None => &value,
        };

        let title = entry["title"]
            .as_str()
            .unwrap_or("Unknown Title")
            .to_string();

        let url = entry["webpage_url"]
            .as_str()
            .ok_or_else(|| {
                DjError::Resolution("Extractor output is missing a page URL".to_string())
            })?
            .to_string();

        let duration = entry["duration"].as_f64().map(Duration::from_secs_f64);

        let thumbnail = entry["thumbnail"].as_str().map(|s| s.to_string());

        Ok(Self {
            title,
            url,
            duration,
            thumbnail,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_a_single_video() {
        let track = ResolvedTrack::from_ytdlp_json(
            r#"{
                "title": "Binks' Sake",
                "webpage_url": "https://www.youtube.com/watch?v=abc123",
                "duration": 245.0,
                "thumbnail": "https://i.ytimg.com/vi/abc123/hq720.jpg"
            }"#,
        )
        .unwrap();

        assert_eq!(track.title, "Binks' Sake");
        assert_eq!(track.url, "https://www.youtube.com/watch?v=abc123");
        assert_eq!(track.duration, Some(Duration::from_secs(245)));
        assert_eq!(
            track.thumbnail.as_deref(),
            Some("https://i.ytimg.com/vi/abc123/hq720.jpg")
        );
    }

    #[test]
    fn takes_the_first_entry_of_a_result_list() {
        let track = ResolvedTrack::from_ytdlp_json(
            r#"{
                "entries": [
                    {"title": "First", "webpage_url": "https://www.youtube.com/watch?v=first"},
                    {"title": "Second", "webpage_url": "https://www.youtube.com/watch?v=second"}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(track.title, "First");
        assert_eq!(track.url, "https://www.youtube.com/watch?v=first");
    }

    #[test]
    fn missing_title_falls_back() {
        let track = ResolvedTrack::from_ytdlp_json(
            r#"{"webpage_url": "https://www.youtube.com/watch?v=abc123"}"#,
        )
        .unwrap();

        assert_eq!(track.title, "Unknown Title");
        assert_eq!(track.duration, None);
        assert_eq!(track.thumbnail, None);
    }

    #[test]
    fn missing_page_url_is_a_resolution_error() {
        let result = ResolvedTrack::from_ytdlp_json(r#"{"title": "No URL"}"#);
        assert_matches!(result, Err(DjError::Resolution(_)));
    }

    #[test]
    fn empty_result_list_is_a_resolution_error() {
        let result = ResolvedTrack::from_ytdlp_json(r#"{"entries": []}"#);
        assert_matches!(result, Err(DjError::Resolution(_)));
    }

    #[test]
    fn garbage_output_is_a_resolution_error() {
        let result = ResolvedTrack::from_ytdlp_json("ERROR: not json");
        assert_matches!(result, Err(DjError::Resolution(_)));
    }
}
