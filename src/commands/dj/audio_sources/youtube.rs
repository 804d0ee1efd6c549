//! Executes `yt-dlp` to resolve queries and URLs into track metadata.

use std::env;
use std::process::Command;

use tracing::info;

use super::track_metadata::ResolvedTrack;
use crate::commands::dj::utils::voice_manager::{DjError, DjResult};

/// The main struct implementing YouTube lookups (via `yt-dlp`)
pub struct YoutubeApi;

impl YoutubeApi {
    /// Fetches metadata for the first search result for a search term
    pub fn from_search(search_term: &str) -> DjResult<ResolvedTrack> {
        info!("Resolving search term: {}", search_term);
        let search_param = format!("ytsearch:{}", search_term);
        Self::extract(&search_param)
    }

    /// Fetches metadata for a direct URL
    pub fn from_url(url: &str) -> DjResult<ResolvedTrack> {
        info!("Resolving URL: {}", url);
        Self::extract(url)
    }

    /// Execute yt-dlp to get metadata as JSON for the given target
    fn extract(target: &str) -> DjResult<ResolvedTrack> {
        let mut args = vec!["-j".to_string(), "--no-playlist".to_string()];

        // Optional cookies file for age-gated or rate-limited extraction
        if let Ok(cookies) = env::var("COOKIE_PATH") {
            args.push("--cookies".to_string());
            args.push(cookies);
        }

        args.push(target.to_string());

        let output = Command::new("yt-dlp").args(&args).output().map_err(|e| {
            DjError::Resolution(format!("Failed to run media extractor: {}", e))
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(DjError::Resolution(format!(
                "Extractor exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        ResolvedTrack::from_ytdlp_json(&String::from_utf8_lossy(&output.stdout))
    }
}
