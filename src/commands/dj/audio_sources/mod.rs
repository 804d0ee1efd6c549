//! Resolution of free-text queries and URLs into playable track
//! references via the `yt-dlp` command-line tool.

pub mod track_metadata;
pub mod youtube;

pub use track_metadata::ResolvedTrack;

use url::Url;

use crate::commands::dj::utils::voice_manager::DjResult;
use youtube::YoutubeApi;

/// A utility struct providing general helper functions for audio sources
pub struct AudioSource;

impl AudioSource {
    /// Performs a basic check if the input string can be parsed as a URL.
    /// Does not validate if the URL is actually reachable.
    pub fn is_url(input: &str) -> bool {
        Url::parse(input).is_ok()
    }

    /// Resolve a query or URL to a playable track reference.
    ///
    /// Read-only: callers only touch queue state once resolution has
    /// succeeded.
    pub async fn resolve(query: &str) -> DjResult<ResolvedTrack> {
        if Self::is_url(query) {
            YoutubeApi::from_url(query)
        } else {
            YoutubeApi::from_search(query)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_are_detected() {
        assert!(AudioSource::is_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ"));
        assert!(AudioSource::is_url("https://youtu.be/dQw4w9WgXcQ"));
    }

    #[test]
    fn search_terms_are_not_urls() {
        assert!(!AudioSource::is_url("never gonna give you up"));
        assert!(!AudioSource::is_url("rick astley"));
    }
}
