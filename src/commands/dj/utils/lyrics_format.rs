//! Title normalization and lyrics display formatting.

use regex::Regex;
use std::sync::LazyLock;

/// Discord message content limit
pub const MESSAGE_LIMIT: usize = 2000;

/// Length the lyrics body is cut to when the full message will not fit
pub const TRUNCATED_BODY_LIMIT: usize = 1900;

/// Notice appended to a truncated body
pub const TRUNCATION_NOTICE: &str = "\n\n*(truncated; full lyrics on Genius)*";

static PARENTHETICAL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([^)]*\)").unwrap());

static BRACKETED_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[[^\]]*\]").unwrap());

static OFFICIAL_VIDEO_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)official(?:\s+(?:music|lyric|lyrics|audio|hd|4k))*\s+video").unwrap()
});

static WHITESPACE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

static SECTION_HEADER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?m)^\[((?:Chorus|Verse(?:\s+\d+)?|Bridge|Pre-Chorus|Outro|Intro|Refrain|Hook)[^\]]*)\]\s*$",
    )
    .unwrap()
});

static EMBED_MARKER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\d*Embed\s*$").unwrap());

static BLANK_RUN_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{4,}").unwrap());

/// Normalize a track title into a lyrics search query.
///
/// Uploaders decorate titles with annotations that wreck provider
/// search; strip them and collapse the leftover whitespace.
pub fn normalize_title(title: &str) -> String {
    let title = PARENTHETICAL_REGEX.replace_all(title, " ");
    let title = BRACKETED_REGEX.replace_all(&title, " ");
    let title = OFFICIAL_VIDEO_REGEX.replace_all(&title, " ");

    WHITESPACE_REGEX.replace_all(&title, " ").trim().to_string()
}

/// Bold the bracketed section labels lyrics providers use.
/// Idempotent: already-decorated lines have no brackets left to match.
pub fn decorate_section_headers(text: &str) -> String {
    SECTION_HEADER_REGEX.replace_all(text, "**$1**").to_string()
}

/// Clean up a raw lyrics body for display:
/// provider boilerplate up to the "Lyrics" marker and the trailing embed
/// marker go, lines are trimmed, blank runs collapse, section labels
/// become headers.
pub fn format_lyrics(text: &str) -> String {
    let body = match text.find("Lyrics") {
        Some(index) => &text[index + "Lyrics".len()..],
        None => text,
    };

    let body = EMBED_MARKER_REGEX.replace_all(body, "");

    let trimmed = body
        .lines()
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n");

    let collapsed = BLANK_RUN_REGEX.replace_all(&trimmed, "\n\n");

    decorate_section_headers(&collapsed).trim().to_string()
}

/// Cut a body down to at most `max_chars` characters plus the
/// truncation notice
pub fn truncate_body(body: &str, max_chars: usize) -> String {
    if body.chars().count() <= max_chars {
        return body.to_string();
    }

    let cut: String = body.chars().take(max_chars).collect();
    format!("{}{}", cut.trim_end(), TRUNCATION_NOTICE)
}

/// Compose the final lyrics message, truncating the body when the full
/// text would not fit the transport limit. None means not even the
/// truncated form fits.
pub fn render_message(title: &str, body: &str) -> Option<String> {
    let full = format!("🎤 **{}**\n\n{}", title, body);
    if full.chars().count() <= MESSAGE_LIMIT {
        return Some(full);
    }

    let truncated = format!(
        "🎤 **{}**\n\n{}",
        title,
        truncate_body(body, TRUNCATED_BODY_LIMIT)
    );

    (truncated.chars().count() <= MESSAGE_LIMIT).then_some(truncated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("Song Name (Official Video) [Lyrics]", "Song Name")]
    #[case("Song Name Official Music Video", "Song Name")]
    #[case("Song Name OFFICIAL LYRIC VIDEO", "Song Name")]
    #[case("Artist - Song [4K Remaster] (Live)", "Artist - Song")]
    #[case("  Plain   Title  ", "Plain Title")]
    #[case("Untouched Title", "Untouched Title")]
    fn normalizes_titles(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(normalize_title(input), expected);
    }

    #[test]
    fn strips_boilerplate_before_the_lyrics_marker() {
        let raw = "42 ContributorsSong Title Lyrics[Verse 1]\nFirst line";
        let formatted = format_lyrics(raw);
        assert_eq!(formatted, "**Verse 1**\nFirst line");
    }

    #[test]
    fn strips_the_trailing_embed_marker() {
        let raw = "[Chorus]\nLast line42Embed";
        let formatted = format_lyrics(raw);
        assert_eq!(formatted, "**Chorus**\nLast line");
    }

    #[rstest]
    #[case("[Chorus]", "**Chorus**")]
    #[case("[Verse 2]", "**Verse 2**")]
    #[case("[Pre-Chorus]", "**Pre-Chorus**")]
    #[case("[Verse 1: Guest Artist]", "**Verse 1: Guest Artist**")]
    #[case("[Bridge]", "**Bridge**")]
    #[case("[Hook]", "**Hook**")]
    fn decorates_section_labels(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(decorate_section_headers(input), expected);
    }

    #[test]
    fn leaves_non_section_brackets_alone() {
        assert_eq!(decorate_section_headers("[2019 remix]"), "[2019 remix]");
    }

    #[test]
    fn header_decoration_is_idempotent() {
        let once = decorate_section_headers("[Chorus]\nline\n[Verse 1]");
        let twice = decorate_section_headers(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn formatting_is_idempotent_on_formatted_text() {
        let raw = "Song Title Lyrics[Intro]\n  line one  \n\n\n\n\nline two12Embed";
        let once = format_lyrics(raw);
        let twice = format_lyrics(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn collapses_long_blank_runs_to_one_blank_line() {
        let raw = "[Verse 1]\nline one\n\n\n\n\nline two";
        let formatted = format_lyrics(raw);
        assert_eq!(formatted, "**Verse 1**\nline one\n\nline two");
    }

    #[test]
    fn trims_each_line() {
        let formatted = format_lyrics("   first   \n   second   ");
        assert_eq!(formatted, "first\nsecond");
    }

    #[test]
    fn truncates_oversized_bodies() {
        let body = "x".repeat(5000);
        let truncated = truncate_body(&body, TRUNCATED_BODY_LIMIT);

        assert!(truncated.ends_with(TRUNCATION_NOTICE));
        let kept = truncated.strip_suffix(TRUNCATION_NOTICE).unwrap();
        assert!(kept.chars().count() <= TRUNCATED_BODY_LIMIT);
    }

    #[test]
    fn short_bodies_pass_through_untouched() {
        assert_eq!(truncate_body("short", TRUNCATED_BODY_LIMIT), "short");
    }

    #[test]
    fn renders_within_the_transport_limit() {
        let body = "la la la\n".repeat(600);
        let message = render_message("Binks' Sake", &body).unwrap();

        assert!(message.chars().count() <= MESSAGE_LIMIT);
        assert!(message.contains(TRUNCATION_NOTICE));
    }

    #[test]
    fn small_messages_are_not_truncated() {
        let message = render_message("Binks' Sake", "yo ho ho").unwrap();
        assert_eq!(message, "🎤 **Binks' Sake**\n\nyo ho ho");
    }

    #[test]
    fn impossible_fits_return_none() {
        let title = "t".repeat(MESSAGE_LIMIT);
        assert_eq!(render_message(&title, "body"), None);
    }
}
