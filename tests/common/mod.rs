//! Common test utilities and fixtures shared across the test suite

use std::sync::Once;
use tracing::Level;

static INIT: Once = Once::new();

/// Initialize tracing for tests
pub fn init() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .with_test_writer()
            .init();
    });
}

/// A Genius song page with two lyric containers, a title header before
/// the "Lyrics" marker, and a trailing embed marker
pub fn sample_song_page() -> String {
    concat!(
        "<html><body>",
        "<div class=\"SongHeader\">12 ContributorsAirborne Lyrics</div>",
        "<div data-lyrics-container=\"true\">Airborne Lyrics[Verse 1]<br>",
        "Up in the sky<br>Way up high<br><br>[Chorus]<br>Airborne &amp; free</div>",
        "<div data-lyrics-container=\"true\">[Outro]<br>Coming down42Embed</div>",
        "</body></html>"
    )
    .to_string()
}
