//! The DJ module: sequential music playback and lyrics for a guild's
//! voice channel.

pub mod lyrics;
pub mod pause;
pub mod play;
pub mod skip;
pub mod stop;

pub mod audio_sources;
pub mod utils;

use crate::{Data, Error};

/// Registers the DJ module's commands
pub fn register() -> Result<Vec<poise::Command<Data, Error>>, Error> {
    Ok(vec![
        play::play(),
        skip::skip(),
        stop::stop(),
        pause::pause(),
        lyrics::lyrics(),
    ])
}
