use ::serenity::all::{CreateEmbed, CreateMessage};
use poise::CreateReply;

use super::format_duration;
use crate::commands::dj::audio_sources::ResolvedTrack;

/// Parse the metadata for the now playing and added to queue embeds
fn parse_metadata(track: &ResolvedTrack) -> (String, String, String) {
    let title = track.title.clone();
    let url = track.url.clone();
    let duration_str = track
        .duration
        .map(format_duration)
        .unwrap_or_else(|| "Unknown duration".to_string());

    (title, url, duration_str)
}

fn now_playing_embed(track: &ResolvedTrack) -> CreateEmbed {
    let (title, url, duration_str) = parse_metadata(track);

    let mut embed = CreateEmbed::new()
        .title("🎵 Now Playing")
        .description(format!("[{}]({})", title, url))
        .field("Duration", format!("`{}`", duration_str), true)
        .color(0x00ff00);

    if let Some(thumbnail) = &track.thumbnail {
        embed = embed.thumbnail(thumbnail);
    }

    embed
}

/// Create an embed for when a song is now playing
pub fn now_playing(track: &ResolvedTrack) -> CreateReply {
    CreateReply::default().embed(now_playing_embed(track))
}

/// Channel message announcing a track outside an interaction
pub fn now_playing_message(track: &ResolvedTrack) -> CreateMessage {
    CreateMessage::new().embeds(vec![now_playing_embed(track)])
}

/// Create an embed for when a song is added to the queue
pub fn added_to_queue(track: &ResolvedTrack, position: usize) -> CreateReply {
    let (title, url, duration_str) = parse_metadata(track);

    CreateReply::default().embed(
        CreateEmbed::new()
            .title("🎵 Added to Queue")
            .description(format!("[{}]({})", title, url))
            .field("Duration", format!("`{}`", duration_str), true)
            .field("Position", format!("`#{}`", position), true)
            .color(0x00ff00),
    )
}

/// Create an embed for when a user is not connected to a voice channel
pub fn user_not_in_voice_channel() -> CreateReply {
    CreateReply::default()
        .embed(
            CreateEmbed::new()
                .title("❌ Error")
                .description("You need to be in a voice channel to play music")
                .color(0xff0000),
        )
        .ephemeral(true)
}

/// Create an embed for when the bot is not connected to a voice channel
pub fn bot_not_in_voice_channel() -> CreateReply {
    CreateReply::default().embed(
        CreateEmbed::new()
            .title("❌ Error")
            .description("I'm not connected to a voice channel")
            .color(0xff0000),
    )
}

/// Create an embed for when the bot fails to join a voice channel
pub fn failed_to_join_voice_channel() -> CreateReply {
    CreateReply::default().embed(
        CreateEmbed::new()
            .title("❌ Error")
            .description("I couldn't join your voice channel")
            .color(0xff0000),
    )
}

/// Create an embed for when a query does not resolve to a track
pub fn track_not_found() -> CreateReply {
    CreateReply::default().embed(
        CreateEmbed::new()
            .title("❌ Error")
            .description("I couldn't find that song")
            .color(0xff0000),
    )
}

/// Create an embed for when a track is skipped
pub fn skipped(title: &str) -> CreateReply {
    CreateReply::default().embed(
        CreateEmbed::new()
            .title("⏭️ Skipped")
            .description(format!("Skipped **{}**", title))
            .color(0x00ff00),
    )
}

/// Create an embed for when there is no track to skip
pub fn no_track_to_skip() -> CreateReply {
    CreateReply::default().embed(
        CreateEmbed::new()
            .title("❌ Error")
            .description("There's no track to skip")
            .color(0xff0000),
    )
}

/// Create an embed for when the bot stops playing music
pub fn stopped() -> CreateReply {
    CreateReply::default().embed(
        CreateEmbed::new()
            .title("⏹️ Stopped")
            .description("Playback stopped and queue cleared")
            .color(0x00ff00),
    )
}

/// Create an embed for when a track is paused
pub fn paused(title: &str) -> CreateReply {
    CreateReply::default().embed(
        CreateEmbed::new()
            .title("⏸️ Paused")
            .description(format!("Paused **{}**", title))
            .color(0x00ff00),
    )
}

/// Create an embed for when a track is resumed
pub fn resumed(title: &str) -> CreateReply {
    CreateReply::default().embed(
        CreateEmbed::new()
            .title("▶️ Resumed")
            .description(format!("Resumed **{}**", title))
            .color(0x00ff00),
    )
}

/// Create an embed for when a track is not in a pausable state
pub fn not_pausable() -> CreateReply {
    CreateReply::default().embed(
        CreateEmbed::new()
            .title("❌ Error")
            .description("The track is not in a pausable state")
            .color(0xff0000),
    )
}

/// Create an embed for when no track is playing
pub fn no_track_playing() -> CreateReply {
    CreateReply::default().embed(
        CreateEmbed::new()
            .title("❌ Error")
            .description("No track is currently playing")
            .color(0xff0000),
    )
}

/// Plain-content reply carrying a formatted lyrics body
pub fn lyrics_content(message: String) -> CreateReply {
    CreateReply::default().content(message)
}

/// Create an embed for when no lyrics match the current track
pub fn lyrics_not_found(title: &str) -> CreateReply {
    CreateReply::default().embed(
        CreateEmbed::new()
            .title("🎤 No Lyrics")
            .description(format!("I couldn't find lyrics for **{}**", title))
            .color(0xff0000),
    )
}

/// Create an embed for lyrics too large to deliver even truncated
pub fn lyrics_too_long(title: &str, url: &str) -> CreateReply {
    CreateReply::default().embed(
        CreateEmbed::new()
            .title("🎤 Lyrics")
            .description(format!(
                "The lyrics for **{}** are too long to post here; read them at {}",
                title, url
            ))
            .color(0xff0000),
    )
}

/// Create an embed for when the lyrics provider is not configured
pub fn lyrics_not_configured() -> CreateReply {
    CreateReply::default().embed(
        CreateEmbed::new()
            .title("❌ Error")
            .description("Lyrics lookups are not configured on this bot")
            .color(0xff0000),
    )
}

/// Create an embed for when a lyrics lookup fails outright
pub fn lyrics_lookup_failed() -> CreateReply {
    CreateReply::default().embed(
        CreateEmbed::new()
            .title("❌ Error")
            .description("Something went wrong fetching the lyrics")
            .color(0xff0000),
    )
}

/// Generic failure embed used by the dispatch error handler
pub fn command_failed() -> CreateReply {
    CreateReply::default().embed(
        CreateEmbed::new()
            .title("❌ Error")
            .description("Something went wrong running that command")
            .color(0xff0000),
    )
}
