use tracing::{error, info};

use crate::commands::dj::utils::{
    embedded_messages,
    genius::GeniusClient,
    lyrics_format,
    voice_manager::DjError,
};
use crate::{CommandResult, Context};

/// Show lyrics for the current track
#[poise::command(slash_command, category = "DJ")]
pub async fn lyrics(ctx: Context<'_>) -> CommandResult {
    let guild_id = ctx.guild_id().ok_or_else(|| {
        Box::new(DjError::NotInGuild) as Box<dyn std::error::Error + Send + Sync>
    })?;

    let current_title = match ctx.data().players.get(guild_id) {
        Some(player) => player.current_title().await,
        None => None,
    };

    let Some(current_title) = current_title else {
        ctx.send(embedded_messages::no_track_playing()).await?;
        return Ok(());
    };

    let client = match GeniusClient::from_env() {
        Ok(client) => client,
        Err(err) => {
            error!("Lyrics lookup unavailable: {}", err);
            ctx.send(embedded_messages::lyrics_not_configured()).await?;
            return Ok(());
        }
    };

    ctx.defer().await?;

    let query = lyrics_format::normalize_title(&current_title);
    info!("Looking up lyrics for '{}' (from '{}')", query, current_title);

    let lyrics = match client.fetch(&query).await {
        Ok(lyrics) => lyrics,
        Err(DjError::LyricsNotFound(_)) => {
            ctx.send(embedded_messages::lyrics_not_found(&query)).await?;
            return Ok(());
        }
        Err(err) => {
            error!("Lyrics lookup for '{}' failed: {}", query, err);
            ctx.send(embedded_messages::lyrics_lookup_failed()).await?;
            return Ok(());
        }
    };

    let body = lyrics_format::format_lyrics(&lyrics.text);
    if body.is_empty() {
        ctx.send(embedded_messages::lyrics_not_found(&query)).await?;
        return Ok(());
    }

    match lyrics_format::render_message(&query, &body) {
        Some(message) => {
            ctx.send(embedded_messages::lyrics_content(message)).await?;
        }
        None => {
            ctx.send(embedded_messages::lyrics_too_long(&query, &lyrics.source_url))
                .await?;
        }
    }

    Ok(())
}
