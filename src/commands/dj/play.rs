use tracing::{error, info};

use crate::commands::dj::audio_sources::AudioSource;
use crate::commands::dj::utils::{
    embedded_messages,
    player::PlayOutcome,
    voice_manager::{DjError, VoiceManager},
};
use crate::{CommandResult, Context};

/// Play a song by link or search query
#[poise::command(slash_command, category = "DJ")]
pub async fn play(
    ctx: Context<'_>,
    #[description = "URL or search query"] query: String,
) -> CommandResult {
    info!("Received play command with query: {}", query);
    let guild_id = ctx.guild_id().ok_or_else(|| {
        Box::new(DjError::NotInGuild) as Box<dyn std::error::Error + Send + Sync>
    })?;

    // The user must be in a voice channel before anything else happens
    let user_id = ctx.author().id;
    let channel_id =
        match VoiceManager::get_user_voice_channel(ctx.serenity_context(), guild_id, user_id) {
            Ok(channel_id) => channel_id,
            Err(err) => {
                info!("Rejecting play from {}: {}", user_id, err);
                ctx.send(embedded_messages::user_not_in_voice_channel())
                    .await?;
                return Ok(());
            }
        };

    // Defer the response since resolution might take time
    ctx.defer().await?;

    // Join the user's voice channel if not already connected
    if VoiceManager::get_call(ctx.serenity_context(), guild_id)
        .await
        .is_err()
    {
        if let Err(err) =
            VoiceManager::join_channel(ctx.serenity_context(), guild_id, channel_id).await
        {
            error!("Failed to join voice channel {}: {}", channel_id, err);
            ctx.send(embedded_messages::failed_to_join_voice_channel())
                .await?;
            return Ok(());
        }
    }

    // Resolve the query before touching any queue state
    let track = match AudioSource::resolve(&query).await {
        Ok(track) => track,
        Err(err) => {
            error!("Failed to resolve '{}': {}", query, err);
            ctx.send(embedded_messages::track_not_found()).await?;
            return Ok(());
        }
    };

    let player = ctx
        .data()
        .players
        .get_or_create(ctx.serenity_context(), guild_id)
        .await?;

    match player.play(track.clone(), ctx.channel_id()).await? {
        PlayOutcome::Started => {
            // Reply through the interaction; if it has expired, fall
            // back to a plain channel message
            if ctx.send(embedded_messages::now_playing(&track)).await.is_err() {
                let message = embedded_messages::now_playing_message(&track);
                ctx.channel_id().send_message(ctx.http(), message).await?;
            }
        }
        PlayOutcome::Queued(position) => {
            ctx.send(embedded_messages::added_to_queue(&track, position))
                .await?;
        }
    }

    Ok(())
}
