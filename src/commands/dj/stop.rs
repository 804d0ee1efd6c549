use tracing::warn;

use crate::commands::dj::utils::{
    embedded_messages,
    voice_manager::{DjError, VoiceManager},
};
use crate::{CommandResult, Context};

/// Stop playback, clear the queue, and leave the voice channel
#[poise::command(slash_command, category = "DJ")]
pub async fn stop(ctx: Context<'_>) -> CommandResult {
    let guild_id = ctx.guild_id().ok_or_else(|| {
        Box::new(DjError::NotInGuild) as Box<dyn std::error::Error + Send + Sync>
    })?;

    ctx.defer().await?;

    if VoiceManager::get_call(ctx.serenity_context(), guild_id)
        .await
        .is_err()
    {
        ctx.send(embedded_messages::bot_not_in_voice_channel())
            .await?;
        return Ok(());
    }

    if let Some(player) = ctx.data().players.get(guild_id) {
        player.stop().await?;
    }

    // Leaving is best-effort once playback has been torn down
    if let Err(e) = VoiceManager::leave_channel(ctx.serenity_context(), guild_id).await {
        warn!("Failed to leave voice channel during stop: {}", e);
    }

    ctx.send(embedded_messages::stopped()).await?;

    Ok(())
}
