use tracing::info;

use crate::commands::dj::utils::{embedded_messages, voice_manager::DjError};
use crate::{CommandResult, Context};

/// Skip the current track
#[poise::command(slash_command, category = "DJ")]
pub async fn skip(ctx: Context<'_>) -> CommandResult {
    let guild_id = ctx.guild_id().ok_or_else(|| {
        Box::new(DjError::NotInGuild) as Box<dyn std::error::Error + Send + Sync>
    })?;

    let Some(player) = ctx.data().players.get(guild_id) else {
        ctx.send(embedded_messages::no_track_to_skip()).await?;
        return Ok(());
    };

    // Stopping the track routes through the end event to the next item
    match player.skip().await? {
        Some(title) => {
            info!("Skipped '{}' for guild {}", title, guild_id);
            ctx.send(embedded_messages::skipped(&title)).await?;
        }
        None => {
            ctx.send(embedded_messages::no_track_to_skip()).await?;
        }
    }

    Ok(())
}
