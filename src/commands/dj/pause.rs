use songbird::tracks::PlayMode;

use crate::commands::dj::utils::{embedded_messages, voice_manager::DjError};
use crate::{CommandResult, Context};

/// Pause or resume the current track
#[poise::command(slash_command, category = "DJ")]
pub async fn pause(ctx: Context<'_>) -> CommandResult {
    let guild_id = ctx.guild_id().ok_or_else(|| {
        Box::new(DjError::NotInGuild) as Box<dyn std::error::Error + Send + Sync>
    })?;

    let current = match ctx.data().players.get(guild_id) {
        Some(player) => player.current().await,
        None => None,
    };

    match current {
        Some((track, title)) => {
            let track_info = track.get_info().await?;

            match track_info.playing {
                PlayMode::Play => {
                    track.pause()?;
                    ctx.send(embedded_messages::paused(&title)).await?;
                }
                PlayMode::Pause => {
                    track.play()?;
                    ctx.send(embedded_messages::resumed(&title)).await?;
                }
                _ => {
                    ctx.send(embedded_messages::not_pausable()).await?;
                }
            }
        }
        None => {
            ctx.send(embedded_messages::no_track_playing()).await?;
        }
    }

    Ok(())
}
