use poise::serenity_prelude as serenity;
use serenity::client::Context;
use serenity::model::id::{ChannelId, GuildId};
use serenity::prelude::Mutex as SerenityMutex;
use songbird::{Call, Songbird};
use std::sync::Arc;
use thiserror::Error;

/// Errors that can occur during DJ operations
#[derive(Error, Debug)]
pub enum DjError {
    #[error("Not in a guild")]
    NotInGuild,

    #[error("Failed to join voice channel: {0}")]
    JoinError(String),

    #[error("Not connected to a voice channel")]
    NotConnected,

    #[error("Failed to get voice manager")]
    NoVoiceManager,

    #[error("User is not in a voice channel")]
    UserNotInVoiceChannel,

    #[error("Track resolution failed: {0}")]
    Resolution(String),

    #[error("Playback error: {0}")]
    Playback(String),

    #[error("External API error: {0}")]
    ExternalApi(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No lyrics found for '{0}'")]
    LyricsNotFound(String),
}

/// Result type for DJ operations
pub type DjResult<T> = Result<T, DjError>;

/// Voice-connection plumbing shared by the DJ commands
pub struct VoiceManager;

impl VoiceManager {
    /// Get the Songbird voice client from the context
    pub async fn get_songbird(ctx: &Context) -> DjResult<Arc<Songbird>> {
        songbird::get(ctx).await.ok_or(DjError::NoVoiceManager)
    }

    /// Get the current voice channel call handle
    pub async fn get_call(ctx: &Context, guild_id: GuildId) -> DjResult<Arc<SerenityMutex<Call>>> {
        let songbird = Self::get_songbird(ctx).await?;
        songbird.get(guild_id).ok_or(DjError::NotConnected)
    }

    /// Join a voice channel
    pub async fn join_channel(
        ctx: &Context,
        guild_id: GuildId,
        channel_id: ChannelId,
    ) -> DjResult<Arc<SerenityMutex<Call>>> {
        let songbird = Self::get_songbird(ctx).await?;

        let handle = songbird
            .join(guild_id, channel_id)
            .await
            .map_err(|e| DjError::JoinError(e.to_string()))?;

        Ok(handle)
    }

    /// Leave a voice channel
    pub async fn leave_channel(ctx: &Context, guild_id: GuildId) -> DjResult<()> {
        let songbird = Self::get_songbird(ctx).await?;

        if songbird.get(guild_id).is_none() {
            return Err(DjError::NotConnected);
        }

        songbird
            .remove(guild_id)
            .await
            .map_err(|_| DjError::JoinError("Failed to leave voice channel".to_string()))?;

        Ok(())
    }

    /// Get the voice channel ID that the user is currently in
    pub fn get_user_voice_channel(
        ctx: &Context,
        guild_id: GuildId,
        user_id: serenity::UserId,
    ) -> DjResult<ChannelId> {
        let guild = ctx.cache.guild(guild_id).ok_or(DjError::NotInGuild)?;

        let voice_state = guild
            .voice_states
            .get(&user_id)
            .ok_or(DjError::UserNotInVoiceChannel)?;

        let channel_id = voice_state
            .channel_id
            .ok_or(DjError::UserNotInVoiceChannel)?;

        Ok(channel_id)
    }
}
