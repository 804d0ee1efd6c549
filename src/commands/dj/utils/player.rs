use std::sync::Arc;

use dashmap::DashMap;
use poise::serenity_prelude as serenity;
use serenity::client::Context;
use serenity::model::id::{ChannelId, GuildId};
use songbird::input::YoutubeDl;
use songbird::tracks::TrackHandle;
use songbird::{Event, Songbird, TrackEvent};
use tokio::sync::{Mutex, mpsc};
use tracing::{error, info, warn};

use super::embedded_messages;
use super::event_handlers::SongEndNotifier;
use super::queue::{PlaybackQueue, QueueEntry};
use super::voice_manager::{DjError, DjResult, VoiceManager};
use crate::HTTP_CLIENT;
use crate::commands::dj::audio_sources::{AudioSource, ResolvedTrack};

/// Events delivered to a player's scheduling task
pub enum PlayerEvent {
    /// The audio driver finished (or aborted) the current track
    TrackEnded,
}

/// Outcome of a `play` request
pub enum PlayOutcome {
    /// Playback started immediately; the track never entered the queue
    Started,
    /// The track was appended to the queue at this 1-based position
    Queued(usize),
}

/// The song currently being played
struct NowPlaying {
    handle: TrackHandle,
    title: String,
}

#[derive(Default)]
struct PlayerState {
    queue: PlaybackQueue,
    current: Option<NowPlaying>,
    /// Channel follow-up tracks are announced in
    announce_channel: Option<ChannelId>,
    /// Set by `stop` so the resulting end event does not advance
    stopping: bool,
}

/// Owns playback for one guild: the pending queue, the current track,
/// and the task that advances the queue when a track ends.
pub struct Player {
    guild_id: GuildId,
    http: Arc<serenity::Http>,
    songbird: Arc<Songbird>,
    state: Mutex<PlayerState>,
    events: mpsc::UnboundedSender<PlayerEvent>,
}

impl Player {
    fn new(guild_id: GuildId, http: Arc<serenity::Http>, songbird: Arc<Songbird>) -> Arc<Self> {
        let (events, mut rx) = mpsc::unbounded_channel();
        let player = Arc::new(Self {
            guild_id,
            http,
            songbird,
            state: Mutex::new(PlayerState::default()),
            events,
        });

        // Completion events funnel through this task so that queue
        // advancement takes the same mutex as command-driven mutations.
        let worker = Arc::clone(&player);
        tokio::spawn(async move {
            while let Some(event) = rx.recv().await {
                match event {
                    PlayerEvent::TrackEnded => {
                        if let Err(e) = worker.advance().await {
                            error!(
                                "Failed to advance queue for guild {}: {}",
                                worker.guild_id, e
                            );
                        }
                    }
                }
            }
        });

        player
    }

    /// Play a resolved track now, or queue its URL if something is
    /// already playing. `channel_id` is remembered for announcements.
    pub async fn play(&self, track: ResolvedTrack, channel_id: ChannelId) -> DjResult<PlayOutcome> {
        let mut state = self.state.lock().await;
        state.announce_channel = Some(channel_id);

        if state.current.is_some() {
            state.queue.enqueue(QueueEntry::new(track.url));
            return Ok(PlayOutcome::Queued(state.queue.len()));
        }

        self.start_track(&mut state, &track).await?;
        Ok(PlayOutcome::Started)
    }

    /// Stop the current track, letting the end event pull in the next
    /// one. Returns the skipped title, or None when idle.
    pub async fn skip(&self) -> DjResult<Option<String>> {
        let state = self.state.lock().await;
        match &state.current {
            Some(now) => {
                now.handle
                    .stop()
                    .map_err(|e| DjError::Playback(e.to_string()))?;
                Ok(Some(now.title.clone()))
            }
            None => Ok(None),
        }
    }

    /// Hard reset: drop every queued entry and end the current track
    pub async fn stop(&self) -> DjResult<()> {
        let mut state = self.state.lock().await;
        state.queue.clear();

        if let Some(now) = state.current.take() {
            // The driver still fires an end event for this stop
            state.stopping = true;
            now.handle
                .stop()
                .map_err(|e| DjError::Playback(e.to_string()))?;
        }

        Ok(())
    }

    /// Handle and title of the current track
    pub async fn current(&self) -> Option<(TrackHandle, String)> {
        let state = self.state.lock().await;
        state
            .current
            .as_ref()
            .map(|now| (now.handle.clone(), now.title.clone()))
    }

    /// Title of the current song, if any
    pub async fn current_title(&self) -> Option<String> {
        let state = self.state.lock().await;
        state.current.as_ref().map(|now| now.title.clone())
    }

    /// Begin audio output for `track` on the guild's active call.
    ///
    /// The input is built from the canonical page URL; the short-lived
    /// stream locator is extracted fresh on every start, and the driver
    /// retries transient network drops on its own.
    async fn start_track(&self, state: &mut PlayerState, track: &ResolvedTrack) -> DjResult<()> {
        let call = self
            .songbird
            .get(self.guild_id)
            .ok_or(DjError::NotConnected)?;

        let source = YoutubeDl::new(HTTP_CLIENT.clone(), track.url.clone());

        let mut handler = call.lock().await;
        let track_handle = handler.play_input(source.into());
        drop(handler);

        track_handle
            .add_event(
                Event::Track(TrackEvent::End),
                SongEndNotifier::new(self.events.clone()),
            )
            .map_err(|e| DjError::Playback(e.to_string()))?;

        info!(
            "Started playback of '{}' for guild {}",
            track.title, self.guild_id
        );

        state.current = Some(NowPlaying {
            handle: track_handle,
            title: track.title.clone(),
        });

        Ok(())
    }

    /// Move to the next queued track after the current one ended
    async fn advance(&self) -> DjResult<()> {
        let mut state = self.state.lock().await;
        state.current = None;

        if state.stopping {
            state.stopping = false;
            return Ok(());
        }

        // Entries hold only the page URL; re-resolve for a fresh title
        // and stream locator. A dead entry is skipped for the next one.
        let next = loop {
            let Some(entry) = state.queue.dequeue() else {
                info!("Queue empty for guild {}; going idle", self.guild_id);
                return Ok(());
            };

            match AudioSource::resolve(entry.url()).await {
                Ok(track) => break track,
                Err(e) => {
                    warn!("Skipping unplayable queue entry {}: {}", entry.url(), e);
                }
            }
        };

        self.start_track(&mut state, &next).await?;
        let announce_channel = state.announce_channel;
        drop(state);

        if let Some(channel_id) = announce_channel {
            let message = embedded_messages::now_playing_message(&next);
            if let Err(e) = channel_id.send_message(self.http.clone(), message).await {
                warn!(
                    "Failed to announce track for guild {}: {}",
                    self.guild_id, e
                );
            }
        }

        Ok(())
    }
}

/// Guild-to-player map, injected into command handlers through the
/// poise user data instead of living in process-wide state.
#[derive(Default)]
pub struct PlayerRegistry {
    players: DashMap<GuildId, Arc<Player>>,
}

impl PlayerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, guild_id: GuildId) -> Option<Arc<Player>> {
        self.players.get(&guild_id).map(|p| Arc::clone(p.value()))
    }

    /// Fetch the guild's player, creating it on first use
    pub async fn get_or_create(&self, ctx: &Context, guild_id: GuildId) -> DjResult<Arc<Player>> {
        let songbird = VoiceManager::get_songbird(ctx).await?;

        let player = self
            .players
            .entry(guild_id)
            .or_insert_with(|| Player::new(guild_id, ctx.http.clone(), songbird))
            .clone();

        Ok(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_starts_empty() {
        let registry = PlayerRegistry::new();
        assert!(registry.get(GuildId::new(1)).is_none());
    }
}
