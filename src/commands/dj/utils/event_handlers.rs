use poise::serenity_prelude as serenity;
use serenity::async_trait;
use tokio::sync::mpsc::UnboundedSender;
use tracing::warn;

use super::player::PlayerEvent;

/// Event handler for when a song ends.
///
/// Songbird invokes this on the audio driver's context, so it must not
/// touch player state directly: it posts an event that the player's own
/// task picks up, on the same serialized path every command takes.
pub struct SongEndNotifier {
    events: UnboundedSender<PlayerEvent>,
}

impl SongEndNotifier {
    pub fn new(events: UnboundedSender<PlayerEvent>) -> Self {
        Self { events }
    }
}

#[async_trait]
impl songbird::EventHandler for SongEndNotifier {
    async fn act(&self, ctx: &songbird::EventContext<'_>) -> Option<songbird::Event> {
        if let songbird::EventContext::Track(_) = ctx {
            if self.events.send(PlayerEvent::TrackEnded).is_err() {
                warn!("Player event channel closed; dropping track-end event");
            }
        }
        None
    }
}
