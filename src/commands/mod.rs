//! This module aggregates all the command modules for the bot.

/// The DJ module: music playback and lyrics commands.
pub mod dj;
/// General purpose commands (e.g., ping).
pub mod general;
