//! Static registry of feature modules.
//!
//! Each module exposes a `register` entry point that yields its commands.
//! The registry is assembled at build time; a module that fails to
//! register is logged and skipped without affecting the others.

use tracing::{error, info};

use crate::{Data, Error};

/// One feature module known to the bot
pub struct Module {
    pub name: &'static str,
    pub register: fn() -> Result<Vec<poise::Command<Data, Error>>, Error>,
}

/// Every module the bot ships with
pub static MODULES: &[Module] = &[
    Module {
        name: "general",
        register: crate::commands::general::register,
    },
    Module {
        name: "dj",
        register: crate::commands::dj::register,
    },
];

/// Collect the commands of every module that registers cleanly
pub fn collect_commands() -> Vec<poise::Command<Data, Error>> {
    let mut commands = Vec::new();

    for module in MODULES {
        match (module.register)() {
            Ok(module_commands) => {
                info!(
                    "Loaded module: {} ({} commands)",
                    module.name,
                    module_commands.len()
                );
                commands.extend(module_commands);
            }
            Err(e) => {
                error!("Failed to load module {}: {}", module.name, e);
            }
        }
    }

    commands
}
