pub mod ping;

use crate::{Data, Error};

/// Registers the general module's commands
pub fn register() -> Result<Vec<poise::Command<Data, Error>>, Error> {
    Ok(vec![ping::ping()])
}
