use std::io;

use seabed_ai::EngineConfig;
use seabed_app::{game_loop, logging};
use seabed_core::error::Result;

fn main() -> Result<()> {
    logging::init();
    tracing::info!("seabed bot starting");

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    match game_loop::run(stdin, stdout, EngineConfig::default()) {
        Ok(turns) => {
            tracing::info!(turns, "game over");
            Ok(())
        }
        Err(err) => {
            tracing::error!(%err, "aborting");
            Err(err)
        }
    }
}
