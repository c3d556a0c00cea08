//! Writes drone actions to the referee, one line per owned drone.

use std::io::Write;

use seabed_core::commands::DroneAction;
use seabed_core::error::Result;
use seabed_core::world::DroneId;

/// Emit a turn's actions in the order given and flush.
pub fn emit_actions<W: Write>(out: &mut W, actions: &[(DroneId, DroneAction)]) -> Result<()> {
    for (drone, action) in actions {
        tracing::trace!(drone, %action, "emit");
        writeln!(out, "{action}")?;
    }
    out.flush()?;
    Ok(())
}
