//! Commands sent from the host to the simulation.
//!
//! Commands may originate on any thread; they are queued and applied in
//! order on the control thread.

use serde::{Deserialize, Serialize};

use crate::enums::HostileKind;
use crate::events::ContactEvent;
use crate::types::TickTicket;

/// All host inputs the session understands.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum HostCommand {
    /// Player tapped to place the rig at the current reticle.
    ConfirmPlacement,
    /// Player pressed the fire button.
    Fire,
    /// Physics reported a contact.
    Contact { event: ContactEvent },
    /// A platform timer owned by the host fired for one spawner cadence.
    SpawnerTick { kind: HostileKind, ticket: TickTicket },
    /// Advance logical time by `dt` seconds.
    Tick { dt: f64 },
}
