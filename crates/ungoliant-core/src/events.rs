//! Notifications emitted by the animation for the surrounding UI.

use serde::{Deserialize, Serialize};

/// Payload-less notifications, delivered in emission order within a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// A missile left the player.
    MissileFired,
    /// An explosion was drawn. Emitted once per rendered frame for every
    /// live explosion, not once per hit.
    Explosion,
}
