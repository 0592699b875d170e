//! Messages and results shared between the host thread and its owner.

use ungoliant_core::state::FrameSnapshot;
use ungoliant_core::surface::DrawCommand;

/// Commands sent to the frame-driver thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostCommand {
    /// The drawing surface changed size.
    Resize { width: u32, height: u32 },
    /// Cancel the pending frame, detach listeners and exit the thread.
    Stop,
}

/// What the frame-driver thread hands back when it exits.
#[derive(Debug, Clone)]
pub struct HostReport {
    /// Frames rendered, including the initial one.
    pub frames: u64,
    pub snapshot: FrameSnapshot,
    /// Draw commands of the last rendered frame.
    pub last_frame: Vec<DrawCommand>,
}
