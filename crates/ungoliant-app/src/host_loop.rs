//! Frame-driver thread: runs the scheduler at a fixed virtual tick.
//!
//! The scheduler and everything it owns are created inside this thread,
//! so all simulation state stays single-threaded. Commands arrive via
//! `mpsc` channel; notifications leave through another channel.

use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Context, Result};

use ungoliant_core::events::SimEvent;
use ungoliant_core::surface::RecordingSurface;
use ungoliant_sim::engine::SimConfig;
use ungoliant_sim::Scheduler;

use crate::config::HostConfig;
use crate::state::{HostCommand, HostReport};

/// Handle to a running frame-driver thread.
pub struct HostHandle {
    commands: mpsc::Sender<HostCommand>,
    thread: JoinHandle<Result<HostReport>>,
}

impl HostHandle {
    pub fn send(&self, command: HostCommand) -> Result<()> {
        self.commands
            .send(command)
            .map_err(|e| anyhow!("frame loop is gone: {e}"))
    }

    /// Ask the loop to stop. A loop that already exited is not an error.
    pub fn stop(&self) {
        let _ = self.commands.send(HostCommand::Stop);
    }

    /// Wait for the thread to exit and collect its report.
    pub fn join(self) -> Result<HostReport> {
        self.thread
            .join()
            .map_err(|_| anyhow!("frame loop thread panicked"))?
    }
}

/// Spawn the frame loop. Notifications are forwarded to `event_tx` until
/// the loop stops, at which point the sender is dropped.
pub fn spawn_host_loop(config: HostConfig, event_tx: mpsc::Sender<SimEvent>) -> Result<HostHandle> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<HostCommand>();

    let thread = std::thread::Builder::new()
        .name("ungoliant-frame-loop".into())
        .spawn(move || run_host_loop(&config, cmd_rx, event_tx))
        .context("spawn frame loop thread")?;

    Ok(HostHandle {
        commands: cmd_tx,
        thread,
    })
}

/// The frame loop. Runs until Stop, channel disconnect or `max_frames`.
fn run_host_loop(
    config: &HostConfig,
    cmd_rx: mpsc::Receiver<HostCommand>,
    event_tx: mpsc::Sender<SimEvent>,
) -> Result<HostReport> {
    let viewport = config.viewport();
    let mut scheduler = Scheduler::new(SimConfig { seed: config.seed }, viewport);
    scheduler.bus_mut().forward_to(event_tx);
    scheduler.start(Some(RecordingSurface::new(
        config.viewport_width,
        config.viewport_height,
    )))?;

    let frame_ms = config.frame_ms();
    let frame_duration = Duration::from_secs_f64(frame_ms / 1_000.0);
    // Frame 0 already ran inside `start`.
    let mut frames_run: u64 = 1;
    let mut next_frame_time = Instant::now();

    'frames: loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(HostCommand::Resize { width, height }) => scheduler.resize(width, height),
                Ok(HostCommand::Stop) => break 'frames,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => break 'frames,
            }
        }

        if config.max_frames.is_some_and(|max| frames_run >= max) {
            break;
        }

        // 2. Keep only the newest frame's commands
        if let Some(surface) = scheduler.surface_mut() {
            surface.clear();
        }

        // 3. Advance one frame on the virtual clock
        if !scheduler.on_tick(frames_run as f64 * frame_ms) {
            break;
        }
        frames_run += 1;

        // 4. Sleep until next frame when pacing against the wall clock
        if config.realtime {
            next_frame_time += frame_duration;
            let now = Instant::now();
            if next_frame_time > now {
                std::thread::sleep(next_frame_time - now);
            } else if now - next_frame_time > frame_duration * 2 {
                // Fell behind by more than two frames: drop the backlog
                next_frame_time = now;
            }
        }
    }

    let last_frame = scheduler
        .surface_mut()
        .map(|surface| surface.take_commands())
        .unwrap_or_default();
    let report = HostReport {
        frames: scheduler.animation().time().frame,
        snapshot: scheduler.animation().snapshot(),
        last_frame,
    };
    scheduler.stop();
    Ok(report)
}
