//! Frame scheduler: start/stop lifecycle, per-frame ticking and resize.
//!
//! The scheduler is clock-agnostic. A driver (display callback, timer
//! thread, test loop) calls [`Scheduler::on_tick`] with a monotonically
//! increasing timestamp for as long as it returns `true`. Each tick runs
//! one [`Animation::frame`], then dispatches that frame's notifications on
//! the [`EventBus`]. Nothing here blocks; everything runs on the caller's
//! thread.

use anyhow::{bail, Result};

use ungoliant_core::surface::Surface;
use ungoliant_core::types::Viewport;

use crate::bridge::EventBus;
use crate::engine::{Animation, SimConfig};

/// Lifecycle of the frame loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// Not started yet.
    Idle,
    /// Running; every completed frame requests the next one.
    Running,
    /// Torn down. Terminal.
    Stopped,
}

/// Owns the animation, its drawing surface and the notification bus.
pub struct Scheduler<S: Surface> {
    animation: Animation,
    surface: Option<S>,
    bus: EventBus,
    state: LoopState,
}

impl<S: Surface> Scheduler<S> {
    pub fn new(config: SimConfig, viewport: Viewport) -> Self {
        Self {
            animation: Animation::new(config, viewport),
            surface: None,
            bus: EventBus::new(),
            state: LoopState::Idle,
        }
    }

    /// Attach the surface and run the first frame at timestamp 0.
    ///
    /// Fails without touching any state if no surface is available, or if
    /// the loop was already started.
    pub fn start(&mut self, surface: Option<S>) -> Result<()> {
        if self.state != LoopState::Idle {
            bail!("frame loop already started ({:?})", self.state);
        }
        let Some(mut surface) = surface else {
            bail!("no 2D drawing surface available; animation not started");
        };

        let viewport = self.animation.viewport();
        surface.resize(viewport.width as u32, viewport.height as u32);
        self.surface = Some(surface);
        self.state = LoopState::Running;
        log::info!(
            "frame loop started ({}x{})",
            viewport.width as u32,
            viewport.height as u32
        );

        self.run_frame(0.0);
        Ok(())
    }

    /// Run the pending frame. Returns whether another frame is requested;
    /// once this returns `false` the driver should stop calling.
    pub fn on_tick(&mut self, timestamp_ms: f64) -> bool {
        match self.state {
            LoopState::Running => {
                self.run_frame(timestamp_ms);
                true
            }
            _ => false,
        }
    }

    /// New surface pixel dimensions. Applied synchronously; live entities
    /// are not moved. Ignored once stopped.
    pub fn resize(&mut self, width: u32, height: u32) {
        if self.state == LoopState::Stopped {
            log::warn!("resize to {width}x{height} after stop ignored");
            return;
        }
        self.animation
            .resize(Viewport::new(f64::from(width), f64::from(height)));
        if let Some(surface) = self.surface.as_mut() {
            surface.resize(width, height);
        }
        log::debug!("surface resized to {width}x{height}");
    }

    /// Cancel the pending frame and detach every listener. Safe to call
    /// before `start` and more than once.
    pub fn stop(&mut self) {
        if self.state == LoopState::Stopped {
            return;
        }
        let frames = self.animation.time().frame;
        self.state = LoopState::Stopped;
        self.bus.clear();
        log::info!("frame loop stopped after {frames} frames");
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    pub fn loop_state(&self) -> LoopState {
        self.state
    }

    pub fn animation(&self) -> &Animation {
        &self.animation
    }

    pub fn animation_mut(&mut self) -> &mut Animation {
        &mut self.animation
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }

    pub fn bus_mut(&mut self) -> &mut EventBus {
        &mut self.bus
    }

    fn run_frame(&mut self, timestamp_ms: f64) {
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        self.animation.frame(timestamp_ms, surface);

        let events = self.animation.take_events();
        self.bus.dispatch(&events);
    }
}

impl<S: Surface> Drop for Scheduler<S> {
    fn drop(&mut self) {
        self.stop();
    }
}
