//! Host configuration loaded from an optional TOML file plus env overrides.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use ungoliant_core::constants::{DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH};
use ungoliant_core::types::Viewport;

/// Settings for the headless frame driver.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// RNG seed handed to the animation.
    pub seed: u64,
    pub viewport_width: u32,
    pub viewport_height: u32,
    /// Virtual frame rate; each frame advances the timestamp by 1000/rate ms.
    pub tick_rate_hz: u32,
    /// Stop after this many frames. `None` runs until stopped.
    pub max_frames: Option<u64>,
    /// Pace frames against the wall clock instead of running flat out.
    pub realtime: bool,
    /// Where to write the final frame's draw commands and snapshot as JSON.
    pub dump_path: Option<PathBuf>,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            viewport_width: DEFAULT_VIEWPORT_WIDTH as u32,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT as u32,
            tick_rate_hz: 60,
            max_frames: Some(3_600),
            realtime: false,
            dump_path: None,
        }
    }
}

impl HostConfig {
    pub fn viewport(&self) -> Viewport {
        Viewport::new(
            f64::from(self.viewport_width),
            f64::from(self.viewport_height),
        )
    }

    /// Milliseconds between virtual frames.
    pub fn frame_ms(&self) -> f64 {
        1_000.0 / f64::from(self.tick_rate_hz.max(1))
    }
}

/// Read `path` if given (a missing file is an error), otherwise start from
/// defaults; then apply env overrides.
pub fn load(path: Option<&Path>) -> Result<HostConfig> {
    let mut cfg = match path {
        Some(path) => {
            let txt = std::fs::read_to_string(path)
                .with_context(|| format!("read {}", path.display()))?;
            parse(&txt).with_context(|| format!("parse {}", path.display()))?
        }
        None => HostConfig::default(),
    };

    // Env overrides for quick tuning (optional)
    if let Ok(v) = std::env::var("UNGOLIANT_SEED") {
        cfg.seed = v.parse().context("UNGOLIANT_SEED")?;
    }
    if let Ok(v) = std::env::var("UNGOLIANT_MAX_FRAMES") {
        cfg.max_frames = if v.is_empty() || v == "none" {
            None
        } else {
            Some(v.parse().context("UNGOLIANT_MAX_FRAMES")?)
        };
    }
    if let Ok(v) = std::env::var("UNGOLIANT_REALTIME") {
        cfg.realtime = v.parse().context("UNGOLIANT_REALTIME")?;
    }
    Ok(cfg)
}

/// Parse a TOML document; absent keys take their defaults.
pub fn parse(txt: &str) -> Result<HostConfig> {
    toml::from_str::<HostConfig>(txt).context("parse host config TOML")
}
