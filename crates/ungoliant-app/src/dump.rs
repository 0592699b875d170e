//! JSON dump of the final frame.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use ungoliant_core::state::FrameSnapshot;
use ungoliant_core::surface::DrawCommand;

use crate::ledger::CostLedger;
use crate::state::HostReport;

#[derive(Debug, Serialize)]
struct FrameDump<'a> {
    frames: u64,
    ledger: &'a CostLedger,
    asymmetry_ratio: String,
    snapshot: &'a FrameSnapshot,
    draw_commands: &'a [DrawCommand],
}

pub fn to_json(report: &HostReport, ledger: &CostLedger) -> Result<String> {
    let dump = FrameDump {
        frames: report.frames,
        ledger,
        asymmetry_ratio: ledger.asymmetry_ratio(),
        snapshot: &report.snapshot,
        draw_commands: &report.last_frame,
    };
    serde_json::to_string_pretty(&dump).context("serialize frame dump")
}

pub fn write(path: &Path, report: &HostReport, ledger: &CostLedger) -> Result<()> {
    let json = to_json(report, ledger)?;
    std::fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
    log::info!("Wrote frame dump to {}", path.display());
    Ok(())
}
