use std::path::PathBuf;
use std::sync::mpsc;

use anyhow::Result;

use ungoliant_app::config;
use ungoliant_app::dump;
use ungoliant_app::host_loop::spawn_host_loop;
use ungoliant_app::ledger::{format_amount, CostLedger};

fn main() {
    // info+ unless RUST_LOG overrides
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .try_init();

    if let Err(e) = run() {
        log::error!("{e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = config::load(config_path.as_deref())?;
    log::info!(
        "Starting animation: seed {}, {}x{}, {} Hz, max frames {:?}",
        config.seed,
        config.viewport_width,
        config.viewport_height,
        config.tick_rate_hz,
        config.max_frames
    );

    let dump_path = config.dump_path.clone();
    let (event_tx, event_rx) = mpsc::channel();
    let handle = spawn_host_loop(config, event_tx)?;

    // Ends when the loop stops and drops the sender.
    let mut ledger = CostLedger::default();
    ledger.extend(event_rx.iter());

    let report = handle.join()?;
    log::info!(
        "Ran {} frames: {} missiles fired, {} targets left",
        report.frames,
        ledger.missiles_fired,
        report.snapshot.particles.len()
    );
    log::info!(
        "Friendly {} / OPFOR {} (ratio {})",
        format_amount(ledger.friendly),
        format_amount(ledger.opfor),
        ledger.asymmetry_ratio()
    );

    if let Some(path) = dump_path {
        dump::write(&path, &report, &ledger)?;
    }
    Ok(())
}
