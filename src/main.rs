//! Tank monitor — main entry point.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  Adapters (outer ring)                   │
//! │                                                          │
//! │  ConsoleInput     HardwareAdapter       LogEventSink     │
//! │  (InputPort)      (ActuatorPort)        (EventSink)      │
//! │                                                          │
//! │  ─────────────── Port Trait Boundary ──────────────      │
//! │                                                          │
//! │  ┌────────────────────────────────────────────────┐      │
//! │  │            AppService (pure logic)             │      │
//! │  │   TankState · ThresholdMonitor · Renderer      │      │
//! │  └────────────────────────────────────────────────┘      │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Type a fill code (A–E) and press enter. The loop ends when stdin closes.

use std::time::Duration;

use anyhow::{Context, Result};
use env_logger::Env;
use log::info;

use tankmon::adapters::console::ConsoleInput;
use tankmon::adapters::hardware::SimHardware;
use tankmon::adapters::log_sink::LogEventSink;
use tankmon::app::commands::FillCommand;
use tankmon::app::ports::InputPort;
use tankmon::app::service::AppService;
use tankmon::config;
use tankmon::tank::CAPACITY_LITRES;

fn main() -> Result<()> {
    // ── 1. Logging ────────────────────────────────────────────
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    info!("Tank monitor v{} started", env!("CARGO_PKG_VERSION"));
    info!("Maximum capacity: {}L", CAPACITY_LITRES);
    let help = FillCommand::ALL
        .iter()
        .map(|cmd| format!("{}={}L", cmd.code() as char, cmd.litres()))
        .collect::<Vec<_>>()
        .join(", ");
    info!("Keys: {}", help);

    // ── 2. Configuration ──────────────────────────────────────
    let config = config::load_from_env();
    config
        .validate()
        .context("startup configuration is invalid")?;
    let poll_interval = Duration::from_millis(u64::from(config.poll_interval_ms));

    // ── 3. Adapters ───────────────────────────────────────────
    let mut hw = SimHardware::simulated(&config);
    let mut sink = LogEventSink::new();
    let mut input = ConsoleInput::new(std::io::stdin().lock());

    // ── 4. App service ────────────────────────────────────────
    let mut app = AppService::new(config);
    app.start(&mut hw, &mut sink);

    info!("System ready. Waiting for input.");

    // ── 5. Main loop ──────────────────────────────────────────
    loop {
        // Outcomes are already reported through the event sink.
        let _ = app.poll(&mut input, &mut hw, &mut sink);
        if !input.is_connected() {
            break;
        }
        std::thread::sleep(poll_interval);
    }

    info!(
        "Input closed. Level {}L, {} fills accepted, {} rejected",
        app.level(),
        app.accepted_count(),
        app.rejected_count()
    );
    Ok(())
}
