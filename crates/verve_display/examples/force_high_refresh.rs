//! Drives the refresh-rate bridge against the headless host.
//!
//! The Android host wires `AndroidDisplay`/`AndroidWindow` into the same
//! bridge; the in-memory doubles show the flow without a device.
//!
//! Run with: cargo run -p verve_display --example force_high_refresh

use std::sync::{Arc, Mutex};

use verve_display::headless::{HeadlessDisplay, HeadlessWindow};
use verve_display::{
    CapabilityTier, CommandDispatcher, RefreshRateBridge, RefreshRateSink,
    HIGH_REFRESH_RATE_CHANNEL,
};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let display = Arc::new(HeadlessDisplay::with_rates(&[60.0, 90.0, 120.0]));
    let window = Arc::new(Mutex::new(HeadlessWindow::new()));
    let bridge = RefreshRateBridge::new(CapabilityTier::Modern, display.clone(), window.clone());

    let mut commands = CommandDispatcher::new();
    bridge.on_engine_ready(&mut commands);
    report("after engine hookup", &window);

    // The panel gains a mode while the app runs; the next command sees it.
    display.set_rates(&[60.0, 90.0, 120.0, 144.0]);
    let raw = r#"{"method":"setHighRefreshRate"}"#;
    match commands.dispatch_raw(HIGH_REFRESH_RATE_CHANNEL, raw) {
        Ok(reply) => println!("reply: {reply}"),
        Err(e) => println!("dispatch failed: {e}"),
    }
    report("after setHighRefreshRate", &window);
}

fn report(stage: &str, window: &Arc<Mutex<HeadlessWindow>>) {
    let rate = window
        .lock()
        .map(|w| w.preferred_refresh_rate())
        .unwrap_or(None);
    match rate {
        Some(rate) => println!("{stage}: preferred rate {rate} Hz"),
        None => println!("{stage}: no preference written"),
    }
}
