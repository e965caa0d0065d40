//! Engine hookup for the Android host
//!
//! The shell calls [`init_logging`] and [`configure_engine`] once from
//! `android_main`; everything afterwards flows through the command
//! channel.

#[cfg(target_os = "android")]
use std::sync::{Arc, Mutex};

#[cfg(target_os = "android")]
use android_activity::AndroidApp;
#[cfg(target_os = "android")]
use verve_display::{CommandDispatcher, RefreshRateBridge};

#[cfg(target_os = "android")]
use crate::display::{AndroidDisplay, AndroidWindow};
#[cfg(target_os = "android")]
use crate::host::{jni_err, with_activity};
#[cfg(target_os = "android")]
use crate::sdk::tier_for_sdk;

/// Initialize Android logging (logcat output).
#[cfg(target_os = "android")]
pub fn init_logging() {
    android_logger::init_once(
        android_logger::Config::default()
            .with_max_level(log::LevelFilter::Debug)
            .with_tag("VerveDisplay"),
    );

    use tracing_subscriber::layer::SubscriberExt;
    match tracing_android::layer("VerveDisplay") {
        Ok(layer) => {
            let subscriber = tracing_subscriber::registry().with(layer);
            let _ = tracing::subscriber::set_global_default(subscriber);
        }
        Err(e) => log::warn!("tracing layer unavailable: {e}"),
    }
}

/// Wire the refresh-rate bridge into the engine's command dispatcher.
///
/// Resolves the device's capability tier, builds the bridge over the
/// host activity, registers its command handler, and performs the
/// startup adjustment.
#[cfg(target_os = "android")]
pub fn configure_engine(app: &AndroidApp, commands: &mut CommandDispatcher) {
    let sdk = device_sdk_level(app);
    let tier = tier_for_sdk(sdk);
    tracing::info!("Device SDK {} resolves to {:?} tier", sdk, tier);

    let display = Arc::new(AndroidDisplay::new(app.clone()));
    let window = Arc::new(Mutex::new(AndroidWindow::new(app.clone())));
    let bridge = RefreshRateBridge::new(tier, display, window);
    bridge.on_engine_ready(commands);
}

/// Read `Build.VERSION.SDK_INT` from the host VM.
///
/// An unreadable level degrades to 0, which falls below every rung of
/// the ladder and leaves the window untouched.
#[cfg(target_os = "android")]
fn device_sdk_level(app: &AndroidApp) -> i32 {
    let level = with_activity(app, |env, _activity| {
        env.get_static_field("android/os/Build$VERSION", "SDK_INT", "I")
            .and_then(|v| v.i())
            .map_err(jni_err)
    });
    match level {
        Ok(level) => level,
        Err(e) => {
            tracing::warn!("SDK level probe failed ({}), treating device as unsupported", e);
            0
        }
    }
}
