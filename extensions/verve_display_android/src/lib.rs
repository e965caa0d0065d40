//! Verve Android Display Glue
//!
//! Android host side of the refresh-rate bridge: the SDK capability
//! ladder, a JNI-backed display-mode source and refresh-rate sink, and
//! the one-time engine hookup.
//!
//! Wire it up from `android_main`:
//!
//! ```ignore
//! fn android_main(app: AndroidApp) {
//!     verve_display_android::init_logging();
//!
//!     let mut commands = CommandDispatcher::new();
//!     verve_display_android::configure_engine(&app, &mut commands);
//!     // hand `commands` to the shell's channel pump
//! }
//! ```

pub mod activity;
pub mod display;
pub mod sdk;

#[cfg(target_os = "android")]
mod host;

pub use display::{AndroidDisplay, AndroidWindow};
pub use sdk::{android_tier_ladder, tier_for_sdk, SDK_DISPLAY_MODES, SDK_PREFERRED_RATE};

#[cfg(target_os = "android")]
pub use activity::{configure_engine, init_logging};
