//! Verve Display Bridge
//!
//! Bridges display commands from the embedded application layer to
//! native refresh-rate control:
//!
//! - **Capability tiers**: an ordered ladder resolving a platform level
//!   to what it allows, instead of version branches
//! - **Trait seams**: a display-mode source and a refresh-rate sink,
//!   implemented per platform and doubled in memory for tests
//! - **Command channel**: the named conduit the application layer uses
//!   to request the highest available refresh rate
//!
//! The adjustment itself is deliberately fire-and-forget: the highest
//! supported rate is written into the window's preferred-rate attribute
//! and the OS is trusted (not verified) to honor it.
//!
//! # Example
//!
//! ```rust
//! use std::sync::{Arc, Mutex};
//!
//! use verve_display::headless::{HeadlessDisplay, HeadlessWindow};
//! use verve_display::{
//!     CapabilityTier, CommandCall, CommandDispatcher, RefreshRateBridge, RefreshRateSink,
//!     HIGH_REFRESH_RATE_CHANNEL, SET_HIGH_REFRESH_RATE,
//! };
//!
//! let display = Arc::new(HeadlessDisplay::with_rates(&[60.0, 90.0, 120.0]));
//! let window = Arc::new(Mutex::new(HeadlessWindow::new()));
//! let bridge = RefreshRateBridge::new(CapabilityTier::Modern, display, window.clone());
//!
//! // Engine hookup registers the command handler and applies once.
//! let mut commands = CommandDispatcher::new();
//! bridge.on_engine_ready(&mut commands);
//!
//! // The application layer can re-request at any time.
//! let reply = commands.dispatch(
//!     HIGH_REFRESH_RATE_CHANNEL,
//!     &CommandCall::new(SET_HIGH_REFRESH_RATE),
//! );
//! assert!(reply.is_success());
//! assert_eq!(window.lock().unwrap().preferred_refresh_rate(), Some(120.0));
//! ```

pub mod bridge;
pub mod channel;
pub mod display;
pub mod error;
pub mod headless;
pub mod refresh;
pub mod tier;

pub use bridge::RefreshRateBridge;
pub use channel::{
    CommandCall, CommandDispatcher, CommandHandler, CommandReply, HIGH_REFRESH_RATE_CHANNEL,
    SET_HIGH_REFRESH_RATE,
};
pub use display::{
    DisplayMode, DisplayModeSource, RefreshRateSink, SharedModeSource, SharedRateSink,
};
pub use error::{DisplayError, Result};
pub use refresh::{apply_max_refresh_rate, RatePolicy, LEGACY_RATE_HZ, RATE_FLOOR_HZ};
pub use tier::{CapabilityTier, TierLadder, TierRung};
