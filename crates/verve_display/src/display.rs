//! Display-mode source and refresh-rate sink seams
//!
//! The adjustment routine is a pure function of these two traits, so
//! platform crates implement them over native handles and tests
//! substitute the in-memory doubles from [`crate::headless`].

use std::sync::{Arc, Mutex};

/// One mode reported by the OS for the active display.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayMode {
    /// Refresh rate in frames per second.
    pub refresh_rate: f32,
}

impl DisplayMode {
    /// Mode with the given refresh rate.
    pub const fn new(refresh_rate: f32) -> Self {
        Self { refresh_rate }
    }
}

/// Source of supported modes for the active display.
///
/// Implementations query the OS fresh on every call; nothing in the
/// bridge caches mode lists. An unavailable display and a display that
/// reports zero modes both yield an empty vec, and callers are not
/// expected to tell the two apart.
pub trait DisplayModeSource: Send + Sync {
    /// The modes the active display supports right now.
    fn supported_modes(&self) -> Vec<DisplayMode>;
}

/// Write access to the window's preferred-refresh-rate attribute.
pub trait RefreshRateSink: Send {
    /// The rate most recently requested, or `None` when no preference
    /// has been written.
    fn preferred_refresh_rate(&self) -> Option<f32>;

    /// Ask the OS to drive this window at `rate` frames per second.
    ///
    /// This is a hint. The OS may ignore it, and the bridge never
    /// verifies the outcome.
    fn set_preferred_refresh_rate(&mut self, rate: f32);
}

/// Shared handle to a display-mode source.
pub type SharedModeSource = Arc<dyn DisplayModeSource>;

/// Shared handle to a refresh-rate sink.
pub type SharedRateSink = Arc<Mutex<dyn RefreshRateSink>>;
