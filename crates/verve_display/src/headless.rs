//! In-memory display and window doubles
//!
//! Tests and examples drive the bridge against these instead of a real
//! OS. The display's mode list sits behind interior mutability so a
//! test can change it mid-run and prove that adjustments re-enumerate
//! instead of caching.

use std::sync::Mutex;

use crate::display::{DisplayMode, DisplayModeSource, RefreshRateSink};

/// Display double with a settable mode list.
#[derive(Debug, Default)]
pub struct HeadlessDisplay {
    modes: Mutex<Vec<DisplayMode>>,
}

impl HeadlessDisplay {
    /// Display reporting no modes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Display reporting one mode per rate.
    pub fn with_rates(rates: &[f32]) -> Self {
        let display = Self::new();
        display.set_rates(rates);
        display
    }

    /// Replace the reported mode list.
    pub fn set_rates(&self, rates: &[f32]) {
        if let Ok(mut modes) = self.modes.lock() {
            *modes = rates.iter().copied().map(DisplayMode::new).collect();
        }
    }
}

impl DisplayModeSource for HeadlessDisplay {
    fn supported_modes(&self) -> Vec<DisplayMode> {
        self.modes
            .lock()
            .map(|modes| modes.clone())
            .unwrap_or_default()
    }
}

/// Window double recording the last requested rate.
#[derive(Debug, Default)]
pub struct HeadlessWindow {
    preferred: Option<f32>,
}

impl HeadlessWindow {
    /// Window with no preference recorded.
    pub fn new() -> Self {
        Self::default()
    }
}

impl RefreshRateSink for HeadlessWindow {
    fn preferred_refresh_rate(&self) -> Option<f32> {
        self.preferred
    }

    fn set_preferred_refresh_rate(&mut self, rate: f32) {
        self.preferred = Some(rate);
    }
}
