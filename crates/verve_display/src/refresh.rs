//! Rate selection and the per-tier adjustment routine

use crate::display::{DisplayMode, DisplayModeSource, RefreshRateSink};
use crate::tier::CapabilityTier;

/// Floor for the chosen rate, and the fold seed when a display reports
/// no modes.
pub const RATE_FLOOR_HZ: f32 = 60.0;

/// Rate requested on the legacy-adjustable tier.
///
/// That tier cannot enumerate modes, so this is an optimistic guess at
/// panel capability rather than a measurement.
pub const LEGACY_RATE_HZ: f32 = 120.0;

/// Rate-selection knobs.
///
/// Defaults are the shipped behavior; platform hooks never override
/// them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RatePolicy {
    /// Lower bound on the chosen rate.
    pub floor_hz: f32,
    /// Fixed rate written on the legacy-adjustable tier.
    pub legacy_hz: f32,
}

impl Default for RatePolicy {
    fn default() -> Self {
        Self {
            floor_hz: RATE_FLOOR_HZ,
            legacy_hz: LEGACY_RATE_HZ,
        }
    }
}

impl RatePolicy {
    /// Policy with the shipped defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the floor rate.
    pub fn floor_hz(mut self, floor_hz: f32) -> Self {
        self.floor_hz = floor_hz;
        self
    }

    /// Set the legacy-tier rate.
    pub fn legacy_hz(mut self, legacy_hz: f32) -> Self {
        self.legacy_hz = legacy_hz;
        self
    }

    /// Highest rate among `modes`, never below the floor.
    pub fn max_supported_rate(&self, modes: &[DisplayMode]) -> f32 {
        modes.iter().fold(self.floor_hz, |max, mode| {
            if mode.refresh_rate > max {
                mode.refresh_rate
            } else {
                max
            }
        })
    }
}

/// Write the highest refresh rate the platform allows into the window's
/// preferred-rate attribute.
///
/// Stateless and idempotent: modes are re-enumerated and the attribute
/// rewritten on every call, so the routine is safe from any trigger
/// point. The unsupported tier leaves the window untouched, and no tier
/// verifies that the OS honored the request.
pub fn apply_max_refresh_rate(
    tier: CapabilityTier,
    policy: &RatePolicy,
    display: &dyn DisplayModeSource,
    window: &mut dyn RefreshRateSink,
) {
    match tier {
        CapabilityTier::Modern => {
            let modes = display.supported_modes();
            let rate = policy.max_supported_rate(&modes);
            tracing::debug!(
                "Requesting {} Hz ({} display modes reported)",
                rate,
                modes.len()
            );
            window.set_preferred_refresh_rate(rate);
        }
        CapabilityTier::LegacyAdjustable => {
            tracing::debug!("Requesting fixed legacy rate: {} Hz", policy.legacy_hz);
            window.set_preferred_refresh_rate(policy.legacy_hz);
        }
        CapabilityTier::Unsupported => {
            tracing::debug!("Refresh-rate control unavailable, leaving window attributes alone");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::{HeadlessDisplay, HeadlessWindow};

    #[test]
    fn test_max_rate_picks_the_highest_mode() {
        let policy = RatePolicy::default();
        let modes = [
            DisplayMode::new(60.0),
            DisplayMode::new(120.0),
            DisplayMode::new(90.0),
        ];
        assert_eq!(policy.max_supported_rate(&modes), 120.0);
    }

    #[test]
    fn test_max_rate_falls_back_to_floor_when_no_modes() {
        let policy = RatePolicy::default();
        assert_eq!(policy.max_supported_rate(&[]), RATE_FLOOR_HZ);
    }

    #[test]
    fn test_max_rate_never_drops_below_floor() {
        let policy = RatePolicy::default();
        let modes = [DisplayMode::new(30.0), DisplayMode::new(48.0)];
        assert_eq!(policy.max_supported_rate(&modes), RATE_FLOOR_HZ);
    }

    #[test]
    fn test_policy_builder_overrides() {
        let policy = RatePolicy::new().floor_hz(30.0).legacy_hz(90.0);
        assert_eq!(policy.floor_hz, 30.0);
        assert_eq!(policy.legacy_hz, 90.0);
        assert_eq!(policy.max_supported_rate(&[DisplayMode::new(48.0)]), 48.0);
    }

    #[test]
    fn test_modern_tier_requests_the_highest_mode() {
        let display = HeadlessDisplay::with_rates(&[60.0, 90.0, 120.0]);
        let mut window = HeadlessWindow::new();
        apply_max_refresh_rate(
            CapabilityTier::Modern,
            &RatePolicy::default(),
            &display,
            &mut window,
        );
        assert_eq!(window.preferred_refresh_rate(), Some(120.0));
    }

    #[test]
    fn test_modern_tier_requests_the_floor_without_modes() {
        let display = HeadlessDisplay::new();
        let mut window = HeadlessWindow::new();
        apply_max_refresh_rate(
            CapabilityTier::Modern,
            &RatePolicy::default(),
            &display,
            &mut window,
        );
        assert_eq!(window.preferred_refresh_rate(), Some(RATE_FLOOR_HZ));
    }

    #[test]
    fn test_legacy_tier_ignores_modes_and_requests_fixed_rate() {
        let display = HeadlessDisplay::with_rates(&[60.0, 144.0]);
        let mut window = HeadlessWindow::new();
        apply_max_refresh_rate(
            CapabilityTier::LegacyAdjustable,
            &RatePolicy::default(),
            &display,
            &mut window,
        );
        assert_eq!(window.preferred_refresh_rate(), Some(LEGACY_RATE_HZ));
    }

    #[test]
    fn test_unsupported_tier_writes_nothing() {
        let display = HeadlessDisplay::with_rates(&[60.0, 120.0]);
        let mut window = HeadlessWindow::new();
        apply_max_refresh_rate(
            CapabilityTier::Unsupported,
            &RatePolicy::default(),
            &display,
            &mut window,
        );
        assert_eq!(window.preferred_refresh_rate(), None);
    }

    #[test]
    fn test_unsupported_tier_preserves_an_earlier_preference() {
        let display = HeadlessDisplay::with_rates(&[60.0, 120.0]);
        let mut window = HeadlessWindow::new();
        window.set_preferred_refresh_rate(90.0);
        apply_max_refresh_rate(
            CapabilityTier::Unsupported,
            &RatePolicy::default(),
            &display,
            &mut window,
        );
        assert_eq!(window.preferred_refresh_rate(), Some(90.0));
    }

    #[test]
    fn test_applying_twice_is_idempotent() {
        let display = HeadlessDisplay::with_rates(&[60.0, 90.0]);
        let mut window = HeadlessWindow::new();
        let policy = RatePolicy::default();
        apply_max_refresh_rate(CapabilityTier::Modern, &policy, &display, &mut window);
        apply_max_refresh_rate(CapabilityTier::Modern, &policy, &display, &mut window);
        assert_eq!(window.preferred_refresh_rate(), Some(90.0));
    }
}
