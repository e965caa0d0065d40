//! The refresh-rate bridge: one startup adjustment plus one command

use crate::channel::{
    CommandCall, CommandDispatcher, CommandReply, HIGH_REFRESH_RATE_CHANNEL,
    SET_HIGH_REFRESH_RATE,
};
use crate::display::{SharedModeSource, SharedRateSink};
use crate::refresh::{apply_max_refresh_rate, RatePolicy};
use crate::tier::CapabilityTier;

/// Bridges the embedded application's display commands to native
/// refresh-rate control.
///
/// The bridge holds no state beyond its handles: every adjustment
/// re-enumerates the display's modes and rewrites the window attribute,
/// so repeated calls are idempotent and safe from any trigger point.
#[derive(Clone)]
pub struct RefreshRateBridge {
    tier: CapabilityTier,
    policy: RatePolicy,
    display: SharedModeSource,
    window: SharedRateSink,
}

impl RefreshRateBridge {
    /// Bridge with the default rate policy.
    pub fn new(tier: CapabilityTier, display: SharedModeSource, window: SharedRateSink) -> Self {
        Self::with_policy(tier, RatePolicy::default(), display, window)
    }

    /// Bridge with an explicit rate policy.
    pub fn with_policy(
        tier: CapabilityTier,
        policy: RatePolicy,
        display: SharedModeSource,
        window: SharedRateSink,
    ) -> Self {
        Self {
            tier,
            policy,
            display,
            window,
        }
    }

    /// The capability tier this bridge was built for.
    pub fn tier(&self) -> CapabilityTier {
        self.tier
    }

    /// Perform one refresh-rate adjustment.
    pub fn apply(&self) {
        match self.window.lock() {
            Ok(mut window) => {
                apply_max_refresh_rate(
                    self.tier,
                    &self.policy,
                    self.display.as_ref(),
                    &mut *window,
                );
            }
            Err(_) => {
                tracing::warn!("Window sink lock poisoned, skipping refresh-rate adjustment");
            }
        }
    }

    /// Answer one command addressed to the bridge's channel.
    ///
    /// `setHighRefreshRate` adjusts and acknowledges with an empty
    /// success on every tier, including [`CapabilityTier::Unsupported`]
    /// where the adjustment is a no-op. Any other method name is not
    /// implemented and has no side effect.
    pub fn handle(&self, call: &CommandCall) -> CommandReply {
        match call.method.as_str() {
            SET_HIGH_REFRESH_RATE => {
                self.apply();
                CommandReply::ack()
            }
            other => {
                tracing::debug!("Unrecognized display command: {}", other);
                CommandReply::NotImplemented
            }
        }
    }

    /// One-time engine hookup: register the command handler on
    /// `commands`, then perform the startup adjustment.
    ///
    /// The host calls this before any command can arrive. Calling it
    /// again replaces the registration and re-applies, which is
    /// harmless.
    pub fn on_engine_ready(&self, commands: &mut CommandDispatcher) {
        let bridge = self.clone();
        commands.register(HIGH_REFRESH_RATE_CHANNEL, move |call| bridge.handle(call));
        tracing::info!(
            "Refresh-rate bridge ready on channel '{}' ({:?} tier)",
            HIGH_REFRESH_RATE_CHANNEL,
            self.tier
        );
        self.apply();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::display::RefreshRateSink;
    use crate::headless::{HeadlessDisplay, HeadlessWindow};
    use crate::refresh::LEGACY_RATE_HZ;

    fn bridge_with(
        tier: CapabilityTier,
        rates: &[f32],
    ) -> (RefreshRateBridge, Arc<Mutex<HeadlessWindow>>) {
        let display = Arc::new(HeadlessDisplay::with_rates(rates));
        let window = Arc::new(Mutex::new(HeadlessWindow::new()));
        let bridge = RefreshRateBridge::new(tier, display, window.clone());
        (bridge, window)
    }

    fn preferred(window: &Arc<Mutex<HeadlessWindow>>) -> Option<f32> {
        window.lock().unwrap().preferred_refresh_rate()
    }

    #[test]
    fn test_set_high_refresh_rate_applies_and_acks() {
        let (bridge, window) = bridge_with(CapabilityTier::Modern, &[60.0, 90.0]);
        let reply = bridge.handle(&CommandCall::new(SET_HIGH_REFRESH_RATE));
        assert_eq!(reply, CommandReply::ack());
        assert_eq!(preferred(&window), Some(90.0));
    }

    #[test]
    fn test_unknown_method_has_no_side_effect() {
        let (bridge, window) = bridge_with(CapabilityTier::Modern, &[60.0, 90.0]);
        let reply = bridge.handle(&CommandCall::new("getRefreshRate"));
        assert_eq!(reply, CommandReply::NotImplemented);
        assert_eq!(preferred(&window), None);
    }

    #[test]
    fn test_unsupported_tier_still_acks() {
        let (bridge, window) = bridge_with(CapabilityTier::Unsupported, &[60.0, 120.0]);
        let reply = bridge.handle(&CommandCall::new(SET_HIGH_REFRESH_RATE));
        assert!(reply.is_success());
        assert_eq!(preferred(&window), None);
    }

    #[test]
    fn test_legacy_tier_applies_the_fixed_rate() {
        let (bridge, window) = bridge_with(CapabilityTier::LegacyAdjustable, &[]);
        bridge.apply();
        assert_eq!(preferred(&window), Some(LEGACY_RATE_HZ));
    }

    #[test]
    fn test_engine_ready_registers_then_applies() {
        let (bridge, window) = bridge_with(CapabilityTier::Modern, &[60.0, 120.0]);
        let mut commands = CommandDispatcher::new();
        bridge.on_engine_ready(&mut commands);

        assert_eq!(preferred(&window), Some(120.0));
        let reply = commands.dispatch(
            HIGH_REFRESH_RATE_CHANNEL,
            &CommandCall::new(SET_HIGH_REFRESH_RATE),
        );
        assert!(reply.is_success());
    }

    #[test]
    fn test_custom_policy_flows_through() {
        let display = Arc::new(HeadlessDisplay::new());
        let window = Arc::new(Mutex::new(HeadlessWindow::new()));
        let policy = RatePolicy::new().floor_hz(75.0);
        let bridge = RefreshRateBridge::with_policy(
            CapabilityTier::Modern,
            policy,
            display,
            window.clone(),
        );
        bridge.apply();
        assert_eq!(preferred(&window), Some(75.0));
    }
}
