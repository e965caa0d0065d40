//! SDK capability ladder for Android
//!
//! `Activity.getDisplay()` and per-display mode enumeration arrive at
//! API 30. The preferred-rate window attribute is honored from API 23.
//! Below that the bridge leaves the window alone.

use verve_display::{CapabilityTier, TierLadder, TierRung};

/// Lowest SDK level with per-display mode enumeration.
pub const SDK_DISPLAY_MODES: i32 = 30;

/// Lowest SDK level honoring the preferred-rate window attribute.
pub const SDK_PREFERRED_RATE: i32 = 23;

/// The Android capability ladder.
pub fn android_tier_ladder() -> TierLadder {
    TierLadder::new([
        TierRung::new(SDK_DISPLAY_MODES, CapabilityTier::Modern),
        TierRung::new(SDK_PREFERRED_RATE, CapabilityTier::LegacyAdjustable),
    ])
}

/// Resolve the capability tier for a device SDK level.
pub fn tier_for_sdk(level: i32) -> CapabilityTier {
    android_tier_ladder().resolve(level)
}
