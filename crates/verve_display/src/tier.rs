//! Capability tiers and the ordered ladder that resolves them

/// What a platform level allows for refresh-rate control.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CapabilityTier {
    /// Per-display mode enumeration plus a preferred-rate attribute.
    Modern,
    /// A preferred-rate attribute but no way to enumerate modes.
    LegacyAdjustable,
    /// No refresh-rate control at all.
    Unsupported,
}

/// One rung of a [`TierLadder`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TierRung {
    /// Lowest platform level at which the tier is available.
    pub min_level: i32,
    /// Tier unlocked at `min_level` and above.
    pub tier: CapabilityTier,
}

impl TierRung {
    /// Rung unlocking `tier` at `min_level`.
    pub const fn new(min_level: i32, tier: CapabilityTier) -> Self {
        Self { min_level, tier }
    }
}

/// Ordered table mapping minimum platform levels to capability tiers.
///
/// Resolution walks the rungs from the highest threshold down and takes
/// the first one the level meets, so supporting a new platform tier
/// means adding a rung rather than another branch.
#[derive(Clone, Debug, Default)]
pub struct TierLadder {
    rungs: Vec<TierRung>,
}

impl TierLadder {
    /// Ladder over the given rungs.
    ///
    /// Rungs are sorted by descending threshold on construction, so the
    /// order they are supplied in does not matter.
    pub fn new(rungs: impl IntoIterator<Item = TierRung>) -> Self {
        let mut rungs: Vec<TierRung> = rungs.into_iter().collect();
        rungs.sort_by(|a, b| b.min_level.cmp(&a.min_level));
        Self { rungs }
    }

    /// The most capable tier available at `level`.
    ///
    /// A level below every rung resolves to
    /// [`CapabilityTier::Unsupported`].
    pub fn resolve(&self, level: i32) -> CapabilityTier {
        self.rungs
            .iter()
            .find(|rung| level >= rung.min_level)
            .map(|rung| rung.tier)
            .unwrap_or(CapabilityTier::Unsupported)
    }

    /// The rungs, highest threshold first.
    pub fn rungs(&self) -> &[TierRung] {
        &self.rungs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ladder() -> TierLadder {
        TierLadder::new([
            TierRung::new(30, CapabilityTier::Modern),
            TierRung::new(23, CapabilityTier::LegacyAdjustable),
        ])
    }

    #[test]
    fn test_resolve_at_and_above_thresholds() {
        let ladder = ladder();
        assert_eq!(ladder.resolve(30), CapabilityTier::Modern);
        assert_eq!(ladder.resolve(34), CapabilityTier::Modern);
        assert_eq!(ladder.resolve(23), CapabilityTier::LegacyAdjustable);
        assert_eq!(ladder.resolve(29), CapabilityTier::LegacyAdjustable);
    }

    #[test]
    fn test_resolve_below_every_rung() {
        let ladder = ladder();
        assert_eq!(ladder.resolve(22), CapabilityTier::Unsupported);
        assert_eq!(ladder.resolve(0), CapabilityTier::Unsupported);
        assert_eq!(ladder.resolve(-1), CapabilityTier::Unsupported);
    }

    #[test]
    fn test_rung_order_does_not_matter() {
        let shuffled = TierLadder::new([
            TierRung::new(23, CapabilityTier::LegacyAdjustable),
            TierRung::new(30, CapabilityTier::Modern),
        ]);
        assert_eq!(shuffled.resolve(31), CapabilityTier::Modern);
        assert_eq!(shuffled.resolve(25), CapabilityTier::LegacyAdjustable);
        assert_eq!(shuffled.rungs()[0].min_level, 30);
    }

    #[test]
    fn test_empty_ladder_is_always_unsupported() {
        let ladder = TierLadder::default();
        assert_eq!(ladder.resolve(35), CapabilityTier::Unsupported);
    }

    #[test]
    fn test_extra_rung_extends_without_new_branches() {
        let ladder = TierLadder::new([
            TierRung::new(30, CapabilityTier::Modern),
            TierRung::new(23, CapabilityTier::LegacyAdjustable),
            TierRung::new(26, CapabilityTier::LegacyAdjustable),
        ]);
        assert_eq!(ladder.resolve(27), CapabilityTier::LegacyAdjustable);
        assert_eq!(ladder.resolve(30), CapabilityTier::Modern);
    }
}
