//! Capacity Tier Matcher
//!
//! Logic for matching a headcount to a capacity band.

use shared::models::PricingTier;

/// Tier chosen for a headcount
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierMatch<'a> {
    pub tier: &'a PricingTier,
    /// People above the last tier's `max_people`, charged at the extra-person rate
    pub extra_people: u32,
}

/// Sort tiers by capacity (ascending `min_people`, then `max_people`)
pub fn sort_tiers_by_capacity(tiers: &mut [&PricingTier]) {
    tiers.sort_by_key(|t| (t.min_people, t.max_people));
}

/// Select the tier for `people`.
///
/// 1. The band containing `people`.
/// 2. Otherwise the next band up (headcount below the lowest band, or in a gap).
/// 3. Otherwise `people` exceeds every band: the last band plus extra people.
///
/// Returns `None` only when `tiers` is empty.
pub fn select_tier(tiers: &[PricingTier], people: u32) -> Option<TierMatch<'_>> {
    let mut sorted: Vec<&PricingTier> = tiers.iter().collect();
    sort_tiers_by_capacity(&mut sorted);

    if let Some(&tier) = sorted.iter().find(|t| t.contains(people)) {
        return Some(TierMatch {
            tier,
            extra_people: 0,
        });
    }

    if let Some(&tier) = sorted.iter().find(|t| t.min_people > people) {
        return Some(TierMatch {
            tier,
            extra_people: 0,
        });
    }

    let last = *sorted.last()?;
    Some(TierMatch {
        tier: last,
        extra_people: people.saturating_sub(last.max_people),
    })
}
