//! Author tiers by merged pull request count

use super::MergedPrCounts;
use serde::Serialize;

/// Experience bucket of an author, by merged pull request count
///
/// The ranges are disjoint and cover every positive count; 0 has no tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrTier {
    /// 1–3 merged
    Novice,
    /// 4–10 merged
    Active,
    /// 11–30 merged
    Core,
    /// 31 or more merged
    Expert,
}

impl PrTier {
    /// Tiers in display order
    pub const ALL: [PrTier; 4] = [PrTier::Novice, PrTier::Active, PrTier::Core, PrTier::Expert];

    pub fn for_count(count: u64) -> Option<Self> {
        match count {
            0 => None,
            1..=3 => Some(PrTier::Novice),
            4..=10 => Some(PrTier::Active),
            11..=30 => Some(PrTier::Core),
            _ => Some(PrTier::Expert),
        }
    }

    /// Chart label of the tier's range
    pub fn label(self) -> &'static str {
        match self {
            PrTier::Novice => "1-3 PRs",
            PrTier::Active => "4-10 PRs",
            PrTier::Core => "11-30 PRs",
            PrTier::Expert => "31+ PRs",
        }
    }
}

/// Number of authors in each tier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PrDistribution {
    pub novice: usize,
    pub active: usize,
    pub core: usize,
    pub expert: usize,
}

impl PrDistribution {
    pub fn from_counts(counts: &MergedPrCounts) -> Self {
        let mut distribution = Self::default();
        for tier in counts.values().filter_map(PrTier::for_count) {
            *distribution.slot_mut(tier) += 1;
        }
        distribution
    }

    pub fn get(&self, tier: PrTier) -> usize {
        match tier {
            PrTier::Novice => self.novice,
            PrTier::Active => self.active,
            PrTier::Core => self.core,
            PrTier::Expert => self.expert,
        }
    }

    pub fn total(&self) -> usize {
        PrTier::ALL.iter().map(|tier| self.get(*tier)).sum()
    }

    fn slot_mut(&mut self, tier: PrTier) -> &mut usize {
        match tier {
            PrTier::Novice => &mut self.novice,
            PrTier::Active => &mut self.active,
            PrTier::Core => &mut self.core,
            PrTier::Expert => &mut self.expert,
        }
    }
}
