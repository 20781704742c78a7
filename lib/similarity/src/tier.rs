//! Match tiers
//!
//! Declares the ordered stages of distractor selection. Each tier is
//! stricter than the one after it; a candidate is assigned to the first
//! tier it qualifies for.

use crate::tags::{feature_overlap_count, feature_overlap_threshold, region_compatible, unesco_compatible};
use heriquiz_core::HeritageRecord;
use serde::{Deserialize, Serialize};

/// How a distractor was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchTier {
    /// Same UNESCO class, same primary region, shared features
    Strong,
    /// Same UNESCO class and primary region
    Medium,
    /// Same UNESCO class only
    Weak,
    /// Random pick from whatever is left
    Fallback,
}

impl MatchTier {
    /// Tag-matching tiers in evaluation order; `Fallback` is not a rule
    pub const RULES: [MatchTier; 3] = [MatchTier::Strong, MatchTier::Medium, MatchTier::Weak];

    /// All tiers in accumulation order
    pub const ALL: [MatchTier; 4] = [
        MatchTier::Strong,
        MatchTier::Medium,
        MatchTier::Weak,
        MatchTier::Fallback,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MatchTier::Strong => "strong",
            MatchTier::Medium => "medium",
            MatchTier::Weak => "weak",
            MatchTier::Fallback => "fallback",
        }
    }

    /// Check whether `candidate` satisfies this tier's rule for `target`
    ///
    /// `Fallback` admits every candidate.
    pub fn admits(&self, target: &HeritageRecord, candidate: &HeritageRecord) -> bool {
        match self {
            MatchTier::Strong => {
                !target.feature.is_empty()
                    && Self::Medium.admits(target, candidate)
                    && feature_overlap_count(&target.feature, &candidate.feature)
                        >= feature_overlap_threshold(&target.feature)
            }
            MatchTier::Medium => {
                Self::Weak.admits(target, candidate)
                    && region_compatible(&target.region, &candidate.region)
            }
            MatchTier::Weak => unesco_compatible(target.unesco_tag, candidate.unesco_tag),
            MatchTier::Fallback => true,
        }
    }

    /// First tag-matching tier `candidate` qualifies for, if any
    pub fn classify(target: &HeritageRecord, candidate: &HeritageRecord) -> Option<MatchTier> {
        Self::RULES.into_iter().find(|tier| tier.admits(target, candidate))
    }
}

impl std::fmt::Display for MatchTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
