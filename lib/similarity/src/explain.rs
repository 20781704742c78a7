//! Explainability for distractor selection
//!
//! Serializable views of a [`DistractorSet`] showing which tier each
//! distractor came through.

use crate::select::{Distractor, DistractorSet};
use crate::tier::MatchTier;
use heriquiz_core::RecordId;
use serde::Serialize;

/// A distractor with the tier that admitted it
#[derive(Debug, Clone, Serialize)]
pub struct ExplainedDistractor {
    pub id: RecordId,
    pub title: String,
    pub tier: MatchTier,
}

impl From<&Distractor<'_>> for ExplainedDistractor {
    fn from(d: &Distractor<'_>) -> Self {
        Self {
            id: d.record.id,
            title: d.record.title.clone(),
            tier: d.tier,
        }
    }
}

/// Summary statistics for one selection call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionStats {
    /// Candidates left after removing the target and repeated ids
    pub candidates_count: usize,
    pub requested: usize,
    pub selected: usize,
    pub strong: usize,
    pub medium: usize,
    pub weak: usize,
    pub fallback: usize,
    /// Whether the requested count was reached
    pub complete: bool,
}

impl SelectionStats {
    pub fn compute(set: &DistractorSet<'_>) -> Self {
        Self {
            candidates_count: set.eligible(),
            requested: set.requested(),
            selected: set.len(),
            strong: set.tier_count(MatchTier::Strong),
            medium: set.tier_count(MatchTier::Medium),
            weak: set.tier_count(MatchTier::Weak),
            fallback: set.tier_count(MatchTier::Fallback),
            complete: set.is_complete(),
        }
    }
}

/// Response structure for an explained selection
#[derive(Debug, Clone, Serialize)]
pub struct SelectionReport {
    pub target_id: RecordId,
    pub result: Vec<ExplainedDistractor>,
    pub stats: SelectionStats,
}

impl SelectionReport {
    pub fn new(target_id: RecordId, set: &DistractorSet<'_>) -> Self {
        Self {
            target_id,
            result: set.iter().map(ExplainedDistractor::from).collect(),
            stats: SelectionStats::compute(set),
        }
    }
}
