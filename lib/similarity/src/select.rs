//! Distractor selection
//!
//! Picks plausible-but-wrong options for a target record by walking the
//! match tiers in order and falling back to a random sample when the
//! tiers cannot fill the request.

use crate::tier::MatchTier;
use ahash::AHashSet;
use heriquiz_core::{Error, HeritageRecord, RecordId, Result};
use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;
use tracing::{debug, trace};

/// Number of distractors a multiple-choice question needs (plus one answer)
pub const DEFAULT_DISTRACTOR_COUNT: usize = 3;

/// A chosen distractor and the tier it was chosen through
#[derive(Debug, Clone, Copy)]
pub struct Distractor<'a> {
    pub record: &'a HeritageRecord,
    pub tier: MatchTier,
}

impl Distractor<'_> {
    pub fn id(&self) -> RecordId {
        self.record.id
    }
}

/// Distractors for one selection call, in accumulation order
///
/// Strong matches come first, then medium, weak and fallback picks.
/// The order is not meant for display; shuffle before presenting.
#[derive(Debug, Clone, Default)]
pub struct DistractorSet<'a> {
    distractors: Vec<Distractor<'a>>,
    requested: usize,
    eligible: usize,
}

impl<'a> DistractorSet<'a> {
    pub fn len(&self) -> usize {
        self.distractors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distractors.is_empty()
    }

    /// How many distractors were asked for
    pub fn requested(&self) -> usize {
        self.requested
    }

    /// How many candidates remained after removing the target and repeated ids
    pub fn eligible(&self) -> usize {
        self.eligible
    }

    /// True when the full requested count was found
    pub fn is_complete(&self) -> bool {
        self.distractors.len() == self.requested
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Distractor<'a>> {
        self.distractors.iter()
    }

    pub fn records(&self) -> impl Iterator<Item = &'a HeritageRecord> + '_ {
        self.distractors.iter().map(|d| d.record)
    }

    pub fn ids(&self) -> Vec<RecordId> {
        self.distractors.iter().map(Distractor::id).collect()
    }

    /// Number of distractors chosen through `tier`
    pub fn tier_count(&self, tier: MatchTier) -> usize {
        self.distractors.iter().filter(|d| d.tier == tier).count()
    }

    pub fn as_slice(&self) -> &[Distractor<'a>] {
        &self.distractors
    }
}

impl<'a> IntoIterator for DistractorSet<'a> {
    type Item = Distractor<'a>;
    type IntoIter = std::vec::IntoIter<Distractor<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.distractors.into_iter()
    }
}

impl<'s, 'a> IntoIterator for &'s DistractorSet<'a> {
    type Item = &'s Distractor<'a>;
    type IntoIter = std::slice::Iter<'s, Distractor<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.distractors.iter()
    }
}

/// Tiered distractor selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DistractorSelector {
    count: usize,
}

impl Default for DistractorSelector {
    fn default() -> Self {
        Self::new(DEFAULT_DISTRACTOR_COUNT)
    }
}

impl DistractorSelector {
    /// Create a selector returning at most `count` distractors per call
    pub fn new(count: usize) -> Self {
        Self { count }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Select up to `count` distractors for `target` from `candidates`
    ///
    /// The target and any repeated ids are dropped from the pool before
    /// selection. `rng` drives both the initial shuffle and the fallback
    /// sample; a seeded generator makes the result reproducible.
    ///
    /// Never fails: a short set means the pool could not supply more.
    pub fn select<'a, I, R>(
        &self,
        target: &HeritageRecord,
        candidates: I,
        rng: &mut R,
    ) -> DistractorSet<'a>
    where
        I: IntoIterator<Item = &'a HeritageRecord>,
        R: Rng + ?Sized,
    {
        let mut seen = AHashSet::new();
        seen.insert(target.id);
        let mut pool: Vec<&'a HeritageRecord> = candidates
            .into_iter()
            .filter(|c| seen.insert(c.id))
            .collect();
        let eligible = pool.len();

        let mut picked = Vec::with_capacity(self.count.min(eligible));
        if self.count == 0 || pool.is_empty() {
            return DistractorSet { distractors: picked, requested: self.count, eligible };
        }

        pool.shuffle(rng);

        for tier in MatchTier::RULES {
            if picked.len() == self.count {
                break;
            }
            let before = picked.len();
            take_matching(tier, target, &mut pool, &mut picked, self.count);
            trace!(target_id = %target.id, %tier, matched = picked.len() - before, "tier evaluated");
        }

        let remaining = self.count - picked.len();
        if remaining > 0 && !pool.is_empty() {
            let sample: Vec<&'a HeritageRecord> = pool.choose_multiple(rng, remaining).copied().collect();
            trace!(target_id = %target.id, sampled = sample.len(), "fallback sample");
            picked.extend(sample.into_iter().map(|record| Distractor {
                record,
                tier: MatchTier::Fallback,
            }));
        }

        debug!(
            target_id = %target.id,
            eligible,
            requested = self.count,
            selected = picked.len(),
            "selected distractors"
        );

        DistractorSet { distractors: picked, requested: self.count, eligible }
    }
}

/// Move candidates admitted by `tier` from `pool` into `picked`, in pool order
fn take_matching<'a>(
    tier: MatchTier,
    target: &HeritageRecord,
    pool: &mut Vec<&'a HeritageRecord>,
    picked: &mut Vec<Distractor<'a>>,
    limit: usize,
) {
    let mut i = 0;
    while i < pool.len() && picked.len() < limit {
        if tier.admits(target, pool[i]) {
            let record = pool.remove(i);
            picked.push(Distractor { record, tier });
        } else {
            i += 1;
        }
    }
}

/// Select up to `count` distractors, rejecting a negative count
///
/// Entry point for callers holding an untyped count (config files, CLI
/// flags). See [`DistractorSelector::select`] for the algorithm.
pub fn select_distractors<'a, I, R>(
    target: &HeritageRecord,
    candidates: I,
    count: i64,
    rng: &mut R,
) -> Result<DistractorSet<'a>>
where
    I: IntoIterator<Item = &'a HeritageRecord>,
    R: Rng + ?Sized,
{
    let count = usize::try_from(count).map_err(|_| Error::NegativeCount(count))?;
    Ok(DistractorSelector::new(count).select(target, candidates, rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use heriquiz_core::UnescoTag;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn create_target() -> HeritageRecord {
        HeritageRecord::new(100, "Angkor")
            .with_unesco(UnescoTag::Cultural)
            .with_regions(["Asia"])
            .with_features(["temple", "stone"])
    }

    fn create_test_pool() -> Vec<HeritageRecord> {
        vec![
            // strong
            HeritageRecord::new(1, "Borobudur")
                .with_unesco(UnescoTag::Cultural)
                .with_regions(["Asia"])
                .with_features(["temple", "relief"]),
            HeritageRecord::new(2, "Prambanan")
                .with_unesco(UnescoTag::Cultural)
                .with_regions(["Asia"])
                .with_features(["stone"]),
            // medium
            HeritageRecord::new(3, "Great Wall")
                .with_unesco(UnescoTag::Cultural)
                .with_regions(["Asia"])
                .with_features(["fortress"]),
            // none
            HeritageRecord::new(4, "Ha Long Bay")
                .with_unesco(UnescoTag::Natural)
                .with_regions(["Asia"]),
            HeritageRecord::new(5, "Serengeti")
                .with_unesco(UnescoTag::Natural)
                .with_regions(["Africa"]),
        ]
    }

    #[test]
    fn test_tiered_selection_order() {
        let pool = create_test_pool();
        let mut rng = StdRng::seed_from_u64(7);

        let set = DistractorSelector::default().select(&create_target(), &pool, &mut rng);

        assert_eq!(set.len(), 3);
        let tiers: Vec<MatchTier> = set.iter().map(|d| d.tier).collect();
        assert_eq!(tiers, vec![MatchTier::Strong, MatchTier::Strong, MatchTier::Medium]);

        let mut strong: Vec<i64> = set.iter().take(2).map(|d| d.id().0).collect();
        strong.sort();
        assert_eq!(strong, vec![1, 2]);
        assert_eq!(set.as_slice()[2].id(), RecordId(3));
    }

    #[test]
    fn test_target_excluded() {
        let mut pool = create_test_pool();
        pool.push(create_target());
        let mut rng = StdRng::seed_from_u64(1);

        let set = DistractorSelector::new(10).select(&create_target(), &pool, &mut rng);

        assert_eq!(set.eligible(), 5);
        assert_eq!(set.len(), 5);
        assert!(!set.ids().contains(&RecordId(100)));
    }

    #[test]
    fn test_repeated_ids_dropped() {
        let mut pool = create_test_pool();
        pool.push(pool[0].clone());
        let mut rng = StdRng::seed_from_u64(3);

        let set = DistractorSelector::new(10).select(&create_target(), &pool, &mut rng);

        let mut ids = set.ids();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), set.len());
        assert_eq!(set.len(), 5);
    }

    #[test]
    fn test_fallback_fills_remainder() {
        let pool = create_test_pool();
        let mut rng = StdRng::seed_from_u64(11);

        let set = DistractorSelector::new(5).select(&create_target(), &pool, &mut rng);

        assert_eq!(set.tier_count(MatchTier::Strong), 2);
        assert_eq!(set.tier_count(MatchTier::Medium), 1);
        assert_eq!(set.tier_count(MatchTier::Weak), 0);
        assert_eq!(set.tier_count(MatchTier::Fallback), 2);
        assert!(set.is_complete());
    }

    #[test]
    fn test_empty_pool() {
        let mut rng = StdRng::seed_from_u64(0);
        let set = DistractorSelector::default().select(&create_target(), &[], &mut rng);
        assert!(set.is_empty());
        assert!(!set.is_complete());
    }

    #[test]
    fn test_zero_count() {
        let pool = create_test_pool();
        let mut rng = StdRng::seed_from_u64(0);
        let set = DistractorSelector::new(0).select(&create_target(), &pool, &mut rng);
        assert!(set.is_empty());
        assert!(set.is_complete());
    }

    #[test]
    fn test_untagged_target_uses_fallback() {
        let pool = create_test_pool();
        let target = HeritageRecord::new(100, "Unknown");
        let mut rng = StdRng::seed_from_u64(5);

        let set = DistractorSelector::default().select(&target, &pool, &mut rng);

        assert_eq!(set.len(), 3);
        assert_eq!(set.tier_count(MatchTier::Fallback), 3);
    }

    #[test]
    fn test_seeded_selection_is_deterministic() {
        let pool = create_test_pool();
        let target = HeritageRecord::new(100, "Unknown");

        let first = DistractorSelector::default().select(&target, &pool, &mut StdRng::seed_from_u64(42));
        let second = DistractorSelector::default().select(&target, &pool, &mut StdRng::seed_from_u64(42));

        assert_eq!(first.ids(), second.ids());
    }

    #[test]
    fn test_negative_count_rejected() {
        let pool = create_test_pool();
        let mut rng = StdRng::seed_from_u64(0);
        let result = select_distractors(&create_target(), &pool, -1, &mut rng);
        assert!(matches!(result, Err(Error::NegativeCount(-1))));
    }

    #[test]
    fn test_select_distractors_oversized_count_takes_all() {
        let pool = create_test_pool();
        let mut rng = StdRng::seed_from_u64(9);
        let set = select_distractors(&create_target(), &pool, 50, &mut rng).unwrap();
        assert_eq!(set.len(), pool.len());
        assert_eq!(set.requested(), 50);
    }
}
