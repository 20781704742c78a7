//! # heriquiz Similarity
//!
//! A tiered tag-matching engine for choosing quiz distractors.
//!
//! Given a target heritage record and a pool of candidates, the selector
//! picks plausible-but-wrong options by comparing categorical tags, and
//! fills any gap with a random sample.
//!
//! ## Tiers
//!
//! - **Strong**: compatible UNESCO tag, same primary region, enough shared features
//! - **Medium**: compatible UNESCO tag, same primary region
//! - **Weak**: compatible UNESCO tag
//! - **Fallback**: uniform random sample of whatever is left
//!
//! ## Example
//!
//! ```rust
//! use heriquiz_core::{HeritageRecord, UnescoTag};
//! use heriquiz_similarity::{DistractorSelector, MatchTier};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let target = HeritageRecord::new(1, "Angkor")
//!     .with_unesco(UnescoTag::Cultural)
//!     .with_regions(["Asia"])
//!     .with_features(["temple"]);
//! let pool = vec![
//!     HeritageRecord::new(2, "Borobudur")
//!         .with_unesco(UnescoTag::Cultural)
//!         .with_regions(["Asia"])
//!         .with_features(["temple"]),
//!     HeritageRecord::new(3, "Yellowstone").with_unesco(UnescoTag::Natural),
//! ];
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let set = DistractorSelector::new(2).select(&target, &pool, &mut rng);
//! assert_eq!(set.as_slice()[0].tier, MatchTier::Strong);
//! assert_eq!(set.as_slice()[1].tier, MatchTier::Fallback);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │    Tags     │────>│    Tiers    │────>│  Selector   │
//! │ (predicates)│     │  (rules)    │     │ (pool, rng) │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                                                │
//!                                         ┌─────────────┐
//!                                         │   Explain   │
//!                                         │  (report)   │
//!                                         └─────────────┘
//! ```

pub mod tags;
pub mod tier;
pub mod select;
pub mod explain;

// Re-export main types for convenience
pub use tags::{feature_overlap_count, feature_overlap_threshold, region_compatible, unesco_compatible};
pub use tier::MatchTier;
pub use select::{select_distractors, Distractor, DistractorSelector, DistractorSet, DEFAULT_DISTRACTOR_COUNT};
pub use explain::{ExplainedDistractor, SelectionReport, SelectionStats};
