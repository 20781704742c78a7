//! # heriquiz
//!
//! Tiered distractor selection and multiple-choice quiz assembly for
//! heritage-education records.
//!
//! Given a target heritage site and a pool of other sites, heriquiz picks
//! plausible-but-wrong answers by comparing UNESCO classification, primary
//! region and thematic features, then builds four-option questions from them.
//!
//! ## Quick Start
//!
//! ### As a Command
//!
//! ```bash
//! heriquiz --records heritage.json --target 12 --seed 42
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use heriquiz::prelude::*;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let pool = RecordPool::from_json_str(r#"[
//!     {"id": 1, "title": "Angkor", "unesco_tag": "cultural", "region": ["Asia"],
//!      "feature": ["temple"], "summary": "Khmer temple city",
//!      "simple_summary": ["Cambodia", "Khmer empire", "Sandstone"]},
//!     {"id": 2, "title": "Borobudur", "unesco_tag": "cultural", "region": ["Asia"],
//!      "feature": ["temple"], "summary": "Buddhist stupa"},
//!     {"id": 3, "title": "Bagan", "unesco_tag": "cultural", "region": ["Asia"],
//!      "summary": "Plain of pagodas"},
//!     {"id": 4, "title": "Petra", "unesco_tag": "cultural", "region": ["Asia"],
//!      "summary": "Rock-cut city"}
//! ]"#).unwrap();
//!
//! let (target, candidates) = pool.split_target(RecordId(1)).unwrap();
//! let mut rng = StdRng::seed_from_u64(42);
//!
//! // Distractors only
//! let set = DistractorSelector::default().select(target, candidates.iter().copied(), &mut rng);
//! assert_eq!(set.as_slice()[0].tier, MatchTier::Strong);
//!
//! // Full quiz
//! let assembler = QuizAssembler::new(QuizConfig::default()).unwrap();
//! let quiz = assembler.assemble(target, candidates, &mut rng);
//! assert_eq!(quiz.questions.len(), 2);
//! ```
//!
//! ## Crate Structure
//!
//! heriquiz is composed of several crates:
//!
//! - `heriquiz-core` - Records, UNESCO tags, record pools, errors
//! - `heriquiz-similarity` - Tag matching, match tiers, distractor selection
//! - `heriquiz-quiz` - Quiz templates, configuration and assembly

// Re-export core types
pub use heriquiz_core::{Error, HeritageRecord, RecordId, RecordPool, Result, UnescoTag};

// Re-export selection
pub use heriquiz_similarity::{
    select_distractors, Distractor, DistractorSelector, DistractorSet, MatchTier, SelectionReport,
    SelectionStats, DEFAULT_DISTRACTOR_COUNT,
};

// Re-export quiz assembly
pub use heriquiz_quiz::{QuizAssembler, QuizAssembly, QuizConfig, QuizQuestion, QuizTemplate, SkipReason};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        DistractorSelector, DistractorSet, Error, HeritageRecord, MatchTier, QuizAssembler,
        QuizAssembly, QuizConfig, QuizQuestion, QuizTemplate, RecordId, RecordPool, Result,
        UnescoTag,
    };
}

/// Tag compatibility predicates
pub mod tags {
    pub use heriquiz_similarity::tags::{
        feature_overlap_count, feature_overlap_threshold, region_compatible, unesco_compatible,
    };
}
