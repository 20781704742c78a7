//! Quiz assembler
//!
//! Builds one four-option question per enabled template from a target
//! record, its distractors, and an injected random source.

use crate::config::QuizConfig;
use crate::question::{QuizAssembly, QuizQuestion, SkippedTemplate};
use crate::template::{QuizTemplate, SkipReason};
use ahash::AHashMap;
use heriquiz_core::{HeritageRecord, Result};
use heriquiz_similarity::{DistractorSelector, MatchTier};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

/// Assembles multiple-choice questions for heritage records
#[derive(Debug, Clone)]
pub struct QuizAssembler {
    config: QuizConfig,
    selector: DistractorSelector,
}

impl QuizAssembler {
    /// Create an assembler, rejecting an invalid configuration
    pub fn new(config: QuizConfig) -> Result<Self> {
        config.validate()?;
        let selector = DistractorSelector::new(config.distractor_count()?);
        Ok(Self { config, selector })
    }

    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    /// Generate questions for `target` from the `candidates` pool
    ///
    /// Every enabled template is tried independently. A template whose
    /// inputs are missing, or for which the pool cannot supply the full
    /// distractor count, is reported in [`QuizAssembly::skipped`] instead
    /// of producing a question with fewer options.
    pub fn assemble<'a, I, R>(&self, target: &HeritageRecord, candidates: I, rng: &mut R) -> QuizAssembly
    where
        I: IntoIterator<Item = &'a HeritageRecord>,
        R: Rng + ?Sized,
    {
        let pool: Vec<&'a HeritageRecord> = candidates.into_iter().collect();
        let mut assembly = QuizAssembly::default();

        for &template in &self.config.templates {
            match self.build_question(template, target, &pool, rng) {
                Ok(question) => assembly.questions.push(question),
                Err(reason) => {
                    debug!(target_id = %target.id, %template, %reason, "skipped quiz template");
                    assembly.skipped.push(SkippedTemplate { template, reason });
                }
            }
        }

        debug!(
            target_id = %target.id,
            questions = assembly.questions.len(),
            skipped = assembly.skipped.len(),
            "assembled quiz"
        );
        assembly
    }

    fn build_question<R>(
        &self,
        template: QuizTemplate,
        target: &HeritageRecord,
        pool: &[&HeritageRecord],
        rng: &mut R,
    ) -> std::result::Result<QuizQuestion, SkipReason>
    where
        R: Rng + ?Sized,
    {
        let question_text = template.question_text(target, self.config.clue_count)?;
        let correct = template.value_of(target).ok_or(SkipReason::MissingCorrectAnswer)?;

        let usable = best_per_value(template, target, correct, pool);
        let set = self.selector.select(target, usable, rng);
        if !set.is_complete() {
            return Err(SkipReason::NotEnoughDistractors {
                required: set.requested(),
                found: set.len(),
            });
        }

        let mut options: Vec<String> = set
            .records()
            .filter_map(|r| template.value_of(r))
            .map(str::to_owned)
            .collect();
        options.push(correct.to_owned());
        options.shuffle(rng);

        Ok(QuizQuestion {
            heritage_id: target.id,
            template,
            question_text,
            options,
            correct_answer: correct.to_owned(),
        })
    }
}

/// One candidate per distinct option value, keeping the record in the best tier
///
/// Candidates without a value, or whose value equals `correct`, are dropped.
/// Among records sharing a value the earliest one in the best tier wins, so a
/// repeated option text never hides a stronger match behind a weaker one.
fn best_per_value<'a>(
    template: QuizTemplate,
    target: &HeritageRecord,
    correct: &str,
    pool: &[&'a HeritageRecord],
) -> Vec<&'a HeritageRecord> {
    let mut slots: AHashMap<&'a str, usize> = AHashMap::new();
    let mut usable: Vec<(&'a HeritageRecord, MatchTier)> = Vec::new();

    for &candidate in pool {
        if candidate.id == target.id {
            continue;
        }
        let Some(value) = template.value_of(candidate) else {
            continue;
        };
        if value == correct {
            continue;
        }
        let tier = MatchTier::classify(target, candidate).unwrap_or(MatchTier::Fallback);
        match slots.get(value) {
            Some(&slot) if tier < usable[slot].1 => usable[slot] = (candidate, tier),
            Some(_) => {}
            None => {
                slots.insert(value, usable.len());
                usable.push((candidate, tier));
            }
        }
    }

    usable.into_iter().map(|(record, _)| record).collect()
}
