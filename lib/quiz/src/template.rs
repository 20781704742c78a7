//! Quiz templates
//!
//! A template decides which record field is the answer, which field of the
//! other records supplies the wrong options, and how the question reads.

use heriquiz_core::HeritageRecord;
use serde::{Deserialize, Serialize};

/// Kind of multiple-choice question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuizTemplate {
    /// Name the site from a list of short clues; options are titles
    Clues,
    /// Pick the summary that describes the named site; options are summaries
    Description,
}

impl QuizTemplate {
    pub const ALL: [QuizTemplate; 2] = [QuizTemplate::Clues, QuizTemplate::Description];

    pub fn as_str(&self) -> &'static str {
        match self {
            QuizTemplate::Clues => "clues",
            QuizTemplate::Description => "description",
        }
    }

    /// The option value this template reads from `record`
    ///
    /// Used both for the correct answer (on the target) and for the wrong
    /// options (on the distractors). Blank values count as missing.
    pub fn value_of<'r>(&self, record: &'r HeritageRecord) -> Option<&'r str> {
        match self {
            QuizTemplate::Clues => Some(record.title.trim()).filter(|t| !t.is_empty()),
            QuizTemplate::Description => record.summary_text(),
        }
    }

    /// Question text for `target`, or why it cannot be written
    pub fn question_text(&self, target: &HeritageRecord, clue_count: usize) -> Result<String, SkipReason> {
        match self {
            QuizTemplate::Clues => {
                let clues = target.clues();
                if clues.len() < clue_count {
                    return Err(SkipReason::NotEnoughClues {
                        required: clue_count,
                        found: clues.len(),
                    });
                }
                let mut text = String::from("Which heritage site matches these clues?");
                for (n, clue) in clues.iter().take(clue_count).enumerate() {
                    text.push_str(&format!("\n{}. {}", n + 1, clue));
                }
                Ok(text)
            }
            QuizTemplate::Description => Ok(format!("Which description fits {}?", target.title)),
        }
    }
}

impl std::fmt::Display for QuizTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a template produced no question for a target
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum SkipReason {
    NotEnoughClues { required: usize, found: usize },
    MissingCorrectAnswer,
    NotEnoughDistractors { required: usize, found: usize },
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::NotEnoughClues { required, found } => {
                write!(f, "needs {} clues, found {}", required, found)
            }
            SkipReason::MissingCorrectAnswer => write!(f, "target has no value for the answer"),
            SkipReason::NotEnoughDistractors { required, found } => {
                write!(f, "needs {} distractors, found {}", required, found)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_of() {
        let record = HeritageRecord::new(1, "Petra").with_summary("Rock-cut city");
        assert_eq!(QuizTemplate::Clues.value_of(&record), Some("Petra"));
        assert_eq!(QuizTemplate::Description.value_of(&record), Some("Rock-cut city"));

        let bare = HeritageRecord::new(2, "Petra");
        assert_eq!(QuizTemplate::Description.value_of(&bare), None);
    }

    #[test]
    fn test_clue_question_uses_first_three() {
        let record = HeritageRecord::new(1, "Petra").with_clues(["Jordan", "Nabataean", "Rose-red", "Treasury"]);
        let text = QuizTemplate::Clues.question_text(&record, 3).unwrap();
        assert!(text.contains("1. Jordan"));
        assert!(text.contains("3. Rose-red"));
        assert!(!text.contains("Treasury"));
        assert!(!text.contains("Petra"));
    }

    #[test]
    fn test_clue_question_needs_enough_clues() {
        let record = HeritageRecord::new(1, "Petra").with_clues(["Jordan", "Nabataean"]);
        assert_eq!(
            QuizTemplate::Clues.question_text(&record, 3),
            Err(SkipReason::NotEnoughClues { required: 3, found: 2 })
        );
        let none = HeritageRecord::new(1, "Petra");
        assert!(QuizTemplate::Clues.question_text(&none, 3).is_err());
    }

    #[test]
    fn test_description_question_names_site() {
        let record = HeritageRecord::new(1, "Petra");
        let text = QuizTemplate::Description.question_text(&record, 3).unwrap();
        assert!(text.contains("Petra"));
    }

    #[test]
    fn test_skip_reason_serialization() {
        let json = serde_json::to_value(SkipReason::NotEnoughDistractors { required: 3, found: 1 }).unwrap();
        assert_eq!(json["reason"], "not_enough_distractors");
        assert_eq!(json["found"], 1);
    }
}
