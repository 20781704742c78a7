//! Generated quiz questions

use crate::template::{QuizTemplate, SkipReason};
use heriquiz_core::RecordId;
use serde::{Deserialize, Serialize};

/// A multiple-choice question ready to be persisted by the caller
///
/// Field names on the wire match the quiz table columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub heritage_id: RecordId,
    pub template: QuizTemplate,
    #[serde(rename = "question")]
    pub question_text: String,
    /// Shuffled options, exactly one of which is the answer
    pub options: Vec<String>,
    #[serde(rename = "answer")]
    pub correct_answer: String,
}

impl QuizQuestion {
    /// Position of the correct answer within `options`
    pub fn answer_index(&self) -> Option<usize> {
        self.options.iter().position(|o| *o == self.correct_answer)
    }

    pub fn is_correct(&self, choice: &str) -> bool {
        choice == self.correct_answer
    }
}

/// A template that produced no question
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedTemplate {
    pub template: QuizTemplate,
    #[serde(flatten)]
    pub reason: SkipReason,
}

/// Outcome of assembling a quiz for one target
#[derive(Debug, Clone, Default, Serialize)]
pub struct QuizAssembly {
    pub questions: Vec<QuizQuestion>,
    pub skipped: Vec<SkippedTemplate>,
}

impl QuizAssembly {
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// The question generated for `template`, if any
    pub fn question(&self, template: QuizTemplate) -> Option<&QuizQuestion> {
        self.questions.iter().find(|q| q.template == template)
    }

    /// Why `template` was skipped, if it was
    pub fn skip_reason(&self, template: QuizTemplate) -> Option<&SkipReason> {
        self.skipped.iter().find(|s| s.template == template).map(|s| &s.reason)
    }

    pub fn into_questions(self) -> Vec<QuizQuestion> {
        self.questions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_question() -> QuizQuestion {
        QuizQuestion {
            heritage_id: RecordId(4),
            template: QuizTemplate::Clues,
            question_text: "Which heritage site matches these clues?".to_string(),
            options: vec!["Petra".into(), "Angkor".into(), "Hampi".into(), "Bagan".into()],
            correct_answer: "Hampi".to_string(),
        }
    }

    #[test]
    fn test_answer_index() {
        let question = create_question();
        assert_eq!(question.answer_index(), Some(2));
        assert!(question.is_correct("Hampi"));
        assert!(!question.is_correct("Petra"));
    }

    #[test]
    fn test_question_wire_names() {
        let json = serde_json::to_value(create_question()).unwrap();
        assert_eq!(json["heritage_id"], 4);
        assert_eq!(json["template"], "clues");
        assert_eq!(json["answer"], "Hampi");
        assert!(json["question"].as_str().unwrap().starts_with("Which"));
        assert_eq!(json["options"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn test_skipped_template_flattens_reason() {
        let skipped = SkippedTemplate {
            template: QuizTemplate::Description,
            reason: SkipReason::MissingCorrectAnswer,
        };
        let json = serde_json::to_value(&skipped).unwrap();
        assert_eq!(json["template"], "description");
        assert_eq!(json["reason"], "missing_correct_answer");
    }
}
