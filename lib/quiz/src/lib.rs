//! # heriquiz Quiz
//!
//! Multiple-choice quiz assembly on top of the heriquiz distractor selector.
//!
//! Each [`QuizTemplate`] reads the answer from the target record and the
//! wrong options from distractor records. A question is only produced when
//! the full set of distractors is available, so every question has exactly
//! `distractor_count + 1` options, shuffled.
//!
//! ## Example
//!
//! ```rust
//! use heriquiz_core::{HeritageRecord, UnescoTag};
//! use heriquiz_quiz::{QuizAssembler, QuizConfig, QuizTemplate};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let site = |id, title: &str| {
//!     HeritageRecord::new(id, title)
//!         .with_unesco(UnescoTag::Natural)
//!         .with_summary(format!("About {}", title))
//! };
//! let target = site(1, "Yakushima").with_clues(["Japan", "Cedar forest", "Island"]);
//! let pool = vec![site(2, "Jeju"), site(3, "Komodo"), site(4, "Ha Long Bay")];
//!
//! let assembler = QuizAssembler::new(QuizConfig::default()).unwrap();
//! let quiz = assembler.assemble(&target, &pool, &mut StdRng::seed_from_u64(1));
//!
//! let question = quiz.question(QuizTemplate::Clues).unwrap();
//! assert_eq!(question.options.len(), 4);
//! assert_eq!(question.correct_answer, "Yakushima");
//! ```

pub mod config;
pub mod template;
pub mod question;
pub mod assembler;

pub use config::QuizConfig;
pub use template::{QuizTemplate, SkipReason};
pub use question::{QuizAssembly, QuizQuestion, SkippedTemplate};
pub use assembler::QuizAssembler;
