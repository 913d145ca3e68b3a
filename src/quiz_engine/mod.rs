//! Core quiz engine: question generation, diagrams and scoring.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `models`    | Shared types: topics, difficulty, requests, the `Question` record |
//! | `random`    | `RandomSource`, bounded draws over any `rand::Rng` |
//! | `profile`   | Side-length bounds per shape and difficulty |
//! | `helpers`   | Answer formatting and distractor redraws shared by topics |
//! | `diagram`   | Labelled, rotated raster drawings for shape questions |
//! | `topics`    | Algebra and shape question modules |
//! | `generator` | `QuestionGenerator` facade and `generate_questions()` |
//! | `session`   | Answer checking and quiz scoring |
//! | `error`     | `QuizError` |

pub mod diagram;
pub mod error;
pub mod generator;
pub mod helpers;
pub mod models;
pub mod profile;
pub mod random;
pub mod session;
pub mod topics;

// Re-export the public API surface so callers can use
// `quiz_engine::generate_questions` without reaching into sub-modules.
pub use diagram::Diagram;
pub use error::QuizError;
pub use generator::{generate_questions, QuestionGenerator};
pub use models::{
    AnswerOption, Difficulty, GenerationRequest, Metric, Question, ShapeKind, Topic,
    TopicSelector, Unit, MAX_QUESTIONS,
};
pub use random::RandomSource;
pub use session::{answers_match, AnswerOutcome, QuizSession, QuizSummary};
