//! # quiz_gen
//!
//! Procedural maths quiz generation: algebra and shape questions synthesised
//! on demand from random parameters, never stored.
//!
//! ## How it works
//!
//! 1. Create a [`GenerationRequest`] with a topic (or [`TopicSelector::Any`]),
//!    difficulty, question count, multiple-choice flag and optional RNG seed.
//! 2. Call [`generate_questions`]. Each question picks its module (algebra,
//!    or shapes, which in turn picks rectangle or triangle), draws its numbers
//!    from the difficulty's bounds, and formats the expected answer.
//! 3. Multiple-choice questions carry three distractors; shape questions
//!    carry a labelled, randomly rotated [`Diagram`].
//! 4. Feed the batch to a [`QuizSession`] to mark answers and get a score.
//!
//! ## Quick start
//!
//! ```rust
//! use quiz_gen::{generate_questions, Difficulty, GenerationRequest, QuizSession, Topic, TopicSelector};
//!
//! // Minimal: only the topic is required (defaults: Easy, 10 questions, free text):
//! let questions = generate_questions(GenerationRequest::new(Topic::Algebra)).unwrap();
//! println!("Q: {}", questions[0].question);
//!
//! // Full control:
//! let questions = generate_questions(GenerationRequest {
//!     topic: TopicSelector::Any,
//!     difficulty: Difficulty::Hard,
//!     count: 5,
//!     multi_choice: true,
//!     rng_seed: Some(42),
//! })
//! .unwrap();
//!
//! let mut session = QuizSession::new(questions);
//! while let Some(q) = session.current() {
//!     let answer = q.answer.clone();
//!     session.submit(&answer).unwrap();
//! }
//! println!("{}", session.summary());
//! ```

pub mod client_adapter;
pub mod quiz_engine;

// Convenience re-exports so callers can use `quiz_gen::generate_questions`
// directly without reaching into `quiz_engine::`.
pub use client_adapter::{to_client_question, to_client_quiz};
pub use quiz_engine::{
    answers_match, generate_questions, AnswerOption, AnswerOutcome, Diagram, Difficulty,
    GenerationRequest, Metric, Question, QuestionGenerator, QuizError, QuizSession, QuizSummary,
    RandomSource, ShapeKind, Topic, TopicSelector, Unit, MAX_QUESTIONS,
};

#[cfg(test)]
mod tests;
