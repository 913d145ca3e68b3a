//! Scoring a generated batch one question at a time.
//!
//! A [`QuizSession`] is a queue: the front question is "current", each
//! submitted answer is marked and the queue advances, whether the answer was
//! right or wrong. Once the queue is empty the session only reports its
//! [`QuizSummary`].

use std::collections::VecDeque;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::quiz_engine::{error::QuizError, helpers::SQUARED, models::Question};

/// Compare a typed answer with the expected one.
///
/// Spaces and case are ignored, and a typed `^2` counts as `²`.
pub fn answers_match(given: &str, expected: &str) -> bool {
    normalise(given) == normalise(expected)
}

fn normalise(answer: &str) -> String {
    answer
        .replace("^2", &SQUARED.to_string())
        .replace(' ', "")
        .to_lowercase()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnswerOutcome {
    Correct,
    Incorrect { expected: String },
}

impl AnswerOutcome {
    pub fn is_correct(&self) -> bool {
        matches!(self, AnswerOutcome::Correct)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuizSummary {
    pub score: usize,
    pub total: usize,
    pub percentage: f64,
}

impl fmt::Display for QuizSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "You've scored {} out of {} which is {:.2}%",
            self.score, self.total, self.percentage
        )
    }
}

#[derive(Debug, Clone)]
pub struct QuizSession {
    remaining: VecDeque<Question>,
    total: usize,
    score: usize,
}

impl QuizSession {
    pub fn new(questions: Vec<Question>) -> Self {
        let total = questions.len();
        QuizSession { remaining: questions.into(), total, score: 0 }
    }

    pub fn current(&self) -> Option<&Question> {
        self.remaining.front()
    }

    pub fn is_finished(&self) -> bool {
        self.remaining.is_empty()
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// One-based position of the current question, or `total` once finished.
    pub fn position(&self) -> usize {
        (self.total - self.remaining.len() + 1).min(self.total)
    }

    /// Progress label such as "Question: 3/10".
    pub fn progress(&self) -> String {
        format!("Question: {}/{}", self.position(), self.total)
    }

    /// Mark `answer` against the current question and move on.
    pub fn submit(&mut self, answer: &str) -> Result<AnswerOutcome, QuizError> {
        if self.is_finished() {
            return Err(QuizError::SessionFinished);
        }
        if answer.is_empty() {
            return Err(QuizError::MissingAnswer);
        }

        let question = self.remaining.pop_front().ok_or(QuizError::SessionFinished)?;
        let outcome = if answers_match(answer, &question.answer) {
            self.score += 1;
            AnswerOutcome::Correct
        } else {
            AnswerOutcome::Incorrect { expected: question.answer }
        };

        log::debug!(
            "answer {}/{} marked {}",
            self.total - self.remaining.len(),
            self.total,
            if outcome.is_correct() { "correct" } else { "incorrect" },
        );
        Ok(outcome)
    }

    pub fn summary(&self) -> QuizSummary {
        let percentage = if self.total == 0 {
            0.0
        } else {
            self.score as f64 * 100.0 / self.total as f64
        };
        QuizSummary { score: self.score, total: self.total, percentage }
    }
}
