use thiserror::Error;

/// Everything a caller of the quiz engine can get wrong.
///
/// Generation itself never fails; these come from request parsing,
/// validation and session scoring.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuizError {
    #[error("Amount must be a valid integer between 1 and 99 (got '{0}')")]
    InvalidCount(String),

    #[error("Unknown topic: {0}")]
    UnknownTopic(String),

    #[error("Unknown difficulty: {0}")]
    UnknownDifficulty(String),

    #[error("You must input an answer")]
    MissingAnswer,

    #[error("The quiz has already finished")]
    SessionFinished,
}
