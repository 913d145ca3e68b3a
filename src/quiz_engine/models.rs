use std::fmt;
use std::str::FromStr;

use rand::{seq::SliceRandom, Rng};
use serde::{Deserialize, Serialize};

use crate::quiz_engine::{diagram::Diagram, error::QuizError, random::RandomSource};

// ---------------------------------------------------------------------------
// Topics and shape sub-kinds
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Topic {
    Algebra,
    Shapes,
}

impl Topic {
    pub const ALL: [Topic; 2] = [Topic::Algebra, Topic::Shapes];
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Topic::Algebra => write!(f, "Algebra"),
            Topic::Shapes  => write!(f, "Shapes"),
        }
    }
}

impl FromStr for Topic {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "algebra" => Ok(Topic::Algebra),
            "shapes"  => Ok(Topic::Shapes),
            _ => Err(QuizError::UnknownTopic(s.to_string())),
        }
    }
}

/// The shape a `Topic::Shapes` question was drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Rectangle,
    Triangle,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeKind::Rectangle => write!(f, "rectangle"),
            ShapeKind::Triangle  => write!(f, "triangle"),
        }
    }
}

/// Either a fixed topic or "any", in which case every question picks its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TopicSelector {
    Topic(Topic),
    Any,
}

impl From<Topic> for TopicSelector {
    fn from(topic: Topic) -> Self {
        TopicSelector::Topic(topic)
    }
}

impl fmt::Display for TopicSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TopicSelector::Topic(t) => write!(f, "{t}"),
            TopicSelector::Any      => write!(f, "Mixed"),
        }
    }
}

impl FromStr for TopicSelector {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mixed" | "any" | "random" => Ok(TopicSelector::Any),
            _ => s.parse::<Topic>().map(TopicSelector::Topic),
        }
    }
}

// ---------------------------------------------------------------------------
// Difficulty
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy   => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard   => write!(f, "Hard"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy"   => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard"   => Ok(Difficulty::Hard),
            _ => Err(QuizError::UnknownDifficulty(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Shape measurement vocabulary
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Metric {
    Area,
    Perimeter,
}

impl Metric {
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        *rng.pick(&[Metric::Area, Metric::Perimeter])
    }

    /// The metric a student is most likely to confuse this one with.
    pub fn other(self) -> Self {
        match self {
            Metric::Area      => Metric::Perimeter,
            Metric::Perimeter => Metric::Area,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Area      => write!(f, "area"),
            Metric::Perimeter => write!(f, "perimeter"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Unit {
    Cm,
    M,
}

impl Unit {
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        *rng.pick(&[Unit::Cm, Unit::M])
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::Cm => write!(f, "cm"),
            Unit::M  => write!(f, "m"),
        }
    }
}

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Upper bound on the batch size a single request may ask for.
pub const MAX_QUESTIONS: usize = 99;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub topic: TopicSelector,
    pub difficulty: Difficulty,
    pub count: usize,
    pub multi_choice: bool,
    pub rng_seed: Option<u64>,
}

impl GenerationRequest {
    /// Request with defaults: Easy, 10 questions, free-text answers, entropy seed.
    pub fn new(topic: impl Into<TopicSelector>) -> Self {
        GenerationRequest {
            topic: topic.into(),
            difficulty: Difficulty::Easy,
            count: 10,
            multi_choice: false,
            rng_seed: None,
        }
    }

    /// Build a request from the raw text of a setup form.
    ///
    /// `count` must be one or two ASCII digits with a value between 1 and
    /// [`MAX_QUESTIONS`]. Signs, padding and longer zero-prefixed input are
    /// rejected.
    pub fn from_form(
        topic: &str,
        difficulty: &str,
        count: &str,
        multi_choice: bool,
    ) -> Result<Self, QuizError> {
        let topic: TopicSelector = topic.parse()?;
        let difficulty: Difficulty = difficulty.parse()?;
        let count = parse_count(count)?;
        let request = GenerationRequest { topic, difficulty, count, multi_choice, rng_seed: None };
        request.validate()?;
        Ok(request)
    }

    pub fn validate(&self) -> Result<(), QuizError> {
        if self.count == 0 || self.count > MAX_QUESTIONS {
            return Err(QuizError::InvalidCount(self.count.to_string()));
        }
        Ok(())
    }
}

fn parse_count(raw: &str) -> Result<usize, QuizError> {
    let well_formed = (1..=2).contains(&raw.len()) && raw.bytes().all(|b| b.is_ascii_digit());
    if !well_formed {
        return Err(QuizError::InvalidCount(raw.to_string()));
    }
    raw.parse::<usize>().map_err(|_| QuizError::InvalidCount(raw.to_string()))
}

/// One labelled entry of a shuffled multiple-choice list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub id: String,
    pub text: String,
    pub is_correct: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub question: String,
    pub answer: String,
    /// Exactly three distractors when the question is multiple choice.
    pub choices: Option<Vec<String>>,
    #[serde(skip)]
    pub diagram: Option<Diagram>,
    pub topic: Topic,
    /// Set for `Topic::Shapes` questions only.
    pub shape: Option<ShapeKind>,
    pub difficulty: Difficulty,
}

impl Question {
    pub fn is_multi_choice(&self) -> bool {
        self.choices.as_ref().map_or(false, |c| !c.is_empty())
    }

    /// Distractors plus the real answer, shuffled and labelled "A", "B", ...
    ///
    /// Free-text questions have no options.
    pub fn options<R: Rng>(&self, rng: &mut R) -> Vec<AnswerOption> {
        let Some(choices) = self.choices.as_ref().filter(|c| !c.is_empty()) else {
            return Vec::new();
        };

        let mut texts: Vec<(&str, bool)> = choices.iter().map(|c| (c.as_str(), false)).collect();
        texts.push((self.answer.as_str(), true));
        texts.shuffle(rng);

        texts
            .into_iter()
            .zip(b'A'..)
            .map(|((text, is_correct), id)| AnswerOption {
                id: (id as char).to_string(),
                text: text.to_string(),
                is_correct,
            })
            .collect()
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.question)
    }
}
