//! Topic modules.
//!
//! Each module answers the same two questions: which [`Topic`] it serves and
//! how to build one [`Question`] for a difficulty. The set is closed, so the
//! dispatch is a plain `match`:
//!
//! ```ignore
//! pub fn generate<R: Rng>(
//!     &self,
//!     rng: &mut R,
//!     difficulty: Difficulty,
//!     multi_choice: bool,
//! ) -> Question
//! ```
//!
//! The facade in `generator.rs` holds one [`TopicModule`] per topic.

pub mod algebra;
pub mod shapes;

use rand::Rng;

use crate::quiz_engine::models::{Difficulty, Question, Topic};

use self::{algebra::AlgebraModule, shapes::ShapesDispatcher};

#[derive(Debug, Clone)]
pub enum TopicModule {
    Algebra(AlgebraModule),
    Shapes(ShapesDispatcher),
}

impl TopicModule {
    pub fn topic(&self) -> Topic {
        match self {
            TopicModule::Algebra(m) => m.topic(),
            TopicModule::Shapes(m)  => m.topic(),
        }
    }

    pub fn generate<R: Rng>(&self, rng: &mut R, difficulty: Difficulty, multi_choice: bool) -> Question {
        match self {
            TopicModule::Algebra(m) => m.generate(rng, difficulty, multi_choice),
            TopicModule::Shapes(m)  => m.generate(rng, difficulty, multi_choice),
        }
    }

    pub fn generate_batch<R: Rng>(
        &self,
        rng: &mut R,
        count: usize,
        difficulty: Difficulty,
        multi_choice: bool,
    ) -> Vec<Question> {
        match self {
            TopicModule::Algebra(m) => (0..count).map(|_| m.generate(rng, difficulty, multi_choice)).collect(),
            TopicModule::Shapes(m)  => m.generate_batch(rng, count, difficulty, multi_choice),
        }
    }
}
