//! Shape questions: area or perimeter of a drawn rectangle or right triangle.
//!
//! [`ShapesDispatcher`] owns the fixed set of shape modules and picks one
//! uniformly for every question, so a single batch freely mixes rectangles
//! and triangles.

pub mod rectangle;
pub mod triangle;

use rand::Rng;

use crate::quiz_engine::{
    models::{Difficulty, Question, ShapeKind, Topic},
    random::RandomSource,
};

use self::{rectangle::RectangleModule, triangle::TriangleModule};

/// Opening verbs shared by every shape question.
pub(crate) const VERBS: [&str; 4] = ["Calculate", "Work out", "Evaluate", "Find"];

pub(crate) fn random_verb<R: Rng>(rng: &mut R) -> &'static str {
    *rng.pick(&VERBS)
}

#[derive(Debug, Clone, Copy)]
pub enum ShapeModule {
    Rectangle(RectangleModule),
    Triangle(TriangleModule),
}

impl ShapeModule {
    pub fn topic(&self) -> Topic {
        Topic::Shapes
    }

    pub fn shape(&self) -> ShapeKind {
        match self {
            ShapeModule::Rectangle(_) => ShapeKind::Rectangle,
            ShapeModule::Triangle(_)  => ShapeKind::Triangle,
        }
    }

    pub fn generate<R: Rng>(&self, rng: &mut R, difficulty: Difficulty, multi_choice: bool) -> Question {
        match self {
            ShapeModule::Rectangle(m) => m.generate(rng, difficulty, multi_choice),
            ShapeModule::Triangle(m)  => m.generate(rng, difficulty, multi_choice),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ShapesDispatcher {
    modules: [ShapeModule; 2],
}

impl Default for ShapesDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl ShapesDispatcher {
    pub fn new() -> Self {
        ShapesDispatcher {
            modules: [
                ShapeModule::Rectangle(RectangleModule),
                ShapeModule::Triangle(TriangleModule),
            ],
        }
    }

    pub fn topic(&self) -> Topic {
        Topic::Shapes
    }

    pub fn modules(&self) -> &[ShapeModule] {
        &self.modules
    }

    /// One question from a uniformly chosen shape module.
    pub fn generate<R: Rng>(&self, rng: &mut R, difficulty: Difficulty, multi_choice: bool) -> Question {
        let module = rng.pick(&self.modules);
        log::trace!("shapes dispatcher picked {}", module.shape());
        module.generate(rng, difficulty, multi_choice)
    }

    /// `count` questions, each with its own independently chosen shape.
    pub fn generate_batch<R: Rng>(
        &self,
        rng: &mut R,
        count: usize,
        difficulty: Difficulty,
        multi_choice: bool,
    ) -> Vec<Question> {
        (0..count).map(|_| self.generate(rng, difficulty, multi_choice)).collect()
    }
}
