use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::quiz_engine::{
    error::QuizError,
    models::{Difficulty, GenerationRequest, Question, Topic, TopicSelector},
    random::RandomSource,
    topics::{algebra::AlgebraModule, shapes::ShapesDispatcher, TopicModule},
};

/// Facade over the registered topic modules.
#[derive(Debug, Clone)]
pub struct QuestionGenerator {
    modules: Vec<TopicModule>,
}

impl Default for QuestionGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl QuestionGenerator {
    pub fn new() -> Self {
        QuestionGenerator {
            modules: vec![
                TopicModule::Algebra(AlgebraModule),
                TopicModule::Shapes(ShapesDispatcher::new()),
            ],
        }
    }

    pub fn modules(&self) -> &[TopicModule] {
        &self.modules
    }

    /// Panics if no module serves `topic`; every topic is registered in `new`.
    fn module_for(&self, topic: Topic) -> &TopicModule {
        self.modules
            .iter()
            .find(|m| m.topic() == topic)
            .unwrap_or_else(|| panic!("no question module registered for topic {topic}"))
    }

    /// `count` questions, all from `topic`.
    pub fn generate_topic<R: Rng>(
        &self,
        rng: &mut R,
        topic: Topic,
        difficulty: Difficulty,
        count: usize,
        multi_choice: bool,
    ) -> Vec<Question> {
        log::debug!("dispatching {count} {topic} question(s) at {difficulty}");
        self.module_for(topic).generate_batch(rng, count, difficulty, multi_choice)
    }

    /// `count` questions, each from an independently chosen module.
    pub fn generate_mixed<R: Rng>(
        &self,
        rng: &mut R,
        difficulty: Difficulty,
        count: usize,
        multi_choice: bool,
    ) -> Vec<Question> {
        log::debug!("dispatching {count} mixed question(s) at {difficulty}");
        (0..count)
            .map(|_| rng.pick(&self.modules).generate(rng, difficulty, multi_choice))
            .collect()
    }

    pub fn generate<R: Rng>(
        &self,
        rng: &mut R,
        selector: TopicSelector,
        difficulty: Difficulty,
        count: usize,
        multi_choice: bool,
    ) -> Vec<Question> {
        match selector {
            TopicSelector::Topic(topic) => self.generate_topic(rng, topic, difficulty, count, multi_choice),
            TopicSelector::Any => self.generate_mixed(rng, difficulty, count, multi_choice),
        }
    }
}

/// Single entry point: validate the request, seed a generator and build the batch.
pub fn generate_questions(request: GenerationRequest) -> Result<Vec<Question>, QuizError> {
    request.validate()?;

    let mut rng: StdRng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };

    log::debug!(
        "generating {} question(s): topic={}, difficulty={}, multi_choice={}, seed={:?}",
        request.count,
        request.topic,
        request.difficulty,
        request.multi_choice,
        request.rng_seed,
    );

    Ok(QuestionGenerator::new().generate(
        &mut rng,
        request.topic,
        request.difficulty,
        request.count,
        request.multi_choice,
    ))
}
