//! Crate-level tests for `quiz_gen`.
//!
//! Included from `lib.rs` under `#[cfg(test)]`.
//!
//! # Coverage
//!
//! | Group | What is tested |
//! |-------|----------------|
//! | Determinism | Same seed → identical batch; different seeds → varied batches |
//! | Batch shape | Exact count; requested topic and difficulty on every question |
//! | Choices | Exactly 3 distractors when multi-choice, none otherwise, never the answer |
//! | Mixing | Mixed batches contain both topics and all three question kinds |
//! | Validation | Form parsing and count bounds |
//! | Options | Shuffled options contain the answer exactly once |
//! | Client payload | JSON strips answers and keeps diagram metadata |

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::{
    generate_questions, to_client_quiz, Difficulty, GenerationRequest, Question, QuizError,
    QuestionGenerator, QuizSession, ShapeKind, Topic, TopicSelector, MAX_QUESTIONS,
};

// ── helpers ──────────────────────────────────────────────────────────────────

fn req(topic: impl Into<TopicSelector>, difficulty: Difficulty, count: usize, multi_choice: bool, seed: u64) -> GenerationRequest {
    GenerationRequest {
        topic: topic.into(),
        difficulty,
        count,
        multi_choice,
        rng_seed: Some(seed),
    }
}

fn all_selectors() -> [TopicSelector; 3] {
    [TopicSelector::Topic(Topic::Algebra), TopicSelector::Topic(Topic::Shapes), TopicSelector::Any]
}

fn generate(request: GenerationRequest) -> Vec<Question> {
    generate_questions(request).expect("valid request rejected")
}

const SEEDS: [u64; 5] = [1, 42, 999, 0xDEAD_BEEF, 7];

// ── determinism ──────────────────────────────────────────────────────────────

#[test]
fn same_seed_produces_identical_batch() {
    for selector in all_selectors() {
        let a = generate(req(selector, Difficulty::Medium, 15, true, 12345));
        let b = generate(req(selector, Difficulty::Medium, 15, true, 12345));
        for (x, y) in a.iter().zip(b.iter()) {
            assert_eq!(x.question, y.question, "question mismatch for {selector}");
            assert_eq!(x.answer, y.answer, "answer mismatch for {selector}");
            assert_eq!(x.choices, y.choices, "choices mismatch for {selector}");
            assert_eq!(x.shape, y.shape, "shape mismatch for {selector}");
        }
    }
}

#[test]
fn different_seeds_produce_varied_questions() {
    let mut same = 0usize;
    let pairs = 40u64;
    for seed in 0..pairs {
        let a = generate(req(Topic::Algebra, Difficulty::Easy, 1, false, seed));
        let b = generate(req(Topic::Algebra, Difficulty::Easy, 1, false, seed + 500));
        if a[0].question == b[0].question {
            same += 1;
        }
    }
    assert!(same < pairs as usize / 4, "too many identical questions ({same}/{pairs})");
}

#[test]
fn entropy_seed_produces_a_valid_batch() {
    let mut request = GenerationRequest::new(TopicSelector::Any);
    request.multi_choice = true;
    let batch = generate(request);
    assert_eq!(batch.len(), 10);
    assert!(batch.iter().all(|q| !q.question.is_empty() && !q.answer.is_empty()));
}

// ── batch shape ──────────────────────────────────────────────────────────────

#[test]
fn batch_has_exactly_the_requested_count() {
    for selector in all_selectors() {
        for count in [1usize, 2, 15, MAX_QUESTIONS] {
            let batch = generate(req(selector, Difficulty::Medium, count, true, 3));
            assert_eq!(batch.len(), count, "{selector} count={count}");
        }
    }
}

#[test]
fn requested_topic_is_respected() {
    for topic in Topic::ALL {
        for seed in SEEDS {
            let batch = generate(req(topic, Difficulty::Easy, 15, true, seed));
            assert!(
                batch.iter().all(|q| q.topic == topic),
                "off-topic question in {topic} batch seed={seed}"
            );
        }
    }
}

#[test]
fn requested_difficulty_is_respected() {
    for difficulty in Difficulty::ALL {
        for selector in all_selectors() {
            let batch = generate(req(selector, difficulty, 25, true, 11));
            assert!(batch.iter().all(|q| q.difficulty == difficulty), "{selector} at {difficulty}");
        }
    }
}

#[test]
fn shape_kind_is_set_only_for_shapes() {
    let batch = generate(req(TopicSelector::Any, Difficulty::Hard, 60, false, 21));
    for q in &batch {
        match q.topic {
            Topic::Algebra => assert!(q.shape.is_none() && q.diagram.is_none()),
            Topic::Shapes  => assert!(q.shape.is_some() && q.diagram.is_some()),
        }
    }
}

// ── choices ──────────────────────────────────────────────────────────────────

#[test]
fn multi_choice_questions_have_three_distractors_distinct_from_the_answer() {
    for selector in all_selectors() {
        for difficulty in Difficulty::ALL {
            for seed in SEEDS {
                for q in generate(req(selector, difficulty, 20, true, seed)) {
                    assert!(q.is_multi_choice());
                    let choices = q.choices.as_ref().expect("missing choices");
                    assert_eq!(choices.len(), 3, "{}", q.question);
                    for c in choices {
                        assert_ne!(c, &q.answer, "distractor equals answer for '{}'", q.question);
                    }
                }
            }
        }
    }
}

#[test]
fn free_text_questions_have_no_choices() {
    for selector in all_selectors() {
        for q in generate(req(selector, Difficulty::Medium, 30, false, 5)) {
            assert!(q.choices.is_none());
            assert!(!q.is_multi_choice());
        }
    }
}

#[test]
fn options_contain_the_answer_exactly_once() {
    let mut rng = StdRng::seed_from_u64(8);
    for q in generate(req(TopicSelector::Any, Difficulty::Easy, 20, true, 8)) {
        let options = q.options(&mut rng);
        assert_eq!(options.len(), 4);
        let ids: Vec<&str> = options.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["A", "B", "C", "D"]);
        assert_eq!(options.iter().filter(|o| o.is_correct).count(), 1);
        let correct = options.iter().find(|o| o.is_correct).map(|o| o.text.as_str());
        assert_eq!(correct, Some(q.answer.as_str()));
    }
}

// ── mixing ───────────────────────────────────────────────────────────────────

#[test]
fn mixed_batch_contains_both_topics() {
    // Larger than a single request allows, so drive the facade directly.
    let mut rng = StdRng::seed_from_u64(2024);
    let batch = QuestionGenerator::new().generate_mixed(&mut rng, Difficulty::Easy, 200, false);
    assert_eq!(batch.len(), 200);
    assert!(batch.iter().any(|q| q.topic == Topic::Algebra));
    assert!(batch.iter().any(|q| q.topic == Topic::Shapes));
}

#[test]
fn mixed_batch_contains_all_three_question_kinds() {
    let batch = generate(req(TopicSelector::Any, Difficulty::Easy, 99, false, 77));
    assert!(batch.iter().any(|q| q.shape == Some(ShapeKind::Rectangle)));
    assert!(batch.iter().any(|q| q.shape == Some(ShapeKind::Triangle)));
    assert!(batch.iter().any(|q| q.shape.is_none()));
}

#[test]
fn shape_wording_matches_answer_units() {
    let (mut saw_cm, mut saw_m) = (false, false);
    for seed in 0..200u64 {
        for q in generate(req(Topic::Shapes, Difficulty::Hard, 5, false, seed)) {
            let asks_area = q.question.contains(" area ");
            assert!(asks_area || q.question.contains(" perimeter "), "{}", q.question);
            assert_eq!(asks_area, q.answer.ends_with('²'), "'{}' -> '{}'", q.question, q.answer);

            let bare = q.answer.trim_end_matches('²');
            if bare.ends_with("cm") {
                saw_cm = true;
            } else {
                assert!(bare.ends_with('m'), "unexpected unit in '{}'", q.answer);
                saw_m = true;
            }
        }
    }
    assert!(saw_cm && saw_m, "cm seen: {saw_cm}, m seen: {saw_m}");
}

// ── validation ───────────────────────────────────────────────────────────────

#[test]
fn form_input_is_parsed_case_insensitively() {
    let request = GenerationRequest::from_form("Mixed", "HARD", "12", true).unwrap();
    assert_eq!(request.topic, TopicSelector::Any);
    assert_eq!(request.difficulty, Difficulty::Hard);
    assert_eq!(request.count, 12);
    assert!(request.multi_choice);

    let request = GenerationRequest::from_form("shapes", "easy", "1", false).unwrap();
    assert_eq!(request.topic, TopicSelector::Topic(Topic::Shapes));
}

#[test]
fn malformed_form_input_is_rejected() {
    assert!(matches!(
        GenerationRequest::from_form("Geometry", "Easy", "5", false),
        Err(QuizError::UnknownTopic(_))
    ));
    assert!(matches!(
        GenerationRequest::from_form("Algebra", "Impossible", "5", false),
        Err(QuizError::UnknownDifficulty(_))
    ));
    for count in ["", "abc", "0", "100", "-3", "+5", " 12 ", "007"] {
        assert!(
            matches!(GenerationRequest::from_form("Algebra", "Easy", count, false), Err(QuizError::InvalidCount(_))),
            "count '{count}' accepted"
        );
    }
}

#[test]
fn oversized_request_is_rejected() {
    let result = generate_questions(req(Topic::Shapes, Difficulty::Easy, MAX_QUESTIONS + 1, false, 1));
    assert!(matches!(result, Err(QuizError::InvalidCount(_))));
}

// ── session + client payload ─────────────────────────────────────────────────

#[test]
fn answering_every_question_correctly_scores_full_marks() {
    let batch = generate(req(TopicSelector::Any, Difficulty::Medium, 12, true, 31));
    let answers: Vec<String> = batch.iter().map(|q| q.answer.clone()).collect();
    let mut session = QuizSession::new(batch);
    for answer in &answers {
        assert!(session.submit(answer).unwrap().is_correct());
    }
    assert_eq!(session.summary().to_string(), "You've scored 12 out of 12 which is 100.00%");
}

#[test]
fn distractors_are_marked_wrong() {
    let batch = generate(req(Topic::Algebra, Difficulty::Easy, 10, true, 32));
    let picks: Vec<String> = batch.iter().map(|q| q.choices.as_ref().unwrap()[0].clone()).collect();
    let mut session = QuizSession::new(batch);
    for pick in &picks {
        session.submit(pick).unwrap();
    }
    assert_eq!(session.score(), 0);
}

#[test]
fn client_payload_strips_answers() {
    let batch = generate(req(Topic::Shapes, Difficulty::Easy, 4, true, 40));
    let mut rng = StdRng::seed_from_u64(40);
    let payload = to_client_quiz(&batch, &mut rng);

    assert_eq!(payload["total"], 4);
    let questions = payload["questions"].as_array().unwrap();
    assert_eq!(questions.len(), 4);
    for (i, q) in questions.iter().enumerate() {
        assert_eq!(q["index"], i + 1);
        assert!(q.get("answer").is_none());
        assert_eq!(q["options"].as_array().unwrap().len(), 4);
        assert!(q["options"][0].get("is_correct").is_none());
        assert!(q["diagram"]["labels"].as_array().unwrap().len() >= 2);
    }
}

#[test]
fn questions_serialize_without_the_diagram() {
    let batch = generate(req(Topic::Shapes, Difficulty::Easy, 1, false, 50));
    let value = serde_json::to_value(&batch[0]).unwrap();
    assert!(value.get("diagram").is_none());
    assert_eq!(value["topic"], "Shapes");
}
