use rand::Rng;
use serde_json::{json, Value};

use crate::quiz_engine::models::Question;

/// Diagram metadata for the client. Pixels stay in-process; the client only
/// needs to know a picture exists and how it was labelled.
fn diagram_block(question: &Question) -> Value {
    match &question.diagram {
        Some(d) => {
            let (width, height) = d.image.dimensions();
            json!({
                "shape": d.shape.to_string(),
                "width": width,
                "height": height,
                "rotation": d.rotation_degrees,
                "labels": d.labels,
            })
        }
        None => Value::Null,
    }
}

/// Map one question to the JSON shape a display client expects.
///
/// The answer and `is_correct` flags are stripped; options are shuffled
/// with `rng` so the answer is not always last.
pub fn to_client_question<R: Rng>(question: &Question, index: usize, rng: &mut R) -> Value {
    let options: Vec<Value> = question
        .options(rng)
        .into_iter()
        .map(|o| json!({ "id": o.id, "text": o.text }))
        .collect();

    json!({
        "index": index + 1,
        "question": question.question,
        "topic": question.topic.to_string(),
        "shape": question.shape.map(|s| s.to_string()),
        "difficulty": question.difficulty.to_string(),
        "multi_choice": question.is_multi_choice(),
        "options": options,
        "diagram": diagram_block(question),
    })
}

/// Wrap a whole batch for the client.
pub fn to_client_quiz<R: Rng>(questions: &[Question], rng: &mut R) -> Value {
    let items: Vec<Value> = questions
        .iter()
        .enumerate()
        .map(|(i, q)| to_client_question(q, i, rng))
        .collect();

    json!({
        "total": questions.len(),
        "questions": items,
    })
}
