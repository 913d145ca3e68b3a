//! Shared builder functions used by every topic module.
//!
//! Topic modules pick numbers; these helpers turn numbers into the exact
//! answer strings a student is expected to type, and assemble the final
//! [`Question`].
//!
//! ## Answer text conventions
//!
//! - Quadratics: `x² + 4x - 21`. Zero terms are dropped, every present term
//!   carries an explicit ` + ` / ` - ` and its absolute value.
//! - Measurements: `<value><unit>` in lower case, followed by `²` for areas.

use std::fmt::Display;

use rand::Rng;

use crate::quiz_engine::{
    diagram::Diagram,
    models::{Difficulty, Question, ShapeKind, Topic, Unit},
};

pub const SQUARED: char = '\u{00B2}';

/// Format `v² + bv + c` for the given variable.
pub fn format_quadratic(variable: char, b: i32, c: i32) -> String {
    let mut out = format!("{variable}{SQUARED}");

    if b != 0 {
        out.push_str(sign_token(b));
        out.push_str(&format!("{}{variable}", b.abs()));
    }
    if c != 0 {
        out.push_str(sign_token(c));
        out.push_str(&c.abs().to_string());
    }
    out
}

fn sign_token(n: i32) -> &'static str {
    if n > 0 { " + " } else { " - " }
}

/// Format a measurement such as `200cm²` or `60m`.
pub fn measure(value: impl Display, unit: Unit, squared: bool) -> String {
    let text = if squared {
        format!("{value}{unit}{SQUARED}")
    } else {
        format!("{value}{unit}")
    };
    text.to_lowercase()
}

/// Same as [`measure`] with the value rendered to two decimal places.
pub fn measure_2dp(value: f64, unit: Unit, squared: bool) -> String {
    measure(format!("{value:.2}"), unit, squared)
}

/// Draw a distractor until it differs from `answer`.
///
/// `attempt` receives the zero-based attempt number, so a distractor with a
/// fixed first value can fall back to a perturbed one on a collision.
pub fn distinct_from<R: Rng>(
    rng: &mut R,
    answer: &str,
    mut attempt: impl FnMut(&mut R, u32) -> String,
) -> String {
    let mut n = 0;
    loop {
        let candidate = attempt(rng, n);
        if candidate != answer {
            return candidate;
        }
        log::trace!("distractor '{candidate}' equals the answer, redrawing");
        n += 1;
    }
}

/// Assemble the final [`Question`].
///
/// `choices` is only kept when `multi_choice` is set.
pub fn question(
    topic: Topic,
    shape: Option<ShapeKind>,
    difficulty: Difficulty,
    text: String,
    answer: String,
    choices: Option<Vec<String>>,
    diagram: Option<Diagram>,
) -> Question {
    Question {
        question: text,
        answer,
        choices,
        diagram,
        topic,
        shape,
        difficulty,
    }
}
