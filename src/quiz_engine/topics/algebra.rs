//! Algebra: expand a pair of single-variable brackets.
//!
//! Every question reads `<starter> (v ± b1)(v ± b2)` and expects the expanded
//! quadratic `v² + (b1 + b2)v + b1·b2`. Bracket constants come from
//! `-20..=20`; pairs that sum to zero are redrawn so the linear term never
//! vanishes.
//!
//! Distractors keep the true linear coefficient and perturb the constant:
//! `±(b1·b2 + k)` with `k ∈ -5..=5` and a coin-flip sign.

use std::fmt;

use rand::Rng;

use crate::quiz_engine::{
    helpers::{distinct_from, format_quadratic, question},
    models::{Difficulty, Question, Topic},
    random::RandomSource,
};

const STARTERS: [&str; 7] = [
    "Simplify",
    "Evaluate",
    "What is",
    "Work out",
    "What is the answer to",
    "Multiply out these pair of brackets",
    "Expand the following brackets",
];

const VARIABLES: [char; 6] = ['a', 'b', 'x', 'y', 'n', 'z'];

const BRACKET_MIN: i32 = -20;
const BRACKET_MAX: i32 = 20;

/// One factor such as `(x + 7)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bracket {
    pub variable: char,
    pub number: i32,
}

impl fmt::Display for Bracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.number >= 0 { '+' } else { '-' };
        write!(f, "({} {} {})", self.variable, sign, self.number.abs())
    }
}

/// Expanded form of `first × second`.
pub fn expand(first: Bracket, second: Bracket) -> String {
    let b = first.number + second.number;
    let c = first.number * second.number;
    format_quadratic(first.variable, b, c)
}

/// Two brackets over the same variable whose constants never sum to zero.
pub fn draw_brackets<R: Rng>(rng: &mut R) -> (Bracket, Bracket) {
    let variable = *rng.pick(&VARIABLES);
    loop {
        let b1 = rng.next_int(BRACKET_MIN, BRACKET_MAX);
        let b2 = rng.next_int(BRACKET_MIN, BRACKET_MAX);
        if b1 + b2 != 0 {
            return (Bracket { variable, number: b1 }, Bracket { variable, number: b2 });
        }
        log::trace!("bracket pair ({b1}, {b2}) sums to zero, redrawing");
    }
}

fn distractors<R: Rng>(rng: &mut R, first: Bracket, second: Bracket, answer: &str) -> Vec<String> {
    let b = first.number + second.number;
    let product = first.number * second.number;

    (0..3)
        .map(|_| {
            distinct_from(rng, answer, |rng, _| {
                let mut c = product + rng.next_int(-5, 5);
                if rng.next_bool() {
                    c = -c;
                }
                format_quadratic(first.variable, b, c)
            })
        })
        .collect()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AlgebraModule;

impl AlgebraModule {
    pub fn topic(&self) -> Topic {
        Topic::Algebra
    }

    pub fn generate<R: Rng>(&self, rng: &mut R, difficulty: Difficulty, multi_choice: bool) -> Question {
        let (first, second) = draw_brackets(rng);
        let starter = *rng.pick(&STARTERS);
        let text = format!("{starter} {first}{second}");
        let answer = expand(first, second);

        let choices = multi_choice.then(|| distractors(rng, first, second, &answer));

        question(Topic::Algebra, None, difficulty, text, answer, choices, None)
    }
}
