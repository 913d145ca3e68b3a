use rand::Rng;

use crate::quiz_engine::{
    diagram::{self, random_rotation},
    helpers::{distinct_from, measure_2dp, question},
    models::{Difficulty, Metric, Question, ShapeKind, Topic, Unit},
    profile::{self, MIN_SIDE},
    random::RandomSource,
};

use super::random_verb;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriangleSides {
    pub hypotenuse: i32,
    pub adjacent: i32,
    pub opposite: i32,
}

impl TriangleSides {
    pub fn area(self) -> f64 {
        f64::from(self.adjacent * self.opposite) / 2.0
    }

    pub fn perimeter(self) -> i32 {
        self.hypotenuse + self.adjacent + self.opposite
    }

    fn strictly_descending(self) -> bool {
        self.hypotenuse > self.adjacent && self.adjacent > self.opposite
    }
}

/// Three sides for `difficulty`.
///
/// Draws are rejected while `hypotenuse > adjacent > opposite`. Nothing here
/// checks the triangle inequality or Pythagoras; the labels are read as
/// given.
pub fn draw_sides<R: Rng>(rng: &mut R, difficulty: Difficulty) -> TriangleSides {
    let bounds = profile::triangle(difficulty);
    loop {
        let sides = TriangleSides {
            hypotenuse: rng.next_int(MIN_SIDE, bounds.max_hypotenuse),
            adjacent: rng.next_int(MIN_SIDE, bounds.max_adjacent),
            opposite: rng.next_int(MIN_SIDE, bounds.max_opposite),
        };
        if !sides.strictly_descending() {
            return sides;
        }
        log::trace!("triangle sides {sides:?} rejected, redrawing");
    }
}

/// Expected answer, always to two decimal places.
pub fn solve(sides: TriangleSides, metric: Metric, unit: Unit) -> String {
    match metric {
        Metric::Area      => measure_2dp(sides.area(), unit, true),
        Metric::Perimeter => measure_2dp(f64::from(sides.perimeter()), unit, false),
    }
}

fn distractors<R: Rng>(rng: &mut R, sides: TriangleSides, metric: Metric, unit: Unit, answer: &str) -> Vec<String> {
    let legs = sides.opposite + sides.adjacent;

    // Right numbers, wrong units, or the wrong pair of sides.
    let (first, second) = match metric {
        Metric::Perimeter => (
            measure_2dp(sides.area(), unit, true),
            measure_2dp(f64::from(sides.perimeter()), unit, true),
        ),
        Metric::Area => (
            measure_2dp(f64::from(sides.perimeter()), unit, false),
            distinct_from(rng, answer, |rng, attempt| {
                let nudge = if attempt == 0 { 0 } else { rng.next_int(2, 10) };
                measure_2dp(f64::from(legs + nudge), unit, true)
            }),
        ),
    };
    let third = distinct_from(rng, answer, |rng, _| {
        measure_2dp(f64::from(2 * sides.opposite + rng.next_int(2, 10)), unit, false)
    });

    vec![first, second, third]
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TriangleModule;

impl TriangleModule {
    pub fn generate<R: Rng>(&self, rng: &mut R, difficulty: Difficulty, multi_choice: bool) -> Question {
        let unit = Unit::random(rng);
        let metric = Metric::random(rng);
        let sides = draw_sides(rng, difficulty);

        let text = format!("{} the {metric} of this triangle", random_verb(rng));
        let diagram = diagram::right_triangle(
            sides.hypotenuse,
            sides.adjacent,
            sides.opposite,
            unit,
            random_rotation(rng),
        );
        let answer = solve(sides, metric, unit);
        let choices = multi_choice.then(|| distractors(rng, sides, metric, unit, &answer));

        question(
            Topic::Shapes,
            Some(ShapeKind::Triangle),
            difficulty,
            text,
            answer,
            choices,
            Some(diagram),
        )
    }
}
