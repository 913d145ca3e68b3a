use rand::Rng;

use crate::quiz_engine::{
    diagram::{self, random_rotation},
    helpers::{distinct_from, measure, question},
    models::{Difficulty, Metric, Question, ShapeKind, Topic, Unit},
    profile::{self, MIN_SIDE},
    random::RandomSource,
};

use super::random_verb;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RectangleSides {
    pub width: i32,
    pub length: i32,
}

impl RectangleSides {
    pub fn area(self) -> i32 {
        self.width * self.length
    }

    pub fn perimeter(self) -> i32 {
        2 * (self.width + self.length)
    }
}

/// Width and length for `difficulty`, redrawn until `length >= width`.
pub fn draw_sides<R: Rng>(rng: &mut R, difficulty: Difficulty) -> RectangleSides {
    let bounds = profile::rectangle(difficulty);
    loop {
        let width = rng.next_int(MIN_SIDE, bounds.max_width);
        let length = rng.next_int(MIN_SIDE, bounds.max_length);
        if length >= width {
            return RectangleSides { width, length };
        }
        log::trace!("rectangle {width}x{length} is wider than long, redrawing");
    }
}

/// Expected answer: areas get a `²` suffix, perimeters a plain unit.
pub fn solve(sides: RectangleSides, metric: Metric, unit: Unit) -> String {
    match metric {
        Metric::Area      => measure(sides.area(), unit, true),
        Metric::Perimeter => measure(sides.perimeter(), unit, false),
    }
}

fn distractors<R: Rng>(rng: &mut R, sides: RectangleSides, metric: Metric, unit: Unit, answer: &str) -> Vec<String> {
    let half_perimeter = sides.width + sides.length;

    // The other metric, correctly computed, is the most tempting trap.
    let wrong_metric = solve(sides, metric.other(), unit);
    let over = distinct_from(rng, answer, |rng, _| {
        measure(half_perimeter + rng.next_int(2, 15), unit, true)
    });
    let under = distinct_from(rng, answer, |rng, _| {
        measure(half_perimeter - rng.next_int(2, 15), unit, false)
    });

    vec![wrong_metric, over, under]
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RectangleModule;

impl RectangleModule {
    pub fn generate<R: Rng>(&self, rng: &mut R, difficulty: Difficulty, multi_choice: bool) -> Question {
        let unit = Unit::random(rng);
        let metric = Metric::random(rng);
        let sides = draw_sides(rng, difficulty);

        let text = format!("{} the {metric} of this rectangle", random_verb(rng));
        let diagram = diagram::rectangle(sides.width, sides.length, unit, random_rotation(rng));
        let answer = solve(sides, metric, unit);
        let choices = multi_choice.then(|| distractors(rng, sides, metric, unit, &answer));

        question(
            Topic::Shapes,
            Some(ShapeKind::Rectangle),
            difficulty,
            text,
            answer,
            choices,
            Some(diagram),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn area_answer_uses_squared_unit() {
        let sides = RectangleSides { width: 10, length: 20 };
        let answer = solve(sides, Metric::Area, Unit::Cm);
        assert_eq!(answer, "200cm²");
        assert!(answer.eq_ignore_ascii_case("200CM²"));
    }

    #[test]
    fn perimeter_answer_uses_plain_unit() {
        let sides = RectangleSides { width: 10, length: 20 };
        assert_eq!(solve(sides, Metric::Perimeter, Unit::M), "60m");
    }

    #[test]
    fn sides_never_have_length_below_width() {
        let mut rng = StdRng::seed_from_u64(31);
        for difficulty in Difficulty::ALL {
            let bounds = profile::rectangle(difficulty);
            for _ in 0..2_000 {
                let s = draw_sides(&mut rng, difficulty);
                assert!(s.length >= s.width, "{s:?}");
                assert!((MIN_SIDE..=bounds.max_width).contains(&s.width));
                assert!((MIN_SIDE..=bounds.max_length).contains(&s.length));
            }
        }
    }

    #[test]
    fn first_distractor_is_the_other_metric() {
        let mut rng = StdRng::seed_from_u64(4);
        let sides = RectangleSides { width: 10, length: 20 };

        let for_area = distractors(&mut rng, sides, Metric::Area, Unit::Cm, "200cm²");
        assert_eq!(for_area[0], "60cm");

        let for_perimeter = distractors(&mut rng, sides, Metric::Perimeter, Unit::Cm, "60cm");
        assert_eq!(for_perimeter[0], "200cm²");
    }

    #[test]
    fn offset_distractors_stay_within_range() {
        let mut rng = StdRng::seed_from_u64(8);
        let sides = RectangleSides { width: 10, length: 20 };
        for _ in 0..200 {
            let d = distractors(&mut rng, sides, Metric::Area, Unit::M, "200m²");
            let over: i32 = d[1].trim_end_matches("m²").parse().unwrap();
            let under: i32 = d[2].trim_end_matches('m').parse().unwrap();
            assert!((32..=45).contains(&over), "over = {over}");
            assert!((15..=28).contains(&under), "under = {under}");
        }
    }

    #[test]
    fn generated_question_is_complete() {
        let mut rng = StdRng::seed_from_u64(9);
        let q = RectangleModule.generate(&mut rng, Difficulty::Hard, true);
        assert!(q.question.ends_with("of this rectangle"));
        assert_eq!(q.shape, Some(ShapeKind::Rectangle));
        assert_eq!(q.choices.as_ref().map(Vec::len), Some(3));
        assert_eq!(q.diagram.as_ref().map(|d| d.labels.len()), Some(2));
        assert_eq!(q.difficulty, Difficulty::Hard);
    }
}
