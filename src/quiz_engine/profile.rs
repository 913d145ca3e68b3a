//! Per-shape, per-difficulty side-length bounds.
//!
//! Every side is drawn from `MIN_SIDE..=max`, so the tables below only hold
//! the upper bounds.

use crate::quiz_engine::models::Difficulty;

/// Smallest side length any shape question uses.
pub const MIN_SIDE: i32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RectangleBounds {
    pub max_width: i32,
    pub max_length: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriangleBounds {
    pub max_hypotenuse: i32,
    pub max_adjacent: i32,
    pub max_opposite: i32,
}

pub const fn rectangle(difficulty: Difficulty) -> RectangleBounds {
    match difficulty {
        Difficulty::Easy   => RectangleBounds { max_width: 21, max_length: 43 },
        Difficulty::Medium => RectangleBounds { max_width: 51, max_length: 65 },
        Difficulty::Hard   => RectangleBounds { max_width: 69, max_length: 90 },
    }
}

pub const fn triangle(difficulty: Difficulty) -> TriangleBounds {
    match difficulty {
        Difficulty::Easy   => TriangleBounds { max_hypotenuse: 25, max_adjacent: 15, max_opposite: 5 },
        Difficulty::Medium => TriangleBounds { max_hypotenuse: 35, max_adjacent: 15, max_opposite: 4 },
        Difficulty::Hard   => TriangleBounds { max_hypotenuse: 42, max_adjacent: 22, max_opposite: 11 },
    }
}
