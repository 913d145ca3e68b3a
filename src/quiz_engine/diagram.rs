//! Labelled 2-D drawings for shape questions.
//!
//! A scene is painted on a fixed 350×350 canvas (shape filled, each side
//! labelled with its length and unit), then the whole canvas is turned by a
//! random angle so diagrams never sit square to the page. The rotated output
//! grows to the rotated bounding box; pixels outside the original canvas are
//! transparent.
//!
//! Labels use a built-in 5×7 bitmap glyph set covering digits and the unit
//! letters, so no font files are needed.

use image::{Rgba, RgbaImage};
use rand::Rng;

use crate::quiz_engine::{
    models::{ShapeKind, Unit},
    random::RandomSource,
};

pub const CANVAS_SIZE: u32 = 350;

const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);
const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);
const GREEN: Rgba<u8> = Rgba([0, 128, 0, 255]);
const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);

/// Glyph pixels are scaled up to roughly a 25px font.
const GLYPH_SCALE: u32 = 3;
const GLYPH_ROWS: u32 = 7;
const GLYPH_ADVANCE: u32 = 6;

#[derive(Debug, Clone)]
pub struct Diagram {
    pub shape: ShapeKind,
    /// Clockwise turn applied to the scene, in `-90..=90`.
    pub rotation_degrees: i32,
    /// Side labels in drawing order, e.g. `["10cm", "20cm"]`.
    pub labels: Vec<String>,
    pub image: RgbaImage,
}

struct Label {
    text: String,
    x: u32,
    /// Text baseline.
    y: u32,
}

/// Rotation angle for a new diagram.
pub fn random_rotation<R: Rng>(rng: &mut R) -> i32 {
    rng.next_int(-90, 90)
}

/// Green rectangle with the width labelled along the top edge and the
/// length down the right-hand side.
pub fn rectangle(width: i32, length: i32, unit: Unit, rotation_degrees: i32) -> Diagram {
    let outline = [(50.0, 50.0), (230.0, 50.0), (230.0, 310.0), (50.0, 310.0)];
    let labels = vec![
        Label { text: format!("{width}{unit}"), x: 110, y: 40 },
        Label { text: format!("{length}{unit}"), x: 240, y: 180 },
    ];
    draw(ShapeKind::Rectangle, &outline, GREEN, labels, rotation_degrees)
}

/// Right triangle with the right angle bottom-left.
pub fn right_triangle(
    hypotenuse: i32,
    adjacent: i32,
    opposite: i32,
    unit: Unit,
    rotation_degrees: i32,
) -> Diagram {
    let outline = [(100.0, 70.0), (100.0, 270.0), (260.0, 270.0)];
    let labels = vec![
        Label { text: format!("{adjacent}{unit}"), x: 40, y: 180 },
        Label { text: format!("{hypotenuse}{unit}"), x: 180, y: 160 },
        Label { text: format!("{opposite}{unit}"), x: 145, y: 300 },
    ];
    draw(ShapeKind::Triangle, &outline, RED, labels, rotation_degrees)
}

fn draw(
    shape: ShapeKind,
    outline: &[(f32, f32)],
    fill: Rgba<u8>,
    labels: Vec<Label>,
    rotation_degrees: i32,
) -> Diagram {
    let mut scene = RgbaImage::from_pixel(CANVAS_SIZE, CANVAS_SIZE, BACKGROUND);
    fill_polygon(&mut scene, outline, fill);
    for label in &labels {
        draw_text(&mut scene, &label.text, label.x, label.y, RED);
    }

    Diagram {
        shape,
        rotation_degrees,
        labels: labels.into_iter().map(|l| l.text).collect(),
        image: rotate(&scene, rotation_degrees),
    }
}

// ---------------------------------------------------------------------------
// Rasterising
// ---------------------------------------------------------------------------

/// Even-odd fill, sampled at pixel centres.
fn fill_polygon(img: &mut RgbaImage, outline: &[(f32, f32)], colour: Rgba<u8>) {
    let (w, h) = img.dimensions();
    for y in 0..h {
        for x in 0..w {
            if contains(outline, x as f32 + 0.5, y as f32 + 0.5) {
                img.put_pixel(x, y, colour);
            }
        }
    }
}

fn contains(outline: &[(f32, f32)], px: f32, py: f32) -> bool {
    let mut inside = false;
    let mut j = outline.len() - 1;
    for i in 0..outline.len() {
        let (xi, yi) = outline[i];
        let (xj, yj) = outline[j];
        if (yi > py) != (yj > py) && px < (xj - xi) * (py - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}

fn draw_text(img: &mut RgbaImage, text: &str, x: u32, baseline: u32, colour: Rgba<u8>) {
    let top = baseline.saturating_sub(GLYPH_ROWS * GLYPH_SCALE);
    for (i, ch) in text.chars().enumerate() {
        let left = x + i as u32 * GLYPH_ADVANCE * GLYPH_SCALE;
        let Some(rows) = glyph(ch) else { continue };
        for (row, bits) in rows.iter().enumerate() {
            for col in 0..5u32 {
                if (*bits >> (4 - col)) & 1 == 1 {
                    fill_block(img, left + col * GLYPH_SCALE, top + row as u32 * GLYPH_SCALE, colour);
                }
            }
        }
    }
}

fn fill_block(img: &mut RgbaImage, x: u32, y: u32, colour: Rgba<u8>) {
    let (w, h) = img.dimensions();
    for dy in 0..GLYPH_SCALE {
        for dx in 0..GLYPH_SCALE {
            if x + dx < w && y + dy < h {
                img.put_pixel(x + dx, y + dy, colour);
            }
        }
    }
}

/// 5×7 bitmaps, one byte per row, most significant of the low 5 bits leftmost.
fn glyph(ch: char) -> Option<[u8; 7]> {
    let rows = match ch {
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
        '3' => [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        'c' => [0b00000, 0b00000, 0b01110, 0b10000, 0b10000, 0b10001, 0b01110],
        'm' => [0b00000, 0b00000, 0b11010, 0b10101, 0b10101, 0b10001, 0b10001],
        _ => return None,
    };
    Some(rows)
}

/// Turn `scene` clockwise about its centre, nearest-neighbour sampled.
fn rotate(scene: &RgbaImage, degrees: i32) -> RgbaImage {
    let (w, h) = scene.dimensions();
    let theta = (degrees as f64).to_radians();
    let (sin, cos) = theta.sin_cos();

    // Trim float noise so a quarter turn of a square stays square.
    let out_w = ((w as f64 * cos.abs() + h as f64 * sin.abs()) - 1e-6).ceil() as u32;
    let out_h = ((w as f64 * sin.abs() + h as f64 * cos.abs()) - 1e-6).ceil() as u32;

    let (cx, cy) = (w as f64 / 2.0, h as f64 / 2.0);
    let (ocx, ocy) = (out_w as f64 / 2.0, out_h as f64 / 2.0);

    RgbaImage::from_fn(out_w, out_h, |ox, oy| {
        let dx = ox as f64 + 0.5 - ocx;
        let dy = oy as f64 + 0.5 - ocy;
        let sx = dx * cos + dy * sin + cx;
        let sy = -dx * sin + dy * cos + cy;
        if sx >= 0.0 && sy >= 0.0 && sx < w as f64 && sy < h as f64 {
            *scene.get_pixel(sx as u32, sy as u32)
        } else {
            TRANSPARENT
        }
    })
}
