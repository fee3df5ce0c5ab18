//! Character-art stand-ins for the game's images.
//!
//! Sizes are reported in canvas pixels, so a sprite's size depends on how
//! many canvas pixels one terminal cell covers.

use crossterm::style::Color;

use gate_flyer::assets::ImageId;
use gate_flyer::constants::GATE_WIDTH;
use gate_flyer::geometry::{Canvas, Size};

// ── Flyer frames ──────────────────────────────────────────────────────────────

const FLYER_WING_DOWN: &[&str] = &[" (o> ", "/_\\_)"];
const FLYER_WING_UP: &[&str] = &["\\(o> ", " \\_) "];
const FLYER_DEAD: &[&str] = &[" (x< ", " /_\\ "];

// ── Background themes: (colour, ground glyph) ────────────────────────────────

const THEMES: [(Color, char); 4] = [
    (Color::Green, '♣'),      // jungle
    (Color::Yellow, '▲'),     // inca
    (Color::DarkYellow, '~'), // desert
    (Color::Magenta, '^'),    // peru
];

const C_FLYER: Color = Color::Yellow;
const C_FLYER_DEAD: Color = Color::DarkGrey;
const C_GATE: Color = Color::DarkGreen;

#[derive(Clone, Copy, Debug)]
pub enum Sprite {
    Art(&'static [&'static str], Color),
    /// A filled block, dimensions in canvas pixels.
    Solid { width: i32, height: i32, colour: Color },
    /// Full-screen scenery: a ground strip and sparse sky glyphs.
    Backdrop { glyph: char, colour: Color },
}

pub fn sprite_for(image: ImageId, canvas: Canvas) -> Sprite {
    match image {
        ImageId::Background(i) => {
            let (colour, glyph) = THEMES[i % THEMES.len()];
            Sprite::Backdrop { glyph, colour }
        }
        ImageId::FlyerFrame(0) => Sprite::Art(FLYER_WING_DOWN, C_FLYER),
        ImageId::FlyerFrame(1) => Sprite::Art(FLYER_WING_UP, C_FLYER),
        ImageId::FlyerFrame(_) => Sprite::Art(FLYER_DEAD, C_FLYER_DEAD),
        ImageId::GateTop | ImageId::GateBottom => Sprite::Solid {
            width: GATE_WIDTH,
            height: canvas.height,
            colour: C_GATE,
        },
    }
}

/// Pixel size of `sprite` given the cell scale `(px_per_col, px_per_row)`.
pub fn size_of(sprite: &Sprite, canvas: Canvas, scale: (f64, f64)) -> Size {
    match *sprite {
        Sprite::Art(lines, _) => {
            let cols = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
            Size::new(
                (cols as f64 * scale.0).round() as i32,
                (lines.len() as f64 * scale.1).round() as i32,
            )
        }
        Sprite::Solid { width, height, .. } => Size::new(width, height),
        Sprite::Backdrop { .. } => Size::new(canvas.width, canvas.height),
    }
}
