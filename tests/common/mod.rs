#![allow(dead_code)]

use std::io;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;

use gate_flyer::assets::{AssetEvent, ImageId};
use gate_flyer::config::GameSettings;
use gate_flyer::geometry::Size;
use gate_flyer::surface::{Surface, TextStyle};
use gate_flyer::Game;

/// Width of one character under `RecordingSurface::measure_text`.
pub const CHAR_WIDTH: i32 = 10;
pub const FLYER_SIZE: Size = Size {
    width: 40,
    height: 30,
};

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Clear,
    Image(ImageId, i32, i32),
    Fill(String, i32, i32),
    Stroke(String, i32, i32),
    Present,
}

/// A surface that remembers every call instead of drawing.
#[derive(Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
    pub style: Option<TextStyle>,
}

impl RecordingSurface {
    pub fn images(&self) -> Vec<(ImageId, i32, i32)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Image(id, x, y) => Some((*id, *x, *y)),
                _ => None,
            })
            .collect()
    }

    pub fn texts(&self) -> Vec<(String, i32, i32)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Fill(text, x, y) => Some((text.clone(), *x, *y)),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) -> io::Result<()> {
        self.calls.push(DrawCall::Clear);
        Ok(())
    }

    fn draw_image(&mut self, image: ImageId, x: i32, y: i32) -> io::Result<()> {
        self.calls.push(DrawCall::Image(image, x, y));
        Ok(())
    }

    fn set_text_style(&mut self, style: &TextStyle) {
        self.style = Some(style.clone());
    }

    fn measure_text(&self, text: &str) -> i32 {
        text.chars().count() as i32 * CHAR_WIDTH
    }

    fn fill_text(&mut self, text: &str, x: i32, y: i32) -> io::Result<()> {
        self.calls.push(DrawCall::Fill(text.to_string(), x, y));
        Ok(())
    }

    fn stroke_text(&mut self, text: &str, x: i32, y: i32) -> io::Result<()> {
        self.calls.push(DrawCall::Stroke(text.to_string(), x, y));
        Ok(())
    }

    fn present(&mut self) -> io::Result<()> {
        self.calls.push(DrawCall::Present);
        Ok(())
    }
}

pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

/// Default 600x400 game, flyer not yet sized.
pub fn unsized_game() -> Game {
    Game::with_rng(GameSettings::default(), seeded_rng(), Instant::now())
}

/// Default 600x400 game with a 40x30 flyer centred at (280, 185).
pub fn make_game() -> Game {
    let mut game = unsized_game();
    game.asset_loaded(AssetEvent {
        image: ImageId::FlyerFrame(0),
        size: FLYER_SIZE,
    });
    game
}

pub fn tick(game: &mut Game) {
    let mut surface = RecordingSurface::default();
    game.tick(&mut surface).unwrap();
}

pub fn tick_n(game: &mut Game, n: usize) {
    for _ in 0..n {
        tick(game);
    }
}

/// Park every gate far off to the right so it can't score or collide.
pub fn park_gates(game: &Game) {
    let mut gates = game.gates().borrow_mut();
    for (i, gate) in gates.gates.iter_mut().enumerate() {
        gate.x = 5000 + i as i32 * 200;
    }
}
