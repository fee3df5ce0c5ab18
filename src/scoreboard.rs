//! Score, high score and the heads-up status line.

use std::cell::RefCell;
use std::io;
use std::rc::Weak;

use crate::constants::{HUD_FONT, HUD_Y};
use crate::entity::{Entity, TickContext};
use crate::input::Key;
use crate::level::LevelManager;
use crate::surface::{Baseline, Colour, Surface, TextStyle};

const HUD_STYLE: TextStyle = TextStyle {
    font: HUD_FONT,
    fill: Colour::White,
    stroke: Colour::Black,
    baseline: Baseline::Top,
};

#[derive(Debug, Default)]
pub struct ScoreBoard {
    pub score: u32,
    /// Best score seen across resets of this session.
    pub high_score: u32,
    /// Read-only back-reference for the level shown on the HUD.
    level: Weak<RefCell<LevelManager>>,
}

impl ScoreBoard {
    /// Point the HUD at the level manager once it exists.
    pub fn attach_level(&mut self, level: Weak<RefCell<LevelManager>>) {
        self.level = level;
    }

    /// Called once per gate that clears the midline uncollided.
    pub fn gate_passed(&mut self) {
        self.score += 1;
    }

    /// Level for display; 1 if the level manager is gone.
    pub fn level(&self) -> u32 {
        self.level
            .upgrade()
            .map(|level| level.borrow().level)
            .unwrap_or(1)
    }

    pub fn status_line(&self, fps: u32) -> String {
        format!(
            "FPS: {} Lvl: {} Score: {} HS: {}",
            fps,
            self.level(),
            self.score,
            self.high_score
        )
    }
}

impl Entity for ScoreBoard {
    fn update(&mut self, _ctx: &TickContext) {}

    fn draw(&self, surface: &mut dyn Surface, ctx: &TickContext) -> io::Result<()> {
        surface.set_text_style(&HUD_STYLE);
        let text = self.status_line(ctx.fps);
        let width = surface.measure_text(&text);
        let x = ctx.canvas.width / 2 - width / 2;
        surface.fill_text(&text, x, HUD_Y)?;
        surface.stroke_text(&text, x, HUD_Y)
    }

    fn receive_key(&mut self, key: Key, _ctx: &TickContext) {
        if key == Key::Reset {
            self.high_score = self.high_score.max(self.score);
            self.score = 0;
        }
    }
}
