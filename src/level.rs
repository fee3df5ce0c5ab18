//! Level progression and background selection.

use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use log::info;

use crate::assets::{ImageId, BACKGROUND_FILES};
use crate::constants::{GATES_PER_LEVEL, LEVEL_TOAST_SECONDS};
use crate::entity::{Entity, TickContext};
use crate::input::Key;
use crate::overlay::MessageOverlay;
use crate::scoreboard::ScoreBoard;
use crate::surface::Surface;

#[derive(Debug)]
pub struct LevelManager {
    /// Starts at 1; never exceeds `background_count`.
    pub level: u32,
    pub background_index: usize,
    /// Set on a level-up, cleared once the score moves past the multiple.
    pub leveled_up: bool,
    background_count: usize,
    scoreboard: Rc<RefCell<ScoreBoard>>,
    overlay: Rc<RefCell<MessageOverlay>>,
}

impl LevelManager {
    pub fn new(scoreboard: Rc<RefCell<ScoreBoard>>, overlay: Rc<RefCell<MessageOverlay>>) -> Self {
        LevelManager::with_backgrounds(BACKGROUND_FILES.len(), scoreboard, overlay)
    }

    pub fn with_backgrounds(
        background_count: usize,
        scoreboard: Rc<RefCell<ScoreBoard>>,
        overlay: Rc<RefCell<MessageOverlay>>,
    ) -> Self {
        LevelManager {
            level: 1,
            background_index: 0,
            leveled_up: false,
            background_count: background_count.max(1),
            scoreboard,
            overlay,
        }
    }

    pub fn background_count(&self) -> usize {
        self.background_count
    }

    fn has_next_background(&self) -> bool {
        self.background_index + 1 < self.background_count
    }

    fn advance(&mut self, fps: u32) {
        self.background_index += 1;
        self.level += 1;
        self.leveled_up = true;
        info!("level up: {}", self.level);
        self.overlay
            .borrow_mut()
            .toast(&format!("Level {}", self.level), LEVEL_TOAST_SECONDS, fps);
    }
}

impl Entity for LevelManager {
    fn update(&mut self, ctx: &TickContext) {
        let score = self.scoreboard.borrow().score;
        if score == 0 {
            self.background_index = 0;
            return;
        }

        if !self.leveled_up && score % GATES_PER_LEVEL == 0 {
            if self.has_next_background() {
                self.advance(ctx.fps);
            }
        } else if score % GATES_PER_LEVEL == 1 {
            self.leveled_up = false;
        }
    }

    fn draw(&self, surface: &mut dyn Surface, _ctx: &TickContext) -> io::Result<()> {
        surface.draw_image(ImageId::Background(self.background_index), 0, 0)
    }

    fn receive_key(&mut self, key: Key, _ctx: &TickContext) {
        if key == Key::Reset {
            self.level = 1;
            self.background_index = 0;
            self.leveled_up = false;
        }
    }
}
