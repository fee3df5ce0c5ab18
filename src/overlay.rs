//! Centre-screen message: start prompt, level toasts, death prompt.

use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use crate::constants::{DEATH_PROMPT, HUD_FONT, OVERLAY_Y, START_PROMPT};
use crate::entity::{Entity, TickContext};
use crate::flyer::Flyer;
use crate::input::Key;
use crate::surface::{Baseline, Colour, Surface, TextStyle};

const OVERLAY_STYLE: TextStyle = TextStyle {
    font: HUD_FONT,
    fill: Colour::Red,
    stroke: Colour::Black,
    baseline: Baseline::Top,
};

/// Countdown value meaning "no toast running".
pub const NO_COUNTDOWN: i32 = -1;

#[derive(Debug)]
pub struct MessageOverlay {
    pub visible: bool,
    pub text: String,
    /// Ticks left on the current toast; `NO_COUNTDOWN` when none.
    pub countdown: i32,
    flyer: Rc<RefCell<Flyer>>,
}

impl MessageOverlay {
    pub fn new(flyer: Rc<RefCell<Flyer>>) -> Self {
        MessageOverlay {
            visible: true,
            text: START_PROMPT.to_string(),
            countdown: NO_COUNTDOWN,
            flyer,
        }
    }

    /// Show `message` for `seconds` worth of ticks at the current rate.
    pub fn toast(&mut self, message: &str, seconds: u32, fps: u32) {
        self.countdown = (seconds * fps) as i32;
        self.text = message.to_string();
        self.visible = true;
    }

    pub fn is_counting_down(&self) -> bool {
        self.countdown >= 0
    }
}

impl Entity for MessageOverlay {
    fn update(&mut self, _ctx: &TickContext) {
        if !self.flyer.borrow().alive {
            self.text = DEATH_PROMPT.to_string();
            self.visible = true;
        } else if self.countdown > 0 {
            self.countdown -= 1;
        } else if self.countdown == 0 {
            self.countdown = NO_COUNTDOWN;
            self.visible = false;
        }
    }

    fn draw(&self, surface: &mut dyn Surface, ctx: &TickContext) -> io::Result<()> {
        if !self.visible {
            return Ok(());
        }
        surface.set_text_style(&OVERLAY_STYLE);
        let width = surface.measure_text(&self.text);
        let x = ctx.canvas.width / 2 - width / 2;
        surface.fill_text(&self.text, x, OVERLAY_Y)?;
        surface.stroke_text(&self.text, x, OVERLAY_Y)
    }

    fn receive_key(&mut self, key: Key, _ctx: &TickContext) {
        match key {
            Key::Flap if !self.is_counting_down() => self.visible = false,
            Key::Reset => {
                self.visible = true;
                self.text = START_PROMPT.to_string();
                self.countdown = NO_COUNTDOWN;
            }
            _ => {}
        }
    }
}
