//! The player-controlled flyer.

use std::io;

use log::debug;

use crate::assets::ImageId;
use crate::constants::{DEAD_FRAME, FLAP_VELOCITY, GRAVITY, WING_DOWN_FRAME, WING_UP_FRAME};
use crate::entity::{Entity, TickContext};
use crate::geometry::{Canvas, Rect, Size};
use crate::input::Key;
use crate::surface::Surface;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlightState {
    /// Sitting at the centre, gravity off until the first flap.
    Resting,
    Flying,
    Dead,
}

#[derive(Clone, Debug)]
pub struct Flyer {
    pub x: i32,
    pub y: i32,
    /// Vertical velocity in pixels per tick (positive = down).
    pub vy: i32,
    /// Index into the flyer frames: wing-down, wing-up, dead.
    pub frame: usize,
    pub alive: bool,
    /// Gates pass straight through an immune flyer.
    pub immune: bool,
    pub has_launched: bool,
    /// `None` until the first frame's dimensions arrive from the loader.
    size: Option<Size>,
}

impl Default for Flyer {
    fn default() -> Self {
        Flyer::new()
    }
}

impl Flyer {
    pub fn new() -> Self {
        Flyer {
            x: 0,
            y: 0,
            vy: 0,
            frame: WING_DOWN_FRAME,
            alive: true,
            immune: false,
            has_launched: false,
            size: None,
        }
    }

    /// Build a flyer whose dimensions are already known, centred on `canvas`.
    pub fn with_size(size: Size, canvas: Canvas) -> Self {
        let mut flyer = Flyer::new();
        flyer.dimensions_known(size, canvas);
        flyer
    }

    /// Completion signal from the asset loader for the first frame.
    pub fn dimensions_known(&mut self, size: Size, canvas: Canvas) {
        debug!("flyer sized {}x{}", size.width, size.height);
        self.size = Some(size);
        self.centre(canvas);
    }

    pub fn is_ready(&self) -> bool {
        self.size.is_some()
    }

    pub fn width(&self) -> i32 {
        self.size.map(|s| s.width).unwrap_or(0)
    }

    pub fn height(&self) -> i32 {
        self.size.map(|s| s.height).unwrap_or(0)
    }

    /// The flyer's hit box, once it has one.
    pub fn bounds(&self) -> Option<Rect> {
        self.size.map(|s| Rect::new(self.x, self.y, s.width, s.height))
    }

    pub fn state(&self) -> FlightState {
        if !self.alive {
            FlightState::Dead
        } else if self.has_launched {
            FlightState::Flying
        } else {
            FlightState::Resting
        }
    }

    /// Called by the gate field on collision.
    pub fn hit(&mut self) {
        self.alive = false;
        self.frame = DEAD_FRAME;
        self.vy = 0;
    }

    fn flap(&mut self) {
        if self.is_ready() && self.y > 0 && self.alive {
            self.has_launched = true;
            self.vy = FLAP_VELOCITY;
        }
    }

    fn centre(&mut self, canvas: Canvas) {
        self.x = canvas.width / 2 - self.width() / 2;
        self.y = canvas.height / 2 - self.height() / 2;
    }

    fn reset(&mut self, canvas: Canvas) {
        self.frame = WING_DOWN_FRAME;
        self.alive = true;
        self.has_launched = false;
        self.vy = 0;
        if self.is_ready() {
            self.centre(canvas);
        }
    }
}

impl Entity for Flyer {
    fn update(&mut self, ctx: &TickContext) {
        if !self.is_ready() {
            return;
        }

        if self.alive {
            self.frame = if self.frame == WING_DOWN_FRAME {
                WING_UP_FRAME
            } else {
                WING_DOWN_FRAME
            };
        }

        if self.has_launched {
            self.y += self.vy;
            self.vy += GRAVITY;
        }

        let floor = ctx.canvas.height - self.height();
        if self.y >= floor {
            self.y = floor;
            self.vy = 0;
        } else if self.y < 0 {
            self.y = 0;
            self.vy = 0;
        }
    }

    fn draw(&self, surface: &mut dyn Surface, _ctx: &TickContext) -> io::Result<()> {
        if !self.is_ready() {
            return Ok(());
        }
        surface.draw_image(ImageId::FlyerFrame(self.frame), self.x, self.y)
    }

    fn receive_key(&mut self, key: Key, ctx: &TickContext) {
        match key {
            Key::Flap => self.flap(),
            Key::Immunity => {
                self.immune = !self.immune;
                debug!("flyer immunity {}", if self.immune { "on" } else { "off" });
            }
            Key::Reset => self.reset(ctx.canvas),
            _ => {}
        }
    }
}
