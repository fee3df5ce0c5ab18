//! The rolling field of gate obstacles.
//!
//! A fixed set of gates scrolls left across the canvas.  A gate that leaves
//! the left edge is recycled into the next free slot on the right with a
//! fresh random gap split.  Gates score as they cross the midline, and the
//! whole field freezes the moment one of them touches the flyer.

use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use log::{info, trace};
use rand::rngs::StdRng;
use rand::Rng;

use crate::assets::ImageId;
use crate::constants::{
    BASE_GAP_SIZE, GAP_STEP, GATE_INTERVAL, GATE_SPEED, GATE_WIDTH, MIN_GAP_SIZE, MIN_GATE_HEIGHT,
    NUM_GATES,
};
use crate::entity::{Entity, TickContext};
use crate::flyer::Flyer;
use crate::geometry::{Canvas, Rect};
use crate::input::Key;
use crate::level::LevelManager;
use crate::scoreboard::ScoreBoard;
use crate::surface::Surface;

/// One top/bottom obstacle pair sharing an x position.
#[derive(Clone, Debug, PartialEq)]
pub struct Gate {
    pub x: i32,
    /// Leftward speed in pixels per tick.
    pub vx: i32,
    pub width: i32,
    pub top_height: i32,
    pub bottom_height: i32,
    /// Top of the bottom obstacle (`H - bottom_height`).
    pub bottom_y: i32,
    /// Gap this gate was laid out with.
    pub gap: i32,
    pub scored: bool,
}

impl Gate {
    pub fn top_y(&self) -> i32 {
        0
    }

    pub fn top_rect(&self) -> Rect {
        Rect::new(self.x, self.top_y(), self.width, self.top_height)
    }

    pub fn bottom_rect(&self) -> Rect {
        Rect::new(self.x, self.bottom_y, self.width, self.bottom_height)
    }

    /// Split the canvas height into top obstacle, gap and bottom obstacle.
    fn randomize(&mut self, canvas: Canvas, gap: i32, rng: &mut StdRng) {
        let span = canvas.height - MIN_GATE_HEIGHT - gap;
        let extra = if span >= 1 { rng.gen_range(1..=span) } else { 0 };
        self.top_height = MIN_GATE_HEIGHT + extra;
        self.bottom_height = (canvas.height - self.top_height - gap).max(0);
        self.bottom_y = canvas.height - self.bottom_height;
        self.gap = gap;
    }
}

/// Gap size for `level`, never below `MIN_GAP_SIZE`.
pub fn gap_size_for(level: u32) -> i32 {
    let shrink = (level as i32).saturating_mul(GAP_STEP);
    BASE_GAP_SIZE.saturating_sub(shrink).max(MIN_GAP_SIZE)
}

#[derive(Debug)]
pub struct GateField {
    pub gates: Vec<Gate>,
    /// Latched on the first hit; cleared only by reset.
    pub collision: bool,
    /// Gates stay put until the first flap.
    pub started: bool,
    pub gap_size: i32,
    canvas: Canvas,
    rng: StdRng,
    flyer: Rc<RefCell<Flyer>>,
    scoreboard: Rc<RefCell<ScoreBoard>>,
    level: Rc<RefCell<LevelManager>>,
}

impl GateField {
    pub fn new(
        canvas: Canvas,
        rng: StdRng,
        flyer: Rc<RefCell<Flyer>>,
        scoreboard: Rc<RefCell<ScoreBoard>>,
        level: Rc<RefCell<LevelManager>>,
    ) -> Self {
        let mut field = GateField {
            gates: Vec::with_capacity(NUM_GATES),
            collision: false,
            started: false,
            gap_size: BASE_GAP_SIZE,
            canvas,
            rng,
            flyer,
            scoreboard,
            level,
        };
        field.lay_out();
        field
    }

    /// Initial layout: gate `i` at `W + i * GATE_INTERVAL`, all moving.
    fn lay_out(&mut self) {
        let canvas = self.canvas;
        let gap = self.gap_size;
        self.gates = (0..NUM_GATES)
            .map(|i| {
                let mut gate = Gate {
                    x: canvas.width + i as i32 * GATE_INTERVAL,
                    vx: GATE_SPEED,
                    width: GATE_WIDTH,
                    top_height: 0,
                    bottom_height: 0,
                    bottom_y: canvas.height,
                    gap,
                    scored: false,
                };
                gate.randomize(canvas, gap, &mut self.rng);
                gate
            })
            .collect();
    }

    /// Send gate `idx` to the next free slot on the right.
    fn recycle(&mut self, idx: usize) {
        let rightmost = self
            .gates
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != idx)
            .map(|(_, g)| g.x)
            .max()
            .unwrap_or(self.canvas.width - GATE_INTERVAL);
        let canvas = self.canvas;
        let gap = self.gap_size;
        let gate = &mut self.gates[idx];
        gate.scored = false;
        gate.x = (rightmost + GATE_INTERVAL).max(canvas.width);
        gate.randomize(canvas, gap, &mut self.rng);
        trace!("gate {} recycled to x={} top={}", idx, gate.x, gate.top_height);
    }

    /// Horizontal band around the flyer in which a gate can touch it.
    ///
    /// Compared at double scale so odd widths keep their half pixel.
    fn in_strike_zone(&self, gate: &Gate, flyer_width: i32) -> bool {
        let width = self.canvas.width;
        2 * gate.x < width + flyer_width && 2 * gate.x > width - flyer_width - 2 * gate.width
    }

    /// Put every gate back where it was at the start of the tick and stop it.
    fn freeze(&mut self, start_xs: &[i32]) {
        for (gate, &x) in self.gates.iter_mut().zip(start_xs) {
            gate.x = x;
            gate.vx = 0;
        }
    }
}

impl Entity for GateField {
    fn update(&mut self, ctx: &TickContext) {
        self.canvas = ctx.canvas;
        self.gap_size = gap_size_for(self.level.borrow().level);

        let mid = ctx.canvas.mid_x();
        let start_xs: Vec<i32> = self.gates.iter().map(|g| g.x).collect();
        let target = {
            let flyer = self.flyer.borrow();
            if flyer.immune {
                None
            } else {
                flyer.bounds()
            }
        };

        for idx in 0..self.gates.len() {
            if !self.collision && self.gates[idx].x < mid && !self.gates[idx].scored {
                self.scoreboard.borrow_mut().gate_passed();
                self.gates[idx].scored = true;
            }

            if self.started {
                let gate = &mut self.gates[idx];
                gate.x -= gate.vx;
            }

            if let Some(bounds) = target {
                let gate = &self.gates[idx];
                if !self.collision
                    && self.in_strike_zone(gate, bounds.w)
                    && (bounds.overlaps(&gate.top_rect()) || bounds.overlaps(&gate.bottom_rect()))
                {
                    info!("collision with gate {} at x={}", idx, gate.x);
                    self.collision = true;
                    self.flyer.borrow_mut().hit();
                    self.freeze(&start_xs);
                }
            }
        }

        // Recycle against final positions; a frozen field keeps its gates.
        if !self.collision {
            for idx in 0..self.gates.len() {
                if self.gates[idx].x <= -self.gates[idx].width {
                    self.recycle(idx);
                }
            }
        }
    }

    fn draw(&self, surface: &mut dyn Surface, ctx: &TickContext) -> io::Result<()> {
        for gate in &self.gates {
            surface.draw_image(ImageId::GateTop, gate.x, gate.top_height - ctx.canvas.height)?;
            surface.draw_image(ImageId::GateBottom, gate.x, gate.bottom_y)?;
        }
        Ok(())
    }

    fn receive_key(&mut self, key: Key, ctx: &TickContext) {
        match key {
            Key::Reset => {
                self.collision = false;
                self.started = false;
                self.gap_size = BASE_GAP_SIZE;
                self.canvas = ctx.canvas;
                self.lay_out();
            }
            Key::Flap => self.started = true,
            _ => {}
        }
    }
}
