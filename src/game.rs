//! The game loop: owns every entity, the tick timer, pause and speed.
//!
//! Entities are registered in a fixed order (level, flyer, gates, score
//! board, overlay) and each tick runs `update` on all of them before any
//! `draw`.  Cross-entity effects go through the typed handles each entity
//! was built with, never through the registration list.

use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::time::{Duration, Instant};

use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::assets::{AssetEvent, ImageId};
use crate::clock::Timer;
use crate::config::{clamp_interval, GameSettings};
use crate::constants::{MAX_TICK_INTERVAL_MS, MIN_TICK_INTERVAL_MS, TICK_INTERVAL_STEP_MS};
use crate::entity::{Entity, TickContext};
use crate::flyer::Flyer;
use crate::gates::GateField;
use crate::geometry::Canvas;
use crate::input::Key;
use crate::level::LevelManager;
use crate::overlay::MessageOverlay;
use crate::scoreboard::ScoreBoard;
use crate::surface::Surface;

pub struct Game {
    canvas: Canvas,
    paused: bool,
    tick_interval_ms: u64,
    initial_interval_ms: u64,
    timer: Timer,
    entities: Vec<Rc<RefCell<dyn Entity>>>,
    level: Rc<RefCell<LevelManager>>,
    flyer: Rc<RefCell<Flyer>>,
    gates: Rc<RefCell<GateField>>,
    scoreboard: Rc<RefCell<ScoreBoard>>,
    overlay: Rc<RefCell<MessageOverlay>>,
}

impl Game {
    pub fn new(settings: GameSettings, now: Instant) -> Self {
        let rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Game::with_rng(settings, rng, now)
    }

    /// Build a game whose gate layouts come from `rng`.
    pub fn with_rng(settings: GameSettings, rng: StdRng, now: Instant) -> Self {
        let canvas = settings.canvas;
        let interval = clamp_interval(settings.initial_interval_ms);

        let flyer = Rc::new(RefCell::new(Flyer::new()));
        let overlay = Rc::new(RefCell::new(MessageOverlay::new(Rc::clone(&flyer))));
        let scoreboard = Rc::new(RefCell::new(ScoreBoard::default()));
        let level = Rc::new(RefCell::new(LevelManager::new(
            Rc::clone(&scoreboard),
            Rc::clone(&overlay),
        )));
        scoreboard.borrow_mut().attach_level(Rc::downgrade(&level));
        let gates = Rc::new(RefCell::new(GateField::new(
            canvas,
            rng,
            Rc::clone(&flyer),
            Rc::clone(&scoreboard),
            Rc::clone(&level),
        )));

        let entities = vec![
            Rc::clone(&level) as Rc<RefCell<dyn Entity>>,
            Rc::clone(&flyer) as Rc<RefCell<dyn Entity>>,
            Rc::clone(&gates) as Rc<RefCell<dyn Entity>>,
            Rc::clone(&scoreboard) as Rc<RefCell<dyn Entity>>,
            Rc::clone(&overlay) as Rc<RefCell<dyn Entity>>,
        ];

        Game {
            canvas,
            paused: false,
            tick_interval_ms: interval,
            initial_interval_ms: interval,
            timer: Timer::new(Duration::from_millis(interval), now),
            entities,
            level,
            flyer,
            gates,
            scoreboard,
            overlay,
        }
    }

    // ── Loop ─────────────────────────────────────────────────────────────────

    /// One frame: update then draw every entity, unless paused.
    pub fn tick(&mut self, surface: &mut dyn Surface) -> io::Result<()> {
        if self.paused {
            return Ok(());
        }
        let ctx = self.context();

        for entity in &self.entities {
            entity.borrow_mut().update(&ctx);
        }

        surface.clear()?;
        for entity in &self.entities {
            entity.borrow().draw(surface, &ctx)?;
        }
        surface.present()
    }

    /// Run a tick if the timer is due.  Returns whether one fired.
    pub fn on_timer(&mut self, now: Instant, surface: &mut dyn Surface) -> io::Result<bool> {
        if !self.timer.fire(now) {
            return Ok(false);
        }
        self.tick(surface)?;
        Ok(true)
    }

    pub fn time_until_tick(&self, now: Instant) -> Duration {
        self.timer.time_until_due(now)
    }

    pub fn context(&self) -> TickContext {
        TickContext {
            canvas: self.canvas,
            fps: self.fps(),
        }
    }

    // ── Speed & pause ────────────────────────────────────────────────────────

    pub fn tick_interval_ms(&self) -> u64 {
        self.tick_interval_ms
    }

    pub fn fps(&self) -> u32 {
        (1000 / self.tick_interval_ms) as u32
    }

    /// Change the tick interval (clamped) and restart the timer on it.
    pub fn set_speed(&mut self, ms: u64, now: Instant) {
        self.tick_interval_ms = clamp_interval(ms);
        self.timer
            .reschedule(Duration::from_millis(self.tick_interval_ms), now);
        debug!("tick interval {} ms", self.tick_interval_ms);
    }

    pub fn speed_up(&mut self, now: Instant) {
        if self.tick_interval_ms > MIN_TICK_INTERVAL_MS {
            self.set_speed(self.tick_interval_ms - TICK_INTERVAL_STEP_MS, now);
        }
    }

    pub fn slow_down(&mut self, now: Instant) {
        if self.tick_interval_ms < MAX_TICK_INTERVAL_MS {
            self.set_speed(self.tick_interval_ms + TICK_INTERVAL_STEP_MS, now);
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        debug!("paused: {}", self.paused);
    }

    /// Loop-level half of a reset; entities reset themselves on the key.
    pub fn reset(&mut self, now: Instant) {
        debug!("reset");
        self.paused = false;
        self.set_speed(self.initial_interval_ms, now);
    }

    // ── Input & assets ───────────────────────────────────────────────────────

    /// Apply loop-level effects of `key`, then hand it to every entity.
    pub fn dispatch_key(&mut self, key: Key, now: Instant) {
        match key {
            Key::Pause => self.toggle_pause(),
            Key::SlowDown => self.slow_down(now),
            Key::SpeedUp => self.speed_up(now),
            Key::Reset => self.reset(now),
            Key::Flap | Key::Immunity => {}
        }

        let ctx = self.context();
        for entity in &self.entities {
            entity.borrow_mut().receive_key(key, &ctx);
        }
    }

    /// Completion signal from the asset loader.
    pub fn asset_loaded(&mut self, event: AssetEvent) {
        debug!(
            "loaded {} ({}x{})",
            event.image.file_name(),
            event.size.width,
            event.size.height
        );
        if event.image == ImageId::FlyerFrame(0) {
            self.flyer
                .borrow_mut()
                .dimensions_known(event.size, self.canvas);
        }
    }

    // ── Handles ──────────────────────────────────────────────────────────────

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn level(&self) -> &Rc<RefCell<LevelManager>> {
        &self.level
    }

    pub fn flyer(&self) -> &Rc<RefCell<Flyer>> {
        &self.flyer
    }

    pub fn gates(&self) -> &Rc<RefCell<GateField>> {
        &self.gates
    }

    pub fn scoreboard(&self) -> &Rc<RefCell<ScoreBoard>> {
        &self.scoreboard
    }

    pub fn overlay(&self) -> &Rc<RefCell<MessageOverlay>> {
        &self.overlay
    }
}
