//! Start-up settings for a game session.

use crate::constants::{
    BASE_GAP_SIZE, DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, GATE_WIDTH,
    INITIAL_TICK_INTERVAL_MS, MAX_TICK_INTERVAL_MS, MIN_GATE_HEIGHT, MIN_TICK_INTERVAL_MS,
    TICK_INTERVAL_STEP_MS,
};
use crate::error::GameError;
use crate::geometry::Canvas;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameSettings {
    pub canvas: Canvas,
    /// Tick interval at start-up and after every reset, in milliseconds.
    pub initial_interval_ms: u64,
    /// Fixed seed for reproducible gate layouts; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for GameSettings {
    fn default() -> Self {
        GameSettings {
            canvas: Canvas::new(DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT),
            initial_interval_ms: INITIAL_TICK_INTERVAL_MS,
            seed: None,
        }
    }
}

impl GameSettings {
    /// Reject a canvas with no room for a top gate plus the widest gap.
    pub fn validate(self) -> Result<Self, GameError> {
        let Canvas { width, height } = self.canvas;
        if height <= MIN_GATE_HEIGHT + BASE_GAP_SIZE || width < 2 * GATE_WIDTH {
            return Err(GameError::InvalidCanvas { width, height });
        }
        Ok(GameSettings {
            initial_interval_ms: clamp_interval(self.initial_interval_ms),
            ..self
        })
    }
}

/// Clamp a tick interval into the supported range, snapped to the step grid.
pub fn clamp_interval(ms: u64) -> u64 {
    let clamped = ms.clamp(MIN_TICK_INTERVAL_MS, MAX_TICK_INTERVAL_MS);
    let steps = (clamped - MIN_TICK_INTERVAL_MS + TICK_INTERVAL_STEP_MS / 2) / TICK_INTERVAL_STEP_MS;
    MIN_TICK_INTERVAL_MS + steps * TICK_INTERVAL_STEP_MS
}
