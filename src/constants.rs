//! Tuning constants shared by the entities and the loop.

// ── Loop timing ───────────────────────────────────────────────────────────────

/// Tick interval the game starts (and resets) at, in milliseconds.
pub const INITIAL_TICK_INTERVAL_MS: u64 = 80;
pub const MIN_TICK_INTERVAL_MS: u64 = 20;
pub const MAX_TICK_INTERVAL_MS: u64 = 140;
/// Each speed key press moves the interval by this much.
pub const TICK_INTERVAL_STEP_MS: u64 = 20;

// ── Canvas ────────────────────────────────────────────────────────────────────

pub const DEFAULT_CANVAS_WIDTH: i32 = 600;
pub const DEFAULT_CANVAS_HEIGHT: i32 = 400;

// ── Flyer ─────────────────────────────────────────────────────────────────────

/// Vertical velocity applied by a flap (negative = upward).
pub const FLAP_VELOCITY: i32 = -10;
/// Added to vertical velocity every tick once launched.
pub const GRAVITY: i32 = 1;
pub const FLYER_FRAME_COUNT: usize = 3;
pub const WING_DOWN_FRAME: usize = 0;
pub const WING_UP_FRAME: usize = 1;
pub const DEAD_FRAME: usize = 2;

// ── Gates ─────────────────────────────────────────────────────────────────────

pub const NUM_GATES: usize = 4;
/// Horizontal distance between consecutive gates.
pub const GATE_INTERVAL: i32 = 200;
pub const GATE_WIDTH: i32 = 36;
pub const GATE_SPEED: i32 = 5;
/// Minimum height of the top gate.
pub const MIN_GATE_HEIGHT: i32 = 50;
pub const BASE_GAP_SIZE: i32 = 150;
/// Gap shrink per level.
pub const GAP_STEP: i32 = 5;
/// Smallest gap the level formula may produce.
pub const MIN_GAP_SIZE: i32 = 60;

// ── Levels ────────────────────────────────────────────────────────────────────

pub const GATES_PER_LEVEL: u32 = 5;
/// How long the "Level N" toast stays up.
pub const LEVEL_TOAST_SECONDS: u32 = 3;

// ── HUD & overlay ─────────────────────────────────────────────────────────────

pub const HUD_Y: i32 = 5;
pub const OVERLAY_Y: i32 = 125;
pub const HUD_FONT: &str = "36px arial";
pub const START_PROMPT: &str = "Press F to fly";
pub const DEATH_PROMPT: &str = "Press R to restart";
