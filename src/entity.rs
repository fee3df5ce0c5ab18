//! The contract every game object implements.

use std::io;

use crate::geometry::Canvas;
use crate::input::Key;
use crate::surface::Surface;

/// Loop-owned values entities read during a tick or key dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickContext {
    pub canvas: Canvas,
    /// Current frames per second, derived from the tick interval.
    pub fps: u32,
}

pub trait Entity {
    fn update(&mut self, ctx: &TickContext);
    fn draw(&self, surface: &mut dyn Surface, ctx: &TickContext) -> io::Result<()>;
    fn receive_key(&mut self, key: Key, ctx: &TickContext);
}
