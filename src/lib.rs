//! Side-scrolling gate-flying arcade game: pure game logic.
//!
//! The binary supplies the terminal, the key stream and the image loader;
//! everything here runs against the `Surface` trait and plain values.

pub mod assets;
pub mod clock;
pub mod config;
pub mod constants;
pub mod entity;
pub mod error;
pub mod flyer;
pub mod game;
pub mod gates;
pub mod geometry;
pub mod input;
pub mod level;
pub mod logging;
pub mod overlay;
pub mod scoreboard;
pub mod surface;

pub use error::GameError;
pub use game::Game;
