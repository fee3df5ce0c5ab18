//! The 2D drawing surface the entities render onto.

use std::io;

use crate::assets::ImageId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Colour {
    Black,
    White,
    Red,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Baseline {
    /// `y` names the top edge of the text.
    Top,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextStyle {
    pub font: &'static str,
    pub fill: Colour,
    pub stroke: Colour,
    pub baseline: Baseline,
}

/// Everything an entity may do to the screen.
///
/// Implementations must tolerate `draw_image` for an image that has not
/// finished loading (by drawing nothing).
pub trait Surface {
    fn clear(&mut self) -> io::Result<()>;
    fn draw_image(&mut self, image: ImageId, x: i32, y: i32) -> io::Result<()>;
    fn set_text_style(&mut self, style: &TextStyle);
    /// Width of `text` in canvas pixels under the current style.
    fn measure_text(&self, text: &str) -> i32;
    fn fill_text(&mut self, text: &str, x: i32, y: i32) -> io::Result<()>;
    fn stroke_text(&mut self, text: &str, x: i32, y: i32) -> io::Result<()>;
    /// Flush the finished frame.
    fn present(&mut self) -> io::Result<()>;
}
