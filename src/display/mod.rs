//! Rendering layer. All terminal I/O lives here.
//!
//! `TerminalSurface` implements the game's drawing surface on top of
//! crossterm.  The game thinks in canvas pixels; this module scales those to
//! terminal cells and translates draw calls into queued terminal commands.

pub mod sprites;

use std::collections::HashSet;
use std::io::Write;
use std::sync::mpsc::Sender;
use std::thread;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};

use gate_flyer::assets::{AssetEvent, ImageId};
use gate_flyer::geometry::Canvas;
use gate_flyer::surface::{Baseline, Colour, Surface, TextStyle};

use sprites::{size_of, sprite_for, Sprite};

const C_HINT: Color = Color::DarkGrey;
const CONTROLS_HINT: &str = "F: Fly  P: Pause  +/-: Speed  I: Immune  R: Reset  Q: Quit";

fn terminal_colour(colour: Colour) -> Color {
    match colour {
        Colour::Black => Color::Black,
        Colour::White => Color::White,
        Colour::Red => Color::Red,
    }
}

pub struct TerminalSurface<W: Write> {
    out: W,
    canvas: Canvas,
    cols: u16,
    /// Rows available to the canvas (the last row holds the controls hint).
    rows: u16,
    style: TextStyle,
    loaded: HashSet<ImageId>,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W, canvas: Canvas, cols: u16, rows: u16) -> Self {
        TerminalSurface {
            out,
            canvas,
            cols: cols.max(1),
            rows: rows.saturating_sub(1).max(1),
            style: TextStyle {
                font: "",
                fill: Colour::White,
                stroke: Colour::Black,
                baseline: Baseline::Top,
            },
            loaded: HashSet::new(),
        }
    }

    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.cols = cols.max(1);
        self.rows = rows.saturating_sub(1).max(1);
    }

    pub fn mark_loaded(&mut self, image: ImageId) {
        self.loaded.insert(image);
    }

    /// Canvas pixels covered by one cell, horizontally and vertically.
    pub fn scale(&self) -> (f64, f64) {
        (
            self.canvas.width as f64 / self.cols as f64,
            self.canvas.height as f64 / self.rows as f64,
        )
    }

    fn to_col(&self, x: i32) -> i32 {
        (x as f64 / self.scale().0).floor() as i32
    }

    fn to_row(&self, y: i32) -> i32 {
        (y as f64 / self.scale().1).floor() as i32
    }

    /// Print `text` starting at a cell, dropping whatever falls off screen.
    fn put_str(&mut self, col: i32, row: i32, text: &str) -> std::io::Result<()> {
        if row < 0 || row >= self.rows as i32 {
            return Ok(());
        }
        let skip = (-col).max(0) as usize;
        let start = col.max(0);
        let room = (self.cols as i32 - start).max(0) as usize;
        let visible: String = text.chars().skip(skip).take(room).collect();
        if visible.is_empty() {
            return Ok(());
        }
        self.out.queue(cursor::MoveTo(start as u16, row as u16))?;
        self.out.queue(Print(visible))?;
        Ok(())
    }

    fn draw_art(&mut self, lines: &[&str], colour: Color, x: i32, y: i32) -> std::io::Result<()> {
        let (col, row) = (self.to_col(x), self.to_row(y));
        self.out.queue(style::SetForegroundColor(colour))?;
        for (dy, line) in lines.iter().enumerate() {
            self.put_str(col, row + dy as i32, line)?;
        }
        Ok(())
    }

    fn draw_solid(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        colour: Color,
    ) -> std::io::Result<()> {
        let left = self.to_col(x);
        let right = self.to_col(x + width).max(left + 1);
        let top = self.to_row(y).max(0);
        let bottom = self.to_row(y + height).min(self.rows as i32);
        let block = "█".repeat((right - left) as usize);

        self.out.queue(style::SetForegroundColor(colour))?;
        for row in top..bottom {
            self.put_str(left, row, &block)?;
        }
        Ok(())
    }

    fn draw_backdrop(&mut self, glyph: char, colour: Color) -> std::io::Result<()> {
        let width = self.cols as usize;
        let ground: String = std::iter::repeat(glyph).take(width).collect();
        let sky: String = (0..width)
            .map(|c| if c % 11 == 5 { glyph } else { ' ' })
            .collect();

        self.out.queue(style::SetForegroundColor(colour))?;
        self.put_str(0, 2, &sky)?;
        let last = self.rows as i32 - 1;
        self.put_str(0, last, &ground)
    }

    fn draw_controls_hint(&mut self) -> std::io::Result<()> {
        self.out.queue(cursor::MoveTo(1, self.rows))?;
        self.out.queue(style::SetForegroundColor(C_HINT))?;
        self.out.queue(Print(CONTROLS_HINT))?;
        Ok(())
    }
}

impl<W: Write> Surface for TerminalSurface<W> {
    fn clear(&mut self) -> std::io::Result<()> {
        self.out.queue(terminal::Clear(terminal::ClearType::All))?;
        Ok(())
    }

    fn draw_image(&mut self, image: ImageId, x: i32, y: i32) -> std::io::Result<()> {
        if !self.loaded.contains(&image) {
            return Ok(());
        }
        match sprite_for(image, self.canvas) {
            Sprite::Art(lines, colour) => self.draw_art(lines, colour, x, y),
            Sprite::Solid {
                width,
                height,
                colour,
            } => self.draw_solid(x, y, width, height, colour),
            Sprite::Backdrop { glyph, colour } => self.draw_backdrop(glyph, colour),
        }
    }

    fn set_text_style(&mut self, style: &TextStyle) {
        self.style = style.clone();
    }

    fn measure_text(&self, text: &str) -> i32 {
        (text.chars().count() as f64 * self.scale().0).round() as i32
    }

    fn fill_text(&mut self, text: &str, x: i32, y: i32) -> std::io::Result<()> {
        let (col, row) = (self.to_col(x), self.to_row(y));
        self.out
            .queue(style::SetForegroundColor(terminal_colour(self.style.fill)))?;
        self.put_str(col, row, text)
    }

    fn stroke_text(&mut self, _text: &str, _x: i32, _y: i32) -> std::io::Result<()> {
        // Character cells have no outline to stroke.
        Ok(())
    }

    fn present(&mut self) -> std::io::Result<()> {
        self.draw_controls_hint()?;
        // Park cursor in a harmless spot and flush
        self.out.queue(style::ResetColor)?;
        self.out.queue(cursor::MoveTo(0, self.rows))?;
        self.out.flush()?;
        Ok(())
    }
}

/// Stand-in for asynchronous image loading: report every sprite's size from
/// a background thread, one completion event per image.
pub fn spawn_loader<E, F>(canvas: Canvas, scale: (f64, f64), tx: Sender<E>, wrap: F)
where
    E: Send + 'static,
    F: Fn(AssetEvent) -> E + Send + 'static,
{
    thread::spawn(move || {
        for image in ImageId::all() {
            let size = size_of(&sprite_for(image, canvas), canvas, scale);
            if tx.send(wrap(AssetEvent { image, size })).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });
}
