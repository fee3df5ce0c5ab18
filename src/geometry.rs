//! Canvas dimensions and the axis-aligned box overlap test.

/// The drawing area every entity bounds-checks against, in virtual pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Canvas {
    pub width: i32,
    pub height: i32,
}

impl Canvas {
    pub fn new(width: i32, height: i32) -> Self {
        Canvas { width, height }
    }

    /// Horizontal midline, where the flyer sits and gates are scored.
    pub fn mid_x(&self) -> i32 {
        self.width / 2
    }
}

/// Intrinsic pixel dimensions of a loaded image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub fn new(width: i32, height: i32) -> Self {
        Size { width, height }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Rect { x, y, w, h }
    }

    pub fn overlaps(&self, other: &Rect) -> bool {
        overlaps(
            self.x, self.y, self.w, self.h, other.x, other.y, other.w, other.h,
        )
    }
}

/// True unless one box lies entirely above, below, left or right of the
/// other.  Touching edges count as an overlap.
#[allow(clippy::too_many_arguments)]
pub fn overlaps(x1: i32, y1: i32, w1: i32, h1: i32, x2: i32, y2: i32, w2: i32, h2: i32) -> bool {
    !(y1 + h1 < y2 || y1 > y2 + h2 || x1 + w1 < x2 || x1 > x2 + w2)
}
