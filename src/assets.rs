//! Image identifiers and the completion signal sent by whatever loads them.
//!
//! The game never touches image data.  It names images by `ImageId`, asks the
//! drawing surface to blit them, and waits for an `AssetEvent` before using
//! an image's dimensions.

use crate::geometry::Size;

/// Background themes, one per level.
pub const BACKGROUND_FILES: [&str; 4] = ["jungle.png", "inca.png", "desert.png", "peru.png"];

/// Flyer frames: wing-down, wing-up, dead.
pub const FLYER_FILES: [&str; 3] = ["p1.png", "p2.png", "p3.png"];

pub const GATE_TOP_FILE: &str = "gateTop.png";
pub const GATE_BOTTOM_FILE: &str = "gateBottom.png";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImageId {
    Background(usize),
    FlyerFrame(usize),
    GateTop,
    GateBottom,
}

impl ImageId {
    pub fn file_name(&self) -> &'static str {
        match *self {
            ImageId::Background(i) => BACKGROUND_FILES[i % BACKGROUND_FILES.len()],
            ImageId::FlyerFrame(i) => FLYER_FILES[i % FLYER_FILES.len()],
            ImageId::GateTop => GATE_TOP_FILE,
            ImageId::GateBottom => GATE_BOTTOM_FILE,
        }
    }

    /// Every image the game draws, in load order.
    pub fn all() -> Vec<ImageId> {
        let mut ids: Vec<ImageId> = (0..BACKGROUND_FILES.len()).map(ImageId::Background).collect();
        ids.extend((0..FLYER_FILES.len()).map(ImageId::FlyerFrame));
        ids.push(ImageId::GateTop);
        ids.push(ImageId::GateBottom);
        ids
    }
}

/// Sent by the asset loader once an image is ready to draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AssetEvent {
    pub image: ImageId,
    pub size: Size,
}
