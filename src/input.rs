//! The keyboard command surface.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// P: toggle pause.
    Pause,
    /// `-`: lengthen the tick interval.
    SlowDown,
    /// `+`: shorten the tick interval.
    SpeedUp,
    /// R: full reset.
    Reset,
    /// F: flap (and start the gates moving).
    Flap,
    /// I: toggle flyer immunity.
    Immunity,
}

impl Key {
    /// Case-insensitive mapping from a typed character.  `_` and `=` share a
    /// physical key with `-` and `+` so they are accepted too.
    pub fn from_char(c: char) -> Option<Key> {
        match c.to_ascii_lowercase() {
            'p' => Some(Key::Pause),
            '-' | '_' => Some(Key::SlowDown),
            '+' | '=' => Some(Key::SpeedUp),
            'r' => Some(Key::Reset),
            'f' => Some(Key::Flap),
            'i' => Some(Key::Immunity),
            _ => None,
        }
    }
}
