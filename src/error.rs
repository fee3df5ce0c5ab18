use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("canvas {width}x{height} is too small to lay out gates")]
    InvalidCanvas { width: i32, height: i32 },

    #[error("could not start logging: {0}")]
    Logger(String),
}
