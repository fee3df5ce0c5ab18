use std::fs::File;
use std::path::Path;

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

use crate::error::GameError;

/// Initializes the global logger, writing to `log_file`.
///
/// The terminal is owned by the game while it runs, so nothing is logged to
/// stderr: without a file no logger is installed and records are dropped.
/// When `verbose` is `true`, debug messages are kept; otherwise info and
/// above.  `RUST_LOG` still overrides either default.
pub fn init(verbose: bool, log_file: Option<&Path>) -> Result<(), GameError> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let file = File::create(path)
        .map_err(|e| GameError::Logger(format!("{}: {}", path.display(), e)))?;

    let env = Env::default().default_filter_or(level.to_string());
    let mut builder = Builder::from_env(env);
    builder.target(Target::Pipe(Box::new(file)));

    // `try_init` only fails if a logger was already set.
    let _ = builder.try_init();
    Ok(())
}
