mod display;

use std::io::{stdout, BufWriter, Write};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::Instant;

use clap::Parser;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal, ExecutableCommand,
};
use log::info;

use gate_flyer::assets::AssetEvent;
use gate_flyer::config::GameSettings;
use gate_flyer::constants::{DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, INITIAL_TICK_INTERVAL_MS};
use gate_flyer::geometry::Canvas;
use gate_flyer::input::Key;
use gate_flyer::{logging, Game, GameError};

use display::TerminalSurface;

/// Fly through the gates. F flaps, P pauses, +/- change speed, R resets.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Canvas width in game pixels
    #[arg(long, default_value_t = DEFAULT_CANVAS_WIDTH)]
    width: i32,

    /// Canvas height in game pixels
    #[arg(long, default_value_t = DEFAULT_CANVAS_HEIGHT)]
    height: i32,

    /// Initial tick interval in milliseconds (20..=140, steps of 20)
    #[arg(long, default_value_t = INITIAL_TICK_INTERVAL_MS)]
    speed: u64,

    /// Seed for reproducible gate layouts
    #[arg(long)]
    seed: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Write log records to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

/// Everything the game loop waits on, funnelled through one channel.
enum AppEvent {
    Input(Event),
    Asset(AssetEvent),
}

// ── Game loop ─────────────────────────────────────────────────────────────────

fn is_quit(code: KeyCode, modifiers: KeyModifiers) -> bool {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        KeyCode::Char('c') => modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Runs until the player quits.
///
/// Waits on the event channel until either an event arrives or the tick
/// timer comes due, so key presses are handled between ticks and never
/// interleave with one.
fn game_loop<W: Write>(
    game: &mut Game,
    surface: &mut TerminalSurface<W>,
    rx: &mpsc::Receiver<AppEvent>,
) -> std::io::Result<()> {
    loop {
        let timeout = game.time_until_tick(Instant::now());
        match rx.recv_timeout(timeout) {
            Ok(AppEvent::Input(Event::Key(KeyEvent {
                code,
                kind: KeyEventKind::Press,
                modifiers,
                ..
            }))) => {
                if is_quit(code, modifiers) {
                    return Ok(());
                }
                if let KeyCode::Char(c) = code {
                    if let Some(key) = Key::from_char(c) {
                        game.dispatch_key(key, Instant::now());
                    }
                }
            }
            Ok(AppEvent::Input(Event::Resize(cols, rows))) => surface.resize(cols, rows),
            Ok(AppEvent::Input(_)) => {}
            Ok(AppEvent::Asset(asset)) => {
                surface.mark_loaded(asset.image);
                game.asset_loaded(asset);
            }
            Err(mpsc::RecvTimeoutError::Timeout) => {}
            Err(mpsc::RecvTimeoutError::Disconnected) => return Ok(()),
        }

        game.on_timer(Instant::now(), surface)?;
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<(), GameError> {
    let args = Args::parse();
    logging::init(args.verbose, args.log_file.as_deref())?;

    let settings = GameSettings {
        canvas: Canvas::new(args.width, args.height),
        initial_interval_ms: args.speed,
        seed: args.seed,
    }
    .validate()?;
    info!("starting with {:?}", settings);

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    let result = run(out, settings);

    // Always restore the terminal
    let mut out = stdout();
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result.map_err(GameError::from)
}

fn run<W: Write>(out: W, settings: GameSettings) -> std::io::Result<()> {
    let (cols, rows) = terminal::size()?;
    let canvas = settings.canvas;
    let mut surface = TerminalSurface::new(out, canvas, cols, rows);
    let mut game = Game::new(settings, Instant::now());

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<AppEvent>();
    let input_tx = tx.clone();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if input_tx.send(AppEvent::Input(ev)).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });
    display::spawn_loader(canvas, surface.scale(), tx, AppEvent::Asset);

    game_loop(&mut game, &mut surface, &rx)
}
