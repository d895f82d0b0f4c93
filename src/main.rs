//! Terminal blockfall runner (default binary).
//!
//! Uses crossterm for input and a framebuffer-based renderer. The loop
//! renders, polls input until the next frame is due, applies commands and
//! advances the simulation by one tick per frame.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};

use blockfall::core::{GameSnapshot, GameState, PcgSource, RandomSource};
use blockfall::input::{handle_key_event, is_press};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::FPS;

/// Single-player falling-block puzzle for the terminal.
#[derive(Parser, Debug)]
#[command(name = "blockfall")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Seed for piece selection; omit for a random sequence.
    #[arg(long)]
    seed: Option<u64>,

    /// Frames (and simulation ticks) per second.
    #[arg(long, default_value_t = FPS, value_parser = clap::value_parser!(u32).range(1..=1000))]
    fps: u32,

    /// Write logs to this file (filtered by RUST_LOG, default `info`).
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let rng: Box<dyn RandomSource> = match cli.seed {
        Some(seed) => Box::new(PcgSource::seeded(seed)),
        None => Box::new(PcgSource::from_entropy()),
    };
    let mut game = GameState::with_rng(rng);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game, cli.fps);

    // Always try to restore terminal state.
    let _ = term.exit();
    log::info!("exiting with score {} at level {}", game.score(), game.level());
    result
}

/// Logs go to a file; stderr would corrupt the alternate screen.
fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .context("failed to initialise logger")?;
    Ok(())
}

fn run(term: &mut TerminalRenderer, game: &mut GameState, fps: u32) -> Result<()> {
    let view = GameView::default();
    let frame = Duration::from_secs(1) / fps;
    let mut snapshot = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut last_tick = Instant::now();

    while game.running() {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snapshot);
        view.render_into(&snapshot, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = frame.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if is_press(&key) => {
                    if let Some(action) = handle_key_event(key) {
                        game.apply_action(action);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= frame {
            last_tick = Instant::now();
            game.tick();
        }
    }

    Ok(())
}
