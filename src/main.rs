//! Terminal 2048 runner (default binary).
//!
//! Interactive play uses crossterm for input and the framebuffer renderer for
//! output. With `--script` the game runs headless and prints JSON lines.

use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{info, Level};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;

use tui_2048::core::{Flow, GameConfig, GameSession};
use tui_2048::input::{action_for_key, should_force_quit};
use tui_2048::script::{parse_moves, run_script};
use tui_2048::term::{GameView, TerminalRenderer, Viewport};
use tui_2048::types::DEFAULT_GRID_SIZE;

#[derive(Debug, Parser)]
#[command(name = "tui-2048", about = "Slide and merge numbered tiles in the terminal")]
struct Cli {
    #[arg(long, default_value_t = DEFAULT_GRID_SIZE, help = "Grid size (N x N, 1 to 8)")]
    size: usize,

    #[arg(long, help = "Seed for a reproducible game")]
    seed: Option<u64>,

    #[arg(long, help = "Write logs to this file (interactive play owns the terminal)")]
    log_file: Option<PathBuf>,

    #[arg(
        short = 'v',
        long,
        action = clap::ArgAction::Count,
        help = "Increase verbosity (-v = DEBUG, -vv = TRACE)"
    )]
    verbose: u8,

    #[arg(
        long,
        help = "Play these moves headless (U, D, L, R) and print one JSON line per move"
    )]
    script: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let headless = cli.script.is_some();
    init_logging(&cli, headless)?;

    let config = GameConfig {
        size: cli.size,
        seed: cli.seed,
    };
    let mut session = GameSession::new(&config).context("cannot start game")?;
    info!(size = config.size, seed = ?config.seed, "game started");

    if let Some(script) = cli.script.as_deref() {
        let moves = parse_moves(script)?;
        let stdout = io::stdout();
        run_script(&mut session, &moves, &mut stdout.lock())?;
        return Ok(());
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, session: &mut GameSession) -> Result<()> {
    let view = GameView::default();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        term.draw(view.render(&session.snapshot(), Viewport::new(w, h)))?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_force_quit(key) {
                    return Ok(());
                }
                if session.apply_action(action_for_key(key)) == Flow::Exit {
                    info!(moves = session.moves(), "player quit");
                    return Ok(());
                }
            }
            Event::Resize(..) => term.invalidate(),
            _ => {}
        }
    }
}

/// File logging for interactive play, stderr for headless runs.
fn init_logging(cli: &Cli, headless: bool) -> Result<()> {
    let level = match cli.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let filter = LevelFilter::from_level(level);

    if let Some(path) = &cli.log_file {
        let file = File::create(path)
            .with_context(|| format!("cannot create log file {}", path.display()))?;
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .with(filter)
            .init();
    } else if headless {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(io::stderr),
            )
            .with(filter)
            .init();
    }
    Ok(())
}
