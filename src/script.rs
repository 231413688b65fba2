//! Headless play: run a fixed list of moves and emit one JSON line per move.

use std::io::Write;

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::{GameSession, GameSnapshot, TileRng};
use crate::types::Direction;

/// One line of script output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptStep {
    pub step: usize,
    pub direction: Direction,
    pub changed: bool,
    pub snapshot: GameSnapshot,
}

/// Parse moves such as `"RRU lD"`: letters U, D, L, R in any case,
/// whitespace ignored.
pub fn parse_moves(script: &str) -> Result<Vec<Direction>> {
    script
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| {
            Direction::from_char(c)
                .ok_or_else(|| anyhow!("script: unknown move {:?} (expected U, D, L or R)", c))
        })
        .collect()
}

/// Play `moves` on `session`, writing a [`ScriptStep`] per move to `out`.
///
/// Stops after the move that ends the game. Returns the number of moves played.
pub fn run_script<R: TileRng, W: Write>(
    session: &mut GameSession<R>,
    moves: &[Direction],
    out: &mut W,
) -> Result<usize> {
    let mut played = 0;
    for (step, &direction) in moves.iter().enumerate() {
        if session.game_over() {
            break;
        }
        let changed = session.play(direction);
        played += 1;

        let line = ScriptStep {
            step,
            direction,
            changed,
            snapshot: session.snapshot(),
        };
        serde_json::to_writer(&mut *out, &line)?;
        out.write_all(b"\n")?;
    }
    out.flush()?;

    info!(
        played,
        requested = moves.len(),
        game_over = session.game_over(),
        "script finished"
    );
    Ok(played)
}
