//! One game between three seated agents.

use std::time::Instant;

use anyhow::{anyhow, Context, Result};
use board_core::{Board, Colour};
use search::{Agent, DecisionReason, SearchStats};
use serde::Serialize;
use tracing::{debug, trace};

/// How a game stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Ending {
    /// The board declared a winner and a loser.
    Decided,
    /// Still running at the ply limit; scored as a draw.
    PlyLimit,
}

/// Per-seat tallies for one game.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SeatRecord {
    pub decisions: u32,
    pub thinking_ms: u64,
    pub by_search: u32,
    pub by_capture: u32,
    pub by_fallback: u32,
    pub by_random: u32,
    pub search: SearchStats,
}

impl SeatRecord {
    fn record(&mut self, reason: DecisionReason, stats: &SearchStats, charged_ms: u64) {
        self.decisions += 1;
        self.thinking_ms += charged_ms;
        match reason {
            DecisionReason::Search => self.by_search += 1,
            DecisionReason::Capture => self.by_capture += 1,
            DecisionReason::FallbackCapture => self.by_fallback += 1,
            DecisionReason::Random => self.by_random += 1,
        }
        self.search.absorb(stats);
    }
}

/// Result of one game, indexed by colour.
#[derive(Debug, Clone, Serialize)]
pub struct GameRecord {
    pub winner: Option<Colour>,
    pub loser: Option<Colour>,
    pub ending: Ending,
    pub plies: u32,
    pub seats: [SeatRecord; 3],
}

/// Play `board` to the end.
///
/// `seating[colour.index()]` is the index into `agents` of the agent playing
/// that colour. Every decision is charged its wall-clock time, at least 1 ms,
/// against the mover's clock.
pub fn play_game<B: Board>(
    mut board: B,
    agents: &mut [Agent],
    seating: [usize; 3],
    max_plies: u32,
) -> Result<GameRecord> {
    let mut seats: [SeatRecord; 3] = Default::default();
    let mut plies = 0u32;

    while !board.is_game_over() {
        if plies >= max_plies {
            debug!(plies, "ply limit reached");
            return Ok(GameRecord {
                winner: None,
                loser: None,
                ending: Ending::PlyLimit,
                plies,
                seats,
            });
        }

        let mover = board.turn();
        let agent = agents
            .get_mut(seating[mover.index()])
            .ok_or_else(|| anyhow!("no agent seated for {mover}"))?;

        let started = Instant::now();
        let decision = agent
            .choose_move(&board)
            .with_context(|| format!("{} ({mover}) failed to move", agent.name()))?;
        let charged_ms = (started.elapsed().as_millis() as u64).max(1);

        trace!(ply = plies, colour = %mover, mv = %decision.mv, charged_ms, "move");
        board
            .apply_move(decision.mv, charged_ms)
            .with_context(|| format!("board refused {} from {}", decision.mv, agent.name()))?;

        seats[mover.index()].record(decision.reason, &decision.stats, charged_ms);
        plies += 1;
    }

    Ok(GameRecord {
        winner: board.winner(),
        loser: board.loser(),
        ending: Ending::Decided,
        plies,
        seats,
    })
}
