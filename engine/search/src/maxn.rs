//! Bounded-depth MaxN search.
//!
//! Every player along the path maximises their own component of the utility
//! vector; the winning child's whole vector is passed up unchanged. Nodes are
//! expanded on clones, one per child.
//!
//! A branch whose move the board refuses is dropped from comparison and
//! counted in [`SearchStats::aborted`]; the clone it would have produced is
//! never evaluated.

use board_core::{Board, Colour, Move};
use tracing::{debug, trace, warn};

use crate::enumerate::legal_moves;
use crate::error::SearchError;
use crate::stats::SearchStats;
use crate::utility::{Utility, UtilityMode};

/// Clock cost charged for every move applied inside the tree.
const TREE_MOVE_MS: u64 = 1;

/// Root move with the utility vector it backed up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredMove {
    pub mv: Move,
    pub utility: Utility,
}

/// Outcome of a root search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaxNResult {
    pub searcher: Colour,
    /// Utility of the position before moving.
    pub initial: Utility,
    /// Best root move, `None` when every branch was aborted or none exist.
    pub best: Option<ScoredMove>,
}

impl MaxNResult {
    /// The best move, if it strictly improves the searcher's utility.
    pub fn improving_move(&self) -> Option<Move> {
        self.best
            .filter(|best| best.utility.of(self.searcher) > self.initial.of(self.searcher))
            .map(|best| best.mv)
    }
}

/// MaxN search state for one decision.
pub struct MaxNSearch {
    mode: UtilityMode,
    depth_limit: u32,
    searcher: Colour,
    stats: SearchStats,
}

impl MaxNSearch {
    pub fn new(mode: UtilityMode, depth_limit: u32) -> Self {
        Self {
            mode,
            depth_limit: depth_limit.max(1),
            searcher: Colour::Blue,
            stats: SearchStats::default(),
        }
    }

    /// Search every root move of the side to move.
    pub fn run<B: Board>(&mut self, board: &B) -> Result<MaxNResult, SearchError> {
        if board.is_game_over() {
            return Err(SearchError::GameOver);
        }
        self.searcher = board.turn();
        let initial = self.evaluate(board);
        self.stats.nodes_expanded += 1;

        let mut best: Option<ScoredMove> = None;
        for mv in legal_moves(board) {
            let Some(utility) = self.child_value(board, mv, 1) else {
                continue;
            };
            trace!(%mv, %utility, "root branch");
            if best.map_or(true, |b| utility.of(self.searcher) > b.utility.of(self.searcher)) {
                best = Some(ScoredMove { mv, utility });
            }
        }

        debug!(
            searcher = %self.searcher,
            depth = self.depth_limit,
            %initial,
            best = ?best.map(|b| b.mv.to_string()),
            nodes = self.stats.nodes_expanded,
            aborted = self.stats.aborted,
            "maxn search complete"
        );

        Ok(MaxNResult {
            searcher: self.searcher,
            initial,
            best,
        })
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Backed-up utility of `board`, `depth` plies below the root.
    fn value<B: Board>(&mut self, board: &B, depth: u32) -> Utility {
        if depth >= self.depth_limit || board.is_game_over() {
            return self.evaluate(board);
        }
        self.stats.nodes_expanded += 1;

        let mover = board.turn();
        let mut best: Option<Utility> = None;
        for mv in legal_moves(board) {
            let Some(utility) = self.child_value(board, mv, depth + 1) else {
                continue;
            };
            if best.map_or(true, |b| utility.of(mover) > b.of(mover)) {
                best = Some(utility);
            }
        }

        // No playable children: score the node itself
        best.unwrap_or_else(|| self.evaluate(board))
    }

    /// Apply `mv` on a clone and search below it. `None` if the board refused.
    fn child_value<B: Board>(&mut self, board: &B, mv: Move, depth: u32) -> Option<Utility> {
        let mut child = board.clone();
        if let Err(e) = child.apply_move(mv, TREE_MOVE_MS) {
            let err = SearchError::rejected(mv, e);
            warn!(error = %err, depth, "maxn branch aborted");
            self.stats.aborted += 1;
            return None;
        }
        Some(self.value(&child, depth))
    }

    fn evaluate<B: Board>(&mut self, board: &B) -> Utility {
        self.stats.leaves_evaluated += 1;
        self.mode.evaluate(board, self.searcher)
    }
}
