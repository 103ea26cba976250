//! Three-player chess board for the search engine
//!
//! This crate provides a complete reference implementation of the
//! `board-core` [`Board`] trait. Agents never depend on it; it exists so the
//! search layer can be exercised, benchmarked and pitted against itself.
//!
//! # Geometry
//!
//! Each colour owns a 4 x 8 region. Rows count outward from that colour's
//! back rank, columns from that colour's left. Stepping forward off row 3
//! lands on row 3 of a neighbouring region with the column mirrored: columns
//! 0-3 lead to the next colour, columns 4-7 to the previous one. After such a
//! crossing every direction is reversed for the rest of the walk.
//!
//! # Usage
//!
//! ```rust
//! use board_core::{Board, Colour};
//! use games_threechess::ThreeChessBoard;
//!
//! let board = ThreeChessBoard::new();
//! assert_eq!(board.turn(), Colour::Blue);
//! assert_eq!(board.positions(Colour::Blue).len(), 16);
//! ```

use std::fmt;

use board_core::{
    Board, Colour, Direction, ImpossiblePosition, Move, Piece, PieceKind, Position, COLUMNS, ROWS,
};
use tracing::trace;

/// Default clock per player.
pub const DEFAULT_TIME_MS: i64 = 300_000;

const SQUARES: usize = Colour::COUNT * ROWS as usize * COLUMNS as usize;

const BACK_RANK: [PieceKind; COLUMNS as usize] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

#[inline]
fn square_index(pos: Position) -> usize {
    pos.colour().index() * (ROWS as usize * COLUMNS as usize)
        + pos.row() as usize * COLUMNS as usize
        + pos.column() as usize
}

/// The square one unit step away, in the frame of the region `pos` is in.
pub fn neighbour(pos: Position, direction: Direction) -> Result<Position, ImpossiblePosition> {
    let off_board = || ImpossiblePosition::OffBoard {
        from: pos,
        direction,
    };
    let (colour, row, column) = (pos.colour(), pos.row(), pos.column());

    match direction {
        Direction::Forward if row + 1 < ROWS => Position::new(colour, row + 1, column),
        Direction::Forward => {
            let region = if column < COLUMNS / 2 {
                colour.next()
            } else {
                colour.previous()
            };
            Position::new(region, ROWS - 1, COLUMNS - 1 - column)
        }
        Direction::Backward if row > 0 => Position::new(colour, row - 1, column),
        Direction::Left if column > 0 => Position::new(colour, row, column - 1),
        Direction::Right if column + 1 < COLUMNS => Position::new(colour, row, column + 1),
        Direction::Backward | Direction::Left | Direction::Right => Err(off_board()),
    }
}

/// Three-player chess board state
///
/// Holds piece placement, the player to move, capture lists, clocks and the
/// outcome once the game is over. Cloning is a deep copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreeChessBoard {
    squares: [Option<Piece>; SQUARES],
    turn: Colour,
    captured: [Vec<Piece>; Colour::COUNT],
    time_left_ms: [i64; Colour::COUNT],
    winner: Option<Colour>,
    loser: Option<Colour>,
    moves_played: u32,
}

impl ThreeChessBoard {
    /// Standard starting position with the default clock.
    pub fn new() -> Self {
        Self::with_time_limit(DEFAULT_TIME_MS)
    }

    /// Standard starting position with `time_ms` on every clock.
    pub fn with_time_limit(time_ms: i64) -> Self {
        let mut board = Self::empty().with_clock(time_ms);
        for colour in Colour::ALL {
            for (column, kind) in BACK_RANK.iter().enumerate() {
                board.place(colour, 0, column as u8, Piece::new(*kind, colour));
                board.place(colour, 1, column as u8, Piece::new(PieceKind::Pawn, colour));
            }
        }
        board
    }

    /// A board with no pieces, Blue to move. Building block for fixtures.
    pub fn empty() -> Self {
        Self {
            squares: [None; SQUARES],
            turn: Colour::Blue,
            captured: Default::default(),
            time_left_ms: [DEFAULT_TIME_MS; Colour::COUNT],
            winner: None,
            loser: None,
            moves_played: 0,
        }
    }

    /// Builder: put `piece` on `pos`, replacing whatever was there.
    pub fn with_piece(mut self, pos: Position, piece: Piece) -> Self {
        self.squares[square_index(pos)] = Some(piece);
        self
    }

    /// Builder: set the player to move.
    pub fn with_turn(mut self, colour: Colour) -> Self {
        self.turn = colour;
        self
    }

    /// Builder: set every clock.
    pub fn with_clock(mut self, time_ms: i64) -> Self {
        self.time_left_ms = [time_ms; Colour::COUNT];
        self
    }

    /// Builder: set one player's clock.
    pub fn with_time_left(mut self, colour: Colour, time_ms: i64) -> Self {
        self.time_left_ms[colour.index()] = time_ms;
        self
    }

    /// Builder: record a capture that already happened.
    pub fn with_capture(mut self, capturer: Colour, piece: Piece) -> Self {
        self.captured[capturer.index()].push(piece);
        self
    }

    /// Moves applied so far.
    pub fn moves_played(&self) -> u32 {
        self.moves_played
    }

    /// Total value of the pieces a player has captured.
    pub fn material(&self, colour: Colour) -> i32 {
        self.captured[colour.index()].iter().map(Piece::value).sum()
    }

    fn place(&mut self, colour: Colour, row: u8, column: u8, piece: Piece) {
        // Coordinates come from the fixed setup tables and are always in range.
        if let Ok(pos) = Position::new(colour, row, column) {
            self.squares[square_index(pos)] = Some(piece);
        }
    }

    /// Whether `piece` walking `pattern` from `start` reaches `end` through
    /// empty squares within its repetition limit.
    fn reaches(&self, piece: Piece, directions: &[Direction], max_reps: u8, mv: Move) -> bool {
        let mut current = mv.start;
        for _ in 0..max_reps {
            current = match self.step(
                piece,
                directions,
                current,
                mv.start.colour() != current.colour(),
            ) {
                Ok(next) => next,
                Err(_) => return false,
            };
            if current == mv.end {
                return true;
            }
            if self.piece_at(current).is_some() {
                return false;
            }
        }
        false
    }

    /// Clock ran out for `mover`: they lose, the richer opponent wins.
    fn flag_fall(&mut self, mover: Colour) {
        let first = mover.next();
        let second = first.next();
        let winner = if self.material(second) > self.material(first) {
            second
        } else {
            first
        };
        self.winner = Some(winner);
        self.loser = Some(mover);
    }

    fn promotes(piece: Piece, end: Position) -> bool {
        piece.kind == PieceKind::Pawn && end.row() == 0 && end.colour() != piece.colour
    }
}

impl Default for ThreeChessBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl Board for ThreeChessBoard {
    fn turn(&self) -> Colour {
        self.turn
    }

    fn positions(&self, colour: Colour) -> Vec<Position> {
        Position::all()
            .filter(|pos| {
                self.squares[square_index(*pos)].is_some_and(|piece| piece.colour == colour)
            })
            .collect()
    }

    fn piece_at(&self, position: Position) -> Option<Piece> {
        self.squares[square_index(position)]
    }

    fn step(
        &self,
        piece: Piece,
        directions: &[Direction],
        from: Position,
        reverse: bool,
    ) -> Result<Position, ImpossiblePosition> {
        // Pawns keep their owner's sense of forward wherever they stand.
        let mut reverse =
            reverse ^ (piece.kind == PieceKind::Pawn && piece.colour != from.colour());
        let mut current = from;
        for &direction in directions {
            let direction = if reverse {
                direction.reversed()
            } else {
                direction
            };
            let next = neighbour(current, direction)?;
            if next.colour() != current.colour() {
                reverse = !reverse;
            }
            current = next;
        }
        Ok(current)
    }

    fn is_legal_move(&self, mv: Move) -> bool {
        if self.is_game_over() || mv.is_null() {
            return false;
        }
        let Some(piece) = self.piece_at(mv.start) else {
            return false;
        };
        if piece.colour != self.turn {
            return false;
        }
        let target = self.piece_at(mv.end);
        if target.is_some_and(|t| t.colour == piece.colour) {
            return false;
        }

        self.movement_patterns(piece.kind).iter().any(|pattern| {
            if piece.kind == PieceKind::Pawn {
                // Straight onto empty squares, diagonal only to capture.
                let capture = target.is_some();
                if pattern.is_straight() == capture {
                    return false;
                }
            }
            self.reaches(piece, pattern.directions, pattern.max_reps, mv)
        })
    }

    fn apply_move(&mut self, mv: Move, elapsed_ms: u64) -> Result<(), ImpossiblePosition> {
        if self.is_game_over() {
            return Err(ImpossiblePosition::GameOver);
        }
        if !self.is_legal_move(mv) {
            return Err(ImpossiblePosition::IllegalMove(mv));
        }

        let mover = self.turn;
        let mut piece = self.squares[square_index(mv.start)]
            .take()
            .ok_or(ImpossiblePosition::IllegalMove(mv))?;
        if Self::promotes(piece, mv.end) {
            piece = Piece::new(PieceKind::Queen, piece.colour);
        }

        if let Some(taken) = self.squares[square_index(mv.end)].replace(piece) {
            trace!(%mover, %taken, at = %mv.end, "capture");
            self.captured[mover.index()].push(taken);
            if taken.kind == PieceKind::King {
                self.winner = Some(mover);
                self.loser = Some(taken.colour);
            }
        }

        let spent = i64::try_from(elapsed_ms).unwrap_or(i64::MAX);
        self.time_left_ms[mover.index()] = self.time_left_ms[mover.index()].saturating_sub(spent);
        if !self.is_game_over() && self.time_left_ms[mover.index()] <= 0 {
            self.flag_fall(mover);
        }

        self.moves_played += 1;
        if !self.is_game_over() {
            self.turn = mover.next();
        }
        Ok(())
    }

    fn captured(&self, colour: Colour) -> &[Piece] {
        &self.captured[colour.index()]
    }

    fn is_game_over(&self) -> bool {
        self.winner.is_some()
    }

    fn winner(&self) -> Option<Colour> {
        self.winner
    }

    fn loser(&self) -> Option<Colour> {
        self.loser
    }

    fn time_left_ms(&self, colour: Colour) -> i64 {
        self.time_left_ms[colour.index()]
    }
}

impl fmt::Display for ThreeChessBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for colour in Colour::ALL {
            writeln!(f, "{colour}")?;
            for row in (0..ROWS).rev() {
                write!(f, "  {} ", row + 1)?;
                for column in 0..COLUMNS {
                    let cell = Position::new(colour, row, column)
                        .ok()
                        .and_then(|pos| self.piece_at(pos));
                    match cell {
                        Some(piece) => write!(f, " {piece}")?,
                        None => write!(f, " ..")?,
                    }
                }
                writeln!(f)?;
            }
        }
        write!(f, "{} to move after {} moves", self.turn, self.moves_played)
    }
}
