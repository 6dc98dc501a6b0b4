//! Board backed by the `shakmaty` rules engine
//!
//! Provides the production [`SearchPosition`]:
//! - FEN decoding and encoding
//! - Legal move enumeration and game-over detection
//! - Push/pop of moves over an undo stack of prior positions
//!
//! The undo stack only ever holds the moves currently applied on the search path, so its length is
//! bounded by the search depth.

use crate::error::{ChessEngineError, ChessEngineResult};
use crate::rules::SearchPosition;
use crate::types::{Piece, PieceKind, Side, SQUARE_COUNT};
use shakmaty::fen::Fen;
use shakmaty::{CastlingMode, Chess, Color, EnPassantMode, Move, Position, Role, Square};
use std::fmt::Display;

/// Halfmove clock at which the game is drawn without a claim (seventy-five moves by each side)
const SEVENTY_FIVE_MOVE_PLIES: u32 = 150;

/// Position plus the positions it was reached from
#[derive(Debug, Clone, Default)]
pub struct Board {
    position: Chess,
    undo: Vec<Chess>,
}

impl Board {
    /// Decode a FEN string (standard castling rules)
    ///
    /// # Errors
    ///
    /// Returns `InvalidFen` when the text does not parse or the placement is not a legal position.
    pub fn from_fen(fen: &str) -> ChessEngineResult<Self> {
        let parsed: Fen = fen.trim().parse().map_err(|e| invalid_fen(fen, e))?;
        let position: Chess = parsed
            .into_position(CastlingMode::Standard)
            .map_err(|e| invalid_fen(fen, e))?;

        Ok(Self {
            position,
            undo: Vec::new(),
        })
    }

    /// Encode the current position, listing an en passant square only when a capture is legal
    pub fn to_fen(&self) -> String {
        Fen::from_position(self.position.clone(), EnPassantMode::Legal).to_string()
    }

    /// Number of applied moves that have not been reverted
    pub fn applied(&self) -> usize {
        self.undo.len()
    }

    /// Render a move in UCI notation (`e2e4`, `e7e8q`, `e1g1`)
    pub fn move_to_uci(mv: &Move) -> String {
        mv.to_uci(CastlingMode::Standard).to_string()
    }
}

fn invalid_fen(fen: &str, reason: impl Display) -> ChessEngineError {
    ChessEngineError::InvalidFen {
        fen: fen.to_string(),
        reason: reason.to_string(),
    }
}

fn piece_kind(role: Role) -> PieceKind {
    match role {
        Role::Pawn => PieceKind::Pawn,
        Role::Knight => PieceKind::Knight,
        Role::Bishop => PieceKind::Bishop,
        Role::Rook => PieceKind::Rook,
        Role::Queen => PieceKind::Queen,
        Role::King => PieceKind::King,
    }
}

fn side(color: Color) -> Side {
    match color {
        Color::White => Side::White,
        Color::Black => Side::Black,
    }
}

impl SearchPosition for Board {
    type Move = Move;

    fn legal_moves(&self) -> Vec<Move> {
        self.position.legal_moves().into_iter().collect()
    }

    fn push(&mut self, mv: &Move) -> ChessEngineResult<()> {
        if !self.position.is_legal(mv) {
            return Err(ChessEngineError::IllegalMove {
                mv: Board::move_to_uci(mv),
            });
        }

        self.undo.push(self.position.clone());
        self.position.play_unchecked(mv);
        Ok(())
    }

    fn pop(&mut self) -> ChessEngineResult<()> {
        let previous = self
            .undo
            .pop()
            .ok_or(ChessEngineError::StackUnderflow { depth: 0 })?;
        self.position = previous;
        Ok(())
    }

    fn is_game_over(&self) -> bool {
        self.position.is_game_over() || self.position.halfmoves() >= SEVENTY_FIVE_MOVE_PLIES
    }

    fn piece_at(&self, square: usize) -> Option<Piece> {
        if square >= SQUARE_COUNT {
            return None;
        }

        self.position
            .board()
            .piece_at(Square::new(square as u32))
            .map(|p| Piece::new(piece_kind(p.role), side(p.color)))
    }

    fn side_to_move(&self) -> Side {
        side(self.position.turn())
    }
}
