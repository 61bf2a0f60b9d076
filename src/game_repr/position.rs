use smallvec::SmallVec;

use super::error::Result;
use super::*;

/*
 * MODULE IS RESPONSIBLE FOR
 * GAME STATE AND MOVE APPLICATION
 */

/// Authoritative state of one game.
///
/// Fields fall into two groups by when they are refreshed:
/// - per move (written by [`GameState::make_move`] / [`GameState::undo_move`]):
///   `board`, `side_to_move`, `move_log`, king squares, `en_passant_target`,
///   `castling_rights` and both snapshot logs
/// - per query (written by [`GameState::legal_moves`], reset on every move):
///   `in_check`, `pins`, `checks`, `checkmate`, `stalemate`
#[derive(Debug, Clone)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    pub(crate) move_log: Vec<Move>,

    /// Always equal to the square holding the king of that color
    pub(crate) white_king_square: Square,
    pub(crate) black_king_square: Square,

    pub(crate) in_check: bool,
    pub(crate) pins: SmallVec<[Pin; 8]>,
    pub(crate) checks: SmallVec<[Check; 4]>,
    pub(crate) checkmate: bool,
    pub(crate) stalemate: bool,

    /// Square a pawn may capture onto this turn only
    pub(crate) en_passant_target: Option<Square>,
    /// One entry per applied move plus the initial value
    pub(crate) en_passant_log: Vec<Option<Square>>,

    pub(crate) castling_rights: CastlingRights,
    /// One entry per applied move plus the initial rights
    pub(crate) castle_rights_log: Vec<CastlingRights>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Standard starting position, white to move, full castling rights.
    pub fn new() -> Self {
        Self::with_kings(
            Setup::standard(),
            Square::new(7, 4),
            Square::new(0, 4),
        )
    }

    /// Start a game from a custom [`Setup`].
    ///
    /// Fails when either color does not have exactly one king.
    pub fn from_setup(setup: Setup) -> Result<Self> {
        let white_king = Self::locate_king(&setup.board, Color::White)?;
        let black_king = Self::locate_king(&setup.board, Color::Black)?;
        Ok(Self::with_kings(setup, white_king, black_king))
    }

    fn locate_king(board: &Board, color: Color) -> Result<Square> {
        let mut kings = board.find(color, Type::King);
        let square = kings.next().ok_or(EngineError::MissingKing(color))?;
        if kings.next().is_some() {
            return Err(EngineError::DuplicateKing(color));
        }
        Ok(square)
    }

    fn with_kings(setup: Setup, white_king_square: Square, black_king_square: Square) -> Self {
        let Setup {
            board,
            side_to_move,
            castling_rights,
        } = setup;

        Self {
            board,
            side_to_move,
            move_log: Vec::new(),
            white_king_square,
            black_king_square,
            in_check: false,
            pins: SmallVec::new(),
            checks: SmallVec::new(),
            checkmate: false,
            stalemate: false,
            en_passant_target: None,
            en_passant_log: vec![None],
            castling_rights,
            castle_rights_log: vec![castling_rights],
        }
    }

    // ===========================
    // Read-only access
    // ===========================

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn move_log(&self) -> &[Move] {
        &self.move_log
    }

    pub fn king_square(&self, color: Color) -> Square {
        match color {
            Color::White => self.white_king_square,
            Color::Black => self.black_king_square,
        }
    }

    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    /// Whether the side to move was in check at the last [`legal_moves`](Self::legal_moves) query
    pub fn in_check(&self) -> bool {
        self.in_check
    }

    pub fn pins(&self) -> &[Pin] {
        &self.pins
    }

    pub fn checks(&self) -> &[Check] {
        &self.checks
    }

    pub fn is_checkmate(&self) -> bool {
        self.checkmate
    }

    pub fn is_stalemate(&self) -> bool {
        self.stalemate
    }

    // ===========================
    // Move application
    // ===========================

    /// Apply a move proposed by the caller.
    ///
    /// The move must match (start, end, type) an entry of the current legal
    /// list; the generated entry is what gets applied. A promotion move needs
    /// `promotion`, any other move must pass `None`. On error the state is
    /// left untouched.
    pub fn make_move(&mut self, mv: Move, promotion: Option<Promotion>) -> Result<()> {
        let legal = match self.legal_moves().into_iter().find(|m| *m == mv) {
            Some(m) => m,
            None => {
                log::warn!("rejected illegal move {} for {}", mv, self.side_to_move);
                return Err(EngineError::IllegalMove {
                    notation: mv.notation(),
                });
            }
        };

        match (legal.is_pawn_promotion(), promotion) {
            (true, None) => {
                log::warn!("rejected promotion {} without a piece", legal);
                return Err(EngineError::MissingPromotion {
                    notation: legal.notation(),
                });
            }
            (false, Some(_)) => {
                log::warn!("rejected promotion piece for non-promotion {}", legal);
                return Err(EngineError::UnexpectedPromotion {
                    notation: legal.notation(),
                });
            }
            _ => {}
        }

        self.apply_move(legal, promotion);
        Ok(())
    }

    /// Apply a move the generator produced, without validation.
    ///
    /// `promotion` is only read for promotion moves.
    pub(crate) fn apply_move(&mut self, mv: Move, promotion: Option<Promotion>) {
        let color = mv.piece_moved.color;

        self.board.clear(mv.start);
        self.board.set(mv.end, mv.piece_moved);
        self.move_log.push(mv);
        self.side_to_move = self.side_to_move.opposite();

        if mv.piece_moved.piece_type == Type::King {
            self.set_king_square(color, mv.end);
        }

        match mv.move_type {
            MoveType::Normal => {}
            MoveType::EnPassant => self.board.clear(mv.capture_square()),
            MoveType::Promotion => {
                debug_assert!(promotion.is_some(), "promotion {} applied without a piece", mv);
                if let Some(kind) = promotion {
                    self.board.set(mv.end, Piece::new(color, kind.piece_type()));
                }
            }
            MoveType::Castling => {
                let (rook_from, rook_to) = Self::castle_rook_squares(&mv);
                self.board.set(rook_to, self.board.get(rook_from));
                self.board.clear(rook_from);
            }
        }

        self.en_passant_target = if mv.piece_moved.piece_type == Type::Pawn
            && mv.start.row.abs_diff(mv.end.row) == 2
        {
            Some(Square::new((mv.start.row + mv.end.row) / 2, mv.start.col))
        } else {
            None
        };
        self.en_passant_log.push(self.en_passant_target);

        self.update_castling_rights(&mv);
        self.castle_rights_log.push(self.castling_rights);

        self.reset_query_state();
        self.debug_check_kings();
        log::debug!("{} played {}", color, mv);
    }

    /// Reverse the most recent move. Returns `None` when there is nothing to undo.
    pub fn undo_move(&mut self) -> Option<Move> {
        let mv = self.move_log.pop()?;
        let color = mv.piece_moved.color;

        self.board.set(mv.start, mv.piece_moved);
        self.board.set(mv.end, mv.piece_captured);
        self.side_to_move = self.side_to_move.opposite();

        if mv.piece_moved.piece_type == Type::King {
            self.set_king_square(color, mv.start);
        }

        match mv.move_type {
            MoveType::EnPassant => {
                // captured pawn goes back beside the destination, not onto it
                self.board.clear(mv.end);
                self.board.set(mv.capture_square(), mv.piece_captured);
            }
            MoveType::Castling => {
                let (rook_from, rook_to) = Self::castle_rook_squares(&mv);
                self.board.set(rook_from, self.board.get(rook_to));
                self.board.clear(rook_to);
            }
            MoveType::Normal | MoveType::Promotion => {}
        }

        self.en_passant_log.pop();
        if let Some(&target) = self.en_passant_log.last() {
            self.en_passant_target = target;
        }
        debug_assert!(!mv.is_en_passant() || self.en_passant_target == Some(mv.end));

        self.castle_rights_log.pop();
        if let Some(&rights) = self.castle_rights_log.last() {
            self.castling_rights = rights;
        }

        self.reset_query_state();
        self.debug_check_kings();
        log::debug!("{} took back {}", color, mv);
        Some(mv)
    }

    /// Rook origin and destination for a castling move
    fn castle_rook_squares(mv: &Move) -> (Square, Square) {
        let row = mv.start.row;
        if mv.end.col > mv.start.col {
            (Square::new(row, 7), Square::new(row, 5))
        } else {
            (Square::new(row, 0), Square::new(row, 3))
        }
    }

    fn update_castling_rights(&mut self, mv: &Move) {
        match mv.piece_moved.piece_type {
            Type::King => self.castling_rights.revoke_all(mv.piece_moved.color),
            Type::Rook => self.castling_rights.revoke_corner(mv.start),
            _ => {}
        }
        if mv.piece_captured.piece_type == Type::Rook {
            self.castling_rights.revoke_corner(mv.capture_square());
        }
    }

    fn set_king_square(&mut self, color: Color, square: Square) {
        match color {
            Color::White => self.white_king_square = square,
            Color::Black => self.black_king_square = square,
        }
    }

    fn reset_query_state(&mut self) {
        self.in_check = false;
        self.pins.clear();
        self.checks.clear();
        self.checkmate = false;
        self.stalemate = false;
    }

    fn debug_check_kings(&self) {
        debug_assert!(
            self.board[self.white_king_square].is_kind(Color::White, Type::King),
            "white king cache {} out of sync",
            self.white_king_square
        );
        debug_assert!(
            self.board[self.black_king_square].is_kind(Color::Black, Type::King),
            "black king cache {} out of sync",
            self.black_king_square
        );
    }
}
