use smallvec::SmallVec;

use super::tables::*;
use super::*;

/// A friendly piece that may only move along `direction` (pointing away from the king).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pin {
    pub square: Square,
    pub direction: Direction,
}

/// An enemy piece attacking the king. `direction` points from the king toward
/// the attacker; for a knight it is the knight's jump offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Check {
    pub attacker: Square,
    pub direction: Direction,
}

/// Result of one king-centric scan
#[derive(Debug, Clone, Default)]
pub struct KingSafety {
    pub in_check: bool,
    pub pins: SmallVec<[Pin; 8]>,
    pub checks: SmallVec<[Check; 4]>,
}

impl GameState {
    /// Scan outward from `origin` as if a `color` king stood there.
    ///
    /// Walks the eight rays and the eight knight jumps once, collecting checks
    /// and pins together. The king of `color` never counts as a blocker, so
    /// the scan stays valid when `origin` is a square the king is about to
    /// step onto.
    pub fn scan_from(&self, origin: Square, color: Color) -> KingSafety {
        Self::scan_board(&self.board, origin, color)
    }

    /// [`scan_from`](Self::scan_from) over an arbitrary board, used for scratch copies.
    pub(crate) fn scan_board(board: &Board, origin: Square, color: Color) -> KingSafety {
        let mut safety = KingSafety::default();

        for &dir in &ALL_DIRECTIONS {
            let mut possible_pin: Option<Square> = None;

            for distance in 1..8i8 {
                let Some(sq) = origin.offset(dir.0 * distance, dir.1 * distance) else {
                    break;
                };
                let piece = board[sq];

                if piece.is_none() || piece.is_kind(color, Type::King) {
                    continue;
                }

                if piece.color == color {
                    if possible_pin.is_none() {
                        possible_pin = Some(sq);
                        continue;
                    }
                    // second friendly piece shields the ray
                    break;
                }

                if Self::attacks_along(piece.piece_type, dir, distance, color) {
                    match possible_pin {
                        None => {
                            safety.in_check = true;
                            safety.checks.push(Check {
                                attacker: sq,
                                direction: dir,
                            });
                        }
                        Some(pinned) => safety.pins.push(Pin {
                            square: pinned,
                            direction: dir,
                        }),
                    }
                }
                break;
            }
        }

        for &jump in &KNIGHT_JUMPS {
            let Some(sq) = origin.offset(jump.0, jump.1) else {
                continue;
            };
            if board[sq].is_kind(color.opposite(), Type::Knight) {
                safety.in_check = true;
                safety.checks.push(Check {
                    attacker: sq,
                    direction: jump,
                });
            }
        }

        safety
    }

    /// Can an enemy `piece_type` found `distance` squares along `dir` hit a `color` king?
    fn attacks_along(piece_type: Type, dir: Direction, distance: i8, color: Color) -> bool {
        match piece_type {
            Type::Queen => true,
            Type::Rook => is_orthogonal(dir),
            Type::Bishop => !is_orthogonal(dir),
            Type::King => distance == 1,
            // enemy pawns sit on the side the king's own pawns advance toward
            Type::Pawn => distance == 1 && !is_orthogonal(dir) && dir.0 == color.pawn_direction(),
            Type::Knight | Type::None => false,
        }
    }

    /// True when a `color` king standing on `square` would be attacked.
    pub fn is_square_attacked(&self, square: Square, color: Color) -> bool {
        self.scan_from(square, color).in_check
    }

    /// Pin direction recorded for the piece on `square`, if it is pinned.
    pub(crate) fn pin_on(&self, square: Square) -> Option<Direction> {
        self.pins
            .iter()
            .find(|pin| pin.square == square)
            .map(|pin| pin.direction)
    }

    /// Refresh the per-query `in_check`, `pins` and `checks` fields for the side to move.
    pub(crate) fn refresh_pins_and_checks(&mut self) {
        let color = self.side_to_move;
        let KingSafety {
            in_check,
            pins,
            checks,
        } = self.scan_from(self.king_square(color), color);

        self.in_check = in_check;
        self.pins = pins;
        self.checks = checks;
    }
}
