use smallvec::SmallVec;

use super::*;

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Checkmate { winner: Color },
    Stalemate,
}

impl GameState {
    /// All legal moves for the side to move, in board order.
    ///
    /// Recomputes `in_check`, `pins` and `checks` from the king's square
    /// before generating, and sets `checkmate` / `stalemate` from the result.
    /// Both flags are cleared whenever a move is available.
    pub fn legal_moves(&mut self) -> Vec<Move> {
        self.refresh_pins_and_checks();

        let color = self.side_to_move;
        let king = self.king_square(color);
        let mut moves = Vec::with_capacity(48); // Typical position has 30-40 legal moves

        match self.checks.len() {
            0 => self.all_piece_moves_into(&mut moves),
            1 => {
                self.all_piece_moves_into(&mut moves);
                let rescue = self.rescue_squares(king, self.checks[0]);
                // king steps and en passant were fully validated when generated
                moves.retain(|m| {
                    m.piece_moved.piece_type == Type::King
                        || m.is_en_passant()
                        || rescue.contains(&m.end)
                });
            }
            // no single move can block or capture two attackers
            _ => self.king_moves_into(king, &mut moves),
        }

        self.checkmate = moves.is_empty() && self.in_check;
        self.stalemate = moves.is_empty() && !self.in_check;

        if self.checkmate {
            log::info!("checkmate, {} wins", color.opposite());
        } else if self.stalemate {
            log::info!("stalemate, {} has no moves", color);
        }
        log::trace!("{} legal moves for {}", moves.len(), color);

        moves
    }

    /// Squares a non-king move may land on to answer a single check:
    /// the checker itself, plus the line between it and the king for sliders.
    fn rescue_squares(&self, king: Square, check: Check) -> SmallVec<[Square; 8]> {
        let mut squares = SmallVec::new();

        match self.board[check.attacker].piece_type {
            Type::Knight | Type::Pawn => squares.push(check.attacker),
            _ => {
                let (dr, dc) = check.direction;
                let mut sq = king;
                while let Some(next) = sq.offset(dr, dc) {
                    sq = next;
                    squares.push(sq);
                    if sq == check.attacker {
                        break;
                    }
                }
            }
        }

        squares
    }

    /// Looks up the legal move from `start` to `end`, for callers that only
    /// know the two squares a user picked.
    pub fn find_move(&mut self, start: Square, end: Square) -> Option<Move> {
        self.legal_moves()
            .into_iter()
            .find(|m| m.start == start && m.end == end)
    }

    /// Result of the last [`legal_moves`](Self::legal_moves) query, if the game is over.
    pub fn outcome(&self) -> Option<Outcome> {
        if self.checkmate {
            Some(Outcome::Checkmate {
                winner: self.side_to_move.opposite(),
            })
        } else if self.stalemate {
            Some(Outcome::Stalemate)
        } else {
            None
        }
    }

    /// Neither side can possibly mate: K v K, K+B v K or K+N v K.
    pub fn is_insufficient_material(&self) -> bool {
        let mut minor_pieces = 0;
        for (_, piece) in self.board.pieces() {
            match piece.piece_type {
                Type::King => {}
                Type::Bishop | Type::Knight => minor_pieces += 1,
                _ => return false,
            }
        }
        minor_pieces <= 1
    }

    /// Perft (Performance Test) - counts leaf nodes at a given depth.
    /// Every promotion move counts once per piece it can become.
    pub fn perft(&mut self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.legal_moves();
        let mut nodes = 0;

        for mv in moves {
            if mv.is_pawn_promotion() {
                for promotion in Promotion::ALL {
                    self.apply_move(mv, Some(promotion));
                    nodes += self.perft(depth - 1);
                    self.undo_move();
                }
            } else if depth == 1 {
                // Bulk counting optimization for depth 1
                nodes += 1;
            } else {
                self.apply_move(mv, None);
                nodes += self.perft(depth - 1);
                self.undo_move();
            }
        }

        nodes
    }
}
