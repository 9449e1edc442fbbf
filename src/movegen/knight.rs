/*
  Gambit, a library for legal chess move generation.
  Copyright (C) 2026 The Gambit Authors.

  Gambit is free software: you can redistribute it and/or modify
  it under the terms of the GNU General Public License as published by
  the Free Software Foundation, either version 3 of the License, or
  (at your option) any later version.

  Gambit is distributed in the hope that it will be useful,
  but WITHOUT ANY WARRANTY; without even the implied warranty of
  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
  GNU General Public License for more details.

  You should have received a copy of the GNU General Public License
  along with this program.  If not, see <http://www.gnu.org/licenses/>.
*/

//! Legal move generation for knights.

use super::{MoveList, Pins};
use crate::{lookups, Bitboard, Board, Color, Move, Piece};

/// Append all legal knight moves for `us` onto `moves`. A pinned knight
/// never moves: no knight step stays on any ray.
pub(super) fn generate(
    board: &Board,
    us: Color,
    check_mask: Bitboard,
    pins: &Pins,
    moves: &mut MoveList,
) {
    let friendly = board.color_occupancy(us);
    let enemy = board.color_occupancy(!us);

    for from in board.pieces(us, Piece::Knight) & !pins.pinned() {
        for to in lookups::knight_attacks(from) & !friendly & check_mask {
            if enemy.contains(to) {
                moves.push(Move::capture(from, to));
            } else {
                moves.push(Move::quiet(from, to));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::legal_moves;
    use crate::{Board, Move, Square};

    #[test]
    /// A pinned knight has no legal moves at all.
    fn pinned_knight_is_frozen() {
        // the knight on E4 is pinned to the king on E1 by the rook on E8
        let b = Board::from_fen("4r2k/8/8/8/4N3/8/8/4K3 w - - 0 1").unwrap();
        let moves = legal_moves(&b);
        assert!(!moves.iter().any(|m| m.from() == Square::E4));
    }

    #[test]
    /// An unobstructed central knight reaches all eight destinations.
    fn central_knight_moves() {
        let b = Board::from_fen("4k3/8/8/8/3N4/8/8/4K3 w - - 0 1").unwrap();
        let knight_moves: Vec<Move> = legal_moves(&b)
            .into_iter()
            .filter(|m| m.from() == Square::D4)
            .collect();
        assert_eq!(knight_moves.len(), 8);
    }

    #[test]
    /// Knights may interpose to break a check, and only interpositions on
    /// the checking ray are generated.
    fn knight_blocks_check() {
        // the rook on E8 checks the king on E1; the knight on C5 can block
        // on E4 or E6
        let b = Board::from_fen("4r2k/8/8/2N5/8/8/8/4K3 w - - 0 1").unwrap();
        let moves = legal_moves(&b);
        assert!(moves.contains(&Move::quiet(Square::C5, Square::E4)));
        assert!(moves.contains(&Move::quiet(Square::C5, Square::E6)));
        // moves off the checking ray are not generated
        assert!(!moves.contains(&Move::quiet(Square::C5, Square::A4)));
        assert!(!moves.contains(&Move::quiet(Square::C5, Square::D3)));
    }
}
