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

//! Legal move generation for the king, including castling.

use super::MoveList;
use crate::{lookups, Bitboard, Board, Color, Move, Piece, Square};

/// Append the king's ordinary steps onto `moves`. `enemy_attacks` must have
/// been computed with this king removed from the occupancy, or the king
/// will happily step backward along a checking ray.
pub(super) fn generate(
    board: &Board,
    us: Color,
    king_sq: Square,
    enemy_attacks: Bitboard,
    moves: &mut MoveList,
) {
    let friendly = board.color_occupancy(us);
    let enemy = board.color_occupancy(!us);

    for to in lookups::king_attacks(king_sq) & !friendly & !enemy_attacks {
        if enemy.contains(to) {
            moves.push(Move::capture(king_sq, to));
        } else {
            moves.push(Move::quiet(king_sq, to));
        }
    }
}

/// Append the available castling moves onto `moves`. The caller must ensure
/// the king is not currently in check; castling out of check is never
/// legal, so this is simply not called then.
pub(super) fn generate_castles(
    board: &Board,
    us: Color,
    king_sq: Square,
    enemy_attacks: Bitboard,
    moves: &mut MoveList,
) {
    let home = match us {
        Color::White => Square::E1,
        Color::Black => Square::E8,
    };
    if king_sq != home {
        // rights without a king at home describe an unreachable position
        return;
    }
    let occupancy = board.occupancy();
    let rooks = board.pieces(us, Piece::Rook);

    // the squares between king and rook which must be empty, and the two
    // the king touches which must also be safe
    let (kingside_open, kingside_safe, kingside_rook, kingside_dest) = match us {
        Color::White => (
            Bitboard::new(0x0000_0000_0000_0060), // F1 | G1
            Bitboard::new(0x0000_0000_0000_0060),
            Square::H1,
            Square::G1,
        ),
        Color::Black => (
            Bitboard::new(0x6000_0000_0000_0000), // F8 | G8
            Bitboard::new(0x6000_0000_0000_0000),
            Square::H8,
            Square::G8,
        ),
    };
    if board.castle_rights().is_kingside_castle_legal(us)
        && rooks.contains(kingside_rook)
        && (occupancy & kingside_open).is_empty()
        && (enemy_attacks & kingside_safe).is_empty()
    {
        moves.push(Move::castle(king_sq, kingside_dest));
    }

    // queenside: B1 need only be empty, since the king never touches it
    let (queenside_open, queenside_safe, queenside_rook, queenside_dest) = match us {
        Color::White => (
            Bitboard::new(0x0000_0000_0000_000E), // B1 | C1 | D1
            Bitboard::new(0x0000_0000_0000_000C), // C1 | D1
            Square::A1,
            Square::C1,
        ),
        Color::Black => (
            Bitboard::new(0x0E00_0000_0000_0000), // B8 | C8 | D8
            Bitboard::new(0x0C00_0000_0000_0000), // C8 | D8
            Square::A8,
            Square::C8,
        ),
    };
    if board.castle_rights().is_queenside_castle_legal(us)
        && rooks.contains(queenside_rook)
        && (occupancy & queenside_open).is_empty()
        && (enemy_attacks & queenside_safe).is_empty()
    {
        moves.push(Move::castle(king_sq, queenside_dest));
    }
}
