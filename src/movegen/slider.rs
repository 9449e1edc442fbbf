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

//! Legal move generation for the sliding pieces: bishops, rooks, and
//! queens.

use super::{MoveList, Pins};
use crate::{lookups, Bitboard, Board, Color, Move, Piece, Square};

/// Append all legal bishop moves for `us` onto `moves`.
pub(super) fn generate_bishops(
    board: &Board,
    us: Color,
    check_mask: Bitboard,
    pins: &Pins,
    moves: &mut MoveList,
) {
    sliding_moves(board, us, Piece::Bishop, lookups::bishop_attacks, check_mask, pins, moves);
}

/// Append all legal rook moves for `us` onto `moves`.
pub(super) fn generate_rooks(
    board: &Board,
    us: Color,
    check_mask: Bitboard,
    pins: &Pins,
    moves: &mut MoveList,
) {
    sliding_moves(board, us, Piece::Rook, lookups::rook_attacks, check_mask, pins, moves);
}

/// Append all legal queen moves for `us` onto `moves`.
pub(super) fn generate_queens(
    board: &Board,
    us: Color,
    check_mask: Bitboard,
    pins: &Pins,
    moves: &mut MoveList,
) {
    sliding_moves(board, us, Piece::Queen, lookups::queen_attacks, check_mask, pins, moves);
}

/// The shared slider loop: attacks against full occupancy, masked down by
/// friendly pieces, the check mask, and the mover's pin ray.
fn sliding_moves(
    board: &Board,
    us: Color,
    pt: Piece,
    attacks: fn(Bitboard, Square) -> Bitboard,
    check_mask: Bitboard,
    pins: &Pins,
    moves: &mut MoveList,
) {
    let occupancy = board.occupancy();
    let friendly = board.color_occupancy(us);
    let enemy = board.color_occupancy(!us);

    for from in board.pieces(us, pt) {
        let targets = attacks(occupancy, from) & !friendly & check_mask & pins.ray(from);
        for to in targets {
            if enemy.contains(to) {
                moves.push(Move::capture(from, to));
            } else {
                moves.push(Move::quiet(from, to));
            }
        }
    }
}
