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

//! Legal move generation for pawns: pushes, captures, promotions, and en
//! passant.

use super::{square_attackers_occupancy, MoveList};
use crate::{lookups, Bitboard, Board, Color, Move, Piece, Square};

/// Append all legal pawn moves for `us` onto `moves`.
///
/// `king_sq` is needed only for the en passant verification; positions
/// without a king (test fixtures) pass `None` and get their en passant moves
/// unverified.
pub(super) fn generate(
    board: &Board,
    us: Color,
    king_sq: Option<Square>,
    check_mask: Bitboard,
    pins: &super::Pins,
    moves: &mut MoveList,
) {
    let occupancy = board.occupancy();
    let enemy = board.color_occupancy(!us);
    let promote_rank = us.pawn_promote_rank();

    for from in board.pieces(us, Piece::Pawn) {
        let pin_ray = pins.ray(from);

        // single push, which may promote
        let push = lookups::pawn_push(us, from) & !occupancy;
        for to in push & check_mask & pin_ray {
            if promote_rank.contains(to) {
                for promotion in Piece::PROMOTION_TYPES {
                    moves.push(Move::promoting(from, to, promotion));
                }
            } else {
                moves.push(Move::quiet(from, to));
            }
        }

        // double push, only through an empty single-push square
        if !push.is_empty() {
            let doubles = lookups::pawn_double_push(us, from) & !occupancy;
            for to in doubles & check_mask & pin_ray {
                moves.push(Move::quiet(from, to));
            }
        }

        // ordinary captures, which may promote
        for to in lookups::pawn_attacks(us, from) & enemy & check_mask & pin_ray {
            if promote_rank.contains(to) {
                for promotion in Piece::PROMOTION_TYPES {
                    moves.push(Move::capture_promoting(from, to, promotion));
                }
            } else {
                moves.push(Move::capture(from, to));
            }
        }

        // en passant
        if let Some(ep) = board.en_passant_square() {
            if us.en_passant_rank().contains(from)
                && lookups::pawn_attacks(us, from).contains(ep)
                && en_passant_is_legal(board, us, king_sq, from, ep, check_mask, pin_ray)
            {
                moves.push(Move::en_passant(from, ep));
            }
        }
    }
}

/// Decide whether the geometrically possible en passant capture from `from`
/// to `ep` is legal.
///
/// The check mask admits the move when it captures the checker (the pawn
/// behind `ep`) or interposes on the checking ray by landing on `ep`. The
/// pin ray applies to the landing square as for any other pawn capture. The
/// last step simulates the capture on a scratch occupancy: removing two
/// pawns from one rank can uncover a horizontal attack that pin detection
/// never sees, so the king's attackers are recomputed on the post-capture
/// occupancy without ever mutating the board.
fn en_passant_is_legal(
    board: &Board,
    us: Color,
    king_sq: Option<Square>,
    from: Square,
    ep: Square,
    check_mask: Bitboard,
    pin_ray: Bitboard,
) -> bool {
    let them = !us;
    let captured_sq = ep + them.pawn_direction();
    let ep_bb = Bitboard::from(ep);
    let captured_bb = Bitboard::from(captured_sq);

    if ((ep_bb | captured_bb) & check_mask).is_empty() {
        return false;
    }
    if (ep_bb & pin_ray).is_empty() {
        return false;
    }

    let Some(king_sq) = king_sq else {
        return true;
    };
    let scratch = board.occupancy() ^ Bitboard::from(from) ^ captured_bb ^ ep_bb;
    // the captured pawn is still present on the piece bitboards, so lift it
    // out of the attacker set by hand
    let attackers = square_attackers_occupancy(board, king_sq, them, scratch) & !captured_bb;
    attackers.is_empty()
}
