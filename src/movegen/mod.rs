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

//! Generation of legal moves in a position.
//!
//! The pipeline runs in a fixed order for each call to [`legal_moves`]:
//! locate the king, compute the enemy's attacked squares with the king
//! lifted off the board, collect the checkers, compute pins and the check
//! mask, and only then run the per-piece generators. Every move that comes
//! out is legal; there is no retroactive filtering step.

mod king;
mod knight;
mod pawn;
mod pins;
mod slider;

pub use pins::Pins;

use arrayvec::ArrayVec;

use super::{lookups, Bitboard, Board, Color, Move, Piece, Square};

/// A list of moves, allocated in place. No chess position has more than 218
/// legal moves, so the capacity is never a constraint in practice.
pub type MoveList = ArrayVec<Move, 256>;

#[must_use]
/// Get all legal moves in a position.
///
/// An empty result means the game is over: checkmate if [`checkers`] is
/// nonempty and stalemate otherwise.
///
/// # Examples
///
/// ```
/// use gambit::{movegen::legal_moves, Board};
///
/// let board = Board::new();
/// assert_eq!(legal_moves(&board).len(), 20);
/// ```
pub fn legal_moves(board: &Board) -> MoveList {
    let mut moves = MoveList::new();
    let us = board.side_to_move();
    let occupancy = board.occupancy();

    match board.pieces(us, Piece::King).lsb() {
        Some(king_sq) => {
            // lift the king off the board so sliders attack through him;
            // otherwise he could retreat along a check ray onto a square
            // that looks safe
            let seen_through_king = occupancy ^ Bitboard::from(king_sq);
            let enemy_attacks = attacked_squares(board, !us, seen_through_king);
            let checkers = square_attackers_occupancy(board, king_sq, !us, occupancy);

            if checkers.more_than_one() {
                // in double check, only the king may move
                king::generate(board, us, king_sq, enemy_attacks, &mut moves);
                return moves;
            }

            let pins = Pins::compute(board, king_sq, us);
            let mask = check_mask(king_sq, checkers);
            pawn::generate(board, us, Some(king_sq), mask, &pins, &mut moves);
            knight::generate(board, us, mask, &pins, &mut moves);
            slider::generate_bishops(board, us, mask, &pins, &mut moves);
            slider::generate_rooks(board, us, mask, &pins, &mut moves);
            slider::generate_queens(board, us, mask, &pins, &mut moves);
            king::generate(board, us, king_sq, enemy_attacks, &mut moves);
            if checkers.is_empty() {
                king::generate_castles(board, us, king_sq, enemy_attacks, &mut moves);
            }
        }
        None => {
            // test fixtures may set up positions with no king at all; with
            // no king there are no checks and no pins
            let pins = Pins::none();
            pawn::generate(board, us, None, Bitboard::ALL, &pins, &mut moves);
            knight::generate(board, us, Bitboard::ALL, &pins, &mut moves);
            slider::generate_bishops(board, us, Bitboard::ALL, &pins, &mut moves);
            slider::generate_rooks(board, us, Bitboard::ALL, &pins, &mut moves);
            slider::generate_queens(board, us, Bitboard::ALL, &pins, &mut moves);
        }
    }

    moves
}

#[must_use]
/// Get the pieces of the color opposing the side to move which are currently
/// attacking its king. An empty result means the side to move is not in
/// check.
pub fn checkers(board: &Board) -> Bitboard {
    let us = board.side_to_move();
    match board.pieces(us, Piece::King).lsb() {
        Some(king_sq) => square_attackers(board, king_sq, !us),
        None => Bitboard::EMPTY,
    }
}

#[inline(always)]
#[must_use]
/// Get the attackers of a given color on a square, as a `Bitboard` of the
/// attackers' squares.
///
/// # Examples
///
/// ```
/// use gambit::{movegen::square_attackers, Bitboard, Board, Color, Square};
///
/// let board = Board::new();
/// let mut attackers = Bitboard::EMPTY;
/// attackers.insert(Square::E1);
/// attackers.insert(Square::D1);
/// attackers.insert(Square::F1);
/// attackers.insert(Square::G1);
/// assert_eq!(square_attackers(&board, Square::E2, Color::White), attackers);
/// ```
pub fn square_attackers(board: &Board, sq: Square, color: Color) -> Bitboard {
    square_attackers_occupancy(board, sq, color, board.occupancy())
}

#[inline(always)]
#[must_use]
/// In a given board state, is a square attacked by the given color?
/// Squares which are threatened only by non-capture moves (i.e. pawn
/// pushes) do not qualify as attacked.
pub fn is_square_attacked_by(board: &Board, sq: Square, color: Color) -> bool {
    !square_attackers(board, sq, color).is_empty()
}

/// Same functionality as `square_attackers`, but uses the provided
/// `occupancy` bitboard (as opposed to the board's occupancy).
pub(crate) fn square_attackers_occupancy(
    board: &Board,
    sq: Square,
    color: Color,
    occupancy: Bitboard,
) -> Bitboard {
    let mut attackers = Bitboard::EMPTY;

    // a pawn of color `color` attacks `sq` exactly when a pawn of the other
    // color on `sq` would attack the pawn's square
    attackers |= lookups::pawn_attacks(!color, sq) & board.pieces(color, Piece::Pawn);

    attackers |= lookups::knight_attacks(sq) & board.pieces(color, Piece::Knight);
    attackers |= lookups::king_attacks(sq) & board.pieces(color, Piece::King);

    let queens = board.pieces(color, Piece::Queen);
    attackers |=
        lookups::rook_attacks(occupancy, sq) & (board.pieces(color, Piece::Rook) | queens);
    attackers |=
        lookups::bishop_attacks(occupancy, sq) & (board.pieces(color, Piece::Bishop) | queens);

    attackers
}

/// Compute the full set of squares attacked by `color`, with sliders seeing
/// along the given occupancy. The caller chooses whether the defending king
/// participates in that occupancy; for king-safety queries he must not.
pub(crate) fn attacked_squares(board: &Board, color: Color, occupancy: Bitboard) -> Bitboard {
    let mut attacks = Bitboard::EMPTY;

    for sq in board.pieces(color, Piece::Pawn) {
        attacks |= lookups::pawn_attacks(color, sq);
    }
    for sq in board.pieces(color, Piece::Knight) {
        attacks |= lookups::knight_attacks(sq);
    }
    for sq in board.pieces(color, Piece::King) {
        attacks |= lookups::king_attacks(sq);
    }
    let queens = board.pieces(color, Piece::Queen);
    for sq in board.pieces(color, Piece::Bishop) | queens {
        attacks |= lookups::bishop_attacks(occupancy, sq);
    }
    for sq in board.pieces(color, Piece::Rook) | queens {
        attacks |= lookups::rook_attacks(occupancy, sq);
    }

    attacks
}

/// Compute the mask that any non-king move's destination must intersect.
/// With no checkers, moves are unconstrained. With one checker, a move must
/// capture it or interpose on the checking ray; a knight or pawn checker
/// leaves nothing to interpose on. With two, no non-king move helps.
fn check_mask(king_sq: Square, checkers: Bitboard) -> Bitboard {
    if checkers.is_empty() {
        return Bitboard::ALL;
    }
    if checkers.more_than_one() {
        return Bitboard::EMPTY;
    }
    match checkers.lsb() {
        Some(checker_sq) => checkers | lookups::between(king_sq, checker_sq),
        None => Bitboard::EMPTY,
    }
}
