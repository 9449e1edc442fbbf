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

//! Detection of absolutely pinned pieces and the rays they are confined to.

use crate::{lookups, Bitboard, Board, Color, Piece, Square};

#[derive(Clone, Debug)]
/// The pinned pieces of one side, together with the set of squares each
/// pinned piece may still move to without exposing its king.
pub struct Pins {
    /// The squares holding pinned pieces.
    pinned: Bitboard,
    /// For each pinned square, the squares from the king (exclusive) through
    /// the pinning slider (inclusive). Entries for unpinned squares are
    /// meaningless.
    rays: [Bitboard; 64],
}

impl Pins {
    #[must_use]
    /// A pin result in which nothing is pinned.
    pub fn none() -> Pins {
        Pins {
            pinned: Bitboard::EMPTY,
            rays: [Bitboard::EMPTY; 64],
        }
    }

    #[must_use]
    /// Compute the pieces of color `us` which are pinned against the king on
    /// `king_sq`.
    ///
    /// A piece is pinned when it is the only piece standing on a ray between
    /// its king and an enemy slider that travels along that ray. An enemy
    /// slider directly adjacent to the king is a check, not a pin, and does
    /// not appear in the result; neither do rays holding two or more
    /// friendly pieces.
    pub fn compute(board: &Board, king_sq: Square, us: Color) -> Pins {
        let mut pins = Pins::none();
        let occupancy = board.occupancy();
        let friendly = board.color_occupancy(us);
        let them = !us;
        let queens = board.pieces(them, Piece::Queen);

        for dir in 0..8 {
            let full_ray = lookups::ray(king_sq, dir);
            let mut blockers = full_ray & occupancy;
            let Some(first) = lookups::nearest_on_ray(blockers, dir) else {
                continue;
            };
            if !friendly.contains(first) {
                continue;
            }
            blockers.remove(first);
            let Some(second) = lookups::nearest_on_ray(blockers, dir) else {
                continue;
            };
            // even ray indices are orthogonal, odd ones diagonal
            let sliders = if dir % 2 == 0 {
                board.pieces(them, Piece::Rook) | queens
            } else {
                board.pieces(them, Piece::Bishop) | queens
            };
            if sliders.contains(second) {
                pins.pinned.insert(first);
                pins.rays[first as usize] =
                    lookups::between(king_sq, second) | Bitboard::from(second);
            }
        }

        pins
    }

    #[inline(always)]
    #[must_use]
    /// The set of all pinned squares.
    pub fn pinned(&self) -> Bitboard {
        self.pinned
    }

    #[inline(always)]
    #[must_use]
    /// Determine whether the piece on `sq` is pinned.
    pub fn contains(&self, sq: Square) -> bool {
        self.pinned.contains(sq)
    }

    #[inline(always)]
    #[must_use]
    /// Get the squares the piece on `sq` may move to without exposing its
    /// king: the pin ray for pinned pieces, and every square otherwise.
    pub fn ray(&self, sq: Square) -> Bitboard {
        if self.pinned.contains(sq) {
            self.rays[sq as usize]
        } else {
            Bitboard::ALL
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pins_for(board: &Board, us: Color) -> Pins {
        let king_sq = board.pieces(us, Piece::King).lsb().unwrap();
        Pins::compute(board, king_sq, us)
    }

    #[test]
    /// A lone king has no pinned pieces.
    fn empty_board_no_pins() {
        let mut b = Board::empty();
        b.add_piece(Square::E4, Piece::King, Color::White);
        let pins = pins_for(&b, Color::White);
        assert!(pins.pinned().is_empty());
        assert_eq!(pins.ray(Square::E5), Bitboard::ALL);
    }

    #[test]
    /// Pins on all four orthogonal rays are found in one pass.
    fn multiple_orthogonal_pins() {
        let mut b = Board::empty();
        b.add_piece(Square::E4, Piece::King, Color::White);
        b.add_piece(Square::E6, Piece::Pawn, Color::White);
        b.add_piece(Square::E8, Piece::Rook, Color::Black);
        b.add_piece(Square::E2, Piece::Knight, Color::White);
        b.add_piece(Square::E1, Piece::Rook, Color::Black);
        b.add_piece(Square::G4, Piece::Bishop, Color::White);
        b.add_piece(Square::H4, Piece::Rook, Color::Black);
        b.add_piece(Square::C4, Piece::Rook, Color::White);
        b.add_piece(Square::A4, Piece::Rook, Color::Black);

        let pins = pins_for(&b, Color::White);
        assert_eq!(pins.pinned().len(), 4);
        for sq in [Square::E6, Square::E2, Square::G4, Square::C4] {
            assert!(pins.contains(sq), "{sq} should be pinned");
        }
    }

    #[test]
    /// Pins on the diagonal rays are found, and only sliders of the right
    /// kind create them.
    fn diagonal_pins() {
        let mut b = Board::empty();
        b.add_piece(Square::E4, Piece::King, Color::White);
        b.add_piece(Square::F5, Piece::Pawn, Color::White);
        b.add_piece(Square::H7, Piece::Bishop, Color::Black);
        // a rook on the diagonal pins nothing
        b.add_piece(Square::D5, Piece::Knight, Color::White);
        b.add_piece(Square::B7, Piece::Rook, Color::Black);

        let pins = pins_for(&b, Color::White);
        assert!(pins.contains(Square::F5));
        assert!(!pins.contains(Square::D5));
    }

    #[test]
    /// The pin ray runs from beside the king through the pinner, so the
    /// pinned piece may capture its pinner or slide along the ray, and
    /// nowhere else.
    fn pin_ray_contents() {
        let mut b = Board::empty();
        b.add_piece(Square::E1, Piece::King, Color::White);
        b.add_piece(Square::E4, Piece::Rook, Color::White);
        b.add_piece(Square::E7, Piece::Queen, Color::Black);

        let pins = pins_for(&b, Color::White);
        assert!(pins.contains(Square::E4));
        let ray = pins.ray(Square::E4);
        // the king's neighbor toward the pinner and the pinner itself
        assert!(ray.contains(Square::E2));
        assert!(ray.contains(Square::E7));
        assert!(!ray.contains(Square::E1));
        assert!(!ray.contains(Square::E8));
        assert!(!ray.contains(Square::D4));
        assert_eq!(ray.len(), 6);
    }

    #[test]
    /// An adjacent enemy slider is a check, not a pin.
    fn adjacent_slider_is_not_a_pin() {
        let mut b = Board::empty();
        b.add_piece(Square::E4, Piece::King, Color::White);
        b.add_piece(Square::E5, Piece::Rook, Color::Black);
        let pins = pins_for(&b, Color::White);
        assert!(pins.pinned().is_empty());
    }

    #[test]
    /// Two friendly pieces on the ray shield each other from the pin.
    fn two_blockers_no_pin() {
        let mut b = Board::empty();
        b.add_piece(Square::E4, Piece::King, Color::White);
        b.add_piece(Square::E5, Piece::Pawn, Color::White);
        b.add_piece(Square::E6, Piece::Knight, Color::White);
        b.add_piece(Square::E8, Piece::Rook, Color::Black);
        let pins = pins_for(&b, Color::White);
        assert!(pins.pinned().is_empty());
    }

    #[test]
    /// An enemy piece standing in front of the slider blocks the pin.
    fn enemy_blocker_no_pin() {
        let mut b = Board::empty();
        b.add_piece(Square::E4, Piece::King, Color::White);
        b.add_piece(Square::E5, Piece::Pawn, Color::White);
        b.add_piece(Square::E6, Piece::Knight, Color::Black);
        b.add_piece(Square::E8, Piece::Rook, Color::Black);
        let pins = pins_for(&b, Color::White);
        assert!(pins.pinned().is_empty());
    }
}
