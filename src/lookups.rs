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

//! Precomputed lookup tables for move generation, and the classical ray-scan
//! attack computations built on top of them.
//!
//! Every table here is a pure function of board geometry: nothing depends on
//! position state. The tables are created once, on first use, and shared for
//! the life of the process.

use once_cell::sync::Lazy;

use super::{Bitboard, Color, Direction, Square};

/// The order in which the ray tables are indexed: north, northeast, east,
/// southeast, south, southwest, west, northwest. Even indices are the rook
/// directions and odd indices the bishop directions; opposite directions
/// differ by 4.
pub(crate) const RAY_DIRECTIONS: [Direction; 8] = [
    Direction::NORTH,
    Direction::NORTHEAST,
    Direction::EAST,
    Direction::SOUTHEAST,
    Direction::SOUTH,
    Direction::SOUTHWEST,
    Direction::WEST,
    Direction::NORTHWEST,
];

/// The ray table indices along which a rook moves.
pub(crate) const ROOK_RAYS: [usize; 4] = [0, 2, 4, 6];

/// The ray table indices along which a bishop moves.
pub(crate) const BISHOP_RAYS: [usize; 4] = [1, 3, 5, 7];

/// For each direction and square, every square strictly past the origin in
/// that direction, up to the edge of the board.
static RAYS: Lazy<[[Bitboard; 64]; 8]> = Lazy::new(|| {
    let mut rays = [[Bitboard::EMPTY; 64]; 8];
    for (dir_idx, dir) in RAY_DIRECTIONS.iter().enumerate() {
        for sq in Bitboard::ALL {
            let mut ray = Bitboard::EMPTY;
            let mut cur = sq;
            loop {
                let next = cur + *dir;
                // square addition wraps modulo 64, so a step that leaves the
                // board shows up as a jump of more than one king-move
                if next.chebyshev_to(cur) != 1 {
                    break;
                }
                ray.insert(next);
                cur = next;
            }
            rays[dir_idx][sq as usize] = ray;
        }
    }
    rays
});

/// A lookup table for the squares strictly between two other squares, either
/// down a rank or file like a rook or along a diagonal like a bishop.
/// `BETWEEN[A1][A3]` contains A2 as its only active square; unaligned pairs
/// map to the empty bitboard.
static BETWEEN: Lazy<[[Bitboard; 64]; 64]> = Lazy::new(|| {
    let mut between = [[Bitboard::EMPTY; 64]; 64];

    for dir_idx in 0..8 {
        let opposite = (dir_idx + 4) % 8;
        for sq1 in Bitboard::ALL {
            for sq2 in RAYS[dir_idx][sq1 as usize] {
                between[sq1 as usize][sq2 as usize] =
                    RAYS[dir_idx][sq1 as usize] & RAYS[opposite][sq2 as usize];
            }
        }
    }

    between
});

/// A bitboard of all the squares a knight can attack if its position is the
/// index of the list.
static KNIGHT_ATTACKS: Lazy<[Bitboard; 64]> =
    Lazy::new(|| create_step_attacks(&Direction::KNIGHT_STEPS, 2));

/// A bitboard of all the squares a king can attack if his position is the
/// index in the list.
static KING_ATTACKS: Lazy<[Bitboard; 64]> =
    Lazy::new(|| create_step_attacks(&Direction::KING_STEPS, 1));

/// A bitboard of all the squares which a pawn on the given square can
/// attack. The first index is for White's pawn attacks, the second for
/// Black's. Push squares are never included.
static PAWN_ATTACKS: Lazy<[[Bitboard; 64]; 2]> = Lazy::new(|| {
    [
        create_step_attacks(&[Direction::NORTHEAST, Direction::NORTHWEST], 1),
        create_step_attacks(&[Direction::SOUTHEAST, Direction::SOUTHWEST], 1),
    ]
});

/// The single-push destination of a pawn on the given square, per color.
/// Squares on the board's last rank for each color have no push destination.
/// Capture squares are never included.
static PAWN_PUSHES: Lazy<[[Bitboard; 64]; 2]> = Lazy::new(|| {
    [
        create_step_attacks(&[Direction::NORTH], 1),
        create_step_attacks(&[Direction::SOUTH], 1),
    ]
});

/// The double-push destination of a pawn on the given square, per color.
/// Only squares on each color's pawn start rank have an entry.
static PAWN_DOUBLE_PUSHES: Lazy<[[Bitboard; 64]; 2]> = Lazy::new(|| {
    let mut pushes = [[Bitboard::EMPTY; 64]; 2];
    for color in [Color::White, Color::Black] {
        for sq in color.pawn_start_rank() {
            let dest = sq + color.pawn_direction() + color.pawn_direction();
            pushes[color as usize][sq as usize] = Bitboard::from(dest);
        }
    }
    pushes
});

/// Get the step attacks that could be made by moving in `dirs` from each
/// point on the board. Exclude the steps that travel more than `max_dist`
/// (this prevents overflow around the edges of the board).
fn create_step_attacks(dirs: &[Direction], max_dist: u8) -> [Bitboard; 64] {
    let mut attacks = [Bitboard::EMPTY; 64];
    for (i, item) in attacks.iter_mut().enumerate() {
        #[allow(clippy::cast_possible_truncation)]
        let start_sq = Square::try_from(i as u8).unwrap();
        for dir in dirs {
            let target_sq = start_sq + *dir;
            if target_sq.chebyshev_to(start_sq) <= max_dist {
                item.insert(target_sq);
            }
        }
    }

    attacks
}

#[inline(always)]
#[must_use]
/// Get the squares a knight on `sq` attacks.
pub fn knight_attacks(sq: Square) -> Bitboard {
    KNIGHT_ATTACKS[sq as usize]
}

#[inline(always)]
#[must_use]
/// Get the squares a king on `sq` attacks.
pub fn king_attacks(sq: Square) -> Bitboard {
    KING_ATTACKS[sq as usize]
}

#[inline(always)]
#[must_use]
/// Get the squares a pawn of the given color on `sq` attacks. This is the
/// pair of forward diagonals only; it never contains push squares.
pub fn pawn_attacks(color: Color, sq: Square) -> Bitboard {
    PAWN_ATTACKS[color as usize][sq as usize]
}

#[inline(always)]
#[must_use]
/// Get the single-push destination of a pawn of the given color on `sq`,
/// ignoring occupancy.
pub fn pawn_push(color: Color, sq: Square) -> Bitboard {
    PAWN_PUSHES[color as usize][sq as usize]
}

#[inline(always)]
#[must_use]
/// Get the double-push destination of a pawn of the given color on `sq`,
/// ignoring occupancy. Empty unless `sq` is on the color's start rank.
pub fn pawn_double_push(color: Color, sq: Square) -> Bitboard {
    PAWN_DOUBLE_PUSHES[color as usize][sq as usize]
}

#[inline(always)]
#[must_use]
/// Get all squares strictly past `sq` in the direction with ray-table index
/// `dir`.
pub(crate) fn ray(sq: Square, dir: usize) -> Bitboard {
    RAYS[dir][sq as usize]
}

#[inline(always)]
#[must_use]
/// Get a bitboard of all the squares strictly between the two given squares,
/// along the moves of a bishop or rook. Unaligned pairs give the empty
/// bitboard.
///
/// # Examples
///
/// ```
/// use gambit::{lookups::between, Bitboard, Square};
///
/// assert_eq!(between(Square::A1, Square::A3), Bitboard::from(Square::A2));
/// assert_eq!(between(Square::A1, Square::B3), Bitboard::EMPTY);
/// ```
pub fn between(sq1: Square, sq2: Square) -> Bitboard {
    BETWEEN[sq1 as usize][sq2 as usize]
}

#[inline(always)]
#[must_use]
/// Of the squares in `bb`, get the one nearest to the origin of a ray in the
/// direction with index `dir`. Rays pointing toward higher square indices
/// meet their first blocker at the lowest set bit and vice versa.
pub(crate) fn nearest_on_ray(bb: Bitboard, dir: usize) -> Option<Square> {
    if RAY_DIRECTIONS[dir].is_positive() {
        bb.lsb()
    } else {
        bb.msb()
    }
}

/// Compute the attacked squares along one ray, stopping at (and including)
/// the first blocker in `occupancy`.
#[inline(always)]
fn directional_attacks(sq: Square, dir: usize, occupancy: Bitboard) -> Bitboard {
    let full_ray = RAYS[dir][sq as usize];
    match nearest_on_ray(full_ray & occupancy, dir) {
        // everything up to and including the blocker
        Some(blocker) => full_ray ^ RAYS[dir][blocker as usize],
        None => full_ray,
    }
}

#[must_use]
/// Get the squares a rook on `sq` attacks, given the set of occupied
/// squares. The result includes the first blocker in each direction,
/// whatever its color; intersecting away friendly pieces is the caller's
/// job.
pub fn rook_attacks(occupancy: Bitboard, sq: Square) -> Bitboard {
    ROOK_RAYS
        .iter()
        .fold(Bitboard::EMPTY, |attacks, &dir| {
            attacks | directional_attacks(sq, dir, occupancy)
        })
}

#[must_use]
/// Get the squares a bishop on `sq` attacks, given the set of occupied
/// squares.
pub fn bishop_attacks(occupancy: Bitboard, sq: Square) -> Bitboard {
    BISHOP_RAYS
        .iter()
        .fold(Bitboard::EMPTY, |attacks, &dir| {
            attacks | directional_attacks(sq, dir, occupancy)
        })
}

#[must_use]
/// Get the squares a queen on `sq` attacks, given the set of occupied
/// squares.
pub fn queen_attacks(occupancy: Bitboard, sq: Square) -> Bitboard {
    rook_attacks(occupancy, sq) | bishop_attacks(occupancy, sq)
}
