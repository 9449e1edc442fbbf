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

//! Squares, which are positions on a board.

use super::{Bitboard, Direction, Error};

use std::{
    cmp::max,
    convert::TryFrom,
    fmt::{Display, Formatter},
    mem::transmute,
    ops::{Add, AddAssign, Sub},
};

#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
/// A square: one of the 64 spots on a board that a piece can occupy.
///
/// Squares are numbered in rank-major order starting from White's side of the
/// board, so that A1 is square 0, H1 is square 7, and H8 is square 63. From
/// MSB to LSB, each square is composed of:
/// * 2 unused bits
/// * 3 bits for the rank
/// * 3 bits for the file
pub enum Square {
    A1 = 0,
    B1 = 1,
    C1 = 2,
    D1 = 3,
    E1 = 4,
    F1 = 5,
    G1 = 6,
    H1 = 7,
    A2 = 8,
    B2 = 9,
    C2 = 10,
    D2 = 11,
    E2 = 12,
    F2 = 13,
    G2 = 14,
    H2 = 15,
    A3 = 16,
    B3 = 17,
    C3 = 18,
    D3 = 19,
    E3 = 20,
    F3 = 21,
    G3 = 22,
    H3 = 23,
    A4 = 24,
    B4 = 25,
    C4 = 26,
    D4 = 27,
    E4 = 28,
    F4 = 29,
    G4 = 30,
    H4 = 31,
    A5 = 32,
    B5 = 33,
    C5 = 34,
    D5 = 35,
    E5 = 36,
    F5 = 37,
    G5 = 38,
    H5 = 39,
    A6 = 40,
    B6 = 41,
    C6 = 42,
    D6 = 43,
    E6 = 44,
    F6 = 45,
    G6 = 46,
    H6 = 47,
    A7 = 48,
    B7 = 49,
    C7 = 50,
    D7 = 51,
    E7 = 52,
    F7 = 53,
    G7 = 54,
    H7 = 55,
    A8 = 56,
    B8 = 57,
    C8 = 58,
    D8 = 59,
    E8 = 60,
    F8 = 61,
    G8 = 62,
    H8 = 63,
}

impl Square {
    #[inline(always)]
    #[allow(clippy::cast_possible_truncation)]
    /// Create a square from the given rank and file. The ranks run from 0 to
    /// 7 (instead of 1 through 8), and the files from 0 (the A file) to 7
    /// (the H file).
    ///
    /// # Errors
    ///
    /// This function will return an `Err` if either coordinate is out of
    /// bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use gambit::Square;
    ///
    /// assert_eq!(Square::new(0, 4), Ok(Square::E1));
    /// assert!(Square::new(0, 8).is_err());
    /// ```
    pub fn new(rank: usize, file: usize) -> Result<Square, Error> {
        if rank >= 8 || file >= 8 {
            return Err(Error::InvalidFileRank { file, rank });
        }
        Square::try_from(((rank << 3) | file) as u8)
    }

    #[inline(always)]
    #[must_use]
    /// Get the integer representing the rank (0 -> 1, ...) of this square.
    pub const fn rank(self) -> usize {
        (self as u8 >> 3u8) as usize
    }

    #[inline(always)]
    #[must_use]
    /// Get the integer representing the file (0 -> A, ...) of this square.
    pub const fn file(self) -> usize {
        (self as u8 & 7u8) as usize
    }

    #[inline(always)]
    #[must_use]
    /// Determine whether this square shares its rank with `rhs`.
    pub const fn same_rank(self, rhs: Square) -> bool {
        self.rank() == rhs.rank()
    }

    #[inline(always)]
    #[must_use]
    /// Determine whether this square shares its file with `rhs`.
    pub const fn same_file(self, rhs: Square) -> bool {
        self.file() == rhs.file()
    }

    #[inline(always)]
    #[must_use]
    /// Determine whether this square lies on the same northeast-southwest
    /// diagonal as `rhs`. Squares on such a diagonal share the difference of
    /// their file and rank.
    pub const fn same_ne_sw_diag(self, rhs: Square) -> bool {
        self.file() as i8 - self.rank() as i8 == rhs.file() as i8 - rhs.rank() as i8
    }

    #[inline(always)]
    #[must_use]
    /// Determine whether this square lies on the same northwest-southeast
    /// diagonal as `rhs`. Squares on such a diagonal share the sum of their
    /// file and rank.
    pub const fn same_nw_se_diag(self, rhs: Square) -> bool {
        self.file() + self.rank() == rhs.file() + rhs.rank()
    }

    #[inline(always)]
    #[must_use]
    /// Determine whether this square lies on either diagonal through `rhs`.
    ///
    /// # Examples
    ///
    /// ```
    /// use gambit::Square;
    ///
    /// assert!(Square::C3.same_diag(Square::F6));
    /// assert!(Square::C3.same_diag(Square::A5));
    /// assert!(!Square::C3.same_diag(Square::C4));
    /// ```
    pub const fn same_diag(self, rhs: Square) -> bool {
        self.same_ne_sw_diag(rhs) || self.same_nw_se_diag(rhs)
    }

    #[inline(always)]
    #[must_use]
    /// Get the Chebyshev distance to another square.
    pub fn chebyshev_to(self, rhs: Square) -> u8 {
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_possible_wrap,
            clippy::cast_sign_loss
        )]
        {
            let rankdiff = ((rhs.rank() as i8) - (self.rank() as i8)).abs();
            let filediff = ((rhs.file() as i8) - (self.file() as i8)).abs();

            max(rankdiff, filediff) as u8
        }
    }

    /// Convert an algebraic string (such as `"e7"`) to a square. To get an
    /// `Ok` result, the string must be two characters: a file letter (either
    /// case is accepted) followed by a rank digit from 1 through 8.
    ///
    /// # Errors
    ///
    /// This function will return an `Err` if `s` is not a legal algebraic
    /// square.
    ///
    /// # Examples
    ///
    /// ```
    /// use gambit::Square;
    ///
    /// assert_eq!(Square::from_algebraic("e4"), Ok(Square::E4));
    /// assert_eq!(Square::from_algebraic("B7"), Ok(Square::B7));
    /// assert!(Square::from_algebraic("i9").is_err());
    /// ```
    pub fn from_algebraic(s: &str) -> Result<Square, Error> {
        let err = || Error::InvalidAlgebraicSquare {
            text: s.to_string(),
        };
        let mut chars = s.chars();
        let file_chr = chars.next().ok_or_else(err)?.to_ascii_lowercase();
        let rank_chr = chars.next().ok_or_else(err)?;
        if chars.next().is_some() {
            return Err(err());
        }
        let file = "abcdefgh"
            .match_indices(file_chr)
            .next()
            .ok_or_else(err)?
            .0;
        let rank = match rank_chr.to_digit(10) {
            Some(n) if (1..=8).contains(&n) => n as usize - 1,
            _ => return Err(err()),
        };
        Square::new(rank, file).map_err(|_| err())
    }

    #[must_use]
    /// Get the name of the file of this square. For instance, the square
    /// representing A1 will have the name "a".
    pub fn file_name(self) -> &'static str {
        match self.file() {
            0 => "a",
            1 => "b",
            2 => "c",
            3 => "d",
            4 => "e",
            5 => "f",
            6 => "g",
            7 => "h",
            // files are only from 0..8
            _ => unreachable!(),
        }
    }
}

impl Add<Direction> for Square {
    type Output = Square;
    #[inline(always)]
    #[allow(clippy::cast_sign_loss)]
    fn add(self, rhs: Direction) -> Self::Output {
        // Apply the modulo to prevent UB. Callers stepping near the edge of
        // the board must guard against wraparound themselves.
        // SAFETY: The mask keeps the discriminant within 0..64.
        unsafe { transmute(((self as i8).wrapping_add(rhs.0)) as u8 & 63) }
    }
}

impl AddAssign<Direction> for Square {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Direction) {
        *self = *self + rhs;
    }
}

impl Sub<Square> for Square {
    type Output = Direction;
    #[inline(always)]
    fn sub(self, rhs: Square) -> Self::Output {
        Direction((self as i8) - (rhs as i8))
    }
}

impl TryFrom<u8> for Square {
    type Error = Error;
    #[inline(always)]
    fn try_from(x: u8) -> Result<Square, Self::Error> {
        if x <= Square::H8 as u8 {
            // SAFETY: The bound check above keeps the discriminant legal.
            Ok(unsafe { transmute::<u8, Square>(x) })
        } else {
            Err(Error::InvalidSquareIndex { index: x })
        }
    }
}

impl TryFrom<Bitboard> for Square {
    type Error = Error;

    /// Create the square closest to A1 (prioritizing rank) on the given
    /// bitboard.
    #[inline(always)]
    #[allow(clippy::cast_possible_truncation)]
    fn try_from(bb: Bitboard) -> Result<Square, Self::Error> {
        Square::try_from(bb.trailing_zeros() as u8)
    }
}

impl Display for Square {
    #[inline(always)]
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.file_name(), self.rank() + 1)
    }
}
