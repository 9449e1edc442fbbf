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

//! Errors produced when parsing external input, such as FEN strings and
//! algebraic square names.

use thiserror::Error;

#[derive(Error, Clone, Debug, PartialEq, Eq)]
/// The ways in which external input can fail to describe a square or a
/// position. Everything past the parsing boundary is infallible: a
/// constructed `Square` always indexes safely, and move generation never
/// returns an error.
pub enum Error {
    /// A raw square index outside of `0..64`.
    #[error("square index {index} is out of bounds")]
    InvalidSquareIndex {
        /// The offending index.
        index: u8,
    },
    /// A string which does not name a square, such as `"j9"` or `"e44"`.
    #[error("\"{text}\" is not an algebraic square")]
    InvalidAlgebraicSquare {
        /// The text that failed to parse.
        text: String,
    },
    /// A (rank, file) pair with either coordinate outside of `0..8`.
    #[error("rank {rank}, file {file} does not name a square")]
    InvalidFileRank {
        /// The offending file index.
        file: usize,
        /// The offending rank index.
        rank: usize,
    },
    /// A FEN whose piece-placement field is malformed.
    #[error("invalid FEN piece placement: {reason}")]
    InvalidFenPlacement {
        /// Why the placement field was rejected.
        reason: &'static str,
    },
    /// A FEN whose non-placement fields are malformed or missing.
    #[error("invalid FEN {field} field: {reason}")]
    InvalidFenField {
        /// Which of the five trailing fields was at fault.
        field: &'static str,
        /// Why the field was rejected.
        reason: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// The messages name the offending input so callers can report it.
    fn messages_identify_the_input() {
        let e = Error::InvalidAlgebraicSquare {
            text: "j9".to_string(),
        };
        assert_eq!(e.to_string(), "\"j9\" is not an algebraic square");

        let e = Error::InvalidFenField {
            field: "side to move",
            reason: "missing",
        };
        assert_eq!(e.to_string(), "invalid FEN side to move field: missing");

        let e = Error::InvalidSquareIndex { index: 64 };
        assert_eq!(e.to_string(), "square index 64 is out of bounds");
    }
}
