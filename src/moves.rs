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

//! Definitions of moves, which can describe any legal playable move.

use super::{Piece, Square};

use std::fmt::{Debug, Display, Formatter};

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
/// The information of one move: its from- and to-squares, its promotion type
/// (if any), and whether it captures, captures en passant, or castles.
///
/// Equality is structural over all six fields, so the same from/to pair
/// tagged differently (say, as a capture versus a quiet move) compares
/// unequal. Moves are plain data: applying one to a position it was not
/// generated for has unspecified results.
pub struct Move {
    from: Square,
    to: Square,
    promotion: Option<Piece>,
    is_capture: bool,
    is_en_passant: bool,
    is_castling: bool,
}

impl Move {
    #[inline(always)]
    #[must_use]
    /// Create a quiet move: no capture, no promotion, no special handling.
    pub const fn quiet(from: Square, to: Square) -> Move {
        Move {
            from,
            to,
            promotion: None,
            is_capture: false,
            is_en_passant: false,
            is_castling: false,
        }
    }

    #[inline(always)]
    #[must_use]
    /// Create a capturing move.
    pub const fn capture(from: Square, to: Square) -> Move {
        Move {
            from,
            to,
            promotion: None,
            is_capture: true,
            is_en_passant: false,
            is_castling: false,
        }
    }

    #[inline(always)]
    #[must_use]
    /// Create a non-capturing promotion. `promotion` must not be a pawn or a
    /// king.
    pub const fn promoting(from: Square, to: Square, promotion: Piece) -> Move {
        Move {
            from,
            to,
            promotion: Some(promotion),
            is_capture: false,
            is_en_passant: false,
            is_castling: false,
        }
    }

    #[inline(always)]
    #[must_use]
    /// Create a capturing promotion. `promotion` must not be a pawn or a
    /// king.
    pub const fn capture_promoting(from: Square, to: Square, promotion: Piece) -> Move {
        Move {
            from,
            to,
            promotion: Some(promotion),
            is_capture: true,
            is_en_passant: false,
            is_castling: false,
        }
    }

    #[inline(always)]
    #[must_use]
    /// Create an en passant capture. The destination is the en passant
    /// target square, not the square of the captured pawn.
    pub const fn en_passant(from: Square, to: Square) -> Move {
        Move {
            from,
            to,
            promotion: None,
            is_capture: true,
            is_en_passant: true,
            is_castling: false,
        }
    }

    #[inline(always)]
    #[must_use]
    /// Create a castling move, expressed as the king's motion from its start
    /// square to its destination two files away.
    pub const fn castle(from: Square, to: Square) -> Move {
        Move {
            from,
            to,
            promotion: None,
            is_capture: false,
            is_en_passant: false,
            is_castling: true,
        }
    }

    #[inline(always)]
    #[must_use]
    /// Get the square that a piece moves from to execute this move.
    pub const fn from(self) -> Square {
        self.from
    }

    #[inline(always)]
    #[must_use]
    /// Get the target square of this move.
    pub const fn to(self) -> Square {
        self.to
    }

    #[inline(always)]
    #[must_use]
    /// Get the promotion type of this move. The resulting type will never be
    /// a pawn or a king.
    pub const fn promotion(self) -> Option<Piece> {
        self.promotion
    }

    #[inline(always)]
    #[must_use]
    /// Determine whether this move captures a piece. En passant captures are
    /// marked as captures.
    pub const fn is_capture(self) -> bool {
        self.is_capture
    }

    #[inline(always)]
    #[must_use]
    /// Determine whether this move is an en passant capture.
    pub const fn is_en_passant(self) -> bool {
        self.is_en_passant
    }

    #[inline(always)]
    #[must_use]
    /// Determine whether this move is a castle.
    pub const fn is_castling(self) -> bool {
        self.is_castling
    }
}

impl Debug for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(pt) = self.promotion {
            write!(f, "{}", pt.code())?;
        }
        if self.is_en_passant {
            write!(f, " [e.p.]")?;
        }
        if self.is_castling {
            write!(f, " [castle]")?;
        }
        Ok(())
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.promotion {
            None => write!(f, "{} -> {}", self.from, self.to)?,
            Some(p) => write!(f, "{} -> {} ={}", self.from, self.to, p)?,
        };
        if self.is_en_passant {
            write!(f, " [e.p.]")?;
        }
        if self.is_castling {
            write!(f, " [castle]")?;
        }
        Ok(())
    }
}
