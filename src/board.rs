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

//! State representations of positions: piece placement, game state, and the
//! reversible move application that drives perft.

use super::{Bitboard, CastleRights, Color, Error, Move, Piece, Square};

use std::{
    convert::TryFrom,
    default::Default,
    fmt::{Display, Formatter},
};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// The non-placement state of a position: whose turn it is, what castling
/// remains available, where an en passant capture may land, and the move
/// clocks.
pub struct BoardState {
    /// The color of the player to move.
    pub side_to_move: Color,
    /// The square which can be moved to by a pawn in en passant. `None` when
    /// the previous move was not a double pawn push.
    pub en_passant: Option<Square>,
    /// The castling rights of both players.
    pub castle_rights: CastleRights,
    /// The number of halfmoves since the last pawn move or capture.
    pub halfmove_clock: u16,
    /// The move number, starting from 1 and incremented after each of
    /// Black's moves.
    pub fullmove_number: u16,
}

#[derive(Clone, Debug)]
/// Everything needed to reverse one move: the captured piece (with the
/// square it stood on, which for en passant is not the move's destination)
/// and the state fields as they were before the move.
struct Undo {
    captured: Option<(Piece, Square)>,
    state: BoardState,
}

#[derive(Clone, Debug)]
/// A representation of a position, holding one bitboard per piece type per
/// color, the game state, and the undo stack for reversible move
/// application.
///
/// Two boards compare equal when their piece placement and state agree; the
/// undo stacks may differ.
pub struct Board {
    /// The squares occupied by each piece type, indexed first by color and
    /// then by piece type.
    pieces: [[Bitboard; Piece::NUM_TYPES]; 2],
    /// The non-placement state of the game.
    state: BoardState,
    /// Undo records for every move made and not yet unmade on this board.
    /// Grows and shrinks in lock-step with the recursion of a perft
    /// traversal.
    history: Vec<Undo>,
}

impl Board {
    #[must_use]
    /// Construct a `Board` from the standard chess starting position.
    pub fn new() -> Board {
        Board {
            pieces: [
                [
                    Bitboard::new(0x0000_0000_0000_FF00), // pawn
                    Bitboard::new(0x0000_0000_0000_0042), // knight
                    Bitboard::new(0x0000_0000_0000_0024), // bishop
                    Bitboard::new(0x0000_0000_0000_0081), // rook
                    Bitboard::new(0x0000_0000_0000_0008), // queen
                    Bitboard::new(0x0000_0000_0000_0010), // king
                ],
                [
                    Bitboard::new(0x00FF_0000_0000_0000),
                    Bitboard::new(0x4200_0000_0000_0000),
                    Bitboard::new(0x2400_0000_0000_0000),
                    Bitboard::new(0x8100_0000_0000_0000),
                    Bitboard::new(0x0800_0000_0000_0000),
                    Bitboard::new(0x1000_0000_0000_0000),
                ],
            ],
            state: BoardState {
                side_to_move: Color::White,
                en_passant: None,
                castle_rights: CastleRights::ALL_RIGHTS,
                halfmove_clock: 0,
                fullmove_number: 1,
            },
            history: Vec::new(),
        }
    }

    #[must_use]
    /// Construct a `Board` with no pieces on it, White to move, and no
    /// castling rights. Useful together with `add_piece` for building sparse
    /// test positions.
    pub fn empty() -> Board {
        Board {
            pieces: [[Bitboard::EMPTY; Piece::NUM_TYPES]; 2],
            state: BoardState {
                side_to_move: Color::White,
                en_passant: None,
                castle_rights: CastleRights::NO_RIGHTS,
                halfmove_clock: 0,
                fullmove_number: 1,
            },
            history: Vec::new(),
        }
    }

    /// Create a `Board` populated from some FEN and load it.
    ///
    /// All six fields are consumed, including the halfmove clock and
    /// fullmove number.
    ///
    /// # Errors
    ///
    /// Will return `Err` describing the offending field if the FEN is
    /// invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// use gambit::Board;
    ///
    /// let default_board = Board::new();
    /// let fen_board =
    ///     Board::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1")?;
    /// assert_eq!(default_board, fen_board);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_fen(fen: &str) -> Result<Board, Error> {
        let mut board = Board::empty();
        let mut fields = fen.split_whitespace();

        let placement = fields.next().ok_or(Error::InvalidFenPlacement {
            reason: "empty FEN",
        })?;
        let mut rank = 8usize;
        for rank_text in placement.split('/') {
            if rank == 0 {
                return Err(Error::InvalidFenPlacement {
                    reason: "more than 8 ranks",
                });
            }
            rank -= 1;
            let mut file = 0usize;
            for chr in rank_text.chars() {
                if let Some(blanks) = chr.to_digit(10) {
                    file += blanks as usize;
                } else {
                    let pt = Piece::from_code(chr.to_ascii_uppercase()).ok_or(
                        Error::InvalidFenPlacement {
                            reason: "unrecognized piece character",
                        },
                    )?;
                    let color = if chr.is_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    let sq = Square::new(rank, file).map_err(|_| Error::InvalidFenPlacement {
                        reason: "rank does not fit in 8 files",
                    })?;
                    board.add_piece(sq, pt, color);
                    file += 1;
                }
            }
            if file != 8 {
                return Err(Error::InvalidFenPlacement {
                    reason: "rank does not describe exactly 8 files",
                });
            }
        }
        if rank != 0 {
            return Err(Error::InvalidFenPlacement {
                reason: "fewer than 8 ranks",
            });
        }
        for color in [Color::White, Color::Black] {
            if !board.pieces(color, Piece::King).has_single_bit() {
                return Err(Error::InvalidFenPlacement {
                    reason: "each side must have exactly one king",
                });
            }
        }

        board.state.side_to_move = match fields.next() {
            Some("w") => Color::White,
            Some("b") => Color::Black,
            Some(_) => {
                return Err(Error::InvalidFenField {
                    field: "side to move",
                    reason: "expected \"w\" or \"b\"",
                })
            }
            None => {
                return Err(Error::InvalidFenField {
                    field: "side to move",
                    reason: "missing",
                })
            }
        };

        let castling = fields.next().ok_or(Error::InvalidFenField {
            field: "castling rights",
            reason: "missing",
        })?;
        if castling != "-" {
            for chr in castling.chars() {
                board.state.castle_rights |= match chr {
                    'K' => CastleRights::kingside(Color::White),
                    'Q' => CastleRights::queenside(Color::White),
                    'k' => CastleRights::kingside(Color::Black),
                    'q' => CastleRights::queenside(Color::Black),
                    _ => {
                        return Err(Error::InvalidFenField {
                            field: "castling rights",
                            reason: "expected a subset of \"KQkq\" or \"-\"",
                        })
                    }
                };
            }
        }

        let en_passant = fields.next().ok_or(Error::InvalidFenField {
            field: "en passant",
            reason: "missing",
        })?;
        if en_passant != "-" {
            board.state.en_passant = Some(Square::from_algebraic(en_passant).map_err(|_| {
                Error::InvalidFenField {
                    field: "en passant",
                    reason: "expected an algebraic square or \"-\"",
                }
            })?);
        }

        board.state.halfmove_clock = fields
            .next()
            .ok_or(Error::InvalidFenField {
                field: "halfmove clock",
                reason: "missing",
            })?
            .parse()
            .map_err(|_| Error::InvalidFenField {
                field: "halfmove clock",
                reason: "expected a non-negative integer",
            })?;

        board.state.fullmove_number = fields
            .next()
            .ok_or(Error::InvalidFenField {
                field: "fullmove number",
                reason: "missing",
            })?
            .parse()
            .map_err(|_| Error::InvalidFenField {
                field: "fullmove number",
                reason: "expected a positive integer",
            })?;
        if board.state.fullmove_number == 0 {
            return Err(Error::InvalidFenField {
                field: "fullmove number",
                reason: "expected a positive integer",
            });
        }

        Ok(board)
    }

    #[inline(always)]
    #[must_use]
    /// Get the squares occupied by pieces of the given type and color.
    pub fn pieces(&self, color: Color, pt: Piece) -> Bitboard {
        self.pieces[color as usize][pt as usize]
    }

    #[inline(always)]
    #[must_use]
    /// Get the squares occupied by all pieces of the given color.
    pub fn color_occupancy(&self, color: Color) -> Bitboard {
        self.pieces[color as usize]
            .iter()
            .fold(Bitboard::EMPTY, |occ, &bb| occ | bb)
    }

    #[inline(always)]
    #[must_use]
    /// Get the squares occupied by pieces of either color.
    ///
    /// # Examples
    ///
    /// ```
    /// use gambit::{Bitboard, Board};
    ///
    /// let board = Board::new();
    /// assert_eq!(board.occupancy(), Bitboard::new(0xFFFF_0000_0000_FFFF));
    /// ```
    pub fn occupancy(&self) -> Bitboard {
        self.color_occupancy(Color::White) | self.color_occupancy(Color::Black)
    }

    #[inline(always)]
    #[must_use]
    /// Get the color of the player to move.
    pub fn side_to_move(&self) -> Color {
        self.state.side_to_move
    }

    #[inline(always)]
    #[must_use]
    /// Get the current en passant target square, if any.
    pub fn en_passant_square(&self) -> Option<Square> {
        self.state.en_passant
    }

    #[inline(always)]
    #[must_use]
    /// Get the castling rights of both players.
    pub fn castle_rights(&self) -> CastleRights {
        self.state.castle_rights
    }

    #[inline(always)]
    #[must_use]
    /// Get the full non-placement state of this board.
    pub fn state(&self) -> &BoardState {
        &self.state
    }

    #[inline(always)]
    #[must_use]
    /// Get the type of the piece occupying a given square.
    /// Returns `None` if there is no piece occupying the square.
    ///
    /// # Examples
    ///
    /// ```
    /// use gambit::{Board, Piece, Square};
    ///
    /// let board = Board::new();
    /// assert_eq!(board.piece_at(Square::E1), Some(Piece::King));
    /// assert_eq!(board.piece_at(Square::E4), None);
    /// ```
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        for pt in Piece::ALL_TYPES {
            if (self.pieces(Color::White, pt) | self.pieces(Color::Black, pt)).contains(sq) {
                return Some(pt);
            }
        }
        None
    }

    #[inline(always)]
    #[must_use]
    /// Get the color of the piece occupying a given square.
    /// Returns `None` if there is no piece occupying the square.
    pub fn color_at(&self, sq: Square) -> Option<Color> {
        if self.color_occupancy(Color::White).contains(sq) {
            return Some(Color::White);
        }
        if self.color_occupancy(Color::Black).contains(sq) {
            return Some(Color::Black);
        }
        None
    }

    #[inline(always)]
    /// Add a piece to the given square of the board. The square must be
    /// empty, or the board's piece sets will lose their disjointness.
    pub fn add_piece(&mut self, sq: Square, pt: Piece, color: Color) {
        self.pieces[color as usize][pt as usize].insert(sq);
    }

    /// Remove whatever piece currently occupies the given square. Has no
    /// effect on an empty square.
    pub fn remove_piece(&mut self, sq: Square) {
        for color_boards in &mut self.pieces {
            for bb in color_boards.iter_mut() {
                bb.remove(sq);
            }
        }
    }

    #[inline(always)]
    /// Remove a piece of known type and color from a square.
    /// Will break the validity of the board if there is no piece of type
    /// `pt` and color `color` at `sq`.
    fn remove_known_piece(&mut self, sq: Square, pt: Piece, color: Color) {
        self.pieces[color as usize][pt as usize].remove(sq);
    }

    /// Apply the given move to the board, pushing an undo record so that
    /// `unmake` can later reverse it. Assumes the move was produced by legal
    /// move generation for this position; the result of applying any other
    /// move is unspecified.
    ///
    /// # Panics
    ///
    /// This function may panic when handed a move whose from-square is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// use gambit::{Board, Move, Square};
    ///
    /// let mut board = Board::new();
    /// // board after 1. e4 is played
    /// let board_after_e4 =
    ///     Board::from_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1")?;
    ///
    /// board.make(Move::quiet(Square::E2, Square::E4));
    /// assert_eq!(board, board_after_e4);
    /// # Ok(())
    /// # }
    /// ```
    pub fn make(&mut self, m: Move) {
        let us = self.state.side_to_move;
        let them = !us;
        let from = m.from();
        let to = m.to();
        let mover = self.piece_at(from).unwrap();

        // snapshot everything needed for reversal before mutating
        let captured = if m.is_en_passant() {
            // the captured pawn sits behind the target square
            Some((Piece::Pawn, to + them.pawn_direction()))
        } else {
            self.piece_at(to).map(|pt| (pt, to))
        };
        let undo = Undo {
            captured,
            state: self.state,
        };

        if mover == Piece::Pawn || captured.is_some() {
            self.state.halfmove_clock = 0;
        } else {
            self.state.halfmove_clock += 1;
        }

        if let Some((victim, victim_sq)) = captured {
            self.remove_known_piece(victim_sq, victim, them);
        }
        self.remove_known_piece(from, mover, us);
        self.add_piece(to, m.promotion().unwrap_or(mover), us);

        if m.is_castling() {
            let rank = from.rank();
            // G file means kingside; the rook hops from the corner to the
            // square the king crossed
            let (rook_from_file, rook_to_file) = if to.file() == 6 { (7, 5) } else { (0, 3) };
            let rook_from = Square::new(rank, rook_from_file).unwrap();
            let rook_to = Square::new(rank, rook_to_file).unwrap();
            self.remove_known_piece(rook_from, Piece::Rook, us);
            self.add_piece(rook_to, Piece::Rook, us);
        }

        self.state.en_passant =
            if mover == Piece::Pawn && from.same_file(to) && from.chebyshev_to(to) == 2 {
                Some(from + us.pawn_direction())
            } else {
                None
            };

        let mut revoked = if mover == Piece::King {
            CastleRights::color_rights(us)
        } else {
            corner_rights(from)
        };
        revoked |= corner_rights(to);
        self.state.castle_rights &= !revoked;

        self.state.side_to_move = them;
        if them == Color::White {
            self.state.fullmove_number += 1;
        }

        self.history.push(undo);
    }

    /// Reverse the most recent `make`. The move handed in must be the same
    /// one that was made; calling `unmake` in any other situation is
    /// unspecified behavior.
    ///
    /// # Panics
    ///
    /// This function will panic if no move has been made on this board.
    pub fn unmake(&mut self, m: Move) {
        let undo = self.history.pop().unwrap();
        let us = undo.state.side_to_move;
        let from = m.from();
        let to = m.to();

        if m.is_castling() {
            let rank = from.rank();
            let (rook_from_file, rook_to_file) = if to.file() == 6 { (7, 5) } else { (0, 3) };
            let rook_from = Square::new(rank, rook_from_file).unwrap();
            let rook_to = Square::new(rank, rook_to_file).unwrap();
            self.remove_known_piece(rook_to, Piece::Rook, us);
            self.add_piece(rook_from, Piece::Rook, us);
        }

        if let Some(promoted) = m.promotion() {
            self.remove_known_piece(to, promoted, us);
            self.add_piece(from, Piece::Pawn, us);
        } else {
            let mover = self.piece_at(to).unwrap();
            self.remove_known_piece(to, mover, us);
            self.add_piece(from, mover, us);
        }

        if let Some((victim, victim_sq)) = undo.captured {
            self.add_piece(victim_sq, victim, !us);
        }

        self.state = undo.state;
    }
}

/// Get the castling rights which are lost when the piece on the given square
/// moves or is captured. Non-corner squares forfeit nothing.
fn corner_rights(sq: Square) -> CastleRights {
    match sq {
        Square::A1 => CastleRights::queenside(Color::White),
        Square::H1 => CastleRights::kingside(Color::White),
        Square::A8 => CastleRights::queenside(Color::Black),
        Square::H8 => CastleRights::kingside(Color::Black),
        _ => CastleRights::NO_RIGHTS,
    }
}

impl Display for Board {
    /// Display this board in a console-ready format. Expresses as a series
    /// of 8 lines, where the topmost line is the 8th rank and the bottommost
    /// is the 1st. White pieces are represented with capital letters, while
    /// black pieces have lowercase.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for r in 0..8 {
            for c in 0..8 {
                let i = 64 - (r + 1) * 8 + c;
                let current_square = Square::try_from(i).unwrap();
                match self.piece_at(current_square) {
                    Some(p) => match self.color_at(current_square).unwrap() {
                        Color::White => write!(f, "{p}")?,
                        Color::Black => write!(f, "{}", p.code().to_lowercase())?,
                    },
                    None => write!(f, ".")?,
                }
                write!(f, " ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Board) -> bool {
        self.pieces == other.pieces && self.state == other.state
    }
}

impl Eq for Board {}

impl Default for Board {
    fn default() -> Board {
        Board::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// Test that the start position of a normal chess game can be loaded
    /// from its FEN.
    fn start_fen() {
        let result = Board::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert_eq!(result, Ok(Board::default()));
    }

    #[test]
    /// Test the field-by-field contract of the starting position: pieces in
    /// their corners, White to move, full rights, no en passant, and fresh
    /// clocks.
    fn start_fen_fields() {
        let b = Board::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1")
            .unwrap();
        assert_eq!(b.piece_at(Square::E1), Some(Piece::King));
        assert_eq!(b.color_at(Square::E1), Some(Color::White));
        assert_eq!(b.piece_at(Square::E8), Some(Piece::King));
        assert_eq!(b.color_at(Square::E8), Some(Color::Black));
        assert_eq!(b.piece_at(Square::A1), Some(Piece::Rook));
        assert_eq!(b.color_at(Square::A1), Some(Color::White));
        assert_eq!(b.piece_at(Square::H8), Some(Piece::Rook));
        assert_eq!(b.color_at(Square::H8), Some(Color::Black));
        assert_eq!(b.side_to_move(), Color::White);
        assert_eq!(b.en_passant_square(), None);
        assert_eq!(b.castle_rights(), CastleRights::ALL_RIGHTS);
        assert_eq!(b.state().halfmove_clock, 0);
        assert_eq!(b.state().fullmove_number, 1);
    }

    #[test]
    /// Test that a board with an en passant square can be loaded from a FEN
    /// correctly.
    fn load_en_passant() {
        // exf6 is en passant here
        let b = Board::from_fen("rnbqkb1r/ppppp1pp/7n/4Pp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3")
            .unwrap();
        assert_eq!(b.en_passant_square(), Some(Square::F6));
    }

    #[test]
    /// Test that the move clocks are read from the FEN rather than ignored.
    fn load_clocks() {
        let b = Board::from_fen("rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8")
            .unwrap();
        assert_eq!(b.state().halfmove_clock, 1);
        assert_eq!(b.state().fullmove_number, 8);
    }

    #[test]
    fn reject_bad_fens() {
        // missing a rank
        assert!(Board::from_fen("8/8/8/8/8/8/8 w - - 0 1").is_err());
        // a rank with 9 files
        assert!(Board::from_fen("9/8/8/8/8/8/8/8 w - - 0 1").is_err());
        // no kings
        assert!(Board::from_fen("8/8/8/8/8/8/8/8 w - - 0 1").is_err());
        // two white kings
        assert!(Board::from_fen("4k3/8/8/8/8/8/8/2K1K3 w - - 0 1").is_err());
        // bad side to move
        assert!(Board::from_fen("4k3/8/8/8/8/8/8/4K3 x - - 0 1").is_err());
        // bad castling characters
        assert!(Board::from_fen("4k3/8/8/8/8/8/8/4K3 w KX - 0 1").is_err());
        // bad en passant square
        assert!(Board::from_fen("4k3/8/8/8/8/8/8/4K3 w - e9 0 1").is_err());
        // bad clock
        assert!(Board::from_fen("4k3/8/8/8/8/8/8/4K3 w - - x 1").is_err());
        // fullmove number of zero
        assert!(Board::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 0").is_err());
        // missing fields
        assert!(Board::from_fen("4k3/8/8/8/8/8/8/4K3 w - -").is_err());
    }

    #[test]
    /// Test that we can play e4, and the board state updates accordingly.
    fn play_e4() {
        let mut b = Board::new();
        b.make(Move::quiet(Square::E2, Square::E4));
        let expected =
            Board::from_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1")
                .unwrap();
        assert_eq!(b, expected);
    }

    #[test]
    /// Test that we can capture en passant, removing the pawn behind the
    /// target square.
    fn en_passant_capture() {
        let mut b =
            Board::from_fen("rnbqkb1r/ppppp1pp/7n/4Pp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3")
                .unwrap();
        b.make(Move::en_passant(Square::E5, Square::F6));
        assert_eq!(b.piece_at(Square::F6), Some(Piece::Pawn));
        assert_eq!(b.color_at(Square::F6), Some(Color::White));
        assert_eq!(b.piece_at(Square::F5), None);
        assert_eq!(b.piece_at(Square::E5), None);
        assert_eq!(b.en_passant_square(), None);
    }

    #[test]
    /// Test that castling moves the rook as well as the king, and spends
    /// both of the mover's rights.
    fn white_kingside_castle() {
        let mut b = Board::from_fen(
            "r1bqk1nr/pppp1ppp/2n5/2b1p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4",
        )
        .unwrap();
        b.make(Move::castle(Square::E1, Square::G1));
        assert_eq!(b.piece_at(Square::G1), Some(Piece::King));
        assert_eq!(b.piece_at(Square::F1), Some(Piece::Rook));
        assert_eq!(b.piece_at(Square::H1), None);
        assert_eq!(b.piece_at(Square::E1), None);
        assert!(!b.castle_rights().is_kingside_castle_legal(Color::White));
        assert!(!b.castle_rights().is_queenside_castle_legal(Color::White));
        assert!(b.castle_rights().is_kingside_castle_legal(Color::Black));
    }

    #[test]
    /// Test that promotion replaces the pawn with the promoted piece.
    fn white_promote_queen() {
        let mut b = Board::from_fen("8/5P2/2k5/4K3/8/8/8/8 w - - 0 1").unwrap();
        b.make(Move::promoting(Square::F7, Square::F8, Piece::Queen));
        assert_eq!(b.piece_at(Square::F8), Some(Piece::Queen));
        assert_eq!(b.piece_at(Square::F7), None);
        assert!(b.pieces(Color::White, Piece::Pawn).is_empty());
    }

    #[test]
    /// Test that capturing a rook removes the right to castle with that
    /// rook.
    fn no_castle_after_rook_capture() {
        let mut b =
            Board::from_fen("rnbqk2r/ppppnp1p/4p1pb/8/4P3/1P1P4/PBP2PPP/RN1QKBNR w KQkq - 1 5")
                .unwrap();
        b.make(Move::capture(Square::B2, Square::H8));
        assert!(!b.castle_rights().is_kingside_castle_legal(Color::Black));
        assert!(b.castle_rights().is_queenside_castle_legal(Color::Black));
    }

    #[test]
    /// Test that a rook moving off its corner spends the matching right.
    fn rook_move_spends_right() {
        let mut b = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        b.make(Move::quiet(Square::A1, Square::A4));
        assert!(!b.castle_rights().is_queenside_castle_legal(Color::White));
        assert!(b.castle_rights().is_kingside_castle_legal(Color::White));
    }

    #[test]
    /// Test that the halfmove clock resets on pawn moves and captures and
    /// increments otherwise, and that the fullmove number ticks after
    /// Black's move.
    fn clock_updates() {
        let mut b = Board::new();
        b.make(Move::quiet(Square::G1, Square::F3));
        assert_eq!(b.state().halfmove_clock, 1);
        assert_eq!(b.state().fullmove_number, 1);
        b.make(Move::quiet(Square::B8, Square::C6));
        assert_eq!(b.state().halfmove_clock, 2);
        assert_eq!(b.state().fullmove_number, 2);
        b.make(Move::quiet(Square::E2, Square::E4));
        assert_eq!(b.state().halfmove_clock, 0);
        assert_eq!(b.state().fullmove_number, 2);
    }

    #[test]
    /// Test the board-editing API used for building sparse positions.
    fn edit_pieces() {
        let mut b = Board::empty();
        assert!(b.occupancy().is_empty());
        b.add_piece(Square::D4, Piece::Queen, Color::White);
        assert_eq!(b.piece_at(Square::D4), Some(Piece::Queen));
        b.remove_piece(Square::D4);
        assert_eq!(b.piece_at(Square::D4), None);
        assert!(b.occupancy().is_empty());
    }

    #[test]
    /// Test the console rendering: rank 8 on top, white uppercase, black
    /// lowercase.
    fn display_grid() {
        let rendered = Board::new().to_string();
        let first_line = rendered.lines().next().unwrap();
        assert_eq!(first_line.trim_end(), "r n b q k b n r");
        let last_line = rendered.lines().last().unwrap();
        assert_eq!(last_line.trim_end(), "R N B Q K B N R");
    }

    #[test]
    /// Test that making and unmaking a series of different move kinds
    /// restores the board bit-for-bit, state included.
    fn make_unmake_round_trips() {
        let cases = [
            // quiet move and capture
            (
                "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
                Move::capture(Square::E5, Square::G6),
            ),
            // en passant
            (
                "rnbqkb1r/ppppp1pp/7n/4Pp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3",
                Move::en_passant(Square::E5, Square::F6),
            ),
            // castling both ways
            (
                "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1",
                Move::castle(Square::E1, Square::G1),
            ),
            (
                "r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1",
                Move::castle(Square::E8, Square::C8),
            ),
            // promotion with capture
            (
                "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
                Move::capture_promoting(Square::D7, Square::C8, Piece::Knight),
            ),
            // double pawn push sets the en passant square, then is undone
            (
                "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
                Move::quiet(Square::D2, Square::D4),
            ),
        ];
        for (fen, m) in cases {
            let mut b = Board::from_fen(fen).unwrap();
            let before = b.clone();
            b.make(m);
            assert_ne!(b, before, "{m} did not change the position");
            b.unmake(m);
            assert_eq!(b, before, "{m} was not fully reversed");
            assert_eq!(b.state(), before.state());
        }
    }
}
