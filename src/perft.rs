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

//! Performance testing, or "perft." Perft is used for verifying the
//! correctness of move generation and benchmarking the speed of both move
//! generation and the make/unmake processes.

use std::time::Instant;

use super::{movegen::legal_moves, Board};

/// Count the leaf nodes reachable from `board` in exactly `depth` plies of
/// fully legal play. The board is mutated during the traversal but restored
/// before returning.
///
/// # Examples
///
/// ```
/// use gambit::{perft::perft, Board};
///
/// let mut board = Board::new();
/// assert_eq!(perft(&mut board, 2), 400);
/// ```
pub fn perft(board: &mut Board, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = legal_moves(board);
    if depth == 1 {
        return moves.len() as u64;
    }
    let mut total = 0;
    for m in moves {
        board.make(m);
        total += perft(board, depth - 1);
        board.unmake(m);
    }

    total
}

/// Like [`perft`], but print the node count under each root move, in the
/// style move-generation debuggers expect. Returns the total.
pub fn divide(board: &mut Board, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    let mut total = 0;
    for m in legal_moves(board) {
        board.make(m);
        let count = perft(board, depth - 1);
        board.unmake(m);
        println!("{m:?}, {count}");
        total += count;
    }

    total
}

#[must_use]
#[allow(clippy::cast_precision_loss)]
/// Perform a performance test on the move generator and print out facts.
/// The input fen is the FEN of the board to start from, and the depth is
/// the depth from which to generate moves.
///
/// # Panics
///
/// This function will panic if `fen` is not a legal board.
pub fn perft_report(fen: &str, depth: u8) -> u64 {
    let mut board = Board::from_fen(fen).unwrap();
    let tic = Instant::now();
    let num_nodes = perft(&mut board, depth);
    let time = Instant::now() - tic;
    let speed = (num_nodes as f64) / time.as_secs_f64();
    println!(
        "time {:.2} secs, num nodes {num_nodes}: {speed:.0} nodes/sec",
        time.as_secs_f64()
    );

    num_nodes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn perft_assistant(fen: &str, node_counts: &[u64]) {
        let mut board = Board::from_fen(fen).unwrap();
        #[allow(clippy::cast_possible_truncation)]
        for (i, num) in node_counts.iter().enumerate() {
            assert_eq!(*num, perft(&mut board, i as u8), "depth {i} of {fen}");
        }
    }

    #[test]
    /// Test the perft values for the board starting position.
    fn perft_start_position() {
        perft_assistant(
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            &[1, 20, 400, 8_902, 197_281, 4_865_609],
        );
    }

    #[test]
    /// Test the perft values for the
    /// [Kiwipete](https://www.chessprogramming.org/Perft_Results#Position_2)
    /// position.
    fn perft_kiwipete() {
        perft_assistant(
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
            &[1, 48, 2_039, 97_862, 4_085_603, 193_690_690],
        );
    }

    #[test]
    fn perft_endgame() {
        // https://www.chessprogramming.org/Perft_Results#Position_3
        perft_assistant(
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
            &[1, 14, 191, 2_812, 43_238, 674_624],
        );
    }

    #[test]
    /// Test the perft values for an unbalanced position. Uses results from
    /// [the CPW wiki](https://www.chessprogramming.org/Perft_Results#Position_4).
    fn perft_unbalanced() {
        perft_assistant(
            "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
            &[1, 6, 264, 9_467, 422_333, 15_833_292],
        );
    }

    #[test]
    fn perft_edwards() {
        // https://www.chessprogramming.org/Perft_Results#Position_5
        perft_assistant(
            "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
            &[1, 44, 1_486, 62_379, 2_103_487, 89_941_194],
        );
    }

    #[test]
    fn perft_edwards2() {
        // https://www.chessprogramming.org/Perft_Results#Position_6
        perft_assistant(
            "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - - 0 10",
            &[1, 46, 2_079, 89_890, 3_894_594, 164_075_551],
        );
    }

    #[test]
    /// One ply of perft agrees with the length of the legal move list, by
    /// construction of both.
    fn perft_one_matches_movegen() {
        for fen in [
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        ] {
            let mut board = Board::from_fen(fen).unwrap();
            let count = legal_moves(&board).len() as u64;
            assert_eq!(perft(&mut board, 1), count);
        }
    }

    #[test]
    /// Perft leaves the board exactly as it found it.
    fn perft_restores_the_board() {
        let mut board =
            Board::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1")
                .unwrap();
        let before = board.clone();
        perft(&mut board, 3);
        assert_eq!(board, before);
        assert_eq!(board.state(), before.state());
    }

    #[test]
    /// Every generated move can be made and unmade without corrupting the
    /// position, at every node of a shallow traversal.
    fn make_unmake_consistency_walk() {
        fn walk(board: &mut Board, depth: u8) {
            if depth == 0 {
                return;
            }
            for m in legal_moves(board) {
                let before = board.clone();
                board.make(m);
                walk(board, depth - 1);
                board.unmake(m);
                assert_eq!(*board, before, "unmaking {m} corrupted the position");
            }
        }
        for fen in [
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
            "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        ] {
            let mut board = Board::from_fen(fen).unwrap();
            walk(&mut board, 3);
        }
    }
}
