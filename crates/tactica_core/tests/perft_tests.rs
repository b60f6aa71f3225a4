//! Perft regression tests against published node counts.
//!
//! Promotion here always queens, so only positions where no promotion can
//! occur within the tested depth are usable as oracles.

use tactica_core::{Position, perft};

struct PerftCase {
    fen: &'static str,
    depths: &'static [(u8, u64)],
}

const CASES: &[PerftCase] = &[
    PerftCase {
        fen: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        depths: &[(1, 20), (2, 400), (3, 8_902), (4, 197_281)],
    },
    PerftCase {
        // Kiwipete: castling, pins, en passant, checks
        fen: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        depths: &[(1, 48), (2, 2_039), (3, 97_862)],
    },
    PerftCase {
        // Rook-and-pawns endgame with en-passant traps
        fen: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        depths: &[(1, 14), (2, 191), (3, 2_812), (4, 43_238)],
    },
    PerftCase {
        // Steven Edwards' position 6
        fen: "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - - 0 10",
        depths: &[(1, 46), (2, 2_079), (3, 89_890)],
    },
];

#[test]
fn perft_matches_published_counts() {
    for case in CASES {
        for &(depth, expected) in case.depths {
            let mut pos = Position::from_fen(case.fen);
            let got = perft(&mut pos, depth);
            assert_eq!(
                got, expected,
                "perft mismatch for FEN '{}' at depth {}: expected {}, got {}",
                case.fen, depth, expected, got
            );
        }
    }
}

#[test]
fn perft_depth_zero_is_one() {
    let mut pos = Position::startpos();
    assert_eq!(perft(&mut pos, 0), 1);
}

#[test]
fn perft_leaves_position_unchanged() {
    let fen = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
    let mut pos = Position::from_fen(fen);
    perft(&mut pos, 3);
    assert_eq!(pos.to_fen(), fen);
}
