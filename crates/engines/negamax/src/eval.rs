//! Static position evaluation.
//!
//! Scores are white-positive centipawns: material, piece-square placement,
//! and pawn-structure penalties, with an immediate shortcut for checkmate.
//! The search applies its own sign at the leaves.

use tactica_core::{Color, PieceKind, Position, file_of, is_checkmate, rank_of, sq};

use crate::tables::{
    BISHOP_TABLE, KING_ENDGAME_TABLE, KING_TABLE, KNIGHT_TABLE, PAWN_TABLE, QUEEN_TABLE,
    ROOK_TABLE,
};

/// Score assigned to a checkmated side, far outside any material swing.
pub const MATE_SCORE: i32 = 20_000;

/// Penalty per doubled, blocked, or isolated pawn.
const PAWN_FAULT_PENALTY: i32 = 30;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum GamePhase {
    Opening,
    Ending,
}

/// Evaluates the position from white's perspective.
///
/// Returns a score in centipawns:
/// - Positive = good for white
/// - Negative = good for black
/// - ±20000 = one side is checkmated
pub fn evaluate(pos: &Position) -> i32 {
    // Terminal shortcut before anything else.
    if is_checkmate(pos, Color::White) {
        return -MATE_SCORE;
    }
    if is_checkmate(pos, Color::Black) {
        return MATE_SCORE;
    }

    let mut counts = [[0i32; 6]; 2]; // [color][kind]
    for pc in pos.board.iter().flatten() {
        counts[pc.color.idx()][pc.kind.idx()] += 1;
    }

    // Game phase, judged on a coarse 9/5/3/3/1 material scale (king excluded)
    // and on how long the game has been running.
    let small_material = |c: Color| -> i32 {
        let c = c.idx();
        9 * counts[c][PieceKind::Queen.idx()]
            + 5 * counts[c][PieceKind::Rook.idx()]
            + 3 * counts[c][PieceKind::Bishop.idx()]
            + 3 * counts[c][PieceKind::Knight.idx()]
            + counts[c][PieceKind::Pawn.idx()]
    };
    let phase = if pos.history.len() > 40
        || (small_material(Color::White) < 14 && small_material(Color::Black) < 14)
    {
        GamePhase::Ending
    } else {
        GamePhase::Opening
    };

    let diff = |kind: PieceKind| -> i32 {
        counts[Color::White.idx()][kind.idx()] - counts[Color::Black.idx()][kind.idx()]
    };

    let material = 900 * diff(PieceKind::Queen)
        + 500 * diff(PieceKind::Rook)
        + 330 * diff(PieceKind::Bishop)
        + 320 * diff(PieceKind::Knight)
        + 100 * diff(PieceKind::Pawn);

    let pawn_faults = (doubled_pawns(pos, Color::White) - doubled_pawns(pos, Color::Black))
        + (blocked_pawns(pos, Color::White) - blocked_pawns(pos, Color::Black))
        + (isolated_pawns(pos, Color::White) - isolated_pawns(pos, Color::Black));

    material - PAWN_FAULT_PENALTY * pawn_faults + piece_square_score(pos, phase)
}

/// Sum the per-square table values over every piece. Tables are authored from
/// white's perspective with index 0 at a8; black uses the vertical mirror
/// with the sign negated.
fn piece_square_score(pos: &Position, phase: GamePhase) -> i32 {
    let mut score = 0;
    for sq in 0..64u8 {
        let pc = match pos.piece_at(sq) {
            Some(p) => p,
            None => continue,
        };
        let file = file_of(sq) as usize;
        let rank = rank_of(sq) as usize;
        let (idx, sign) = match pc.color {
            Color::White => ((7 - rank) * 8 + file, 1),
            Color::Black => (rank * 8 + file, -1),
        };
        let table = match pc.kind {
            PieceKind::Pawn => &PAWN_TABLE,
            PieceKind::Knight => &KNIGHT_TABLE,
            PieceKind::Bishop => &BISHOP_TABLE,
            PieceKind::Rook => &ROOK_TABLE,
            PieceKind::Queen => &QUEEN_TABLE,
            PieceKind::King => match phase {
                GamePhase::Opening => &KING_TABLE,
                GamePhase::Ending => &KING_ENDGAME_TABLE,
            },
        };
        score += sign * table[idx];
    }
    score
}

fn pawn_files(pos: &Position, color: Color) -> Vec<i8> {
    let mut files = Vec::with_capacity(8);
    for sq in 0..64u8 {
        if let Some(pc) = pos.piece_at(sq) {
            if pc.color == color && pc.kind == PieceKind::Pawn {
                files.push(file_of(sq));
            }
        }
    }
    files
}

/// Pawns beyond the first on each file.
fn doubled_pawns(pos: &Position, color: Color) -> i32 {
    let mut per_file = [0i32; 8];
    for f in pawn_files(pos, color) {
        per_file[f as usize] += 1;
    }
    per_file.iter().map(|&n| (n - 1).max(0)).sum()
}

/// Pawns with an enemy pawn directly ahead.
fn blocked_pawns(pos: &Position, color: Color) -> i32 {
    let dir: i8 = match color {
        Color::White => 1,
        Color::Black => -1,
    };
    let enemy = color.other();
    let mut blocked = 0;
    for from in 0..64u8 {
        let pc = match pos.piece_at(from) {
            Some(p) => p,
            None => continue,
        };
        if pc.color != color || pc.kind != PieceKind::Pawn {
            continue;
        }
        if let Some(ahead) = sq(file_of(from), rank_of(from) + dir) {
            if pos
                .piece_at(ahead)
                .is_some_and(|p| p.color == enemy && p.kind == PieceKind::Pawn)
            {
                blocked += 1;
            }
        }
    }
    blocked
}

/// Pawns with no friendly pawn on an adjacent file. Counted per pawn, so a
/// doubled isolated pair counts twice.
fn isolated_pawns(pos: &Position, color: Color) -> i32 {
    let files = pawn_files(pos, color);
    let mut isolated = 0;
    for &f in &files {
        let left = f > 0 && files.contains(&(f - 1));
        let right = f < 7 && files.contains(&(f + 1));
        if !left && !right {
            isolated += 1;
        }
    }
    isolated
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
