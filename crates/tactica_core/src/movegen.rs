use crate::{board::Position, types::*};

/// Generate all legal moves for the side to move, returning a freshly
/// allocated vector. Internally delegates to `legal_moves_into`, cloning the
/// position only once.
pub fn legal_moves(pos: &Position) -> Vec<Move> {
    let mut tmp = pos.clone();
    let mut out = Vec::with_capacity(64);
    legal_moves_into(&mut tmp, &mut out);
    out
}

/// Generate all legal moves for the side to move into the provided buffer,
/// reusing it across calls. Moves come out in square-ascending generation
/// order; the search's first-best tie-break relies on this being stable.
pub fn legal_moves_into(pos: &mut Position, out: &mut Vec<Move>) {
    legal_moves_for(pos, pos.side_to_move, out);
}

/// Same as `legal_moves_into`, but for an explicit color. Needed by checkmate
/// queries, which may ask about the side not on move.
pub fn legal_moves_for(pos: &mut Position, color: Color, out: &mut Vec<Move>) {
    out.clear();
    pseudo_moves(pos, color, out);

    // Filter illegal moves in-place by playing them on the mutable position.
    out.retain(|&mv| {
        let undo = pos.make_move(mv);
        let illegal = pos.in_check(color);
        pos.unmake_move(mv, undo);
        !illegal
    });
}

/// Legal destination squares for the piece on `from`, or empty if the square
/// holds no piece of the side to move. This is the membership list the
/// presentation layer checks before asking for a move to be applied.
pub fn legal_targets(pos: &Position, from: u8) -> Vec<u8> {
    let pc = match pos.piece_at(from) {
        Some(p) => p,
        None => return Vec::new(),
    };
    let mut tmp = pos.clone();
    let mut moves = Vec::with_capacity(28);
    pseudo_moves_from(&tmp, from, &mut moves);
    moves.retain(|&mv| {
        let undo = tmp.make_move(mv);
        let illegal = tmp.in_check(pc.color);
        tmp.unmake_move(mv, undo);
        !illegal
    });
    moves.iter().map(|mv| mv.to).collect()
}

/// Pseudo-legal destination squares for the piece on `from` (may leave the
/// own king attacked; see `legal_targets` for the filtered list).
pub fn pseudo_targets(pos: &Position, from: u8) -> Vec<u8> {
    let mut moves = Vec::with_capacity(28);
    pseudo_moves_from(pos, from, &mut moves);
    moves.iter().map(|mv| mv.to).collect()
}

/// Every square `by` attacks: pseudo-legal capture targets of all its pieces,
/// with pawn forward pushes and castling excluded. Sorted and de-duplicated.
pub fn attacked_squares(pos: &Position, by: Color) -> Vec<u8> {
    let mut out = Vec::with_capacity(64);
    for from in 0..64u8 {
        let pc = match pos.piece_at(from) {
            Some(p) => p,
            None => continue,
        };
        if pc.color != by {
            continue;
        }
        let f = file_of(from);
        let r = rank_of(from);
        match pc.kind {
            PieceKind::Pawn => {
                let dir: i8 = match by {
                    Color::White => 1,
                    Color::Black => -1,
                };
                for df in [-1, 1] {
                    if let Some(to) = sq(f + df, r + dir) {
                        out.push(to);
                    }
                }
            }
            _ => {
                let mut moves = Vec::with_capacity(28);
                match pc.kind {
                    PieceKind::King => gen_king(pos, from, pc.color, &mut moves),
                    _ => pseudo_moves_from(pos, from, &mut moves),
                }
                out.extend(moves.iter().map(|mv| mv.to));
            }
        }
    }
    out.sort_unstable();
    out.dedup();
    out
}

fn pseudo_moves(pos: &Position, color: Color, out: &mut Vec<Move>) {
    for sq in 0..64u8 {
        if let Some(pc) = pos.piece_at(sq)
            && pc.color == color
        {
            pseudo_moves_from(pos, sq, out);
        }
    }
}

fn pseudo_moves_from(pos: &Position, from: u8, out: &mut Vec<Move>) {
    let pc = match pos.piece_at(from) {
        Some(p) => p,
        None => return,
    };
    match pc.kind {
        PieceKind::Pawn => gen_pawn(pos, from, pc.color, out),
        PieceKind::Knight => gen_knight(pos, from, pc.color, out),
        PieceKind::Bishop => gen_slider(
            pos,
            from,
            pc.color,
            out,
            &[(1, 1), (1, -1), (-1, 1), (-1, -1)],
        ),
        PieceKind::Rook => {
            gen_slider(pos, from, pc.color, out, &[(1, 0), (-1, 0), (0, 1), (0, -1)])
        }
        PieceKind::Queen => gen_slider(
            pos,
            from,
            pc.color,
            out,
            &[
                (1, 1),
                (1, -1),
                (-1, 1),
                (-1, -1),
                (1, 0),
                (-1, 0),
                (0, 1),
                (0, -1),
            ],
        ),
        PieceKind::King => {
            gen_king(pos, from, pc.color, out);
            gen_castle(pos, from, pc.color, out);
        }
    }
}

fn gen_pawn(pos: &Position, from: u8, c: Color, out: &mut Vec<Move>) {
    let f = file_of(from);
    let r = rank_of(from);

    let dir: i8 = match c {
        Color::White => 1,
        Color::Black => -1,
    };
    let start_rank: i8 = match c {
        Color::White => 1,
        Color::Black => 6,
    };

    // forward 1, forward 2 from start (promotion is implicit: reaching the
    // last rank always queens when the move is applied)
    if let Some(to) = sq(f, r + dir) {
        if pos.piece_at(to).is_none() {
            out.push(Move::new(from, to));

            if r == start_rank {
                if let Some(to2) = sq(f, r + 2 * dir) {
                    if pos.piece_at(to2).is_none() {
                        out.push(Move::new(from, to2));
                    }
                }
            }
        }
    }

    // captures + en-passant
    for df in [-1, 1] {
        if let Some(to) = sq(f + df, r + dir) {
            if let Some(tpc) = pos.piece_at(to) {
                if tpc.color != c {
                    out.push(Move::new(from, to));
                }
            } else if pos.en_passant == Some(to) {
                out.push(Move::new(from, to));
            }
        }
    }
}

fn gen_knight(pos: &Position, from: u8, c: Color, out: &mut Vec<Move>) {
    let f = file_of(from);
    let r = rank_of(from);
    let deltas = [
        (1, 2),
        (2, 1),
        (-1, 2),
        (-2, 1),
        (1, -2),
        (2, -1),
        (-1, -2),
        (-2, -1),
    ];
    for (df, dr) in deltas {
        if let Some(to) = sq(f + df, r + dr) {
            match pos.piece_at(to) {
                None => out.push(Move::new(from, to)),
                Some(pc) if pc.color != c => out.push(Move::new(from, to)),
                _ => {}
            }
        }
    }
}

fn gen_slider(pos: &Position, from: u8, c: Color, out: &mut Vec<Move>, dirs: &[(i8, i8)]) {
    let f0 = file_of(from);
    let r0 = rank_of(from);
    for (df, dr) in dirs {
        let mut f = f0 + df;
        let mut r = r0 + dr;
        while let Some(to) = sq(f, r) {
            match pos.piece_at(to) {
                None => out.push(Move::new(from, to)),
                Some(pc) if pc.color != c => {
                    out.push(Move::new(from, to));
                    break;
                }
                _ => break,
            }
            f += df;
            r += dr;
        }
    }
}

fn gen_king(pos: &Position, from: u8, c: Color, out: &mut Vec<Move>) {
    let f = file_of(from);
    let r = rank_of(from);
    let deltas = [
        (1, 1),
        (1, 0),
        (1, -1),
        (0, 1),
        (0, -1),
        (-1, 1),
        (-1, 0),
        (-1, -1),
    ];
    for (df, dr) in deltas {
        if let Some(to) = sq(f + df, r + dr) {
            match pos.piece_at(to) {
                None => out.push(Move::new(from, to)),
                Some(pc) if pc.color != c => out.push(Move::new(from, to)),
                _ => {}
            }
        }
    }
}

fn gen_castle(pos: &Position, from: u8, c: Color, out: &mut Vec<Move>) {
    // Must be on original king square
    let (king_from, kingside, queenside) = match c {
        Color::White => (4u8, pos.castling.wk, pos.castling.wq),
        Color::Black => (60u8, pos.castling.bk, pos.castling.bq),
    };
    if from != king_from {
        return;
    }

    // Can't castle out of check.
    if pos.in_check(c) {
        return;
    }

    let enemy = c.other();
    let home = match c {
        Color::White => 0u8,
        Color::Black => 56u8,
    };

    // Kingside: transit and destination squares empty and unattacked, rook at
    // its home square.
    if kingside
        && pos.piece_at(home + 7)
            .is_some_and(|pc| pc.kind == PieceKind::Rook && pc.color == c)
        && pos.piece_at(home + 5).is_none()
        && pos.piece_at(home + 6).is_none()
        && !pos.is_square_attacked(home + 5, enemy)
        && !pos.is_square_attacked(home + 6, enemy)
    {
        out.push(Move::new(from, home + 6));
    }

    // Queenside: b-file square must also be empty, though only the transit
    // and destination squares need to be safe.
    if queenside
        && pos.piece_at(home)
            .is_some_and(|pc| pc.kind == PieceKind::Rook && pc.color == c)
        && pos.piece_at(home + 3).is_none()
        && pos.piece_at(home + 2).is_none()
        && pos.piece_at(home + 1).is_none()
        && !pos.is_square_attacked(home + 3, enemy)
        && !pos.is_square_attacked(home + 2, enemy)
    {
        out.push(Move::new(from, home + 2));
    }
}

/// Check plus no legal moves for `color`.
pub fn is_checkmate(pos: &Position, color: Color) -> bool {
    if !pos.in_check(color) {
        return false;
    }
    let mut tmp = pos.clone();
    let mut moves = Vec::with_capacity(64);
    legal_moves_for(&mut tmp, color, &mut moves);
    moves.is_empty()
}

/// The side to move is not in check yet has no legal moves.
pub fn is_stalemate(pos: &Position) -> bool {
    if pos.in_check(pos.side_to_move) {
        return false;
    }
    legal_moves(pos).is_empty()
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
