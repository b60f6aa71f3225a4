use crate::{board::Position, movegen::legal_moves_into};

/// Pure perft node count: the number of leaf positions of the legal move
/// tree, `depth` plies down. Standard published values for well-known
/// positions make this the regression oracle for move generation.
pub fn perft(pos: &mut Position, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let mut moves = Vec::with_capacity(64);
    legal_moves_into(pos, &mut moves);

    // Bulk count at the horizon: each legal move is one leaf.
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for mv in moves {
        let undo = pos.make_move(mv);
        nodes += perft(pos, depth - 1);
        pos.unmake_move(mv, undo);
    }
    nodes
}
