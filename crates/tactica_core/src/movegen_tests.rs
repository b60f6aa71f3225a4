use super::*;
use crate::types::coord_to_sq;

#[test]
fn test_startpos_moves() {
    let pos = Position::startpos();
    let moves = legal_moves(&pos);
    // Starting position has 20 legal moves
    assert_eq!(moves.len(), 20);
}

#[test]
fn test_kiwipete_moves() {
    // Kiwipete position - complex with many move types
    let pos =
        Position::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -");
    let moves = legal_moves(&pos);
    assert_eq!(moves.len(), 48);
}

#[test]
fn test_knight_targets_from_start() {
    let pos = Position::startpos();
    let mut targets = legal_targets(&pos, coord_to_sq("b1").unwrap());
    targets.sort_unstable();
    assert_eq!(
        targets,
        vec![coord_to_sq("a3").unwrap(), coord_to_sq("c3").unwrap()]
    );
}

#[test]
fn test_empty_square_has_no_targets() {
    let pos = Position::startpos();
    assert!(legal_targets(&pos, coord_to_sq("e4").unwrap()).is_empty());
}

#[test]
fn test_legal_moves_never_leave_own_king_attacked() {
    // Walk two plies from the start; every legal move must leave the mover
    // safe after it is applied.
    let mut pos = Position::startpos();
    let mut first = Vec::new();
    legal_moves_into(&mut pos, &mut first);
    for m1 in first {
        let u1 = pos.make_move(m1);
        assert!(!pos.in_check(Color::White), "white left in check by {:?}", m1);

        let mut replies = Vec::new();
        legal_moves_into(&mut pos, &mut replies);
        for m2 in replies {
            let u2 = pos.make_move(m2);
            assert!(!pos.in_check(Color::Black), "black left in check by {:?}", m2);
            pos.unmake_move(m2, u2);
        }
        pos.unmake_move(m1, u1);
    }
}

#[test]
fn test_pinned_piece_cannot_expose_king() {
    // Black bishop pins the white knight on d2 against the king on e1: the
    // knight moves by pattern, but never legally.
    let pos = Position::from_fen("4k3/8/8/8/1b6/8/3N4/4K3 w - - 0 1");
    let from = coord_to_sq("d2").unwrap();
    assert!(!pseudo_targets(&pos, from).is_empty());
    assert!(legal_targets(&pos, from).is_empty());
}

#[test]
fn test_en_passant_is_generated() {
    let pos = Position::from_fen("rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3");
    let targets = legal_targets(&pos, coord_to_sq("e5").unwrap());
    assert!(targets.contains(&coord_to_sq("d6").unwrap()), "en-passant capture");
    assert!(targets.contains(&coord_to_sq("e6").unwrap()), "forward push");
}

#[test]
fn test_castle_through_attacked_square_rejected() {
    // Black rook on f2 covers f1, the king's transit square.
    let pos = Position::from_fen("4k3/8/8/8/8/8/5r2/4K2R w K - 0 1");
    let targets = legal_targets(&pos, coord_to_sq("e1").unwrap());
    assert!(!targets.contains(&coord_to_sq("g1").unwrap()));
}

#[test]
fn test_castle_requires_empty_transit() {
    let pos = Position::from_fen("4k3/8/8/8/8/8/8/4KB1R w K - 0 1");
    let targets = legal_targets(&pos, coord_to_sq("e1").unwrap());
    assert!(!targets.contains(&coord_to_sq("g1").unwrap()));
}

#[test]
fn test_castle_generated_when_clear() {
    let pos = Position::from_fen("4k3/8/8/8/8/8/8/4K2R w K - 0 1");
    let targets = legal_targets(&pos, coord_to_sq("e1").unwrap());
    assert!(targets.contains(&coord_to_sq("g1").unwrap()));
}

#[test]
fn test_back_rank_mate() {
    let pos = Position::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1");
    assert!(is_checkmate(&pos, Color::Black));
    assert!(legal_moves(&pos).is_empty());
    assert!(!is_stalemate(&pos), "checkmate and stalemate are exclusive");
}

#[test]
fn test_stalemate_is_not_checkmate() {
    // Black king cornered but not attacked.
    let pos = Position::from_fen("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1");
    assert!(is_stalemate(&pos));
    assert!(!is_checkmate(&pos, Color::Black));
    assert!(legal_moves(&pos).is_empty());
}

#[test]
fn test_check_is_not_checkmate() {
    let pos = Position::from_fen("rnbqkbnr/ppppp1pp/8/5p1Q/4P3/8/PPPP1PPP/RNB1KBNR b KQkq - 1 2");
    assert!(pos.in_check(Color::Black));
    assert!(!is_checkmate(&pos, Color::Black));
    assert!(!legal_moves(&pos).is_empty());
}

#[test]
fn test_attacked_squares_from_start() {
    // From the start white attacks exactly the third rank: every square is a
    // pawn capture target, with the knights adding nothing new.
    let pos = Position::startpos();
    let attacked = attacked_squares(&pos, Color::White);
    assert_eq!(attacked, (16..=23).collect::<Vec<u8>>());
}

#[test]
fn test_attacked_squares_excludes_pawn_pushes() {
    let pos = Position::from_fen("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1");
    let attacked = attacked_squares(&pos, Color::White);
    let e3 = coord_to_sq("e3").unwrap();
    assert!(!attacked.contains(&e3), "a pawn does not attack its push square");
    assert!(attacked.contains(&coord_to_sq("d3").unwrap()));
    assert!(attacked.contains(&coord_to_sq("f3").unwrap()));
}
