use super::*;

#[test]
fn test_piece_codes_round_trip() {
    for color in [Color::White, Color::Black] {
        for kind in [
            PieceKind::Pawn,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Rook,
            PieceKind::Queen,
            PieceKind::King,
        ] {
            let piece = Piece::new(color, kind);
            assert_eq!(Piece::from_code(&piece.code()), Some(piece));
        }
    }
}

#[test]
fn test_piece_code_format() {
    let piece = Piece::new(Color::Black, PieceKind::Queen);
    assert_eq!(piece.code(), "Qb");
    assert_eq!(Piece::from_code("Pw"), Some(Piece::new(Color::White, PieceKind::Pawn)));
}

#[test]
fn test_bad_codes_rejected() {
    assert_eq!(Piece::from_code(""), None);
    assert_eq!(Piece::from_code("Q"), None);
    assert_eq!(Piece::from_code("Qx"), None);
    assert_eq!(Piece::from_code("Xw"), None);
    assert_eq!(Piece::from_code("Qbw"), None);
    assert_eq!(Piece::from_code(EMPTY_CODE), None);
}

#[test]
fn test_square_coordinate_round_trip() {
    for sq in 0..64u8 {
        assert_eq!(coord_to_sq(&sq_to_coord(sq)), Some(sq));
    }
    assert_eq!(coord_to_sq("a1"), Some(0));
    assert_eq!(coord_to_sq("h8"), Some(63));
    assert_eq!(coord_to_sq("e4"), Some(28));
    assert_eq!(coord_to_sq("i1"), None);
    assert_eq!(coord_to_sq("a9"), None);
    assert_eq!(coord_to_sq("e"), None);
}

#[test]
fn test_square_helpers() {
    assert_eq!(sq(0, 0), Some(0));
    assert_eq!(sq(7, 7), Some(63));
    assert_eq!(sq(-1, 0), None);
    assert_eq!(sq(0, 8), None);
    assert_eq!(file_of(28), 4);
    assert_eq!(rank_of(28), 3);
}
