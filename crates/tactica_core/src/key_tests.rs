use super::*;
use crate::board::Position;

#[test]
fn test_display_parse_round_trip() {
    for fen in [
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        "k7/2K5/1Q6/8/8/8/8/8 b - - 0 1",
    ] {
        let key = PositionKey::of(&Position::from_fen(fen));
        let text = key.to_string();
        assert_eq!(text.len(), 66);
        let parsed: PositionKey = text.parse().expect("round trip parse");
        assert_eq!(parsed, key);
    }
}

#[test]
fn test_parse_rejects_malformed_input() {
    assert!("".parse::<PositionKey>().is_err());
    assert!("zz".repeat(33).parse::<PositionKey>().is_err());
    let key = PositionKey::of(&Position::startpos()).to_string();
    assert!(key[..65].parse::<PositionKey>().is_err(), "truncated key");
}

#[test]
fn test_same_position_same_key() {
    let a = Position::startpos();
    let b = Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
    assert_eq!(PositionKey::of(&a), PositionKey::of(&b));
}

#[test]
fn test_side_to_move_changes_key() {
    let a = Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
    let b = Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR b KQkq - 0 1");
    assert_ne!(PositionKey::of(&a), PositionKey::of(&b));
}

#[test]
fn test_castling_rights_change_key() {
    let a = Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
    let b = Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w Kq - 0 1");
    assert_ne!(PositionKey::of(&a), PositionKey::of(&b));
}

#[test]
fn test_board_contents_change_key() {
    let a = Position::startpos();
    let mut b = Position::startpos();
    b.make_move(crate::types::Move::new(12, 28)); // e2e4
    b.side_to_move = crate::types::Color::White; // isolate the board difference
    assert_ne!(PositionKey::of(&a), PositionKey::of(&b));
}

#[test]
fn test_en_passant_is_invisible_to_key() {
    // Two legal positions differing only in en-passant availability collide
    // under this key. Known property, kept as-is.
    let a = Position::from_fen("rnbqkbnr/ppppp1pp/8/8/4Pp2/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 2");
    let b = Position::from_fen("rnbqkbnr/ppppp1pp/8/8/4Pp2/8/PPPP1PPP/RNBQKBNR b KQkq - 0 2");
    assert_eq!(PositionKey::of(&a), PositionKey::of(&b));
}

#[test]
fn test_halfmove_clock_is_invisible_to_key() {
    let a = Position::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1");
    let b = Position::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 99 60");
    assert_eq!(PositionKey::of(&a), PositionKey::of(&b));
}

#[test]
fn test_serde_round_trips_as_string() {
    let key = PositionKey::of(&Position::startpos());
    let json = serde_json::to_string(&key).unwrap();
    assert!(json.starts_with('"') && json.ends_with('"'));
    let back: PositionKey = serde_json::from_str(&json).unwrap();
    assert_eq!(back, key);
}

#[test]
fn test_usable_as_json_map_key() {
    use std::collections::HashMap;

    let mut map: HashMap<PositionKey, i32> = HashMap::new();
    map.insert(PositionKey::of(&Position::startpos()), 17);
    let json = serde_json::to_string(&map).unwrap();
    let back: HashMap<PositionKey, i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, map);
}
