use super::*;

#[test]
fn test_player_opponent() {
    assert_eq!(Player::P1.opponent(), Player::P2);
    assert_eq!(Player::P2.opponent(), Player::P1);
}

#[test]
fn test_owner_of_parity() {
    assert_eq!(owner_of(0), None);
    assert_eq!(owner_of(1), Some(Player::P2));
    assert_eq!(owner_of(2), Some(Player::P1));
    assert_eq!(owner_of(3), Some(Player::P2));
    assert_eq!(owner_of(4), Some(Player::P1));
    assert_eq!(owner_of(5), Some(Player::P2));
}

#[test]
fn test_base_values() {
    assert_eq!(Player::P1.base_value(), 2);
    assert_eq!(Player::P2.base_value(), 1);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(2, 2);
    assert_eq!(pos.to_index(), 12);
    assert_eq!(idx(2, 2), 12);
    assert_eq!(Pos::from_index(12), CENTER);
    assert_eq!(Pos::from_index(19), Pos::new(3, 4));
}

#[test]
fn test_pos_try_from_index() {
    assert_eq!(Pos::try_from_index(24), Some(Pos::new(4, 4)));
    assert_eq!(Pos::try_from_index(25), None);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(4, 4));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, 5));
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 5);
    assert_eq!(TOTAL_CELLS, 25);
}

#[test]
fn test_lines_cover_rows_cols_diagonals() {
    assert_eq!(LINES[0], [0, 1, 2, 3, 4]);
    assert_eq!(LINES[4], [20, 21, 22, 23, 24]);
    assert_eq!(LINES[5], [0, 5, 10, 15, 20]);
    assert_eq!(LINES[9], [4, 9, 14, 19, 24]);
    assert_eq!(LINES[10], [0, 6, 12, 18, 24]);
    assert_eq!(LINES[11], [4, 8, 12, 16, 20]);
    assert_eq!(bitboard::LINE_MASKS[10].count(), 5);
}

#[test]
fn test_corners_and_opposites() {
    assert_eq!(Pos::new(0, 0).opposite_corner(), Some(Pos::new(4, 4)));
    assert_eq!(Pos::new(0, 4).opposite_corner(), Some(Pos::new(4, 0)));
    assert_eq!(Pos::new(2, 2).opposite_corner(), None);
    assert!(CORNERS.iter().all(|c| c.center_distance() == 4));
}

#[test]
fn test_board_parse_and_display() {
    let board: Board = "10000/02000/00500/00030/00004".parse().unwrap();
    assert_eq!(board.get(Pos::new(0, 0)), 1);
    assert_eq!(board.get(Pos::new(2, 2)), 5);
    assert_eq!(board.to_string(), "10000\n02000\n00500\n00030\n00004\n");
    assert_eq!(board.empty_count(), 20);
}

#[test]
fn test_board_parse_errors() {
    assert_eq!(
        "0000".parse::<Board>(),
        Err(ParseBoardError::WrongLength(4))
    );
    assert_eq!(
        "00000 00000 00000 00000 0000x".parse::<Board>(),
        Err(ParseBoardError::InvalidCell('x'))
    );
    assert_eq!(
        "00000 00000 00000 00000 00006".parse::<Board>(),
        Err(ParseBoardError::InvalidCell('6'))
    );
}

#[test]
fn test_board_ownership_masks() {
    let mut board = Board::new();
    board.set(Pos::new(0, 0), 2);
    board.set(Pos::new(0, 1), 3);
    board.set(Pos::new(1, 1), 5);

    assert_eq!(board.count_owned(Player::P1), 1);
    assert_eq!(board.count_owned(Player::P2), 2);
    assert!(board.owned(Player::P2).get(Pos::new(1, 1)));
    assert!(board.is_locked(Pos::new(1, 1)));
    assert_eq!(board.empty().count(), 22);
}

#[test]
fn test_board_key_is_exact() {
    let mut a = Board::new();
    let mut b = Board::new();
    assert_eq!(a.key(), b.key());

    a.set(Pos::new(4, 4), 1);
    b.set(Pos::new(4, 4), 3);
    assert_ne!(a.key(), b.key());

    b.set(Pos::new(4, 4), 1);
    assert_eq!(a.key(), b.key());
}

#[test]
fn test_set_clamps_to_lock() {
    let mut board = Board::new();
    board.set(Pos::new(0, 0), 9);
    assert_eq!(board.get(Pos::new(0, 0)), LOCKED);
}
