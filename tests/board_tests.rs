//! Board container and starting layout tests.

use rust_backgammon::board::{Board, BoardInitializer, CHECKERS_PER_COLOR, STANDARD_LAYOUT};
use rust_backgammon::core::{BoardError, Checker, Color};

fn standard() -> Board {
    let mut board = Board::new();
    BoardInitializer::standard(&mut board);
    board
}

/// The starting position matches the canonical layout exactly.
#[test]
fn test_initial_layout_counts() {
    let board = standard();

    let expected = [
        (0, Color::Black, 2),
        (11, Color::Black, 5),
        (16, Color::Black, 3),
        (18, Color::Black, 5),
        (23, Color::White, 2),
        (12, Color::White, 5),
        (7, Color::White, 3),
        (5, Color::White, 5),
    ];
    for (point, color, count) in expected {
        assert_eq!(board.count_at(point), count, "count at {}", point);
        assert_eq!(board.color_at(point), Some(color), "color at {}", point);
    }

    let occupied: usize = (0..24).filter(|&p| !board.is_point_empty(p)).count();
    assert_eq!(occupied, STANDARD_LAYOUT.len());
    for color in Color::ALL {
        assert!(board.is_bar_empty(color));
        assert_eq!(board.borne_off(color), 0);
        assert_eq!(board.total_checkers(color), CHECKERS_PER_COLOR);
    }
}

/// Points are stacks: the last checker added is the first removed.
#[test]
fn test_point_stack_order() {
    let mut board = Board::new();
    board.add_checker(4, Checker::new(Color::White)).unwrap();
    board.add_checker(4, Checker::new(Color::White)).unwrap();

    assert_eq!(board.checkers_at(4).len(), 2);
    assert_eq!(board.remove_top_checker(4).unwrap().color(), Color::White);
    assert_eq!(board.count_at(4), 1);
    assert_eq!(board.remove_top_checker(4).unwrap().color(), Color::White);
    assert_eq!(board.remove_top_checker(4), Err(BoardError::EmptyPoint(4)));
    assert_eq!(board.color_at(4), None);
}

#[test]
fn test_bar_per_color() {
    let mut board = Board::new();
    board.add_to_bar(Checker::new(Color::Black));
    board.add_to_bar(Checker::new(Color::Black));

    assert_eq!(board.bar_count(Color::Black), 2);
    assert!(board.is_bar_empty(Color::White));
    assert_eq!(board.remove_from_bar(Color::White), None);
    assert_eq!(board.remove_from_bar(Color::Black).map(|c| c.color()), Some(Color::Black));
    assert_eq!(board.bar_count(Color::Black), 1);
}

#[test]
fn test_out_of_range_points() {
    let mut board = standard();

    assert_eq!(board.add_checker(24, Checker::new(Color::White)), Err(BoardError::InvalidPoint(24)));
    assert_eq!(board.remove_top_checker(30), Err(BoardError::InvalidPoint(30)));
    assert_eq!(board.count_at(99), 0);
    assert!(board.checkers_at(99).is_empty());
    assert!(board.point(24).is_none());
}

#[test]
fn test_home_accounting() {
    let board = standard();

    // White home is 0..=5: only the five on point 5
    assert_eq!(board.checkers_outside_home(Color::White), 10);
    // Black home is 18..=23: only the five on point 18
    assert_eq!(board.checkers_outside_home(Color::Black), 10);

    let mut white_points: Vec<u8> = board.points_of(Color::White).collect();
    white_points.sort_unstable();
    assert_eq!(white_points, vec![5, 7, 12, 23]);
}

#[test]
fn test_bear_off_counter() {
    let mut board = Board::new();
    BoardInitializer::from_layout(&mut board, &[(Color::White, 0, 2)]).unwrap();

    board.bear_off(0).unwrap();

    assert_eq!(board.borne_off(Color::White), 1);
    assert_eq!(board.count_at(0), 1);
    assert_eq!(board.total_checkers(Color::White), 2);
}

#[test]
fn test_reset_clears_everything() {
    let mut board = standard();
    board.add_to_bar(Checker::new(Color::White));
    board.bear_off(18).unwrap();

    board.reset();

    assert_eq!(board, Board::new());
}

#[test]
fn test_board_serde_roundtrip() {
    let board = standard();
    let json = serde_json::to_string(&board).unwrap();
    let back: Board = serde_json::from_str(&json).unwrap();

    assert_eq!(back, board);
}
