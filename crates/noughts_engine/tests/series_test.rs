//! Tests for score bookkeeping and the two reset operations.

use noughts_engine::{GameStatus, MoveError, Player, Position, Series};

fn pos(index: usize) -> Position {
    Position::from_index(index).expect("valid index")
}

fn play_all(series: &mut Series, moves: &[usize]) {
    for &index in moves {
        series.play(pos(index)).expect("legal move");
    }
}

#[test]
fn test_scores_tally_wins_and_ties_exactly() {
    let mut series = Series::new();

    // Round 1: X takes the main diagonal.
    play_all(&mut series, &[0, 1, 4, 2, 8]);
    assert_eq!(series.scores().wins_x(), 1);

    // Round 2: O takes the middle row.
    series.reset_board();
    play_all(&mut series, &[0, 3, 1, 4, 8, 5]);
    assert_eq!(series.game().status().winner(), Some(Player::O));
    assert_eq!(series.scores().wins_o(), 1);

    // Round 3: tie.
    series.reset_board();
    play_all(&mut series, &[0, 2, 1, 3, 5, 4, 6, 7, 8]);
    assert_eq!(series.game().status(), &GameStatus::Tied);

    assert_eq!(series.scores().wins_x(), 1);
    assert_eq!(series.scores().wins_o(), 1);
    assert_eq!(series.scores().ties(), 1);
}

#[test]
fn test_rejected_moves_after_win_do_not_double_count() {
    let mut series = Series::new();
    play_all(&mut series, &[0, 1, 4, 2, 8]);
    assert_eq!(series.scores().wins_x(), 1);

    // Hammering on a finished game changes nothing.
    for index in [3, 5, 6] {
        assert_eq!(series.play(pos(index)), Err(MoveError::Finished));
    }
    assert_eq!(series.scores().wins_x(), 1);
}

#[test]
fn test_reset_board_during_won_state_preserves_scores() {
    let mut series = Series::new();
    play_all(&mut series, &[0, 1, 4, 2, 8]);
    assert!(series.game().status().is_terminal());

    series.reset_board();

    let game = series.game();
    assert_eq!(game.status(), &GameStatus::InProgress);
    assert_eq!(game.to_move(), Player::X);
    assert!(Position::ALL.iter().all(|&p| game.board().is_empty(p)));
    assert_eq!(game.status().winning_line(), None);
    assert_eq!(series.scores().wins_x(), 1);

    // And play resumes normally.
    series.play(pos(4)).expect("legal move");
}

#[test]
fn test_reset_scores_leaves_board_untouched() {
    let mut series = Series::new();
    play_all(&mut series, &[0, 1, 4, 2, 8]);
    series.reset_board();
    play_all(&mut series, &[4, 0]);

    let board_before = series.game().board().clone();
    series.reset_scores();

    assert_eq!(series.scores().wins_x(), 0);
    assert_eq!(series.scores().wins_o(), 0);
    assert_eq!(series.scores().ties(), 0);
    assert_eq!(series.game().board(), &board_before);
    assert_eq!(series.game().to_move(), Player::X);
}
