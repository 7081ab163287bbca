//! End-to-end scenarios for the board and the agent.

use std::sync::{Arc, Mutex};

use tictactoe_agent::rules::{chances_to_win, minimum_steps_to_win};
use tictactoe_agent::{Agent, Board, Choice, Mark, Status};

fn board_with(a: &[(usize, usize)], b: &[(usize, usize)]) -> Board {
    let mut board = Board::new();
    for &(row, col) in a {
        board.place(row, col, Mark::SideA);
    }
    for &(row, col) in b {
        board.place(row, col, Mark::SideB);
    }
    board
}

#[test]
fn test_single_placement_leaves_all_lines_open() {
    let board = board_with(&[(0, 0)], &[]);
    assert_eq!(chances_to_win(&board, Mark::SideA), 8);
}

#[test]
fn test_completed_row_wins() {
    let board = board_with(&[(0, 0), (0, 1), (0, 2)], &[]);
    assert_eq!(board.status(), Status::SideAWins);
    assert_eq!(minimum_steps_to_win(&board, Mark::SideA), 0);
}

#[test]
fn test_agent_completes_diagonal() {
    let board = board_with(&[(0, 0), (1, 1)], &[(0, 1)]);
    let choice = Agent::new()
        .best_choice_at(&board, Mark::SideA, 1)
        .unwrap()
        .unwrap();
    // (10 - 0) * 1000 + 3 * 100 + (10 - 0) * 10 + 6
    assert_eq!(choice, Choice::new(2, 2, 10406));
}

#[test]
fn test_full_board_has_no_choice() {
    let board: Board = "XOX|XOO|OXX".parse().unwrap();
    assert_eq!(board.status(), Status::Drawn);
    let agent = Agent::new();
    assert_eq!(agent.best_choice(&board, Mark::SideA), Ok(None));
    assert_eq!(agent.best_choice(&board, Mark::SideB), Ok(None));
    assert_eq!(agent.best_choice_at(&board, Mark::SideB, 3), Ok(None));
}

#[test]
fn test_agent_blocks_open_threat() {
    // SideA threatens the top row; SideB has nothing better than blocking.
    let board = board_with(&[(0, 0), (0, 1)], &[(1, 1)]);
    let choice = Agent::new()
        .best_choice(&board, Mark::SideB)
        .unwrap()
        .unwrap();
    assert_eq!((choice.row, choice.col), (0, 2));
}

#[test]
fn test_search_leaves_caller_board_untouched() {
    let calls = Arc::new(Mutex::new(0));
    let mut board = board_with(&[(0, 0)], &[(1, 1)]);
    let counter = Arc::clone(&calls);
    board.add_listener(move |_: usize, _: usize, _: Mark| {
        *counter.lock().unwrap() += 1;
    });
    let before = board.clone();

    let agent = Agent::new();
    for depth in 1..=3 {
        agent.best_choice_at(&board, Mark::SideA, depth).unwrap();
    }

    assert_eq!(board, before);
    assert_eq!(board.listener_count(), 1);
    assert_eq!(*calls.lock().unwrap(), 0);
}

#[test]
fn test_agent_self_play_ends() {
    let agent = Agent::new();
    let mut board = Board::new();
    let mut mark = Mark::SideA;
    while board.status() == Status::Running {
        let choice = agent.best_choice_at(&board, mark, 2).unwrap().unwrap();
        assert!(board.is_empty_at(choice.row, choice.col));
        board.place(choice.row, choice.col, mark);
        mark = mark.opponent();
    }
    assert!(board.status().is_over());
}

#[test]
fn test_board_serializes_cells_only() {
    let mut board = board_with(&[(0, 0)], &[(2, 2)]);
    board.add_listener(|_: usize, _: usize, _: Mark| {});
    let json = serde_json::to_string(&board).unwrap();
    let restored: Board = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, board);
    assert_eq!(restored.listener_count(), 0);
}
