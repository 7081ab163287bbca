//! Property tests over arbitrary cell layouts.

use proptest::prelude::*;
use tictactoe_agent::rules::{LINES, minimum_steps_to_win};
use tictactoe_agent::{Agent, Board, ILLEGAL_UTILITY, Mark, Status};

fn mark() -> impl Strategy<Value = Mark> {
    prop_oneof![Just(Mark::SideA), Just(Mark::SideB), Just(Mark::Empty)]
}

fn board() -> impl Strategy<Value = Board> {
    proptest::array::uniform9(mark()).prop_map(|cells| {
        let mut board = Board::new();
        for (i, m) in cells.into_iter().enumerate() {
            board.place(i / 3, i % 3, m);
        }
        board
    })
}

fn side() -> impl Strategy<Value = Mark> {
    prop_oneof![Just(Mark::SideA), Just(Mark::SideB)]
}

fn has_full_line(board: &Board, mark: Mark) -> bool {
    LINES
        .iter()
        .any(|line| line.iter().all(|&i| board.get_flat(i) == mark))
}

proptest! {
    #[test]
    fn status_matches_exactly_one_condition(board in board()) {
        let a_won = minimum_steps_to_win(&board, Mark::SideA) == 0;
        let b_won = minimum_steps_to_win(&board, Mark::SideB) == 0;
        let expected = if a_won {
            Status::SideAWins
        } else if b_won {
            Status::SideBWins
        } else if board.count(Mark::Empty) == 0 {
            Status::Drawn
        } else {
            Status::Running
        };
        prop_assert_eq!(board.status(), expected);
    }

    #[test]
    fn zero_steps_iff_full_line(board in board(), mark in side()) {
        prop_assert_eq!(
            minimum_steps_to_win(&board, mark) == 0,
            has_full_line(&board, mark)
        );
    }

    #[test]
    fn best_choice_is_empty_cell(board in board(), mark in side(), depth in 1u32..=2) {
        let choice = Agent::new().best_choice_at(&board, mark, depth).unwrap();
        match choice {
            Some(choice) => {
                prop_assert!(board.is_empty_at(choice.row, choice.col));
                prop_assert!(choice.utility > ILLEGAL_UTILITY);
            }
            None => prop_assert!(board.is_full()),
        }
    }

    #[test]
    fn best_choice_is_first_maximum(board in board(), mark in side()) {
        let agent = Agent::new();
        let utilities: Vec<i32> = board
            .cells()
            .map(|cell| agent.utility(&board, mark, cell.row, cell.col, 1).unwrap())
            .collect();
        let max = utilities.iter().copied().max().unwrap();
        if let Some(choice) = agent.best_choice(&board, mark).unwrap() {
            let first = utilities.iter().position(|&u| u == max).unwrap();
            prop_assert_eq!(choice.index(), first);
            prop_assert_eq!(choice.utility, max);
        } else {
            prop_assert_eq!(max, ILLEGAL_UTILITY);
        }
    }

    #[test]
    fn duplicate_mutation_is_isolated(board in board(), index in 0usize..9, mark in side()) {
        let mut live = board.clone();
        live.add_listener(|_: usize, _: usize, _: Mark| {});
        let mut copy = live.duplicate();
        copy.place(index / 3, index % 3, mark);
        copy.add_listener(|_: usize, _: usize, _: Mark| {});

        prop_assert_eq!(&live, &board);
        prop_assert_eq!(live.listener_count(), 1);
    }
}
