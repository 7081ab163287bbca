//! Terminal front ends: interactive game, single suggestion, self play.

use std::io::{BufRead, Write};
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use tictactoe_agent::{
    Agent, Board, FirstPlayer, HUMAN, Mark, Session, SessionError, SIZE, Status,
};
use tracing::{debug, info, instrument, warn};

use crate::config::GameConfig;

type Placements = Arc<Mutex<Vec<(usize, usize, Mark)>>>;

/// Parses `"r c"`, `"r,c"` (0-based) or a single keypad number `1`-`9`.
pub fn parse_cell(input: &str) -> Option<(usize, usize)> {
    let parts: Vec<&str> = input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .collect();
    match parts.as_slice() {
        [number] => {
            let n: usize = number.parse().ok()?;
            (1..=SIZE * SIZE)
                .contains(&n)
                .then(|| ((n - 1) / SIZE, (n - 1) % SIZE))
        }
        [row, col] => {
            let row: usize = row.parse().ok()?;
            let col: usize = col.parse().ok()?;
            (row < SIZE && col < SIZE).then_some((row, col))
        }
        _ => None,
    }
}

/// Writes placements collected by the board listener since the last call.
fn flush_placements(placements: &Placements, out: &mut impl Write) -> Result<()> {
    let drained: Vec<_> = placements
        .lock()
        .map_err(|_| anyhow::anyhow!("placement log poisoned"))?
        .drain(..)
        .collect();
    for (row, col, mark) in drained {
        writeln!(out, "{} played ({}, {})", mark, row, col)?;
    }
    Ok(())
}

fn print_status(status: Status, out: &mut impl Write) -> Result<()> {
    let message = match status {
        Status::SideAWins => "You win!",
        Status::SideBWins => "The agent wins.",
        Status::Drawn => "Nobody wins.",
        Status::Running => return Ok(()),
    };
    writeln!(out, "{}", message)?;
    Ok(())
}

/// Runs an interactive game reading moves from `input`.
///
/// Commands: a cell, `n` for a new game, `q` to quit.
#[instrument(skip_all, fields(first = %config.first_player(), depth = config.depth()))]
pub fn run_play(config: &GameConfig, input: impl BufRead, mut out: impl Write) -> Result<()> {
    let placements: Placements = Arc::new(Mutex::new(Vec::new()));
    let mut board = Board::new();
    let sink = Arc::clone(&placements);
    board.add_listener(move |row: usize, col: usize, mark: Mark| {
        if let Ok(mut log) = sink.lock() {
            log.push((row, col, mark));
        }
    });

    let mut session = Session::with_board(board, config.session_settings())
        .context("Failed to start game")?;
    info!("Interactive game started");

    writeln!(out, "You are {}. Enter a cell as `row col` or 1-9, `n` for a new game, `q` to quit.", HUMAN)?;
    flush_placements(&placements, &mut out)?;
    writeln!(out, "{}", session.board())?;

    for line in input.lines() {
        let line = line.context("Failed to read input")?;
        let line = line.trim();
        match line {
            "q" | "quit" => break,
            "n" | "new" => {
                session.restart().context("Failed to restart game")?;
                writeln!(out, "New game.")?;
                flush_placements(&placements, &mut out)?;
                writeln!(out, "{}", session.board())?;
                continue;
            }
            _ => {}
        }

        let Some((row, col)) = parse_cell(line) else {
            writeln!(out, "Cannot read {:?} as a cell.", line)?;
            continue;
        };

        match session.human_move(row, col) {
            Ok(turn) => {
                flush_placements(&placements, &mut out)?;
                if let (Some(choice), true) = (turn.agent, *config.show_utility()) {
                    writeln!(out, "Agent utility: {}", choice.utility)?;
                }
                writeln!(out, "{}", session.board())?;
                print_status(turn.status, &mut out)?;
            }
            Err(SessionError::GameOver) => {
                writeln!(out, "The game is over. Enter `n` for a new game.")?;
            }
            Err(err @ SessionError::Board(_)) => {
                warn!(%err, "Move rejected");
                writeln!(out, "{}", err)?;
            }
            Err(err) => return Err(err).context("Game failed"),
        }
    }

    debug!("Input closed");
    Ok(())
}

/// Prints the agent's choice for `board`.
#[instrument(skip(out))]
pub fn run_suggest(
    board: &str,
    mark: Mark,
    depth: u32,
    json: bool,
    mut out: impl Write,
) -> Result<()> {
    let board: Board = board.parse().context("Failed to parse board")?;
    let choice = Agent::new().best_choice_at(&board, mark, depth)?;
    if json {
        writeln!(out, "{}", serde_json::to_string(&choice)?)?;
        return Ok(());
    }
    match choice {
        Some(choice) => writeln!(out, "{} should play {}", mark, choice)?,
        None => writeln!(out, "No legal move")?,
    }
    Ok(())
}

/// Plays the agent against itself and returns the final status.
#[instrument(skip(out))]
pub fn run_selfplay(
    depth_x: u32,
    depth_o: u32,
    first: FirstPlayer,
    mut out: impl Write,
) -> Result<Status> {
    let agent = Agent::new();
    let mut board = Board::new();
    let mut mark = first.mark();

    while board.status() == Status::Running {
        let depth = if mark == Mark::SideA { depth_x } else { depth_o };
        let choice = agent
            .best_choice_at(&board, mark, depth)?
            .context("Running board without an empty cell")?;
        board.place(choice.row, choice.col, mark);
        writeln!(out, "{} plays {}", mark, choice)?;
        mark = mark.opponent();
    }

    let status = board.status();
    writeln!(out, "{}\n{}", board, status)?;
    info!(%status, "Self play finished");
    Ok(status)
}
