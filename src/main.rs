use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
    process,
};

use clap::{Parser, ValueEnum};
use thiserror::Error;
use water_sort_solver::{parse_board, solve, solve_shortest, Board, BoardError};

// Bottles are written bottom to top, one character per slot:
// letters (or any other printable character) are colors, `.` is empty.
// `AB..` is a bottle with A at the bottom and B on top of it.
#[derive(Parser, Debug)]
#[command(author, version, about = "Finds a short sequence of pours that sorts every bottle")]
struct Args {
    /// Bottles, e.g. `AABB BBAA .... ....`
    #[arg(required_unless_present = "file", conflicts_with = "file")]
    bottles: Vec<String>,

    /// Read bottles from a file, one or more per line, `#` starts a comment
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Number of bottles expected in the input
    #[arg(short = 'n', long)]
    count: Option<usize>,

    #[arg(short, long, value_enum, default_value_t = Strategy::BestFirst)]
    strategy: Strategy,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Strategy {
    /// Heuristic best-first search
    BestFirst,
    /// Exhaustive breadth-first search, always minimal
    Shortest,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error(transparent)]
    Board(#[from] BoardError),

    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

fn read_board(args: &Args) -> Result<Board, CliError> {
    let text = match &args.file {
        Some(path) => fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.clone(),
            source,
        })?,
        None => args.bottles.join(" "),
    };

    let board = parse_board(&text)?;
    if let Some(expected) = args.count {
        if expected != board.len() {
            return Err(BoardError::BottleCount {
                expected,
                found: board.len(),
            }
            .into());
        }
    }

    Ok(board)
}

// an exhausted search is an answer, not a failure
fn run(args: &Args, out: &mut impl Write) -> Result<(), CliError> {
    let board = read_board(args)?;
    log::info!("Initial board:\n{}", board);

    let (stats, result) = match args.strategy {
        Strategy::BestFirst => solve(&board),
        Strategy::Shortest => solve_shortest(&board),
    };

    if let Some(moves) = &result {
        writeln!(out, "Number of steps: {}", moves.len())?;
        if !moves.is_empty() {
            writeln!(out, "Steps:")?;
        }
        for mv in moves {
            writeln!(
                out,
                "Move water from bottle {} to bottle {}",
                mv.from + 1,
                mv.to + 1
            )?;
        }
    } else {
        writeln!(out, "No solution found")?;
    }

    writeln!(out, "States checked: {}", stats.expanded)?;
    writeln!(
        out,
        "Time consumed: {:.6} seconds",
        stats.elapsed.as_secs_f64()
    )?;

    Ok(())
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(e) = run(&args, &mut io::stdout().lock()) {
        eprintln!("Error: {}", e);
        process::exit(2);
    }
}
