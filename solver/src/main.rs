use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use knightpath::script::{cell_center, ClickScript, ScriptOptions};
use knightpath::solver::SearchLimits;
use knightpath::{Board, SolverFailure};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

/// Find a knight's path through the marked cells of a board, starting from the top-left cell.
#[derive(Parser)]
#[command(name = "solver", version)]
struct Cli {
    /// Board file: one row per line, `S` for the origin, `#` or `x` for cells to visit, `.` for the rest
    board: PathBuf,

    /// Give up after placing this many cells on the path
    #[arg(long, default_value_t = SearchLimits::DEFAULT_MAX_EXPANSIONS)]
    max_expansions: u64,

    /// Search until a verdict, however long it takes
    #[arg(long)]
    unbounded: bool,

    /// Write a click script replaying the path to this file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Width of one board cell on screen, in pixels
    #[arg(long, default_value_t = 40)]
    cell_size: u32,

    /// Screen x of the board's top-left corner
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    offset_x: i64,

    /// Screen y of the board's top-left corner
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    offset_y: i64,

    /// Milliseconds to wait after each click
    #[arg(long, default_value_t = 0)]
    delay: u64,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    let text = match fs::read_to_string(&cli.board) {
        Ok(text) => text,
        Err(err) => {
            error!(path = %cli.board.display(), %err, "cannot read board");
            return ExitCode::from(2);
        }
    };

    let board: Board = match text.parse() {
        Ok(board) => board,
        Err(err) => {
            error!(path = %cli.board.display(), %err, "invalid board");
            return ExitCode::from(2);
        }
    };
    info!(cells = board.locations().len(), "loaded board");

    let limits = if cli.unbounded {
        SearchLimits::unbounded()
    } else {
        SearchLimits::default().with_max_expansions(cli.max_expansions)
    };

    let solved = match board.solve_with(limits) {
        Ok(solved) => solved,
        Err(SolverFailure::NotFound) => {
            println!("no path");
            return ExitCode::FAILURE;
        }
        Err(err) => {
            error!(%err, "search failed");
            return ExitCode::FAILURE;
        }
    };

    print!("{}", solved);

    if let Some(output) = cli.output {
        let script = ClickScript::from_positions(
            solved.coordinates().into_iter().map(|location| cell_center(location, cli.cell_size)),
            ScriptOptions { offset: (cli.offset_x, cli.offset_y), delay_ms: cli.delay },
        );

        if let Err(err) = script.write_to(&output) {
            error!(path = %output.display(), %err, "cannot write click script");
            return ExitCode::from(2);
        }
    }

    ExitCode::SUCCESS
}
