use std::path::PathBuf;

use arena::{load_board, play_moves, GameResult, PlayerMove, Report};
use clap::{Parser, ValueEnum};
use fourup::Board;
use tracing::info;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    /// Moves to play in order, each a player (R or B) followed by a column, e.g. R3
    moves: Vec<PlayerMove>,

    /// Start from the board in this JSON file instead of an empty board
    #[arg(short, long)]
    board: Option<PathBuf>,

    /// How to print the final board
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// A drawing of the board
    Text,
    /// The result and the board's display symbols as JSON
    Json,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    let mut board = match &args.board {
        Some(path) => load_board(path)?,
        None => Board::new(),
    };
    info!(num_moves = args.moves.len(), "Playing moves");

    let result = play_moves(&mut board, &args.moves);

    match args.format {
        OutputFormat::Text => println!("{}", board),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string(&Report::new(&result, &board))?)
        }
    }
    eprintln!("{}", result);

    if let GameResult::IllegalMove { err, .. } = result {
        return Err(anyhow::Error::new(err).context("Stopped at an illegal move"));
    }
    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
