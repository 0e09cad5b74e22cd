//! Stdin runner (default binary).
//!
//! Reads input lines from stdin, drops the pieces they describe into one
//! grid session, and writes each line's resulting stack height to stdout.
//! Heights are emitted back-to-back with no separator, matching the
//! expected output convention of the puzzle.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;

use stackline::types::{DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_WIDTH};
use stackline::Game;

/// Falling-block stacking simulator
#[derive(Parser)]
#[command(name = "stackline", version, about, long_about = None)]
struct Cli {
    /// Grid width in columns
    #[arg(long, default_value_t = DEFAULT_WIDTH, value_parser = clap::value_parser!(u32).range(1..=MAX_WIDTH as i64))]
    width: u32,

    /// Grid height in rows
    #[arg(long, default_value_t = DEFAULT_HEIGHT, value_parser = clap::value_parser!(u32).range(1..))]
    height: u32,

    /// Log filter (env_logger syntax, e.g. "debug")
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .parse_filters(&cli.log_level)
        .init();

    let mut game = Game::new(cli.width, cli.height)?;

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let height = game.process_input_line(line)?;
        write!(stdout, "{}", height)?;
    }
    stdout.flush()?;

    Ok(())
}
