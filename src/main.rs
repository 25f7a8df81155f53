//! `fdchess` command line front end
//!
//! ```text
//! fdchess simulate            # play the scripted Scholar's Mate
//! fdchess moves e2            # list the moves of the piece on E2
//! fdchess play                # read moves from stdin
//! ```

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use fdchess::core::{config_path, load_config, persistence, EngineConfig};
use fdchess::{
    BoardDescriber, ChessService, GameResult, MoveOutcome, MoveRequest, Position,
    QuickGameSimulation, TextBoardDescriber,
};

#[derive(Parser, Debug)]
#[command(name = "fdchess", version, about = "Chess rules engine", long_about = None)]
struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Game state file, overrides the config's `stateFile`
    #[arg(long, short)]
    state: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the Scholar's Mate quick game
    Simulate,
    /// List the possible moves of the piece on SQUARE
    Moves { square: String },
    /// Play moves read from stdin
    Play,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_file = cli.config.clone().unwrap_or_else(config_path);
    let config = load_config(&config_file);

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .context("invalid log filter")?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let state_file = cli.state.clone().or_else(|| config.state_file.clone());

    match cli.command {
        Command::Simulate => simulate(&config),
        Command::Moves { square } => list_moves(&config, state_file.as_deref(), &square),
        Command::Play => play(&config, state_file.as_deref()),
    }
}

/// A service continuing the saved game, or a fresh one
fn open_service(config: &EngineConfig, state_file: Option<&Path>) -> Result<ChessService> {
    if let Some(path) = state_file {
        if let Some(game) = persistence::load_game(path)
            .with_context(|| format!("failed to restore game from {}", path.display()))?
        {
            return Ok(ChessService::from_game(game)?);
        }
    }
    Ok(ChessService::with_name(config.game_name.clone()))
}

fn simulate(config: &EngineConfig) -> Result<()> {
    let mut service = ChessService::with_name(config.game_name.clone());
    let simulation = QuickGameSimulation::scholars_mate();

    for (index, result) in simulation.run(&mut service).into_iter().enumerate() {
        match result {
            Ok(outcome) => println!("{:>2}. {} ({:?})", index + 1, outcome.message, outcome.status),
            Err(err) => println!("{:>2}. rejected: {}", index + 1, err),
        }
    }

    if config.show_board {
        println!();
        print!("{}", service.describe_board(&TextBoardDescriber));
    }
    println!("{}", service.move_history().to_notation().join(" "));
    Ok(())
}

fn list_moves(config: &EngineConfig, state_file: Option<&Path>, square: &str) -> Result<()> {
    let service = open_service(config, state_file)?;
    let position: Position = square.parse()?;

    let Some(piece) = service.board().piece_at(position) else {
        bail!("no piece on {}", position);
    };
    let moves = service.possible_moves(piece.id)?;
    let squares: Vec<String> = moves.iter().map(|p| p.to_notation()).collect();
    println!("{} on {}: {}", piece.label(), position, squares.join(" "));
    Ok(())
}

fn play(config: &EngineConfig, state_file: Option<&Path>) -> Result<()> {
    let mut service = open_service(config, state_file)?;
    let describer = TextBoardDescriber;
    info!("[ENGINE] Playing '{}'", service.game_state().name);

    if config.show_board {
        print!("{}", describer.describe_board(service.board()));
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    for line in stdin.lock().lines() {
        let line = line?;
        let words: Vec<&str> = line.split_whitespace().collect();

        let accepted = match words.as_slice() {
            [] => continue,
            ["quit"] | ["exit"] => break,
            ["board"] => {
                print!("{}", describer.describe_board(service.board()));
                false
            }
            ["reset"] => {
                service.reset_game();
                println!("Game reset");
                true
            }
            ["promote", square, kind] => {
                let result = square
                    .parse::<Position>()
                    .and_then(|position| service.promote_pawn_named(position, kind));
                report(result)
            }
            [from, to] => {
                let result = parse_move(from, to).and_then(|request| service.make_move(request));
                report(result)
            }
            _ => {
                println!("commands: <FROM> <TO> | promote <SQUARE> <KIND> | board | reset | quit");
                false
            }
        };

        if accepted {
            if config.show_board {
                print!("{}", describer.describe_board(service.board()));
            }
            if let Some(path) = state_file {
                if let Err(err) = persistence::save_game(&service, path) {
                    warn!("[CONFIG] Failed to save game to {:?}: {}", path, err);
                }
            }
        }
        stdout.flush()?;
    }

    Ok(())
}

fn parse_move(from: &str, to: &str) -> GameResult<MoveRequest> {
    Ok(MoveRequest::from_to(from.parse()?, to.parse()?))
}

/// Print the result of a move or promotion, true when it was accepted
fn report(result: GameResult<MoveOutcome>) -> bool {
    match result {
        Ok(outcome) => {
            println!("{}", outcome.message);
            true
        }
        Err(err) => {
            println!("{}", err);
            false
        }
    }
}
