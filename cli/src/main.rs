use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use sweeper_core::*;

use command::{Command, HELP};

mod command;
mod render;

/// Mine density used when no size or preset is given.
const DEFAULT_DENSITY: f32 = 0.15;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Preset {
    Beginner,
    Intermediate,
    Expert,
}

impl Preset {
    fn config(self) -> GameConfig {
        match self {
            Self::Beginner => GameConfig::beginner(),
            Self::Intermediate => GameConfig::intermediate(),
            Self::Expert => GameConfig::expert(),
        }
    }
}

/// Play minesweeper in the terminal, one command per line.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Start from a standard board size
    #[arg(short, long, value_enum, conflicts_with_all = ["rows", "cols", "mines"])]
    preset: Option<Preset>,

    /// Number of rows
    #[arg(long, default_value_t = 25)]
    rows: Coord,

    /// Number of columns
    #[arg(long, default_value_t = 50)]
    cols: Coord,

    /// Number of mines, 15% of the board when omitted
    #[arg(short, long)]
    mines: Option<CellCount>,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Place mines as soon as a flag is set on an untouched board
    #[arg(long)]
    pre_seed_flags: bool,
}

impl Args {
    fn game_config(&self) -> Result<GameConfig> {
        match (self.preset, self.mines) {
            (Some(preset), _) => Ok(preset.config()),
            (None, Some(mines)) => GameConfig::new(self.rows, self.cols, mines),
            (None, None) => GameConfig::with_density(self.rows, self.cols, DEFAULT_DENSITY),
        }
    }

    fn session_options(&self) -> SessionOptions {
        let seed = self.seed.unwrap_or_else(rand::random);
        log::debug!("seed: {}", seed);
        let flag_policy = if self.pre_seed_flags {
            FlagPolicy::PreSeed
        } else {
            FlagPolicy::Deferred
        };
        SessionOptions::new(seed).with_flag_policy(flag_policy)
    }
}

fn apply(session: &mut GameSession, command: Command) -> Result<()> {
    match command {
        Command::Reveal(coords) => log_reveal(session.reveal(coords)?),
        Command::Open(coords) => log_reveal(session.open(coords)?),
        Command::ChordReveal(coords) => log_reveal(session.chord_reveal(coords)?),
        Command::Flag(coords) => {
            let change = session.toggle_flag(coords)?;
            log::info!("({}, {}) flagged: {}", change.row, change.col, change.is_flagged);
        }
        Command::ChordFlag(coords) => {
            let changes = session.chord_flag(coords)?;
            log::info!("Chord flagged {} cells", changes.len());
        }
        Command::Restart => session.restart(),
        Command::Json | Command::Help | Command::Quit => {}
    }
    Ok(())
}

fn log_reveal(result: RevealResult) {
    log::info!(
        "{:?}: {} cells changed, phase {:?}",
        result.outcome,
        result.cells_changed.len(),
        result.phase
    );
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let config = args.game_config().context("invalid board configuration")?;
    let mut session = GameSession::new(config, args.session_options())?;
    log::debug!("Starting {:?}", config);

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", render::render(&session.snapshot()))?;

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                writeln!(stdout, "{}", err)?;
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => {
                writeln!(stdout, "{}", HELP)?;
                continue;
            }
            Command::Json => {
                serde_json::to_writer(&mut stdout, &session.snapshot())?;
                writeln!(stdout)?;
                continue;
            }
            _ => {}
        }

        if let Err(err) = apply(&mut session, command) {
            writeln!(stdout, "{}", err)?;
            continue;
        }
        writeln!(stdout, "{}", render::render(&session.snapshot()))?;
    }

    Ok(())
}
