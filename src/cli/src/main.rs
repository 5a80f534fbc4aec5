#![warn(clippy::pedantic)]

mod config;
mod display;

use clap::{ArgAction, Parser, Subcommand};
use color_eyre::eyre::{WrapErr, eyre};
use config::Config;
use display::render;
use env_logger::TimestampPrecision;
use itertools::Itertools;
use log::{LevelFilter, debug, info};
use rubik_core::{
    Cube, Face,
    notation::{format_sequence, parse_sequence},
    solver, start, success,
    utilities::{is_solved, shuffle},
};
use std::path::PathBuf;

/// Scrambles, inspects and solves a 3x3x3 cube
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The configuration file to use, in TOML format. Defaults to
    /// `rubik/config.toml` in the user's configuration directory.
    #[arg(long, short = 'c', value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (can be repeated)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Print color initials instead of colored stickers
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scramble a solved cube and print the scramble.
    Scramble {
        /// How many random quarter turns to apply.
        #[arg(long)]
        steps: Option<usize>,
        /// Seed for a reproducible scramble.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Apply a move sequence to a solved cube, e.g. "R U' f2 x".
    Apply {
        /// The moves to apply.
        sequence: String,
    },
    /// Scramble a cube, solve it and print the solution.
    Solve {
        /// Scramble with these moves instead of random ones.
        #[arg(long, conflicts_with_all = ["steps", "seed"])]
        scramble: Option<String>,
        #[arg(long)]
        steps: Option<usize>,
        #[arg(long)]
        seed: Option<u64>,
        /// The face to build the first layer on.
        #[arg(long)]
        base: Option<Face>,
        /// Print the moves of each stage on its own line.
        #[arg(long)]
        stages: bool,
    },
    /// Solve many random scrambles and check that every one ends solved.
    Verify {
        #[arg(long, default_value_t = 100)]
        trials: usize,
        #[arg(long)]
        steps: Option<usize>,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        base: Option<Face>,
    },
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .format_timestamp(Some(TimestampPrecision::Millis))
        .init();

    let config = Config::load(cli.config.as_deref())?;
    let color = config.color && !cli.no_color;

    match cli.command {
        Commands::Scramble { steps, seed } => {
            let mut cube = Cube::new();
            let moves = shuffle(
                &mut cube,
                steps.unwrap_or(config.scramble_steps),
                &mut rng(seed.or(config.seed)),
            );
            println!("{}", format_sequence(&moves));
            print!("{}", render(&cube, color));
        }
        Commands::Apply { sequence } => {
            let mut cube = Cube::new();
            cube.apply_all(&parse_sequence(&sequence)?);
            print!("{}", render(&cube, color));
            println!("Solved: {}", is_solved(&cube));
            match solver::solve_next_step(&cube, config.base) {
                Some(stage) => println!("Next stage: {stage}"),
                None => println!("Next stage: none"),
            }
        }
        Commands::Solve {
            scramble,
            steps,
            seed,
            base,
            stages,
        } => {
            let base = base.unwrap_or(config.base);
            let mut cube = Cube::new();
            if let Some(scramble) = scramble {
                cube.apply_all(&parse_sequence(&scramble)?);
            } else {
                let moves = shuffle(
                    &mut cube,
                    steps.unwrap_or(config.scramble_steps),
                    &mut rng(seed.or(config.seed)),
                );
                println!("Scramble: {}", format_sequence(&moves));
            }

            let solution = solver::solve(&mut cube, base)?;
            if stages {
                print!("{solution}");
            } else {
                println!("Solution: {}", format_sequence(&solution.moves()));
            }
            println!("{} moves", solution.len());

            if !is_solved(&cube) {
                return Err(eyre!("The cube is not solved after applying the solution"));
            }
            print!("{}", render(&cube, color));
        }
        Commands::Verify {
            trials,
            steps,
            seed,
            base,
        } => verify(
            trials,
            steps.unwrap_or(config.scramble_steps),
            seed.or(config.seed),
            base.unwrap_or(config.base),
        )?,
    }

    Ok(())
}

fn rng(seed: Option<u64>) -> fastrand::Rng {
    seed.map_or_else(fastrand::Rng::new, fastrand::Rng::with_seed)
}

#[allow(clippy::cast_precision_loss)]
fn verify(trials: usize, steps: usize, seed: Option<u64>, base: Face) -> color_eyre::Result<()> {
    info!(start!("Verifying {} scrambles of {} moves"), trials, steps);
    let mut rng = rng(seed);
    let mut lengths = Vec::with_capacity(trials);

    for trial in 0..trials {
        let mut cube = Cube::new();
        let scramble = shuffle(&mut cube, steps, &mut rng);
        let solution = solver::solve(&mut cube, base).wrap_err_with(|| {
            format!("Trial {trial} failed on scramble {}", format_sequence(&scramble))
        })?;
        if !is_solved(&cube) {
            return Err(eyre!(
                "Trial {trial} did not end solved after scramble {}",
                format_sequence(&scramble)
            ));
        }
        debug!("Trial {}: {} moves", trial, solution.len());
        lengths.push(solution.len());
    }

    let (min, max) = lengths.iter().copied().minmax().into_option().unwrap_or((0, 0));
    let average = lengths.iter().sum::<usize>() as f64 / lengths.len().max(1) as f64;
    info!(success!("Every scramble solved"));
    println!("{trials} trials solved: min {min}, average {average:.1}, max {max} moves");
    Ok(())
}
