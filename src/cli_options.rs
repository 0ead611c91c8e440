/*
cli_options.rs

Copyright 2025 Hervé Quatremain

This file is part of Mazerunner.

Mazerunner is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Mazerunner is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Mazerunner. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Process command-line options.
//!
//! In command-line mode, Mazerunner generates mazes and prints them as text, so that developers
//! can look at the levels produced for a given seed.
//!
//! # Examples
//!
//! Generate the level for seed 42 with the default size (21x15):
//!
//! ```text
//! $ mazerunner -s 42
//! ```
//!
//! Generate ten 31x21 levels from consecutive seeds and print some statistics:
//!
//! ```text
//! $ mazerunner -W 31 -H 21 -s 100 -c 10 --summary
//! ```
//!
//! The levels are printed with one character per tile:
//! `#` for walls, a space for floor tiles, `S` for the start, `D` for the door, `C` for the
//! chest, and `K` for the key.

use clap::Parser;
use log::{LevelFilter, debug};
use rand::Rng;

use mazerunner::{DEFAULT_HEIGHT, DEFAULT_WIDTH, MazeError, MazeGenerator};

/// Exit code for a maze that cannot be generated.
const EXIT_FAILURE: u8 = 1;

/// Upper bound of the random seed used when no seed is provided.
const MAX_RANDOM_SEED: u64 = 1_000_000;

/// Generate random maze levels and print them as text.
#[derive(Parser, Debug)]
#[command(about, long_about = None, version)]
pub struct Args {
    /// Number of columns (odd, at least 3)
    #[arg(short = 'W', long, default_value_t = DEFAULT_WIDTH, allow_negative_numbers = true)]
    pub width: i32,

    /// Number of rows (odd, at least 3)
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT, allow_negative_numbers = true)]
    pub height: i32,

    /// Seed for the first maze. A random seed is used if not provided
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Number of mazes to generate, from consecutive seeds
    #[arg(short, long, default_value_t = 1)]
    pub count: usize,

    /// Try the next seed when a maze is too small for the special tiles
    #[arg(short, long, default_value_t = false)]
    pub retry: bool,

    /// Maximum number of seeds to try for each maze when --retry is set
    #[arg(long, default_value_t = 16, requires = "retry")]
    pub max_retries: usize,

    /// Print some statistics after generating the mazes
    #[arg(long, default_value_t = false)]
    pub summary: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    pub debug: bool,
}

/// Totals collected over the generated mazes.
#[derive(Debug, Default)]
struct Summary {
    generated: usize,
    errors: usize,
    total: f32,
    max: f32,
    dead_ends: usize,
    halls: usize,
}

impl Summary {
    fn print(&self) {
        let n: f32 = self.generated.max(1) as f32;
        println!(
            "
        total time = {}s
      average time = {}s
          max time = {}s
 average dead-ends = {}
     average halls = {}
            errors = {}",
            self.total,
            self.total / n,
            self.max,
            self.dead_ends as f32 / n,
            self.halls as f32 / n,
            self.errors
        );
    }
}

/// Parse the command-line options, initialize the logger, and run.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if args.debug {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.init();

    run(&args)
}

/// Generate and print the mazes requested by the options. Return the exit code.
pub fn run(args: &Args) -> u8 {
    let mut seed: u64 = args
        .seed
        .unwrap_or_else(|| rand::rng().random_range(0..=MAX_RANDOM_SEED));
    let mut summary: Summary = Summary::default();
    let mut retries: usize = 0;

    while summary.generated < args.count {
        debug!("Maze {} with seed {seed}", summary.generated);

        let mut generator: MazeGenerator = MazeGenerator::new(args.width, args.height, seed);
        let ret = generator.generate();
        summary.total += generator.duration;
        if generator.duration > summary.max {
            summary.max = generator.duration;
        }

        match ret {
            Ok(maze) => {
                println!("Seed {seed}");
                print!("{}", maze.grid);
                summary.generated += 1;
                summary.dead_ends += generator.dead_ends;
                summary.halls += generator.halls;
                retries = 0;
            }
            Err(e @ MazeError::InsufficientTopology { .. })
                if args.retry && retries < args.max_retries =>
            {
                debug!("Seed {seed}: {e}, trying the next seed");
                summary.errors += 1;
                retries += 1;
            }
            Err(e) => {
                eprintln!("Error: seed {seed}: {e}");
                summary.errors += 1;
                if args.summary {
                    summary.print();
                }
                return EXIT_FAILURE;
            }
        }
        seed = seed.wrapping_add(1);
    }

    if args.summary {
        summary.print();
    }
    0
}
