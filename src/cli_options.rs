/*
cli_options.rs

Copyright 2025 Hervé Quatremain

This file is part of Mazegen.

Mazegen is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Mazegen is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Mazegen. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Process command-line options.
//!
//! # Examples
//!
//! Generate a 20x11 maze that goes through the cell at column 10 and row 5, and write it to
//! `maze.bmp` with the built-in tiles:
//!
//! ```
//! $ mazegen -W 20 -H 11 -x 10 -y 5
//! ```
//!
//! Use the tiles from the `pieces` directory, highlight the solution, and keep the maze in a
//! JSON file:
//!
//! ```
//! $ mazegen -t pieces --highlight --save maze.json -o maze.bmp
//! ```
//!
//! Stress test: generate 700 large mazes and print some statistics:
//!
//! ```
//! $ mazegen -W 450 -H 450 -x 225 -y 225 -c 700 --summary
//! ```

use clap::Parser;
use log::{debug, error};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::env;
use std::path::PathBuf;

use mazegen::config::{COPYRIGHT_NOTICE, DEFAULT_OUTPUT, PATH_COLOR};
use mazegen::generator::carver::MazeCarver;
use mazegen::generator::maze::{Maze, MazePipeline};
use mazegen::generator::solver;
use mazegen::render::rasterizer::MazeRasterizer;
use mazegen::render::tiles::TileAtlas;
use mazegen::saver::maze::SaverMaze;

/// Exit status for invalid generation parameters.
const EXIT_GENERATION: u8 = 1;

/// Exit status for file errors.
const EXIT_IO: u8 = 2;

/// Generate a maze whose solution goes through a waypoint, and draw it as a BMP image.
#[derive(Parser)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// Number of columns
    #[arg(short = 'W', long, default_value_t = 20)]
    width: usize,

    /// Number of rows
    #[arg(short = 'H', long, default_value_t = 11)]
    height: usize,

    /// Column of the waypoint (starting at 1)
    #[arg(short = 'x', long, default_value_t = 10)]
    waypoint_x: usize,

    /// Row of the waypoint (starting at 1)
    #[arg(short = 'y', long, default_value_t = 5)]
    waypoint_y: usize,

    /// BMP file to create
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Directory with the mazeBitMap0.bmp to mazeBitMap15.bmp tiles (built-in tiles by default)
    #[arg(short, long)]
    tiles: Option<PathBuf>,

    /// Seed for the random number generator
    #[arg(short, long)]
    seed: Option<u64>,

    /// Paint the solution path
    #[arg(long, default_value_t = false)]
    highlight: bool,

    /// Save the maze in a JSON file
    #[arg(long)]
    save: Option<PathBuf>,

    /// Draw a maze saved with --save instead of generating a new one
    #[arg(long, conflicts_with = "save")]
    load: Option<PathBuf>,

    /// Write the built-in tiles as BMP files in the given directory, and exit
    #[arg(long)]
    export_tiles: Option<PathBuf>,

    /// Number of mazes to generate (only the last one is drawn)
    #[arg(short, long, default_value_t = 1)]
    count: usize,

    /// Print some statistics after generating the mazes
    #[arg(long, default_value_t = false)]
    summary: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Parse and process command-line options. Return the exit status.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    //
    // Export the built-in tiles
    //
    if let Some(dir) = &args.export_tiles {
        return match TileAtlas::procedural().save(dir) {
            Ok(()) => {
                println!("Tiles written to {}", dir.display());
                0
            }
            Err(e) => {
                error!("Cannot write the tiles: {e}");
                EXIT_IO
            }
        };
    }

    let tiles: TileAtlas = match &args.tiles {
        Some(dir) => match TileAtlas::load(dir) {
            Ok(t) => t,
            Err(e) => {
                error!("Cannot load the tiles: {e}");
                return EXIT_IO;
            }
        },
        None => TileAtlas::procedural(),
    };

    //
    // Retrieve or generate the maze
    //
    let mut maze: Maze = match &args.load {
        Some(file) => match SaverMaze::new(file.clone()).get_maze() {
            Ok(Some(m)) => m,
            Ok(None) => {
                error!("{}: no such file", file.display());
                return EXIT_IO;
            }
            Err(e) => {
                error!("Cannot load {}: {e}", file.display());
                return EXIT_IO;
            }
        },
        None => match generate(&args) {
            Ok(m) => m,
            Err(status) => return status,
        },
    };

    if !maze.is_solved() {
        solver::solve(&mut maze);
    }

    if let Some(file) = &args.save
        && let Err(e) = SaverMaze::new(file.clone()).save_maze(&maze)
    {
        error!("Cannot save {}: {e}", file.display());
        return EXIT_IO;
    }

    //
    // Draw the maze
    //
    let mut rasterizer: MazeRasterizer<TileAtlas> = MazeRasterizer::new(&tiles);
    if args.highlight {
        rasterizer = rasterizer.with_highlight(PATH_COLOR);
    }
    let status: u8 = match rasterizer.render(&maze, &args.output) {
        Ok(()) => 0,
        Err(e) => {
            error!("Cannot write {}: {e}", args.output.display());
            EXIT_IO
        }
    };

    maze.release();
    status
}

/// Generate the requested number of mazes and return the last one.
fn generate(args: &Args) -> Result<Maze, u8> {
    let rng: StdRng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };
    let mut pipeline: MazePipeline<StdRng> = MazePipeline::new(MazeCarver::with_rng(rng));

    let mut total: f32 = 0.0;
    let mut max: f32 = 0.0;
    let mut carved: usize = 0;
    let count: usize = args.count.max(1);
    for i in 0..count {
        debug!("Iteration {i}");
        if let Err(e) = pipeline.generate(args.width, args.height, args.waypoint_x, args.waypoint_y)
        {
            eprintln!("ERROR: {e}");
            return Err(EXIT_GENERATION);
        }
        let (cells, duration) = pipeline.stats();
        total += duration;
        if duration > max {
            max = duration;
        }
        carved += cells;
        if (i + 1) % 50 == 0 {
            debug!("Made {} mazes so far", i + 1);
        }
    }

    if args.summary {
        println!(
            "
            mazes = {}
       total time = {}s
     average time = {}s
         max time = {}s
average cells     = {}",
            count,
            total,
            total / count as f32,
            max,
            carved / count
        );
    }

    pipeline.take().ok_or(EXIT_GENERATION)
}
