use std::path::PathBuf;

use clap::Parser;

use crate::generators::CaveParams;

/// Procedural dungeon generator and pathfinding visualizer
#[derive(Parser, Debug)]
#[command(name = "dungest")]
#[command(version, about = "Generate dungeons and find routes through them", long_about = None)]
pub struct Args {
    /// Seed for the random generator (prompted for when omitted)
    #[arg(short, long)]
    pub seed: Option<u32>,

    /// Smoothing passes for cellular automata caves
    #[arg(short, long, default_value_t = 5)]
    pub iterations: usize,

    /// Chance, in percent, that a cave cell starts out as a wall
    #[arg(
        short,
        long,
        default_value_t = 45,
        value_parser = clap::value_parser!(i32).range(0..=100)
    )]
    pub wall_probability: i32,

    /// Print the map without colours
    #[arg(long)]
    pub no_color: bool,

    /// Directory for the log file
    #[arg(long, default_value_os_t = std::env::temp_dir())]
    pub log_dir: PathBuf,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Args {
    pub fn cave_params(&self) -> CaveParams {
        CaveParams {
            iterations: self.iterations,
            wall_probability: self.wall_probability,
        }
    }
}
