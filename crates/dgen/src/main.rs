//! Dungeon generator command line
//!
//! Generates one dungeon from settings (file and/or flags) and exports it as
//! JSON.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use dgen_core::{generate_dungeon, DungeonRng, GenerationSettings};
use dgen_export::{
    default_export_dir, export_compressed_to_dir, export_to_dir, export_to_string,
};

/// Procedural dungeon generator
#[derive(Parser, Debug)]
#[command(name = "dgen")]
#[command(
    author,
    version,
    about = "Generate a dungeon layout and export it as JSON",
    long_about = None
)]
struct Args {
    /// Settings file (JSON); missing keys take defaults
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Map width in cells
    #[arg(long)]
    width: Option<usize>,

    /// Map height in cells
    #[arg(long)]
    height: Option<usize>,

    /// Number of rooms to attempt
    #[arg(short = 'r', long = "rooms")]
    rooms: Option<usize>,

    /// Smallest room side
    #[arg(long = "room-min")]
    room_min: Option<usize>,

    /// Largest room side
    #[arg(long = "room-max")]
    room_max: Option<usize>,

    /// Corridor thickness
    #[arg(long = "corridor-width")]
    corridor_width: Option<usize>,

    /// Per-room treasure probability
    #[arg(long)]
    treasure: Option<f64>,

    /// Per-room monster probability
    #[arg(long)]
    monster: Option<f64>,

    /// Per-room trap probability
    #[arg(long)]
    trap: Option<f64>,

    /// RNG seed (random when omitted)
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Directory to write the export into
    #[arg(short = 'o', long = "output-dir")]
    output_dir: Option<PathBuf>,

    /// Write a gzip-compressed export
    #[arg(long = "gzip", conflicts_with = "stdout")]
    gzip: bool,

    /// Print the JSON to stdout instead of writing a file
    #[arg(long = "stdout")]
    stdout: bool,

    /// Verbose output
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

impl Args {
    /// Settings from the config file (or defaults) with flag overrides applied
    fn settings(&self) -> Result<GenerationSettings> {
        let mut settings = match &self.config {
            Some(path) => GenerationSettings::load_from_file(path)
                .with_context(|| format!("could not load settings from {}", path.display()))?,
            None => GenerationSettings::default(),
        };

        if let Some(v) = self.width {
            settings.width = v;
        }
        if let Some(v) = self.height {
            settings.height = v;
        }
        if let Some(v) = self.rooms {
            settings.room_count = v;
        }
        if let Some(v) = self.room_min {
            settings.room_min_size = v;
        }
        if let Some(v) = self.room_max {
            settings.room_max_size = v;
        }
        if let Some(v) = self.corridor_width {
            settings.corridor_width = v;
        }
        if let Some(v) = self.treasure {
            settings.treasure_chance = v;
        }
        if let Some(v) = self.monster {
            settings.monster_chance = v;
        }
        if let Some(v) = self.trap {
            settings.trap_chance = v;
        }

        Ok(settings)
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let settings = args.settings()?;
    let seed = args.seed.unwrap_or_else(DungeonRng::random_seed);
    info!(seed, "starting generation");

    let map = generate_dungeon(&settings, seed).context("invalid generation settings")?;

    if args.stdout {
        println!("{}", export_to_string(&map)?);
        return Ok(());
    }

    let dir = args.output_dir.clone().unwrap_or_else(default_export_dir);
    let path = if args.gzip {
        export_compressed_to_dir(&map, &dir)
    } else {
        export_to_dir(&map, &dir)
    }
    .with_context(|| format!("could not export to {}", dir.display()))?;

    let stats = map.stats();
    println!("{}", path.display());
    println!(
        "rooms: {} (requested {}), corridor cells: {}, treasure: {}, monsters: {}, traps: {}",
        stats.room_count,
        settings.room_count,
        stats.corridor_length,
        stats.treasure_count,
        stats.monster_count,
        stats.trap_count,
    );

    Ok(())
}
