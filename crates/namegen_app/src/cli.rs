use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Harvest dictionary syllables and generate fictional names from them.
#[derive(Parser, Debug)]
#[command(name = "namegen")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Configuration file; missing files fall back to defaults.
    #[arg(long, global = true, default_value = "namegen.ron")]
    pub config: PathBuf,

    /// Directory holding the syllable stores.
    #[arg(long, global = true)]
    pub store_dir: Option<PathBuf>,

    /// Log at debug level.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Rebuild the website syllable store from the dictionary sitemap.
    /// Press Enter to stop early.
    Harvest {
        /// Maximum number of dictionary pages to read.
        #[arg(long)]
        limit: Option<u64>,

        /// Site root whose robots.txt names the sitemap.
        #[arg(long)]
        site: Option<String>,

        /// Courtesy delay unit in milliseconds.
        #[arg(long)]
        delay_ms: Option<u64>,
    },

    /// Print generated names, one per line.
    Generate {
        /// Number of names.
        #[arg(long)]
        count: Option<usize>,

        /// Minimum syllables per name.
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        min: Option<u32>,

        /// Maximum syllables per name.
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        max: Option<u32>,

        /// Chance (0.0 to 1.0) that a syllable comes from the occasional store.
        #[arg(long)]
        occasional: Option<f64>,

        /// Seed for reproducible output.
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show which syllable stores exist and how many syllables they hold.
    Status,

    /// Write the current configuration to the config file.
    InitConfig {
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
}
