//! namegen: dictionary syllable harvester and fictional name generator.

mod app;
mod cli;
mod config;
mod effects;
mod generate;

use anyhow::{bail, Result};
use clap::Parser;
use engine_logging::engine_info;
use log::LevelFilter;
use syllable_core::HarvestResultKind;

use crate::cli::{Args, Command};
use crate::config::{load_config, save_config, AppConfig};

fn main() -> Result<()> {
    let args = Args::parse();
    let mut config = load_config(&args.config)?;
    if let Some(store_dir) = &args.store_dir {
        config.store_dir = store_dir.clone();
    }

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        config.log.level_filter()
    };
    engine_logging::initialize(config.log.destination(), level, &config.log.file);

    match args.command {
        Command::Harvest {
            limit,
            site,
            delay_ms,
        } => {
            if let Some(site) = site {
                config.site_url = site;
            }
            if let Some(delay_ms) = delay_ms {
                config.courtesy_delay_ms = delay_ms;
            }
            let page_limit = limit.unwrap_or(config.page_limit);
            engine_info!(
                "Harvesting up to {} pages into {:?}",
                page_limit,
                config.store_dir
            );
            match app::run_harvest(config.harvest_settings(), page_limit)? {
                HarvestResultKind::Completed | HarvestResultKind::Cancelled => Ok(()),
                HarvestResultKind::Failed => bail!("Harvest failed; see the log for details"),
            }
        }
        Command::Generate {
            count,
            min,
            max,
            occasional,
            seed,
        } => {
            let mut request = config.generate_request();
            if let Some(count) = count {
                request.count = count;
            }
            if let Some(min) = min {
                request.min_syllables = min as usize;
            }
            if let Some(max) = max {
                request.max_syllables = max as usize;
            }
            if let Some(occasional) = occasional {
                request.occasional_frequency = occasional;
            }
            for name in generate::run_generate(&config.store_dir, &request, seed)? {
                println!("{name}");
            }
            Ok(())
        }
        Command::Status => {
            for line in generate::status_lines(&config.store_dir)? {
                println!("{line}");
            }
            Ok(())
        }
        Command::InitConfig { force } => init_config(&args.config, &config, force),
    }
}

fn init_config(path: &std::path::Path, config: &AppConfig, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!("{:?} already exists; pass --force to overwrite", path);
    }
    let written = save_config(path, config)?;
    println!("Wrote {}", written.display());
    Ok(())
}
