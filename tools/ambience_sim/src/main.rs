use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use engine::audio::SoundQueue;
use engine::logging::{LogConfig, DEFAULT_LOG_ENV};
use engine::random::{RandomSource, SeededRandom, ThreadRandom};
use tracing::info;
use turokgame::content::JUNGLE_NAME;
use turokgame::scripts::AMBIENCE_TICK_INTERVAL;
use turokgame::{ContentRegistry, ScriptHost};

#[derive(Parser)]
#[command(name = "ambience_sim")]
#[command(about = "Run area ambience content headlessly and report what it plays")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Extra content files (JSON, one variant or an array) to register
    #[arg(short, long, global = true)]
    content: Vec<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered ambience variants
    List,
    /// Tick instances of a variant and print each playback request
    Run {
        /// Variant name (case-insensitive)
        #[arg(default_value = JUNGLE_NAME)]
        variant: String,

        /// Number of ticks to simulate
        #[arg(long, default_value_t = 3600)]
        ticks: u64,

        /// Number of placed instances
        #[arg(long, default_value_t = 1)]
        instances: usize,

        /// Seed for reproducible runs; each instance gets seed + index
        #[arg(long)]
        seed: Option<u64>,

        /// Only print the summary
        #[arg(long)]
        quiet: bool,
    },
}

fn init_logging(verbose: bool) -> Result<()> {
    let floor = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    let mut config = LogConfig::from_env(DEFAULT_LOG_ENV);
    if config.global_level() < floor {
        config.set_global_level(floor);
    }
    engine::logging::init_logging_with(config);

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose)?;

    let mut registry = ContentRegistry::with_builtin();
    for path in &cli.content {
        let names = registry
            .load_file(path)
            .with_context(|| format!("loading {}", path.display()))?;
        info!("Loaded {} variant(s) from {}", names.len(), path.display());
    }

    match cli.command {
        Commands::List => handle_list_command(&registry),
        Commands::Run {
            variant,
            ticks,
            instances,
            seed,
            quiet,
        } => handle_run_command(&registry, &variant, ticks, instances, seed, quiet)?,
    }

    Ok(())
}

fn handle_list_command(registry: &ContentRegistry) {
    for name in registry.names() {
        if let Some(content) = registry.get(&name) {
            println!(
                "{:<24} randFactor={:<3} sounds={}",
                content.name,
                content.rand_factor,
                content.sound_count()
            );
        }
    }
}

fn handle_run_command(
    registry: &ContentRegistry,
    variant: &str,
    ticks: u64,
    instances: usize,
    seed: Option<u64>,
    quiet: bool,
) -> Result<()> {
    let mut host = ScriptHost::new(SoundQueue::new());

    for index in 0..instances {
        let random: Box<dyn RandomSource> = match seed {
            Some(seed) => Box::new(SeededRandom::new(seed.wrapping_add(index as u64))),
            None => Box::new(ThreadRandom),
        };
        host.spawn_ambience(registry, variant, random)?;
    }

    info!(
        "Simulating {} instance(s) of {} for {} ticks",
        instances, variant, ticks
    );

    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    let mut total = 0usize;

    for _ in 0..ticks {
        host.tick();
        for request in host.audio_mut().drain() {
            if !quiet {
                println!("tick {:>6}  {}", host.tick_count(), request.name);
            }
            total += 1;
            *counts.entry(request.name).or_default() += 1;
        }
    }

    let eligible = (ticks / AMBIENCE_TICK_INTERVAL) * instances as u64;
    println!();
    println!("{} playback request(s) over {} eligible tick(s)", total, eligible);
    if eligible > 0 {
        println!(
            "observed trigger rate: {:.1}%",
            total as f64 * 100.0 / eligible as f64
        );
    }
    for (name, count) in &counts {
        println!("{:>6}  {}", count, name);
    }
    if host.audio().dropped() > 0 {
        println!("{} request(s) dropped by the sound queue", host.audio().dropped());
    }

    Ok(())
}
