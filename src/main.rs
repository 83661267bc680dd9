#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use std::path::PathBuf;

#[cfg(feature = "std")]
use anyhow::Context;
#[cfg(feature = "std")]
use bullcow::{console, curator, init_logging, Dictionary};
#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use log::info;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play an interactive game against a hidden isogram.
    Play {
        #[arg(long, default_value = "isograms.txt")]
        dictionary: PathBuf,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Build the isogram dictionary file from a raw word list.
    Generate {
        #[arg(long, default_value = "scrabble.txt")]
        input: PathBuf,
        #[arg(long, default_value = "isograms.txt")]
        output: PathBuf,
    },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let command = cli.command.unwrap_or(Commands::Play {
        dictionary: PathBuf::from("isograms.txt"),
        seed: None,
    });

    match command {
        Commands::Play { dictionary, seed } => {
            let dict = Dictionary::load(&dictionary)
                .with_context(|| format!("could not load dictionary {}", dictionary.display()))?;
            info!(
                "loaded {} isograms, lengths {}..{}",
                dict.len(),
                dict.lengths().next().unwrap_or(0),
                dict.lengths().last().unwrap_or(0)
            );
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let mut rng = if let Some(s) = seed {
                SmallRng::seed_from_u64(s)
            } else {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            };
            console::run(&dict, &mut rng)?;
        }
        Commands::Generate { input, output } => {
            let report = curator::generate(&input, &output)?;
            info!("curated {} isograms from {}", report.total, input.display());
            println!("Wrote {} isograms to {}", report.total, output.display());
            for (length, count) in &report.counts {
                println!("  length {:>2}: {} words", length, count);
            }
        }
    }
    Ok(())
}
