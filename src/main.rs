use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tracing::info;

use co2prep::config::Config;
use co2prep::constants::{
    DEFAULT_AUGMENTED_PATH, DEFAULT_CLEANED_PATH, DEFAULT_MAX_EMISSION, DEFAULT_RAW_PATH,
    DEFAULT_YEARS,
};
use co2prep::logging;
use co2prep::lookup::IsoResolver;
use co2prep::pipeline::{augment, normalize};

#[derive(Parser)]
#[command(name = "co2prep")]
#[command(about = "Transport CO2 emissions dataset preparation")]
#[command(version = "0.1.0")]
struct Cli {
    /// Optional TOML config file supplying paths and augmentation settings
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Drop aggregate entities and resolve ISO alpha-3 country codes
    Normalize {
        /// Raw emissions CSV
        #[arg(long)]
        input: Option<PathBuf>,
        /// Cleaned CSV to write
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Append synthetic emission rows for additional years
    Augment {
        /// Cleaned emissions CSV
        #[arg(long)]
        input: Option<PathBuf>,
        /// Augmented CSV to write
        #[arg(long)]
        output: Option<PathBuf>,
        /// Target years (comma-separated)
        #[arg(long, value_delimiter = ',')]
        years: Option<Vec<i32>>,
        /// Exclusive upper bound for random emission values
        #[arg(long)]
        max_emission: Option<f64>,
        /// RNG seed for reproducible synthetic data
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Run normalize and augment sequentially
    Run {
        /// Raw emissions CSV
        #[arg(long)]
        input: Option<PathBuf>,
        /// Intermediate cleaned CSV
        #[arg(long)]
        cleaned: Option<PathBuf>,
        /// Augmented CSV to write
        #[arg(long)]
        output: Option<PathBuf>,
        /// Target years (comma-separated)
        #[arg(long, value_delimiter = ',')]
        years: Option<Vec<i32>>,
        /// Exclusive upper bound for random emission values
        #[arg(long)]
        max_emission: Option<f64>,
        /// RNG seed for reproducible synthetic data
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Flag wins over config file, config file wins over the built-in default.
fn pick_path(flag: Option<PathBuf>, config: &Option<String>, default: &str) -> PathBuf {
    flag.unwrap_or_else(|| PathBuf::from(config.as_deref().unwrap_or(default)))
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => {
            info!(seed, "using seeded rng");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    }
}

fn run_normalize(input: &PathBuf, output: &PathBuf) -> anyhow::Result<()> {
    let report = normalize::normalize_file(input, output, &IsoResolver)?;
    println!("📊 Normalize results:");
    println!("   Rows read: {}", report.rows_in);
    println!("   Aggregates dropped: {}", report.rows_dropped);
    println!("   Rows written: {}", report.rows_out);
    println!("   Unresolved countries: {}", report.unresolved);
    println!("   Output file: {}", output.display());
    Ok(())
}

fn run_augment(
    input: &PathBuf,
    output: &PathBuf,
    years: &[i32],
    max_emission: f64,
    seed: Option<u64>,
) -> anyhow::Result<()> {
    let mut rng = make_rng(seed);
    let report = augment::augment_file(input, output, years, max_emission, &mut rng)?;
    println!("📊 Augment results:");
    println!("   Rows read: {}", report.rows_in);
    println!("   Distinct (country, code) pairs: {}", report.distinct_pairs);
    println!("   Synthetic rows added: {}", report.rows_added);
    println!("   Rows written: {}", report.rows_out);
    println!("   Output file: {}", output.display());
    Ok(())
}

fn main() -> anyhow::Result<()> {
    logging::init_logging();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    match cli.command {
        Commands::Normalize { input, output } => {
            let input = pick_path(input, &config.paths.raw, DEFAULT_RAW_PATH);
            let output = pick_path(output, &config.paths.cleaned, DEFAULT_CLEANED_PATH);
            run_normalize(&input, &output)?;
        }
        Commands::Augment {
            input,
            output,
            years,
            max_emission,
            seed,
        } => {
            let input = pick_path(input, &config.paths.cleaned, DEFAULT_CLEANED_PATH);
            let output = pick_path(output, &config.paths.augmented, DEFAULT_AUGMENTED_PATH);
            let years = years
                .or_else(|| config.augment.years.clone())
                .unwrap_or_else(|| DEFAULT_YEARS.to_vec());
            let max_emission = max_emission
                .or(config.augment.max_emission)
                .unwrap_or(DEFAULT_MAX_EMISSION);
            let seed = seed.or(config.augment.seed);
            run_augment(&input, &output, &years, max_emission, seed)?;
        }
        Commands::Run {
            input,
            cleaned,
            output,
            years,
            max_emission,
            seed,
        } => {
            let input = pick_path(input, &config.paths.raw, DEFAULT_RAW_PATH);
            let cleaned = pick_path(cleaned, &config.paths.cleaned, DEFAULT_CLEANED_PATH);
            let output = pick_path(output, &config.paths.augmented, DEFAULT_AUGMENTED_PATH);
            let years = years
                .or_else(|| config.augment.years.clone())
                .unwrap_or_else(|| DEFAULT_YEARS.to_vec());
            let max_emission = max_emission
                .or(config.augment.max_emission)
                .unwrap_or(DEFAULT_MAX_EMISSION);
            let seed = seed.or(config.augment.seed);
            run_normalize(&input, &cleaned)?;
            run_augment(&cleaned, &output, &years, max_emission, seed)?;
        }
    }

    info!("all done");
    Ok(())
}
