//! Trains the penguin classifier and reports its accuracy on the test split.
//!
//! Usage: cargo run --release -- --train files/penguins_train.csv --test files/penguins_test.csv

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Level};

use penguin_nn::{logging, CsvDataProvider, DataProvider, Network, Settings, TrainConfig};

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// CSV with the training examples (header row, features then one-hot labels)
    #[arg(long, value_name = "PATH", default_value = "files/penguins_train.csv")]
    train: PathBuf,
    /// CSV with the test examples, same layout as the training file
    #[arg(long, value_name = "PATH", default_value = "files/penguins_test.csv")]
    test: PathBuf,
    /// JSON file with network settings; defaults to 4-4-3, 1000 epochs, lr 0.01
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,
    #[arg(short, long, value_name = "INT")]
    epochs: Option<usize>,
    #[arg(short, long, value_name = "FLOAT")]
    learning_rate: Option<f64>,
    #[arg(long, value_name = "INT")]
    hidden: Option<usize>,
    /// Seed for parameter initialization
    #[arg(long, value_name = "INT")]
    seed: Option<u64>,
    /// Log the training loss every N epochs (needs --verbose)
    #[arg(long, value_name = "INT", default_value_t = 100)]
    log_every: usize,
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn settings(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => Settings::load_json(&path.to_string_lossy())
                .with_context(|| format!("reading settings from {}", path.display()))?,
            None => Settings::default(),
        };

        if let Some(epochs) = self.epochs {
            settings.epochs = epochs;
        }
        if let Some(lr) = self.learning_rate {
            settings.learning_rate = lr;
        }
        if let Some(hidden) = self.hidden {
            settings.hidden_neurons = hidden;
        }
        if self.seed.is_some() {
            settings.seed = self.seed;
        }

        settings.validate()?;
        Ok(settings)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(if cli.verbose { Level::DEBUG } else { Level::INFO })?;

    let settings = cli.settings()?;

    let train = CsvDataProvider::new(&cli.train, settings.input_neurons, settings.output_neurons)
        .load()
        .context("loading training data")?;
    let test = CsvDataProvider::new(&cli.test, settings.input_neurons, settings.output_neurons)
        .load()
        .context("loading test data")?;

    let config = TrainConfig {
        log_every: cli.log_every,
        ..TrainConfig::from_settings(&settings)
    };

    let start = Instant::now();

    let mut network = Network::new(settings);
    network.train_with(train.features(), train.labels(), &config)?;

    let elapsed = start.elapsed();

    network.log_parameters()?;

    let accuracy = network.validate(&test)?;
    info!("accuracy = {:.4}", accuracy);
    info!("elapsed time: {:?}", elapsed);

    Ok(())
}
