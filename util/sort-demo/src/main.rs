//! Command-line demo for the sort variants.

mod args;

use std::{process, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, error, info};
use thiserror::Error;

use sort_algos::{Algorithm, ConfigError, HybridConfig, ParseAlgorithmError};

use args::Args;

const SAMPLES: [&[i32]; 4] = [
    &[16, -25, 38, 55, 38, 1, 12, 120, 9],
    &[99, 85, 61, 23, 2, 0, -14],
    &[-3, -2, -1, 0, 1, 2, 3],
    &[6, -8, -3, -3, 2, 5, 6, 2, -10, -3],
];

#[derive(Debug, Error)]
enum DemoError {
    #[error(transparent)]
    Algorithm(#[from] ParseAlgorithmError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

fn main() {
    let args = Args::parse();

    let log_level = LevelFilter::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!(
            "Invalid log level: {}. Using 'warn' instead.",
            args.log_level
        );
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    debug!(args:?; "Parsed arguments");

    if let Err(err) = run(&args) {
        error!("{err}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), DemoError> {
    let algorithms = if args.algorithm == "all" {
        Algorithm::ALL.to_vec()
    } else {
        vec![args.algorithm.parse::<Algorithm>()?]
    };

    let config = match args.threshold {
        Some(threshold) => HybridConfig::new(threshold),
        None => HybridConfig::from_env()?,
    };

    let inputs: Vec<Vec<i32>> = if args.values.is_empty() {
        SAMPLES.iter().map(|sample| sample.to_vec()).collect()
    } else {
        vec![args.values.clone()]
    };

    for algorithm in algorithms {
        info!(algorithm:%, threshold = config.insertion_threshold; "Sorting");
        println!("{algorithm}");

        for input in &inputs {
            let mut v = input.clone();
            println!("before: {}", join(&v));
            algorithm.sort_with_config(&mut v, &config);
            println!("after:  {}", join(&v));
        }
    }

    Ok(())
}

fn join(v: &[i32]) -> String {
    v.iter()
        .map(|val| val.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
