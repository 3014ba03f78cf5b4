use clap::Parser;

/// Sorts integers with the selected algorithm and prints them before and after
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Algorithm name, for example quick-hybrid or merge-bottom-up, or "all"
    #[arg(short, long, default_value = "quick-hybrid")]
    pub algorithm: String,

    /// Insertion sort cutoff for quick-hybrid, overrides SORT_HYBRID_THRESHOLD
    #[arg(short, long)]
    pub threshold: Option<usize>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Values to sort, the built-in samples are used when empty
    #[arg(allow_negative_numbers = true)]
    pub values: Vec<i32>,
}
