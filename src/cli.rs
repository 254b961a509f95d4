use clap::{Parser, Subcommand};
use std::path::PathBuf;

use review_sentiment::application::dto::OutputFormat;
use review_sentiment::config::Overrides;

/// Review sentiment analysis for app-store apps
#[derive(Parser, Debug)]
#[command(name = "review-sentiment")]
#[command(version)]
#[command(
    about = "Aggregate lexicon and transformer sentiment over app-store reviews",
    long_about = None
)]
pub struct Args {
    /// Path to a config file (defaults to ./review-sentiment.config.yml when present)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format: json or markdown
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Number of reviews to fetch per app
    #[arg(long, global = true, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub count: Option<u32>,

    /// Minimum per-review confidence to count a review under its own class
    #[arg(long, global = true, value_name = "T", value_parser = parse_unit_interval)]
    pub threshold: Option<f64>,

    /// Suppress progress output (errors are still printed)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Overall review sentiment for one app
    Analyze {
        /// App name as typed into the store search
        app: String,
    },
    /// Side-by-side review sentiment for two apps
    Compare {
        /// First app name
        app1: String,
        /// Second app name
        app2: String,
    },
}

fn parse_unit_interval(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", s))?;
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("{} is not between 0 and 1", value))
    }
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Command-line values that take precedence over the config file
    pub fn overrides(&self) -> Overrides {
        Overrides {
            format: self.format,
            review_count: self.count.map(|count| count as usize),
            transformer_threshold: self.threshold,
            output: self.output.clone(),
        }
    }
}
