mod cli;

use cli::{Args, Command};
use owo_colors::OwoColorize;
use review_sentiment::adapters::outbound::console::StderrProgressReporter;
use review_sentiment::adapters::outbound::network::{
    HuggingFaceClient, LexiconServiceClient, PooledScorer, ReviewServiceClient,
};
use review_sentiment::application::dto::{
    AnalyzeRequest, CompareRequest, ErrorResponse, OutputFormat, SentimentReport,
};
use review_sentiment::application::factories::{FormatterFactory, PresenterFactory};
use review_sentiment::application::use_cases::{AnalyzeAppUseCase, CompareAppsUseCase};
use review_sentiment::config::{self, Settings};
use review_sentiment::sentiment_analysis::services::{Comparator, SentimentAggregator};
use review_sentiment::shared::error::ExitCode;
use review_sentiment::shared::Result;
use std::path::Path;
use std::process;
use std::sync::Arc;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    init_tracing();

    let args = Args::parse_args();
    let mut format = args.format.unwrap_or_default();

    let result = match resolve_settings(&args) {
        Ok(settings) => {
            format = settings.format;
            run(args.command, settings, args.quiet).await
        }
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        print_error(&e, format);
        process::exit(ExitCode::from_error(&e).as_i32());
    }
}

/// Diagnostics go to stderr; `RUST_LOG` overrides the default `warn` level
fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

fn resolve_settings(args: &Args) -> Result<Settings> {
    let file = config::load_config(args.config.as_deref(), Path::new("."))?;
    Settings::resolve(file, args.overrides())
}

async fn run(command: Command, settings: Settings, quiet: bool) -> Result<()> {
    // Create adapters (Dependency Injection)
    let progress_reporter = if quiet {
        StderrProgressReporter::quiet()
    } else {
        StderrProgressReporter::new()
    };
    let review_source = ReviewServiceClient::new(
        &settings.review_service_url,
        &settings.lang,
        &settings.country,
    )?;
    let pool_size = settings.aggregation.max_concurrent_scoring;
    let lexicon = Arc::new(PooledScorer::new(
        LexiconServiceClient::new(&settings.lexicon_endpoint)?,
        pool_size,
    )?);
    let transformer = Arc::new(PooledScorer::new(
        HuggingFaceClient::new(&settings.transformer_endpoint, settings.api_token())?,
        pool_size,
    )?);
    let aggregator = SentimentAggregator::new(lexicon, transformer, settings.aggregation)?;

    // Execute use case
    let report: SentimentReport = match command {
        Command::Analyze { app } => {
            let use_case = AnalyzeAppUseCase::new(review_source, aggregator, progress_reporter);
            let request = AnalyzeRequest::new(app).with_review_count(settings.review_count);
            use_case.execute(request).await?.into()
        }
        Command::Compare { app1, app2 } => {
            let use_case =
                CompareAppsUseCase::new(review_source, Comparator::new(aggregator), progress_reporter);
            let request = CompareRequest::new(app1, app2).with_review_count(settings.review_count);
            use_case.execute(request).await?.into()
        }
    };

    // Format and present
    if !quiet {
        eprintln!("{}", FormatterFactory::progress_message(settings.format));
    }
    let output = FormatterFactory::create(settings.format).format(&report)?;
    PresenterFactory::create(settings.output.into()).present(&output)?;

    Ok(())
}

fn print_error(error: &anyhow::Error, format: OutputFormat) {
    eprintln!("\n{}\n", "❌ An error occurred:".red().bold());
    eprintln!("{}", error);
    for cause in error.chain().skip(1) {
        eprintln!("\n{} {}", "Caused by:".yellow(), cause);
    }
    eprintln!();

    if format == OutputFormat::Json {
        if let Some(body) = error_body(error) {
            println!("{}", body);
        }
    }
}

/// Structured error body printed on stdout for JSON output
fn error_body(error: &anyhow::Error) -> Option<String> {
    serde_json::to_string_pretty(&ErrorResponse::from_error(error)).ok()
}
