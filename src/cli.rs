use std::time::Instant;

use anyhow::{Context, Result, ensure};
use clap::{Parser, ValueEnum};
use log::{info, warn};

use crate::enumerator::Enumerator;
use crate::enumerator::constants::DEFAULT_RESULT_CAP;
use crate::utils::{clamp_page, page_count, page_slice, validate_digit_string};

const DEFAULT_PAGE_SIZE: usize = 12;

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Lettercomb - Enumerate the letter spellings of a digit string
#[derive(Parser, Debug)]
#[command(name = "lettercomb")]
#[command(about = "Enumerate every letter combination a digit string can spell (1=A through 26=Z)")]
#[command(version)]
pub struct CliArgs {
    /// String of digits to decompose into letter groups
    pub digit_string: String,

    /// Maximum number of combinations to collect before stopping the search
    #[arg(short, long, default_value_t = DEFAULT_RESULT_CAP)]
    pub cap: usize,

    /// Page of results to print (1-based)
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,

    /// Number of combinations per page
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: usize,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub digit_string: String,
    pub cap: usize,
    pub page: usize,
    pub page_size: usize,
    pub log_level: LogLevel,
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    let args = CliArgs::parse();

    // Validate digit string
    validate_digit_string(&args.digit_string).context("Invalid digit string")?;

    ensure!(args.page_size > 0, "Page size must be at least 1");

    Ok(CliConfig {
        digit_string: args.digit_string,
        cap: args.cap,
        page: args.page,
        page_size: args.page_size,
        log_level: args.log_level,
    })
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level)?;

    let enumerator = Enumerator::with_cap(config.cap);

    info!(
        "Enumerating letter combinations for digit string '{}'",
        config.digit_string
    );

    let started = Instant::now();
    let enumeration = enumerator
        .enumerate(&config.digit_string)
        .context("Enumeration failed")?;
    let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;

    if enumeration.truncated {
        warn!(
            "Search stopped at the cap of {} combinations; more may exist",
            config.cap
        );
    }

    println!(
        "Found {} combinations in {:.2}ms",
        enumeration.len(),
        elapsed_ms
    );

    let pages = page_count(enumeration.len(), config.page_size);
    let page = clamp_page(config.page, pages);
    for combination in page_slice(&enumeration.combinations, page, config.page_size) {
        println!("{}", combination);
    }
    if pages > 1 {
        println!("Page {} of {}", page, pages);
    }
    if enumeration.truncated {
        println!(
            "Stopped after {} combinations to keep the search bounded.",
            config.cap
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_digit_string() {
        let result = validate_digit_string("123");
        assert!(result.is_ok());

        let result = validate_digit_string("12a3");
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_args_defaults() {
        let args = CliArgs {
            digit_string: "1232345".to_string(),
            cap: DEFAULT_RESULT_CAP,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            log_level: LogLevel::Warn,
        };

        assert_eq!(args.digit_string, "1232345");
        assert_eq!(args.cap, 50_000);
        assert_eq!(args.page, 1);
        assert_eq!(args.page_size, 12);
        assert!(matches!(args.log_level, LogLevel::Warn));
    }

    #[test]
    fn test_page_window() {
        let items: Vec<usize> = (0..30).collect();
        let pages = page_count(items.len(), DEFAULT_PAGE_SIZE);
        assert_eq!(pages, 3);
        assert_eq!(clamp_page(9, pages), 3);
        assert_eq!(page_slice(&items, 3, DEFAULT_PAGE_SIZE).len(), 6);
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            LogLevel::Error.to_log_level_filter(),
            log::LevelFilter::Error
        );
        assert_eq!(LogLevel::Warn.to_log_level_filter(), log::LevelFilter::Warn);
        assert_eq!(LogLevel::Info.to_log_level_filter(), log::LevelFilter::Info);
        assert_eq!(
            LogLevel::Debug.to_log_level_filter(),
            log::LevelFilter::Debug
        );
        assert_eq!(
            LogLevel::Trace.to_log_level_filter(),
            log::LevelFilter::Trace
        );
    }
}
