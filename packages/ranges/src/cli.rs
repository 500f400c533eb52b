//! Command-line interface for the `isbn` tool.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;
use isbn_engine::{check_digit, normalize, Isbn, IsbnError, Kind, RangeTable, DEFAULT_SEPARATOR};

use crate::cache::{load_table, refresh_cache, CachePolicy};
use crate::config::RANGES_DIR_ENV;
use crate::error::{RangesError, Result};

/// Validate, hyphenate and convert ISBNs.
#[derive(Parser)]
#[command(name = "isbn")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Directory holding RangeMessage.xml and its ranges.data cache
    #[arg(long, global = true, env = RANGES_DIR_ENV, default_value = ".")]
    pub ranges: PathBuf,

    /// Parse RangeMessage.xml even if a cache exists, and do not write one
    #[arg(long, global = true)]
    pub no_cache: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check one or more ISBNs and report why invalid ones fail.
    Validate {
        /// ISBNs in any formatting (e.g., 0-8044-2957-x)
        #[arg(required = true)]
        isbns: Vec<String>,
    },

    /// Print an ISBN with separators between its elements.
    Hyphenate {
        isbn: String,

        /// Separator between elements
        #[arg(short, long, default_value = DEFAULT_SEPARATOR)]
        separator: String,
    },

    /// Show the elements of an ISBN and the agency of its group.
    Info { isbn: String },

    /// Compute the check digit for a 9- or 12-digit prefix.
    CheckDigit {
        /// Digits without check digit (separators are ignored)
        digits: String,
    },

    /// Print the ISBN-13 and, where one exists, the ISBN-10 form.
    Convert { isbn: String },

    /// Rebuild ranges.data from RangeMessage.xml.
    RefreshCache,
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let policy = if cli.no_cache {
        CachePolicy::Bypass
    } else {
        CachePolicy::Use
    };

    match cli.command {
        Commands::Validate { isbns } => validate_command(&isbns),
        Commands::Hyphenate { isbn, separator } => {
            let table = load_table(&cli.ranges, policy)?;
            hyphenate_command(&isbn, &table, &separator)
        }
        Commands::Info { isbn } => {
            let table = load_table(&cli.ranges, policy)?;
            info_command(&isbn, &table)
        }
        Commands::CheckDigit { digits } => check_digit_command(&digits),
        Commands::Convert { isbn } => convert_command(&isbn),
        Commands::RefreshCache => refresh_cache_command(&cli.ranges),
    }
}

/// Execute the validate command.
fn validate_command(inputs: &[String]) -> Result<()> {
    let mut invalid = 0;

    for raw in inputs {
        match Isbn::parse(raw) {
            Ok(isbn) if isbn.is_valid() => {
                println!(
                    "{} {} {}",
                    style(raw).cyan(),
                    isbn.kind(),
                    style("valid").green()
                );
            }
            Ok(isbn) => {
                invalid += 1;
                println!(
                    "{} {} {}",
                    style(raw).cyan(),
                    isbn.kind(),
                    style(isbn.validity().describe()).red()
                );
            }
            Err(e) => {
                invalid += 1;
                println!("{} {}", style(raw).cyan(), style(e).red());
            }
        }
    }

    if invalid > 0 {
        return Err(RangesError::ValidationFailed {
            invalid,
            total: inputs.len(),
        });
    }
    Ok(())
}

/// Execute the hyphenate command.
fn hyphenate_command(raw: &str, table: &RangeTable, separator: &str) -> Result<()> {
    let isbn = Isbn::parse(raw)?;
    println!("{}", isbn.hyphenate(table, separator)?);
    Ok(())
}

/// Execute the info command.
fn info_command(raw: &str, table: &RangeTable) -> Result<()> {
    let isbn = Isbn::parse(raw)?;
    let parts = isbn.segments(table)?;

    println!("{} {}", style(parts.to_string()).bold(), isbn.kind());
    if parts.kind == Kind::Isbn13 {
        println!("  EAN prefix:         {}", parts.ean_prefix);
    }
    println!("  Registration group: {}", parts.registration_group);
    if let Some(agency) = &parts.agency {
        println!("  Agency:             {}", style(agency).green());
    }
    println!("  Registrant:         {}", parts.registrant);
    println!("  Publication:        {}", parts.publication);
    println!("  Check digit:        {}", parts.check_digit);
    Ok(())
}

/// Execute the check-digit command.
fn check_digit_command(digits: &str) -> Result<()> {
    let digits = normalize(digits);
    println!("{}", check_digit(&digits)?);
    Ok(())
}

/// Execute the convert command.
fn convert_command(raw: &str) -> Result<()> {
    let isbn = Isbn::parse(raw)?;
    let isbn13 = isbn.to_isbn13()?;
    println!("ISBN-13: {}", isbn13.normalized());

    match isbn.to_isbn10() {
        Ok(isbn10) => println!("ISBN-10: {}", isbn10.normalized()),
        Err(IsbnError::NotConvertible(_)) => {
            println!("ISBN-10: {}", style("none (prefix 979)").dim());
        }
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

/// Execute the refresh-cache command.
fn refresh_cache_command(dir: &Path) -> Result<()> {
    let message = refresh_cache(dir)?;
    println!(
        "{} {} prefixes, {} rules",
        style("Cached").green().bold(),
        message.table.len(),
        message.table.rule_count()
    );
    if let Some(date) = &message.date {
        println!("  Message date: {date}");
    }
    Ok(())
}
