//! PocketFX Converter CLI
//!
//! One-shot conversions from the command line, or an interactive
//! single-screen converter session.

use std::collections::BTreeMap;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod session;

use pocketfx_common::Currency;
use pocketfx_rates::{ConversionEngine, ConversionOutcome, RateTable};
use session::ConverterSession;

/// PocketFX converter CLI
#[derive(Parser, Debug)]
#[command(name = "pocketfx")]
#[command(about = "Offline currency converter (USD, IDR, EUR, JPY)")]
struct Args {
    /// Amount to convert; omit all positionals for interactive mode
    amount: Option<String>,

    /// Source currency code
    from: Option<String>,

    /// Target currency code
    to: Option<String>,

    /// Print the one-shot result as JSON
    #[arg(long)]
    json: bool,

    /// Load replacement rates from a JSON file (code -> units per USD)
    #[arg(long, value_name = "FILE")]
    rates: Option<PathBuf>,
}

/// One-shot conversion result for `--json` output.
#[derive(Debug, Serialize)]
struct ConversionReport {
    amount: String,
    source: String,
    target: String,
    value: Decimal,
    formatted: String,
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();

    let table = match &args.rates {
        Some(path) => load_rates(path)?,
        None => RateTable::builtin(),
    };
    let engine = ConversionEngine::new(table);
    debug!(entries = engine.table().len(), "rate table loaded");

    match (&args.amount, &args.from, &args.to) {
        (Some(amount), Some(from), Some(to)) => run_one_shot(&engine, amount, from, to, args.json),
        (None, None, None) => run_interactive(ConverterSession::new(engine)),
        _ => bail!("AMOUNT, FROM and TO must be given together"),
    }
}

fn load_rates(path: &PathBuf) -> anyhow::Result<RateTable> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading rates file {}", path.display()))?;
    let quotes: BTreeMap<String, Decimal> =
        serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;

    Ok(RateTable::new(quotes)?)
}

fn run_one_shot(
    engine: &ConversionEngine,
    amount: &str,
    from: &str,
    to: &str,
    json: bool,
) -> anyhow::Result<()> {
    let source = Currency::from_code(from)?;
    let target = Currency::from_code(to)?;

    match engine.convert(amount, &source, &target) {
        ConversionOutcome::Converted(formatted) => {
            if json {
                let report = ConversionReport {
                    amount: amount.trim().to_string(),
                    source: source.code().to_string(),
                    target: target.code().to_string(),
                    value: formatted.money.value,
                    formatted: formatted.text,
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", formatted.text);
            }
            Ok(())
        }
        ConversionOutcome::Empty => Ok(()),
        ConversionOutcome::InvalidInput => bail!("Invalid input: {amount}"),
    }
}

fn run_interactive(mut session: ConverterSession) -> anyhow::Result<()> {
    println!("PocketFX interactive converter");
    print_help();
    render(&session);

    let stdin = io::stdin();
    prompt()?;

    for line in stdin.lock().lines() {
        let line = line?;
        let trimmed = line.trim();
        let mut parts = trimmed.splitn(2, char::is_whitespace);
        let command = parts.next().unwrap_or("");
        let rest = parts.next().unwrap_or("").trim();

        match command.to_lowercase().as_str() {
            "quit" | "exit" => break,
            "help" => print_help(),
            "swap" => session.swap(),
            "clear" => session.set_amount(""),
            "amount" => session.set_amount(rest),
            "from" => match Currency::from_code(rest) {
                Ok(currency) => session.select_source(currency),
                Err(e) => println!("{e}"),
            },
            "to" => match Currency::from_code(rest) {
                Ok(currency) => session.select_target(currency),
                Err(e) => println!("{e}"),
            },
            "rates" => print_rates(&session),
            // Anything else is amount text, like typing into the field.
            _ => session.set_amount(trimmed),
        }

        render(&session);
        prompt()?;
    }

    Ok(())
}

fn render(session: &ConverterSession) {
    let amount = match session.amount_input() {
        "" => "0.00",
        text => text,
    };
    let output = match session.display_output() {
        "" => "---",
        text => text,
    };

    println!(
        "  [{}] {}  ->  [{}] {}",
        session.source().code(),
        amount,
        session.target().code(),
        output
    );
}

fn print_rates(session: &ConverterSession) {
    for (code, entry) in session.rate_table().iter() {
        println!(
            "  1 {} = {} {}",
            pocketfx_rates::table::BASE_CODE,
            entry.from_base,
            code
        );
    }
}

fn print_help() {
    println!("  commands:");
    println!("    amount <text>   set the amount (any other line works too)");
    println!("    from <code>     select the source currency");
    println!("    to <code>       select the target currency");
    println!("    swap            exchange source and target");
    println!("    rates           show the rate table");
    println!("    clear           clear the amount");
    println!("    quit            leave");
}

fn prompt() -> anyhow::Result<()> {
    print!("> ");
    io::stdout().flush()?;
    Ok(())
}
