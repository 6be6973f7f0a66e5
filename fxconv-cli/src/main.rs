//! fxconv CLI
//!
//! Command-line front-end for the currency converter. Reads the store's
//! values and invokes its mutators; all data-service traffic goes through
//! the store.

use anyhow::Result;
use clap::{Parser, Subcommand};
use console::Style;

use fxconv_client::RatesClient;
use fxconv_store::{AppearanceStore, ConverterStore};
use fxconv_types::CurrencyCode;

const DEFAULT_API_URL: &str = "https://api.frankfurter.app";

#[derive(Parser)]
#[command(name = "fxconv")]
#[command(author, version, about = "Currency converter CLI", long_about = None)]
struct Cli {
    /// Base URL of the currency data service
    #[arg(long, env = "FXCONV_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Style output for dark terminals
    #[arg(long)]
    dark: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the supported currencies
    Currencies,
    /// Convert an amount between two currencies
    Convert {
        /// Amount in the source currency (digits, at most one decimal point)
        amount: String,
        /// Source currency code
        #[arg(long, default_value = "USD")]
        from: String,
        /// Target currency code
        #[arg(long, default_value = "EUR")]
        to: String,
    },
    /// Show the unit rate between two currencies
    Rate {
        /// Source currency code
        #[arg(long, default_value = "USD")]
        from: String,
        /// Target currency code
        #[arg(long, default_value = "EUR")]
        to: String,
    },
}

fn parse_currency(s: &str) -> Result<CurrencyCode> {
    s.parse()
        .map_err(|_| anyhow::anyhow!("invalid currency code: {}", s))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();

    let mut appearance = AppearanceStore::default();
    if cli.dark {
        appearance.toggle();
    }

    let client = RatesClient::new(&cli.api_url);
    let mut store = ConverterStore::new(client).await;

    match cli.command {
        Commands::Currencies => {
            if !store.is_ready() {
                println!("✗ currency list unavailable");
                std::process::exit(1);
            }
            for currency in store.currencies() {
                println!("{}", currency);
            }
        }

        Commands::Convert { amount, from, to } => {
            let from = parse_currency(&from)?;
            let to = parse_currency(&to)?;
            if !store.set_amount(amount.as_str()) {
                anyhow::bail!(
                    "invalid amount: {:?} (digits with at most one decimal point)",
                    amount
                );
            }
            store.set_source(from);
            store.set_target(to);
            store.convert().await;
            print_conversion(&store, &appearance);
        }

        Commands::Rate { from, to } => {
            let from = parse_currency(&from)?;
            let to = parse_currency(&to)?;
            store.set_amount("1");
            store.set_source(from);
            store.set_target(to);
            store.convert().await;
            match store.unit_rate() {
                Some(rate) => println!(
                    "1 {} = {} {}",
                    store.source(),
                    accent(&appearance).apply_to(format!("{rate:.4}")),
                    store.target()
                ),
                None => println!("rate not available"),
            }
        }
    }

    Ok(())
}

fn accent(appearance: &AppearanceStore) -> Style {
    if appearance.is_dark_mode() {
        Style::new().green().bright()
    } else {
        Style::new().green()
    }
}

fn print_conversion(store: &ConverterStore<RatesClient>, appearance: &AppearanceStore) {
    let accent = accent(appearance);
    match store.converted_amount() {
        Some(converted) => {
            println!(
                "{} {} = {} {}",
                store.amount_text(),
                store.source(),
                accent.apply_to(format!("{converted:.2}")),
                store.target()
            );
            match store.unit_rate() {
                Some(rate) => println!(
                    "1 {} = {} {}",
                    store.source(),
                    accent.apply_to(format!("{rate:.4}")),
                    store.target()
                ),
                None => println!("rate not available"),
            }
        }
        None => println!("conversion not available"),
    }
}
