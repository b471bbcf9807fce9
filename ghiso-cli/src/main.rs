use anyhow::{Context, Result};
use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, TimeZone, Utc};
use clap::{Parser, Subcommand};
use ghiso_core::{month_year, now_in};
use ghiso_finance::{replies, BalanceReport, SummaryReport, TransactionStore};
use ghiso_intent::{AmountMode, IntentParser, ParserOptions};

mod chat;
mod config;
mod state;

const LONG_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GHISO_BUILD_SHA"), ")");

#[derive(Parser, Debug)]
#[command(name = "ghiso", author, version, long_version = LONG_VERSION, about = "Household ledger chatbot")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify one message and print the parsed intent as JSON (writes nothing)
    Parse {
        message: String,

        /// Resolve date phrases against this day instead of today (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Only a `k` right after the number means thousands
        #[arg(long)]
        strict: bool,
    },

    /// Chat with the bot; records land in ~/.ghiso/transactions.json
    Chat {
        /// Answer this one message and exit instead of reading stdin
        #[arg(long, short)]
        message: Option<String>,

        /// Print each reply as JSON
        #[arg(long)]
        json: bool,
    },

    /// Income, expense and balance for a month
    Balance {
        /// YYYY-MM (default: current month)
        #[arg(long)]
        month: Option<String>,

        #[arg(long)]
        json: bool,
    },

    /// Top expense categories and counts for the current month
    Summary {
        #[arg(long)]
        json: bool,
    },

    /// Manage ~/.ghiso/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write the default config if none exists
    Init,
    /// Print the effective config
    Show,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Parse { message, date, strict } => {
            let cfg = config::load_config()?;
            let amount_mode = if strict { AmountMode::Strict } else { cfg.amount_mode };
            let parser = IntentParser::new(ParserOptions { amount_mode });

            let intent = match date {
                Some(day) => parser.classify(&message, &at_start_of(day)),
                None => parser.classify(&message, &now_in(cfg.tz()?, Utc::now())),
            };
            println!("{}", serde_json::to_string_pretty(&intent)?);
        }

        Command::Chat { message, json } => {
            let cfg = config::load_config()?;
            match message {
                Some(message) => chat::run_once(&cfg, &message, json)?,
                None => chat::run_chat(&cfg, json)?,
            }
        }

        Command::Balance { month, json } => {
            let cfg = config::load_config()?;
            let month = match month {
                Some(m) => m,
                None => month_year(now_in(cfg.tz()?, Utc::now()).date_naive()),
            };
            let store = state::JsonFileStore::open(state::transactions_path()?)?;
            let records = store
                .transactions_for_month(&month)
                .with_context(|| format!("read transactions for {month}"))?;
            let report = BalanceReport::from_transactions(&records);

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", replies::balance_reply(&report, &mut rand::thread_rng()));
            }
        }

        Command::Summary { json } => {
            let cfg = config::load_config()?;
            let today = now_in(cfg.tz()?, Utc::now()).date_naive();
            let store = state::JsonFileStore::open(state::transactions_path()?)?;
            let records = store
                .transactions_for_month(&month_year(today))
                .context("read transactions for this month")?;
            let report = SummaryReport::from_transactions(today.month(), &records);

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", replies::summary_reply(&report));
            }
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Show => {
                let cfg = config::load_config()?;
                println!("# {}", config::config_path()?.display());
                print!("{}", toml::to_string_pretty(&cfg).context("serialize config")?);
            }
        },
    }

    Ok(())
}

/// Midnight UTC on `day`; its calendar date is `day` itself.
fn at_start_of(day: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&day.and_time(NaiveTime::MIN))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_package_metadata_reaches_cli() {
        assert_eq!(env!("CARGO_PKG_AUTHORS"), "ghiso contributors");
        assert!(env!("CARGO_PKG_REPOSITORY").ends_with("/ghiso"));
        assert_eq!(Cli::command().get_author(), Some("ghiso contributors"));
    }

    #[test]
    fn test_start_of_day_keeps_date() {
        let day = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
        assert_eq!(at_start_of(day).date_naive(), day);
    }
}
