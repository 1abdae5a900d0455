//! Book Search - Entry Point

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use book_search::config::{Config, VolumeFilter, api};
use book_search::{Locale, Messages, app};

#[derive(Parser, Debug)]
#[command(name = "book-search")]
#[command(about = "Search the Google Books catalog")]
#[command(version)]
struct Cli {
    /// Google Books API key
    #[arg(long, env = api::API_KEY_ENV, hide_env_values = true)]
    api_key: Option<String>,

    /// Language for messages and prices: en, pt [default: $BOOK_SEARCH_LOCALE, else en]
    #[arg(long, value_parser = parse_locale)]
    locale: Option<Locale>,

    /// Only return volumes of this kind
    #[arg(long, value_enum, env = "BOOK_SEARCH_FILTER")]
    filter: Option<VolumeFilter>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    /// Search tokens: [--author | --isbn | --title] <term>
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "SEARCH")]
    search: Vec<String>,
}

fn parse_locale(value: &str) -> Result<Locale, String> {
    value.parse()
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)).init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    // An unsupported value in the environment is not fatal, unlike --locale.
    let locale = cli.locale.unwrap_or_else(Config::locale_from_env);

    tracing::debug!(
        version = env!("CARGO_PKG_VERSION"),
        locale = ?locale,
        filter = ?cli.filter,
        "Starting book search"
    );

    let config = Config::new(cli.api_key).with_locale(locale).with_filter(cli.filter);
    let messages = Messages::for_locale(locale);

    let mut stdout = std::io::stdout().lock();
    match app::run(config, &cli.search, &mut stdout).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = %err, exit_code = err.exit_code(), "Search failed");
            eprintln!("{}", app::describe_error(&err, &messages));
            ExitCode::from(err.exit_code())
        }
    }
}
