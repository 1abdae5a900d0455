//! One search, from command-line tokens to printed results.

use std::io::Write;

use anyhow::Context;

use crate::client::BooksClient;
use crate::config::Config;
use crate::error::{AppError, ClientError, ConfigError};
use crate::formatters::{self, MoneyFormat};
use crate::messages::Messages;
use crate::query::{SearchQuery, UsageError};

/// Interpret `tokens`, run the search and write the report to `out`.
///
/// Usage errors are raised before the configuration is looked at, and a
/// missing API key before any request is sent.
pub async fn run<I, S, W>(config: Config, tokens: I, out: &mut W) -> Result<(), AppError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    W: Write,
{
    let query = SearchQuery::from_args(tokens)?;
    let messages = Messages::for_locale(config.locale);
    let money = MoneyFormat::new(config.locale);

    let client = BooksClient::new(config)?;

    out.write_all(formatters::format_query_header(&query, &messages).as_bytes())
        .context("failed to write output")?;

    let volumes = client.search_volumes(&query).await?;

    let report = formatters::format_volumes(&volumes, &query, &messages, money);
    out.write_all(report.as_bytes()).context("failed to write output")?;
    out.flush().context("failed to write output")?;

    Ok(())
}

/// Render an error the way it is shown on standard error.
///
/// Unexpected errors include the full cause chain.
#[must_use]
pub fn describe_error(err: &AppError, messages: &Messages) -> String {
    if !err.is_message_only() {
        return match err {
            AppError::Unexpected(inner) => format!("{inner:?}"),
            other => format!("{other:?}"),
        };
    }

    match err {
        AppError::Usage(UsageError::NoArguments) => messages.no_arguments.to_string(),
        AppError::Usage(UsageError::UnknownFlag(flag)) => messages.unknown_flag(flag),
        AppError::Configuration(ConfigError::MissingApiKey) => messages.missing_api_key.to_string(),
        AppError::Configuration(ConfigError::InvalidHeader(e)) => {
            format!("{}: {e}", messages.client_setup_failed)
        }
        AppError::Configuration(ConfigError::HttpClient(e)) => {
            format!("{}: {e}", messages.client_setup_failed)
        }
        AppError::Transport(ClientError::Status { status, message }) => {
            format!("{} ({status}): {message}", messages.request_failed)
        }
        AppError::Transport(ClientError::Http(e)) => format!("{}: {e}", messages.network_error),
        other => other.to_string(),
    }
}
