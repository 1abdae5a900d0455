//! Book Search
//!
//! Command-line search of the Google Books volumes catalog. Search tokens are
//! interpreted into a query expression (`inauthor:`, `isbn:` or `intitle:`
//! plus a free-text term), sent as a single `volumes.list` request, and the
//! matching volumes are printed as plain text.
//!
//! # Example
//!
//! ```no_run
//! use book_search::{BooksClient, Config, SearchQuery};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let client = BooksClient::new(config)?;
//!
//!     let query = SearchQuery::from_args(["--author", "Tolkien"])?;
//!     let volumes = client.search_volumes(&query).await?;
//!     println!("{} matches", volumes.total_items);
//!     Ok(())
//! }
//! ```

pub mod app;
pub mod client;
pub mod config;
pub mod error;
pub mod formatters;
pub mod messages;
pub mod models;
pub mod query;

pub use client::BooksClient;
pub use config::Config;
pub use error::{AppError, ClientError, ConfigError};
pub use messages::{Locale, Messages};
pub use query::{FieldPrefix, SearchQuery, UsageError};
