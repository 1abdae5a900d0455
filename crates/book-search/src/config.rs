//! Configuration for the book search CLI.

use crate::error::ConfigError;
use crate::messages::Locale;

/// API configuration constants.
pub mod api {
    /// Base URL for the Google Books API.
    pub const VOLUMES_API: &str = "https://www.googleapis.com/books/v1";

    /// Human-facing search page used for the trailing results link.
    pub const EBOOKS_SEARCH_URL: &str = "http://books.google.com/ebooks";

    /// Application name sent as the User-Agent.
    pub const APPLICATION_NAME: &str = concat!("book-search/", env!("CARGO_PKG_VERSION"));

    /// Environment variable holding the API key.
    pub const API_KEY_ENV: &str = "GOOGLE_BOOKS_API_KEY";

    /// Environment variable holding the locale.
    pub const LOCALE_ENV: &str = "BOOK_SEARCH_LOCALE";
}

/// Restriction on which volumes the search returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum VolumeFilter {
    /// Any Google eBook.
    Ebooks,
    /// Free Google eBooks.
    FreeEbooks,
    /// Google eBooks with a price.
    PaidEbooks,
    /// Volumes whose full text is viewable.
    Full,
    /// Volumes with at least part of the text viewable.
    Partial,
}

impl VolumeFilter {
    /// Value of the `filter` query parameter.
    #[must_use]
    pub const fn as_param(self) -> &'static str {
        match self {
            Self::Ebooks => "ebooks",
            Self::FreeEbooks => "free-ebooks",
            Self::PaidEbooks => "paid-ebooks",
            Self::Full => "full",
            Self::Partial => "partial",
        }
    }
}

/// Client configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Google Books API key.
    pub api_key: Option<String>,

    /// Base URL for the volumes API (for testing with mock servers).
    pub volumes_api_url: String,

    /// Application name sent with each request.
    pub application_name: String,

    /// Locale for messages and number formatting.
    pub locale: Locale,

    /// Optional volume filter.
    pub filter: Option<VolumeFilter>,
}

impl Config {
    /// Create a new configuration with an optional API key.
    #[must_use]
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            volumes_api_url: api::VOLUMES_API.to_string(),
            application_name: api::APPLICATION_NAME.to_string(),
            locale: Locale::default(),
            filter: None,
        }
    }

    /// Create a test configuration pointing at a mock server.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            volumes_api_url: format!("{}/books/v1", base_url.trim_end_matches('/')),
            ..Self::new(Some("test-key".to_string()))
        }
    }

    /// Create configuration from environment variables.
    ///
    /// An unrecognized locale falls back to the default.
    #[must_use]
    pub fn from_env() -> Self {
        let api_key = std::env::var(api::API_KEY_ENV).ok();
        Self::new(api_key).with_locale(Self::locale_from_env())
    }

    /// Locale named by the environment, or the default when unset or unsupported.
    #[must_use]
    pub fn locale_from_env() -> Locale {
        std::env::var(api::LOCALE_ENV).map_or_else(|_| Locale::default(), |v| locale_or_default(&v))
    }

    /// Set the locale.
    #[must_use]
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Set the volume filter.
    #[must_use]
    pub fn with_filter(mut self, filter: Option<VolumeFilter>) -> Self {
        self.filter = filter;
        self
    }

    /// Check if an API key is configured.
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.trim().is_empty())
    }

    /// The API key, or an error if none is configured.
    pub fn require_api_key(&self) -> Result<&str, ConfigError> {
        match self.api_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => Ok(key),
            _ => Err(ConfigError::MissingApiKey),
        }
    }
}

/// Parse a locale value, falling back to the default with a warning.
#[must_use]
pub fn locale_or_default(value: &str) -> Locale {
    value.parse().unwrap_or_else(|e: String| {
        tracing::warn!(value = %value, error = %e, "Ignoring locale");
        Locale::default()
    })
}

impl Default for Config {
    fn default() -> Self {
        Self::new(None)
    }
}
