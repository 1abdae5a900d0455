//! Search query interpretation.
//!
//! Turns the raw search tokens from the command line into the `q` expression
//! understood by the volumes endpoint: an optional field prefix followed by
//! the free-text term.

use std::fmt;

/// Marker that introduces a flag token.
pub const FLAG_MARKER: &str = "--";

/// Field restriction applied to the search term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldPrefix {
    /// `--author` → `inauthor:`
    Author,
    /// `--isbn` → `isbn:`
    Isbn,
    /// `--title` → `intitle:`
    Title,
}

impl FieldPrefix {
    /// Map a command-line flag to its prefix.
    #[must_use]
    pub fn from_flag(flag: &str) -> Option<Self> {
        match flag {
            "--author" => Some(Self::Author),
            "--isbn" => Some(Self::Isbn),
            "--title" => Some(Self::Title),
            _ => None,
        }
    }

    /// The command-line flag selecting this prefix.
    #[must_use]
    pub const fn flag(self) -> &'static str {
        match self {
            Self::Author => "--author",
            Self::Isbn => "--isbn",
            Self::Title => "--title",
        }
    }

    /// The prefix as written in the query expression.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Author => "inauthor:",
            Self::Isbn => "isbn:",
            Self::Title => "intitle:",
        }
    }
}

/// Errors from interpreting the search tokens.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum UsageError {
    /// No search tokens were given.
    #[error("No search arguments given")]
    NoArguments,

    /// A `--` token that is not one of the recognized field flags.
    #[error("Unknown argument: {0}")]
    UnknownFlag(String),
}

/// A composed search query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    prefix: Option<FieldPrefix>,
    term: String,
    expression: String,
}

impl SearchQuery {
    /// Build a query from a prefix and a term.
    #[must_use]
    pub fn new(prefix: Option<FieldPrefix>, term: impl Into<String>) -> Self {
        let term = term.into();
        let expression = match prefix {
            Some(p) => format!("{}{}", p.as_str(), term),
            None => term.clone(),
        };
        Self { prefix, term, expression }
    }

    /// Interpret command-line search tokens.
    ///
    /// Tokens are scanned in order. A recognized flag sets the prefix, with the
    /// last one winning. Any other `--` token aborts with
    /// [`UsageError::UnknownFlag`]. Everything else is the free-text term, again
    /// last one wins. An empty token list is a [`UsageError::NoArguments`].
    ///
    /// # Errors
    ///
    /// Returns a [`UsageError`] as described above.
    pub fn from_args<I, S>(tokens: I) -> Result<Self, UsageError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen_any = false;
        let mut prefix = None;
        let mut term = String::new();

        for token in tokens {
            seen_any = true;
            let token = token.as_ref();

            if let Some(p) = FieldPrefix::from_flag(token) {
                prefix = Some(p);
            } else if token.starts_with(FLAG_MARKER) {
                return Err(UsageError::UnknownFlag(token.to_string()));
            } else {
                token.clone_into(&mut term);
            }
        }

        if !seen_any {
            return Err(UsageError::NoArguments);
        }

        Ok(Self::new(prefix, term))
    }

    /// The field prefix, if any.
    #[must_use]
    pub const fn prefix(&self) -> Option<FieldPrefix> {
        self.prefix
    }

    /// The free-text term without prefix.
    #[must_use]
    pub fn term(&self) -> &str {
        &self.term
    }

    /// The full query expression sent to the API.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.expression
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.expression)
    }
}
