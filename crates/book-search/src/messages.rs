//! User-facing text, per locale.

use std::str::FromStr;

/// Locale for messages and number formatting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Locale {
    /// English, `1,234.50` style numbers.
    #[default]
    En,
    /// Portuguese (Brazil), `1.234,50` style numbers.
    Pt,
}

impl Locale {
    /// Decimal separator for this locale.
    #[must_use]
    pub const fn decimal_separator(self) -> char {
        match self {
            Self::En => '.',
            Self::Pt => ',',
        }
    }

    /// Digit grouping separator for this locale.
    #[must_use]
    pub const fn group_separator(self) -> char {
        match self {
            Self::En => ',',
            Self::Pt => '.',
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lang = s.trim().split(['-', '_', '.']).next().unwrap_or_default();
        match lang.to_ascii_lowercase().as_str() {
            "en" => Ok(Self::En),
            "pt" => Ok(Self::Pt),
            other => Err(format!("unsupported locale: {other}")),
        }
    }
}

/// Message table for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Messages {
    /// Locale these messages belong to.
    pub locale: Locale,
    /// Shown when the search returned nothing.
    pub no_matches: &'static str,
    /// Label before the echoed query expression.
    pub query: &'static str,
    /// Label for industry identifiers.
    pub identifiers: &'static str,
    /// Label for the title.
    pub title: &'static str,
    /// Label for the author list.
    pub authors: &'static str,
    /// Label for the description.
    pub description: &'static str,
    /// Label for the star rating.
    pub user_rating: &'static str,
    /// Suffix after the rating count.
    pub ratings_suffix: &'static str,
    /// Label for the list price.
    pub list_price: &'static str,
    /// Label for the retail price.
    pub ebook_price: &'static str,
    /// Label for the savings.
    pub you_save: &'static str,
    /// Access message for public domain volumes.
    pub access_public_domain: &'static str,
    /// Access message for volumes with a free sample.
    pub access_sample: &'static str,
    /// Access message for every other volume.
    pub access_other: &'static str,
    /// Words between the total count and the results link.
    pub total_results_at: &'static str,
    /// Diagnostic for an empty argument list.
    pub no_arguments: &'static str,
    /// Diagnostic prefix for an unrecognized flag.
    pub unknown_argument: &'static str,
    /// Diagnostic for a missing API key.
    pub missing_api_key: &'static str,
    /// Diagnostic prefix when the HTTP client cannot be set up.
    pub client_setup_failed: &'static str,
    /// Diagnostic prefix when the catalog could not be reached.
    pub network_error: &'static str,
    /// Diagnostic prefix when the catalog answered with an error status.
    pub request_failed: &'static str,
}

const EN: Messages = Messages {
    locale: Locale::En,
    no_matches: "No matches found.",
    query: "Query",
    identifiers: "ISBN",
    title: "Title",
    authors: "Author(s)",
    description: "Description",
    user_rating: "User Rating",
    ratings_suffix: "rating(s)",
    list_price: "List",
    ebook_price: "Google eBooks Price",
    you_save: "You Save",
    access_public_domain: "This public domain book is available for free from Google eBooks at:",
    access_sample: "A preview of this book is available from Google eBooks at:",
    access_other: "Additional information about this book is available from Google eBooks at:",
    total_results_at: "total results at",
    no_arguments: "Usage: book-search [--author | --isbn | --title] <term>",
    unknown_argument: "Unknown argument",
    missing_api_key: "API key not specified. Set GOOGLE_BOOKS_API_KEY or pass --api-key.",
    client_setup_failed: "Could not set up the HTTP client",
    network_error: "Could not reach Google Books",
    request_failed: "Request failed",
};

const PT: Messages = Messages {
    locale: Locale::Pt,
    no_matches: "Nenhum resultado encontrado.",
    query: "Consulta",
    identifiers: "ISBN",
    title: "Título",
    authors: "Autor(es)",
    description: "Descrição",
    user_rating: "Avaliação dos usuários",
    ratings_suffix: "avaliação(ões)",
    list_price: "Preço de tabela",
    ebook_price: "Preço no Google eBooks",
    you_save: "Você economiza",
    access_public_domain: "Este livro de domínio público está disponível gratuitamente no Google eBooks em:",
    access_sample: "Avaliação gratuita deste livro do Google eBooks em:",
    access_other: "Informações adicionais e eBook disponíveis em:",
    total_results_at: "resultados no total em",
    no_arguments: "Uso: book-search [--author | --isbn | --title] <termo>",
    unknown_argument: "Argumento desconhecido",
    missing_api_key: "Chave de API não especificada. Defina GOOGLE_BOOKS_API_KEY ou use --api-key.",
    client_setup_failed: "Não foi possível configurar o cliente HTTP",
    network_error: "Não foi possível acessar o Google Books",
    request_failed: "A requisição falhou",
};

impl Messages {
    /// Message table for a locale.
    #[must_use]
    pub const fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::En => EN,
            Locale::Pt => PT,
        }
    }

    /// Diagnostic for an unrecognized flag.
    #[must_use]
    pub fn unknown_flag(&self, flag: &str) -> String {
        format!("{}: {flag}", self.unknown_argument)
    }
}

impl Default for Messages {
    fn default() -> Self {
        Self::for_locale(Locale::default())
    }
}
