//! Plain-text console output.

use url::form_urlencoded;

use super::MoneyFormat;
use crate::config::api;
use crate::messages::Messages;
use crate::models::{AccessViewStatus, SaleInfo, Volume, Volumes};
use crate::query::SearchQuery;

/// Line printed between records.
pub const SEPARATOR: &str = "==========";

/// Format the search header echoed before the request is sent.
#[must_use]
pub fn format_query_header(query: &SearchQuery, messages: &Messages) -> String {
    format!("{}: [{}]\n", messages.query, query)
}

/// Format a whole search response.
///
/// An empty response yields only the "no matches" line.
#[must_use]
pub fn format_volumes(
    volumes: &Volumes,
    query: &SearchQuery,
    messages: &Messages,
    money: MoneyFormat,
) -> String {
    if volumes.is_empty() {
        return format!("{}\n", messages.no_matches);
    }

    let mut output = String::new();

    for volume in &volumes.items {
        output.push_str(SEPARATOR);
        output.push('\n');
        output.push_str(&format_volume(volume, messages, money));
    }

    output.push_str(SEPARATOR);
    output.push('\n');
    output.push_str(&format!(
        "{} {} {}\n",
        volumes.total_items,
        messages.total_results_at,
        results_link(query)
    ));

    output
}

/// Format a single volume, one line per field present.
#[must_use]
pub fn format_volume(volume: &Volume, messages: &Messages, money: MoneyFormat) -> String {
    let info = &volume.volume_info;
    let mut output = String::new();

    if !info.industry_identifiers.is_empty() {
        output.push_str(&format!("{}: {}\n", messages.identifiers, info.identifiers()));
    }

    output.push_str(&format!("{}: {}\n", messages.title, info.title_or_default()));

    if !info.authors.is_empty() {
        output.push_str(&format!("{}: {}\n", messages.authors, info.author_names()));
    }

    if let Some(description) = info.description_text() {
        output.push_str(&format!("{}: {description}\n", messages.description));
    }

    if let Some((stars, count)) = info.star_rating() {
        output.push_str(&format!(
            "{}: {} ({count} {})\n",
            messages.user_rating,
            "*".repeat(stars),
            messages.ratings_suffix
        ));
    }

    if let Some(line) = volume.sale_info.as_ref().and_then(|s| format_price(s, messages, money)) {
        output.push_str(&line);
        output.push('\n');
    }

    output.push_str(access_message(volume.access_info.access_view_status, messages));
    output.push('\n');

    if let Some(link) = &info.info_link {
        output.push_str(link);
        output.push('\n');
    }

    output
}

/// Price line for a volume that is for sale.
///
/// List price and savings are shown only when the list price is higher.
#[must_use]
pub fn format_price(sale: &SaleInfo, messages: &Messages, money: MoneyFormat) -> Option<String> {
    let retail = sale.price_for_sale()?;
    let savings = sale.savings();
    let mut line = String::new();

    if let (Some(list), Some(_)) = (&sale.list_price, savings) {
        line.push_str(&format!("{}: {}  ", messages.list_price, money.price(list)));
    }

    line.push_str(&format!("{}: {}", messages.ebook_price, money.price(retail)));

    if let Some(savings) = savings {
        let currency = retail.currency_code.as_deref();
        line.push_str(&format!(
            "  {}: {} ({})",
            messages.you_save,
            money.amount(savings.amount, currency),
            money.percent(savings.fraction)
        ));
    }

    Some(line)
}

/// Message introducing the info link.
#[must_use]
pub const fn access_message(status: AccessViewStatus, messages: &Messages) -> &'static str {
    match status {
        AccessViewStatus::FullPublicDomain => messages.access_public_domain,
        AccessViewStatus::Sample => messages.access_sample,
        AccessViewStatus::None | AccessViewStatus::Unknown => messages.access_other,
    }
}

/// Link to the search on the Google eBooks site.
#[must_use]
pub fn results_link(query: &SearchQuery) -> String {
    let encoded: String = form_urlencoded::byte_serialize(query.as_str().as_bytes()).collect();
    format!("{}?q={encoded}", api::EBOOKS_SEARCH_URL)
}
