//! Volume data model matching the Google Books API schema.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{AccessViewStatus, Saleability};

/// Response of a volumes search.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Volumes {
    /// Total number of matches on the server.
    #[serde(default)]
    pub total_items: u64,

    /// Volumes in this page of results.
    #[serde(default)]
    pub items: Vec<Volume>,
}

impl Volumes {
    /// Check if the search found nothing to show.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total_items == 0 || self.items.is_empty()
    }
}

/// A single book or work.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Volume {
    /// Volume ID.
    #[serde(default)]
    pub id: Option<String>,

    /// Bibliographic information.
    #[serde(default)]
    pub volume_info: VolumeInfo,

    /// Pricing information.
    #[serde(default)]
    pub sale_info: Option<SaleInfo>,

    /// Viewability information.
    #[serde(default)]
    pub access_info: AccessInfo,
}

/// Bibliographic part of a volume.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeInfo {
    /// Volume title.
    #[serde(default)]
    pub title: Option<String>,

    /// Author names.
    #[serde(default)]
    pub authors: Vec<String>,

    /// Synopsis.
    #[serde(default)]
    pub description: Option<String>,

    /// ISBNs and other identifiers.
    #[serde(default)]
    pub industry_identifiers: Vec<IndustryIdentifier>,

    /// Mean user rating (1.0 to 5.0).
    #[serde(default)]
    pub average_rating: Option<f64>,

    /// Number of user ratings.
    #[serde(default)]
    pub ratings_count: Option<u64>,

    /// Link to the volume's page on Google Books.
    #[serde(default)]
    pub info_link: Option<String>,
}

impl VolumeInfo {
    /// Get the title, falling back to "Untitled" if not available.
    #[must_use]
    pub fn title_or_default(&self) -> &str {
        self.title.as_deref().unwrap_or("Untitled")
    }

    /// Get author names as a comma-separated string.
    #[must_use]
    pub fn author_names(&self) -> String {
        self.authors.join(", ")
    }

    /// Get identifiers as a comma-separated string.
    #[must_use]
    pub fn identifiers(&self) -> String {
        self.industry_identifiers.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
    }

    /// Get the description if it is non-empty.
    #[must_use]
    pub fn description_text(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }

    /// Rounded star count and number of ratings, if the volume has been rated.
    ///
    /// Stars are clamped to 0..=5.
    #[must_use]
    pub fn star_rating(&self) -> Option<(usize, u64)> {
        let count = self.ratings_count.filter(|&c| c > 0)?;
        let average = self.average_rating.unwrap_or(0.0);
        let stars = average.round().clamp(0.0, 5.0) as usize;
        Some((stars, count))
    }
}

/// An industry identifier such as an ISBN.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndustryIdentifier {
    /// Identifier kind (`ISBN_10`, `ISBN_13`, `ISSN`, `OTHER`).
    #[serde(rename = "type", default)]
    pub kind: Option<String>,

    /// Identifier value.
    #[serde(default)]
    pub identifier: String,
}

impl fmt::Display for IndustryIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            Some(kind) => write!(f, "{kind}:{}", self.identifier),
            None => f.write_str(&self.identifier),
        }
    }
}

/// A monetary amount.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Price {
    /// Amount in the currency's major unit.
    #[serde(default)]
    pub amount: f64,

    /// ISO 4217 currency code.
    #[serde(default)]
    pub currency_code: Option<String>,
}

/// Pricing part of a volume.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleInfo {
    /// Sale status.
    #[serde(default)]
    pub saleability: Saleability,

    /// Suggested list price.
    #[serde(default)]
    pub list_price: Option<Price>,

    /// Actual selling price.
    #[serde(default)]
    pub retail_price: Option<Price>,
}

/// Discount of the retail price against the list price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Savings {
    /// List minus retail.
    pub amount: f64,
    /// `amount / list`, in 0.0..=1.0.
    pub fraction: f64,
}

impl SaleInfo {
    /// Retail price, only when the volume is for sale.
    #[must_use]
    pub fn price_for_sale(&self) -> Option<&Price> {
        if self.saleability.is_for_sale() { self.retail_price.as_ref() } else { None }
    }

    /// Savings when the list price exceeds the retail price.
    #[must_use]
    pub fn savings(&self) -> Option<Savings> {
        let list = self.list_price.as_ref()?.amount;
        let retail = self.retail_price.as_ref()?.amount;
        let amount = list - retail;
        if amount > 0.0 && list > 0.0 {
            Some(Savings { amount, fraction: amount / list })
        } else {
            None
        }
    }
}

/// Viewability part of a volume.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessInfo {
    /// How much of the content is viewable.
    #[serde(default)]
    pub access_view_status: AccessViewStatus,
}
