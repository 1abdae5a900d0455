//! Enumerated statuses reported on a volume.

use serde::{Deserialize, Serialize};

/// Whether a volume can currently be bought.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Saleability {
    /// Purchasable now.
    ForSale,
    /// Free to read.
    Free,
    /// Not sold through the store.
    NotForSale,
    /// Purchasable ahead of release.
    ForPreorder,
    /// Absent or not recognized.
    #[default]
    #[serde(other)]
    Unknown,
}

impl Saleability {
    /// Check if the volume is for sale.
    #[must_use]
    pub const fn is_for_sale(self) -> bool {
        matches!(self, Self::ForSale)
    }
}

/// How much of a volume's content is viewable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccessViewStatus {
    /// Public domain, full text free.
    FullPublicDomain,
    /// A sample is viewable.
    Sample,
    /// Nothing viewable.
    None,
    /// Absent or not recognized.
    #[default]
    #[serde(other)]
    Unknown,
}
