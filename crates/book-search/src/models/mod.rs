//! Data models for Google Books API entities.
//!
//! All models use `#[serde(default)]` for optional fields and
//! `#[serde(rename_all = "camelCase")]` to match API naming.

mod enums;
mod volume;

pub use enums::{AccessViewStatus, Saleability};
pub use volume::{
    AccessInfo, IndustryIdentifier, Price, SaleInfo, Savings, Volume, VolumeInfo, Volumes,
};
