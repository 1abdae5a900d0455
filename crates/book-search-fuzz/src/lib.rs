//! Fuzzing library for book-search.
//!
//! This crate provides fuzzing targets for the Google Books response models
//! and the search token interpreter.
//!
//! # Usage
//!
//! ```bash
//! cd crates/book-search-fuzz
//! cargo +nightly fuzz run fuzz_volumes_parse -- -max_total_time=60
//! ```

pub use book_search::{models, query};
