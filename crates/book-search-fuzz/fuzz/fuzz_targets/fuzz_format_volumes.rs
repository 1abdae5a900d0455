#![no_main]

use book_search::formatters::{self, MoneyFormat};
use book_search::models::Volumes;
use book_search::{Messages, SearchQuery};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(volumes) = serde_json::from_slice::<Volumes>(data) {
        let query = SearchQuery::new(None, "fuzz");
        let _ = formatters::format_volumes(
            &volumes,
            &query,
            &Messages::default(),
            MoneyFormat::default(),
        );
    }
});
