#![no_main]

use book_search::SearchQuery;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Split arbitrary text into tokens the way a shell would hand them over
    if let Ok(text) = std::str::from_utf8(data) {
        let tokens: Vec<&str> = text.split('\0').collect();
        if let Ok(query) = SearchQuery::from_args(&tokens) {
            assert!(query.as_str().ends_with(query.term()));
        }
    }
});
