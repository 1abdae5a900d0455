//! Property-based tests for volume parsing and the results link.

use proptest::prelude::*;
use url::form_urlencoded;

use book_search::formatters::{self, MoneyFormat};
use book_search::models::{Volume, Volumes};
use book_search::{Messages, SearchQuery};

proptest! {
    /// The query in the results link decodes back to the original expression.
    #[test]
    fn results_link_round_trips(term in "\\PC{0,40}") {
        let query = SearchQuery::new(None, term.clone());
        let link = formatters::results_link(&query);

        let (_, encoded) = link.split_once("?q=").unwrap();
        let decoded: Vec<(String, String)> = form_urlencoded::parse(format!("q={encoded}").as_bytes())
            .into_owned()
            .collect();

        prop_assert_eq!(decoded.len(), 1);
        prop_assert_eq!(&decoded[0].1, &term);
    }

    /// Volume deserialization never panics on arbitrary field values.
    #[test]
    fn volume_from_arbitrary_json_never_panics(
        title in proptest::option::of(".*"),
        rating in proptest::option::of(any::<f64>()),
        count in proptest::option::of(any::<i64>()),
        saleability in ".*",
        amount in any::<f64>(),
    ) {
        let json = serde_json::json!({
            "id": "v",
            "volumeInfo": {
                "title": title,
                "averageRating": rating,
                "ratingsCount": count,
            },
            "saleInfo": {
                "saleability": saleability,
                "retailPrice": {"amount": amount},
            },
        });

        // Should not panic - may succeed or fail gracefully
        let _ = serde_json::from_value::<Volume>(json);
    }

    /// Formatting a parsed volume never panics, whatever the rating or price.
    #[test]
    fn formatting_never_panics(
        rating in any::<f64>(),
        count in 0u64..1_000_000,
        list in -1.0e9f64..1.0e9,
        retail in -1.0e9f64..1.0e9,
    ) {
        let json = serde_json::json!({
            "totalItems": 1,
            "items": [{
                "volumeInfo": {"title": "T", "averageRating": rating, "ratingsCount": count},
                "saleInfo": {
                    "saleability": "FOR_SALE",
                    "listPrice": {"amount": list, "currencyCode": "USD"},
                    "retailPrice": {"amount": retail, "currencyCode": "USD"},
                },
            }],
        });

        if let Ok(volumes) = serde_json::from_value::<Volumes>(json) {
            let query = SearchQuery::new(None, "t");
            let output = formatters::format_volumes(
                &volumes,
                &query,
                &Messages::default(),
                MoneyFormat::default(),
            );
            prop_assert!(output.contains("Title: T"));
        }
    }
}
