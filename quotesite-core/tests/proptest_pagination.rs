use proptest::prelude::*;
use quotesite_core::{Page, MAX_LIMIT};

proptest! {
    /// Property: any numeric limit is clamped to MAX_LIMIT, never rejected
    #[test]
    fn prop_limit_never_exceeds_max(offset in 0i64..1_000_000, limit in 0i64..1_000_000) {
        let page = Page::parse(Some(&offset.to_string()), Some(&limit.to_string())).unwrap();

        prop_assert!(page.limit <= MAX_LIMIT);
        prop_assert_eq!(page.limit, limit.min(MAX_LIMIT));
        prop_assert_eq!(page.offset, offset);
    }

    /// Property: non-numeric input is always reported, for both fields together
    #[test]
    fn prop_non_numeric_rejected(offset in "[a-z]{1,8}", limit in "[a-z]{1,8}") {
        let errors = Page::parse(Some(&offset), Some(&limit)).unwrap_err();
        prop_assert_eq!(errors.len(), 2);
    }

    /// Property: parsing never panics on arbitrary strings
    #[test]
    fn prop_parse_never_panics(offset in ".*", limit in ".*") {
        let _ = Page::parse(Some(&offset), Some(&limit));
    }
}
