//! Records read from and written to the quote store

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use quotesite_core::display_name;

/// Author row from `authors`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Author {
    pub id: i64,
    pub first_name: String,
    pub last_name: Option<String>,
    pub image_url: Option<String>,
}

/// Active quote joined with its author
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct QuoteWithAuthor {
    pub id: i64,
    pub quote: String,
    pub author_id: i64,
    pub first_name: String,
    pub last_name: Option<String>,
    pub image_url: Option<String>,
}

impl QuoteWithAuthor {
    pub fn author_name(&self) -> String {
        display_name(&self.first_name, self.last_name.as_deref())
    }
}

/// Input for [`crate::db::QuoteStore::insert_quote`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewQuote {
    pub quote: String,
    pub first_name: String,
    #[serde(default)]
    pub last_name: Option<String>,
    /// Original ingestion payload, stored as JSON text
    #[serde(default)]
    pub raw: serde_json::Value,
}

/// Filters shared by quote listing and counting
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuoteFilters {
    pub author_id: Option<i64>,
}

/// Paginated list response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing<T> {
    pub offset: i64,
    pub limit: i64,
    pub results: Vec<T>,
    /// Total matching rows across all pages
    pub total: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn listing_serializes_flat() {
        let listing = Listing {
            offset: 0,
            limit: 10,
            results: vec![1, 2],
            total: 2,
        };
        assert_eq!(
            serde_json::to_value(&listing).unwrap(),
            json!({"offset": 0, "limit": 10, "results": [1, 2], "total": 2})
        );
    }

    #[test]
    fn new_quote_defaults() {
        let quote: NewQuote =
            serde_json::from_value(json!({"quote": "Be brief.", "first_name": "Anon"})).unwrap();
        assert_eq!(quote.last_name, None);
        assert!(quote.raw.is_null());
    }
}
