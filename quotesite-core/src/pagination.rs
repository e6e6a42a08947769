//! Offset/limit pagination shared by every list endpoint

use serde::{Deserialize, Serialize};

use crate::validation::{parse_optional_id, ValidationErrors};

/// Offset used when the request does not supply one
pub const DEFAULT_OFFSET: i64 = 0;

/// Page size used when the request does not supply one
pub const DEFAULT_LIMIT: i64 = 10;

/// Largest page size a client may request
pub const MAX_LIMIT: i64 = 100;

/// A validated page window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub offset: i64,
    pub limit: i64,
}

impl Page {
    /// Create a page, clamping `limit` to [`MAX_LIMIT`] and both values to
    /// a minimum of zero.
    pub fn new(offset: i64, limit: i64) -> Self {
        Self {
            offset: offset.max(0),
            limit: limit.clamp(0, MAX_LIMIT),
        }
    }

    /// Parse raw query-string values.
    ///
    /// Missing values fall back to the defaults. Both parameters are checked
    /// before returning so the error lists every violation. An oversized
    /// `limit` is clamped rather than rejected.
    pub fn parse(offset: Option<&str>, limit: Option<&str>) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let offset = parse_optional_id("offset", offset).unwrap_or_else(|e| {
            errors.push(e);
            None
        });
        let limit = parse_optional_id("limit", limit).unwrap_or_else(|e| {
            errors.push(e);
            None
        });

        errors.into_result(Self::new(
            offset.unwrap_or(DEFAULT_OFFSET),
            limit.unwrap_or(DEFAULT_LIMIT),
        ))
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            offset: DEFAULT_OFFSET,
            limit: DEFAULT_LIMIT,
        }
    }
}
