use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Channel assigned to reviews whose source does not report one.
pub const DEFAULT_CHANNEL: &str = "Hostaway";

/// Review identifier as reported by the upstream channel.
/// Hostaway uses integers, other channels use opaque strings; both are
/// accepted and kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReviewId {
    Int(i64),
    Str(String),
}

impl ReviewId {
    /// Parse a CLI/user-provided identifier: numeric strings become `Int`
    /// so that they match integer ids from the upstream payloads.
    pub fn parse(s: &str) -> Self {
        s.trim()
            .parse::<i64>()
            .map(ReviewId::Int)
            .unwrap_or_else(|_| ReviewId::Str(s.to_string()))
    }
}

impl fmt::Display for ReviewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReviewId::Int(n) => write!(f, "{}", n),
            ReviewId::Str(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for ReviewId {
    fn from(n: i64) -> Self {
        ReviewId::Int(n)
    }
}

impl From<&str> for ReviewId {
    fn from(s: &str) -> Self {
        ReviewId::Str(s.to_string())
    }
}

/// A named sub-score contributing to a review's overall rating
/// (cleanliness, communication, ...). The per-category rating may be
/// missing in upstream payloads; the calculator treats it as 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRating {
    #[serde(alias = "categoryName")]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
}

impl CategoryRating {
    pub fn new(category: impl Into<String>, rating: f64) -> Self {
        Self {
            category: category.into(),
            rating: Some(rating),
        }
    }
}

/// Canonical review entity. Every review in the store has passed through
/// the normalizer exactly once: all fields are populated, `categories` is
/// always a sequence (possibly empty) and `average_rating` is always the
/// rounded mean of the category ratings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: ReviewId,
    #[serde(rename = "type")]
    pub review_type: String,
    pub status: String,
    pub rating: f64,
    pub public_review: String,
    pub categories: Vec<CategoryRating>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<DateTime<Utc>>,
    pub guest_name: String,
    pub listing_name: String,
    pub channel: String,
    pub approved: bool,
    pub average_rating: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn review_id_parses_numeric_strings_as_int() {
        assert_eq!(ReviewId::parse("1001"), ReviewId::Int(1001));
        assert_eq!(ReviewId::parse(" 42 "), ReviewId::Int(42));
        assert_eq!(ReviewId::parse("abc-123"), ReviewId::Str("abc-123".into()));
    }

    #[test]
    fn review_id_deserializes_untagged() {
        let int: ReviewId = serde_json::from_str("1001").unwrap();
        let s: ReviewId = serde_json::from_str("\"rev-9\"").unwrap();
        assert_eq!(int, ReviewId::Int(1001));
        assert_eq!(s, ReviewId::Str("rev-9".into()));
    }

    #[test]
    fn review_serializes_camel_case() {
        let review = Review {
            id: ReviewId::Int(1),
            review_type: "guest-to-host".into(),
            status: "published".into(),
            rating: 5.0,
            public_review: "Great".into(),
            categories: vec![CategoryRating::new("cleanliness", 5.0)],
            submitted_at: None,
            guest_name: "Emma".into(),
            listing_name: "Studio E1".into(),
            channel: DEFAULT_CHANNEL.into(),
            approved: false,
            average_rating: 5.0,
        };
        let json = serde_json::to_value(&review).unwrap();
        assert_eq!(json["type"], "guest-to-host");
        assert_eq!(json["publicReview"], "Great");
        assert_eq!(json["listingName"], "Studio E1");
        assert_eq!(json["averageRating"], 5.0);
        assert!(json.get("submittedAt").is_none());
    }
}
