use serde::{Deserialize, Serialize};

use crate::review::ReviewId;

/// A category entry as it arrives from an upstream channel. Both the
/// entry name and the score can be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawCategory {
    #[serde(alias = "categoryName")]
    pub category: Option<String>,
    pub rating: Option<f64>,
}

/// Unvalidated review record from an external source. Every field is
/// optional; the normalizer is the single boundary that turns this into
/// a canonical [`Review`](crate::Review).
///
/// Hostaway spells the category list `reviewCategory`; already-canonical
/// records spell it `categories`. Both are accepted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawReview {
    pub id: Option<ReviewId>,
    #[serde(rename = "type")]
    pub review_type: Option<String>,
    pub status: Option<String>,
    pub rating: Option<f64>,
    pub public_review: Option<String>,
    #[serde(alias = "reviewCategory")]
    pub categories: Vec<RawCategory>,
    pub submitted_at: Option<String>,
    pub guest_name: Option<String>,
    pub listing_name: Option<String>,
    pub channel: Option<String>,
    pub approved: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_hostaway_shaped_record() {
        let json = r#"{
            "id": 7453,
            "type": "host-to-guest",
            "status": "published",
            "reviewCategory": [
                { "category": "cleanliness", "rating": 10 },
                { "category": "respect_house_rules", "rating": 10 }
            ],
            "submittedAt": "2020-08-21 22:45:14",
            "guestName": "Shane Finkelstein",
            "listingName": "2B N1 A - 29 Shoreditch Heights",
            "publicReview": "Shane and family are wonderful!"
        }"#;
        let raw: RawReview = serde_json::from_str(json).unwrap();
        assert_eq!(raw.id, Some(ReviewId::Int(7453)));
        assert_eq!(raw.categories.len(), 2);
        assert_eq!(raw.categories[0].category.as_deref(), Some("cleanliness"));
        assert_eq!(raw.rating, None);
        assert_eq!(raw.channel, None);
        assert_eq!(raw.approved, None);
    }

    #[test]
    fn missing_fields_default_to_none() {
        let raw: RawReview = serde_json::from_str(r#"{ "id": "x1" }"#).unwrap();
        assert_eq!(raw.id, Some(ReviewId::Str("x1".into())));
        assert!(raw.categories.is_empty());
        assert_eq!(raw.guest_name, None);
    }

    #[test]
    fn explicit_false_approval_is_preserved() {
        let raw: RawReview =
            serde_json::from_str(r#"{ "id": 1, "approved": false }"#).unwrap();
        assert_eq!(raw.approved, Some(false));
    }
}
