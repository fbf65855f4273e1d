use chrono::{DateTime, NaiveDateTime, Utc};
use hostdeck_models::{CategoryRating, RawReview, Review, DEFAULT_CHANNEL};
use thiserror::Error;
use tracing::warn;

use crate::rating::average_of;

/// Reason a raw record was dropped instead of normalized.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NormalizeSkip {
    #[error("raw review record has no id")]
    MissingId,
}

/// Convert a raw record into the canonical shape, filling every missing
/// field with its default. Only a record without an id is rejected,
/// since it could never be addressed in the store afterwards.
///
/// `average_rating` is always recomputed from the category list. The
/// overall `rating` is taken from the record when present (an explicit 0
/// stays 0) and falls back to the computed average otherwise. `approved`
/// defaults to false only on true absence; an explicit false is kept.
pub fn normalize(raw: RawReview) -> Result<Review, NormalizeSkip> {
    let id = raw.id.ok_or(NormalizeSkip::MissingId)?;
    let categories: Vec<CategoryRating> = raw
        .categories
        .into_iter()
        .map(|c| CategoryRating {
            category: c.category.unwrap_or_default(),
            rating: c.rating,
        })
        .collect();
    let average_rating = average_of(&categories);
    let channel = match raw.channel {
        Some(channel) if !channel.is_empty() => channel,
        _ => DEFAULT_CHANNEL.to_string(),
    };
    Ok(Review {
        id,
        review_type: raw.review_type.unwrap_or_default(),
        status: raw.status.unwrap_or_default(),
        rating: raw.rating.unwrap_or(average_rating),
        public_review: raw.public_review.unwrap_or_default(),
        categories,
        submitted_at: raw.submitted_at.as_deref().and_then(parse_submitted_at),
        guest_name: raw.guest_name.unwrap_or_default(),
        listing_name: raw.listing_name.unwrap_or_default(),
        channel,
        approved: raw.approved.unwrap_or(false),
        average_rating,
    })
}

/// Normalize a merged batch, dropping unnormalizable records. Returns the
/// canonical reviews and the number of dropped records.
pub fn normalize_batch(raws: Vec<RawReview>) -> (Vec<Review>, usize) {
    let total = raws.len();
    let reviews: Vec<Review> = raws.into_iter().filter_map(|raw| normalize(raw).ok()).collect();
    let skipped = total - reviews.len();
    if skipped > 0 {
        warn!("Dropped {} of {} raw review records during normalization", skipped, total);
    }
    (reviews, skipped)
}

/// Timestamps arrive either as RFC 3339 or in the upstream
/// `YYYY-MM-DD HH:MM:SS` shape (assumed UTC).
pub fn parse_submitted_at(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .ok()
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hostdeck_models::{RawCategory, ReviewId};

    fn raw_with_categories(ratings: &[f64]) -> RawReview {
        RawReview {
            id: Some(ReviewId::Int(1)),
            categories: ratings
                .iter()
                .enumerate()
                .map(|(i, r)| RawCategory {
                    category: Some(format!("c{}", i)),
                    rating: Some(*r),
                })
                .collect(),
            ..RawReview::default()
        }
    }

    #[test]
    fn fills_defaults_for_missing_fields() {
        let review = normalize(RawReview {
            id: Some(ReviewId::Int(1)),
            ..RawReview::default()
        })
        .unwrap();
        assert_eq!(review.channel, DEFAULT_CHANNEL);
        assert!(!review.approved);
        assert!(review.categories.is_empty());
        assert_eq!(review.rating, 0.0);
        assert_eq!(review.average_rating, 0.0);
        assert_eq!(review.submitted_at, None);
    }

    #[test]
    fn empty_channel_string_falls_back_to_default() {
        let review = normalize(RawReview {
            id: Some(ReviewId::Int(1)),
            channel: Some(String::new()),
            ..RawReview::default()
        })
        .unwrap();
        assert_eq!(review.channel, DEFAULT_CHANNEL);
    }

    #[test]
    fn explicit_false_approval_stays_false_and_true_stays_true() {
        let denied = normalize(RawReview {
            id: Some(ReviewId::Int(1)),
            approved: Some(false),
            ..RawReview::default()
        })
        .unwrap();
        let granted = normalize(RawReview {
            id: Some(ReviewId::Int(2)),
            approved: Some(true),
            ..RawReview::default()
        })
        .unwrap();
        assert!(!denied.approved);
        assert!(granted.approved);
    }

    #[test]
    fn missing_rating_is_filled_from_category_average() {
        let review = normalize(raw_with_categories(&[5.0, 4.0])).unwrap();
        assert_eq!(review.rating, 4.5);
        assert_eq!(review.rating, review.average_rating);
    }

    #[test]
    fn supplied_rating_wins_but_average_is_still_recomputed() {
        let mut raw = raw_with_categories(&[3.0]);
        raw.rating = Some(5.0);
        let review = normalize(raw).unwrap();
        assert_eq!(review.rating, 5.0);
        assert_eq!(review.average_rating, 3.0);
    }

    #[test]
    fn category_average_worked_examples() {
        assert_eq!(normalize(raw_with_categories(&[5.0, 4.0])).unwrap().average_rating, 4.5);
        assert_eq!(normalize(raw_with_categories(&[3.0])).unwrap().average_rating, 3.0);
        assert_eq!(normalize(raw_with_categories(&[])).unwrap().average_rating, 0.0);
    }

    #[test]
    fn normalizing_canonical_output_is_idempotent() {
        let mut raw = raw_with_categories(&[5.0, 4.0]);
        raw.review_type = Some("guest-to-host".into());
        raw.status = Some("published".into());
        raw.public_review = Some("Lovely".into());
        raw.submitted_at = Some("2024-01-15 14:30:22".into());
        raw.guest_name = Some("Emma".into());
        raw.listing_name = Some("Studio E1".into());
        raw.channel = Some("Airbnb".into());
        raw.approved = Some(true);
        let first = normalize(raw).unwrap();

        let round_tripped: RawReview =
            serde_json::from_value(serde_json::to_value(&first).unwrap()).unwrap();
        let second = normalize(round_tripped).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn parses_both_timestamp_shapes() {
        let upstream = parse_submitted_at("2024-01-15 14:30:22").unwrap();
        let rfc = parse_submitted_at("2024-01-15T14:30:22Z").unwrap();
        assert_eq!(upstream, rfc);
        assert_eq!(parse_submitted_at("not a date"), None);
    }

    #[test]
    fn batch_drops_records_without_id() {
        let raws = vec![
            raw_with_categories(&[5.0]),
            RawReview::default(), // no id
        ];
        let (reviews, skipped) = normalize_batch(raws);
        assert_eq!(reviews.len(), 1);
        assert_eq!(skipped, 1);
    }
}
