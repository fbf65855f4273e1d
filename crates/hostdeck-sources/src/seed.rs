use async_trait::async_trait;
use hostdeck_models::{RawCategory, RawReview, ReviewId};
use std::path::Path;
use tracing::info;

use crate::error::SourceError;
use crate::traits::ReviewSource;

/// Locally held review records, used to supplement the sandboxed channel
/// API. Holds either the built-in seed set or records loaded from a JSON
/// file (an array of raw review records).
#[derive(Debug, Clone)]
pub struct SeedSource {
    records: Vec<RawReview>,
}

impl SeedSource {
    pub fn new(records: Vec<RawReview>) -> Self {
        Self { records }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let records: Vec<RawReview> = serde_json::from_str(&content)?;
        info!(
            "Loaded {} seed reviews from {}",
            records.len(),
            path.as_ref().display()
        );
        Ok(Self { records })
    }

    /// The built-in seed set: five published guest-to-host reviews across
    /// three London listings.
    pub fn builtin() -> Self {
        Self {
            records: builtin_seed(),
        }
    }

    pub fn records(&self) -> &[RawReview] {
        &self.records
    }
}

#[async_trait]
impl ReviewSource for SeedSource {
    fn source_name(&self) -> &str {
        "seed"
    }

    async fn fetch_reviews(&self) -> Result<Vec<RawReview>, SourceError> {
        Ok(self.records.clone())
    }
}

#[allow(clippy::too_many_arguments)]
fn seed_review(
    id: i64,
    rating: f64,
    public_review: &str,
    categories: &[(&str, f64)],
    submitted_at: &str,
    guest_name: &str,
    listing_name: &str,
    channel: &str,
    approved: bool,
) -> RawReview {
    RawReview {
        id: Some(ReviewId::Int(id)),
        review_type: Some("guest-to-host".to_string()),
        status: Some("published".to_string()),
        rating: Some(rating),
        public_review: Some(public_review.to_string()),
        categories: categories
            .iter()
            .map(|(category, score)| RawCategory {
                category: Some(category.to_string()),
                rating: Some(*score),
            })
            .collect(),
        submitted_at: Some(submitted_at.to_string()),
        guest_name: Some(guest_name.to_string()),
        listing_name: Some(listing_name.to_string()),
        channel: Some(channel.to_string()),
        approved: Some(approved),
    }
}

fn builtin_seed() -> Vec<RawReview> {
    vec![
        seed_review(
            1001,
            5.0,
            "Amazing property! The location was perfect and the amenities were top-notch. \
             Shane was very responsive and helpful throughout our stay.",
            &[
                ("cleanliness", 5.0),
                ("communication", 5.0),
                ("location", 5.0),
                ("value", 4.0),
            ],
            "2024-01-15 14:30:22",
            "Emma Johnson",
            "1B SW1 - Premium Covent Garden Apartment",
            "Airbnb",
            true,
        ),
        seed_review(
            1002,
            4.0,
            "Great stay overall. The apartment was clean and well-equipped. \
             Only minor issue was the heating took a while to warm up.",
            &[
                ("cleanliness", 5.0),
                ("communication", 4.0),
                ("location", 4.0),
                ("value", 4.0),
            ],
            "2024-01-18 09:15:33",
            "Michael Chen",
            "1B SW1 - Premium Covent Garden Apartment",
            "Booking.com",
            false,
        ),
        seed_review(
            1003,
            5.0,
            "Exceptional experience! The Shoreditch location was perfect for exploring London. \
             The apartment exceeded our expectations.",
            &[
                ("cleanliness", 5.0),
                ("communication", 5.0),
                ("location", 5.0),
                ("value", 5.0),
            ],
            "2024-01-20 16:45:12",
            "Sarah Williams",
            "2B N1 A - 29 Shoreditch Heights",
            "Airbnb",
            true,
        ),
        seed_review(
            1004,
            3.0,
            "Decent apartment but had some issues with WiFi connectivity. \
             Location was good though.",
            &[
                ("cleanliness", 4.0),
                ("communication", 3.0),
                ("location", 4.0),
                ("value", 3.0),
            ],
            "2024-01-22 11:20:45",
            "David Rodriguez",
            "Studio E1 - Modern Canary Wharf",
            "Expedia",
            false,
        ),
        seed_review(
            1005,
            5.0,
            "Perfect for our business trip! Everything was spotless and the location \
             couldn't be better for accessing the financial district.",
            &[
                ("cleanliness", 5.0),
                ("communication", 5.0),
                ("location", 5.0),
                ("value", 4.0),
            ],
            "2024-01-25 13:55:18",
            "Lisa Thompson",
            "Studio E1 - Modern Canary Wharf",
            "Airbnb",
            true,
        ),
    ]
}
