use chrono::{DateTime, Utc};
use hostdeck_models::Review;

/// Sentinel meaning "no constraint" for category and channel criteria.
pub const ALL: &str = "all";

/// Conjunctive, independently optional criteria over a store snapshot.
/// Empty strings and the "all" sentinel impose no constraint, matching
/// the query parameters of the dashboard.
#[derive(Debug, Clone, Default)]
pub struct ReviewFilter {
    pub listing_name: Option<String>,
    pub rating_min: Option<f64>,
    pub category: Option<String>,
    pub channel: Option<String>,
    pub submitted_after: Option<DateTime<Utc>>,
    pub approved_only: bool,
    pub search: Option<String>,
}

impl ReviewFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_listing_name(mut self, listing_name: impl Into<String>) -> Self {
        self.listing_name = Some(listing_name.into());
        self
    }

    pub fn with_rating_min(mut self, rating_min: f64) -> Self {
        self.rating_min = Some(rating_min);
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = Some(channel.into());
        self
    }

    pub fn with_submitted_after(mut self, submitted_after: DateTime<Utc>) -> Self {
        self.submitted_after = Some(submitted_after);
        self
    }

    pub fn approved_only(mut self) -> Self {
        self.approved_only = true;
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    fn matches(&self, review: &Review) -> bool {
        if let Some(listing) = non_empty(self.listing_name.as_deref()) {
            if review.listing_name != listing {
                return false;
            }
        }
        if let Some(min) = self.rating_min {
            if review.rating < min {
                return false;
            }
        }
        if let Some(category) = active(self.category.as_deref()) {
            if !review.categories.iter().any(|c| c.category == category) {
                return false;
            }
        }
        if let Some(channel) = active(self.channel.as_deref()) {
            if review.channel != channel {
                return false;
            }
        }
        if let Some(bound) = self.submitted_after {
            // A review without a parsed timestamp cannot prove recency.
            match review.submitted_at {
                Some(ts) if ts >= bound => {}
                _ => return false,
            }
        }
        if self.approved_only && !review.approved {
            return false;
        }
        if let Some(needle) = non_empty(self.search.as_deref()) {
            let needle = needle.to_lowercase();
            let hit = review.listing_name.to_lowercase().contains(&needle)
                || review.guest_name.to_lowercase().contains(&needle)
                || review.public_review.to_lowercase().contains(&needle);
            if !hit {
                return false;
            }
        }
        true
    }
}

fn non_empty(criterion: Option<&str>) -> Option<&str> {
    criterion.filter(|s| !s.is_empty())
}

fn active(criterion: Option<&str>) -> Option<&str> {
    non_empty(criterion).filter(|s| !s.eq_ignore_ascii_case(ALL))
}

/// Order-preserving filter over a snapshot.
pub fn filter_reviews(reviews: &[Review], filter: &ReviewFilter) -> Vec<Review> {
    reviews
        .iter()
        .filter(|review| filter.matches(review))
        .cloned()
        .collect()
}
