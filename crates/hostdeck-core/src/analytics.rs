use hostdeck_models::{Analytics, Review};

/// Summary statistics over a store snapshot, computed in a single scan.
///
/// The per-property average is maintained with the incremental recurrence
/// `new_avg = (old_avg * (n - 1) + rating) / n` in review scan order. The
/// recurrence is kept as-is (rather than summing then dividing) so the
/// floating-point results are reproducible for a given ordering.
pub fn summarize(reviews: &[Review]) -> Analytics {
    let mut analytics = Analytics::empty();
    analytics.total_reviews = reviews.len() as u64;
    if reviews.is_empty() {
        return analytics;
    }

    let sum: f64 = reviews.iter().map(|r| r.rating).sum();
    analytics.average_rating = sum / reviews.len() as f64;

    for review in reviews {
        if review.approved {
            analytics.approved_reviews += 1;
        } else {
            analytics.pending_reviews += 1;
        }

        // Ratings rounding outside 1..=5 (notably 0) are counted in the
        // total but have no bucket.
        let bucket = review.rating.round();
        if (1.0..=5.0).contains(&bucket) {
            if let Some(count) = analytics.rating_distribution.get_mut(&(bucket as u8)) {
                *count += 1;
            }
        }

        analytics.channel_breakdown.bump(&review.channel);

        let stats = analytics.property_performance.entry_mut(&review.listing_name);
        stats.total_reviews += 1;
        let n = stats.total_reviews as f64;
        stats.average_rating = (stats.average_rating * (n - 1.0) + review.rating) / n;
        if review.approved {
            stats.approved += 1;
        }
    }

    analytics
}
