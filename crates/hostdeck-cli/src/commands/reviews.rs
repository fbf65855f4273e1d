use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use hostdeck_core::normalize::parse_submitted_at;
use hostdeck_core::ReviewFilter;
use tracing::debug;

use crate::output::Output;

#[allow(clippy::too_many_arguments)]
pub async fn run_reviews(
    listing: Option<String>,
    min_rating: Option<f64>,
    category: Option<String>,
    channel: Option<String>,
    since: Option<String>,
    approved_only: bool,
    search: Option<String>,
    output: &Output,
) -> color_eyre::Result<()> {
    let config = super::load_config()?;
    let mut service = super::build_service(&config)?;

    let report = service.refresh().await;
    super::report_ingest_errors(&report, output);
    debug!(
        ingested = report.ingested,
        skipped = report.skipped,
        "Ingestion finished"
    );

    let mut filter = ReviewFilter::new();
    if let Some(listing) = listing {
        filter = filter.with_listing_name(listing);
    }
    if let Some(min_rating) = min_rating {
        filter = filter.with_rating_min(min_rating);
    }
    if let Some(category) = category {
        filter = filter.with_category(category);
    }
    if let Some(channel) = channel {
        filter = filter.with_channel(channel);
    }
    if let Some(since) = since {
        filter = filter.with_submitted_after(parse_since(&since)?);
    }
    if approved_only {
        filter = filter.approved_only();
    }
    if let Some(search) = search {
        filter = filter.with_search(search);
    }

    let response = service.filtered(&filter);
    super::print_review_list(&response, output)
}

/// Accepts a bare date (midnight UTC) or anything the ingestion
/// timestamp parser accepts.
fn parse_since(value: &str) -> color_eyre::Result<DateTime<Utc>> {
    if let Some(ts) = parse_submitted_at(value) {
        return Ok(ts);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
        .map_err(|e| color_eyre::eyre::eyre!("Invalid date '{}': {}", value, e))
}
