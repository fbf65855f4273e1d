use hostdeck_models::{Analytics, ApprovalResponse, ReviewId, ReviewListResponse};
use tracing::info;

use crate::analytics::summarize;
use crate::filter::{filter_reviews, ReviewFilter};
use crate::ingest::{IngestCoordinator, IngestReport};
use crate::store::{ReviewStore, StoreError};

/// Facade over the store: runs ingestion, answers the listing and
/// analytics queries, and is the sole writer of the approval flag.
///
/// Analytics are cached until the next mutation; every ingestion and
/// every approval change invalidates the cache, so a read after a write
/// always reflects the current store.
pub struct ReviewService {
    store: ReviewStore,
    coordinator: IngestCoordinator,
    analytics: Option<Analytics>,
}

impl ReviewService {
    pub fn new(coordinator: IngestCoordinator) -> Self {
        Self {
            store: ReviewStore::new(),
            coordinator,
            analytics: None,
        }
    }

    /// Re-run ingestion against all sources. Remote failures are reported
    /// in the returned report, never propagated.
    pub async fn refresh(&mut self) -> IngestReport {
        let report = self.coordinator.ingest(&mut self.store).await;
        self.analytics = None;
        report
    }

    /// Ingest, then return every review in the store.
    pub async fn list_reviews(&mut self) -> ReviewListResponse {
        self.refresh().await;
        ReviewListResponse::success(self.store.all().to_vec())
    }

    /// Current snapshot filtered by the given criteria, order preserved.
    pub fn filtered(&self, filter: &ReviewFilter) -> ReviewListResponse {
        ReviewListResponse::success(filter_reviews(self.store.all(), filter))
    }

    /// Approved reviews for one listing, the public-display view.
    pub fn approved_for_listing(&self, listing_name: &str) -> ReviewListResponse {
        let filter = ReviewFilter::new()
            .with_listing_name(listing_name)
            .approved_only();
        self.filtered(&filter)
    }

    /// Flip a review's approval flag. Unknown ids are rejected with
    /// `StoreError::NotFound`; nothing is created.
    pub fn set_approval(
        &mut self,
        id: &ReviewId,
        approved: bool,
    ) -> Result<ApprovalResponse, StoreError> {
        self.store.set_approval(id, approved)?;
        self.analytics = None;
        info!(operation = "set_approval", id = %id, approved = approved, "Approval updated");
        Ok(ApprovalResponse::changed(approved))
    }

    /// Summary statistics, recomputed lazily after mutations.
    pub fn analytics_overview(&mut self) -> &Analytics {
        let store = &self.store;
        self.analytics.get_or_insert_with(|| summarize(store.all()))
    }

    pub fn store(&self) -> &ReviewStore {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hostdeck_sources::SeedSource;

    fn seeded_service() -> ReviewService {
        ReviewService::new(IngestCoordinator::new(
            Vec::new(),
            Box::new(SeedSource::builtin()),
        ))
    }

    #[tokio::test]
    async fn list_reviews_ingests_then_lists() {
        let mut service = seeded_service();
        let resp = service.list_reviews().await;
        assert_eq!(resp.status, "success");
        assert_eq!(resp.count, 5);
        assert_eq!(resp.reviews.len(), 5);
    }

    #[tokio::test]
    async fn approval_of_unknown_id_is_a_structured_failure() {
        let mut service = seeded_service();
        service.refresh().await;
        let err = service.set_approval(&ReviewId::Int(4242), true).unwrap_err();
        assert_eq!(err, StoreError::NotFound(ReviewId::Int(4242)));
        assert_eq!(service.store().len(), 5);
    }

    #[tokio::test]
    async fn approved_for_listing_combines_listing_and_approval() {
        let mut service = seeded_service();
        service.refresh().await;
        let resp = service.approved_for_listing("Studio E1 - Modern Canary Wharf");
        // Two seed reviews for that listing, one approved.
        assert_eq!(resp.count, 1);
        assert!(resp.reviews[0].approved);
    }

    #[tokio::test]
    async fn analytics_cache_is_invalidated_by_approval_changes() {
        let mut service = seeded_service();
        service.refresh().await;
        let before = service.analytics_overview().approved_reviews;
        service.set_approval(&ReviewId::Int(1002), true).unwrap();
        let after = service.analytics_overview().approved_reviews;
        assert_eq!(after, before + 1);
    }

    #[tokio::test]
    async fn approval_survives_re_ingestion() {
        let mut service = seeded_service();
        service.refresh().await;
        service.set_approval(&ReviewId::Int(1002), true).unwrap();
        let resp = service.list_reviews().await;
        let review = resp
            .reviews
            .iter()
            .find(|r| r.id == ReviewId::Int(1002))
            .unwrap();
        assert!(review.approved);
    }

    #[tokio::test]
    async fn seed_analytics_match_the_dashboard_numbers() {
        let mut service = seeded_service();
        service.refresh().await;
        let analytics = service.analytics_overview();
        assert_eq!(analytics.total_reviews, 5);
        assert_eq!(analytics.average_rating, 4.4);
        assert_eq!(analytics.approved_reviews, 3);
        assert_eq!(analytics.pending_reviews, 2);
        assert_eq!(analytics.rating_distribution[&5], 3);
        assert_eq!(analytics.channel_breakdown.get("Airbnb"), 3);
        let covent = analytics
            .property_performance
            .get("1B SW1 - Premium Covent Garden Apartment")
            .unwrap();
        assert_eq!(covent.total_reviews, 2);
        assert_eq!(covent.average_rating, 4.5);
    }
}
