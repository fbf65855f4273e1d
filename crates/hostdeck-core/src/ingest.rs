use futures::future::join_all;
use hostdeck_models::RawReview;
use hostdeck_sources::ReviewSource;
use std::time::{Duration, Instant};
use tracing::{info, warn};

use crate::normalize::normalize_batch;
use crate::store::ReviewStore;

/// Merges remote channel records with the local seed set and writes the
/// normalized result into the store. Remote failures are tolerated:
/// ingestion always proceeds with whatever sources did answer.
pub struct IngestCoordinator {
    remotes: Vec<Box<dyn ReviewSource>>,
    seed: Box<dyn ReviewSource>,
}

#[derive(Debug, Default)]
pub struct IngestReport {
    pub ingested: usize,
    pub skipped: usize,
    pub errors: Vec<String>,
    pub duration: Duration,
}

impl IngestCoordinator {
    pub fn new(remotes: Vec<Box<dyn ReviewSource>>, seed: Box<dyn ReviewSource>) -> Self {
        Self { remotes, seed }
    }

    /// Fetch, merge, normalize, upsert. Remote records are listed ahead
    /// of seed records in the merged batch; a failing or empty remote
    /// degrades to "no remote reviews available". An empty final store is
    /// a valid outcome.
    pub async fn ingest(&self, store: &mut ReviewStore) -> IngestReport {
        let start = Instant::now();
        let mut errors = Vec::new();
        let mut merged: Vec<RawReview> = Vec::new();

        let fetches = self.remotes.iter().map(|source| async move {
            (source.source_name().to_string(), source.fetch_reviews().await)
        });
        for (name, result) in join_all(fetches).await {
            match result {
                Ok(records) => {
                    info!("Fetched {} raw reviews from {}", records.len(), name);
                    merged.extend(records);
                }
                Err(e) => {
                    warn!(
                        operation = "ingest",
                        source = %name,
                        error = %e,
                        "Remote source unavailable, continuing without it"
                    );
                    errors.push(format!("Failed to fetch {} reviews: {}", name, e));
                }
            }
        }

        match self.seed.fetch_reviews().await {
            Ok(records) => merged.extend(records),
            Err(e) => {
                warn!(operation = "ingest", error = %e, "Seed source unavailable");
                errors.push(format!("Failed to load seed reviews: {}", e));
            }
        }

        let (reviews, skipped) = normalize_batch(merged);
        let ingested = reviews.len();
        store.upsert_all(reviews);

        let duration = start.elapsed();
        info!(
            operation = "ingest_complete",
            ingested = ingested,
            skipped = skipped,
            store_size = store.len(),
            duration_ms = duration.as_millis() as u64,
            "Ingestion completed"
        );
        IngestReport {
            ingested,
            skipped,
            errors,
            duration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use hostdeck_models::{RawReview, ReviewId};
    use hostdeck_sources::{SeedSource, SourceError};

    struct StaticSource {
        name: &'static str,
        records: Vec<RawReview>,
    }

    #[async_trait]
    impl ReviewSource for StaticSource {
        fn source_name(&self) -> &str {
            self.name
        }

        async fn fetch_reviews(&self) -> Result<Vec<RawReview>, SourceError> {
            Ok(self.records.clone())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl ReviewSource for FailingSource {
        fn source_name(&self) -> &str {
            "hostaway"
        }

        async fn fetch_reviews(&self) -> Result<Vec<RawReview>, SourceError> {
            Err(SourceError::Status {
                source_name: "hostaway".to_string(),
                status: 503,
            })
        }
    }

    fn raw(id: i64) -> RawReview {
        RawReview {
            id: Some(ReviewId::Int(id)),
            ..RawReview::default()
        }
    }

    #[tokio::test]
    async fn failing_remote_degrades_to_seed_only() {
        let coordinator = IngestCoordinator::new(
            vec![Box::new(FailingSource)],
            Box::new(SeedSource::builtin()),
        );
        let mut store = ReviewStore::new();
        let report = coordinator.ingest(&mut store).await;
        assert_eq!(store.len(), 5);
        assert_eq!(report.ingested, 5);
        assert_eq!(report.errors.len(), 1);
    }

    #[tokio::test]
    async fn remote_records_precede_seed_records() {
        let remote = StaticSource {
            name: "hostaway",
            records: vec![raw(9001), raw(9002)],
        };
        let seed = StaticSource {
            name: "seed",
            records: vec![raw(1)],
        };
        let coordinator = IngestCoordinator::new(vec![Box::new(remote)], Box::new(seed));
        let mut store = ReviewStore::new();
        coordinator.ingest(&mut store).await;
        let ids: Vec<&ReviewId> = store.all().iter().map(|r| &r.id).collect();
        assert_eq!(
            ids,
            vec![&ReviewId::Int(9001), &ReviewId::Int(9002), &ReviewId::Int(1)]
        );
    }

    #[tokio::test]
    async fn both_sources_empty_leaves_store_empty() {
        let coordinator = IngestCoordinator::new(
            vec![Box::new(StaticSource { name: "hostaway", records: vec![] })],
            Box::new(StaticSource { name: "seed", records: vec![] }),
        );
        let mut store = ReviewStore::new();
        let report = coordinator.ingest(&mut store).await;
        assert!(store.is_empty());
        assert!(report.errors.is_empty());
        assert_eq!(report.ingested, 0);
    }

    #[tokio::test]
    async fn unnormalizable_records_are_counted_not_fatal() {
        let remote = StaticSource {
            name: "hostaway",
            records: vec![raw(1), RawReview::default()],
        };
        let coordinator = IngestCoordinator::new(
            vec![Box::new(remote)],
            Box::new(StaticSource { name: "seed", records: vec![] }),
        );
        let mut store = ReviewStore::new();
        let report = coordinator.ingest(&mut store).await;
        assert_eq!(store.len(), 1);
        assert_eq!(report.skipped, 1);
    }
}
