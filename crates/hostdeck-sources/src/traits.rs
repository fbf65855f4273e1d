use async_trait::async_trait;
use hostdeck_models::RawReview;

use crate::error::SourceError;

/// A provider of raw review records. Implementations fetch from a remote
/// booking-channel API or from locally held data; either way the records
/// come back unvalidated and are normalized downstream.
#[async_trait]
pub trait ReviewSource: Send + Sync {
    fn source_name(&self) -> &str;

    async fn fetch_reviews(&self) -> Result<Vec<RawReview>, SourceError>;
}
