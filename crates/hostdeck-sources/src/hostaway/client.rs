use async_trait::async_trait;
use hostdeck_models::RawReview;
use reqwest::Client;
use std::time::Duration;
use tracing::info;

use crate::error::SourceError;
use crate::hostaway::api;
use crate::traits::ReviewSource;

// The hostfully.com host is carried over from the upstream dashboard
// configuration; it is not a typo for "hostaway".
pub const DEFAULT_BASE_URL: &str = "https://api.hostfully.com/v2";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Client for the Hostaway reviews endpoint. The request timeout is
/// bounded so a stalled upstream cannot block ingestion of local data.
#[derive(Clone)]
pub struct HostawayClient {
    client: Client,
    base_url: String,
    api_key: String,
    account_id: String,
}

impl HostawayClient {
    pub fn new(
        account_id: impl Into<String>,
        api_key: impl Into<String>,
        base_url: Option<String>,
        timeout_secs: Option<u64>,
    ) -> Result<Self, SourceError> {
        let timeout = Duration::from_secs(timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS));
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            api_key: api_key.into(),
            account_id: account_id.into(),
        })
    }
}

#[async_trait]
impl ReviewSource for HostawayClient {
    fn source_name(&self) -> &str {
        "hostaway"
    }

    async fn fetch_reviews(&self) -> Result<Vec<RawReview>, SourceError> {
        let reviews = api::get_reviews(
            &self.client,
            &self.base_url,
            &self.api_key,
            &self.account_id,
        )
        .await?;
        info!("Fetched {} reviews from Hostaway", reviews.len());
        Ok(reviews)
    }
}
