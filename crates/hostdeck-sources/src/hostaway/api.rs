use hostdeck_models::RawReview;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::SourceError;

/// Hostaway wraps its review list in `{ "status": ..., "result": [...] }`.
#[derive(Debug, Deserialize)]
pub struct HostawayEnvelope {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub result: Option<Value>,
}

/// Extract raw review records from a Hostaway response body.
///
/// `result` must be an array; anything else is a malformed payload. Array
/// elements that are not review-shaped objects are skipped individually
/// rather than failing the batch.
pub fn parse_reviews(source: &str, body: Value) -> Result<Vec<RawReview>, SourceError> {
    let envelope: HostawayEnvelope =
        serde_json::from_value(body).map_err(|e| SourceError::MalformedPayload {
            source_name: source.to_string(),
            reason: e.to_string(),
        })?;

    let items = match envelope.result {
        Some(Value::Array(items)) => items,
        Some(other) => {
            return Err(SourceError::MalformedPayload {
                source_name: source.to_string(),
                reason: format!("expected result array, got {}", value_kind(&other)),
            });
        }
        None => {
            debug!("{} response carried no result field", source);
            return Ok(Vec::new());
        }
    };

    let total = items.len();
    let mut reviews = Vec::with_capacity(total);
    for item in items {
        match serde_json::from_value::<RawReview>(item) {
            Ok(raw) => reviews.push(raw),
            Err(e) => warn!("Skipping malformed {} review record: {}", source, e),
        }
    }
    if reviews.len() < total {
        warn!(
            "Dropped {} of {} {} records as unparseable",
            total - reviews.len(),
            total,
            source
        );
    }
    Ok(reviews)
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

pub async fn get_reviews(
    client: &Client,
    base_url: &str,
    api_key: &str,
    account_id: &str,
) -> Result<Vec<RawReview>, SourceError> {
    let url = format!("{}/reviews", base_url.trim_end_matches('/'));
    let response = client
        .get(&url)
        .bearer_auth(api_key)
        .query(&[("accountId", account_id)])
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(SourceError::Status {
            source_name: "hostaway".to_string(),
            status: status.as_u16(),
        });
    }

    let body: Value = response.json().await?;
    parse_reviews("hostaway", body)
}
