use serde::{Deserialize, Serialize};

use crate::review::{Review, ReviewId};

/// Envelope returned by the review-listing operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewListResponse {
    pub status: String,
    pub count: usize,
    pub reviews: Vec<Review>,
}

impl ReviewListResponse {
    pub fn success(reviews: Vec<Review>) -> Self {
        Self {
            status: "success".to_string(),
            count: reviews.len(),
            reviews,
        }
    }
}

/// Envelope returned by the approval operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApprovalResponse {
    pub status: String,
    pub message: String,
}

impl ApprovalResponse {
    pub fn changed(approved: bool) -> Self {
        let verb = if approved { "approved" } else { "unapproved" };
        Self {
            status: "success".to_string(),
            message: format!("Review {} successfully", verb),
        }
    }

    pub fn not_found(id: &ReviewId) -> Self {
        Self {
            status: "error".to_string(),
            message: format!("Review {} not found", id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approval_messages_match_outcome() {
        assert_eq!(
            ApprovalResponse::changed(true).message,
            "Review approved successfully"
        );
        assert_eq!(
            ApprovalResponse::changed(false).message,
            "Review unapproved successfully"
        );
        let not_found = ApprovalResponse::not_found(&ReviewId::Int(9));
        assert_eq!(not_found.status, "error");
    }

    #[test]
    fn empty_list_is_a_valid_success() {
        let resp = ReviewListResponse::success(Vec::new());
        assert_eq!(resp.status, "success");
        assert_eq!(resp.count, 0);
    }
}
