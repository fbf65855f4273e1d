use hostdeck_models::{Review, ReviewId};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("review {0} not found")]
    NotFound(ReviewId),
}

/// The unit of truth for canonical reviews: an id-addressable collection
/// that preserves insertion order. Only normalized reviews enter the
/// store, and after insertion the only field that ever changes is the
/// approval flag.
#[derive(Debug, Default)]
pub struct ReviewStore {
    reviews: Vec<Review>,
    index: HashMap<ReviewId, usize>,
}

impl ReviewStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert-or-replace a batch. A replaced review keeps its original
    /// position and its current approval flag: approvals are set by
    /// managers, not by upstream payloads, so a re-ingestion must not
    /// reset them.
    pub fn upsert_all(&mut self, reviews: Vec<Review>) {
        for review in reviews {
            self.upsert(review);
        }
    }

    fn upsert(&mut self, mut review: Review) {
        if let Some(&idx) = self.index.get(&review.id) {
            review.approved = self.reviews[idx].approved;
            self.reviews[idx] = review;
        } else {
            self.index.insert(review.id.clone(), self.reviews.len());
            self.reviews.push(review);
        }
    }

    pub fn get(&self, id: &ReviewId) -> Option<&Review> {
        self.index.get(id).map(|&idx| &self.reviews[idx])
    }

    /// All reviews in insertion order.
    pub fn all(&self) -> &[Review] {
        &self.reviews
    }

    pub fn len(&self) -> usize {
        self.reviews.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }

    /// Flip the approval flag. An unknown id is rejected and the store is
    /// left untouched; no entry is ever created here.
    pub fn set_approval(&mut self, id: &ReviewId, approved: bool) -> Result<(), StoreError> {
        match self.index.get(id) {
            Some(&idx) => {
                self.reviews[idx].approved = approved;
                Ok(())
            }
            None => Err(StoreError::NotFound(id.clone())),
        }
    }
}
