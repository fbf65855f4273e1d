pub mod analytics;
pub mod filter;
pub mod ingest;
pub mod normalize;
pub mod rating;
pub mod service;
pub mod store;

pub use analytics::summarize;
pub use filter::{filter_reviews, ReviewFilter};
pub use ingest::{IngestCoordinator, IngestReport};
pub use normalize::{normalize, normalize_batch, NormalizeSkip};
pub use rating::average_of;
pub use service::ReviewService;
pub use store::{ReviewStore, StoreError};
