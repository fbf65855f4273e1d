pub mod analytics;
pub mod api;
pub mod raw;
pub mod review;

pub use analytics::{Analytics, ChannelBreakdown, PropertyPerformance, PropertyStats};
pub use api::{ApprovalResponse, ReviewListResponse};
pub use raw::{RawCategory, RawReview};
pub use review::{CategoryRating, Review, ReviewId, DEFAULT_CHANNEL};
