pub mod error;
pub mod hostaway;
pub mod seed;
pub mod traits;

pub use error::SourceError;
pub use hostaway::HostawayClient;
pub use seed::SeedSource;
pub use traits::ReviewSource;
