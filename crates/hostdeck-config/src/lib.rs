pub mod config;
pub mod paths;

pub use config::{Config, HostawayConfig, SeedOptions};
pub use paths::PathManager;
