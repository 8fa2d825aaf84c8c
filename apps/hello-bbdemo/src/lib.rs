pub mod config;
pub mod identity;
pub mod report;

pub use config::BannerConfig;
pub use identity::ProcessIdentity;
pub use report::render;
