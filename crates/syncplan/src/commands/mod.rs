pub mod config;
pub mod plan;

pub use config::Config;
pub use plan::Plan;
