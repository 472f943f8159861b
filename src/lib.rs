pub mod config;
pub mod error;
pub mod observability;
pub mod planner;

pub use crate::config::Config;
pub use crate::error::AppError;
pub use crate::planner::Planner;
