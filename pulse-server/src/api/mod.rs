pub mod actions;
pub mod analytics;
pub mod dashboard;
pub mod error;
pub mod posts;
pub mod stats;

pub use error::{ApiError, ApiResult};
