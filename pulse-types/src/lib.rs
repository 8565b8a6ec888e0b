pub mod models;
pub mod platform;

pub use models::*;
pub use platform::*;
