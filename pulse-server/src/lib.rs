// Library exports for pulse-server
// This allows integration tests to drive the router without a live socket

pub mod analytics;
pub mod api;
pub mod app;
pub mod config;
pub mod generator;
pub mod state;
pub mod store;
