/// Authentication providers
pub mod auth;
pub mod client;
/// Application configuration module
pub mod config;
/// Per-area resource clients
pub mod resources;
