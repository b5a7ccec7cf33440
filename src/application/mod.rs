pub mod client;
/// Service interfaces and traits
pub mod interfaces;
/// Service implementations
pub mod services;
