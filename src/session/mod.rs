/// Session token capability injected into the HTTP transport
pub mod token;

pub use token::{TokenProvider, TokenStore};
