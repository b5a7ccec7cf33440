/// Module containing the catalogue service for movie, director and genre lookups
pub mod catalog_service;
/// Module containing the user service for accounts and favourites
pub mod user_service;

pub use crate::application::interfaces::catalog::CatalogService;
pub use crate::application::interfaces::user::UserService;
pub use catalog_service::*;
pub use user_service::*;
