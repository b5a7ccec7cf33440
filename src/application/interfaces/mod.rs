/// Interface for read access to the movie catalogue
pub mod catalog;
/// Interface for user accounts and favourite-movie management
pub mod user;
