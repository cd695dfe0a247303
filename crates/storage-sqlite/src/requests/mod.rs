//! SQLite storage implementation for design requests.

mod model;
mod repository;

pub use model::DesignRequestDB;
pub use repository::RequestRepository;
