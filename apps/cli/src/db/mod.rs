//! Local SQLite database backing the per-device snapshot slot.

pub mod error;
pub mod repository;
pub mod schema;

pub use error::DbError;
pub use repository::SqliteRepository;
