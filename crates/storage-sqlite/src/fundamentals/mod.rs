//! SQLite storage implementation for fundamentals.

mod model;
mod repository;
pub mod table;

pub use model::FundamentalRowDB;
pub use repository::FundamentalRepository;
