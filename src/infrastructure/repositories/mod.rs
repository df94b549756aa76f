// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_summary;

pub use error::map_sqlx;
pub use postgres_summary::PostgresSummaryStore;
