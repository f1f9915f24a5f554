//! Database module - SQL implementations using SQLx
//!
//! This module provides the database access layer:
//! - Connection pool management
//! - Table creation for SQLite and MySQL
//! - Default data
//! - Repository implementations

pub mod connection;
pub mod schema;
pub mod seed;
pub mod sql;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use connection::{DatabasePool, PoolStatistics};
pub use sql::{SqlMorphemeRepository, SqlUserRepository, SqlWordRepository};
