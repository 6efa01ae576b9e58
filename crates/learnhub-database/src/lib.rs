//! # learnhub-database
//!
//! Credential store abstraction plus its PostgreSQL and in-memory
//! implementations, connection pool management, and migrations.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
pub use repositories::{MemoryUserStore, UserRepository, UserStore};
