//! SQLite repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx prepared
//! statements with runtime parameter binding.

pub mod sqlite_user_repository;

pub use sqlite_user_repository::SqliteUserRepository;
