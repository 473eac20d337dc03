/// State management module
///
/// This module handles everything below the UI layer:
/// - Database connection and row-level queries (store.rs)
/// - Shared data structures (data.rs)
/// - The domain-shaped repository over the store (repository.rs)
/// - Error types for the storage layers (error.rs)

pub mod data;
pub mod error;
pub mod repository;
pub mod store;
