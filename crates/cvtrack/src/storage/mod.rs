//! Storage backend implementations.
//!
//! Concrete implementations of `cvtrack_core::storage::ResumeRepository`.
//! The DynamoDB backend is selected via the `dynamodb` feature (default);
//! the in-memory backend is always compiled because the handler tests run
//! against it, and it doubles as the fallback when `dynamodb` is disabled.

pub mod inmemory;

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

#[cfg(feature = "dynamodb")]
pub use dynamodb::DynamoDbRepository;

#[allow(unused_imports)]
pub use inmemory::InMemoryRepository;
