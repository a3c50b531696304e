//! DynamoDB storage backend implementation.
//!
//! Implements `cvtrack_core::storage::ResumeRepository` using
//! `aws-sdk-dynamodb`. Email lookups go through the `email_index`
//! global secondary index.

mod conversions;
mod error;
mod repository;

pub use repository::DynamoDbRepository;
