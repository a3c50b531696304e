//! In-memory storage backend for testing and local runs.
//!
//! Dead code is expected when the `dynamodb` backend is active; the
//! handler tests still exercise this module.

#![allow(dead_code)]

mod repository;

pub use repository::InMemoryRepository;
