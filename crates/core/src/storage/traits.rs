use async_trait::async_trait;

use crate::resume::Resume;

use super::Result;

/// Repository for resume record operations.
///
/// The backing store is a schemaless key-value table with one secondary
/// index on `email_used`. There is no update or delete: records are
/// write-once.
#[async_trait]
pub trait ResumeRepository: Send + Sync {
    /// Returns all records from a single unfiltered scan.
    ///
    /// Only the first page of results is returned; a scan that would
    /// require multiple pages in the backing store is not continued.
    async fn scan(&self) -> Result<Vec<Resume>>;

    /// Writes one new record. No existence check, no idempotency key.
    async fn put(&self, resume: &Resume) -> Result<()>;

    /// Returns all records whose `email_used` equals `email`, in the
    /// backend's default result order.
    async fn query_by_email(&self, email: &str) -> Result<Vec<Resume>>;
}
