//! In-memory repository implementation.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use cvtrack_core::resume::Resume;
use cvtrack_core::storage::{ResumeRepository, Result};

/// In-memory storage backend.
///
/// Records live in a `Vec` behind `Arc<RwLock<_>>`; there is no key to
/// hash on and insertion order makes "first match" deterministic in
/// tests. Data is lost when the repository is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    resumes: Arc<RwLock<Vec<Resume>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ResumeRepository for InMemoryRepository {
    async fn scan(&self) -> Result<Vec<Resume>> {
        let resumes = self.resumes.read().await;
        Ok(resumes.clone())
    }

    async fn put(&self, resume: &Resume) -> Result<()> {
        let mut resumes = self.resumes.write().await;
        resumes.push(resume.clone());
        Ok(())
    }

    async fn query_by_email(&self, email: &str) -> Result<Vec<Resume>> {
        let resumes = self.resumes.read().await;
        Ok(resumes
            .iter()
            .filter(|r| r.email_used == email)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_put_then_scan() {
        let repo = InMemoryRepository::new();
        let resume = Resume::new("Acme", "cv1.pdf", "a@x.com", "2024-01-01");

        repo.put(&resume).await.unwrap();
        assert_eq!(repo.scan().await.unwrap(), vec![resume]);
    }

    #[tokio::test]
    async fn test_duplicate_emails_are_allowed() {
        let repo = InMemoryRepository::new();
        let first = Resume::new("Acme", "cv1.pdf", "a@x.com", "2024-01-01");
        let second = Resume::new("Globex", "cv2.pdf", "a@x.com", "2024-02-02");

        repo.put(&first).await.unwrap();
        repo.put(&second).await.unwrap();

        let matches = repo.query_by_email("a@x.com").await.unwrap();
        assert_eq!(matches, vec![first, second]);
    }

    #[tokio::test]
    async fn test_query_by_email_is_exact_match() {
        let repo = InMemoryRepository::new();
        repo.put(&Resume::new("Acme", "cv1.pdf", "a@x.com", "2024-01-01"))
            .await
            .unwrap();

        assert!(repo.query_by_email("a@x").await.unwrap().is_empty());
        assert!(repo.query_by_email("A@X.COM").await.unwrap().is_empty());
    }
}
