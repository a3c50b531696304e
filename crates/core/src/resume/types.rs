use serde::{Deserialize, Serialize};

/// A stored job-application record.
///
/// Records are immutable once created: there is no update or delete
/// operation anywhere in the system. All four fields are required and
/// stored as opaque strings; `date_of_application` carries whatever date
/// representation the caller sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resume {
    pub job_applied: String,
    /// Identifier/reference of the CV that was sent. Kept under its wire
    /// name `CV_used`.
    #[serde(rename = "CV_used")]
    pub cv_used: String,
    /// Indexed for point lookups via the `email_index` secondary index.
    pub email_used: String,
    pub date_of_application: String,
}

impl Resume {
    /// Creates a new resume record from the four required fields.
    pub fn new(
        job_applied: impl Into<String>,
        cv_used: impl Into<String>,
        email_used: impl Into<String>,
        date_of_application: impl Into<String>,
    ) -> Self {
        Self {
            job_applied: job_applied.into(),
            cv_used: cv_used.into(),
            email_used: email_used.into(),
            date_of_application: date_of_application.into(),
        }
    }
}
