//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and
//! the resume record. Testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;

use cvtrack_core::resume::Resume;
use cvtrack_core::storage::RepositoryError;

/// Convert a Resume to a DynamoDB item.
///
/// The item carries exactly the four record fields under their wire
/// names; `email_used` is the key of the `email_index` secondary index.
pub fn resume_to_item(resume: &Resume) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();

    item.insert(
        "job_applied".to_string(),
        AttributeValue::S(resume.job_applied.clone()),
    );
    item.insert(
        "CV_used".to_string(),
        AttributeValue::S(resume.cv_used.clone()),
    );
    item.insert(
        "email_used".to_string(),
        AttributeValue::S(resume.email_used.clone()),
    );
    item.insert(
        "date_of_application".to_string(),
        AttributeValue::S(resume.date_of_application.clone()),
    );

    item
}

/// Convert a DynamoDB item to a Resume.
pub fn item_to_resume(item: &HashMap<String, AttributeValue>) -> Result<Resume, RepositoryError> {
    Ok(Resume {
        job_applied: get_string(item, "job_applied")?,
        cv_used: get_string(item, "CV_used")?,
        email_used: get_string(item, "email_used")?,
        date_of_application: get_string(item, "date_of_application")?,
    })
}

/// Get a required string attribute.
fn get_string(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<String, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))
}
