use serde::Deserialize;

use super::Resume;

/// Request payload for creating a new resume record.
///
/// Every field is optional at the deserialization layer so that presence
/// can be validated explicitly, in a fixed order, with the first missing
/// field reported by name. Unknown fields in the payload are dropped by
/// serde; the stored record contains exactly the four known fields.
#[derive(Debug, Default, Deserialize)]
pub struct CreateResume {
    #[serde(default)]
    pub job_applied: Option<String>,
    #[serde(default, rename = "CV_used")]
    pub cv_used: Option<String>,
    #[serde(default)]
    pub email_used: Option<String>,
    #[serde(default)]
    pub date_of_application: Option<String>,
}

impl CreateResume {
    /// Validates the payload and converts it into a [`Resume`].
    ///
    /// Fields are checked in the fixed order `job_applied`, `CV_used`,
    /// `email_used`, `date_of_application`; the error is the wire name of
    /// the first missing field.
    pub fn into_resume(self) -> Result<Resume, &'static str> {
        let job_applied = self.job_applied.ok_or("job_applied")?;
        let cv_used = self.cv_used.ok_or("CV_used")?;
        let email_used = self.email_used.ok_or("email_used")?;
        let date_of_application = self.date_of_application.ok_or("date_of_application")?;

        Ok(Resume {
            job_applied,
            cv_used,
            email_used,
            date_of_application,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_payload() -> serde_json::Value {
        serde_json::json!({
            "job_applied": "Acme",
            "CV_used": "cv1.pdf",
            "email_used": "a@x.com",
            "date_of_application": "2024-01-01",
        })
    }

    #[test]
    fn test_complete_payload_converts() {
        let payload: CreateResume = serde_json::from_value(full_payload()).unwrap();
        let resume = payload.into_resume().unwrap();
        assert_eq!(
            resume,
            Resume::new("Acme", "cv1.pdf", "a@x.com", "2024-01-01")
        );
    }

    #[test]
    fn test_extra_fields_are_dropped() {
        let mut json = full_payload();
        json["notes"] = serde_json::json!("followed up twice");
        json["salary_expectation"] = serde_json::json!(90000);

        let payload: CreateResume = serde_json::from_value(json).unwrap();
        let resume = payload.into_resume().unwrap();
        assert_eq!(serde_json::to_value(&resume).unwrap(), full_payload());
    }

    #[test]
    fn test_missing_fields_reported_in_fixed_order() {
        for field in ["job_applied", "CV_used", "email_used", "date_of_application"] {
            let mut json = full_payload();
            json.as_object_mut().unwrap().remove(field);

            let payload: CreateResume = serde_json::from_value(json).unwrap();
            assert_eq!(payload.into_resume().unwrap_err(), field);
        }
    }

    #[test]
    fn test_first_missing_field_wins() {
        // Everything missing: job_applied is checked first.
        let payload = CreateResume::default();
        assert_eq!(payload.into_resume().unwrap_err(), "job_applied");
    }
}
