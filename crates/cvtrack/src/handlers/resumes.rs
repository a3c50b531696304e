use cvtrack_core::resume::CreateResume;

use crate::{event::GatewayResponse, state::AppState};

use super::RouteError;

/// List all records (GET /resume/list).
///
/// A full unfiltered scan; only the first page the backend returns.
pub async fn list(state: &AppState) -> Result<GatewayResponse, RouteError> {
    let resumes = state.resumes.scan().await?;
    Ok(GatewayResponse::json(200, &resumes))
}

/// Create a record (POST /resume).
pub async fn create(state: &AppState, body: Option<&str>) -> Result<GatewayResponse, RouteError> {
    let body = body.ok_or(RouteError::MissingBody)?;
    let payload: CreateResume =
        serde_json::from_str(body).map_err(|err| RouteError::BadBody(err.to_string()))?;
    let resume = payload.into_resume().map_err(RouteError::MissingField)?;

    state.resumes.put(&resume).await?;

    tracing::info!(email = %resume.email_used, job = %resume.job_applied, "stored resume");

    Ok(GatewayResponse::json(201, &"Resume added successfully"))
}

/// Fetch a record by email (GET /resume/person?email=...).
///
/// Returns the first match in the backend's result order; when duplicate
/// emails exist, which record that is stays unspecified.
pub async fn fetch_by_email(
    state: &AppState,
    email: &str,
) -> Result<GatewayResponse, RouteError> {
    let matches = state.resumes.query_by_email(email).await?;

    match matches.into_iter().next() {
        Some(resume) => Ok(GatewayResponse::json(200, &resume)),
        None => Err(RouteError::ResumeNotFound),
    }
}
