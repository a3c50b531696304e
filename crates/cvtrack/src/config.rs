use std::env;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
///
/// Both variables are required; the process fails to initialize when
/// either is absent.
#[derive(Debug, Clone)]
pub struct Config {
    /// Name of the backing DynamoDB table.
    pub table_name: String,
    /// Declared by the deployment but not read by any handler logic.
    /// Retained as required configuration for forward compatibility.
    #[allow(dead_code)]
    pub s3_bucket_name: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DYNAMODB_TABLE_NAME` - name of the backing table (required)
    /// - `S3_BUCKET_NAME` - bucket name, currently unused (required)
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            table_name: env::var("DYNAMODB_TABLE_NAME")
                .context("DYNAMODB_TABLE_NAME must be set")?,
            s3_bucket_name: env::var("S3_BUCKET_NAME").context("S3_BUCKET_NAME must be set")?,
        })
    }
}
