//! DynamoDB repository implementation.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;

use cvtrack_core::resume::Resume;
use cvtrack_core::storage::{ResumeRepository, Result};

use super::conversions::{item_to_resume, resume_to_item};
use super::error::{map_put_item_error, map_query_error, map_scan_error};

/// Name of the global secondary index on `email_used`.
const EMAIL_INDEX: &str = "email_index";

/// DynamoDB-based repository implementation.
pub struct DynamoDbRepository {
    client: Client,
    table_name: String,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Creates a new repository using the AWS SDK default credential chain.
    pub async fn from_env(table_name: impl Into<String>) -> Self {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        Self::new(Client::new(&config), table_name)
    }
}

#[async_trait]
impl ResumeRepository for DynamoDbRepository {
    async fn scan(&self) -> Result<Vec<Resume>> {
        // First page only; LastEvaluatedKey is not followed.
        let result = self
            .client
            .scan()
            .table_name(&self.table_name)
            .send()
            .await
            .map_err(map_scan_error)?;

        let items = result.items.unwrap_or_default();
        items.iter().map(item_to_resume).collect()
    }

    async fn put(&self, resume: &Resume) -> Result<()> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(resume_to_item(resume)))
            .send()
            .await
            .map_err(map_put_item_error)?;

        Ok(())
    }

    async fn query_by_email(&self, email: &str) -> Result<Vec<Resume>> {
        let result = self
            .client
            .query()
            .table_name(&self.table_name)
            .index_name(EMAIL_INDEX)
            .key_condition_expression("email_used = :email")
            .expression_attribute_values(":email", AttributeValue::S(email.to_string()))
            .send()
            .await
            .map_err(map_query_error)?;

        let items = result.items.unwrap_or_default();
        items.iter().map(item_to_resume).collect()
    }
}
