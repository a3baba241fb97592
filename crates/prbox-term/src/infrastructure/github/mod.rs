mod error;
mod gh_cli;
mod notifications;

pub use error::GraphqlError;
pub use gh_cli::*;
pub use notifications::*;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphqlRequest {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<Value>,
}

/// Transport for GraphQL documents. Returns the raw response envelope.
#[async_trait]
pub trait GraphqlClient: Send + Sync {
    async fn make_request(&self, request: &GraphqlRequest) -> Result<Value, GraphqlError>;
}
