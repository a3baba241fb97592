use thiserror::Error;

#[derive(Error, Debug)]
pub enum GraphqlError {
    #[error("failed to marshal request: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("gh command pipe failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("gh command failed: {status}, stderr: {stderr}")]
    CommandFailed { status: String, stderr: String },
    #[error("failed to unmarshal response: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("graphql request returned errors: {0}")]
    Response(String),
    #[error("graphql response contained no data")]
    MissingData,
}
