use std::process::Stdio;

use async_trait::async_trait;
use serde_json::Value;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use super::GraphqlClient;
use super::GraphqlError;
use super::GraphqlRequest;

#[cfg(all(test, unix))]
#[path = "gh_cli_test.rs"]
mod tests;

/// Sends GraphQL documents through `gh api graphql --input -`, reusing the
/// credentials the GitHub CLI already holds.
pub struct GhCliClient {
    gh_path: String,
}

impl GhCliClient {
    pub fn new(gh_path: &str) -> GhCliClient {
        return GhCliClient {
            gh_path: gh_path.to_string(),
        };
    }

    /// Resolves the executable on the search path.
    pub fn locate(binary: &str) -> anyhow::Result<String> {
        let path = which::which(binary)?;
        return Ok(path.to_string_lossy().to_string());
    }
}

#[async_trait]
impl GraphqlClient for GhCliClient {
    async fn make_request(&self, request: &GraphqlRequest) -> Result<Value, GraphqlError> {
        let body = serde_json::to_vec(request).map_err(GraphqlError::Encode)?;

        let mut child = Command::new(&self.gh_path)
            .args(["api", "graphql", "--input", "-"])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| GraphqlError::Spawn {
                program: self.gh_path.to_string(),
                source,
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            // gh may exit before reading its input; the exit status says why.
            if let Err(err) = stdin.write_all(&body).await {
                if err.kind() != std::io::ErrorKind::BrokenPipe {
                    return Err(err.into());
                }
            }
        }
        let output = child.wait_with_output().await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            tracing::debug!(status = %output.status, stderr = %stderr, "gh api graphql failed");
            return Err(GraphqlError::CommandFailed {
                status: output.status.to_string(),
                stderr,
            });
        }

        return serde_json::from_slice(&output.stdout).map_err(GraphqlError::Decode);
    }
}
