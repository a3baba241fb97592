use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;

use tempfile::TempDir;

use super::GhCliClient;
use crate::infrastructure::github::GraphqlClient;
use crate::infrastructure::github::GraphqlError;
use crate::infrastructure::github::GraphqlRequest;

fn fake_gh(dir: &TempDir, script: &str) -> PathBuf {
    let path = dir.path().join("gh");
    fs::write(&path, script).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    return path;
}

fn request() -> GraphqlRequest {
    return GraphqlRequest {
        query: "query { viewer { login } }".to_string(),
        variables: None,
    };
}

#[tokio::test]
async fn it_pipes_the_request_and_parses_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("input.json");
    let script = format!(
        "#!/bin/sh\n[ \"$1 $2 $3 $4\" = \"api graphql --input -\" ] || exit 3\ncat > '{}'\nprintf '%s' '{{\"data\":{{\"viewer\":{{\"login\":\"octocat\"}}}}}}'\n",
        input_path.display()
    );
    let gh = fake_gh(&dir, &script);

    let client = GhCliClient::new(gh.to_str().unwrap());
    let response = client.make_request(&request()).await.unwrap();
    assert_eq!(response["data"]["viewer"]["login"], "octocat");

    let sent: serde_json::Value = serde_json::from_str(&fs::read_to_string(input_path).unwrap()).unwrap();
    assert_eq!(
        sent,
        serde_json::json!({ "query": "query { viewer { login } }" })
    );
}

#[tokio::test]
async fn it_reports_stderr_on_non_zero_exit() {
    let dir = tempfile::tempdir().unwrap();
    let gh = fake_gh(
        &dir,
        "#!/bin/sh\ncat > /dev/null\necho 'gh auth login required' >&2\nexit 4\n",
    );

    let client = GhCliClient::new(gh.to_str().unwrap());
    let err = client.make_request(&request()).await.unwrap_err();
    match err {
        GraphqlError::CommandFailed { stderr, .. } => {
            assert_eq!(stderr, "gh auth login required");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn it_rejects_malformed_json() {
    let dir = tempfile::tempdir().unwrap();
    let gh = fake_gh(&dir, "#!/bin/sh\ncat > /dev/null\necho 'not json'\n");

    let client = GhCliClient::new(gh.to_str().unwrap());
    let err = client.make_request(&request()).await.unwrap_err();
    assert!(matches!(err, GraphqlError::Decode(_)));
}

#[tokio::test]
async fn it_fails_to_spawn_a_missing_binary() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("does-not-exist");

    let client = GhCliClient::new(missing.to_str().unwrap());
    let err = client.make_request(&request()).await.unwrap_err();
    assert!(matches!(err, GraphqlError::Spawn { .. }));
}

#[test]
fn it_locates_binaries_on_the_path() {
    assert!(GhCliClient::locate("sh").is_ok());
    assert!(GhCliClient::locate("prbox-definitely-not-installed").is_err());
}
