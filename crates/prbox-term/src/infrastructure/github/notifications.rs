use anyhow::bail;
use serde::Deserialize;
use serde_json::json;
use serde_json::Value;

use super::GraphqlClient;
use super::GraphqlError;
use super::GraphqlRequest;
use crate::domain::models::NotificationThread;

#[cfg(test)]
#[path = "notifications_test.rs"]
mod tests;

pub const NOTIFICATIONS_QUERY: &str = r#"
query Notifications($first: Int!) {
  viewer {
    notificationThreads(first: $first, filterBy: {statuses: [UNREAD]}) {
      edges {
        node {
          title
          url
          oldestUnreadItemAnchor
        }
      }
    }
  }
}
"#;

/// GitHub caps `first` on connections at 100.
pub const MAX_NOTIFICATION_LIMIT: u32 = 100;

pub fn parse_notification_limit(value: &str) -> anyhow::Result<u32> {
    let Ok(limit) = value.trim().parse::<u32>() else {
        bail!("notification-limit must be an integer, got '{value}'");
    };

    if limit == 0 || limit > MAX_NOTIFICATION_LIMIT {
        bail!("notification-limit must be between 1 and {MAX_NOTIFICATION_LIMIT}, got {limit}");
    }

    return Ok(limit);
}

#[derive(Debug, Deserialize)]
struct GraphqlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphqlErrorMessage>,
}

#[derive(Debug, Deserialize)]
struct GraphqlErrorMessage {
    message: String,
}

#[derive(Debug, Deserialize)]
struct NotificationsData {
    viewer: Viewer,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Viewer {
    notification_threads: NotificationThreadConnection,
}

#[derive(Debug, Deserialize)]
struct NotificationThreadConnection {
    #[serde(default)]
    edges: Vec<NotificationThreadEdge>,
}

#[derive(Debug, Deserialize)]
struct NotificationThreadEdge {
    // Threads the viewer lost access to come back as null nodes.
    node: Option<NotificationThreadNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NotificationThreadNode {
    title: String,
    url: String,
    oldest_unread_item_anchor: Option<String>,
}

pub fn notifications_request(limit: u32) -> GraphqlRequest {
    return GraphqlRequest {
        query: NOTIFICATIONS_QUERY.trim().to_string(),
        variables: Some(json!({ "first": limit })),
    };
}

/// Extracts the threads from a raw response envelope, keeping server order.
pub fn parse_notifications(response: Value) -> Result<Vec<NotificationThread>, GraphqlError> {
    let envelope: GraphqlResponse<NotificationsData> =
        serde_json::from_value(response).map_err(GraphqlError::Decode)?;

    if !envelope.errors.is_empty() {
        let messages = envelope
            .errors
            .iter()
            .map(|err| err.message.to_string())
            .collect::<Vec<String>>()
            .join("; ");
        return Err(GraphqlError::Response(messages));
    }

    let data = envelope.data.ok_or(GraphqlError::MissingData)?;
    let notifications = data
        .viewer
        .notification_threads
        .edges
        .into_iter()
        .filter_map(|edge| edge.node)
        .map(|node| NotificationThread {
            title: node.title,
            url: node.url,
            oldest_unread_anchor: node.oldest_unread_item_anchor.unwrap_or_default(),
        })
        .collect();

    return Ok(notifications);
}

pub async fn fetch_notifications(
    client: &dyn GraphqlClient,
    limit: u32,
) -> Result<Vec<NotificationThread>, GraphqlError> {
    let response = client.make_request(&notifications_request(limit)).await?;
    return parse_notifications(response);
}
