use serde::{Deserialize, Serialize};

/// One metrics snapshot as reported by the backend's status endpoint.
///
/// Field names mirror the wire payload. All counters are unsigned, so a
/// negative value in the payload fails deserialization and is treated as a
/// malformed body. `queuedTasks` is optional on the wire and defaults to 0;
/// every other field is required.
///
/// There is no cross-field invariant: `activeThreads` may legitimately
/// exceed the configured pool capacity (the server is overloaded) and must
/// render as such.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSnapshot {
    /// Threads currently busy serving requests
    pub active_threads: u64,

    /// Requests processed since server start
    pub total_requests: u64,

    /// Currently connected clients
    pub connected_users: u64,

    /// High-water mark of concurrent connections
    pub peak_connections: u64,

    /// Connections closed since server start
    pub closed_connections: u64,

    /// Tasks waiting for a free thread
    #[serde(default)]
    pub queued_tasks: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_payload() {
        let snapshot: MetricsSnapshot = serde_json::from_str(
            r#"{
                "activeThreads": 10,
                "totalRequests": 1234567,
                "connectedUsers": 42,
                "peakConnections": 80,
                "closedConnections": 900,
                "queuedTasks": 3
            }"#,
        )
        .unwrap();

        assert_eq!(snapshot.active_threads, 10);
        assert_eq!(snapshot.total_requests, 1234567);
        assert_eq!(snapshot.connected_users, 42);
        assert_eq!(snapshot.peak_connections, 80);
        assert_eq!(snapshot.closed_connections, 900);
        assert_eq!(snapshot.queued_tasks, 3);
    }

    #[test]
    fn test_missing_queued_tasks_defaults_to_zero() {
        let snapshot: MetricsSnapshot = serde_json::from_str(
            r#"{
                "activeThreads": 1,
                "totalRequests": 2,
                "connectedUsers": 3,
                "peakConnections": 4,
                "closedConnections": 5
            }"#,
        )
        .unwrap();

        assert_eq!(snapshot.queued_tasks, 0);
    }

    #[test]
    fn test_missing_required_field_is_an_error() {
        let result: Result<MetricsSnapshot, _> =
            serde_json::from_str(r#"{"activeThreads": 1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_negative_counter_is_an_error() {
        let result: Result<MetricsSnapshot, _> = serde_json::from_str(
            r#"{
                "activeThreads": -1,
                "totalRequests": 2,
                "connectedUsers": 3,
                "peakConnections": 4,
                "closedConnections": 5
            }"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_default_is_all_zero() {
        let snapshot = MetricsSnapshot::default();
        assert_eq!(snapshot.active_threads, 0);
        assert_eq!(snapshot.total_requests, 0);
        assert_eq!(snapshot.connected_users, 0);
        assert_eq!(snapshot.peak_connections, 0);
        assert_eq!(snapshot.closed_connections, 0);
        assert_eq!(snapshot.queued_tasks, 0);
    }

    #[test]
    fn test_serialize_uses_wire_names() {
        let json = serde_json::to_value(MetricsSnapshot::default()).unwrap();
        assert!(json.get("activeThreads").is_some());
        assert!(json.get("queuedTasks").is_some());
    }
}
