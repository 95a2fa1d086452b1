use std::collections::HashSet;
use std::path::PathBuf;

use axum::http::StatusCode;
use axum_test::TestServer;
use goji_roadmap::api::create_router;
use goji_roadmap::models::{BulkStatusResponse, RoadmapBranch, SetStatusResponse, StatusMap};
use goji_roadmap::store::StatusStore;
use tempfile::TempDir;

/// The TempDir keeps the backing file alive for the test's duration.
fn setup() -> (TestServer, PathBuf, TempDir) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("roadmap-status.json");
    let store = StatusStore::open(path.clone());
    let app = create_router(store);
    let server = TestServer::new(app).expect("Failed to create test server");
    (server, path, dir)
}

mod get_status {
    use super::*;

    #[tokio::test]
    async fn returns_empty_map_when_no_backing_file_exists() {
        let (server, _, _dir) = setup();

        let response = server.get("/api/roadmap").await;

        response.assert_status_ok();
        let status: StatusMap = response.json();
        assert!(status.is_empty());
    }

    #[tokio::test]
    async fn treats_a_corrupt_backing_file_as_empty() {
        let (server, path, _dir) = setup();
        std::fs::write(&path, "{ not json").expect("Failed to write garbage");

        let response = server.get("/api/roadmap").await;

        response.assert_status_ok();
        let status: StatusMap = response.json();
        assert!(status.is_empty());
    }

    #[tokio::test]
    async fn a_write_after_corruption_recovers_a_valid_file() {
        let (server, path, _dir) = setup();
        std::fs::write(&path, "garbage").expect("Failed to write garbage");

        server
            .post("/api/roadmap")
            .json(&serde_json::json!({ "id": "X9", "completed": true }))
            .await
            .assert_status_ok();

        let status: StatusMap = server.get("/api/roadmap").await.json();
        assert_eq!(status.len(), 1);
        assert_eq!(status.get("X9"), Some(&true));
    }
}

mod set_status {
    use super::*;

    #[tokio::test]
    async fn post_then_get_returns_the_persisted_flag() {
        let (server, _, _dir) = setup();

        let response = server
            .post("/api/roadmap")
            .json(&serde_json::json!({ "id": "X9", "completed": true }))
            .await;

        response.assert_status_ok();
        let body: SetStatusResponse = response.json();
        assert!(body.success);
        assert_eq!(body.id, "X9");
        assert!(body.completed);

        let status: StatusMap = server.get("/api/roadmap").await.json();
        assert_eq!(status.get("X9"), Some(&true));
    }

    #[tokio::test]
    async fn repeating_the_same_post_leaves_the_same_state() {
        let (server, _, _dir) = setup();
        let body = serde_json::json!({ "id": "WEB-04", "completed": true });

        server.post("/api/roadmap").json(&body).await.assert_status_ok();
        server.post("/api/roadmap").json(&body).await.assert_status_ok();

        let status: StatusMap = server.get("/api/roadmap").await.json();
        assert_eq!(status.len(), 1);
        assert_eq!(status.get("WEB-04"), Some(&true));
    }

    #[tokio::test]
    async fn sequential_writes_to_different_ids_both_survive() {
        let (server, _, _dir) = setup();

        server
            .post("/api/roadmap")
            .json(&serde_json::json!({ "id": "A1", "completed": true }))
            .await
            .assert_status_ok();
        server
            .post("/api/roadmap")
            .json(&serde_json::json!({ "id": "A2", "completed": false }))
            .await
            .assert_status_ok();

        let status: StatusMap = server.get("/api/roadmap").await.json();
        assert_eq!(status.get("A1"), Some(&true));
        assert_eq!(status.get("A2"), Some(&false));
    }

    #[tokio::test]
    async fn rejects_an_empty_id_and_leaves_the_store_unchanged() {
        let (server, path, _dir) = setup();

        let response = server
            .post("/api/roadmap")
            .json(&serde_json::json!({ "id": "", "completed": true }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn rejects_a_missing_id() {
        let (server, _, _dir) = setup();

        let response = server
            .post("/api/roadmap")
            .json(&serde_json::json!({ "completed": true }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn rejects_a_non_boolean_completed() {
        let (server, path, _dir) = setup();

        let response = server
            .post("/api/roadmap")
            .json(&serde_json::json!({ "id": "X9", "completed": "yes" }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn rejects_a_non_string_id() {
        let (server, _, _dir) = setup();

        let response = server
            .post("/api/roadmap")
            .json(&serde_json::json!({ "id": 42, "completed": true }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }
}

mod bulk_set_status {
    use super::*;

    #[tokio::test]
    async fn merges_boolean_entries_and_drops_the_rest() {
        let (server, _, _dir) = setup();

        server
            .post("/api/roadmap")
            .json(&serde_json::json!({ "id": "A1", "completed": true }))
            .await
            .assert_status_ok();

        let response = server
            .put("/api/roadmap")
            .json(&serde_json::json!({
                "B2": true,
                "C3": "nope",
                "D4": 1,
                "E5": false
            }))
            .await;

        response.assert_status_ok();
        let body: BulkStatusResponse = response.json();
        assert!(body.success);
        // Previously stored key untouched, non-boolean entries dropped.
        assert_eq!(body.status.get("A1"), Some(&true));
        assert_eq!(body.status.get("B2"), Some(&true));
        assert_eq!(body.status.get("E5"), Some(&false));
        assert!(!body.status.contains_key("C3"));
        assert!(!body.status.contains_key("D4"));
    }

    #[tokio::test]
    async fn response_map_matches_a_subsequent_get() {
        let (server, _, _dir) = setup();

        let body: BulkStatusResponse = server
            .put("/api/roadmap")
            .json(&serde_json::json!({ "A1": true, "A2": false }))
            .await
            .json();

        let status: StatusMap = server.get("/api/roadmap").await.json();
        assert_eq!(body.status, status);
    }

    #[tokio::test]
    async fn rejects_an_array_body() {
        let (server, _, _dir) = setup();

        let response = server
            .put("/api/roadmap")
            .json(&serde_json::json!([{ "A1": true }]))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn rejects_a_primitive_body() {
        let (server, _, _dir) = setup();

        let response = server.put("/api/roadmap").json(&"not an object").await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }
}

mod catalog_endpoint {
    use super::*;

    #[tokio::test]
    async fn returns_the_full_branch_tree() {
        let (server, _, _dir) = setup();

        let response = server.get("/api/roadmap/catalog").await;

        response.assert_status_ok();
        let branches: Vec<RoadmapBranch> = response.json();
        assert!(!branches.is_empty());
        assert!(branches.iter().all(|b| !b.items.is_empty()));
    }

    #[tokio::test]
    async fn item_ids_are_unique_across_branches() {
        let (server, _, _dir) = setup();

        let branches: Vec<RoadmapBranch> = server.get("/api/roadmap/catalog").await.json();

        let mut seen = HashSet::new();
        for branch in &branches {
            for item in &branch.items {
                assert!(seen.insert(item.id.clone()), "duplicate id {}", item.id);
            }
        }
    }
}

mod health {
    use super::*;

    #[tokio::test]
    async fn returns_ok() {
        let (server, _, _dir) = setup();

        let response = server.get("/api/health").await;

        response.assert_status_ok();
    }
}
