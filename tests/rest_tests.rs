//! REST integration tests for the roster service.
//!
//! Drives the full router through HTTP round-trips against the in-memory
//! backend: JSON request, handler, store adapter, JSON envelope back.

use axum::http::StatusCode;
use axum_test::TestServer;
use roster::server::{AppState, build_router};
use roster::storage::InMemoryStudentStore;
use serde_json::json;
use std::sync::Arc;

fn make_server() -> TestServer {
    let state = AppState {
        students: Arc::new(InMemoryStudentStore::new()),
    };
    TestServer::new(build_router(state))
}

async fn create_asha(server: &TestServer) -> serde_json::Value {
    let response = server
        .post("/student")
        .json(&json!({
            "name": "Asha",
            "age": 20,
            "class": "CS101"
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    response.json()
}

// ==============================================================
// Create
// ==============================================================

#[tokio::test]
async fn test_create_returns_envelope_with_assigned_id() {
    let server = make_server();

    let body = create_asha(&server).await;

    assert_eq!(body["message"], "Student has been created successfully");
    assert_eq!(body["newStudent"]["name"], "Asha");
    assert_eq!(body["newStudent"]["age"], 20);
    assert_eq!(body["newStudent"]["class"], "CS101");

    // id should be a freshly assigned UUID
    let id = body["newStudent"]["id"].as_str().unwrap();
    uuid::Uuid::parse_str(id).unwrap();
}

#[tokio::test]
async fn test_create_assigns_unique_ids() {
    let server = make_server();

    let first = create_asha(&server).await;
    let second = create_asha(&server).await;

    assert_ne!(first["newStudent"]["id"], second["newStudent"]["id"]);
}

#[tokio::test]
async fn test_create_with_missing_field_is_bad_request() {
    let server = make_server();

    let response = server
        .post("/student")
        .json(&json!({
            "name": "Asha",
            "age": 20
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json();
    assert_eq!(body["statusCode"], 400);
    assert_eq!(body["error"], "Bad Request");
    assert!(body["message"].as_str().unwrap().contains("class"));
}

// ==============================================================
// Get
// ==============================================================

#[tokio::test]
async fn test_get_round_trips_created_record() {
    let server = make_server();

    let created = create_asha(&server).await;
    let id = created["newStudent"]["id"].as_str().unwrap();

    let response = server.get(&format!("/student/{}", id)).await;
    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Student found successfully");
    assert_eq!(body["existingStudent"], created["newStudent"]);
}

#[tokio::test]
async fn test_get_unknown_id_is_not_found() {
    let server = make_server();

    let response = server.get("/student/no-such-id").await;
    response.assert_status(StatusCode::NOT_FOUND);

    let body: serde_json::Value = response.json();
    assert_eq!(body["statusCode"], 404);
    assert_eq!(body["error"], "Not Found");
    assert_eq!(body["message"], "Student #no-such-id not found");
}

// ==============================================================
// List
// ==============================================================

#[tokio::test]
async fn test_list_empty_collection_is_not_found() {
    let server = make_server();

    let response = server.get("/student").await;
    response.assert_status(StatusCode::NOT_FOUND);

    let body: serde_json::Value = response.json();
    assert_eq!(body["statusCode"], 404);
    assert_eq!(body["message"], "Students data not found!");
}

#[tokio::test]
async fn test_list_returns_all_records() {
    let server = make_server();

    for (name, class) in [("Asha", "CS101"), ("Bo", "MA201"), ("Chen", "PH150")] {
        let response = server
            .post("/student")
            .json(&json!({ "name": name, "age": 20, "class": class }))
            .await;
        response.assert_status(StatusCode::CREATED);
    }

    let response = server.get("/student").await;
    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "All students data found successfully");
    assert_eq!(body["studentData"].as_array().unwrap().len(), 3);
}

// ==============================================================
// Update
// ==============================================================

#[tokio::test]
async fn test_update_patches_only_present_fields() {
    let server = make_server();

    let created = create_asha(&server).await;
    let id = created["newStudent"]["id"].as_str().unwrap();

    let response = server
        .put(&format!("/student/{}", id))
        .json(&json!({ "age": 21 }))
        .await;
    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Student has been successfully updated");
    assert_eq!(body["existingStudent"]["age"], 21);
    assert_eq!(body["existingStudent"]["name"], "Asha");
    assert_eq!(body["existingStudent"]["class"], "CS101");
    assert_eq!(body["existingStudent"]["id"], id);

    // A subsequent read reflects exactly the updated fields
    let fetched: serde_json::Value = server.get(&format!("/student/{}", id)).await.json();
    assert_eq!(fetched["existingStudent"], body["existingStudent"]);
}

#[tokio::test]
async fn test_update_unknown_id_is_not_found() {
    let server = make_server();

    let response = server
        .put("/student/no-such-id")
        .json(&json!({ "age": 21 }))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);

    let body: serde_json::Value = response.json();
    assert_eq!(body["statusCode"], 404);
    assert_eq!(body["message"], "Student #no-such-id not found");
}

// ==============================================================
// Delete
// ==============================================================

#[tokio::test]
async fn test_delete_returns_record_and_removes_it() {
    let server = make_server();

    let created = create_asha(&server).await;
    let id = created["newStudent"]["id"].as_str().unwrap();

    let response = server.delete(&format!("/student/{}", id)).await;
    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Student deleted successfully");
    assert_eq!(body["deleteStudent"], created["newStudent"]);

    let response = server.get(&format!("/student/{}", id)).await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_unknown_id_is_not_found() {
    let server = make_server();

    let response = server.delete("/student/no-such-id").await;
    response.assert_status(StatusCode::NOT_FOUND);

    let body: serde_json::Value = response.json();
    assert_eq!(body["statusCode"], 404);
    assert_eq!(body["error"], "Not Found");
}

// ==============================================================
// Full lifecycle
// ==============================================================

#[tokio::test]
async fn test_create_get_delete_lifecycle() {
    let server = make_server();

    // create -> 201 with assigned id
    let created = create_asha(&server).await;
    let id = created["newStudent"]["id"].as_str().unwrap().to_string();

    // get -> 200 with matching fields
    let response = server.get(&format!("/student/{}", id)).await;
    response.assert_status(StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["existingStudent"]["name"], "Asha");
    assert_eq!(body["existingStudent"]["age"], 20);
    assert_eq!(body["existingStudent"]["class"], "CS101");

    // delete -> 200
    let response = server.delete(&format!("/student/{}", id)).await;
    response.assert_status(StatusCode::OK);

    // get -> 404
    let response = server.get(&format!("/student/{}", id)).await;
    response.assert_status(StatusCode::NOT_FOUND);
}

// ==============================================================
// Health
// ==============================================================

#[tokio::test]
async fn test_health_check_reports_ok() {
    let server = make_server();

    let response = server.get("/health").await;
    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "roster");
}
