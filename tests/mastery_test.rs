//! Integration tests for the mastery proxy.
//!
//! Each test spawns a throwaway progress tracker on a random port and points
//! the client at it.

mod helpers;

use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use skillboard_core::config::mastery::MasteryConfig;
use skillboard_service::mastery::MasteryClient;

/// Spawn a fake progress tracker and return its base URL.
async fn spawn_tracker(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind fake tracker");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });

    format!("http://{addr}")
}

fn client_for(base_url: &str) -> MasteryClient {
    MasteryClient::new(&MasteryConfig {
        base_url: base_url.to_string(),
        timeout_seconds: 5,
    })
    .expect("Failed to build client")
}

#[tokio::test]
async fn test_unknown_student_gets_zero_mastery_fallback() {
    let tracker = Router::new().route(
        "/api/v1/mastery/{student_id}",
        get(|| async { StatusCode::NOT_FOUND }),
    );
    let base = spawn_tracker(tracker).await;

    let report = client_for(&base).get_mastery("student-42").await.unwrap();

    assert_eq!(report.student_id, "student-42");
    assert_eq!(report.overall_mastery, 0.0);
    assert_eq!(report.topic_mastery.len(), 7);
    assert!(report.struggling_topics.is_empty());
    assert_eq!(report.next_recommended_topic, "variables-and-data-types");
}

#[tokio::test]
async fn test_known_student_report_is_passed_through() {
    let tracker = Router::new().route(
        "/api/v1/mastery/{student_id}",
        get(|Path(student_id): Path<String>| async move {
            Json(json!({
                "student_id": student_id,
                "overall_mastery": 0.62,
                "topic_mastery": [
                    { "topic": "control-flow", "mastery_level": 0.9, "interactions_count": 14 },
                    { "topic": "functions", "mastery_level": 0.35, "interactions_count": 6 },
                ],
                "struggling_topics": ["functions"],
                "next_recommended_topic": "functions",
            }))
        }),
    );
    let base = spawn_tracker(tracker).await;

    let report = client_for(&base).get_mastery("student-7").await.unwrap();

    assert_eq!(report.student_id, "student-7");
    assert_eq!(report.overall_mastery, 0.62);
    assert_eq!(report.topic_mastery.len(), 2);
    assert_eq!(report.struggling_topics, vec!["functions"]);
    assert_eq!(report.next_recommended_topic, "functions");
}

#[tokio::test]
async fn test_upstream_error_is_surfaced_as_failure() {
    let tracker = Router::new().route(
        "/api/v1/mastery/{student_id}",
        get(|| async { StatusCode::INTERNAL_SERVER_ERROR.into_response() }),
    );
    let base = spawn_tracker(tracker).await;

    let err = client_for(&base).get_mastery("student-1").await.unwrap_err();
    assert!(err.to_string().contains("Failed to fetch mastery data"));
}

#[tokio::test]
async fn test_mastery_route_serves_fallback_and_error_statuses() {
    let tracker = Router::new().route(
        "/api/v1/mastery/{student_id}",
        get(|Path(student_id): Path<String>| async move {
            if student_id == "demo-student-001" {
                StatusCode::NOT_FOUND.into_response()
            } else {
                StatusCode::SERVICE_UNAVAILABLE.into_response()
            }
        }),
    );
    let base = spawn_tracker(tracker).await;

    let app = helpers::TestApp::with_mastery(Some(&base)).await;

    // Omitted studentId falls back to the demo student, which the tracker
    // does not know: the synthesized report comes back.
    let response = app.request("GET", "/api/mastery", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["overall_mastery"], 0.0);
    assert_eq!(
        response.body["next_recommended_topic"],
        "variables-and-data-types"
    );
    assert_eq!(response.body["topic_mastery"].as_array().unwrap().len(), 7);

    // Any other upstream failure surfaces as a gateway error.
    let response = app
        .request("GET", "/api/mastery?studentId=student-9", None)
        .await;
    assert_eq!(response.status, StatusCode::BAD_GATEWAY);
    assert!(response.body["message"]
        .as_str()
        .unwrap()
        .contains("Failed to fetch mastery data"));
}
