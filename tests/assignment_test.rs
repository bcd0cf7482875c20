//! Integration tests for the assignment lifecycle and teacher dashboard.

mod helpers;

use axum::http::StatusCode;
use helpers::TestApp;
use serde_json::json;

struct Classroom {
    app: TestApp,
    teacher_key: String,
    student_key: String,
}

async fn classroom() -> Classroom {
    let app = TestApp::new().await;
    let teacher = app
        .register("Ms. Smith", "smith@example.com", "password123", "teacher")
        .await;
    let student = app
        .register("Alice", "alice-a@example.com", "password123", "student")
        .await;

    Classroom {
        teacher_key: teacher["teacherId"].as_str().unwrap().to_string(),
        student_key: student["studentId"].as_str().unwrap().to_string(),
        app,
    }
}

async fn create_assignment(room: &Classroom, body: serde_json::Value) -> serde_json::Value {
    let response = room.app.request("POST", "/api/assignments", Some(body)).await;
    assert_eq!(
        response.status,
        StatusCode::OK,
        "Create failed: {:?}",
        response.body
    );
    response.body["assignment"].clone()
}

#[tokio::test]
async fn test_create_assignment_routes_both_notifications() {
    let room = classroom().await;

    let assignment = create_assignment(
        &room,
        json!({
            "teacherId": room.teacher_key,
            "studentId": room.student_key,
            "studentName": "Alice",
            "topic": "loops",
            "type": "mcq",
            "questions": [{"q": "What does a for loop do?"}],
        }),
    )
    .await;

    assert_eq!(assignment["completed"], false);
    assert_eq!(assignment["level"], "easy");
    assert_eq!(assignment["topic"], "loops");

    room.app.drain_outbox().await;

    let student_feed = room
        .app
        .request(
            "GET",
            &format!("/api/notifications/{}", room.student_key),
            None,
        )
        .await;
    let notifications = student_feed.body["notifications"].as_array().unwrap().clone();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0]["type"], "assignment");
    assert!(notifications[0]["title"]
        .as_str()
        .unwrap()
        .contains("New Practice Assignment"));
    assert_eq!(student_feed.body["unreadCount"], 1);

    // The teacher's feed also carries Alice's registration notice, so
    // filter down to confirmations.
    let teacher_feed = room
        .app
        .request(
            "GET",
            &format!("/api/notifications/{}", room.teacher_key),
            None,
        )
        .await;
    let confirmations: Vec<_> = teacher_feed.body["notifications"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|n| n["type"] == "confirmation")
        .cloned()
        .collect();
    assert_eq!(confirmations.len(), 1);
    assert!(confirmations[0]["message"]
        .as_str()
        .unwrap()
        .contains("assigned to Alice"));
}

#[tokio::test]
async fn test_coding_assignment_gets_coding_wording() {
    let room = classroom().await;

    create_assignment(
        &room,
        json!({
            "teacherId": room.teacher_key,
            "studentId": room.student_key,
            "studentName": "Alice",
            "topic": "functions",
            "type": "coding",
            "difficulty": "hard",
            "questions": [],
        }),
    )
    .await;

    room.app.drain_outbox().await;

    let feed = room
        .app
        .request(
            "GET",
            &format!("/api/notifications/{}", room.student_key),
            None,
        )
        .await;
    let notifications = feed.body["notifications"].as_array().unwrap();
    assert_eq!(notifications[0]["title"], "New Coding Assignment");
    assert!(notifications[0]["message"]
        .as_str()
        .unwrap()
        .contains("coding challenge on functions"));
}

#[tokio::test]
async fn test_complete_with_ordinary_score_notifies_teacher_only() {
    let room = classroom().await;

    let assignment = create_assignment(
        &room,
        json!({
            "teacherId": room.teacher_key,
            "studentId": room.student_key,
            "studentName": "Alice",
            "topic": "loops",
            "questions": [],
        }),
    )
    .await;
    room.app.drain_outbox().await;

    let id = assignment["id"].as_str().unwrap();
    let response = room
        .app
        .request(
            "PUT",
            &format!("/api/assignments/{id}/complete"),
            Some(json!({ "score": 85, "studentName": "Alice" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["assignment"]["completed"], true);
    assert_eq!(response.body["assignment"]["score"], 85);
    assert!(!response.body["assignment"]["completedAt"].is_null());

    room.app.drain_outbox().await;

    let teacher_feed = room
        .app
        .request(
            "GET",
            &format!("/api/notifications/{}", room.teacher_key),
            None,
        )
        .await;
    let completions: Vec<_> = teacher_feed.body["notifications"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|n| n["type"] == "completion")
        .cloned()
        .collect();
    assert_eq!(completions.len(), 1);
    assert_eq!(completions[0]["title"], "Student Completed Practice");
    assert!(completions[0]["message"]
        .as_str()
        .unwrap()
        .contains("score 85%"));

    // No achievement for a non-perfect score.
    let student_feed = room
        .app
        .request(
            "GET",
            &format!("/api/notifications/{}", room.student_key),
            None,
        )
        .await;
    assert!(student_feed.body["notifications"]
        .as_array()
        .unwrap()
        .iter()
        .all(|n| n["type"] != "achievement"));
}

#[tokio::test]
async fn test_perfect_score_also_rewards_the_student() {
    let room = classroom().await;

    let assignment = create_assignment(
        &room,
        json!({
            "teacherId": room.teacher_key,
            "studentId": room.student_key,
            "studentName": "Alice",
            "topic": "recursion",
            "questions": [],
        }),
    )
    .await;
    room.app.drain_outbox().await;

    let id = assignment["id"].as_str().unwrap();
    room.app
        .request(
            "PUT",
            &format!("/api/assignments/{id}/complete"),
            Some(json!({ "score": 100, "studentName": "Alice" })),
        )
        .await;
    room.app.drain_outbox().await;

    let teacher_feed = room
        .app
        .request(
            "GET",
            &format!("/api/notifications/{}", room.teacher_key),
            None,
        )
        .await;
    let completion = teacher_feed.body["notifications"]
        .as_array()
        .unwrap()
        .iter()
        .find(|n| n["type"] == "completion")
        .cloned()
        .unwrap();
    assert!(completion["title"].as_str().unwrap().contains("Perfect Score"));
    assert!(completion["message"]
        .as_str()
        .unwrap()
        .contains("achieved 100% on recursion"));

    let student_feed = room
        .app
        .request(
            "GET",
            &format!("/api/notifications/{}", room.student_key),
            None,
        )
        .await;
    let achievements: Vec<_> = student_feed.body["notifications"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|n| n["type"] == "achievement")
        .cloned()
        .collect();
    assert_eq!(achievements.len(), 1);
    assert!(achievements[0]["message"]
        .as_str()
        .unwrap()
        .contains("You scored 100% on recursion"));
}

#[tokio::test]
async fn test_complete_unknown_assignment_is_not_found() {
    let room = classroom().await;

    let response = room
        .app
        .request(
            "PUT",
            &format!("/api/assignments/{}/complete", uuid::Uuid::new_v4()),
            Some(json!({ "score": 50 })),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_out_of_range_score_rejected() {
    let room = classroom().await;

    let assignment = create_assignment(
        &room,
        json!({
            "teacherId": room.teacher_key,
            "studentId": room.student_key,
            "studentName": "Alice",
            "topic": "loops",
            "questions": [],
        }),
    )
    .await;

    let id = assignment["id"].as_str().unwrap();
    let response = room
        .app
        .request(
            "PUT",
            &format!("/api/assignments/{id}/complete"),
            Some(json!({ "score": 150 })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_student_listing_decodes_questions_newest_first() {
    let room = classroom().await;

    create_assignment(
        &room,
        json!({
            "teacherId": room.teacher_key,
            "studentId": room.student_key,
            "studentName": "Alice",
            "topic": "first",
            "questions": [{"q": "one"}],
        }),
    )
    .await;
    create_assignment(
        &room,
        json!({
            "teacherId": room.teacher_key,
            "studentId": room.student_key,
            "studentName": "Alice",
            "topic": "second",
            "questions": [{"q": "two"}, {"q": "three"}],
        }),
    )
    .await;

    let response = room
        .app
        .request(
            "GET",
            &format!("/api/assignments/student/{}", room.student_key),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let assignments = response.body["assignments"].as_array().unwrap();
    assert_eq!(assignments.len(), 2);
    assert_eq!(assignments[0]["topic"], "second");
    assert_eq!(assignments[0]["questions"].as_array().unwrap().len(), 2);
    assert_eq!(assignments[1]["questions"][0]["q"], "one");
}

#[tokio::test]
async fn test_teacher_dashboard_stats_hold_their_invariants() {
    let room = classroom().await;

    let mut ids = Vec::new();
    for topic in ["a", "b", "c"] {
        let assignment = create_assignment(
            &room,
            json!({
                "teacherId": room.teacher_key,
                "studentId": room.student_key,
                "studentName": "Alice",
                "topic": topic,
                "questions": [],
            }),
        )
        .await;
        ids.push(assignment["id"].as_str().unwrap().to_string());
    }

    // Complete two of three: scores 50 and 75 average to 62.5, rounded 63.
    for (id, score) in ids.iter().take(2).zip([50, 75]) {
        room.app
            .request(
                "PUT",
                &format!("/api/assignments/{id}/complete"),
                Some(json!({ "score": score, "studentName": "Alice" })),
            )
            .await;
    }

    let response = room
        .app
        .request(
            "GET",
            &format!("/api/assignments/teacher/{}", room.teacher_key),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let stats = &response.body["stats"];
    assert_eq!(stats["totalAssigned"], 3);
    assert_eq!(stats["totalCompleted"], 2);
    assert_eq!(stats["totalPending"], 1);
    assert_eq!(stats["avgScore"], 63);

    let submissions = response.body["recentSubmissions"].as_array().unwrap();
    assert_eq!(submissions.len(), 2);
    assert!(submissions.iter().all(|s| !s["completedAt"].is_null()));

    assert_eq!(response.body["assignments"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_dashboard_avg_score_is_zero_without_scored_completions() {
    let room = classroom().await;

    create_assignment(
        &room,
        json!({
            "teacherId": room.teacher_key,
            "studentId": room.student_key,
            "studentName": "Alice",
            "topic": "open",
            "questions": [],
        }),
    )
    .await;

    let response = room
        .app
        .request(
            "GET",
            &format!("/api/assignments/teacher/{}", room.teacher_key),
            None,
        )
        .await;

    let stats = &response.body["stats"];
    assert_eq!(stats["avgScore"], 0);
    assert_eq!(stats["totalPending"], 1);
}

#[tokio::test]
async fn test_dashboard_is_global_across_teachers() {
    let room = classroom().await;
    let other_teacher = room
        .app
        .register("Mr. Jones", "jones@example.com", "password123", "teacher")
        .await;
    let other_key = other_teacher["teacherId"].as_str().unwrap().to_string();

    create_assignment(
        &room,
        json!({
            "teacherId": room.teacher_key,
            "studentId": room.student_key,
            "studentName": "Alice",
            "topic": "loops",
            "questions": [],
        }),
    )
    .await;

    // The other teacher assigned nothing but still sees the classroom view.
    let response = room
        .app
        .request("GET", &format!("/api/assignments/teacher/{other_key}"), None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["stats"]["totalAssigned"], 1);
    assert_eq!(response.body["assignments"].as_array().unwrap().len(), 1);
}
