use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
    routing::get,
};
use serde_json::{Value, json};
use std::{
    fs,
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use trivia::db::{DbActorHandle, QuestionCreate};
use trivia::quiz::QuizRng;
use trivia::server::{TriviaState, panic_response, trivia_router};

struct TestApp {
    app: Router,
    db: DbActorHandle,
    db_path: PathBuf,
}

impl TestApp {
    async fn spawn(tag: &str) -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time before UNIX_EPOCH")
            .as_nanos();

        let mut db_path = std::env::temp_dir();
        db_path.push(format!(
            "trivia-route-{tag}-{}-{}.sqlite",
            std::process::id(),
            nanos
        ));

        let database_url = format!("sqlite:{}", db_path.display());
        let db = trivia::db::spawn(&database_url).await;
        let state = TriviaState::new(db.clone(), QuizRng::new(Some(1234)));
        let app = trivia_router(state);

        Self { app, db, db_path }
    }

    async fn seed(&self, question: &str, category: i64) -> i64 {
        self.db
            .create_question(QuestionCreate {
                question: question.to_string(),
                answer: "answer".to_string(),
                category,
                difficulty: 1,
            })
            .await
            .expect("seed question")
    }

    async fn send(&self, req: Request<Body>) -> (StatusCode, Value) {
        let resp = self.app.clone().oneshot(req).await.expect("request failed");
        let status = resp.status();
        let body = to_bytes(resp.into_body(), usize::MAX)
            .await
            .expect("failed to read response body");
        let value = if body.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body).expect("response body was not JSON")
        };
        (status, value)
    }

    async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
    }

    async fn post_json(&self, uri: &str, body: &Value) -> (StatusCode, Value) {
        self.send(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .expect("failed to build request"),
        )
        .await
    }

    async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.send(
            Request::builder()
                .method("DELETE")
                .uri(uri)
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let wal = PathBuf::from(format!("{}-wal", self.db_path.display()));
        let shm = PathBuf::from(format!("{}-shm", self.db_path.display()));
        let _ = fs::remove_file(&wal);
        let _ = fs::remove_file(&shm);
        let _ = fs::remove_file(&self.db_path);
    }
}

fn assert_envelope(body: &Value, code: u16, message: &str) {
    assert_eq!(
        body,
        &json!({ "success": false, "error": code, "message": message })
    );
}

#[tokio::test]
async fn categories_list_and_filter() {
    let t = TestApp::spawn("categories").await;

    let (status, body) = t.get("/categories").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(
        body["categories"],
        json!([
            "Science",
            "Art",
            "Geography",
            "History",
            "Entertainment",
            "Sports"
        ])
    );

    let art = t.seed("Who painted the Mona Lisa?", 2).await;
    t.seed("What is H2O?", 1).await;

    let (status, body) = t.get("/categories/2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["current_category"], "Art");
    assert_eq!(body["total_questions"], 1);
    assert_eq!(body["questions"][0]["id"], art);
    assert_eq!(body["questions"][0]["question"], "Who painted the Mona Lisa?");

    // Existing category without questions is an empty list.
    let (status, body) = t.get("/categories/6").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["current_category"], "Sports");
    assert_eq!(body["questions"], json!([]));
    assert_eq!(body["total_questions"], 0);

    let (status, body) = t.get("/categories/99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_envelope(&body, 404, "resource not found");

    let (status, body) = t.get("/categories/not-a-number").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_envelope(&body, 400, "bad request");

    let (status, body) = t.post_json("/categories", &json!({})).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_envelope(&body, 405, "Method not allowed");
}

#[tokio::test]
async fn questions_are_paginated_ten_per_page() {
    let t = TestApp::spawn("pagination").await;

    // Empty store: first page is already past the end.
    let (status, body) = t.get("/questions").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_envelope(&body, 404, "resource not found");

    let mut ids = Vec::new();
    for n in 0..23 {
        ids.push(t.seed(&format!("Question number {n}?"), (n % 6) + 1).await);
    }

    let (status, body) = t.get("/questions").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["total questions"], 23);
    assert_eq!(body["questions"].as_array().map(Vec::len), Some(10));
    assert_eq!(body["questions"][0]["id"], ids[0]);
    assert_eq!(body["categories"].as_array().map(Vec::len), Some(6));

    let (status, body) = t.get("/questions?page=3").await;
    assert_eq!(status, StatusCode::OK);
    let page_ids: Vec<i64> = body["questions"]
        .as_array()
        .expect("questions array")
        .iter()
        .filter_map(|q| q["id"].as_i64())
        .collect();
    assert_eq!(page_ids, ids[20..23].to_vec());

    let (status, body) = t.get("/questions?page=4").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_envelope(&body, 404, "resource not found");

    for bad in ["/questions?page=0", "/questions?page=-1", "/questions?page=abc"] {
        let (status, body) = t.get(bad).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{bad}");
        assert_envelope(&body, 400, "bad request");
    }
}

#[tokio::test]
async fn create_and_delete_questions() {
    let t = TestApp::spawn("mutations").await;

    let (status, body) = t
        .post_json(
            "/questions",
            &json!({
                "question": "Who built the pyramids?",
                "answer": "Pharaohs",
                "category": "4",
                "difficulty": 3
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    let id = body["created"].as_i64().expect("created id");

    let stored = t.db.list_questions().await.expect("list questions");
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id, id);
    assert_eq!(stored[0].category, Some(4));

    // Missing `question`: rejected before anything is inserted.
    let (status, body) = t
        .post_json(
            "/questions",
            &json!({ "answer": "Pharaohs", "category": 4, "difficulty": 3 }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_envelope(&body, 400, "bad request");

    // No body at all.
    let (status, body) = t
        .send(
            Request::builder()
                .method("POST")
                .uri("/questions")
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_envelope(&body, 400, "bad request");

    // Unknown category: the store refuses it.
    let (status, body) = t
        .post_json(
            "/questions",
            &json!({ "question": "Q?", "answer": "A", "category": 99, "difficulty": 1 }),
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_envelope(&body, 422, "unprocessable");
    assert_eq!(t.db.list_questions().await.expect("list").len(), 1);

    let (status, body) = t.delete(&format!("/questions/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true, "deleted": id }));

    let (status, body) = t.delete(&format!("/questions/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_envelope(&body, 404, "resource not found");

    let (status, body) = t.get(&format!("/questions/{id}")).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_envelope(&body, 405, "Method not allowed");
}

#[tokio::test]
async fn search_matches_substrings_ignoring_case() {
    let t = TestApp::spawn("search").await;

    let title = t.seed("Whose autobiography is entitled 'I Know Why'?", 4).await;
    t.seed("What is the heaviest organ?", 1).await;

    let (status, body) = t.post_json("/search", &json!({ "searchTerm": "TITLE" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_questions"], 1);
    assert_eq!(body["questions"][0]["id"], title);
    assert!(body["current_category"].is_null());

    let (status, body) = t.post_json("/search", &json!({ "searchTerm": "zebra" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_questions"], 0);
    assert_eq!(body["questions"], json!([]));

    let (status, body) = t.post_json("/search", &json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_envelope(&body, 400, "bad request");
}

#[tokio::test]
async fn quiz_rounds_skip_served_questions_and_end_with_null() {
    let t = TestApp::spawn("quiz").await;

    let first = t.seed("Science one?", 1).await;
    let second = t.seed("Science two?", 1).await;
    t.seed("Art one?", 2).await;
    t.seed("Art two?", 2).await;
    t.seed("Geography one?", 3).await;

    for _ in 0..10 {
        let (status, body) = t
            .post_json(
                "/quizzes",
                &json!({ "previous_questions": [first], "quiz_category": { "type": "Science", "id": 1 } }),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["question"]["id"], second);
    }

    let (status, body) = t
        .post_json(
            "/quizzes",
            &json!({ "previous_questions": [first, second], "quiz_category": 1 }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true, "question": null }));

    // No category: the whole pool is eligible.
    let (status, body) = t.post_json("/quizzes", &json!({ "previous_questions": [] })).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["question"]["id"].as_i64().is_some());

    let (status, body) = t.get("/quizzes").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_envelope(&body, 405, "Method not allowed");

    let (status, body) = t
        .post_json("/quizzes", &json!({ "previous_questions": "nope" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_envelope(&body, 400, "bad request");
}

#[tokio::test]
async fn unknown_routes_cors_and_request_ids() {
    let t = TestApp::spawn("ambient").await;

    let (status, body) = t.get("/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_envelope(&body, 404, "resource not found");

    let resp = t
        .app
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/categories")
                .header("origin", "http://localhost:3000")
                .header("x-request-id", "req-123")
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
    assert_eq!(
        resp.headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok()),
        Some("req-123")
    );

    let resp = t
        .app
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/categories")
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");
    let generated = resp
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .expect("generated request id");
    assert_eq!(generated.len(), 16);
}

#[tokio::test]
async fn oversized_body_is_a_bad_request() {
    let t = TestApp::spawn("oversized").await;

    // Past the default 2 MB extractor limit.
    let term = "a".repeat(3 * 1024 * 1024);
    let (status, body) = t.post_json("/search", &json!({ "searchTerm": term })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_envelope(&body, 400, "bad request");
}

#[tokio::test]
async fn cors_preflight_lists_allowed_methods_and_headers() {
    let t = TestApp::spawn("preflight").await;

    let resp = t
        .app
        .clone()
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/quizzes")
                .header("origin", "http://localhost:3000")
                .header("access-control-request-method", "POST")
                .header("access-control-request-headers", "content-type")
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::OK);

    let header = |name: &str| {
        resp.headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    assert_eq!(header("access-control-allow-origin").as_deref(), Some("*"));
    assert_eq!(
        header("access-control-allow-methods").as_deref(),
        Some("GET,PUT,POST,DELETE,OPTIONS")
    );
    assert_eq!(
        header("access-control-allow-headers").as_deref(),
        Some("content-type,authorization")
    );
}

async fn boom() -> &'static str {
    panic!("handler blew up")
}

#[tokio::test]
async fn handler_panic_becomes_internal_error_envelope() {
    let app = Router::new()
        .route("/boom", get(boom))
        .layer(CatchPanicLayer::custom(panic_response));

    let resp = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/boom")
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    let body: Value = serde_json::from_slice(&body).expect("response body was not JSON");
    assert_envelope(&body, 500, "internal server error");
}
