// End to end tests through the full router with an in-memory store.
//
// Each test drives the public HTTP surface only: submit events the way an
// instrumented client would, then inspect them the way a test suite would.
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use chrono::{DateTime, Utc};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::shell::http::router;
use crate::shell::state::AppState;

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

fn ingest(dataset: &str, body: &str) -> Request<Body> {
    Request::post(format!("/1/events/{dataset}"))
        .header("content-type", "application/json")
        .header("x-honeycomb-team", "abc")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn inspect(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn walks_through_the_documented_example() {
    let app = router(AppState::in_memory());
    let before = Utc::now();

    let (status, body) = send(&app, ingest("my-dataset", r#"{"x":1}"#)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());

    let (status, body) = send(&app, inspect("/fake/events/my-dataset")).await;
    assert_eq!(status, StatusCode::OK);
    let events: Value = serde_json::from_slice(&body).unwrap();
    let events = events.as_array().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["data"], json!({"x": 1}));
    let time = DateTime::parse_from_rfc3339(events[0]["time"].as_str().unwrap()).unwrap();
    let drift = time.with_timezone(&Utc) - before;
    assert!(drift.num_seconds().abs() < 5, "event time too far from receipt: {drift}");

    let (status, body) = send(&app, inspect("/fake/events/my-dataset/1")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, b"no event 1 for dataset 'my-dataset'");

    let (status, body) = send(&app, inspect("/fake/events/other")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, b"no events for dataset 'other'");
}

#[tokio::test]
async fn places_each_event_at_the_count_of_prior_ingestions() {
    let app = router(AppState::in_memory());

    for n in 0..5 {
        let (status, _) = send(&app, ingest("ordered", &format!(r#"{{"n":{n}}}"#))).await;
        assert_eq!(status, StatusCode::OK);
    }

    for n in 0..5 {
        let (status, body) = send(&app, inspect(&format!("/fake/events/ordered/{n}"))).await;
        assert_eq!(status, StatusCode::OK);
        let event: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(event["data"], json!({ "n": n }));
    }

    let (status, _) = send(&app, inspect("/fake/events/ordered/5")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(&app, inspect("/fake/events/ordered/50")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn rejected_submissions_never_create_a_dataset() {
    let app = router(AppState::in_memory());

    let wrong_type = Request::post("/1/events/ds")
        .header("content-type", "text/plain")
        .header("x-honeycomb-team", "abc")
        .body(Body::from("{}"))
        .unwrap();
    let no_team = Request::post("/1/events/ds")
        .header("content-type", "application/json")
        .body(Body::from("{}"))
        .unwrap();

    assert_eq!(send(&app, wrong_type).await.0, StatusCode::BAD_REQUEST);
    assert_eq!(send(&app, no_team).await.0, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, inspect("/fake/events/ds")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (_, body) = send(&app, inspect("/fake/events")).await;
    assert_eq!(serde_json::from_slice::<Value>(&body).unwrap(), json!({}));
}

#[tokio::test]
async fn lists_every_dataset_with_all_of_its_events() {
    let app = router(AppState::in_memory());
    let submissions = [("a", 1), ("b", 2), ("a", 3), ("c", 4), ("b", 5), ("a", 6)];

    for (dataset, n) in submissions {
        send(&app, ingest(dataset, &format!(r#"{{"n":{n}}}"#))).await;
    }

    let (status, body) = send(&app, inspect("/fake/events")).await;
    assert_eq!(status, StatusCode::OK);
    let all: Value = serde_json::from_slice(&body).unwrap();
    let all = all.as_object().unwrap();
    assert_eq!(all.len(), 3);
    let total: usize = all.values().map(|v| v.as_array().unwrap().len()).sum();
    assert_eq!(total, submissions.len());
    let a: Vec<_> = all["a"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["data"]["n"].clone())
        .collect();
    assert_eq!(a, vec![json!(1), json!(3), json!(6)]);
}

#[tokio::test]
async fn keeps_a_supplied_event_time_untouched() {
    let app = router(AppState::in_memory());

    let request = Request::post("/1/events/timed")
        .header("content-type", "application/json")
        .header("x-honeycomb-team", "abc")
        .header("x-honeycomb-event-time", "1985-04-12T23:20:50.52Z")
        .body(Body::from(r#"{"ok":true}"#))
        .unwrap();
    assert_eq!(send(&app, request).await.0, StatusCode::OK);

    let (_, body) = send(&app, inspect("/fake/events/timed/0")).await;
    let event: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(
        event,
        json!({"time": "1985-04-12T23:20:50.52Z", "data": {"ok": true}})
    );
}

#[tokio::test]
async fn answers_ping() {
    let app = router(AppState::in_memory());

    let (status, body) = send(&app, inspect("/ping")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"Honeycomb fake is running");
}
