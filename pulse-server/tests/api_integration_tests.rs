// Router-level tests for the dashboard API
// Each test drives the full axum router in-process via `oneshot`

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use pulse_server::{
    app::build_router,
    generator::{self, GeneratorConfig},
    state::AppState,
    store::DataStore,
};

fn test_app() -> Router {
    let config = GeneratorConfig {
        seed: Some(1234),
        ..GeneratorConfig::default()
    };
    let store = DataStore::new(generator::generate(&config));
    build_router(AppState::new(store, config))
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

async fn post(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

#[tokio::test]
async fn health_check_responds_ok() {
    let app = test_app();
    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn stats_returns_every_platform_with_baseline_fields() {
    let app = test_app();
    let (status, json) = get_json(&app, "/api/stats").await;
    assert_eq!(status, StatusCode::OK);

    let stats = json.as_object().unwrap();
    assert_eq!(stats.len(), 5);
    for name in ["Facebook", "Instagram", "Twitter", "LinkedIn", "TikTok"] {
        assert!(stats.contains_key(name), "missing platform {name}");
    }

    let instagram = &stats["Instagram"];
    assert_eq!(instagram["followers"], 23150);
    assert_eq!(instagram["color"], "#E4405F");
    assert_eq!(instagram["engagement_rate"], 4.8);
}

#[tokio::test]
async fn analytics_returns_seven_dates_and_aligned_series() {
    let app = test_app();
    let (status, json) = get_json(&app, "/api/analytics").await;
    assert_eq!(status, StatusCode::OK);

    let dates = json["dates"].as_array().unwrap();
    assert_eq!(dates.len(), 7);

    let platforms = json["platforms"].as_array().unwrap();
    assert_eq!(platforms.len(), 5);
    for series in platforms {
        let engagement = series["engagement"].as_array().unwrap();
        assert_eq!(engagement.len(), dates.len());
        assert!(engagement.iter().all(|e| e.as_f64().unwrap() >= 0.0));
        assert!(series["color"].as_str().unwrap().starts_with('#'));
        assert!(series["followers"].as_i64().unwrap() >= 0);
    }
}

#[tokio::test]
async fn posts_default_to_ten_newest_first() {
    let app = test_app();
    let (status, json) = get_json(&app, "/api/posts").await;
    assert_eq!(status, StatusCode::OK);

    let posts = json.as_array().unwrap();
    assert_eq!(posts.len(), 10);

    let timestamps: Vec<&str> = posts
        .iter()
        .map(|p| p["timestamp"].as_str().unwrap())
        .collect();
    // RFC3339 strings with a fixed offset compare chronologically
    for pair in timestamps.windows(2) {
        assert!(pair[0] >= pair[1]);
    }
}

#[tokio::test]
async fn posts_limit_query_returns_prefix() {
    let app = test_app();
    let (_, five) = get_json(&app, "/api/posts?limit=5").await;
    let (_, twenty) = get_json(&app, "/api/posts?limit=20").await;

    let five = five.as_array().unwrap();
    let twenty = twenty.as_array().unwrap();
    assert_eq!(five.len(), 5);
    assert_eq!(twenty.len(), 20);
    assert_eq!(five[..], twenty[..5]);
}

#[tokio::test]
async fn refresh_swaps_in_a_new_dataset() {
    let app = test_app();
    let (status, json) = post(&app, "/api/refresh").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Dataset regenerated");
    assert!(json["generated_at"].as_str().is_some());

    // Queries still serve a complete dataset after the swap
    let (status, stats) = get_json(&app, "/api/stats").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats.as_object().unwrap().len(), 5);
}

#[tokio::test]
async fn export_and_schedule_are_not_implemented() {
    let app = test_app();
    for uri in ["/api/export", "/api/schedule"] {
        let (status, json) = post(&app, uri).await;
        assert_eq!(status, StatusCode::NOT_IMPLEMENTED);
        assert_eq!(json["error"], "Not Implemented");
    }
}

#[tokio::test]
async fn empty_store_serves_empty_shapes_not_errors() {
    let app = build_router(AppState::new(DataStore::empty(), GeneratorConfig::default()));

    let (status, stats) = get_json(&app, "/api/stats").await;
    assert_eq!(status, StatusCode::OK);
    assert!(stats.as_object().unwrap().is_empty());

    let (status, analytics) = get_json(&app, "/api/analytics").await;
    assert_eq!(status, StatusCode::OK);
    assert!(analytics["dates"].as_array().unwrap().is_empty());
    assert!(analytics["platforms"].as_array().unwrap().is_empty());

    let (status, posts) = get_json(&app, "/api/posts").await;
    assert_eq!(status, StatusCode::OK);
    assert!(posts.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn dashboard_page_is_served() {
    let app = test_app();
    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let page = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(page.contains("<canvas id=\"engagementChart\">"));
    assert!(page.contains("/api/stats"));
}
