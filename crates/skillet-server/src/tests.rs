//! Server API tests

use super::*;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use chrono::NaiveDate;
use http_body_util::BodyExt;
use serde_json::json;
use skillet_core::{RecipeRecord, StoreConfig};
use tempfile::TempDir;
use tower::ServiceExt;

fn test_settings(root: &std::path::Path) -> Settings {
    Settings {
        root: root.to_path_buf(),
        api_url: "http://127.0.0.1:9".to_string(),
        api_key: None,
        access_token: None,
    }
}

fn setup_test_app() -> (TempDir, RecipeStore, Router) {
    let dir = TempDir::new().unwrap();
    let store = RecipeStore::open(&StoreConfig::new(dir.path())).unwrap();
    let settings = test_settings(dir.path());
    let router = create_router(store.clone(), settings, None);
    (dir, store, router)
}

async fn get_body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body();
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn seed_recipe(store: &RecipeStore, oid: &str) {
    let recipe = RecipeRecord::new(
        NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        json!({
            "_id": {"$oid": oid},
            "localizedTitle": {"en": "Test Recipe"},
            "ingredients": [
                {"quantity": 1, "measure": "piece",
                 "ingredient": {"typ": "tomato", "localizedTitle": {"en": "Tomato"}}}
            ]
        }),
    );
    store.add(&recipe).unwrap();
}

#[tokio::test]
async fn test_list_recipes_empty() {
    let (_dir, _store, app) = setup_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/recipes")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = get_body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_list_recipes_returns_raw_payload() {
    let (_dir, store, app) = setup_test_app();
    seed_recipe(&store, "5e5390e4740000cd6bb0a1e7");

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/recipes")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = get_body_json(response).await;
    let recipes = json.as_array().unwrap();
    assert_eq!(recipes.len(), 1);
    assert_eq!(recipes[0]["date"], "2024-05-01");
    assert_eq!(recipes[0]["data"]["_id"]["$oid"], "5e5390e4740000cd6bb0a1e7");
    assert_eq!(recipes[0]["data"]["localizedTitle"]["en"], "Test Recipe");
}

#[tokio::test]
async fn test_get_recipe_found_and_missing() {
    let (_dir, store, app) = setup_test_app();
    seed_recipe(&store, "5e5390e4740000cd6bb0a1e7");

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/recipes/5e5390e4740000cd6bb0a1e7")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/recipes/does-not-exist")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_ingredients() {
    let (_dir, store, app) = setup_test_app();
    seed_recipe(&store, "5e5390e4740000cd6bb0a1e7");

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/ingredients")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = get_body_json(response).await;
    let ingredients = json.as_array().unwrap();
    assert_eq!(ingredients.len(), 1);
    assert_eq!(ingredients[0]["key"], "tomato");
    assert_eq!(ingredients[0]["localized_title"]["en"], "Tomato");
    // Absent plural form serializes as null, not an empty mapping
    assert!(ingredients[0]["number_title"].is_null());
}

#[tokio::test]
async fn test_sync_today_without_api_key_is_bad_request() {
    let (_dir, _store, app) = setup_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/actions/sync-today")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_sync_today_short_circuits_when_already_synced() {
    let (_dir, store, app) = setup_test_app();
    // Seed a recipe dated today so the existence check short-circuits
    // before any upstream call (which would fail: no API key).
    let today = chrono::Local::now().date_naive();
    store
        .add(&RecipeRecord::new(
            today,
            json!({"_id": {"$oid": "1"}, "title": "today"}),
        ))
        .unwrap();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/actions/sync-today")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = get_body_json(response).await;
    assert_eq!(json["synced"], false);
    assert_eq!(json["stored"], 0);
}

#[tokio::test]
async fn test_search_with_unparseable_id_is_bad_request() {
    let (_dir, _store, app) = setup_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/actions/search")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"identifier": "not a recipe id"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
