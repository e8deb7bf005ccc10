//! End-to-end tests for the item API over a real listener.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use item_service::store::MemoryStore;
use serde_json::Value;

mod common;

#[tokio::test]
async fn test_health_is_independent_of_database() {
    // A failing store stands in for an unreachable database.
    let (addr, shutdown) = common::spawn_server(Arc::new(MemoryStore::failing()), false).await;
    let before = Utc::now();

    let body: Value = reqwest::get(format!("http://{addr}/health"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["status"], "healthy");
    let timestamp: DateTime<Utc> = body["timestamp"]
        .as_str()
        .unwrap()
        .parse()
        .expect("timestamp must be RFC 3339");
    assert!(timestamp >= before - Duration::seconds(1));

    shutdown.trigger();
}

#[tokio::test]
async fn test_create_then_list_scenario() {
    let (addr, shutdown) = common::spawn_server(Arc::new(MemoryStore::new()), true).await;
    let client = reqwest::Client::new();
    let url = format!("http://{addr}/api/items");

    let first: Value = client
        .post(&url)
        .json(&serde_json::json!({ "name": "apple", "description": "fruit" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(first["id"], 1);
    assert_eq!(first["name"], "apple");
    assert_eq!(first["description"], "fruit");
    assert!(first["created_at"].is_string());

    let second: Value = client
        .post(&url)
        .json(&serde_json::json!({ "name": "bolt" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(second["id"], 2);
    assert_eq!(second["name"], "bolt");
    assert!(second["description"].is_null());

    let listed: Value = client.get(&url).send().await.unwrap().json().await.unwrap();
    let items = listed.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["id"], 1);
    assert_eq!(items[1]["id"], 2);

    shutdown.trigger();
}

#[tokio::test]
async fn test_create_without_body_persists_nulls() {
    let (addr, shutdown) = common::spawn_server(Arc::new(MemoryStore::new()), true).await;

    let response = reqwest::Client::new()
        .post(format!("http://{addr}/api/items"))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let body: Value = response.json().await.unwrap();
    assert!(body["name"].is_null());
    assert!(body["description"].is_null());

    shutdown.trigger();
}

#[tokio::test]
async fn test_ids_strictly_increasing() {
    let (addr, shutdown) = common::spawn_server(Arc::new(MemoryStore::new()), true).await;
    let client = reqwest::Client::new();
    let url = format!("http://{addr}/api/items");

    let mut previous = 0;
    for n in 0..5 {
        let body: Value = client
            .post(&url)
            .json(&serde_json::json!({ "name": format!("item-{n}") }))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        let id = body["id"].as_i64().unwrap();
        assert!(id > previous, "ids must be strictly increasing");
        previous = id;
    }

    shutdown.trigger();
}

#[tokio::test]
async fn test_list_with_missing_table_returns_error_json() {
    let (addr, shutdown) = common::spawn_server(Arc::new(MemoryStore::failing()), false).await;

    let response = reqwest::get(format!("http://{addr}/api/items")).await.unwrap();
    assert_eq!(response.status().as_u16(), 500);

    let body: Value = response.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("items"));

    shutdown.trigger();
}

#[tokio::test]
async fn test_readiness_reflects_schema_init() {
    let (degraded, shutdown_a) =
        common::spawn_server(Arc::new(MemoryStore::failing()), false).await;
    let response = reqwest::get(format!("http://{degraded}/ready")).await.unwrap();
    assert_eq!(response.status().as_u16(), 503);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "degraded");

    let (healthy, shutdown_b) = common::spawn_server(Arc::new(MemoryStore::new()), true).await;
    let response = reqwest::get(format!("http://{healthy}/ready")).await.unwrap();
    assert_eq!(response.status().as_u16(), 200);

    shutdown_a.trigger();
    shutdown_b.trigger();
}

#[tokio::test]
async fn test_request_id_propagated_to_response() {
    let (addr, shutdown) = common::spawn_server(Arc::new(MemoryStore::new()), true).await;

    let response = reqwest::get(format!("http://{addr}/health")).await.unwrap();
    let id = response
        .headers()
        .get("x-request-id")
        .expect("response must carry a request id");
    assert!(!id.to_str().unwrap().is_empty());

    shutdown.trigger();
}
