mod common;

use axum::http::StatusCode;
use serde_json::{json, Value};
use uuid::Uuid;

use common::{Factory, TestApp};

#[tokio::test]
async fn test_create_listing() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);
    let author = factory.create_entrepreneur("").await;

    let response = app
        .server
        .post("/listings")
        .json(&json!({
            "title": "Mobile app",
            "description": "iOS and Android",
            "desiredSkills": "Swift, Kotlin",
            "estimatedBudget": 12000.5,
            "authorId": author.id
        }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let body: Value = response.json();
    assert_eq!(body["title"], "Mobile app");
    assert_eq!(body["desiredSkills"], "Swift, Kotlin");
    assert_eq!(body["estimatedBudget"], 12000.5);
    assert_eq!(body["authorId"], author.id.to_string());
    assert_eq!(body["authorType"], "entrepreneur");
    assert!(body["createdAt"].as_str().is_some());
}

#[tokio::test]
async fn test_create_listing_by_freelancer() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);
    let author = factory.create_freelance("rust").await;

    let response = app
        .server
        .post("/listings")
        .json(&json!({
            "title": "Available for Rust work",
            "description": "Backend services",
            "estimatedBudget": 0,
            "authorId": author.id,
            "authorType": "freelance"
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.json::<Value>()["authorType"], "freelance");
}

#[tokio::test]
async fn test_create_listing_author_type_mismatch() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);
    let author = factory.create_freelance("rust").await;

    let response = app
        .server
        .post("/listings")
        .json(&json!({
            "title": "Mismatch",
            "description": "Wrong role",
            "estimatedBudget": 10,
            "authorId": author.id,
            "authorType": "entrepreneur"
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_listing_unknown_author() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/listings")
        .json(&json!({
            "title": "Orphan",
            "description": "Nobody wrote this",
            "estimatedBudget": 10,
            "authorId": Uuid::new_v4()
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_listing_missing_fields() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);
    let author = factory.create_entrepreneur("").await;

    let response = app
        .server
        .post("/listings")
        .json(&json!({
            "description": "No title",
            "estimatedBudget": 10,
            "authorId": author.id
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["message"], "title is required");
}

#[tokio::test]
async fn test_create_listing_negative_budget() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);
    let author = factory.create_entrepreneur("").await;

    let response = app
        .server
        .post("/listings")
        .json(&json!({
            "title": "Cheap",
            "description": "Too cheap",
            "estimatedBudget": -1,
            "authorId": author.id
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_listing() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);
    let author = factory.create_entrepreneur("").await;

    let created: Value = app
        .server
        .post("/listings")
        .json(&json!({
            "title": "Website",
            "description": "Landing page",
            "estimatedBudget": 800,
            "authorId": author.id
        }))
        .await
        .json();

    let response = app
        .server
        .get(&format!("/listings/{}", created["id"].as_str().unwrap()))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["title"], "Website");
    assert!(body["desiredSkills"].is_null());
}

#[tokio::test]
async fn test_get_listing_not_found() {
    let app = TestApp::new().await;

    let response = app
        .server
        .get(&format!("/listings/{}", Uuid::new_v4()))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["message"], "Listing not found");
}

#[tokio::test]
async fn test_list_listings_pagination() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);
    factory.create_entrepreneur("").await;
    factory.create_entrepreneur("").await;

    let response = app
        .server
        .get("/listings")
        .add_query_param("limit", 1)
        .await;

    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(body["limit"], 1);
    assert_eq!(body["offset"], 0);
    assert!(body["total"].as_u64().unwrap() >= 2);
}

#[tokio::test]
async fn test_list_listings_clamps_limit() {
    let app = TestApp::new().await;

    let response = app
        .server
        .get("/listings")
        .add_query_param("limit", 1000)
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["limit"], 100);
}

fn listing_ids(body: &Value) -> Vec<String> {
    body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["id"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_list_listings_exact_offset() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);
    for _ in 0..3 {
        factory.create_entrepreneur("").await;
    }

    // Other tests publish concurrently; only compare snapshots taken while
    // the total stayed the same.
    for _ in 0..10 {
        let before: Value = app
            .server
            .get("/listings")
            .add_query_param("limit", 100)
            .await
            .json();
        let page: Value = app
            .server
            .get("/listings")
            .add_query_param("limit", 2)
            .add_query_param("offset", 1)
            .await
            .json();
        let after: Value = app
            .server
            .get("/listings")
            .add_query_param("limit", 100)
            .await
            .json();

        if before["total"] != after["total"] || page["total"] != after["total"] {
            continue;
        }

        let all = listing_ids(&before);
        assert_eq!(listing_ids(&page), all[1..3].to_vec());
        assert_eq!(page["offset"], 1);
        assert_eq!(page["limit"], 2);
        return;
    }

    panic!("listings kept changing between requests");
}

#[tokio::test]
async fn test_create_listing_budget_out_of_range() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);
    let author = factory.create_entrepreneur("").await;

    let response = app
        .server
        .post("/listings")
        .json(&json!({
            "title": "Moonshot",
            "description": "Too big for the column",
            "estimatedBudget": 1e15,
            "authorId": author.id
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(response.json::<Value>()["message"]
        .as_str()
        .unwrap()
        .contains("estimatedBudget"));
}
