mod common;

use axum::http::StatusCode;
use serde_json::{json, Value};
use uuid::Uuid;

use common::{Factory, TestApp};

const PASSWORD: &str = "TestPassword123!";

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);
    let email = format!("login-{}@example.com", Uuid::new_v4());
    let registered = factory.create_freelance_with_email(&email, "rust").await;

    let response = app
        .server
        .post("/auth/login")
        .json(&json!({
            "email": email,
            "password": PASSWORD
        }))
        .await;

    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["id"], registered.id.to_string());
    assert_eq!(body["name"], "Grace");
    assert_eq!(body["role"], "freelance");
    assert!(body.get("passwordHash").is_none());
    assert!(body.get("password_hash").is_none());
}

#[tokio::test]
async fn test_login_email_is_case_insensitive() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);
    let email = format!("login-{}@example.com", Uuid::new_v4());
    factory.create_freelance_with_email(&email, "rust").await;

    let response = app
        .server
        .post("/auth/login")
        .json(&json!({
            "email": format!("  {}  ", email.to_uppercase()),
            "password": PASSWORD
        }))
        .await;

    response.assert_status_ok();
}

#[tokio::test]
async fn test_login_entrepreneur_role() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);
    let input = factory.entrepreneur_input("");
    let email = input.email.clone();
    fluss::services::RegistrationService::register_entrepreneur(
        &app.state.db,
        &fluss::storage::InMemoryStorage::new(),
        input,
        None,
    )
    .await
    .unwrap();

    let response = app
        .server
        .post("/auth/login")
        .json(&json!({
            "email": email,
            "password": PASSWORD
        }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["role"], "entrepreneur");
}

#[tokio::test]
async fn test_login_wrong_password_and_unknown_email_look_alike() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);
    let email = format!("login-{}@example.com", Uuid::new_v4());
    factory.create_freelance_with_email(&email, "rust").await;

    let wrong_password = app
        .server
        .post("/auth/login")
        .json(&json!({
            "email": email,
            "password": "WrongPassword"
        }))
        .await;

    let unknown_email = app
        .server
        .post("/auth/login")
        .json(&json!({
            "email": format!("nobody-{}@example.com", Uuid::new_v4()),
            "password": PASSWORD
        }))
        .await;

    wrong_password.assert_status(StatusCode::BAD_REQUEST);
    unknown_email.assert_status(StatusCode::BAD_REQUEST);

    let a: Value = wrong_password.json();
    let b: Value = unknown_email.json();
    assert_eq!(a, b);
    assert_eq!(a["message"], "Invalid email or password");
}

#[tokio::test]
async fn test_login_missing_password() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/auth/login")
        .json(&json!({
            "email": "someone@example.com"
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}
