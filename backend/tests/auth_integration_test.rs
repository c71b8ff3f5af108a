//! Integration tests for the account endpoints

mod common;

use axum::http::StatusCode;
use serde_json::json;

fn unique_username(prefix: &str) -> String {
    format!("{}_{}", prefix, uuid::Uuid::new_v4().simple())
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_register_success() {
    let app = common::TestApp::new().await;

    let body = json!({
        "username": unique_username("register"),
        "password": "SecurePassword123!"
    });

    let (status, response) = app.post("/register", &body.to_string()).await;

    assert_eq!(status, StatusCode::OK);

    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["message"], "User registered successfully");
    // No token and nothing sensitive echoed back
    assert!(response.get("token").is_none());
    assert!(response.get("password").is_none());
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_register_duplicate_username_is_conflict() {
    let app = common::TestApp::new().await;

    let body = json!({
        "username": unique_username("duplicate"),
        "password": "SecurePassword123!"
    });

    // First registration should succeed
    let (status, _) = app.post("/register", &body.to_string()).await;
    assert_eq!(status, StatusCode::OK);

    // Second registration with same username should fail
    let (status, response) = app.post("/register", &body.to_string()).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["message"], "Username already exists");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_register_then_login_token_is_accepted() {
    let app = common::TestApp::new().await;

    let username = unique_username("roundtrip");
    let token = app.register_and_login(&username, "SecurePassword123!").await;

    // The issued token passes the gate on a protected route
    let (status, _) = app.get_auth("/my-orders", &token).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_login_failures_are_indistinguishable() {
    let app = common::TestApp::new().await;

    let username = unique_username("enum");
    app.register_and_login(&username, "CorrectPassword123!").await;

    // Known username, wrong password
    let wrong_password = json!({
        "username": username,
        "password": "WrongPassword123!"
    });
    let (status_a, body_a) = app.post("/login", &wrong_password.to_string()).await;

    // Username that does not exist at all
    let unknown_user = json!({
        "username": unique_username("ghost"),
        "password": "WrongPassword123!"
    });
    let (status_b, body_b) = app.post("/login", &unknown_user.to_string()).await;

    // Same status, same body: no username probing
    assert_eq!(status_a, StatusCode::UNAUTHORIZED);
    assert_eq!(status_a, status_b);
    assert_eq!(body_a, body_b);

    let json: serde_json::Value = serde_json::from_str(&body_a).unwrap();
    assert_eq!(json["message"], "Invalid username or password");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_update_username_and_login_with_new_name() {
    let app = common::TestApp::new().await;

    let username = unique_username("rename");
    let password = "SecurePassword123!";
    let token = app.register_and_login(&username, password).await;

    let new_username = unique_username("renamed");
    let body = json!({ "username": new_username });
    let (status, response) = app
        .post_auth("/update-username", &body.to_string(), &token)
        .await;

    assert_eq!(status, StatusCode::OK);
    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["message"], "Username updated successfully");

    // The old name no longer logs in; the new one does
    let old_login = json!({ "username": username, "password": password });
    let (status, _) = app.post("/login", &old_login.to_string()).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let new_login = json!({ "username": new_username, "password": password });
    let (status, _) = app.post("/login", &new_login.to_string()).await;
    assert_eq!(status, StatusCode::OK);

    // The pre-rename token stays valid until it expires (stale claim
    // tradeoff, preserved behavior)
    let (status, _) = app.get_auth("/my-orders", &token).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_update_username_to_taken_name_is_conflict() {
    let app = common::TestApp::new().await;

    let taken = unique_username("taken");
    app.register_and_login(&taken, "SecurePassword123!").await;

    let username = unique_username("mover");
    let token = app.register_and_login(&username, "SecurePassword123!").await;

    let body = json!({ "username": taken });
    let (status, _) = app
        .post_auth("/update-username", &body.to_string(), &token)
        .await;

    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_update_password_changes_login() {
    let app = common::TestApp::new().await;

    let username = unique_username("repass");
    let old_password = "OldPassword123!";
    let new_password = "NewPassword456!";
    let token = app.register_and_login(&username, old_password).await;

    let body = json!({ "password": new_password });
    let (status, _) = app
        .post_auth("/update-password", &body.to_string(), &token)
        .await;
    assert_eq!(status, StatusCode::OK);

    // Old password rejected, new password accepted
    let old_login = json!({ "username": username, "password": old_password });
    let (status, _) = app.post("/login", &old_login.to_string()).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let new_login = json!({ "username": username, "password": new_password });
    let (status, _) = app.post("/login", &new_login.to_string()).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_liveness_endpoint() {
    let app = common::TestApp::new().await;

    let (status, body) = app.get("/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Storefront API is running");
}
