//! Integration tests for the order endpoints

mod common;

use axum::http::StatusCode;
use serde_json::json;

fn unique_username(prefix: &str) -> String {
    format!("{}_{}", prefix, uuid::Uuid::new_v4().simple())
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_create_order_and_total_amount() {
    let app = common::TestApp::new().await;
    let token = app
        .register_and_login(&unique_username("total"), "SecurePassword123!")
        .await;

    let body = json!({
        "items": [
            { "name": "A", "price": 10, "quantity": 2 },
            { "name": "B", "price": 5, "quantity": 1 }
        ]
    });

    let (status, response) = app
        .post_auth("/create-order", &body.to_string(), &token)
        .await;

    assert_eq!(status, StatusCode::OK);
    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["message"], "Order created successfully");

    let (status, response) = app.get_auth("/my-orders", &token).await;
    assert_eq!(status, StatusCode::OK);

    let orders: serde_json::Value = serde_json::from_str(&response).unwrap();
    let orders = orders.as_array().unwrap();
    assert_eq!(orders.len(), 1);
    // 10 * 2 + 5 * 1 = 25, exact
    assert_eq!(orders[0]["total_amount"], "25.00");
    assert_eq!(orders[0]["status"], "Pending");
    assert_eq!(orders[0]["items"].as_array().unwrap().len(), 2);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_create_order_with_empty_items_is_bad_request() {
    let app = common::TestApp::new().await;
    let token = app
        .register_and_login(&unique_username("empty"), "SecurePassword123!")
        .await;

    let body = json!({ "items": [] });
    let (status, response) = app
        .post_auth("/create-order", &body.to_string(), &token)
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["message"], "Order items are required");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_my_orders_is_empty_for_new_user() {
    let app = common::TestApp::new().await;
    let token = app
        .register_and_login(&unique_username("fresh"), "SecurePassword123!")
        .await;

    let (status, response) = app.get_auth("/my-orders", &token).await;

    assert_eq!(status, StatusCode::OK);
    let orders: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(orders.as_array().unwrap().len(), 0);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_my_orders_newest_first() {
    let app = common::TestApp::new().await;
    let token = app
        .register_and_login(&unique_username("order"), "SecurePassword123!")
        .await;

    for name in ["first", "second", "third"] {
        let body = json!({
            "items": [{ "name": name, "price": 1, "quantity": 1 }]
        });
        let (status, _) = app
            .post_auth("/create-order", &body.to_string(), &token)
            .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, response) = app.get_auth("/my-orders", &token).await;
    assert_eq!(status, StatusCode::OK);

    let orders: serde_json::Value = serde_json::from_str(&response).unwrap();
    let orders = orders.as_array().unwrap();
    assert_eq!(orders.len(), 3);

    // Newest first
    let timestamps: Vec<chrono::DateTime<chrono::Utc>> = orders
        .iter()
        .map(|o| o["created_at"].as_str().unwrap().parse().unwrap())
        .collect();
    assert!(timestamps.windows(2).all(|pair| pair[0] >= pair[1]));

    // And the most recent order is the one created last
    assert_eq!(orders[0]["items"][0]["name"], "third");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_my_orders_only_returns_own_orders() {
    let app = common::TestApp::new().await;

    let token_a = app
        .register_and_login(&unique_username("alice"), "SecurePassword123!")
        .await;
    let token_b = app
        .register_and_login(&unique_username("bob"), "SecurePassword123!")
        .await;

    let body = json!({
        "items": [{ "name": "private", "price": 42, "quantity": 1 }]
    });
    let (status, _) = app
        .post_auth("/create-order", &body.to_string(), &token_a)
        .await;
    assert_eq!(status, StatusCode::OK);

    // Owner sees it
    let (_, response) = app.get_auth("/my-orders", &token_a).await;
    let orders: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(orders.as_array().unwrap().len(), 1);

    // The other user does not
    let (status, response) = app.get_auth("/my-orders", &token_b).await;
    assert_eq!(status, StatusCode::OK);
    let orders: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(orders.as_array().unwrap().len(), 0);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_order_total_is_exact_with_decimal_prices() {
    let app = common::TestApp::new().await;
    let token = app
        .register_and_login(&unique_username("cents"), "SecurePassword123!")
        .await;

    // 0.10 * 3 = 0.30 exactly; floats would accumulate drift here
    let body = json!({
        "items": [{ "name": "penny-candy", "price": "0.10", "quantity": 3 }]
    });
    let (status, _) = app
        .post_auth("/create-order", &body.to_string(), &token)
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, response) = app.get_auth("/my-orders", &token).await;
    let orders: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(orders.as_array().unwrap()[0]["total_amount"], "0.30");
}
