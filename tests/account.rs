//! Runs against a live server: `cargo test -- --ignored` with the app listening
//! on `FOODSHARE_URL` (default `http://localhost:8000`).

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::{json, Value};

#[derive(Deserialize)]
struct SignInResponse {
    token: String,
    dashboard: String,
}

fn base_url() -> String {
    std::env::var("FOODSHARE_URL").unwrap_or_else(|_| "http://localhost:8000".to_string())
}

fn unique(prefix: &str) -> String {
    format!("{}_{}", prefix, ulid::Ulid::new().to_string().to_lowercase())
}

async fn sign_up(client: &Client, username: &str, role: &str, address: &str) {
    let response = client
        .post(format!("{}/api/auth/sign-up", base_url()))
        .json(&json!({
            "username": username,
            "email": format!("{}@example.com", username),
            "password": "correct-horse",
            "role": role,
            "address": address,
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
}

async fn sign_in(client: &Client, username: &str) -> SignInResponse {
    let response = client
        .post(format!("{}/api/auth/sign-in", base_url()))
        .json(&json!({ "username": username, "password": "correct-horse" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    response.json::<SignInResponse>().await.unwrap()
}

#[tokio::test]
#[ignore]
async fn restaurant_can_sign_up_and_donate() {
    let client = Client::builder().cookie_store(true).build().unwrap();
    let username = unique("bowl");

    sign_up(&client, &username, "restaurant", "Indiranagar").await;
    let session = sign_in(&client, &username).await;
    assert_eq!(session.dashboard, "/api/dashboard/restaurant");

    let response = client
        .post(format!("{}/api/donations", base_url()))
        .json(&json!({
            "description": "Vegetable curry",
            "quantity": 20,
            "preference": "Vegetarian",
            "expiry_date": "2030-01-01",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = response.json::<Value>().await.unwrap();
    assert_eq!(created["donation"]["status"], "PENDING");

    let dashboard = client
        .get(format!("{}/api/dashboard/restaurant", base_url()))
        .bearer_auth(&session.token)
        .send()
        .await
        .unwrap()
        .json::<Value>()
        .await
        .unwrap();
    assert_eq!(dashboard["donations"].as_array().map(Vec::len), Some(1));
}

#[tokio::test]
#[ignore]
async fn duplicate_username_is_rejected() {
    let client = Client::new();
    let username = unique("feed");

    sign_up(&client, &username, "ngo - Vegetarian", "Indiranagar").await;

    let response = client
        .post(format!("{}/api/auth/sign-up", base_url()))
        .json(&json!({
            "username": username,
            "email": "someone-else@example.com",
            "password": "correct-horse",
            "role": "volunteer",
            "address": "Indiranagar",
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
}
