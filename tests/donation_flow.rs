//! End-to-end donation workflow against a live server. Run with
//! `cargo test -- --ignored` while the app listens on `FOODSHARE_URL`
//! (default `http://localhost:8000`).

use base64::prelude::*;
use reqwest::{multipart, Client, Response, StatusCode};
use serde_json::{json, Value};

fn base_url() -> String {
    std::env::var("FOODSHARE_URL").unwrap_or_else(|_| "http://localhost:8000".to_string())
}

fn url(path: &str) -> String {
    format!("{}{}", base_url(), path)
}

fn unique(prefix: &str) -> String {
    format!("{}_{}", prefix, ulid::Ulid::new().to_string().to_lowercase())
}

/// A signed-in user whose client carries the session cookie.
struct Member {
    client: Client,
    username: String,
}

impl Member {
    async fn sign_up(prefix: &str, role: &str, address: &str) -> Self {
        let client = Client::builder().cookie_store(true).build().unwrap();
        let username = unique(prefix);

        let response = client
            .post(url("/api/auth/sign-up"))
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

        let response = client
            .post(url("/api/auth/sign-in"))
            .json(&json!({ "username": username, "password": "correct-horse" }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        Self { client, username }
    }

    async fn get(&self, path: &str) -> Response {
        self.client.get(url(path)).send().await.unwrap()
    }

    async fn get_json(&self, path: &str) -> Value {
        let response = self.get(path).await;
        assert_eq!(response.status(), StatusCode::OK, "GET {path}");
        response.json().await.unwrap()
    }

    /// Id of the role record shown under `key` on a dashboard.
    async fn record_id(&self, dashboard: &str, key: &str) -> String {
        self.get_json(dashboard).await[key]["id"]
            .as_str()
            .unwrap()
            .to_string()
    }

    async fn post_json(&self, path: &str, body: Value) -> Response {
        self.client.post(url(path)).json(&body).send().await.unwrap()
    }

    async fn deliver(&self, donation_id: &str, photo: Vec<u8>) -> Response {
        let proof = multipart::Part::bytes(photo)
            .file_name("proof.jpg")
            .mime_str("image/jpeg")
            .unwrap();
        let form = multipart::Form::new()
            .part("proof", proof)
            .text("feedback", "Handed over at the shelter kitchen");

        self.client
            .post(url(&format!("/api/donations/{donation_id}/deliver")))
            .multipart(form)
            .send()
            .await
            .unwrap()
    }

    async fn delete(&self, path: &str) -> Response {
        self.client.delete(url(path)).send().await.unwrap()
    }
}

fn ids(donations: &Value) -> Vec<String> {
    donations
        .as_array()
        .unwrap()
        .iter()
        .map(|donation| donation["id"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
#[ignore]
async fn donation_moves_from_restaurant_to_ngo_to_volunteer() {
    let area = unique("area");
    let other_area = unique("area");
    let preference = unique("pref");

    let restaurant = Member::sign_up("bowl", "restaurant", &area).await;
    let ngo = Member::sign_up("feed", &format!("ngo - {preference}"), &area).await;
    let other_ngo = Member::sign_up("feed", "ngo - Something else", &area).await;
    let volunteer = Member::sign_up("asha", "volunteer", &format!("{area}, {other_area}")).await;
    let far_volunteer = Member::sign_up("ravi", "volunteer", &other_area).await;

    let ngo_id = ngo.record_id("/api/dashboard/ngo", "ngo").await;
    let volunteer_id = volunteer
        .record_id("/api/dashboard/volunteer", "volunteer")
        .await;
    let far_volunteer_id = far_volunteer
        .record_id("/api/dashboard/volunteer", "volunteer")
        .await;

    // one donation to carry through, one to cancel
    let mut created = Vec::new();
    for description in ["Vegetable curry", "Rice and dal"] {
        let response = restaurant
            .post_json(
                "/api/donations",
                json!({
                    "description": description,
                    "quantity": 20,
                    "preference": preference,
                    "expiry_date": "2030-01-01",
                }),
            )
            .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let body = response.json::<Value>().await.unwrap();
        created.push(body["donation"]["id"].as_str().unwrap().to_string());
    }
    let (donation_id, spare_id) = (created[0].clone(), created[1].clone());

    let dashboard = ngo.get_json("/api/dashboard/ngo").await;
    assert!(ids(&dashboard["available"]).contains(&donation_id));
    assert!(ids(&dashboard["past"]).is_empty());

    let dashboard = other_ngo.get_json("/api/dashboard/ngo").await;
    assert!(!ids(&dashboard["available"]).contains(&donation_id));

    assert_eq!(
        restaurant.delete(&format!("/api/donations/{spare_id}")).await.status(),
        StatusCode::OK
    );
    assert_eq!(
        restaurant.delete(&format!("/api/donations/{spare_id}")).await.status(),
        StatusCode::NOT_FOUND
    );

    let volunteers_path = format!("/api/donations/{donation_id}/volunteers");
    assert_eq!(
        other_ngo.get(&volunteers_path).await.status(),
        StatusCode::FORBIDDEN
    );
    let covering = ngo.get_json(&volunteers_path).await;
    let covering_ids = ids(&covering["volunteers"]);
    assert!(covering_ids.contains(&volunteer_id));
    assert!(!covering_ids.contains(&far_volunteer_id));

    let accept_path = format!("/api/donations/{donation_id}/accept");
    for (member, candidate, expected) in [
        (&other_ngo, volunteer_id.as_str(), StatusCode::FORBIDDEN),
        (&ngo, "01J0000000000000000000000", StatusCode::NOT_FOUND),
        (&ngo, far_volunteer_id.as_str(), StatusCode::BAD_REQUEST),
        (&restaurant, volunteer_id.as_str(), StatusCode::FORBIDDEN),
    ] {
        let response = member
            .post_json(&accept_path, json!({ "volunteer_id": candidate }))
            .await;
        assert_eq!(response.status(), expected, "accept by {}", member.username);
    }

    let response = ngo
        .post_json(&accept_path, json!({ "volunteer_id": volunteer_id }))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let accepted = response.json::<Value>().await.unwrap();
    assert_eq!(accepted["donation"]["status"], "ACCEPTED");
    assert_eq!(accepted["donation"]["ngo_id"], ngo_id.as_str());
    assert_eq!(accepted["donation"]["volunteer_id"], volunteer_id.as_str());

    let response = ngo
        .post_json(&accept_path, json!({ "volunteer_id": volunteer_id }))
        .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(
        restaurant.delete(&format!("/api/donations/{donation_id}")).await.status(),
        StatusCode::CONFLICT
    );

    let dashboard = volunteer.get_json("/api/dashboard/volunteer").await;
    assert_eq!(ids(&dashboard["active"]), vec![donation_id.clone()]);
    assert!(ids(&dashboard["past"]).is_empty());

    let proof_path = format!("/api/donations/{donation_id}/proof");
    assert_eq!(restaurant.get(&proof_path).await.status(), StatusCode::NOT_FOUND);

    let photo = vec![0xff, 0xd8, 0xff, 0xe0, 1, 2, 3, 4];
    assert_eq!(
        far_volunteer.deliver(&donation_id, photo.clone()).await.status(),
        StatusCode::FORBIDDEN
    );
    let response = volunteer.deliver(&donation_id, photo.clone()).await;
    assert_eq!(response.status(), StatusCode::OK);
    let delivered = response.json::<Value>().await.unwrap();
    assert_eq!(delivered["donation"]["status"], "DELIVERED");
    assert_eq!(delivered["donation"]["ngo_id"], ngo_id.as_str());
    assert_eq!(
        volunteer.deliver(&donation_id, photo.clone()).await.status(),
        StatusCode::CONFLICT
    );

    for member in [&restaurant, &ngo, &volunteer] {
        let proof = member.get_json(&proof_path).await;
        assert_eq!(proof["content_type"], "image/jpeg");
        assert_eq!(proof["photo"], BASE64_STANDARD.encode(&photo));
    }
    for member in [&other_ngo, &far_volunteer] {
        assert_eq!(member.get(&proof_path).await.status(), StatusCode::FORBIDDEN);
    }

    let dashboard = volunteer.get_json("/api/dashboard/volunteer").await;
    assert!(ids(&dashboard["active"]).is_empty());
    assert_eq!(ids(&dashboard["past"]), vec![donation_id.clone()]);

    let dashboard = ngo.get_json("/api/dashboard/ngo").await;
    assert!(ids(&dashboard["available"]).is_empty());
    assert_eq!(ids(&dashboard["past"]), vec![donation_id.clone()]);
    assert_eq!(dashboard["past"][0]["volunteer_name"], volunteer.username.as_str());

    let dashboard = restaurant.get_json("/api/dashboard/restaurant").await;
    assert_eq!(ids(&dashboard["donations"]), vec![donation_id.clone()]);
    assert_eq!(dashboard["donations"][0]["status"], "DELIVERED");

    for (member, total) in [(&restaurant, 1), (&ngo, 1), (&volunteer, 1), (&far_volunteer, 0)] {
        let profile = member.get_json("/api/profile").await;
        assert_eq!(profile["total_donations"], total, "{}", member.username);
    }

    let public = restaurant.get_json(&format!("/api/profile/ngo/{ngo_id}")).await;
    assert_eq!(public["username"], ngo.username.as_str());
    assert_eq!(public["total_donations"], 1);
    assert!(public.get("email").is_none());
}

#[tokio::test]
#[ignore]
async fn blank_fields_are_rejected() {
    let client = Client::new();
    let username = unique("blank");

    let response = client
        .post(url("/api/auth/sign-up"))
        .json(&json!({
            "username": username,
            "email": format!("{}@example.com", username),
            "password": "correct-horse",
            "role": "volunteer",
            "address": "   ",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let restaurant = Member::sign_up("bowl", "restaurant", &unique("area")).await;
    let response = restaurant
        .post_json(
            "/api/donations",
            json!({
                "description": "  ",
                "quantity": 5,
                "preference": " ",
                "expiry_date": "2030-01-01",
            }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
