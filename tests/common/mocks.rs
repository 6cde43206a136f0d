//! Canned backend responses.

use serde_json::{json, Value};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::TEST_TOKEN;

/// An order body with one line per `(quantity, unit_price)`.
pub fn order_json(id: &str, lines: &[(u32, f64)]) -> Value {
    let items: Vec<Value> = lines
        .iter()
        .enumerate()
        .map(|(i, (quantity, unit_price))| {
            json!({
                "id": i + 1,
                "productId": 100 + i,
                "productName": format!("Product {}", i + 1),
                "productSku": format!("SKU-{:03}", i + 1),
                "quantity": quantity,
                "unitPrice": unit_price,
            })
        })
        .collect();
    let total: f64 = lines.iter().map(|(q, p)| f64::from(*q) * p).sum();
    json!({
        "id": id,
        "customerName": format!("Customer {}", id),
        "status": "confirmed",
        "totalAmount": total,
        "createdAt": "2026-03-01T09:30:00Z",
        "items": items,
    })
}

pub fn login_response() -> Value {
    json!({
        "user": {"id": 7, "email": "ops@example.com", "firstName": "Olga", "lastName": "Petrova"},
        "token": TEST_TOKEN,
    })
}

/// `POST /api/login` accepting exactly these credentials, at most `times`.
pub async fn mount_login(server: &MockServer, email: &str, password: &str, times: u64) {
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .and(body_json(json!({"email": email, "password": password})))
        .respond_with(ResponseTemplate::new(200).set_body_json(login_response()))
        .expect(times)
        .mount(server)
        .await;
}

/// Any other login attempt is rejected.
pub async fn mount_login_rejected(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"error": "Invalid credentials"})),
        )
        .mount(server)
        .await;
}

/// `GET /api/orders/{id}` wrapped as `{"order": ...}`, requiring the token.
pub async fn mount_order(server: &MockServer, order: Value) {
    let id = order["id"].as_str().map(str::to_string).unwrap_or_default();
    Mock::given(method("GET"))
        .and(path(format!("/api/orders/{}", id)))
        .and(header("authorization", format!("Bearer {}", TEST_TOKEN).as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"order": order})))
        .mount(server)
        .await;
}

pub async fn mount_status(server: &MockServer, route: &str, status: u16, body: Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(server)
        .await;
}

/// `GET /api/orders` returning `orders` as `{"data": [...]}`.
pub async fn mount_order_list(server: &MockServer, orders: Vec<Value>) {
    Mock::given(method("GET"))
        .and(path("/api/orders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": orders})))
        .mount(server)
        .await;
}

/// `GET /api/orders?status=...`.
pub async fn mount_filtered_list(server: &MockServer, status: &str, orders: Vec<Value>) {
    Mock::given(method("GET"))
        .and(path("/api/orders"))
        .and(query_param("status", status))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(orders)))
        .with_priority(1)
        .mount(server)
        .await;
}
