//! Order endpoints.

use super::client::ApiClient;
use crate::error::{ApiError, ApiResult};
use crate::models::{ListEnvelope, Order, OrderEnvelope, OrderStatus};

impl ApiClient {
    /// `GET /orders/{id}`.
    ///
    /// A blank id is rejected without touching the network.
    pub async fn fetch_order(&self, id: &str) -> ApiResult<Order> {
        let id = id.trim();
        if id.is_empty() {
            return Err(ApiError::validation("No order was selected."));
        }
        let path = format!("/orders/{}", urlencoding::encode(id));
        let envelope: OrderEnvelope = self.get_json(&path, &[]).await?;
        Ok(envelope.into_order())
    }

    /// `GET /orders`, optionally filtered by status.
    pub async fn list_orders(&self, status: Option<OrderStatus>) -> ApiResult<Vec<Order>> {
        let envelope: ListEnvelope<Order> = match status {
            Some(status) => self.get_json("/orders", &[("status", status.as_str())]).await?,
            None => self.get_json("/orders", &[]).await?,
        };
        Ok(envelope.into_vec())
    }
}
