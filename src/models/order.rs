use serde::{Deserialize, Serialize};

use super::{deserialize_amount, deserialize_id, deserialize_quantity, deserialize_text};

/// Lifecycle status of an order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Confirmed,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    /// Wire value, also used as the `status` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Confirmed => "Confirmed",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A single line of an order. Owned by its [`Order`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(deserialize_with = "deserialize_id")]
    pub product_id: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub product_name: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub product_sku: String,
    #[serde(deserialize_with = "deserialize_quantity")]
    pub quantity: u32,
    #[serde(deserialize_with = "deserialize_amount")]
    pub unit_price: f64,
}

impl OrderItem {
    /// Quantity times unit price.
    pub fn line_total(&self) -> f64 {
        f64::from(self.quantity) * self.unit_price
    }
}

/// An order as returned by `GET /orders/{id}` and `GET /orders`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub customer_name: String,
    pub status: OrderStatus,
    #[serde(deserialize_with = "deserialize_amount")]
    pub total_amount: f64,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub created_at: String,
    /// List endpoints usually omit items.
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

impl Order {
    /// Creation time rendered for display, or the raw value when the backend
    /// sent something that is not RFC 3339.
    pub fn created_at_display(&self) -> String {
        match chrono::DateTime::parse_from_rfc3339(&self.created_at) {
            Ok(ts) => ts
                .with_timezone(&chrono::Utc)
                .format("%Y-%m-%d %H:%M UTC")
                .to_string(),
            Err(_) => self.created_at.clone(),
        }
    }

    /// Units across all lines.
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }
}
