//! Response envelopes.
//!
//! The backend returns single resources and lists either bare or wrapped in
//! an object. These untagged enums accept both.

use serde::Deserialize;

use super::Order;

/// `GET /orders/{id}` body: a bare order or `{"order": {...}}` / `{"data": {...}}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OrderEnvelope {
    Wrapped {
        #[serde(alias = "data")]
        order: Order,
    },
    Bare(Order),
}

impl OrderEnvelope {
    pub fn into_order(self) -> Order {
        match self {
            OrderEnvelope::Wrapped { order } => order,
            OrderEnvelope::Bare(order) => order,
        }
    }
}

/// List body: a bare array or `{"data": [...]}` / `{"orders": [...]}` / `{"items": [...]}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListEnvelope<T> {
    Bare(Vec<T>),
    Wrapped {
        #[serde(alias = "orders", alias = "items", alias = "results")]
        data: Vec<T>,
    },
}

impl<T> ListEnvelope<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            ListEnvelope::Bare(items) => items,
            ListEnvelope::Wrapped { data } => data,
        }
    }
}
