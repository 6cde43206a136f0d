//! Order detail screen state.

use super::fetch_state::FetchState;
use super::lifetime::{Activation, ActivationId, ViewLifetime};
use crate::api::ApiClient;
use crate::error::{ApiError, ApiResult};
use crate::models::{Order, OrderStatus};

/// One rendered line of an order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLine {
    pub product_name: String,
    pub product_sku: String,
    pub quantity: u32,
    pub unit_price: f64,
    /// `quantity × unit_price`
    pub line_total: f64,
}

/// A loaded order with its computed lines.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDetailData {
    pub order: Order,
    pub lines: Vec<OrderLine>,
}

impl OrderDetailData {
    pub fn from_order(order: Order) -> Self {
        let lines = order
            .items
            .iter()
            .map(|item| OrderLine {
                product_name: item.product_name.clone(),
                product_sku: item.product_sku.clone(),
                quantity: item.quantity,
                unit_price: item.unit_price,
                line_total: item.line_total(),
            })
            .collect();
        Self { order, lines }
    }

    /// Sum of the computed line totals.
    pub fn lines_total(&self) -> f64 {
        self.lines.iter().map(|l| l.line_total).sum()
    }

    /// The backend's total disagrees with the lines by more than a cent.
    pub fn total_mismatch(&self) -> bool {
        !self.lines.is_empty() && (self.lines_total() - self.order.total_amount).abs() >= 0.01
    }

    pub fn status(&self) -> OrderStatus {
        self.order.status
    }
}

/// How the screen should react after an activation or a result.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailOutcome {
    /// A request for `order_id` must be issued within the activation.
    Fetch { activation: Activation, order_id: String },
    /// A stale result was dropped.
    Discarded,
    Loaded,
    /// Show `notice` and navigate back to the listing.
    Redirect { notice: String, error: ApiError },
}

#[derive(Debug, Default)]
pub struct OrderDetail {
    order_id: Option<String>,
    pub state: FetchState<OrderDetailData>,
    lifetime: ViewLifetime,
}

impl OrderDetail {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn order_id(&self) -> Option<&str> {
        self.order_id.as_deref()
    }

    /// Activate for `order_id`, discarding everything from a previous order.
    ///
    /// A blank id fails validation immediately without a request.
    pub fn activate(&mut self, order_id: &str) -> DetailOutcome {
        let activation = self.lifetime.activate();
        self.state = FetchState::Loading;

        let order_id = order_id.trim();
        if order_id.is_empty() {
            self.order_id = None;
            return self.fail(ApiError::validation("No order was selected."));
        }

        self.order_id = Some(order_id.to_string());
        DetailOutcome::Fetch {
            activation,
            order_id: order_id.to_string(),
        }
    }

    pub fn deactivate(&mut self) {
        self.lifetime.deactivate();
    }

    /// Fetch `order_id` within `activation`.
    pub async fn load(
        api: &ApiClient,
        activation: &Activation,
        order_id: &str,
    ) -> ApiResult<Order> {
        activation.run(api.fetch_order(order_id)).await
    }

    pub fn apply(&mut self, activation: ActivationId, result: ApiResult<Order>) -> DetailOutcome {
        if !self.lifetime.accepts(activation) {
            return DetailOutcome::Discarded;
        }
        match result {
            Ok(order) => {
                self.state = FetchState::Success(OrderDetailData::from_order(order));
                DetailOutcome::Loaded
            }
            Err(e) => self.fail(e),
        }
    }

    fn fail(&mut self, error: ApiError) -> DetailOutcome {
        let notice = match &self.order_id {
            Some(id) if error.is_not_found() => format!("Order {} was not found.", id),
            Some(id) => format!("Could not load order {}: {}", id, error.user_message()),
            None => error.user_message(),
        };
        self.state = FetchState::Error(notice.clone());
        self.lifetime.deactivate();
        DetailOutcome::Redirect { notice, error }
    }

    pub fn data(&self) -> Option<&OrderDetailData> {
        self.state.data()
    }
}
