//! Order listing screen state.

use super::fetch_state::FetchState;
use super::lifetime::{Activation, ActivationId, ViewLifetime};
use crate::api::ApiClient;
use crate::error::{ApiError, ApiResult};
use crate::models::{Order, OrderStatus};

/// What happened when a result was handed to a view-model.
#[derive(Debug, Clone, PartialEq)]
pub enum Applied {
    /// The result belonged to a stale activation and was dropped.
    Discarded,
    Loaded,
    Failed(ApiError),
}

#[derive(Debug, Default)]
pub struct OrderList {
    pub state: FetchState<Vec<Order>>,
    pub selected: usize,
    pub filter: Option<OrderStatus>,
    lifetime: ViewLifetime,
}

impl OrderList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset to loading and start a new activation.
    pub fn activate(&mut self) -> Activation {
        self.state = FetchState::Loading;
        self.lifetime.activate()
    }

    pub fn deactivate(&mut self) {
        self.lifetime.deactivate();
    }

    /// Fetch the listing for the current filter within `activation`.
    pub async fn load(
        api: &ApiClient,
        activation: &Activation,
        filter: Option<OrderStatus>,
    ) -> ApiResult<Vec<Order>> {
        activation.run(api.list_orders(filter)).await
    }

    pub fn apply(&mut self, activation: ActivationId, result: ApiResult<Vec<Order>>) -> Applied {
        if !self.lifetime.accepts(activation) {
            return Applied::Discarded;
        }
        match result {
            Ok(orders) => {
                self.selected = self.selected.min(orders.len().saturating_sub(1));
                self.state = FetchState::Success(orders);
                Applied::Loaded
            }
            Err(e) => {
                self.state = FetchState::Error(e.user_message());
                Applied::Failed(e)
            }
        }
    }

    /// Advance the status filter: all, then each status in order, then all.
    pub fn cycle_filter(&mut self) -> Option<OrderStatus> {
        self.filter = match self.filter {
            None => Some(OrderStatus::ALL[0]),
            Some(current) => OrderStatus::ALL
                .iter()
                .position(|s| *s == current)
                .and_then(|i| OrderStatus::ALL.get(i + 1))
                .copied(),
        };
        self.selected = 0;
        self.filter
    }

    pub fn filter_label(&self) -> &'static str {
        self.filter.map(|s| s.label()).unwrap_or("All")
    }

    pub fn orders(&self) -> &[Order] {
        self.state.data().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn selected_order(&self) -> Option<&Order> {
        self.orders().get(self.selected)
    }

    pub fn select_next(&mut self) {
        let len = self.orders().len();
        if len > 0 {
            self.selected = (self.selected + 1).min(len - 1);
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Id of the order `offset` places away from `id` in the loaded list.
    pub fn neighbor_id(&self, id: &str, offset: isize) -> Option<String> {
        let orders = self.orders();
        let index = orders.iter().position(|o| o.id == id)?;
        let target = index.checked_add_signed(offset)?;
        orders.get(target).map(|o| o.id.clone())
    }

    /// Move the cursor onto `id` if it is in the list.
    pub fn select_id(&mut self, id: &str) {
        if let Some(index) = self.orders().iter().position(|o| o.id == id) {
            self.selected = index;
        }
    }
}
