//! AppMessage enum for async communication within the application.

use crate::error::ApiResult;
use crate::models::Order;
use crate::session::LoginOutcome;
use crate::view_model::{ActivationId, ProbeResult, ProbeSummary};

/// Results of background tasks, each tagged with the activation that
/// started it so stale results can be dropped.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// A login attempt finished
    LoginFinished {
        activation: ActivationId,
        outcome: LoginOutcome,
    },
    /// The order listing finished loading
    OrdersLoaded {
        activation: ActivationId,
        result: ApiResult<Vec<Order>>,
    },
    /// A single order finished loading
    OrderLoaded {
        activation: ActivationId,
        result: ApiResult<Order>,
    },
    /// One probe of the debug battery finished
    ProbeFinished {
        activation: ActivationId,
        result: ProbeResult,
    },
    /// The whole debug battery finished
    BatteryFinished {
        activation: ActivationId,
        summary: ProbeSummary,
    },
}
