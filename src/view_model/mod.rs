//! Per-screen state containers.
//!
//! Each view-model owns its state exclusively. Screens fetch on activation:
//! activating resets to [`FetchState::Loading`] and hands back an
//! [`Activation`] the caller runs the request in; the result is applied with
//! the activation's id so stale answers are dropped.

pub mod debug_panel;
pub mod fetch_state;
pub mod lifetime;
pub mod login_form;
pub mod order_detail;
pub mod order_list;

pub use debug_panel::{run_battery, run_probe, DebugPanel, Probe, ProbeResult, ProbeSummary, ResultShape, PROBES};
pub use fetch_state::FetchState;
pub use lifetime::{Activation, ActivationId, ViewLifetime};
pub use login_form::{FormInput, LoginField, LoginForm};
pub use order_detail::{DetailOutcome, OrderDetail, OrderDetailData, OrderLine};
pub use order_list::{Applied, OrderList};
