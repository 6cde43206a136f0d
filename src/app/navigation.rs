//! Navigation methods for the App.
//!
//! Each screen change deactivates the views being left, so their pending
//! requests are cancelled before the next screen starts its own.

use std::sync::Arc;

use super::{App, AppMessage, NoticeLevel, Screen};
use crate::error::ApiError;
use crate::view_model::{run_battery, DetailOutcome, LoginForm, OrderDetail, OrderList, PROBES};

/// Notice shown when the backend rejects the stored token.
pub const SESSION_EXPIRED: &str = "Your session has expired. Please sign in again.";

impl App {
    /// Show the first screen: the listing when signed in, login otherwise.
    pub fn start(&mut self) {
        if self.session().is_authenticated() {
            self.open_orders();
        } else {
            if let Some(session) = self.session().current() {
                self.login = LoginForm::with_email(session.user.email.clone());
            }
            self.show_login();
        }
    }

    /// Switch to the login screen, keeping a previously typed email.
    pub fn show_login(&mut self) {
        self.deactivate_views();
        self.login_lifetime.deactivate();
        let email = std::mem::take(&mut self.login.email);
        self.login = if email.is_empty() {
            LoginForm::new()
        } else {
            LoginForm::with_email(email)
        };
        self.screen = Screen::Login;
        self.mark_dirty();
    }

    /// Validate the form and send the login request.
    pub fn submit_login(&mut self) {
        self.login = std::mem::take(&mut self.login).begin_submit();
        self.mark_dirty();
        if !self.login.submitting {
            return;
        }

        let activation = self.login_lifetime.activate();
        let api = self.api.clone();
        let email = self.login.email.clone();
        let password = self.login.password.clone();
        tracing::info!(email = %email.trim(), "submitting login");

        self.spawn_task(async move {
            let session = Arc::clone(api.session());
            let outcome = activation
                .run(async { Ok(session.login(&api, &email, &password).await) })
                .await
                .ok()?;
            Some(AppMessage::LoginFinished {
                activation: activation.id(),
                outcome,
            })
        });
    }

    /// Switch to the order listing and load it.
    pub fn open_orders(&mut self) {
        self.deactivate_views();
        self.screen = Screen::Orders;
        self.reload_orders();
    }

    /// Re-fetch the listing with the current filter.
    pub fn reload_orders(&mut self) {
        let activation = self.orders.activate();
        let filter = self.orders.filter;
        let api = self.api.clone();
        self.mark_dirty();

        self.spawn_task(async move {
            let result = OrderList::load(&api, &activation, filter).await;
            if result.as_ref().is_err_and(ApiError::is_cancelled) {
                return None;
            }
            Some(AppMessage::OrdersLoaded {
                activation: activation.id(),
                result,
            })
        });
    }

    pub fn cycle_order_filter(&mut self) {
        let filter = self.orders.cycle_filter();
        tracing::debug!(filter = ?filter, "order filter changed");
        self.reload_orders();
    }

    pub fn open_selected_order(&mut self) {
        if let Some(id) = self.orders.selected_order().map(|o| o.id.clone()) {
            self.open_order(&id);
        }
    }

    /// Show the detail screen for `order_id`, replacing whatever it showed.
    pub fn open_order(&mut self, order_id: &str) {
        self.deactivate_views();
        self.screen = Screen::OrderDetail;
        self.mark_dirty();

        match self.detail.activate(order_id) {
            DetailOutcome::Fetch {
                activation,
                order_id,
            } => {
                let api = self.api.clone();
                self.spawn_task(async move {
                    let result = OrderDetail::load(&api, &activation, &order_id).await;
                    if result.as_ref().is_err_and(ApiError::is_cancelled) {
                        return None;
                    }
                    Some(AppMessage::OrderLoaded {
                        activation: activation.id(),
                        result,
                    })
                });
            }
            DetailOutcome::Redirect { notice, error } => self.redirect_from_detail(notice, &error),
            DetailOutcome::Discarded | DetailOutcome::Loaded => {}
        }
    }

    /// Move to the previous (`-1`) or next (`1`) order of the listing.
    pub fn open_adjacent_order(&mut self, offset: isize) {
        let Some(current) = self.detail.order_id().map(str::to_string) else {
            return;
        };
        match self.orders.neighbor_id(&current, offset) {
            Some(next) => {
                self.orders.select_id(&next);
                self.open_order(&next);
            }
            None => {
                let edge = if offset > 0 { "last" } else { "first" };
                self.show_notice(format!("Already at the {} order.", edge), NoticeLevel::Info);
            }
        }
    }

    pub fn reload_order(&mut self) {
        if let Some(id) = self.detail.order_id().map(str::to_string) {
            self.open_order(&id);
        }
    }

    /// Switch to the API probe panel and run the battery.
    pub fn open_debug(&mut self) {
        self.deactivate_views();
        self.screen = Screen::Debug;
        self.run_probes();
    }

    /// Run every probe in order. Results stream in one message per probe.
    pub fn run_probes(&mut self) {
        let activation = self.debug.activate();
        let api = self.api.clone();
        let tx = self.message_tx.clone();
        self.mark_dirty();

        self.spawn_task(async move {
            let id = activation.id();
            let summary = run_battery(&api, &PROBES, &activation, |result| {
                let _ = tx.send(AppMessage::ProbeFinished {
                    activation: id,
                    result: result.clone(),
                });
            })
            .await;
            if activation.is_cancelled() {
                return None;
            }
            Some(AppMessage::BatteryFinished {
                activation: id,
                summary,
            })
        });
    }

    /// Leave the detail or debug screen for the listing.
    pub fn go_back(&mut self) {
        match self.screen {
            Screen::OrderDetail | Screen::Debug => self.open_orders(),
            Screen::Orders | Screen::Login => {}
        }
    }

    /// Sign out and return to the login screen.
    pub fn logout(&mut self) {
        self.end_session();
        self.show_notice("Signed out.", NoticeLevel::Info);
    }

    /// The backend rejected our token: drop it and ask for credentials.
    pub fn session_expired(&mut self) {
        tracing::info!("session rejected by backend");
        self.end_session();
        self.show_notice(SESSION_EXPIRED, NoticeLevel::Error);
    }

    fn end_session(&mut self) {
        let session = Arc::clone(self.session());
        if let Some(previous) = session.forget() {
            tracing::info!(user = %previous.user.email, "signed out");
            self.login.email = previous.user.email.clone();
        }
        tokio::spawn(async move { session.clear_storage().await });
        self.show_login();
    }

    /// Detail failures go back to the listing with a notice; rejected
    /// tokens go to login instead.
    pub(super) fn redirect_from_detail(&mut self, notice: String, error: &ApiError) {
        if error.requires_reauth() && self.session().current().is_some() {
            self.session_expired();
            return;
        }
        self.show_notice(notice, NoticeLevel::Error);
        self.open_orders();
    }

    fn deactivate_views(&mut self) {
        self.orders.deactivate();
        self.detail.deactivate();
        self.debug.deactivate();
    }
}
