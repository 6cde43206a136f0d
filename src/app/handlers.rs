//! Message handling for the App.

use super::{App, AppMessage, NoticeLevel};
use crate::view_model::{Applied, DetailOutcome};

impl App {
    /// Handle an incoming async message.
    ///
    /// Results from activations that are no longer current are dropped by
    /// the view-models; nothing here touches a screen the user has left.
    pub fn handle_message(&mut self, msg: AppMessage) {
        self.mark_dirty();
        match msg {
            AppMessage::LoginFinished {
                activation,
                outcome,
            } => {
                if !self.login_lifetime.accepts(activation) {
                    return;
                }
                self.login_lifetime.deactivate();
                self.login = std::mem::take(&mut self.login).finish(&outcome);
                if outcome.is_success() {
                    let who = self.user_label().unwrap_or_default();
                    self.show_notice(format!("Signed in as {}", who), NoticeLevel::Info);
                    self.open_orders();
                }
            }
            AppMessage::OrdersLoaded { activation, result } => {
                match self.orders.apply(activation, result) {
                    Applied::Failed(e) if e.requires_reauth() && self.session().current().is_some() => {
                        self.session_expired();
                    }
                    Applied::Failed(e) => {
                        tracing::warn!(code = e.error_code(), "order listing failed: {}", e);
                    }
                    Applied::Loaded | Applied::Discarded => {}
                }
            }
            AppMessage::OrderLoaded { activation, result } => {
                match self.detail.apply(activation, result) {
                    DetailOutcome::Redirect { notice, error } => {
                        tracing::warn!(code = error.error_code(), "order detail failed: {}", error);
                        self.redirect_from_detail(notice, &error);
                    }
                    DetailOutcome::Loaded => {
                        if let Some(id) = self.detail.order_id().map(str::to_string) {
                            self.orders.select_id(&id);
                        }
                    }
                    DetailOutcome::Fetch { .. } | DetailOutcome::Discarded => {}
                }
            }
            AppMessage::ProbeFinished { activation, result } => {
                self.debug.record(activation, result);
            }
            AppMessage::BatteryFinished {
                activation,
                summary,
            } => {
                let (passed, total) = (summary.passed, summary.total());
                if self.debug.finish(activation, summary) {
                    let level = if passed == total {
                        NoticeLevel::Info
                    } else {
                        NoticeLevel::Error
                    };
                    self.show_notice(format!("{}/{} probes passed", passed, total), level);
                }
            }
        }
    }
}
