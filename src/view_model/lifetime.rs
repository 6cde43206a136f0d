//! View lifetimes and activations.
//!
//! Every asynchronous page operation runs inside an [`Activation`]. When the
//! view is re-activated or left, the previous activation's token is
//! cancelled: its in-flight request is dropped and any result that still
//! arrives is recognised as stale by its id.

use std::future::Future;

use tokio_util::sync::CancellationToken;

use crate::error::{ApiError, ApiResult};

/// Monotonic per-view activation counter.
pub type ActivationId = u64;

/// One lifetime of a view.
#[derive(Debug, Clone)]
pub struct Activation {
    id: ActivationId,
    token: CancellationToken,
}

impl Activation {
    pub fn id(&self) -> ActivationId {
        self.id
    }

    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Drive `operation` until it finishes or this activation is cancelled.
    ///
    /// Cancellation wins ties: once cancelled, the result is always
    /// [`ApiError::cancelled`].
    pub async fn run<T, F>(&self, operation: F) -> ApiResult<T>
    where
        F: Future<Output = ApiResult<T>>,
    {
        tokio::select! {
            biased;
            _ = self.token.cancelled() => Err(ApiError::cancelled()),
            result = operation => {
                if self.token.is_cancelled() {
                    Err(ApiError::cancelled())
                } else {
                    result
                }
            }
        }
    }
}

/// Activations compare by id.
impl PartialEq for Activation {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

/// Tracks the current activation of a single view.
#[derive(Debug, Default)]
pub struct ViewLifetime {
    last_id: ActivationId,
    current: Option<Activation>,
}

impl ViewLifetime {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new activation, cancelling the previous one.
    pub fn activate(&mut self) -> Activation {
        self.deactivate();
        self.last_id += 1;
        let activation = Activation {
            id: self.last_id,
            token: CancellationToken::new(),
        };
        self.current = Some(activation.clone());
        activation
    }

    /// Cancel the current activation, if any.
    pub fn deactivate(&mut self) {
        if let Some(previous) = self.current.take() {
            previous.token.cancel();
        }
    }

    /// Whether a result tagged `id` belongs to the live activation.
    pub fn accepts(&self, id: ActivationId) -> bool {
        self.current
            .as_ref()
            .map(|a| a.id == id && !a.is_cancelled())
            .unwrap_or(false)
    }

    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }

    pub fn current_id(&self) -> Option<ActivationId> {
        self.current.as_ref().map(|a| a.id)
    }
}

impl Drop for ViewLifetime {
    fn drop(&mut self) {
        self.deactivate();
    }
}
