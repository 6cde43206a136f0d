//! Endpoint probe battery for manual verification.
//!
//! Fires a fixed list of read-only GETs one after another and records, for
//! each, whether it answered 2xx and what the body looked like. Not part of
//! the production request path.

use std::fmt;
use std::time::Instant;

use serde::Serialize;

use super::lifetime::{Activation, ActivationId, ViewLifetime};
use crate::api::ApiClient;
use crate::error::{extract_backend_message, ApiError};
use crate::traits::Method;

/// A read-only endpoint in the battery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Probe {
    pub name: &'static str,
    pub path: &'static str,
}

/// The battery, in the order it runs.
pub const PROBES: [Probe; 4] = [
    Probe {
        name: "Products",
        path: "/products",
    },
    Probe {
        name: "Suppliers",
        path: "/suppliers",
    },
    Probe {
        name: "Orders",
        path: "/orders",
    },
    Probe {
        name: "Low-stock alerts",
        path: "/reports/alerts",
    },
];

/// Rough shape of a response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResultShape {
    Array { len: usize },
    Object { keys: Vec<String> },
    Scalar { scalar: &'static str },
    Empty,
    Unparseable,
}

/// Object keys shown before the rest are elided.
const MAX_KEYS_SHOWN: usize = 6;

impl ResultShape {
    pub fn classify(body: &[u8]) -> Self {
        if body.iter().all(u8::is_ascii_whitespace) {
            return ResultShape::Empty;
        }
        match serde_json::from_slice::<serde_json::Value>(body) {
            Ok(serde_json::Value::Array(items)) => ResultShape::Array { len: items.len() },
            Ok(serde_json::Value::Object(map)) => ResultShape::Object {
                keys: map.keys().cloned().collect(),
            },
            Ok(serde_json::Value::Null) => ResultShape::Scalar { scalar: "null" },
            Ok(serde_json::Value::Bool(_)) => ResultShape::Scalar { scalar: "boolean" },
            Ok(serde_json::Value::Number(_)) => ResultShape::Scalar { scalar: "number" },
            Ok(serde_json::Value::String(_)) => ResultShape::Scalar { scalar: "string" },
            Err(_) => ResultShape::Unparseable,
        }
    }
}

impl fmt::Display for ResultShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultShape::Array { len } => write!(f, "array[{}]", len),
            ResultShape::Object { keys } => {
                let shown: Vec<&str> = keys.iter().take(MAX_KEYS_SHOWN).map(String::as_str).collect();
                if keys.len() > MAX_KEYS_SHOWN {
                    write!(f, "object{{{}, …}}", shown.join(", "))
                } else {
                    write!(f, "object{{{}}}", shown.join(", "))
                }
            }
            ResultShape::Scalar { scalar } => write!(f, "{}", scalar),
            ResultShape::Empty => write!(f, "empty"),
            ResultShape::Unparseable => write!(f, "unparseable"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProbeResult {
    pub name: String,
    pub path: String,
    /// Status was 2xx.
    pub success: bool,
    /// Absent when the request never got an answer.
    pub status: Option<u16>,
    pub elapsed_ms: u64,
    /// Absent when the request never got an answer.
    pub shape: Option<ResultShape>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ProbeSummary {
    pub results: Vec<ProbeResult>,
    pub passed: usize,
    pub failed: usize,
}

impl ProbeSummary {
    pub fn from_results(results: Vec<ProbeResult>) -> Self {
        let passed = results.iter().filter(|r| r.success).count();
        let failed = results.len() - passed;
        Self {
            results,
            passed,
            failed,
        }
    }

    pub fn total(&self) -> usize {
        self.passed + self.failed
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0 && !self.results.is_empty()
    }
}

/// Run one probe. Never fails: every outcome is recorded in the result.
pub async fn run_probe(api: &ApiClient, probe: &Probe) -> ProbeResult {
    let started = Instant::now();
    let outcome = api.send_raw(Method::Get, probe.path, &[], None).await;
    let elapsed_ms = started.elapsed().as_millis() as u64;

    let result = match outcome {
        Ok(response) => {
            let success = response.is_success();
            let error = (!success).then(|| {
                ApiError::http_status(response.status, extract_backend_message(&response.body))
                    .message
            });
            ProbeResult {
                name: probe.name.to_string(),
                path: probe.path.to_string(),
                success,
                status: Some(response.status),
                elapsed_ms,
                shape: Some(ResultShape::classify(&response.body)),
                error,
            }
        }
        Err(e) => ProbeResult {
            name: probe.name.to_string(),
            path: probe.path.to_string(),
            success: false,
            status: None,
            elapsed_ms,
            shape: None,
            error: Some(e.user_message()),
        },
    };

    tracing::info!(
        probe = probe.name,
        success = result.success,
        status = ?result.status,
        elapsed_ms,
        "probe finished"
    );
    result
}

/// Run `probes` sequentially, each awaited before the next starts.
///
/// `on_result` sees each result as it lands. If `activation` is cancelled
/// the battery stops; the summary covers only the probes that ran.
pub async fn run_battery<F>(
    api: &ApiClient,
    probes: &[Probe],
    activation: &Activation,
    mut on_result: F,
) -> ProbeSummary
where
    F: FnMut(&ProbeResult),
{
    let mut results = Vec::with_capacity(probes.len());
    for probe in probes {
        if activation.is_cancelled() {
            break;
        }
        let result = tokio::select! {
            biased;
            _ = activation.token().cancelled() => break,
            result = run_probe(api, probe) => result,
        };
        on_result(&result);
        results.push(result);
    }
    ProbeSummary::from_results(results)
}

/// Debug screen state.
#[derive(Debug, Default)]
pub struct DebugPanel {
    pub running: bool,
    pub results: Vec<ProbeResult>,
    pub summary: Option<ProbeSummary>,
    lifetime: ViewLifetime,
}

impl DebugPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear previous results and start a new battery run.
    pub fn activate(&mut self) -> Activation {
        self.running = true;
        self.results.clear();
        self.summary = None;
        self.lifetime.activate()
    }

    pub fn deactivate(&mut self) {
        self.running = false;
        self.lifetime.deactivate();
    }

    /// Record one probe result. Returns `false` for stale activations.
    pub fn record(&mut self, activation: ActivationId, result: ProbeResult) -> bool {
        if !self.lifetime.accepts(activation) {
            return false;
        }
        self.results.push(result);
        true
    }

    /// Store the final summary. Returns `false` for stale activations.
    pub fn finish(&mut self, activation: ActivationId, summary: ProbeSummary) -> bool {
        if !self.lifetime.accepts(activation) {
            return false;
        }
        self.running = false;
        self.results = summary.results.clone();
        self.summary = Some(summary);
        true
    }

    /// Probes that have not reported yet in the current run.
    pub fn pending(&self) -> usize {
        if self.running {
            PROBES.len().saturating_sub(self.results.len())
        } else {
            0
        }
    }
}
