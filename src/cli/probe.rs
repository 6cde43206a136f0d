//! Headless probe battery (`--probe`).

use std::io::{self, Write};

use crate::api::ApiClient;
use crate::view_model::{run_battery, ProbeResult, ProbeSummary, ViewLifetime, PROBES};

/// Run the battery, streaming results to `out` as a table, or printing
/// the whole summary as JSON at the end.
pub async fn run_probe_command<W: Write>(
    api: &ApiClient,
    json: bool,
    out: &mut W,
) -> io::Result<ProbeSummary> {
    let mut lifetime = ViewLifetime::new();
    let activation = lifetime.activate();

    if !json {
        writeln!(out, "Probing {}", api.base_url())?;
    }

    let mut write_error = None;
    let summary = run_battery(api, &PROBES, &activation, |result| {
        if json || write_error.is_some() {
            return;
        }
        if let Err(e) = writeln!(out, "{}", format_row(result)) {
            write_error = Some(e);
        }
    })
    .await;
    if let Some(e) = write_error {
        return Err(e);
    }

    if json {
        serde_json::to_writer_pretty(&mut *out, &summary)?;
        writeln!(out)?;
    } else {
        writeln!(
            out,
            "{} passed, {} failed of {}",
            summary.passed,
            summary.failed,
            summary.total()
        )?;
    }
    Ok(summary)
}

fn format_row(result: &ProbeResult) -> String {
    let marker = if result.success { "ok  " } else { "FAIL" };
    let status = result
        .status
        .map(|s| s.to_string())
        .unwrap_or_else(|| "---".to_string());
    let detail = match (&result.shape, &result.error) {
        (_, Some(error)) if !result.success => error.clone(),
        (Some(shape), _) => shape.to_string(),
        (None, _) => String::new(),
    };
    format!(
        "{} {:<17} {:<16} {:>3} {:>6}ms  {}",
        marker, result.name, result.path, status, result.elapsed_ms, detail
    )
}
