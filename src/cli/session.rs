//! `--login` and `--logout`.

use std::io::{self, Write};

use crate::api::ApiClient;
use crate::session::LoginOutcome;

/// Sign in with `email`/`password` and report the outcome on `out`.
pub async fn run_login_command<W: Write>(
    api: &ApiClient,
    email: &str,
    password: &str,
    out: &mut W,
) -> io::Result<LoginOutcome> {
    let outcome = api.session().login(api, email, password).await;
    match &outcome {
        LoginOutcome::Success => {
            let who = api
                .session()
                .current()
                .map(|s| s.user.display_name())
                .unwrap_or_else(|| email.to_string());
            writeln!(out, "Signed in as {}", who)?;
        }
        LoginOutcome::Failure { error } => writeln!(out, "Sign-in failed: {}", error)?,
    }
    Ok(outcome)
}

/// Clear the stored session.
pub async fn run_logout_command<W: Write>(api: &ApiClient, out: &mut W) -> io::Result<()> {
    let had_session = api.session().current().is_some();
    api.session().logout().await;
    if had_session {
        writeln!(out, "Signed out.")
    } else {
        writeln!(out, "No session was stored.")
    }
}
