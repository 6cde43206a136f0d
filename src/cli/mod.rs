//! CLI module for stockdeck.
//!
//! - Argument parsing
//! - Version display
//! - Headless probe battery
//! - Sign-in and sign-out without the TUI
//!
//! The dispatcher runs early in main(); only [`CliCommand::RunTui`] falls
//! through to the terminal UI.

pub mod args;
pub mod probe;
pub mod session;
pub mod version;

pub use args::{parse_args, ArgsError, CliArgs, CliCommand, USAGE};
pub use probe::run_probe_command;
pub use session::{run_login_command, run_logout_command};
pub use version::{handle_version_command, VERSION};

use std::process::ExitCode;

use color_eyre::Result;
use tokio::runtime::Runtime;

use crate::api::ApiClient;

/// Run a CLI command if applicable.
///
/// Returns `None` for [`CliCommand::RunTui`]. `Version` never returns.
pub fn run_cli_command(
    command: &CliCommand,
    runtime: &Runtime,
    api: &ApiClient,
) -> Option<Result<ExitCode>> {
    let mut stdout = std::io::stdout();
    let result = match command {
        CliCommand::Version => handle_version_command(),
        CliCommand::RunTui => return None,
        CliCommand::Probe { json } => runtime
            .block_on(run_probe_command(api, *json, &mut stdout))
            .map(|summary| exit_code(summary.all_passed()))
            .map_err(Into::into),
        CliCommand::Login { email } => rpassword::prompt_password(format!("Password for {}: ", email))
            .and_then(|password| {
                runtime.block_on(run_login_command(api, email, &password, &mut stdout))
            })
            .map(|outcome| exit_code(outcome.is_success()))
            .map_err(Into::into),
        CliCommand::Logout => runtime
            .block_on(run_logout_command(api, &mut stdout))
            .map(|()| ExitCode::SUCCESS)
            .map_err(Into::into),
    };
    Some(result)
}

fn exit_code(success: bool) -> ExitCode {
    if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
