//! Command-line argument parsing.
//!
//! Flags are parsed by hand; there are few of them and none nest.

use thiserror::Error;

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Run the endpoint probe battery without the TUI
    Probe { json: bool },
    /// Sign in from the command line; the password is prompted for
    Login { email: String },
    /// Clear the stored session
    Logout,
    /// Run the TUI application (default)
    RunTui,
}

/// Everything parsed from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub command: CliCommand,
    /// Overrides `STOCKDECK_API_URL`
    pub api_url: Option<String>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgsError {
    #[error("{0} requires a value")]
    MissingValue(&'static str),
    #[error("unknown argument: {0}")]
    Unknown(String),
}

pub const USAGE: &str = "\
usage: stockdeck [--api-url <url>] [--probe [--json] | --login <email> | --logout | --version]";

/// Parse command-line arguments, skipping the program name.
///
/// `--version` wins over everything else. Of the other commands the last
/// one given applies.
///
/// ```
/// use stockdeck::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["stockdeck".to_string(), "--probe".to_string()];
/// assert_eq!(parse_args(args).unwrap().command, CliCommand::Probe { json: false });
/// ```
pub fn parse_args<I>(args: I) -> Result<CliArgs, ArgsError>
where
    I: IntoIterator<Item = String>,
{
    let mut command = CliCommand::RunTui;
    let mut api_url = None;
    let mut json = false;
    let mut version = false;

    let mut args = args.into_iter().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => version = true,
            "--probe" => command = CliCommand::Probe { json: false },
            "--json" => json = true,
            "--logout" => command = CliCommand::Logout,
            "--login" => {
                let email = args.next().ok_or(ArgsError::MissingValue("--login"))?;
                command = CliCommand::Login { email };
            }
            "--api-url" => {
                api_url = Some(args.next().ok_or(ArgsError::MissingValue("--api-url"))?);
            }
            other => {
                if let Some(url) = other.strip_prefix("--api-url=") {
                    api_url = Some(url.to_string());
                } else if let Some(email) = other.strip_prefix("--login=") {
                    command = CliCommand::Login {
                        email: email.to_string(),
                    };
                } else {
                    return Err(ArgsError::Unknown(other.to_string()));
                }
            }
        }
    }

    if version {
        command = CliCommand::Version;
    } else if let CliCommand::Probe { json: ref mut j } = command {
        *j = json;
    }
    Ok(CliArgs { command, api_url })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliArgs, ArgsError> {
        parse_args(
            std::iter::once("stockdeck")
                .chain(args.iter().copied())
                .map(String::from),
        )
    }

    #[test]
    fn test_parse_no_args() {
        let parsed = parse(&[]).unwrap();
        assert_eq!(parsed.command, CliCommand::RunTui);
        assert_eq!(parsed.api_url, None);
    }

    #[test]
    fn test_parse_version_flags() {
        assert_eq!(parse(&["--version"]).unwrap().command, CliCommand::Version);
        assert_eq!(parse(&["-V"]).unwrap().command, CliCommand::Version);
        assert_eq!(parse(&["--probe", "-V"]).unwrap().command, CliCommand::Version);
    }

    #[test]
    fn test_parse_probe_json_in_any_order() {
        assert_eq!(
            parse(&["--probe", "--json"]).unwrap().command,
            CliCommand::Probe { json: true }
        );
        assert_eq!(
            parse(&["--json", "--probe"]).unwrap().command,
            CliCommand::Probe { json: true }
        );
    }

    #[test]
    fn test_parse_login() {
        assert_eq!(
            parse(&["--login", "ops@example.com"]).unwrap().command,
            CliCommand::Login {
                email: "ops@example.com".to_string()
            }
        );
        assert_eq!(
            parse(&["--login=ops@example.com"]).unwrap().command,
            CliCommand::Login {
                email: "ops@example.com".to_string()
            }
        );
        assert_eq!(parse(&["--login"]), Err(ArgsError::MissingValue("--login")));
    }

    #[test]
    fn test_parse_api_url() {
        let parsed = parse(&["--api-url", "http://h:1/api", "--logout"]).unwrap();
        assert_eq!(parsed.api_url.as_deref(), Some("http://h:1/api"));
        assert_eq!(parsed.command, CliCommand::Logout);

        let parsed = parse(&["--api-url=http://x/api"]).unwrap();
        assert_eq!(parsed.api_url.as_deref(), Some("http://x/api"));
    }

    #[test]
    fn test_parse_unknown_flag() {
        assert_eq!(
            parse(&["--unknown"]),
            Err(ArgsError::Unknown("--unknown".to_string()))
        );
    }
}
