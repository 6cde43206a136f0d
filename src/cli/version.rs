//! Version command.

/// The current version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Handle the --version command: print the version and exit successfully.
pub fn handle_version_command() -> ! {
    println!("stockdeck {}", VERSION);
    std::process::exit(0)
}
