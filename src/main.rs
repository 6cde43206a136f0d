use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::Terminal;
use tokio::sync::mpsc;

use stockdeck::api::ApiClient;
use stockdeck::app::{App, AppMessage};
use stockdeck::cli::{handle_version_command, parse_args, run_cli_command, CliCommand, USAGE};
use stockdeck::config::ClientConfig;
use stockdeck::logging;
use stockdeck::session::SessionStore;
use stockdeck::terminal::{setup_panic_hook, TerminalManager};
use stockdeck::ui::{self, Logo};

/// UI tick: spinners, notice expiry.
const TICK: Duration = Duration::from_millis(16);

fn main() -> Result<ExitCode> {
    let args = match parse_args(std::env::args()) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("stockdeck: {}\n{}", e, USAGE);
            return Ok(ExitCode::from(2));
        }
    };

    // Handle --version before any initialization
    if args.command == CliCommand::Version {
        handle_version_command();
    }

    color_eyre::install()?;

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    let mut config = ClientConfig::from_env();
    if let Some(url) = &args.api_url {
        config = config.with_base_url(url.as_str());
    }

    let log_path = config.log_path();
    if let Err(e) = logging::init_file_logging(&log_path) {
        eprintln!("Warning: logging disabled ({}): {}", log_path.display(), e);
    }
    tracing::info!(version = stockdeck::cli::VERSION, api = %config.base_url, "starting");

    let runtime = tokio::runtime::Runtime::new()?;
    let session = Arc::new(runtime.block_on(SessionStore::restore(config.session_storage())));
    let api = ApiClient::from_config(&config, session)?;

    if let Some(result) = run_cli_command(&args.command, &runtime, &api) {
        return result;
    }
    debug_assert_eq!(args.command, CliCommand::RunTui);

    let logo = Logo::resolve(config.asset_dir());
    let mut app = App::new(api, logo);

    let mut term_manager = TerminalManager::new()?;
    let result = runtime.block_on(async {
        app.start();
        run_app(term_manager.terminal(), &mut app).await
    });
    term_manager.restore()?;

    tracing::info!("exiting");
    result.map(|()| ExitCode::SUCCESS)
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    // Create async event stream for keyboard input
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        // Draw the UI only when needed
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, &*app))?;
            app.needs_redraw = false;
        }

        let timeout = tokio::time::sleep(TICK);

        tokio::select! {
            _ = timeout => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key);
                    }
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::warn!("terminal event error: {}", e);
                    }
                    // Input closed; nothing more can happen
                    None => app.quit(),
                }
            }

            Some(msg) = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                app.handle_message(msg);
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
