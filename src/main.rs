use std::time::Duration;

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::Terminal;
use tokio::sync::mpsc;

use postdeck::adapters::open_preference_store;
use postdeck::api::ApiClient;
use postdeck::app::{App, AppMessage};
use postdeck::cli::{parse_args, run_cli_command, CliCommand};
use postdeck::config::AppConfig;
use postdeck::logging;
use postdeck::terminal::{setup_panic_hook, TerminalManager};
use postdeck::ui;

/// Redraw check interval.
const TICK: Duration = Duration::from_millis(50);

fn main() -> Result<()> {
    color_eyre::install()?;

    let command = parse_args(std::env::args()).wrap_err("Invalid arguments")?;
    if run_cli_command(&command) {
        return Ok(());
    }
    let origin = match command {
        CliCommand::RunTui { origin } => origin,
        _ => None,
    };

    let config = AppConfig::from_env().with_origin(origin);
    let log_path = logging::init(&config)?;
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        log = ?log_path,
        "Starting postdeck"
    );

    // Terminal must be restored before the panic message prints
    setup_panic_hook();

    let store = open_preference_store(config.storage_path.clone());
    let api = ApiClient::with_base_url(config.api_base());

    let runtime = tokio::runtime::Runtime::new()?;
    let mut term_manager = TerminalManager::new()?;
    let mut app = App::new(api, store);

    let result = runtime.block_on(async {
        app.activate();
        run_app(term_manager.terminal(), &mut app).await
    });

    term_manager.restore()?;
    tracing::info!("Exiting");
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    // Owned here so select! can borrow it alongside the app
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, &mut *app))?;
            app.needs_redraw = false;
        }

        tokio::select! {
            _ = tokio::time::sleep(TICK) => {}

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key);
                    }
                    Some(Ok(Event::Mouse(mouse))) => app.handle_mouse(mouse),
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::error!("Terminal event error: {}", e);
                        return Err(e.into());
                    }
                    None => break,
                }
            }

            Some(message) = async {
                match message_rx.as_mut() {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                app.handle_message(message);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
