//! Binary entry point.
//!
//! Sets up the terminal, spawns the one-shot candidate fetch, and runs the
//! event loop. Terminal state is restored on both clean exit and panic.

use std::io;
use std::sync::Arc;

use color_eyre::eyre::Result;
use crossterm::{
    cursor::Show,
    event::{
        DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
        Event, EventStream, KeyEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use mentio::adapters::ReqwestHttpClient;
use mentio::app::App;
use mentio::candidates::fetch_candidates;
use mentio::config::Config;
use mentio::events::AppMessage;
use mentio::input::{handlers::handle_command, map_key};
use mentio::ui;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();
    setup_panic_hook();

    let config = Config::load()?;
    tracing::info!(api = %config.api_base_url, "starting composer");

    let mut app = App::new();

    // One-shot candidate fetch, fire-and-forget relative to typing. The
    // outcome lands in the message channel; failure leaves mentions inert.
    spawn_candidate_fetch(&config, app.message_tx.clone());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableBracketedPaste,
        EnableMouseCapture
    )?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let size = terminal.size()?;
    app.update_terminal_dimensions(size.width, size.height);

    let result = run_app(&mut terminal, &mut app).await;

    restore_terminal(&mut terminal)?;
    result
}

/// Log to a file under the user data dir; never to stdout (it would tear
/// the TUI). Disabled when no data dir exists.
fn init_tracing() {
    let Some(dir) = dirs::data_local_dir().map(|d| d.join("mentio")) else {
        return;
    };
    if std::fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = std::fs::File::options()
        .create(true)
        .append(true)
        .open(dir.join("mentio.log"))
    else {
        return;
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(file)
        .with_ansi(false)
        .init();
}

/// Spawn the background fetch of the mention candidate list.
fn spawn_candidate_fetch(config: &Config, tx: mpsc::UnboundedSender<AppMessage>) {
    let client = Arc::new(ReqwestHttpClient::new());
    let base_url = config.api_base_url.clone();
    tokio::spawn(async move {
        let message = match fetch_candidates(client, &base_url).await {
            Ok(items) => AppMessage::CandidatesLoaded(items),
            Err(err) => AppMessage::CandidatesFailed(err.to_string()),
        };
        // Receiver gone means the app already exited
        let _ = tx.send(message);
    });
}

/// Setup panic hook to restore terminal on panic
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(
            io::stdout(),
            DisableMouseCapture,
            DisableBracketedPaste,
            LeaveAlternateScreen
        );
        let _ = execute!(io::stdout(), Show);
        original_hook(panic_info);
    }));
}

/// Restore terminal to normal mode
fn restore_terminal<B: ratatui::backend::Backend + std::io::Write>(
    terminal: &mut Terminal<B>,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx = app
        .message_rx
        .take()
        .expect("message receiver already taken");

    loop {
        if app.needs_redraw {
            terminal.draw(|f| {
                ui::render(f, &mut *app);
            })?;
            app.needs_redraw = false;
        }

        tokio::select! {
            event_result = event_stream.next() => {
                let Some(Ok(event)) = event_result else {
                    // Input stream closed: nothing more to react to
                    return Ok(());
                };
                match event {
                    Event::Resize(width, height) => {
                        app.update_terminal_dimensions(width, height);
                    }
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if let Some(cmd) = map_key(key, app.panel.is_open()) {
                            handle_command(app, &cmd);
                            app.mark_dirty();
                        }
                        if app.should_quit {
                            return Ok(());
                        }
                    }
                    Event::Mouse(mouse) => {
                        app.handle_mouse(mouse);
                    }
                    Event::Paste(text) => {
                        for c in text.chars() {
                            app.input.insert_char(c);
                        }
                        app.refresh_mention();
                    }
                    _ => {}
                }
            }

            message = message_rx.recv() => {
                if let Some(message) = message {
                    app.handle_message(message);
                }
            }
        }
    }
}
