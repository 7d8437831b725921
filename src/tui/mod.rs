//! Terminal UI for noughts
//!
//! A thin client over [`Session`](crate::Session): draw the board, read a
//! key, send at most one authority request, repeat.

mod app;
mod standalone;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tracing::{error, info};

use crate::rest_client::HttpAuthority;
use app::App;

/// Run the TUI client.
///
/// With a `server_url` the client connects to an existing authority;
/// without one it spawns the bundled authority on `port` and tears it down
/// on exit.
pub async fn run_tui(server_url: Option<String>, port: u16) -> Result<()> {
    // Log to a file so tracing output does not tear the terminal.
    let log_file = std::fs::File::create("noughts_tui.log")?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!("Starting noughts TUI");

    let (base_url, _guard) = match server_url {
        Some(url) => (url, None),
        None => {
            let guard = standalone::spawn_authority(port).await?;
            (format!("http://127.0.0.1:{}", port), Some(guard))
        }
    };

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(HttpAuthority::new(base_url));
    app.new_game().await;

    let res = run_game(&mut terminal, &mut app).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(error = ?err, "Game loop error");
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

/// Draw-poll-dispatch loop. Every authority call is awaited before the next
/// key is read, so at most one request is ever in flight.
async fn run_game<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    <B as ratatui::backend::Backend>::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Char('q') => {
                        info!("User quit");
                        return Ok(());
                    }
                    KeyCode::Char('n') => app.new_game().await,
                    KeyCode::Char('u') => app.undo().await,
                    KeyCode::Char('h') => app.log_history(),
                    KeyCode::Char(c) if c.is_ascii_digit() => {
                        if let Some(digit) = c.to_digit(10)
                            && (1..=9).contains(&digit)
                        {
                            app.play(digit as usize - 1).await;
                        }
                    }
                    _ => {}
                }
            }
        }
    }
}
