//! Login TUI - a terminal login form with client-side validation
//!
//! A Ratatui-based shell hosting a single login form: email and password
//! fields with required/format/length checks, submit and reset.

mod app;
mod config;
mod event;
mod platform;
mod state;
mod ui;

use anyhow::Result;
use app::App;
use config::TuiConfig;
use crossterm::{
    event::{Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use event::{CrosstermEvents, EventSource};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// How long to wait for input before redrawing
const POLL_INTERVAL: Duration = Duration::from_millis(100);

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "login_tui=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = TuiConfig::load().unwrap_or_else(|err| {
        tracing::warn!("Failed to load config, using defaults: {err:#}");
        TuiConfig::default()
    });

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(&config);
    let result = run_app(&mut terminal, &mut app, &mut CrosstermEvents);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, E: EventSource>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    events: &mut E,
) -> Result<()> {
    loop {
        // Draw the UI
        terminal.draw(|frame| ui::draw(frame, app))?;

        if events.poll(POLL_INTERVAL)? {
            match events.read()? {
                Event::Key(key) => {
                    // Global quit: Ctrl+C
                    if key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        return Ok(());
                    }

                    app.handle_key(key);
                }
                Event::Resize(_width, _height) => {
                    // Layout is recalculated on next draw
                }
                _ => {}
            }
        }

        // Check if app wants to quit
        if app.should_quit() {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;
    use crate::event::MockEventSource;
    use pretty_assertions::assert_eq;
    use ratatui::backend::TestBackend;
    use std::collections::VecDeque;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    /// Build an event source that replays `events` in order
    fn scripted(events: Vec<Event>) -> MockEventSource {
        let mut queue: VecDeque<Event> = events.into();
        let mut source = MockEventSource::new();
        source.expect_poll().returning(|_| Ok(true));
        source
            .expect_read()
            .returning(move || queue.pop_front().ok_or_else(|| anyhow::anyhow!("script exhausted")));
        source
    }

    fn run(events: Vec<Event>) -> (App, Result<()>) {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut app = App::new(&TuiConfig::default());
        let mut source = scripted(events);
        let result = run_app(&mut terminal, &mut app, &mut source);
        (app, result)
    }

    #[test]
    fn test_ctrl_c_stops_loop() {
        let (app, result) = run(vec![ctrl('c')]);
        assert!(result.is_ok());
        assert!(!app.should_quit());
    }

    #[test]
    fn test_escape_stops_loop() {
        let (app, result) = run(vec![key(KeyCode::Esc)]);
        assert!(result.is_ok());
        assert!(app.should_quit());
    }

    #[test]
    fn test_typed_login_is_submitted() {
        let mut events: Vec<Event> = "test@example.com"
            .chars()
            .map(|c| key(KeyCode::Char(c)))
            .collect();
        events.push(key(KeyCode::Tab));
        events.extend("password123".chars().map(|c| key(KeyCode::Char(c))));
        events.push(ctrl('s'));
        events.push(ctrl('c'));

        let (app, result) = run(events);
        assert!(result.is_ok());
        assert_eq!(app.state.form.email.as_text(), "test@example.com");
        assert_eq!(
            app.status_message.as_deref(),
            Some("Submitted as test@example.com")
        );
    }

    #[test]
    fn test_resize_and_idle_polls_keep_running() {
        let mut script: VecDeque<Event> = vec![Event::Resize(100, 40), key(KeyCode::Esc)].into();
        let mut polls = 0;
        let mut source = MockEventSource::new();
        source.expect_poll().returning(move |_| {
            polls += 1;
            // Every other poll times out
            Ok(polls % 2 == 0)
        });
        source
            .expect_read()
            .times(2)
            .returning(move || Ok(script.pop_front().unwrap()));

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut app = App::new(&TuiConfig::default());
        run_app(&mut terminal, &mut app, &mut source).unwrap();
        assert!(app.should_quit());
    }

    #[test]
    fn test_event_error_propagates() {
        let (_, result) = run(vec![]);
        assert!(result.is_err());
    }
}
