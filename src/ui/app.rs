//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::controller::DashboardController;
use crate::controller::tokens::RequestTokens;
use crate::environment::Environment;
use crate::events::Event as ControllerEvent;
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crate::ui::splash::render_splash;
use crossterm::event::{self, Event, KeyCode};
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
    pub stats_interval: Duration,
}

impl UIConfig {
    pub fn new(with_background_color: bool, stats_interval: Duration) -> Self {
        Self {
            with_background_color,
            stats_interval,
        }
    }
}

/// The different screens in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// The fraud dashboard.
    Dashboard,
}

/// What the loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Continue,
    Quit,
}

/// Application state
pub struct App {
    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// View state. Exists from the start so the initial load is not lost
    /// while the splash screen is up.
    dashboard: Box<DashboardState>,

    /// Receives events from the controller.
    event_receiver: mpsc::Receiver<ControllerEvent>,

    /// Issues refreshes and owns the statistics timer.
    controller: DashboardController,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        environment: Environment,
        event_receiver: mpsc::Receiver<ControllerEvent>,
        controller: DashboardController,
        tokens: RequestTokens,
        ui_config: UIConfig,
    ) -> Self {
        Self {
            current_screen: Screen::Splash,
            dashboard: Box::new(DashboardState::new(
                environment,
                Instant::now(),
                tokens,
                ui_config,
            )),
            event_receiver,
            controller,
        }
    }

    pub fn screen(&self) -> Screen {
        self.current_screen
    }

    pub fn dashboard(&self) -> &DashboardState {
        &self.dashboard
    }

    /// Moves every event the controller has produced into the dashboard and
    /// applies them.
    pub fn drain_events(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            self.dashboard.add_event(event);
        }
        self.dashboard.update();
    }

    /// Maps a key press to a dashboard action.
    pub fn handle_key(&mut self, code: KeyCode) -> KeyOutcome {
        if matches!(code, KeyCode::Esc | KeyCode::Char('q')) {
            return KeyOutcome::Quit;
        }

        match self.current_screen {
            // Any key press will skip the splash screen
            Screen::Splash => self.current_screen = Screen::Dashboard,
            Screen::Dashboard => match code {
                KeyCode::Enter => {
                    // The handle is not needed, results arrive as events
                    let _ = self.controller.submit(self.dashboard.form());
                }
                KeyCode::Char('s') | KeyCode::Char('S') => {
                    self.dashboard.fill_sample(&mut rand::thread_rng());
                }
                KeyCode::Char('r') | KeyCode::Char('R') => {
                    let _ = self.controller.refresh_all();
                }
                KeyCode::Backspace => self.dashboard.pop_amount_char(),
                KeyCode::Char(c) => self.dashboard.push_amount_char(c),
                _ => {}
            },
        }
        KeyOutcome::Continue
    }

    /// Stops the statistics timer.
    pub async fn shutdown(&mut self) {
        self.controller.shutdown().await;
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();
    let splash_duration = Duration::from_secs(2);

    loop {
        app.drain_events();
        terminal.draw(|f| render(f, &app))?;

        if app.current_screen == Screen::Splash && splash_start.elapsed() >= splash_duration {
            app.current_screen = Screen::Dashboard;
            continue;
        }

        // Poll for key events
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }
                if app.handle_key(key.code) == KeyOutcome::Quit {
                    app.shutdown().await;
                    return Ok(());
                }
            }
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, app: &App) {
    match app.current_screen {
        Screen::Splash => render_splash(f),
        Screen::Dashboard => render_dashboard(f, &app.dashboard),
    }
}
