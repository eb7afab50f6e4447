use crate::dashboard::Dashboard;
use crate::event::{AppEvent, Event, EventHandler};
use crate::launch::{LaunchConfig, SessionLauncher};
use crate::store::{BlobStore, Database, OrderLedger};
use color_eyre::Result;
use ratatui::{
    crossterm::event::{KeyCode, KeyEvent, KeyModifiers},
    DefaultTerminal,
};
use std::path::PathBuf;

#[derive(Debug, PartialEq)]
pub enum AppMode {
    Browse,
    PathInput,
}

/// The dashboard application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    pub running: bool,
    /// Current app mode/screen
    pub mode: AppMode,
    /// In-memory document set
    pub dashboard: Dashboard,
    /// Stages documents and opens viewer surfaces
    pub launcher: SessionLauncher,
    /// Event handler.
    pub events: EventHandler,
    /// Path entry buffer while adding files
    pub path_input: String,
    /// Transient user-visible status line
    pub status: Option<String>,
}

impl App {
    /// Constructs a new instance of [`App`].
    pub fn new(database: Database) -> Self {
        let blobs = BlobStore::new(database.clone());
        let ledger = OrderLedger::new(database);

        Self {
            running: true,
            mode: AppMode::Browse,
            dashboard: Dashboard::new(),
            launcher: SessionLauncher::new(blobs, ledger),
            events: EventHandler::new(),
            path_input: String::new(),
            status: None,
        }
    }

    /// Run the application's main loop.
    pub async fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        let mut needs_redraw = true;

        while self.running {
            if needs_redraw {
                terminal.draw(|frame| frame.render_widget(&mut self, frame.area()))?;
                needs_redraw = false;
            }

            match self.events.next().await? {
                Event::Tick => {}
                Event::Crossterm(event) => {
                    if let crossterm::event::Event::Key(key_event) = event {
                        self.handle_key_events(key_event);
                        needs_redraw = true;
                    }
                }
                Event::App(app_event) => {
                    self.handle_app_event(app_event).await;
                    needs_redraw = true;
                }
            }
        }
        Ok(())
    }

    async fn handle_app_event(&mut self, app_event: AppEvent) {
        match app_event {
            AppEvent::Quit => self.quit(),
            AppEvent::SelectNext => self.dashboard.select_next(),
            AppEvent::SelectPrevious => self.dashboard.select_previous(),
            AppEvent::BeginAddFiles => {
                self.mode = AppMode::PathInput;
                self.path_input.clear();
                self.status = None;
            }
            AppEvent::PathInput(ch) => self.path_input.push(ch),
            AppEvent::PathBackspace => {
                self.path_input.pop();
            }
            AppEvent::CancelInput => {
                self.mode = AppMode::Browse;
                self.path_input.clear();
            }
            AppEvent::PathSubmit => self.commit_path_input(),
            AppEvent::RemoveSelected => {
                if let Some(removed) = self.dashboard.remove_selected() {
                    self.status = Some(format!("Removed {}", removed.display_name));
                }
            }
            AppEvent::ViewSelected => self.view_selected().await,
            _ => {}
        }
    }

    /// Handles the key events and updates the state of [`App`].
    fn handle_key_events(&mut self, key_event: KeyEvent) {
        // Path entry mode captures everything except its own exits
        if self.mode == AppMode::PathInput {
            match key_event.code {
                KeyCode::Esc => self.events.send(AppEvent::CancelInput),
                KeyCode::Enter => self.events.send(AppEvent::PathSubmit),
                KeyCode::Backspace => self.events.send(AppEvent::PathBackspace),
                KeyCode::Char(ch) => self.events.send(AppEvent::PathInput(ch)),
                _ => {}
            }
            return;
        }

        match key_event.code {
            KeyCode::Esc | KeyCode::Char('q') => self.events.send(AppEvent::Quit),
            KeyCode::Char('c' | 'C') if key_event.modifiers == KeyModifiers::CONTROL => {
                self.events.send(AppEvent::Quit)
            }
            KeyCode::Up | KeyCode::Char('k') => self.events.send(AppEvent::SelectPrevious),
            KeyCode::Down | KeyCode::Char('j') => self.events.send(AppEvent::SelectNext),
            KeyCode::Char('a') => self.events.send(AppEvent::BeginAddFiles),
            KeyCode::Char('d') | KeyCode::Delete => self.events.send(AppEvent::RemoveSelected),
            KeyCode::Enter | KeyCode::Char(' ') => self.events.send(AppEvent::ViewSelected),
            _ => {}
        }
    }

    fn commit_path_input(&mut self) {
        let paths: Vec<PathBuf> = self
            .path_input
            .split_whitespace()
            .map(PathBuf::from)
            .collect();

        if !paths.is_empty() {
            let added = self.dashboard.add_files(&paths);
            let skipped = paths.len() - added;
            self.status = Some(if skipped == 0 {
                format!("Added {added} file(s)")
            } else {
                format!("Added {added} file(s), skipped {skipped} unreadable")
            });
        }

        self.mode = AppMode::Browse;
        self.path_input.clear();
    }

    async fn view_selected(&mut self) {
        let Some(entry) = self.dashboard.selected_entry() else {
            return;
        };
        let id = entry.id.clone();
        let name = entry.display_name.clone();

        match self.dashboard.request_view(&self.launcher, &id).await {
            Ok(outcome) if outcome.surface_acquired => {
                self.status = Some(format!("Viewer opened for {name}"));
            }
            Ok(outcome) => {
                self.status = Some(format!(
                    "Documents staged; open manually: docbooth '{}'",
                    LaunchConfig::encode_view(&outcome.target_id)
                ));
            }
            Err(e) => {
                tracing::error!(error = %e, "launch failed");
                self.status = Some(format!("Launch failed: {e}"));
            }
        }
    }

    /// Set running to false to quit the application.
    pub fn quit(&mut self) {
        self.running = false;
    }
}
