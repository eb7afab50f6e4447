// src/viewer.rs
// The application this binary becomes when launched with a view hand-off.

use crate::event::{AppEvent, Event, EventHandler};
use crate::render::PreviewRegistry;
use crate::session::ViewerSession;
use crate::store::{BlobStore, Database, OrderLedger};
use color_eyre::Result;
use ratatui::{
    crossterm::event::{KeyCode, KeyEvent, KeyModifiers},
    DefaultTerminal,
};

#[derive(Debug)]
pub struct ViewerApp {
    pub running: bool,
    pub session: ViewerSession,
    pub previews: PreviewRegistry,
    pub events: EventHandler,
}

impl ViewerApp {
    /// Build a viewer session for `file_id`. The viewing order is read once
    /// here; an unreadable order degrades to a session without siblings.
    pub async fn new(database: Database, file_id: String) -> Self {
        let blobs = BlobStore::new(database.clone());
        let ledger = OrderLedger::new(database);

        let order = match ledger.get_order().await {
            Ok(order) => order,
            Err(e) => {
                tracing::error!(error = %e, "failed to read viewing order");
                Vec::new()
            }
        };

        let session = ViewerSession::new(blobs, order, file_id.clone());
        let mut app = Self {
            running: true,
            session,
            previews: PreviewRegistry::new(),
            events: EventHandler::new(),
        };
        app.start_resolve(file_id);
        app
    }

    /// Kick off a resolution without blocking the loop; the completion comes
    /// back through the event channel and stale ones are dropped there.
    fn start_resolve(&mut self, id: String) {
        let epoch = self.session.begin_resolve(id.clone());
        let blobs = self.session.blobs();
        let sender = self.events.sender();

        tokio::spawn(async move {
            let outcome = blobs.get(&id).await.map_err(|e| e.to_string());
            let _ = sender.send(Event::App(AppEvent::Resolved { id, epoch, outcome }));
        });
    }

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
                    match app_event {
                        AppEvent::Quit => self.running = false,
                        AppEvent::NextDocument => {
                            // No-op at the end of the order
                            if let Some(id) = self.session.next_id() {
                                self.start_resolve(id);
                            }
                        }
                        AppEvent::PreviousDocument => {
                            if let Some(id) = self.session.previous_id() {
                                self.start_resolve(id);
                            }
                        }
                        AppEvent::Resolved { id, epoch, outcome } => {
                            self.session.complete_resolve(&id, epoch, outcome);
                        }
                        _ => {}
                    }
                    needs_redraw = true;
                }
            }
        }
        Ok(())
    }

    fn handle_key_events(&mut self, key_event: KeyEvent) {
        match key_event.code {
            KeyCode::Esc | KeyCode::Char('q') => self.events.send(AppEvent::Quit),
            KeyCode::Char('c' | 'C') if key_event.modifiers == KeyModifiers::CONTROL => {
                self.events.send(AppEvent::Quit)
            }
            KeyCode::Right | KeyCode::Char('n' | 'l') => self.events.send(AppEvent::NextDocument),
            KeyCode::Left | KeyCode::Char('p' | 'h') => {
                self.events.send(AppEvent::PreviousDocument)
            }
            _ => {}
        }
    }
}
