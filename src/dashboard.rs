// src/dashboard.rs
// The in-memory document set. Nothing here touches the store: persistence
// happens lazily, all at once, when a viewing session is launched.

use std::path::PathBuf;

use crate::document::DashboardEntry;
use crate::error::{DocboothError, Result};
use crate::launch::{LaunchOutcome, SessionLauncher};

#[derive(Debug, Default)]
pub struct Dashboard {
    entries: Vec<DashboardEntry>,
    selected: usize,
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read each path and append it with a fresh identity, preserving the
    /// given order. Unreadable paths are skipped. Returns how many were
    /// added.
    pub fn add_files(&mut self, paths: &[PathBuf]) -> usize {
        let mut added = 0;
        for path in paths {
            match std::fs::read(path) {
                Ok(binary) => {
                    let display_name = path
                        .file_name()
                        .map(|name| name.to_string_lossy().into_owned())
                        .unwrap_or_else(|| path.display().to_string());
                    self.entries.push(DashboardEntry::new(display_name, binary));
                    added += 1;
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "skipping unreadable file");
                }
            }
        }
        added
    }

    /// Positional removal. Already-launched sessions are unaffected: the
    /// store and the published order keep whatever the last launch wrote.
    pub fn remove_file(&mut self, index: usize) -> Option<DashboardEntry> {
        if index >= self.entries.len() {
            return None;
        }
        let removed = self.entries.remove(index);
        if self.selected >= self.entries.len() && self.selected > 0 {
            self.selected = self.entries.len() - 1;
        }
        Some(removed)
    }

    pub fn remove_selected(&mut self) -> Option<DashboardEntry> {
        self.remove_file(self.selected)
    }

    /// Launch a viewing session on `id`, handing over the *entire* current
    /// set so the viewer can navigate to siblings.
    pub async fn request_view(
        &self,
        launcher: &SessionLauncher,
        id: &str,
    ) -> Result<LaunchOutcome> {
        if !self.entries.iter().any(|entry| entry.id == id) {
            return Err(DocboothError::Launch(format!("unknown document id {id}")));
        }
        launcher.launch(id, &self.entries).await
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.entries.len() {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_entry(&self) -> Option<&DashboardEntry> {
        self.entries.get(self.selected)
    }

    pub fn entries(&self) -> &[DashboardEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
