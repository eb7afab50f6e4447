// src/launch.rs
// Hand-off between the dashboard process and a spawned viewer process: the
// start-up configuration contract, surface geometry, and the launcher that
// stages documents before any viewer exists to read them.

use std::process::Stdio;
use tokio::process::Command as AsyncCommand;

use crate::document::DashboardEntry;
use crate::error::{DocboothError, Result};
use crate::store::{BlobStore, OrderLedger};

/// Fraction of the available surface a viewer occupies.
pub const SURFACE_FRACTION: f64 = 0.85;

/// Terminal emulators tried as presentation surfaces, in order.
const SURFACE_CANDIDATES: &[&str] = &["xterm", "urxvt", "x-terminal-emulator"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchMode {
    Dashboard,
    View,
}

/// Start-up configuration, resolved exactly once from the hand-off string a
/// launching dashboard passes to the new process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchConfig {
    pub mode: LaunchMode,
    pub file_id: Option<String>,
}

impl LaunchConfig {
    pub fn dashboard() -> Self {
        Self {
            mode: LaunchMode::Dashboard,
            file_id: None,
        }
    }

    /// Parse a `mode=view&fileId=<id>` hand-off string. Anything short of
    /// both keys being present with `mode=view` means dashboard mode.
    pub fn parse(query: &str) -> Self {
        let mut mode = None;
        let mut file_id = None;

        for pair in query.trim_start_matches('?').split('&') {
            match pair.split_once('=') {
                Some(("mode", value)) => mode = Some(value.to_string()),
                Some(("fileId", value)) => file_id = Some(value.to_string()),
                _ => {}
            }
        }

        match (mode.as_deref(), file_id) {
            (Some("view"), Some(id)) if !id.is_empty() => Self {
                mode: LaunchMode::View,
                file_id: Some(id),
            },
            _ => Self::dashboard(),
        }
    }

    /// Scan process arguments for a hand-off string.
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        for arg in args {
            if arg.contains("mode=") {
                return Self::parse(&arg);
            }
        }
        Self::dashboard()
    }

    pub fn encode_view(file_id: &str) -> String {
        format!("mode=view&fileId={file_id}")
    }

    /// The target id when this process was launched as a viewer.
    pub fn view_target(&self) -> Option<String> {
        match self.mode {
            LaunchMode::View => self.file_id.clone(),
            LaunchMode::Dashboard => None,
        }
    }
}

/// Sized and centered placement for a viewer surface, in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub width: u16,
    pub height: u16,
    pub x: u16,
    pub y: u16,
}

impl Geometry {
    pub fn fit(avail_width: u16, avail_height: u16) -> Self {
        let width = (f64::from(avail_width) * SURFACE_FRACTION) as u16;
        let height = (f64::from(avail_height) * SURFACE_FRACTION) as u16;
        Self {
            width,
            height,
            x: (avail_width - width) / 2,
            y: (avail_height - height) / 2,
        }
    }

    pub fn to_flag(&self) -> String {
        format!("{}x{}+{}+{}", self.width, self.height, self.x, self.y)
    }
}

/// The outcome of a launch. Failure to open a surface is not a failure of
/// the launch itself: the documents and order are already staged, so the id
/// can still be opened by hand.
#[derive(Debug, Clone)]
pub struct LaunchOutcome {
    pub target_id: String,
    pub surface_acquired: bool,
}

#[derive(Debug)]
pub struct SessionLauncher {
    blobs: BlobStore,
    ledger: OrderLedger,
}

impl SessionLauncher {
    pub fn new(blobs: BlobStore, ledger: OrderLedger) -> Self {
        Self { blobs, ledger }
    }

    /// Stage every document, then publish the viewing order. Write ordering
    /// matters: all blobs land before the order, and the order before any
    /// surface exists to read it. Any store failure aborts the whole launch.
    pub async fn prepare(&self, target_id: &str, entries: &[DashboardEntry]) -> Result<()> {
        self.blobs
            .put_all(entries)
            .await
            .map_err(|e| DocboothError::Launch(format!("failed to stage documents: {e}")))?;

        let ids: Vec<String> = entries.iter().map(|entry| entry.id.clone()).collect();
        self.ledger
            .set_order(ids)
            .await
            .map_err(|e| DocboothError::Launch(format!("failed to publish viewing order: {e}")))?;

        tracing::info!(
            target = target_id,
            count = entries.len(),
            "documents staged for viewing"
        );
        Ok(())
    }

    pub async fn launch(
        &self,
        target_id: &str,
        entries: &[DashboardEntry],
    ) -> Result<LaunchOutcome> {
        self.prepare(target_id, entries).await?;
        let surface_acquired = self.open_surface(target_id).await;
        Ok(LaunchOutcome {
            target_id: target_id.to_string(),
            surface_acquired,
        })
    }

    /// Best effort: walk the surface candidates and spawn the first one that
    /// exists, detached. Returns false when no surface could be acquired.
    async fn open_surface(&self, target_id: &str) -> bool {
        let handoff = LaunchConfig::encode_view(target_id);
        let exe = match std::env::current_exe() {
            Ok(exe) => exe,
            Err(e) => {
                tracing::warn!(error = %e, "cannot locate own executable; surface not opened");
                return false;
            }
        };

        let (avail_width, avail_height) = crossterm::terminal::size().unwrap_or((80, 24));
        let geometry = Geometry::fit(avail_width, avail_height);

        for surface in SURFACE_CANDIDATES {
            if !command_exists(surface).await {
                continue;
            }

            let mut cmd = AsyncCommand::new(surface);
            if *surface != "x-terminal-emulator" {
                // Sized and centered, scrollbar chrome off
                cmd.arg("-geometry").arg(geometry.to_flag()).arg("+sb");
            }
            cmd.arg("-e").arg(&exe).arg(&handoff);
            cmd.stdout(Stdio::null());
            cmd.stderr(Stdio::null());

            if cmd.spawn().is_ok() {
                tracing::info!(
                    surface = *surface,
                    geometry = %geometry.to_flag(),
                    "viewer surface opened"
                );
                return true;
            }
        }

        tracing::warn!(handoff = %handoff, "no presentation surface available");
        false
    }
}

async fn command_exists(name: &str) -> bool {
    AsyncCommand::new("which")
        .arg(name)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await
        .map(|status| status.success())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handoff_round_trip() {
        let encoded = LaunchConfig::encode_view("abc-123");
        let config = LaunchConfig::parse(&encoded);
        assert_eq!(config.mode, LaunchMode::View);
        assert_eq!(config.view_target().as_deref(), Some("abc-123"));
    }

    #[test]
    fn test_missing_or_foreign_mode_is_dashboard() {
        assert_eq!(LaunchConfig::parse(""), LaunchConfig::dashboard());
        assert_eq!(LaunchConfig::parse("fileId=abc"), LaunchConfig::dashboard());
        assert_eq!(LaunchConfig::parse("mode=view"), LaunchConfig::dashboard());
        assert_eq!(
            LaunchConfig::parse("mode=edit&fileId=abc"),
            LaunchConfig::dashboard()
        );
    }

    #[test]
    fn test_leading_question_mark_accepted() {
        let config = LaunchConfig::parse("?mode=view&fileId=xyz");
        assert_eq!(config.view_target().as_deref(), Some("xyz"));
    }

    #[test]
    fn test_args_without_handoff_are_dashboard() {
        let args = vec!["--verbose".to_string()];
        assert_eq!(LaunchConfig::from_args(args), LaunchConfig::dashboard());
    }

    #[test]
    fn test_geometry_is_centered_fraction() {
        let geometry = Geometry::fit(100, 40);
        assert_eq!(geometry.width, 85);
        assert_eq!(geometry.height, 34);
        assert_eq!(geometry.x, 7);
        assert_eq!(geometry.y, 3);
        assert_eq!(geometry.to_flag(), "85x34+7+3");
    }
}
