// src/session.rs
// Viewer-side session state. The navigation order is read once at start and
// stays fixed for the life of the session; resolving the active document is
// the only store interaction a viewer ever performs.

use crate::document::DocumentRecord;
use crate::store::BlobStore;

#[derive(Debug, Clone, PartialEq)]
pub enum ViewerState {
    Uninitialized,
    Resolving { id: String },
    Ready { record: DocumentRecord },
    NotFound { id: String },
    Failed { id: String, reason: String },
}

#[derive(Debug)]
pub struct ViewerSession {
    blobs: BlobStore,
    order: Vec<String>,
    current_id: String,
    state: ViewerState,
    epoch: u64,
}

impl ViewerSession {
    pub fn new(blobs: BlobStore, order: Vec<String>, target: String) -> Self {
        Self {
            blobs,
            order,
            current_id: target,
            state: ViewerState::Uninitialized,
            epoch: 0,
        }
    }

    /// Make `id` the active document and enter `Resolving`. Returns the
    /// epoch the eventual completion must carry.
    pub fn begin_resolve(&mut self, id: String) -> u64 {
        self.epoch += 1;
        self.current_id = id.clone();
        self.state = ViewerState::Resolving { id };
        self.epoch
    }

    /// Completions race with navigation; one carrying an older epoch or a
    /// no-longer-active id is dropped.
    pub fn complete_resolve(
        &mut self,
        id: &str,
        epoch: u64,
        outcome: std::result::Result<Option<DocumentRecord>, String>,
    ) {
        if epoch != self.epoch || id != self.current_id {
            tracing::debug!(id, "dropping stale resolution");
            return;
        }

        self.state = match outcome {
            Ok(Some(record)) => ViewerState::Ready { record },
            Ok(None) => ViewerState::NotFound { id: id.to_string() },
            Err(reason) => {
                tracing::error!(id, reason = %reason, "document resolution failed");
                ViewerState::Failed {
                    id: id.to_string(),
                    reason,
                }
            }
        };
    }

    /// Begin, await, and complete a resolution in one step.
    pub async fn resolve_now(&mut self, id: String) {
        let epoch = self.begin_resolve(id.clone());
        let outcome = self.blobs.get(&id).await.map_err(|e| e.to_string());
        self.complete_resolve(&id, epoch, outcome);
    }

    /// Zero-based position of the active document in the fixed order, if it
    /// appears there at all.
    pub fn position(&self) -> Option<usize> {
        self.order.iter().position(|entry| *entry == self.current_id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// The id after the active one. `None` at the end of the order; the
    /// caller treats that as a disabled control, never a wrap-around.
    pub fn next_id(&self) -> Option<String> {
        let position = self.position()?;
        self.order.get(position + 1).cloned()
    }

    pub fn previous_id(&self) -> Option<String> {
        match self.position()? {
            0 => None,
            position => self.order.get(position - 1).cloned(),
        }
    }

    pub fn can_next(&self) -> bool {
        self.next_id().is_some()
    }

    pub fn can_previous(&self) -> bool {
        self.previous_id().is_some()
    }

    pub fn state(&self) -> &ViewerState {
        &self.state
    }

    pub fn current_id(&self) -> &str {
        &self.current_id
    }

    pub fn blobs(&self) -> BlobStore {
        self.blobs.clone()
    }
}
