use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A document as persisted in the blob store: identity, payload, and the
/// display metadata a viewer needs without inspecting the payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub id: String,
    pub binary: Vec<u8>,
    pub display_name: String,
    pub mime_hint: String,
}

/// A document held in dashboard memory. Gets its identity the moment it is
/// added; only reaches the store when a viewing session is launched.
#[derive(Debug, Clone)]
pub struct DashboardEntry {
    pub id: String,
    pub display_name: String,
    pub binary: Vec<u8>,
}

impl DashboardEntry {
    pub fn new(display_name: String, binary: Vec<u8>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            display_name,
            binary,
        }
    }
}
