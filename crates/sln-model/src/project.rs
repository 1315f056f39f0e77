//! Project reference entries.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One `Project(...)`/`EndProject` block from a solution document.
///
/// The path is an opaque relative string; the codec never validates it
/// against a filesystem. Declaration order is meaningful and round-trips.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRef {
    /// Project-type GUID (the first quoted field).
    pub type_id: Uuid,
    /// Display name.
    pub name: String,
    /// Relative path to the project file, kept verbatim.
    pub path: String,
    /// Project GUID, unique within a document.
    pub project_id: Uuid,
}

impl ProjectRef {
    pub fn new(
        type_id: Uuid,
        name: impl Into<String>,
        path: impl Into<String>,
        project_id: Uuid,
    ) -> Self {
        Self {
            type_id,
            name: name.into(),
            path: path.into(),
            project_id,
        }
    }
}
