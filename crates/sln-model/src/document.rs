//! Root solution document type.

use crate::project::ProjectRef;
use crate::section::GlobalSection;
use crate::version::{FormatVersion, ProductVersion};
use serde::{Deserialize, Serialize};

/// A parsed solution document.
///
/// Owns its project references and global sections exclusively; nothing is
/// shared between documents. Project order is the declaration order and
/// round-trips as-is. Section storage order is whatever the source had —
/// the serializer reorders canonically on write, so it carries no meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolutionDocument {
    /// File format version from the first header line (e.g. `12.00`).
    pub format_version: FormatVersion,
    /// The second header line (e.g. `# Visual Studio Version 17`), kept
    /// verbatim and never interpreted.
    pub editor_moniker: String,
    /// `VisualStudioVersion = ...` value.
    pub visual_studio_version: ProductVersion,
    /// `MinimumVisualStudioVersion = ...` value.
    pub minimum_visual_studio_version: ProductVersion,
    /// Project references in declaration order.
    pub projects: Vec<ProjectRef>,
    /// Global sections in source order.
    pub sections: Vec<GlobalSection>,
}

impl SolutionDocument {
    /// Find the first section with the given name.
    pub fn section_named(&self, name: &str) -> Option<&GlobalSection> {
        self.sections.iter().find(|s| s.name() == name)
    }
}
