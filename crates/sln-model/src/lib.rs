//! Typed document model for Visual Studio solution files.
//!
//! This crate holds the in-memory representation that `sln-codec` parses
//! into and serializes from: the root [`SolutionDocument`], ordered
//! [`ProjectRef`] entries, and the [`GlobalSection`] tagged union over the
//! recognized section kinds plus a verbatim `General` catch-all.
//!
//! Configuration names, platform targets, indicator tokens, and scope
//! markers are closed enumerations: an unrecognized token is a value error
//! rather than a free-form string. This strictness is what makes the
//! round-trip guarantees of the codec checkable.

pub mod configuration;
pub mod document;
pub mod error;
pub mod project;
pub mod section;
pub mod version;

pub use configuration::{
    BuildConfiguration, ConfigurationIndicator, ConfigurationName, PlatformTarget,
};
pub use document::SolutionDocument;
pub use error::{Error, Result};
pub use project::ProjectRef;
pub use section::{
    ConfigurationMapping, GlobalSection, NestedProject, ProjectConfiguration, SectionContent,
    SectionScope, SECTION_EXTENSIBILITY_GLOBALS, SECTION_NESTED_PROJECTS,
    SECTION_PROJECT_CONFIGURATIONS, SECTION_SOLUTION_CONFIGURATIONS, SECTION_SOLUTION_PROPERTIES,
};
pub use version::{FormatVersion, ProductVersion};
