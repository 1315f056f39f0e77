//! Global sections and their content variants.

use crate::configuration::{BuildConfiguration, ConfigurationIndicator};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Section name recognized as solution configuration platforms.
pub const SECTION_SOLUTION_CONFIGURATIONS: &str = "SolutionConfigurationPlatforms";
/// Section name recognized as project configuration platforms.
pub const SECTION_PROJECT_CONFIGURATIONS: &str = "ProjectConfigurationPlatforms";
/// Section name recognized as project nesting.
pub const SECTION_NESTED_PROJECTS: &str = "NestedProjects";
/// Fixed name of the required solution-properties general section.
pub const SECTION_SOLUTION_PROPERTIES: &str = "SolutionProperties";
/// Fixed name of the optional extensibility-globals general section.
pub const SECTION_EXTENSIBILITY_GLOBALS: &str = "ExtensibilityGlobals";

/// The `= preSolution` / `= postSolution` marker on a section header.
///
/// Preserved verbatim; the codec does not interpret it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionScope {
    PreSolution,
    PostSolution,
}

impl SectionScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PreSolution => "preSolution",
            Self::PostSolution => "postSolution",
        }
    }
}

impl FromStr for SectionScope {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "preSolution" => Ok(Self::PreSolution),
            "postSolution" => Ok(Self::PostSolution),
            other => Err(Error::UnknownScope(other.to_string())),
        }
    }
}

impl fmt::Display for SectionScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `Cfg|Platform = Cfg|Platform` line from the solution configuration
/// section. By convention the two sides are identical, but both tokens are
/// stored independently to preserve the exact text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigurationMapping {
    pub key: BuildConfiguration,
    pub value: BuildConfiguration,
}

/// One `{Guid}.Cfg|Platform.Indicator = Cfg|Platform` line from the project
/// configuration section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfiguration {
    pub project_id: Uuid,
    pub solution_configuration: BuildConfiguration,
    pub indicator: ConfigurationIndicator,
    pub project_configuration: BuildConfiguration,
}

/// One `{Child} = {Parent}` nesting line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NestedProject {
    pub child_id: Uuid,
    pub parent_id: Uuid,
}

/// Variant-specific content of a global section.
///
/// Recognized section names parse into structured variants; anything else
/// lands in `General`, which keeps the content lines verbatim so unknown
/// section kinds survive a round trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SectionContent {
    SolutionConfigurations(Vec<ConfigurationMapping>),
    ProjectConfigurations(Vec<ProjectConfiguration>),
    NestedProjects(Vec<NestedProject>),
    General { name: String, lines: Vec<String> },
}

/// A named sub-block of the `Global` block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalSection {
    pub scope: SectionScope,
    pub content: SectionContent,
}

impl GlobalSection {
    pub fn new(scope: SectionScope, content: SectionContent) -> Self {
        Self { scope, content }
    }

    /// The section name as it appears in `GlobalSection(<name>)`.
    pub fn name(&self) -> &str {
        match &self.content {
            SectionContent::SolutionConfigurations(_) => SECTION_SOLUTION_CONFIGURATIONS,
            SectionContent::ProjectConfigurations(_) => SECTION_PROJECT_CONFIGURATIONS,
            SectionContent::NestedProjects(_) => SECTION_NESTED_PROJECTS,
            SectionContent::General { name, .. } => name,
        }
    }

    /// True for a `General` section carrying the given name.
    pub fn is_general_named(&self, name: &str) -> bool {
        matches!(&self.content, SectionContent::General { name: n, .. } if n == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_tokens() {
        assert_eq!(
            "preSolution".parse::<SectionScope>().unwrap(),
            SectionScope::PreSolution
        );
        assert_eq!(SectionScope::PostSolution.to_string(), "postSolution");
        assert!("PreSolution".parse::<SectionScope>().is_err());
    }

    #[test]
    fn test_section_name_follows_variant() {
        let section = GlobalSection::new(
            SectionScope::PreSolution,
            SectionContent::SolutionConfigurations(Vec::new()),
        );
        assert_eq!(section.name(), SECTION_SOLUTION_CONFIGURATIONS);

        let general = GlobalSection::new(
            SectionScope::PostSolution,
            SectionContent::General {
                name: "TeamFoundationVersionControl".to_string(),
                lines: Vec::new(),
            },
        );
        assert_eq!(general.name(), "TeamFoundationVersionControl");
        assert!(general.is_general_named("TeamFoundationVersionControl"));
        assert!(!general.is_general_named(SECTION_SOLUTION_PROPERTIES));
    }
}
