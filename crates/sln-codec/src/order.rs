//! Canonical ordering of global sections.
//!
//! Serialized output carries sections in a fixed sequence regardless of how
//! the document stores them: solution configurations, project
//! configurations, solution properties, nested projects, extensibility
//! globals, then everything else in its original relative order. The first
//! two slots with a `*` below are mandatory.
//!
//! Implemented as a stable partition over an index set: each known slot
//! claims at most one section (the first unclaimed match), the remainder
//! keeps source order. Applying the ordering twice yields the same sequence
//! as applying it once.

use crate::error::{Error, Result};
use sln_model::{
    GlobalSection, SectionContent, SECTION_EXTENSIBILITY_GLOBALS, SECTION_SOLUTION_CONFIGURATIONS,
    SECTION_SOLUTION_PROPERTIES,
};

/// Order a document's sections canonically, borrowing them from `sections`.
///
/// # Errors
/// Returns [`Error::MissingSection`] when the solution-configurations
/// section or the solution-properties section is absent.
pub fn canonical_order(sections: &[GlobalSection]) -> Result<Vec<&GlobalSection>> {
    let mut claimed = vec![false; sections.len()];

    let solution_configurations = claim(sections, &mut claimed, |s| {
        matches!(s.content, SectionContent::SolutionConfigurations(_))
    })
    .ok_or(Error::MissingSection {
        name: SECTION_SOLUTION_CONFIGURATIONS,
    })?;
    let project_configurations = claim(sections, &mut claimed, |s| {
        matches!(s.content, SectionContent::ProjectConfigurations(_))
    });
    let solution_properties = claim(sections, &mut claimed, |s| {
        s.is_general_named(SECTION_SOLUTION_PROPERTIES)
    })
    .ok_or(Error::MissingSection {
        name: SECTION_SOLUTION_PROPERTIES,
    })?;
    let nested_projects = claim(sections, &mut claimed, |s| {
        matches!(s.content, SectionContent::NestedProjects(_))
    });
    let extensibility_globals = claim(sections, &mut claimed, |s| {
        s.is_general_named(SECTION_EXTENSIBILITY_GLOBALS)
    });

    let mut ordered = Vec::with_capacity(sections.len());
    ordered.push(&sections[solution_configurations]);
    ordered.extend(project_configurations.map(|i| &sections[i]));
    ordered.push(&sections[solution_properties]);
    ordered.extend(nested_projects.map(|i| &sections[i]));
    ordered.extend(extensibility_globals.map(|i| &sections[i]));

    // Unclaimed sections (unknown kinds, duplicates of known kinds) keep
    // their original relative order at the end.
    for (index, section) in sections.iter().enumerate() {
        if !claimed[index] {
            ordered.push(section);
        }
    }

    Ok(ordered)
}

/// Index of the first unclaimed section matching `predicate`, marking it
/// claimed.
fn claim(
    sections: &[GlobalSection],
    claimed: &mut [bool],
    predicate: impl Fn(&GlobalSection) -> bool,
) -> Option<usize> {
    let index = sections
        .iter()
        .enumerate()
        .position(|(i, s)| !claimed[i] && predicate(s))?;
    claimed[index] = true;
    Some(index)
}
