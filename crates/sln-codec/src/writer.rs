//! Solution document serializer.
//!
//! Mirror of the parser: header lines, project blocks in stored order, then
//! the `Global` block with sections in canonical order. Indentation is
//! tab-based and managed by a small stateful writer that prefixes every
//! emitted line with the current depth.
//!
//! Canonical ordering is computed before anything is written, so a missing
//! required section fails without emitting a single byte.

use crate::error::Result;
use crate::grammar;
use crate::order::canonical_order;
use sln_model::{GlobalSection, ProjectRef, SectionContent, SolutionDocument};
use std::io::Write;
use tracing::debug;

/// Serialize a document to a writable stream.
pub fn write<W: Write>(document: &SolutionDocument, out: W) -> Result<()> {
    let ordered = canonical_order(&document.sections)?;

    let mut out = IndentWriter::new(out);
    out.blank()?;
    out.line(&format!(
        "{} {}",
        grammar::FORMAT_VERSION_PREFIX,
        document.format_version
    ))?;
    out.line(&document.editor_moniker)?;
    out.line(&format!(
        "{} = {}",
        grammar::VISUAL_STUDIO_VERSION,
        document.visual_studio_version
    ))?;
    out.line(&format!(
        "{} = {}",
        grammar::MINIMUM_VISUAL_STUDIO_VERSION,
        document.minimum_visual_studio_version
    ))?;

    for project in &document.projects {
        write_project(&mut out, project)?;
    }

    out.line(grammar::GLOBAL_START)?;
    out.indent();
    for section in ordered {
        write_section(&mut out, section)?;
    }
    out.dedent();
    out.line(grammar::GLOBAL_END)?;

    debug!(
        projects = document.projects.len(),
        sections = document.sections.len(),
        "serialized solution document"
    );
    Ok(())
}

/// Serialize a document to an in-memory string.
pub fn write_string(document: &SolutionDocument) -> Result<String> {
    let mut buffer = Vec::new();
    write(document, &mut buffer)?;
    Ok(String::from_utf8(buffer).expect("serializer emits UTF-8"))
}

fn write_project<W: Write>(out: &mut IndentWriter<W>, project: &ProjectRef) -> Result<()> {
    out.line(&format!(
        r#"Project("{}") = "{}", "{}", "{}""#,
        grammar::format_guid(&project.type_id),
        project.name,
        project.path,
        grammar::format_guid(&project.project_id)
    ))?;
    out.line(grammar::PROJECT_END)?;
    Ok(())
}

fn write_section<W: Write>(out: &mut IndentWriter<W>, section: &GlobalSection) -> Result<()> {
    out.line(&format!(
        "GlobalSection({}) = {}",
        section.name(),
        section.scope
    ))?;
    out.indent();
    match &section.content {
        SectionContent::SolutionConfigurations(entries) => {
            for entry in entries {
                out.line(&format!("{} = {}", entry.key, entry.value))?;
            }
        }
        SectionContent::ProjectConfigurations(entries) => {
            for entry in entries {
                out.line(&format!(
                    "{}.{}.{} = {}",
                    grammar::format_guid(&entry.project_id),
                    entry.solution_configuration,
                    entry.indicator,
                    entry.project_configuration
                ))?;
            }
        }
        SectionContent::NestedProjects(entries) => {
            for entry in entries {
                out.line(&format!(
                    "{} = {}",
                    grammar::format_guid(&entry.child_id),
                    grammar::format_guid(&entry.parent_id)
                ))?;
            }
        }
        SectionContent::General { lines, .. } => {
            for line in lines {
                out.line(line)?;
            }
        }
    }
    out.dedent();
    out.line(grammar::SECTION_END)?;
    Ok(())
}

/// Line writer that prefixes each line with the current tab depth.
struct IndentWriter<W: Write> {
    out: W,
    depth: usize,
}

impl<W: Write> IndentWriter<W> {
    fn new(out: W) -> Self {
        Self { out, depth: 0 }
    }

    fn indent(&mut self) {
        self.depth += 1;
    }

    fn dedent(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    fn line(&mut self, content: &str) -> std::io::Result<()> {
        for _ in 0..self.depth {
            self.out.write_all(b"\t")?;
        }
        self.out.write_all(content.as_bytes())?;
        self.out.write_all(b"\n")
    }

    fn blank(&mut self) -> std::io::Result<()> {
        self.out.write_all(b"\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_writer_prefixes_depth() {
        let mut buffer = Vec::new();
        let mut w = IndentWriter::new(&mut buffer);
        w.line("a").unwrap();
        w.indent();
        w.indent();
        w.line("b").unwrap();
        w.dedent();
        w.line("c").unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "a\n\t\tb\n\tc\n");
    }
}
