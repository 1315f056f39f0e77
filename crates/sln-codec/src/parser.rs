//! Solution document parser.
//!
//! Single-pass reader over a line stream: four header lines, zero or more
//! `Project` blocks, exactly one `Global` block of sections, then a
//! trailing-content check. One line of lookahead is held in a cursor; there
//! is no backtracking and no recovery — the first violation aborts the
//! parse with a descriptive error.

use crate::error::{Error, Result};
use crate::grammar;
use sln_model::{
    ConfigurationMapping, FormatVersion, GlobalSection, NestedProject, ProductVersion,
    ProjectConfiguration, ProjectRef, SectionContent, SectionScope, SolutionDocument,
    SECTION_NESTED_PROJECTS, SECTION_PROJECT_CONFIGURATIONS, SECTION_SOLUTION_CONFIGURATIONS,
};
use std::io::BufRead;
use tracing::{debug, trace};

/// Parse a solution document from a readable line stream.
///
/// The stream is consumed through the terminating blank line; any residual
/// non-blank content is a [`Error::TrailingContent`] error.
pub fn parse<R: BufRead>(reader: R) -> Result<SolutionDocument> {
    let mut cursor = Cursor::new(reader)?;

    // The reference toolchain writes a blank line before the header.
    while matches!(cursor.current(), Some(l) if l.trim().is_empty()) {
        cursor.advance()?;
    }

    let (format_version, editor_moniker, visual_studio_version, minimum_visual_studio_version) =
        parse_header(&mut cursor)?;
    let projects = parse_projects(&mut cursor)?;
    let sections = parse_global(&mut cursor)?;

    // Only blank lines may follow EndGlobal.
    while let Some(line) = cursor.current() {
        if !line.trim().is_empty() {
            return Err(Error::TrailingContent {
                line: cursor.line_number(),
                found: line.to_string(),
            });
        }
        cursor.advance()?;
    }

    debug!(
        projects = projects.len(),
        sections = sections.len(),
        "parsed solution document"
    );

    Ok(SolutionDocument {
        format_version,
        editor_moniker,
        visual_studio_version,
        minimum_visual_studio_version,
        projects,
        sections,
    })
}

/// Parse a solution document from an in-memory string.
pub fn parse_str(input: &str) -> Result<SolutionDocument> {
    parse(input.as_bytes())
}

/// Line cursor with one line of lookahead.
///
/// `current` holds the next unconsumed line with any trailing `\r`
/// stripped; `advance` replaces it with the following line.
struct Cursor<R: BufRead> {
    lines: std::io::Lines<R>,
    current: Option<String>,
    line_number: usize,
}

impl<R: BufRead> Cursor<R> {
    fn new(reader: R) -> Result<Self> {
        let mut cursor = Self {
            lines: reader.lines(),
            current: None,
            line_number: 0,
        };
        cursor.advance()?;
        Ok(cursor)
    }

    fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    fn line_number(&self) -> usize {
        self.line_number
    }

    fn advance(&mut self) -> Result<()> {
        self.current = match self.lines.next() {
            Some(line) => {
                let mut line = line?;
                if line.ends_with('\r') {
                    line.pop();
                }
                Some(line)
            }
            None => None,
        };
        self.line_number += 1;
        Ok(())
    }

    /// The current line, or an end-of-input error naming what was expected.
    fn expect_line(&self, expected: &str) -> Result<&str> {
        self.current()
            .ok_or_else(|| Error::eof(self.line_number, expected))
    }
}

/// Read and validate the four fixed-shape header lines.
fn parse_header<R: BufRead>(
    cursor: &mut Cursor<R>,
) -> Result<(FormatVersion, String, ProductVersion, ProductVersion)> {
    let line = cursor.expect_line("format version header")?;
    if !line.trim().starts_with(grammar::FORMAT_VERSION_PREFIX) {
        return Err(Error::structural(
            cursor.line_number(),
            format!("header starting with {:?}", grammar::FORMAT_VERSION_PREFIX),
            line,
        ));
    }
    let format_version: FormatVersion = parse_trailing_version(cursor)?;
    cursor.advance()?;

    // The moniker line (e.g. "# Visual Studio Version 17") is opaque.
    let editor_moniker = cursor.expect_line("editor moniker line")?.to_string();
    cursor.advance()?;

    let visual_studio_version =
        parse_versioned_header(cursor, grammar::VISUAL_STUDIO_VERSION)?;
    let minimum_visual_studio_version =
        parse_versioned_header(cursor, grammar::MINIMUM_VISUAL_STUDIO_VERSION)?;

    Ok((
        format_version,
        editor_moniker,
        visual_studio_version,
        minimum_visual_studio_version,
    ))
}

/// Validate a `<keyword> = <version>` header line and extract the version.
fn parse_versioned_header<R: BufRead>(
    cursor: &mut Cursor<R>,
    keyword: &str,
) -> Result<ProductVersion> {
    let line = cursor.expect_line(keyword)?;
    if !grammar::keyword_at_start(line.trim(), keyword) {
        return Err(Error::structural(
            cursor.line_number(),
            format!("{keyword} header line"),
            line,
        ));
    }
    let version: ProductVersion = parse_trailing_version(cursor)?;
    cursor.advance()?;
    Ok(version)
}

/// Extract the trailing whitespace-separated token of the current line and
/// parse it as a version.
fn parse_trailing_version<V>(cursor: &Cursor<impl BufRead>) -> Result<V>
where
    V: std::str::FromStr<Err = sln_model::Error>,
{
    let line = cursor.current().unwrap_or_default();
    let token = line.split_whitespace().next_back().unwrap_or_default();
    token
        .parse()
        .map_err(|e| Error::value(cursor.line_number(), e))
}

/// Parse consecutive `Project(...)` / `EndProject` blocks.
fn parse_projects<R: BufRead>(cursor: &mut Cursor<R>) -> Result<Vec<ProjectRef>> {
    let mut projects = Vec::new();
    loop {
        let line = cursor.expect_line("Project block or Global block")?;
        let trimmed = line.trim();
        if !grammar::is_project_start(trimmed) {
            break;
        }

        let (type_token, name, path, id_token) =
            grammar::project_fields(trimmed).ok_or_else(|| {
                Error::structural(
                    cursor.line_number(),
                    "Project declaration with four quoted fields",
                    line,
                )
            })?;
        let type_id = grammar::parse_guid(type_token)
            .map_err(|e| Error::value(cursor.line_number(), e.into()))?;
        let project_id = grammar::parse_guid(id_token)
            .map_err(|e| Error::value(cursor.line_number(), e.into()))?;
        let project = ProjectRef::new(type_id, name, path, project_id);
        cursor.advance()?;

        let closer = cursor.expect_line(grammar::PROJECT_END)?;
        if !grammar::is_project_end(closer.trim()) {
            return Err(Error::structural(
                cursor.line_number(),
                grammar::PROJECT_END,
                closer,
            ));
        }
        cursor.advance()?;

        trace!(name = %project.name, "parsed project reference");
        projects.push(project);
    }
    Ok(projects)
}

/// Parse the single `Global` block and its sections.
fn parse_global<R: BufRead>(cursor: &mut Cursor<R>) -> Result<Vec<GlobalSection>> {
    let opener = cursor.expect_line(grammar::GLOBAL_START)?;
    if !grammar::is_global_start(opener.trim()) {
        return Err(Error::structural(
            cursor.line_number(),
            grammar::GLOBAL_START,
            opener,
        ));
    }
    cursor.advance()?;

    let mut sections = Vec::new();
    loop {
        let line = cursor.expect_line("GlobalSection or EndGlobal")?;
        let trimmed = line.trim();
        if grammar::is_global_end(trimmed) {
            cursor.advance()?;
            return Ok(sections);
        }
        if !grammar::is_section_start(trimmed) {
            return Err(Error::structural(
                cursor.line_number(),
                "GlobalSection or EndGlobal",
                line,
            ));
        }
        sections.push(parse_section(cursor)?);
    }
}

/// Parse one `GlobalSection(...)` / `EndGlobalSection` block, dispatching
/// to the sub-parser for its name.
fn parse_section<R: BufRead>(cursor: &mut Cursor<R>) -> Result<GlobalSection> {
    let line = cursor.expect_line("GlobalSection header")?;
    let (name, scope_token) = grammar::section_header(line.trim()).ok_or_else(|| {
        Error::structural(
            cursor.line_number(),
            "GlobalSection(<name>) = <scope>",
            line,
        )
    })?;
    let scope: SectionScope = scope_token
        .parse()
        .map_err(|e| Error::value(cursor.line_number(), e))?;
    let name = name.to_string();
    cursor.advance()?;

    trace!(section = %name, "parsing global section");
    let content = if name == SECTION_SOLUTION_CONFIGURATIONS {
        SectionContent::SolutionConfigurations(parse_solution_configurations(cursor)?)
    } else if name == SECTION_PROJECT_CONFIGURATIONS {
        SectionContent::ProjectConfigurations(parse_project_configurations(cursor)?)
    } else if name == SECTION_NESTED_PROJECTS {
        SectionContent::NestedProjects(parse_nested_projects(cursor)?)
    } else {
        SectionContent::General {
            lines: parse_general_lines(cursor)?,
            name,
        }
    };

    let closer = cursor.expect_line(grammar::SECTION_END)?;
    if !grammar::is_section_end(closer.trim()) {
        return Err(Error::structural(
            cursor.line_number(),
            grammar::SECTION_END,
            closer,
        ));
    }
    cursor.advance()?;

    Ok(GlobalSection::new(scope, content))
}

/// Split a section body line as an assignment, or fail structurally.
fn expect_assignment(line_number: usize, line: &str) -> Result<(&str, &str)> {
    grammar::split_assignment(line.trim())
        .ok_or_else(|| Error::structural(line_number, "assignment line (lhs = rhs)", line))
}

fn parse_solution_configurations<R: BufRead>(
    cursor: &mut Cursor<R>,
) -> Result<Vec<ConfigurationMapping>> {
    let mut entries = Vec::new();
    while let Some(line) = section_body_line(cursor)? {
        let (lhs, rhs) = expect_assignment(cursor.line_number(), &line)?;
        let key = lhs
            .parse()
            .map_err(|e| Error::value(cursor.line_number(), e))?;
        let value = rhs
            .parse()
            .map_err(|e| Error::value(cursor.line_number(), e))?;
        entries.push(ConfigurationMapping { key, value });
        cursor.advance()?;
    }
    Ok(entries)
}

fn parse_project_configurations<R: BufRead>(
    cursor: &mut Cursor<R>,
) -> Result<Vec<ProjectConfiguration>> {
    let mut entries = Vec::new();
    while let Some(line) = section_body_line(cursor)? {
        let (lhs, rhs) = expect_assignment(cursor.line_number(), &line)?;

        // Lhs shape: {Guid}.Cfg|Platform.Indicator — the GUID never
        // contains a dot, the indicator may (Build.0).
        let parts = lhs.split_once('.').and_then(|(guid, rest)| {
            rest.split_once('.').map(|(cfg, indicator)| (guid, cfg, indicator))
        });
        let (guid_token, config_token, indicator_token) = parts.ok_or_else(|| {
            Error::structural(
                cursor.line_number(),
                "{Guid}.Cfg|Platform.Indicator key",
                &line,
            )
        })?;

        let project_id = grammar::parse_guid(guid_token)
            .map_err(|e| Error::value(cursor.line_number(), e.into()))?;
        let solution_configuration = config_token
            .parse()
            .map_err(|e| Error::value(cursor.line_number(), e))?;
        let indicator = indicator_token
            .parse()
            .map_err(|e| Error::value(cursor.line_number(), e))?;
        let project_configuration = rhs
            .parse()
            .map_err(|e| Error::value(cursor.line_number(), e))?;

        entries.push(ProjectConfiguration {
            project_id,
            solution_configuration,
            indicator,
            project_configuration,
        });
        cursor.advance()?;
    }
    Ok(entries)
}

fn parse_nested_projects<R: BufRead>(cursor: &mut Cursor<R>) -> Result<Vec<NestedProject>> {
    let mut entries = Vec::new();
    while let Some(line) = section_body_line(cursor)? {
        let (lhs, rhs) = expect_assignment(cursor.line_number(), &line)?;
        let child_id = grammar::parse_guid(lhs)
            .map_err(|e| Error::value(cursor.line_number(), e.into()))?;
        let parent_id = grammar::parse_guid(rhs)
            .map_err(|e| Error::value(cursor.line_number(), e.into()))?;
        entries.push(NestedProject {
            child_id,
            parent_id,
        });
        cursor.advance()?;
    }
    Ok(entries)
}

/// Accumulate raw content lines until the section closer. The canonical
/// two-tab prefix is stripped (the serializer re-applies it); everything
/// past that prefix is kept verbatim, so deeper indentation survives a
/// round trip.
fn parse_general_lines<R: BufRead>(cursor: &mut Cursor<R>) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    while let Some(line) = section_body_line(cursor)? {
        lines.push(strip_section_indent(&line).to_string());
        cursor.advance()?;
    }
    Ok(lines)
}

/// Strip at most the canonical section-body indentation from a general
/// content line: two tabs, or whatever shallower indentation is present.
fn strip_section_indent(line: &str) -> &str {
    line.strip_prefix("\t\t")
        .or_else(|| line.strip_prefix('\t'))
        .unwrap_or_else(|| line.trim_start())
}

/// The current line if it is still part of the section body, `None` once
/// the closer is reached. End of input inside a section is an error.
fn section_body_line(cursor: &Cursor<impl BufRead>) -> Result<Option<String>> {
    let line = cursor.expect_line(grammar::SECTION_END)?;
    if grammar::is_section_end(line.trim()) {
        Ok(None)
    } else {
        Ok(Some(line.to_string()))
    }
}
