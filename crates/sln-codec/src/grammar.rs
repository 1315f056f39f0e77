//! Line-pattern recognizers shared by the parser and the serializer.
//!
//! Every recognizer matches against a *trimmed* line. Keyword checks
//! require a word boundary after the keyword so that `EndGlobal` does not
//! claim an `EndGlobalSection` line, and `Global` does not claim a
//! `GlobalSection(...)` header.

use regex::Regex;
use std::sync::LazyLock;
use uuid::Uuid;

/// Fixed prefix of the format-version header line.
pub const FORMAT_VERSION_PREFIX: &str = "Microsoft Visual Studio Solution File, Format Version";
/// Keyword of the `VisualStudioVersion = ...` header line.
pub const VISUAL_STUDIO_VERSION: &str = "VisualStudioVersion";
/// Keyword of the `MinimumVisualStudioVersion = ...` header line.
pub const MINIMUM_VISUAL_STUDIO_VERSION: &str = "MinimumVisualStudioVersion";

pub const PROJECT_START: &str = "Project(";
pub const PROJECT_END: &str = "EndProject";
pub const GLOBAL_START: &str = "Global";
pub const GLOBAL_END: &str = "EndGlobal";
pub const SECTION_START: &str = "GlobalSection(";
pub const SECTION_END: &str = "EndGlobalSection";

/// Matches a project declaration line and captures its four quoted fields:
/// type GUID, display name, relative path, project GUID.
static PROJECT_LINE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^Project\("([^"]*)"\)\s*=\s*"([^"]*)",\s*"([^"]*)",\s*"([^"]*)"$"#)
        .expect("Invalid project line regex")
});

/// Matches a section header line and captures the parenthesized name and
/// the right-hand scope token.
static SECTION_HEADER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^GlobalSection\(([^)]*)\)\s*=\s*(\S+)$").expect("Invalid section header regex")
});

/// True if `line` starts with `keyword` followed by a word boundary.
pub fn keyword_at_start(line: &str, keyword: &str) -> bool {
    match line.strip_prefix(keyword) {
        Some(rest) => !rest.starts_with(|c: char| c.is_ascii_alphanumeric()),
        None => false,
    }
}

pub fn is_project_start(line: &str) -> bool {
    line.starts_with(PROJECT_START)
}

pub fn is_project_end(line: &str) -> bool {
    keyword_at_start(line, PROJECT_END)
}

pub fn is_global_start(line: &str) -> bool {
    keyword_at_start(line, GLOBAL_START)
}

pub fn is_global_end(line: &str) -> bool {
    keyword_at_start(line, GLOBAL_END)
}

pub fn is_section_start(line: &str) -> bool {
    line.starts_with(SECTION_START)
}

pub fn is_section_end(line: &str) -> bool {
    keyword_at_start(line, SECTION_END)
}

/// Extract the four quoted fields of a project declaration line, in
/// left-to-right order.
pub fn project_fields(line: &str) -> Option<(&str, &str, &str, &str)> {
    let caps = PROJECT_LINE_REGEX.captures(line)?;
    Some((
        caps.get(1).unwrap().as_str(),
        caps.get(2).unwrap().as_str(),
        caps.get(3).unwrap().as_str(),
        caps.get(4).unwrap().as_str(),
    ))
}

/// Extract the name and scope token from a `GlobalSection(...)` header.
pub fn section_header(line: &str) -> Option<(&str, &str)> {
    let caps = SECTION_HEADER_REGEX.captures(line)?;
    Some((caps.get(1).unwrap().as_str(), caps.get(2).unwrap().as_str()))
}

/// Split an assignment line on the first `=`, trimming both tokens.
pub fn split_assignment(line: &str) -> Option<(&str, &str)> {
    line.split_once('=')
        .map(|(lhs, rhs)| (lhs.trim(), rhs.trim()))
}

/// Strip enclosing braces from a GUID token, if present.
pub fn strip_braces(token: &str) -> &str {
    token
        .strip_prefix('{')
        .and_then(|t| t.strip_suffix('}'))
        .unwrap_or(token)
}

/// Parse a GUID token, with or without braces, any case.
pub fn parse_guid(token: &str) -> Result<Uuid, uuid::Error> {
    Uuid::parse_str(strip_braces(token.trim()))
}

/// Render a GUID in the canonical braced upper-case form.
pub fn format_guid(guid: &Uuid) -> String {
    let mut buffer = Uuid::encode_buffer();
    format!("{{{}}}", guid.hyphenated().encode_upper(&mut buffer))
}
