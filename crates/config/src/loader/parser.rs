//! INI-style config file parsing.
//!
//! Responsibilities:
//! - Split config text into an ordered list of sections with their `key=value` entries.
//! - Normalize section headers into profile names.
//! - Report structural errors with the offending 1-based line number.
//!
//! Does NOT handle:
//! - Reading files (see builder.rs).
//! - Interpreting keys; sections keep every entry, recognized or not.
//!
//! Invariants:
//! - Blank lines and lines starting with `#` or `;` are ignored.
//! - Only the first `=` splits a line; key and value are trimmed.
//! - Section order and entry order match the input.
//! - Header names may contain anything except `]`.

use thiserror::Error;

use crate::constants::{DEFAULT_PROFILE_NAME, PROFILE_SECTION_PREFIX};

/// A structural error found while parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line}: {message}")]
pub struct ParseError {
    pub line: usize,
    pub message: String,
}

impl ParseError {
    fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }
}

/// One `key=value` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key: String,
    pub value: String,
    pub line: usize,
}

/// A bracketed section and the entries that follow it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Header text between the brackets, trimmed.
    pub header: String,
    /// Line the header was declared on.
    pub line: usize,
    pub entries: Vec<Entry>,
}

impl Section {
    /// Profile name derived from the header.
    pub fn profile_name(&self) -> &str {
        normalize_section_name(&self.header)
    }
}

/// Map a trimmed section header to a profile name.
///
/// `default` stays `default`, `profile <name>` becomes `<name>` (trimmed) and
/// anything else is used verbatim.
pub fn normalize_section_name(header: &str) -> &str {
    if header == DEFAULT_PROFILE_NAME {
        return DEFAULT_PROFILE_NAME;
    }
    match header.strip_prefix(PROFILE_SECTION_PREFIX) {
        Some(rest) => rest.trim(),
        None => header,
    }
}

fn is_comment(line: &str) -> bool {
    line.starts_with('#') || line.starts_with(';')
}

/// Parse config text into sections.
pub fn parse_sections(contents: &str) -> Result<Vec<Section>, ParseError> {
    let contents = contents.strip_prefix('\u{feff}').unwrap_or(contents);
    let mut sections: Vec<Section> = Vec::new();

    for (index, raw) in contents.lines().enumerate() {
        let line_no = index + 1;
        let line = raw.trim();

        if line.is_empty() || is_comment(line) {
            continue;
        }

        if let Some(rest) = line.strip_prefix('[') {
            sections.push(parse_header(rest, line_no)?);
            continue;
        }

        let Some(section) = sections.last_mut() else {
            return Err(ParseError::new(
                line_no,
                "key/value line appears before any section header",
            ));
        };

        let Some((key, value)) = line.split_once('=') else {
            return Err(ParseError::new(
                line_no,
                format!("expected `key=value`, found `{}`", line),
            ));
        };

        let key = key.trim();
        if key.is_empty() {
            return Err(ParseError::new(line_no, "missing key before `=`"));
        }

        section.entries.push(Entry {
            key: key.to_string(),
            value: value.trim().to_string(),
            line: line_no,
        });
    }

    Ok(sections)
}

/// Parse the part of a header line after the opening `[`.
fn parse_header(rest: &str, line_no: usize) -> Result<Section, ParseError> {
    let Some((header, trailing)) = rest.split_once(']') else {
        return Err(ParseError::new(line_no, "unterminated section header"));
    };

    let trailing = trailing.trim();
    if !trailing.is_empty() && !is_comment(trailing) {
        return Err(ParseError::new(
            line_no,
            format!("unexpected text after section header: `{}`", trailing),
        ));
    }

    let header = header.trim();
    if header.is_empty() {
        return Err(ParseError::new(line_no, "empty section header"));
    }

    Ok(Section {
        header: header.to_string(),
        line: line_no,
        entries: Vec::new(),
    })
}
