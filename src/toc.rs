//! Table of Contents generation for Markdown documents.
//!
//! The document is scanned once, line by line, keeping only the previous
//! line as look-back. Each line is classified as an ATX heading (`## Title`),
//! a Setext underline (`===` or `---` below a line of text) or plain text.
//! Headings that survive depth filtering and skipping become numbered list
//! entries linking to their anchors.

use std::collections::HashMap;
use std::io::BufRead;
use std::sync::LazyLock;

use log::debug;
use regex::Regex;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::slug::slugify;

/// Banner emitted before the entries.
pub const TOC_TITLE: &str = "Table of Contents";

/// Indentation unit for one level of nesting.
const INDENT: &str = "   ";

static ATX_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<indent>#+) ?(?P<title>.+)$")
        .expect("valid ATX heading regex")
});

/// Depth and skip settings for a TOC build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TocOptions {
    /// Deepest heading level to include, `0` for no limit.
    pub depth: usize,
    /// Number of leading headings to leave out.
    pub skip: usize,
}

impl Default for TocOptions {
    fn default() -> Self {
        Self { depth: 3, skip: 0 }
    }
}

/// A heading found while scanning, before filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingEvent {
    pub title: String,
    /// Zero-based nesting depth, `#` is 0.
    pub depth: usize,
    /// Zero-based index of the line that completed the heading.
    pub source_order: usize,
}

/// One line of the rendered TOC.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry {
    pub title: String,
    pub slug: String,
    pub depth: usize,
}

impl TocEntry {
    /// Renders the entry as an indented ordered-list link.
    pub fn render(&self) -> String {
        format!(
            "{}1. [{}](#{})",
            INDENT.repeat(self.depth),
            self.title,
            self.slug
        )
    }
}

#[derive(Debug, PartialEq, Eq)]
enum LineClass<'a> {
    Atx { level: usize, title: &'a str },
    SetextLevel1,
    SetextLevel2,
    Plain,
}

fn is_underline(line: &str, marker: char) -> bool {
    !line.is_empty() && line.chars().all(|c| c == marker)
}

/// Classifies `line`; an underline only counts below a non-blank line.
fn classify<'a>(line: &'a str, previous_line: &str) -> LineClass<'a> {
    let underlines_text = !previous_line.trim().is_empty();
    if let Some(caps) = ATX_HEADING.captures(line) {
        // Both groups are mandatory in the pattern
        let level = caps.name("indent").map_or(0, |m| m.as_str().len());
        let title = caps.name("title").map_or("", |m| m.as_str());
        LineClass::Atx { level, title }
    } else if underlines_text && is_underline(line, '=') {
        LineClass::SetextLevel1
    } else if underlines_text && is_underline(line, '-') {
        LineClass::SetextLevel2
    } else {
        LineClass::Plain
    }
}

/// Collects every heading of a document in source order.
///
/// # Errors
/// * `Error::Scan` if a line cannot be read, e.g. it is not valid UTF-8
pub fn scan_headings<R: BufRead>(reader: R) -> Result<Vec<HeadingEvent>> {
    let mut headings = Vec::new();
    let mut previous_line = String::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| Error::Scan {
            line: index + 1,
            reason: e.to_string(),
        })?;

        let heading = match classify(&line, &previous_line) {
            LineClass::Atx { level, title } => Some((title.to_string(), level - 1)),
            LineClass::SetextLevel1 => Some((previous_line.clone(), 0)),
            LineClass::SetextLevel2 => Some((previous_line.clone(), 1)),
            LineClass::Plain => None,
        };
        if let Some((title, depth)) = heading {
            headings.push(HeadingEvent {
                title,
                depth,
                source_order: index,
            });
        }

        previous_line = line;
    }

    Ok(headings)
}

/// Hands out unique anchors for a single TOC build.
#[derive(Debug, Default)]
struct SlugRegistry {
    seen: HashMap<String, usize>,
}

impl SlugRegistry {
    /// Registers `slug`, suffixing `-N` when it was already handed out.
    fn claim(&mut self, slug: String) -> String {
        let mut candidate = slug.clone();
        // A literal heading such as "Intro-1" may already own a suffixed form
        while self.seen.contains_key(&candidate) {
            let count = self.seen.entry(slug.clone()).or_insert(1);
            candidate = format!("{slug}-{count}");
            *count += 1;
        }
        self.seen.insert(candidate.clone(), 1);
        candidate
    }
}

/// Turns scanned headings into TOC entries.
///
/// Headings deeper than `options.depth` are dropped, then the first
/// `options.skip` remaining headings are dropped without claiming an anchor.
pub fn toc_entries(headings: Vec<HeadingEvent>, options: &TocOptions) -> Vec<TocEntry> {
    let mut registry = SlugRegistry::default();

    headings
        .into_iter()
        .filter(|h| options.depth == 0 || h.depth < options.depth)
        .skip(options.skip)
        .map(|h| {
            let slug = registry.claim(slugify(&h.title));
            TocEntry {
                title: h.title,
                slug,
                depth: h.depth,
            }
        })
        .collect()
}

/// Builds the TOC of a Markdown document.
///
/// # Arguments
/// * `document` - Raw Markdown text
/// * `max_depth` - Deepest heading level to include, `0` for no limit
/// * `skip` - Number of leading headings to leave out
///
/// # Returns
/// * `Result<Vec<String>>` - The title banner, its underline, then one line per entry
///
/// # Errors
/// * `Error::Scan` if the document cannot be scanned; no partial TOC is returned
pub fn build_toc(document: &[u8], max_depth: usize, skip: usize) -> Result<Vec<String>> {
    let options = TocOptions {
        depth: max_depth,
        skip,
    };
    let headings = scan_headings(document)?;
    debug!(
        "Found {} headings, building TOC with {:?}",
        headings.len(),
        options
    );

    let mut toc = vec![TOC_TITLE.to_string(), "=".repeat(TOC_TITLE.len())];
    toc.extend(toc_entries(headings, &options).iter().map(TocEntry::render));
    Ok(toc)
}

/// Same as [`build_toc`], joined into a single newline-separated string.
pub fn render_toc(document: &[u8], options: &TocOptions) -> Result<String> {
    Ok(build_toc(document, options.depth, options.skip)?.join("\n"))
}
