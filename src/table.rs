//! Markdown table rendering.

use std::sync::LazyLock;

use regex::Regex;

static LINE_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\r?\n").expect("valid regex"));

/// One data row, one string per column.
pub type TableRow = Vec<String>;

/// Headers, separator tokens and rows of a Markdown table.
///
/// `column_rules` and every row are expected to have as many entries as
/// `headers`. This is not checked: a mismatched row renders as a ragged line
/// rather than failing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableSpec {
    pub headers: Vec<String>,
    pub column_rules: Vec<String>,
    pub rows: Vec<TableRow>,
}

impl TableSpec {
    /// Creates an empty table with the given headers and separator tokens.
    pub fn new(headers: &[&str], column_rules: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            column_rules: column_rules.iter().map(|r| r.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn with_rows(mut self, rows: Vec<TableRow>) -> Self {
        self.rows = rows;
        self
    }
}

/// Keeps a cell on one physical line by turning line breaks into `<br>`.
///
/// Pipes are left as they are, so a `|` in a description shifts the
/// remaining cells of that row.
pub fn escape_cell(cell: &str) -> String {
    LINE_BREAK.replace_all(cell, "<br>").into_owned()
}

fn render_line<'a>(cells: impl Iterator<Item = &'a str>) -> String {
    let mut line = String::from("|");
    for cell in cells {
        line.push(' ');
        line.push_str(cell);
        line.push_str(" |");
    }
    line
}

/// Renders `spec` as a pipe table without a trailing newline.
///
/// Header and separator tokens are written verbatim; data cells go through
/// [`escape_cell`].
pub fn render_table(spec: &TableSpec) -> String {
    let mut lines = vec![
        render_line(spec.headers.iter().map(String::as_str)),
        render_line(spec.column_rules.iter().map(String::as_str)),
    ];
    for row in &spec.rows {
        let escaped: Vec<String> = row.iter().map(|cell| escape_cell(cell)).collect();
        lines.push(render_line(escaped.iter().map(String::as_str)));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_cell() {
        assert_eq!(escape_cell("one\ntwo\r\nthree"), "one<br>two<br>three");
        assert_eq!(escape_cell("a | b"), "a | b");
        assert_eq!(escape_cell("lone\rreturn"), "lone\rreturn");
    }

    #[test]
    fn test_render_empty_table() {
        let spec = TableSpec::new(&["Output name"], &["----"]);
        assert_eq!(render_table(&spec), "| Output name |\n| ---- |");
    }

    #[test]
    fn test_render_line_without_cells() {
        assert_eq!(render_line(std::iter::empty()), "|");
    }
}
