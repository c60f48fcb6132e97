//! Maps module metadata onto Markdown tables.
//!
//! Every table sorts its rows by a key derived from the item's name, so the
//! output does not depend on the order the inspector reported items in.

use std::collections::BTreeMap;

use crate::module::{Module, Resource, SourcePos};
use crate::table::{render_table, TableRow, TableSpec};

/// Prefix pieces for source links.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkBase {
    pub repo_url: String,
    pub module_path: String,
}

impl LinkBase {
    pub fn new(repo_url: impl Into<String>, module_path: impl Into<String>) -> Self {
        Self {
            repo_url: repo_url.into(),
            module_path: module_path.into(),
        }
    }
}

/// Renders a line-anchored link to where an item is declared:
/// `[main.tf: 12](<repo_url>/<module_path>/main.tf#L12)`.
pub fn source_link(pos: &SourcePos, base: &LinkBase) -> String {
    let file = pos.file_name();
    format!(
        "[{file}: {line}]({repo}/{module}/{file}#L{line})",
        line = pos.line,
        repo = base.repo_url,
        module = base.module_path,
    )
}

/// Collects keyed rows and emits them in ascending key order.
fn sorted_rows<K: Ord>(keyed: impl IntoIterator<Item = (K, TableRow)>) -> Vec<TableRow> {
    keyed.into_iter().collect::<BTreeMap<_, _>>().into_values().collect()
}

pub fn vars_table(module: &Module, base: &LinkBase) -> String {
    let rows = sorted_rows(module.variables.values().map(|v| {
        let row = vec![
            v.name.clone(),
            v.type_name.clone(),
            v.description.clone(),
            source_link(&v.pos, base),
        ];
        (v.name.clone(), row)
    }));

    render_table(
        &TableSpec::new(
            &["Variable", "Type", "Description", "Code Position"],
            &["----", "------", "--------", "------"],
        )
        .with_rows(rows),
    )
}

pub fn outputs_table(module: &Module, base: &LinkBase) -> String {
    let rows = sorted_rows(module.outputs.values().map(|o| {
        let row = vec![
            o.name.clone(),
            o.description.clone(),
            source_link(&o.pos, base),
        ];
        (o.name.clone(), row)
    }));

    render_table(
        &TableSpec::new(
            &["Output name", "Description", "Code Position"],
            &["----", "--------", "------"],
        )
        .with_rows(rows),
    )
}

fn resource_table<'a>(resources: impl Iterator<Item = &'a Resource>, base: &LinkBase) -> String {
    // Ordered by name; the type only breaks ties between same-named resources
    let rows = sorted_rows(resources.map(|r| {
        let row = vec![
            r.name.clone(),
            r.type_name.clone(),
            source_link(&r.pos, base),
        ];
        ((r.name.clone(), r.type_name.clone()), row)
    }));

    render_table(
        &TableSpec::new(
            &["Resource Name", "Resource Type", "Code Position"],
            &["----", "--------", "------"],
        )
        .with_rows(rows),
    )
}

pub fn managed_resources_table(module: &Module, base: &LinkBase) -> String {
    resource_table(module.managed_resources.values(), base)
}

pub fn data_sources_table(module: &Module, base: &LinkBase) -> String {
    resource_table(module.data_resources.values(), base)
}

pub fn modules_table(module: &Module, base: &LinkBase) -> String {
    let rows = sorted_rows(module.module_calls.values().map(|m| {
        let row = vec![m.name.clone(), m.source.clone(), source_link(&m.pos, base)];
        (m.name.clone(), row)
    }));

    render_table(
        &TableSpec::new(
            &["Module Name", "Module Source", "Module Location"],
            &["----", "--------", "------"],
        )
        .with_rows(rows),
    )
}
