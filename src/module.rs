//! Terraform module metadata as reported by `terraform-config-inspect --json`.
//!
//! HCL is never parsed here. The inspector is either run as a child process
//! or its JSON output is read from a file.

use std::path::Path;
use std::process::{Command, Stdio};

use indexmap::IndexMap;
use log::{debug, warn};
use serde::Deserialize;

use crate::error::{Error, Result};

/// Executable used when no inspector is configured.
pub const DEFAULT_INSPECTOR: &str = "terraform-config-inspect";

/// Where an item is declared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SourcePos {
    pub filename: String,
    pub line: usize,
}

impl SourcePos {
    /// Final path component of the declaring file.
    pub fn file_name(&self) -> &str {
        self.filename.rsplit('/').next().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Variable {
    pub name: String,
    #[serde(rename = "type", default)]
    pub type_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub pos: SourcePos,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Output {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub pos: SourcePos,
}

/// A managed resource or a data source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Resource {
    #[serde(default)]
    pub mode: String,
    #[serde(rename = "type")]
    pub type_name: String,
    pub name: String,
    #[serde(default)]
    pub pos: SourcePos,
}

/// A nested `module` block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ModuleCall {
    pub name: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub pos: SourcePos,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub summary: String,
    #[serde(default)]
    pub detail: String,
}

/// Everything the inspector reports about one module directory.
///
/// Collections are keyed the way the inspector keys them and carry no
/// meaningful order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Module {
    pub path: String,
    pub variables: IndexMap<String, Variable>,
    pub outputs: IndexMap<String, Output>,
    pub managed_resources: IndexMap<String, Resource>,
    pub data_resources: IndexMap<String, Resource>,
    pub module_calls: IndexMap<String, ModuleCall>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Module {
    /// Parses an inspector JSON document.
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Reads and parses an inspector JSON dump.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading module metadata from {}", path.display());
        let content = std::fs::read_to_string(path).map_err(Error::IoError)?;
        Self::from_json(&content)
    }

    /// Fails if the inspector reported any error diagnostics.
    ///
    /// Warnings are logged and otherwise ignored.
    pub fn check_diagnostics(&self) -> Result<()> {
        let mut errors = Vec::new();
        for diagnostic in &self.diagnostics {
            match diagnostic.severity {
                Severity::Error => errors.push(diagnostic.summary.as_str()),
                Severity::Warning => warn!("{}: {}", diagnostic.summary, diagnostic.detail),
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(Error::ModuleLoad(errors.join("; ")))
        }
    }
}

/// Runs the inspector on `module_dir` and parses its output.
///
/// # Arguments
/// * `module_dir` - Directory containing the Terraform module
/// * `inspector` - Inspector executable, usually [`DEFAULT_INSPECTOR`]
///
/// # Errors
/// * `Error::Inspect` if the inspector cannot be started or exits unsuccessfully
/// * `Error::Json` if its output is not a valid inspection document
pub fn inspect<P: AsRef<Path>>(module_dir: P, inspector: &str) -> Result<Module> {
    let module_dir = module_dir.as_ref();
    debug!("Running {} on {}", inspector, module_dir.display());

    let output = Command::new(inspector)
        .arg("--json")
        .arg(module_dir)
        .stdin(Stdio::null())
        .output()
        .map_err(|e| Error::Inspect(format!("failed to run '{inspector}': {e}")))?;

    if !output.status.success() {
        return Err(Error::Inspect(format!(
            "'{inspector}' exited with {}: {}",
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        )));
    }

    let stdout = String::from_utf8(output.stdout)
        .map_err(|e| Error::Inspect(format!("output is not UTF-8: {e}")))?;
    Module::from_json(&stdout)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name() {
        let pos = SourcePos {
            filename: "modules/net/variables.tf".into(),
            line: 3,
        };
        assert_eq!(pos.file_name(), "variables.tf");

        let pos = SourcePos {
            filename: "main.tf".into(),
            line: 1,
        };
        assert_eq!(pos.file_name(), "main.tf");
    }
}
