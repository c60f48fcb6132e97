//! Template rendering for README generation.
//! Fills a user-supplied Markdown template with the generated tables and TOC
//! using MiniJinja.

use std::path::{Path, PathBuf};

use log::debug;
use minijinja::{Environment, ErrorKind};
use serde::Serialize;

use crate::error::Result;
use crate::extract::{
    data_sources_table, managed_resources_table, modules_table, outputs_table, vars_table,
    LinkBase,
};
use crate::module::Module;
use crate::toc::{render_toc, TocOptions};

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String>;
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a renderer whose `rawfile` function resolves paths against
    /// the current directory.
    pub fn new() -> Self {
        Self::with_base_dir(PathBuf::new())
    }

    /// Creates a renderer whose `rawfile` function resolves paths against
    /// `base_dir`, normally the directory holding the template.
    pub fn with_base_dir<P: Into<PathBuf>>(base_dir: P) -> Self {
        let base_dir = base_dir.into();
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        env.add_function("rawfile", move |path: String| rawfile(&base_dir, &path));
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

/// Inlines another file verbatim, e.g. `{{ rawfile("examples/basic.tf") }}`.
fn rawfile(base_dir: &Path, path: &str) -> std::result::Result<String, minijinja::Error> {
    let full_path = base_dir.join(path);
    debug!("Including raw file {}", full_path.display());
    std::fs::read_to_string(&full_path).map_err(|e| {
        minijinja::Error::new(
            ErrorKind::InvalidOperation,
            format!("cannot read '{}'", full_path.display()),
        )
        .with_source(e)
    })
}

impl TemplateRenderer for MiniJinjaRenderer {
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String> {
        let mut env = self.env.clone();
        env.add_template_owned("document", template.to_string())?;
        let tmpl = env.get_template("document")?;
        Ok(tmpl.render(context)?)
    }
}

/// Values available to a README template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TemplateData {
    pub vars_table: String,
    pub outputs_table: String,
    pub managed_resources_table: String,
    pub data_sources_table: String,
    pub modules_table: String,
    pub markdown_toc: String,
    pub repo_base_url: String,
}

impl TemplateData {
    pub fn new(module: &Module, base: &LinkBase, markdown_toc: String) -> Self {
        Self {
            vars_table: vars_table(module, base),
            outputs_table: outputs_table(module, base),
            managed_resources_table: managed_resources_table(module, base),
            data_sources_table: data_sources_table(module, base),
            modules_table: modules_table(module, base),
            markdown_toc,
            repo_base_url: base.repo_url.clone(),
        }
    }
}

/// Renders a README template for `module`.
///
/// The TOC is built from the template text itself, so headings produced
/// by template expressions are not part of it.
pub fn render_document(
    engine: &dyn TemplateRenderer,
    template: &str,
    module: &Module,
    base: &LinkBase,
    toc_options: &TocOptions,
) -> Result<String> {
    let toc = render_toc(template.as_bytes(), toc_options)?;
    let data = TemplateData::new(module, base, toc);
    let context = serde_json::to_value(&data)?;
    engine.render(template, &context)
}
