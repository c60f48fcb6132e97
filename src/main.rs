//! tfdocgen's application entry point.
//! Handles command-line argument parsing, loads module metadata and prints
//! the requested document fragment.

use std::io::Read;
use std::path::Path;

use tfdocgen::{
    cli::{get_args, Action, Args, ModuleSource, Settings},
    config::get_config,
    error::{default_error_handler, Error, Result},
    extract::{
        data_sources_table, managed_resources_table, modules_table, outputs_table, vars_table,
    },
    module::{inspect, Module},
    renderer::{render_document, MiniJinjaRenderer},
    toc::render_toc,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Trace
        } else {
            log::LevelFilter::Off
        })
        .init();

    match run(args) {
        Ok(document) => print!("{document}"),
        Err(err) => default_error_handler(err),
    }
}

fn load_module(source: &ModuleSource) -> Result<Module> {
    let module = match source {
        ModuleSource::Inspect { dir, inspector } => inspect(dir, inspector)?,
        ModuleSource::JsonFile(path) => Module::from_file(path)?,
        ModuleSource::Stdin => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Module::from_json(&buffer)?
        }
        ModuleSource::None => Module::default(),
    };
    module.check_diagnostics()?;
    Ok(module)
}

fn read_template(path: Option<&Path>) -> Result<Vec<u8>> {
    let Some(path) = path else {
        return Err(Error::ValidationError("no template path specified".into()));
    };
    log::debug!("Reading template {}", path.display());
    Ok(std::fs::read(path)?)
}

/// Main application logic execution.
///
/// # Flow
/// 1. Loads the module's configuration file and merges it with the flags
/// 2. Loads module metadata from the inspector or a JSON dump
/// 3. Renders the requested table, TOC or template
fn run(args: Args) -> Result<String> {
    let config = get_config(args.config_dir())?;
    let settings = Settings::resolve(args, config)?;
    log::debug!("Resolved settings: {settings:?}");

    let module = load_module(&settings.module)?;
    let base = &settings.link_base;

    let document = match settings.action {
        Action::VarsTable => vars_table(&module, base),
        Action::OutputsTable => outputs_table(&module, base),
        Action::ManagedResourcesTable => managed_resources_table(&module, base),
        Action::DataSourcesTable => data_sources_table(&module, base),
        Action::ModulesTable => modules_table(&module, base),
        Action::Toc => {
            let template = read_template(settings.template_path.as_deref())?;
            render_toc(&template, &settings.toc)?
        }
        // Rendered templates are printed exactly as produced
        Action::RenderTemplate => {
            let template_path = settings.template_path.as_deref();
            let template = String::from_utf8(read_template(template_path)?)
                .map_err(|e| Error::ValidationError(format!("template is not UTF-8: {e}")))?;
            let base_dir = template_path
                .and_then(Path::parent)
                .unwrap_or(Path::new(""));
            let engine = MiniJinjaRenderer::with_base_dir(base_dir);
            return render_document(&engine, &template, &module, base, &settings.toc);
        }
    };

    Ok(document + "\n")
}
