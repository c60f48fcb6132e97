//! Command-line interface implementation for tfdocgen.
//! Provides argument parsing with clap and merges the parsed flags with the
//! module's configuration file.

use clap::{error::ErrorKind, CommandFactory, Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::extract::LinkBase;
use crate::module::DEFAULT_INSPECTOR;
use crate::toc::TocOptions;

/// What to print.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Table of input variables
    #[value(alias = "VarsTable")]
    VarsTable,
    /// Table of outputs
    #[value(alias = "OutputsTable")]
    OutputsTable,
    /// Table of managed resources
    #[value(alias = "ManagedResourcesTable")]
    ManagedResourcesTable,
    /// Table of data sources
    #[value(alias = "DataSourcesTable")]
    DataSourcesTable,
    /// Table of nested module calls
    #[value(alias = "ModulesTable")]
    ModulesTable,
    /// Table of Contents of the template
    #[value(alias = "Toc")]
    Toc,
    /// The template filled with every table and the TOC
    #[value(alias = "RenderTemplate")]
    RenderTemplate,
}

impl Action {
    fn needs_template(self) -> bool {
        matches!(self, Action::Toc | Action::RenderTemplate)
    }

    fn needs_module(self) -> bool {
        self != Action::Toc
    }
}

/// Command-line arguments structure for tfdocgen.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "tfdocgen: Markdown documentation for Terraform modules",
    long_about = None
)]
pub struct Args {
    /// The action to perform
    #[arg(short, long, value_enum)]
    pub action: Action,

    /// Path to the Terraform module to inspect
    #[arg(short, long, value_name = "DIR")]
    pub path: Option<PathBuf>,

    /// Read inspector JSON output from this file instead of running the
    /// inspector ("-" reads stdin)
    #[arg(long, value_name = "FILE")]
    pub module_json: Option<PathBuf>,

    /// Inspector executable, called as `<inspector> --json <DIR>`
    #[arg(long, value_name = "CMD", default_value = DEFAULT_INSPECTOR)]
    pub inspector: String,

    /// Path to the Markdown template to render
    #[arg(short, long, value_name = "FILE")]
    pub template_path: Option<PathBuf>,

    /// URL prefix used for source links
    #[arg(long, value_name = "URL")]
    pub repo_url: Option<String>,

    /// Path of the module relative to the repository
    #[arg(long, value_name = "PATH")]
    pub module_path: Option<String>,

    /// Deepest heading level included in the TOC, 0 for all
    #[arg(long, value_name = "N")]
    pub toc_depth: Option<usize>,

    /// Number of leading headings left out of the TOC
    #[arg(long, value_name = "N")]
    pub toc_skip: Option<usize>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Directory searched for a configuration file.
    pub fn config_dir(&self) -> PathBuf {
        self.path.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}

/// Where module metadata comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModuleSource {
    /// Run the inspector on a module directory
    Inspect { dir: PathBuf, inspector: String },
    /// Read a saved inspector JSON document
    JsonFile(PathBuf),
    /// Read an inspector JSON document from stdin
    Stdin,
    /// The action does not use module metadata
    None,
}

/// Fully resolved options for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub action: Action,
    pub module: ModuleSource,
    pub template_path: Option<PathBuf>,
    pub link_base: LinkBase,
    pub toc: TocOptions,
}

impl Settings {
    /// Merges command-line flags over configuration values.
    ///
    /// # Errors
    /// * `Error::ValidationError` if the action lacks a template or module
    pub fn resolve(args: Args, config: Config) -> Result<Self> {
        // Paths in a config file are relative to the directory holding it
        let config_dir = args.config_dir();
        let template_path = args
            .template_path
            .or_else(|| config.template_path.map(|path| config_dir.join(path)));
        if args.action.needs_template() && template_path.is_none() {
            return Err(Error::ValidationError(
                "no template path specified (use --template-path)".to_string(),
            ));
        }

        let module = match (args.module_json, args.path) {
            _ if !args.action.needs_module() => ModuleSource::None,
            (Some(file), _) if file.as_os_str() == "-" => ModuleSource::Stdin,
            (Some(file), _) => ModuleSource::JsonFile(file),
            (None, Some(dir)) => ModuleSource::Inspect {
                dir,
                inspector: args.inspector,
            },
            (None, None) => {
                return Err(Error::ValidationError(
                    "no module specified (use --path or --module-json)".to_string(),
                ));
            }
        };

        let link_base = LinkBase::new(
            args.repo_url.or(config.repo_url).unwrap_or_default(),
            args.module_path.or(config.module_path).unwrap_or_default(),
        );
        let toc = TocOptions {
            depth: args.toc_depth.unwrap_or(config.toc.depth),
            skip: args.toc_skip.unwrap_or(config.toc.skip),
        };

        Ok(Self {
            action: args.action,
            module,
            template_path,
            link_base,
            toc,
        })
    }
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 and the help text if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                // Nothing useful to do if stdout is gone
                let _ = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
