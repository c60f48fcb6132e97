//! tfdocgen turns Terraform module metadata into Markdown documentation.
//! It renders tables of variables, outputs, resources and module calls, and
//! fills README templates together with a generated Table of Contents.

/// Command-line interface module for the tfdocgen application
pub mod cli;

/// Configuration handling for module directories
/// Supports JSON and YAML formats (tfdocgen.json, tfdocgen.yml, tfdocgen.yaml)
pub mod config;

/// Error types and handling for the tfdocgen application
pub mod error;

/// Maps module metadata onto sorted Markdown tables
pub mod extract;

/// Module metadata from the inspector
pub mod module;

/// README template rendering
pub mod renderer;

/// Heading anchor generation
pub mod slug;

/// Markdown table rendering
pub mod table;

/// Table of Contents generation
pub mod toc;
