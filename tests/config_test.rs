use std::path::PathBuf;

use tfdocgen::config::{get_config, load_config, parse_config, Config, CONFIG_FILES};
use tfdocgen::error::Error;
use tfdocgen::toc::TocOptions;
use tempfile::TempDir;

#[test]
fn test_no_config_file() {
    let temp_dir = TempDir::new().unwrap();
    assert_eq!(load_config(temp_dir.path(), &CONFIG_FILES).unwrap(), None);
    assert_eq!(get_config(temp_dir.path()).unwrap(), Config::default());
}

#[test]
fn test_yaml_config() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("tfdocgen.yml"),
        "repo_url: https://git.example.com/repo\nmodule_path: modules/vpc\ntoc:\n  depth: 2\n",
    )
    .unwrap();

    let config = get_config(temp_dir.path()).unwrap();
    assert_eq!(
        config.repo_url.as_deref(),
        Some("https://git.example.com/repo")
    );
    assert_eq!(config.module_path.as_deref(), Some("modules/vpc"));
    assert_eq!(config.toc, TocOptions { depth: 2, skip: 0 });
    assert_eq!(config.template_path, None);
}

#[test]
fn test_json_config_wins_over_yaml() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("tfdocgen.json"),
        r#"{"template_path": "README.md.tmpl"}"#,
    )
    .unwrap();
    std::fs::write(
        temp_dir.path().join("tfdocgen.yaml"),
        "template_path: other.tmpl\n",
    )
    .unwrap();

    let config = get_config(temp_dir.path()).unwrap();
    assert_eq!(config.template_path, Some(PathBuf::from("README.md.tmpl")));
}

#[test]
fn test_unknown_key_is_rejected() {
    match parse_config("repo: https://example.com\n") {
        Err(Error::ConfigError(msg)) => assert!(msg.contains("Invalid configuration format")),
        other => panic!("Expected Error::ConfigError, got {other:?}"),
    }
}
