use tempfile::TempDir;

use super::{generate_config_template, run_init, run_init_impl};
use crate::cli::InitArgs;
use crate::config::Config;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS};

#[test]
fn generate_config_template_contains_sections() {
    let template = generate_config_template();
    assert!(template.contains("[scanner]"));
    assert!(template.contains("[modules]"));
    assert!(template.contains("[advisor]"));
    assert!(template.contains("**/node_modules/**"));
}

#[test]
fn generate_config_template_matches_defaults() {
    let template = generate_config_template();
    let config: Config = toml::from_str(&template).expect("template should be valid TOML");
    assert_eq!(config, Config::default());
}

#[test]
fn run_init_creates_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join(".vue3-scan.toml");

    let args = InitArgs {
        output: config_path.clone(),
        force: false,
    };

    assert!(run_init_impl(&args).is_ok());
    let content = std::fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("[modules]"));
}

#[test]
fn run_init_refuses_to_overwrite() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join(".vue3-scan.toml");
    std::fs::write(&config_path, "# existing").unwrap();

    let args = InitArgs {
        output: config_path.clone(),
        force: false,
    };

    let err = run_init_impl(&args).unwrap_err();
    assert!(err.to_string().contains("already exists"));
    assert_eq!(run_init(&args), EXIT_CONFIG_ERROR);
    assert_eq!(std::fs::read_to_string(&config_path).unwrap(), "# existing");
}

#[test]
fn run_init_force_overwrites() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join(".vue3-scan.toml");
    std::fs::write(&config_path, "# existing").unwrap();

    let args = InitArgs {
        output: config_path.clone(),
        force: true,
    };

    assert_eq!(run_init(&args), EXIT_SUCCESS);
    let content = std::fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("[scanner]"));
}
