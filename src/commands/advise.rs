use std::fs;
use std::path::Path;

use crate::advisor::Advisor;
use crate::cli::{AdviseArgs, Cli};
use crate::error::{Result, Vue3ScanError};
use crate::output::{OutputFormat, format_advice};
use crate::EXIT_SUCCESS;

use super::context::{color_choice_to_mode, exit_code_for, load_config, write_output};

#[must_use]
pub fn run_advise(args: &AdviseArgs, cli: &Cli) -> i32 {
    match run_advise_impl(args, cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            exit_code_for(&e)
        }
    }
}

/// Request migration suggestions for a single component and print them.
///
/// # Errors
/// Returns an error if the file is not a `.vue` component, does not exist or
/// cannot be read, or the configuration is invalid. Advisor failures are not
/// errors; they produce an empty suggestion list.
pub fn run_advise_impl(args: &AdviseArgs, cli: &Cli) -> Result<()> {
    validate_component(&args.file)?;
    let config = load_config(args.config.as_deref(), cli.no_config)?;

    let bytes = fs::read(&args.file).map_err(|source| Vue3ScanError::FileRead {
        path: args.file.clone(),
        source,
    })?;
    let content = String::from_utf8_lossy(&bytes);

    let advisor = Advisor::from_config(config.advisor);
    let suggestions = advisor.advise(&content);
    tracing::info!(file = %args.file.display(), count = suggestions.len(), "advisor finished");

    let output = match args.format {
        OutputFormat::Text => {
            format_advice(&args.file, &suggestions, color_choice_to_mode(cli.color))
        }
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&suggestions)?;
            json.push('\n');
            json
        }
    };

    write_output(None, &output)
}

/// Only existing `.vue` single-file components can be analyzed.
fn validate_component(path: &Path) -> Result<()> {
    let is_vue = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("vue"));
    if !is_vue {
        return Err(Vue3ScanError::Config(format!(
            "Only .vue files can be analyzed: {}",
            path.display()
        )));
    }
    if !path.is_file() {
        return Err(Vue3ScanError::FileRead {
            path: path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
        });
    }
    Ok(())
}

#[cfg(test)]
#[path = "advise_tests.rs"]
mod tests;
