use std::fs;

use crate::cli::InitArgs;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result, Vue3ScanError};

#[must_use]
pub fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Initializes a new configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(Vue3ScanError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# vue3-scan configuration file

[scanner]
# File extensions to scan
extensions = ["vue", "js"]

# Exclude patterns (glob syntax)
exclude = [
    "**/node_modules/**",
    "**/dist/**",
]

# Respect .gitignore rules (default: false)
gitignore = false

# Only scan these sub-folders of the root (empty = whole project)
# whitelist = ["src/components", "src/views"]

[modules]
# Regex applied to the root-relative path; capture group 1 names the module
pattern = "src/components/([^/]+)"

# Files outside the pattern: "pool" (grouped as non-module) or "parent-dir"
fallback = "pool"

[advisor]
# OpenAI-compatible chat completions endpoint used by `vue3-scan advise`
endpoint = "https://api.groq.com/openai/v1/chat/completions"
model = "llama-3.3-70b-versatile"

# Environment variable holding the API key
api_key_env = "GROQ_API_KEY"

temperature = 0.1
max_tokens = 2048
timeout_secs = 30
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
