use std::path::Path;

use rayon::prelude::*;

use crate::aggregate::{Aggregator, GlobalAggregate};
use crate::catalog::PatternCatalog;
use crate::cli::{Cli, ScanArgs};
use crate::config::Config;
use crate::discovery::{DirectoryScanner, FileDiscovery, GlobFilter, Whitelist};
use crate::error::{Result, Vue3ScanError};
use crate::output::{
    JsonFormatter, OutputFormat, OutputFormatter, ReportOptions, ScanProgress, TextFormatter,
};
use crate::scanner::{FileScanResult, FileScanner};
use crate::scoring::ComplexityScorer;
use crate::EXIT_SUCCESS;

use super::context::{color_choice_to_mode, exit_code_for, load_config, write_output};

/// Run-level overrides layered on top of the `[scanner]` configuration.
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    /// Replaces `scanner.extensions` when set.
    pub extensions: Option<Vec<String>>,
    /// Added to `scanner.exclude`.
    pub exclude: Vec<String>,
    /// Replaces `scanner.whitelist` when set.
    pub whitelist: Option<Whitelist>,
    /// Hide the progress bar.
    pub quiet: bool,
}

impl ScanOptions {
    #[must_use]
    pub fn from_args(args: &ScanArgs, quiet: bool) -> Self {
        Self {
            extensions: args.ext.clone(),
            exclude: args.exclude.clone(),
            whitelist: args.whitelist.as_deref().map(Whitelist::parse),
            quiet,
        }
    }
}

#[must_use]
pub fn run_scan(args: &ScanArgs, cli: &Cli) -> i32 {
    match run_scan_impl(args, cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            exit_code_for(&e)
        }
    }
}

/// Scan the project and write the report.
///
/// # Errors
/// Returns an error if configuration is invalid, the root is not a directory,
/// a file cannot be read, or the report cannot be written.
pub fn run_scan_impl(args: &ScanArgs, cli: &Cli) -> Result<()> {
    let config = load_config(args.config.as_deref(), cli.no_config)?;
    let options = ScanOptions::from_args(args, cli.quiet);

    let root = resolve_root(&args.root)?;
    let report = scan_project(&root, &options, &config)?;

    let output = match args.format {
        OutputFormat::Text => TextFormatter::new(color_choice_to_mode(cli.color), &root)
            .with_options(ReportOptions {
                details: args.details,
                modules: args.modules,
                complexity: args.complexity,
            })
            .format(&report)?,
        OutputFormat::Json => JsonFormatter::new().format(&report)?,
    };

    write_output(args.output.as_deref(), &output)
}

/// Discover, scan, classify and aggregate every file under `root`.
///
/// Files are scanned in parallel; aggregation runs sequentially in discovery order.
///
/// # Errors
/// Returns an error if the root is not a directory, configuration is invalid,
/// or any discovered file cannot be read.
pub fn scan_project(root: &Path, options: &ScanOptions, config: &Config) -> Result<GlobalAggregate> {
    let root = resolve_root(root)?;

    let catalog = PatternCatalog::builtin()?;
    let scorer = ComplexityScorer::from_catalog(&catalog);
    let classifier = config.modules.classifier()?;

    let files = discover(&root, options, config)?;
    tracing::info!(root = %root.display(), files = files.len(), "discovered files");

    let scanner = FileScanner::new(&catalog, &scorer);
    let progress = ScanProgress::new(files.len() as u64, options.quiet);
    let results: Vec<FileScanResult> = files
        .par_iter()
        .map(|path| {
            let result = scanner.scan_file(path);
            progress.inc();
            result
        })
        .collect::<Result<_>>()?;
    progress.finish();

    let mut aggregator = Aggregator::new(&catalog);
    for result in &results {
        let module = classifier.classify_in(&result.path, &root);
        tracing::debug!(path = %result.path, module = %module, score = result.complexity_score, "scanned");
        aggregator.record(&module, result);
    }

    Ok(aggregator.finish())
}

fn discover(root: &Path, options: &ScanOptions, config: &Config) -> Result<Vec<std::path::PathBuf>> {
    let extensions = options
        .extensions
        .clone()
        .unwrap_or_else(|| config.scanner.extensions.clone());
    let mut exclude = config.scanner.exclude.clone();
    exclude.extend(options.exclude.iter().cloned());
    let filter = GlobFilter::new(extensions, &exclude)?;

    let whitelist = options
        .whitelist
        .clone()
        .unwrap_or_else(|| Whitelist::from_folders(&config.scanner.whitelist));

    DirectoryScanner::new(filter)
        .with_whitelist(Some(whitelist))
        .with_gitignore(config.scanner.gitignore)
        .discover(root)
}

fn resolve_root(root: &Path) -> Result<std::path::PathBuf> {
    if !root.is_dir() {
        return Err(Vue3ScanError::InvalidRoot(root.to_path_buf()));
    }
    Ok(dunce::canonicalize(root)?)
}

#[cfg(test)]
#[path = "scan_tests.rs"]
mod tests;
