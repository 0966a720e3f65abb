use std::fmt::Write;
use std::path::{Path, PathBuf};

use crate::aggregate::{CategoryAggregate, GlobalAggregate};
use crate::error::Result;
use crate::path_utils::display_path;
use crate::scoring::ComplexityLevel;

use super::OutputFormatter;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";
    pub const RESET: &str = "\x1b[0m";
}

/// Which report sections to render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct ReportOptions {
    /// List the files behind every category.
    pub details: bool,
    /// Add the per-module breakdown.
    pub modules: bool,
    /// Annotate listed files with their complexity.
    pub complexity: bool,
}

pub struct TextFormatter {
    use_colors: bool,
    root: PathBuf,
    options: ReportOptions,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode, root: &Path) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            root: root.to_path_buf(),
            options: ReportOptions::default(),
        }
    }

    #[must_use]
    pub const fn with_options(mut self, options: ReportOptions) -> Self {
        self.options = options;
        self
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn paint(&self, color: &str, text: &str) -> String {
        if self.use_colors {
            format!("{color}{text}{}", ansi::RESET)
        } else {
            text.to_string()
        }
    }

    const fn level_color(level: ComplexityLevel) -> &'static str {
        match level {
            ComplexityLevel::Low => ansi::GREEN,
            ComplexityLevel::Medium => ansi::YELLOW,
            ComplexityLevel::High => ansi::RED,
        }
    }

    fn write_header(&self, out: &mut String) {
        let _ = writeln!(out, "{}", self.paint(ansi::BLUE, "Scanning for Vue 3 breaking changes..."));
        let _ = writeln!(
            out,
            "{}",
            self.paint(ansi::BLUE, &format!("Target folder: {}", self.root.display()))
        );
        out.push('\n');
    }

    fn write_global(&self, report: &GlobalAggregate, out: &mut String) {
        let _ = writeln!(out, "{}", self.paint(ansi::YELLOW, "Global Summary:"));
        let _ = writeln!(
            out,
            "{}",
            self.paint(ansi::GRAY, &format!("Total files scanned: {}", report.total_files))
        );
        out.push('\n');

        for category in &report.issues_by_change {
            let _ = writeln!(
                out,
                "{} {} files",
                self.paint(ansi::GREEN, &format!("{}:", category.label)),
                category.count
            );

            if self.options.details && !category.files.is_empty() {
                let _ = writeln!(out, "{}", self.paint(ansi::GRAY, "Files to check:"));
                for file in &category.files {
                    let line = self.paint(ansi::GRAY, &format!("  - {}", self.relative(file)));
                    match category.complexity_by_file.get(file) {
                        Some(score) if self.options.complexity => {
                            let _ = writeln!(
                                out,
                                "{line} {}",
                                self.paint(ansi::YELLOW, &format!("(Complexity: {score})"))
                            );
                        }
                        _ => {
                            let _ = writeln!(out, "{line}");
                        }
                    }
                }
                out.push('\n');
            }
        }
    }

    fn write_modules(&self, report: &GlobalAggregate, out: &mut String) {
        let _ = writeln!(out, "\n{}", self.paint(ansi::YELLOW, "Modules Breakdown:"));

        for module in report.module_stats.values() {
            let _ = writeln!(out, "\n{}", self.paint(ansi::CYAN, &format!("{}:", module.name)));
            let _ = writeln!(
                out,
                "{}",
                self.paint(ansi::GRAY, &format!("Files in module: {}", module.total_files))
            );

            if !self.options.details {
                let c = &module.complexity;
                let _ = writeln!(
                    out,
                    "{} {} {} {}",
                    self.paint(ansi::GRAY, "Module Complexity:"),
                    self.paint(ansi::GREEN, &format!("Low {}%", c.low_pct)),
                    self.paint(ansi::YELLOW, &format!("Medium {}%", c.medium_pct)),
                    self.paint(ansi::RED, &format!("High {}%", c.high_pct)),
                );
            } else if module.complexity.has_high {
                let _ = writeln!(
                    out,
                    "{}",
                    self.paint(ansi::RED, "Warning: This module contains files with High complexity")
                );
            }

            for category in &module.issues_by_change {
                self.write_module_category(category, out);
            }
        }
    }

    fn write_module_category(&self, category: &CategoryAggregate, out: &mut String) {
        let _ = writeln!(
            out,
            "{} {} files",
            self.paint(ansi::GREEN, &format!("  {}:", category.label)),
            category.count
        );

        if !self.options.details || category.files.is_empty() {
            return;
        }

        let _ = writeln!(out, "{}", self.paint(ansi::GRAY, "  Files to check:"));
        for file in &category.files {
            let line = self.paint(ansi::GRAY, &format!("    - {}", self.relative(file)));
            let score = category.complexity_by_file.get(file).copied();
            match score {
                Some(score) if self.options.complexity => {
                    let level = ComplexityLevel::from_score(score);
                    let _ = writeln!(
                        out,
                        "{line} {}",
                        self.paint(Self::level_color(level), &format!("(Complexity: {level})"))
                    );
                }
                _ => {
                    let _ = writeln!(out, "{line}");
                }
            }
        }
        out.push('\n');
    }

    fn relative(&self, file: &str) -> String {
        display_path(file, &self.root)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &GlobalAggregate) -> Result<String> {
        let mut out = String::new();
        self.write_header(&mut out);
        self.write_global(report, &mut out);
        if self.options.modules {
            self.write_modules(report, &mut out);
        }
        Ok(out)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
