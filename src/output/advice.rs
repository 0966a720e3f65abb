use std::fmt::Write;
use std::path::Path;

use crate::advisor::{Severity, Suggestion};

use super::ColorMode;

const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

/// Render advisor suggestions for one file as numbered, human-readable items.
#[must_use]
pub fn format_advice(path: &Path, suggestions: &[Suggestion], mode: ColorMode) -> String {
    let use_colors = match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            std::env::var("NO_COLOR").is_err()
                && std::io::IsTerminal::is_terminal(&std::io::stdout())
        }
    };
    let paint = |color: &str, text: &str| {
        if use_colors {
            format!("{color}{text}{RESET}")
        } else {
            text.to_string()
        }
    };

    let mut out = String::new();
    let _ = writeln!(out, "Analyzing file: {}", path.display());
    let _ = writeln!(out, "{}", paint(YELLOW, &"=".repeat(50)));

    if suggestions.is_empty() {
        let _ = writeln!(out, "{}", paint(GREEN, "✓ No migration changes detected!"));
        return out;
    }

    let _ = writeln!(
        out,
        "{}\n",
        paint(
            RED,
            &format!("Found {} potential migration items:", suggestions.len())
        )
    );

    for (index, suggestion) in suggestions.iter().enumerate() {
        let severity_color = match suggestion.severity {
            Severity::High => RED,
            Severity::Medium => YELLOW,
            Severity::Low => GREEN,
        };
        let _ = writeln!(
            out,
            "{}",
            paint(YELLOW, &format!("{}. {}", index + 1, suggestion.issue))
        );
        let _ = writeln!(
            out,
            "Severity: {}",
            paint(severity_color, suggestion.severity.as_str())
        );
        let _ = writeln!(out, "Location: {}", suggestion.location);
        let _ = writeln!(out, "\nBefore:\n{}", paint(RED, &suggestion.before));
        let _ = writeln!(out, "\nAfter:\n{}", paint(GREEN, &suggestion.after));
        let _ = writeln!(out, "\nExplanation:\n{}", suggestion.explanation);
        let _ = writeln!(out, "{}", paint(YELLOW, &"-".repeat(50)));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suggestion(severity: Severity) -> Suggestion {
        Suggestion {
            issue: "Filters are removed".to_string(),
            severity,
            location: "template line 3".to_string(),
            before: "{{ price | currency }}".to_string(),
            after: "{{ formatCurrency(price) }}".to_string(),
            explanation: "Use a method or computed property".to_string(),
        }
    }

    #[test]
    fn no_findings_message() {
        let out = format_advice(Path::new("App.vue"), &[], ColorMode::Never);
        assert!(out.contains("Analyzing file: App.vue"));
        assert!(out.contains("No migration changes detected"));
    }

    #[test]
    fn findings_are_numbered_with_all_fields() {
        let out = format_advice(
            Path::new("App.vue"),
            &[suggestion(Severity::High), suggestion(Severity::Low)],
            ColorMode::Never,
        );

        assert!(out.contains("Found 2 potential migration items:"));
        assert!(out.contains("1. Filters are removed"));
        assert!(out.contains("2. Filters are removed"));
        assert!(out.contains("Severity: high"));
        assert!(out.contains("Severity: low"));
        assert!(out.contains("Location: template line 3"));
        assert!(out.contains("Before:\n{{ price | currency }}"));
        assert!(out.contains("After:\n{{ formatCurrency(price) }}"));
        assert!(out.contains("Explanation:\nUse a method or computed property"));
    }

    #[test]
    fn colors_applied_when_forced() {
        let out = format_advice(
            Path::new("App.vue"),
            &[suggestion(Severity::Medium)],
            ColorMode::Always,
        );
        assert!(out.contains("\x1b[33mmedium\x1b[0m"));
    }
}
