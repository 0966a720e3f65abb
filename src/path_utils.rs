use std::path::Path;

/// Normalize path separators to forward slashes.
#[must_use]
pub fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}

/// Format a path for display relative to the scan root.
///
/// Uses forward slashes on every platform. Paths outside `root` are returned
/// unchanged apart from separator normalization; the root itself renders as `"."`.
#[must_use]
pub fn display_path(path: &str, root: &Path) -> String {
    let root = normalize_separators(&root.to_string_lossy());
    let root = root.trim_end_matches('/');

    if root.is_empty() || root == "." {
        return path.strip_prefix("./").unwrap_or(path).to_string();
    }

    match path.strip_prefix(root) {
        Some("") => ".".to_string(),
        Some(rest) if rest.starts_with('/') => rest.trim_start_matches('/').to_string(),
        _ => path.to_string(),
    }
}
