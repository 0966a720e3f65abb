use std::fs;

use tempfile::TempDir;

use super::*;
use crate::scoring::ComplexityLevel;

fn fixtures() -> (PatternCatalog, ComplexityScorer) {
    let catalog = PatternCatalog::builtin().unwrap();
    let scorer = ComplexityScorer::from_catalog(&catalog);
    (catalog, scorer)
}

#[test]
fn clean_file_has_no_issues() {
    let (catalog, scorer) = fixtures();
    let scanner = FileScanner::new(&catalog, &scorer);

    let result = scanner.scan_content(
        "src/App.vue",
        "<template><div>{{ msg }}</div></template>\n<script>\nexport default { data() { return { msg: 'hi' } } }\n</script>",
    );

    assert!(!result.has_issues());
    assert_eq!(result.complexity_score, 0);
    assert_eq!(ComplexityLevel::from_score(result.complexity_score), ComplexityLevel::Low);
}

#[test]
fn vue_extend_triggers_global_api() {
    let (catalog, scorer) = fixtures();
    let scanner = FileScanner::new(&catalog, &scorer);

    let result = scanner.scan_content("a.js", "export default Vue.extend({ name: 'A' })");

    assert_eq!(result.triggered, BTreeSet::from([1]));
    assert_eq!(result.complexity_score, 2);
}

#[test]
fn single_webpack_rule_scores_three() {
    let (catalog, scorer) = fixtures();
    let scanner = FileScanner::new(&catalog, &scorer);

    let result = scanner.scan_content(
        "vue.config.js",
        "module.exports = { chainWebpack: config => {} }",
    );

    assert_eq!(result.triggered, BTreeSet::from([9]));
    assert_eq!(result.complexity_score, 3);
    assert_eq!(ComplexityLevel::from_score(result.complexity_score), ComplexityLevel::Medium);
}

#[test]
fn many_rules_in_one_category_count_once() {
    let (catalog, scorer) = fixtures();
    let scanner = FileScanner::new(&catalog, &scorer);

    let content = "this.$on('a', f)\nthis.$off('a', f)\nthis.$once('b', g)";
    let result = scanner.scan_content("bus.js", content);

    assert_eq!(result.triggered, BTreeSet::from([4]));
    assert_eq!(result.complexity_score, 2);
}

#[test]
fn overlapping_categories_all_trigger() {
    let (catalog, scorer) = fixtures();
    let scanner = FileScanner::new(&catalog, &scorer);

    // Vue.use( hits Global API (1) and Plugin Usage (10)
    let result = scanner.scan_content("main.js", "Vue.use(Router)");

    assert_eq!(result.triggered, BTreeSet::from([1, 10]));
    assert_eq!(result.complexity_score, 4);
}

#[test]
fn scan_is_deterministic() {
    let (catalog, scorer) = fixtures();
    let scanner = FileScanner::new(&catalog, &scorer);
    let content = "<li slot-scope=\"x\">{{ x | upper }}</li>\nbeforeDestroy() {}";

    assert_eq!(
        scanner.scan_content("a.vue", content),
        scanner.scan_content("a.vue", content)
    );
}

#[test]
fn scan_file_reads_from_disk() {
    let (catalog, scorer) = fixtures();
    let scanner = FileScanner::new(&catalog, &scorer);
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("Widget.vue");
    fs::write(&path, r#"<template slot-scope="x"></template>"#).unwrap();

    let result = scanner.scan_file(&path).unwrap();

    assert_eq!(result.triggered, BTreeSet::from([6]));
    assert!(result.path.ends_with("Widget.vue"));
}

#[test]
fn scan_file_tolerates_invalid_utf8() {
    let (catalog, scorer) = fixtures();
    let scanner = FileScanner::new(&catalog, &scorer);
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("legacy.js");
    let mut bytes = b"Vue.nextTick(cb) ".to_vec();
    bytes.extend_from_slice(&[0xff, 0xfe]);
    fs::write(&path, bytes).unwrap();

    let result = scanner.scan_file(&path).unwrap();

    assert!(result.triggered.contains(&1));
}

#[test]
fn scan_file_missing_is_file_read_error() {
    let (catalog, scorer) = fixtures();
    let scanner = FileScanner::new(&catalog, &scorer);
    let dir = TempDir::new().unwrap();

    let err = scanner
        .scan_file(&dir.path().join("missing.vue"))
        .unwrap_err();

    assert!(matches!(err, Vue3ScanError::FileRead { .. }));
}
