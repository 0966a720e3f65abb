//! Integration tests for the `advise` command.

mod common;

use common::TestFixture;
use predicates::prelude::*;

#[test]
fn advise_rejects_non_vue_file() {
    let fixture = TestFixture::new();
    fixture.create_file("src/main.js", "new Vue()");

    vue3_scan!()
        .current_dir(fixture.path())
        .args(["--no-config", "advise", "src/main.js"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Only .vue files"));
}

#[test]
fn advise_missing_file_fails() {
    let fixture = TestFixture::new();

    vue3_scan!()
        .current_dir(fixture.path())
        .args(["--no-config", "advise", "src/Missing.vue"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to read file"));
}

#[test]
fn advise_without_api_key_reports_nothing() {
    let fixture = TestFixture::new();
    fixture.create_file("src/App.vue", "<script>export default { destroyed() {} }</script>");

    vue3_scan!()
        .current_dir(fixture.path())
        .args(["--no-config", "--color", "never", "advise", "src/App.vue"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Analyzing file:"))
        .stdout(predicate::str::contains("No migration changes detected"))
        .stderr(predicate::str::contains("GROQ_API_KEY"));
}

#[test]
fn advise_json_without_api_key_is_empty_array() {
    let fixture = TestFixture::new();
    fixture.create_file("src/App.vue", "<template></template>");

    vue3_scan!()
        .current_dir(fixture.path())
        .args(["--no-config", "advise", "src/App.vue", "-f", "json"])
        .assert()
        .success()
        .stdout(predicate::str::diff("[]\n"));
}
