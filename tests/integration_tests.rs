//! Integration tests for the formfields CLI
//!
//! These tests exercise the CLI commands end-to-end using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to get a formfields command isolated from the caller's environment
fn formfields(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("formfields").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("FORMFIELDS_ESCAPE")
        .env_remove("FORMFIELDS_TEMPLATES_DIR")
        .env_remove("RUST_LOG");
    cmd
}

/// Helper to write a file into the temp directory
fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

const DONATION_FORM: &str = r#"
id: donation
template: "<form>{{form_fields}}</form>"
fields:
  amount:
    type: text
    label: Amount
    required: true
    attributes:
      placeholder: "10.00"
  email:
    type: email
    label: Email
  submit:
    type: submit
    value: Donate
"#;

// ============================================================================
// CLI Basic Tests
// ============================================================================

#[test]
fn test_help_displays() {
    let tmp = TempDir::new().unwrap();
    formfields(&tmp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Render declarative form field definitions"));
}

#[test]
fn test_version_displays() {
    let tmp = TempDir::new().unwrap();
    formfields(&tmp)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("formfields"));
}

#[test]
fn test_unknown_command_fails() {
    let tmp = TempDir::new().unwrap();
    formfields(&tmp)
        .arg("unknown-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

// ============================================================================
// Render Command Tests
// ============================================================================

#[test]
fn test_render_donation_form() {
    let tmp = TempDir::new().unwrap();
    write(&tmp, "donation.yaml", DONATION_FORM);

    let expected = concat!(
        "<form>",
        r#"<p><label class="form-label" for="amount">Amount <span class="form-required-indicator">*</span></label>"#,
        r#"<input type="text" name="amount" value="" required="" placeholder="10.00"></p>"#,
        r#"<p><input type="submit" name="submit" value="Donate"></p>"#,
        "</form>\n"
    );

    formfields(&tmp)
        .args(["render", "donation.yaml"])
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn test_render_empty_form_strips_placeholder() {
    let tmp = TempDir::new().unwrap();
    write(&tmp, "empty.yaml", "template: \"<div>{{form_fields}}</div>\"\nfields: {}\n");

    formfields(&tmp)
        .args(["render", "empty.yaml"])
        .assert()
        .success()
        .stdout("<div></div>\n");
}

#[test]
fn test_render_with_template_file() {
    let tmp = TempDir::new().unwrap();
    write(&tmp, "donation.yaml", DONATION_FORM);
    write(&tmp, "page.html", "<main>{{form_fields}}</main>");

    formfields(&tmp)
        .args(["render", "donation.yaml", "--template", "page.html"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<main><p>"))
        .stdout(predicate::str::contains(r#"value="Donate""#))
        .stdout(predicate::str::contains("<form>").not());
}

#[test]
fn test_render_to_output_file() {
    let tmp = TempDir::new().unwrap();
    write(&tmp, "donation.yaml", DONATION_FORM);

    formfields(&tmp)
        .args(["render", "donation.yaml", "--output", "out.html"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rendered 3 field(s)"));

    let html = fs::read_to_string(tmp.path().join("out.html")).unwrap();
    assert!(html.starts_with("<form><p><label"));
    assert!(html.ends_with("</form>"));
}

#[test]
fn test_render_json_form() {
    let tmp = TempDir::new().unwrap();
    write(
        &tmp,
        "form.json",
        r#"{"template": "[{{form_fields}}]", "fields": {"go": {"type": "submit", "value": "Go"}}}"#,
    );

    formfields(&tmp)
        .args(["render", "form.json"])
        .assert()
        .success()
        .stdout("[<p><input type=\"submit\" name=\"go\" value=\"Go\"></p>]\n");
}

#[test]
fn test_render_escapes_by_default() {
    let tmp = TempDir::new().unwrap();
    write(
        &tmp,
        "xss.yaml",
        "template: \"{{form_fields}}\"\nfields:\n  q:\n    type: text\n    value: \"<b>hi</b>\"\n",
    );

    formfields(&tmp)
        .args(["render", "xss.yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("&lt;b&gt;hi"))
        .stdout(predicate::str::contains("<b>").not());
}

#[test]
fn test_render_raw_flag_disables_escaping() {
    let tmp = TempDir::new().unwrap();
    write(
        &tmp,
        "xss.yaml",
        "template: \"{{form_fields}}\"\nfields:\n  q:\n    type: text\n    value: \"<b>hi</b>\"\n",
    );

    formfields(&tmp)
        .args(["render", "xss.yaml", "--raw"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"value="<b>hi</b>""#));
}

#[test]
fn test_render_escape_env_var() {
    let tmp = TempDir::new().unwrap();
    write(
        &tmp,
        "xss.yaml",
        "template: \"{{form_fields}}\"\nfields:\n  q:\n    type: text\n    value: \"a&b\"\n",
    );

    formfields(&tmp)
        .env("FORMFIELDS_ESCAPE", "false")
        .args(["render", "xss.yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"value="a&b""#));
}

#[test]
fn test_local_config_template_override() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir(tmp.path().join("markup")).unwrap();
    write(&tmp, "markup/text.html", "<input name=\"{{ name }}\">\n");
    write(&tmp, ".formfields.yaml", "templates_dir: markup\n");
    write(
        &tmp,
        "form.yaml",
        "template: \"{{form_fields}}\"\nfields:\n  city:\n    type: text\n",
    );

    formfields(&tmp)
        .args(["render", "form.yaml"])
        .assert()
        .success()
        .stdout("<input name=\"city\">\n");
}

#[test]
fn test_render_missing_file_fails() {
    let tmp = TempDir::new().unwrap();
    formfields(&tmp)
        .args(["render", "nope.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read form definition"));
}

#[test]
fn test_render_yaml_syntax_error() {
    let tmp = TempDir::new().unwrap();
    write(&tmp, "bad.yaml", "fields:\n  amount: [unclosed\n");

    formfields(&tmp)
        .args(["render", "bad.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("YAML syntax error"));
}

// ============================================================================
// Field Command Tests
// ============================================================================

#[test]
fn test_field_renders_single_field() {
    let tmp = TempDir::new().unwrap();
    write(&tmp, "donation.yaml", DONATION_FORM);

    formfields(&tmp)
        .args(["field", "donation.yaml", "submit"])
        .assert()
        .success()
        .stdout("<p><input type=\"submit\" name=\"submit\" value=\"Donate\"></p>\n");
}

#[test]
fn test_field_unknown_type_is_empty() {
    let tmp = TempDir::new().unwrap();
    write(&tmp, "donation.yaml", DONATION_FORM);

    formfields(&tmp)
        .args(["field", "donation.yaml", "email"])
        .assert()
        .success()
        .stdout("\n");
}

#[test]
fn test_field_unknown_key_fails() {
    let tmp = TempDir::new().unwrap();
    write(&tmp, "donation.yaml", DONATION_FORM);

    formfields(&tmp)
        .args(["field", "donation.yaml", "phone"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown field 'phone'"));
}

// ============================================================================
// Types & Completions Tests
// ============================================================================

#[test]
fn test_types_lists_builtins() {
    let tmp = TempDir::new().unwrap();
    formfields(&tmp)
        .arg("types")
        .assert()
        .success()
        .stdout(predicate::str::contains("render_text_field"))
        .stdout(predicate::str::contains("render_submit_field"));
}

#[test]
fn test_types_names_only() {
    let tmp = TempDir::new().unwrap();
    formfields(&tmp)
        .args(["types", "--names-only"])
        .assert()
        .success()
        .stdout("submit\ntext\n");
}

#[test]
fn test_completions_bash() {
    let tmp = TempDir::new().unwrap();
    formfields(&tmp)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("formfields"));
}
