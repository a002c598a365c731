use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const MANIFEST: &str = r#"collections:
  examples:
    - id: en/01_shapes/02_circles/description.mdx
      slug: en/01_shapes/02_circles/description
      data:
        title: Circles
    - id: es/01_shapes/02_circles/description.mdx
      slug: es/01_shapes/02_circles/description
      data:
        title: Círculos
    - id: en/03_noise/01_noise_wave/description.mdx
      slug: en/03_noise/01_noise_wave/description
      data:
        title: Noise Wave
  reference:
    - id: en/p5/circle.mdx
      data:
        title: circle
        itemtype: method
        example:
          - "<div><code>circle(30, 30, 20);</code></div><div><code>circle(50, 50, 10);</code></div>"
    - id: en/p5/PI.mdx
      data:
        title: PI
        itemtype: property
  libraries:
    - id: en/p5.sound.yaml
      data:
        title: p5.sound
        sourceUrl: https://github.com/processing/p5.sound.js
"#;

const LOCALE_CONFIG: &str = r#"id: i18n
name: Locale Configuration
provider: i18n
version: 1.0.0
values:
  default_locale: es
  supported_locales:
    - en
    - es
"#;

/// Create a working directory holding a manifest, with no locale configuration
fn create_mock_site() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("content.yaml"), MANIFEST).unwrap();
    temp_dir
}

/// Build a `docsite` command isolated from the caller's environment
fn docsite(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("docsite").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("CONFIGURATION_PATH")
        .env_remove("DOCSITE_I18N_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help_command() {
    let site = create_mock_site();
    docsite(&site)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Command line interface for documentation content routing",
        ))
        .stdout(predicate::str::contains("collection"))
        .stdout(predicate::str::contains("slug"))
        .stdout(predicate::str::contains("escape"));
}

#[test]
fn test_version_command() {
    let site = create_mock_site();
    docsite(&site)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("docsite"));
}

#[test]
fn test_slug_example() {
    let site = create_mock_site();
    docsite(&site)
        .args(["slug", "example", "en/01_shapes/02_circles/description"])
        .assert()
        .success()
        .stdout("shapes-circles\n");
}

#[test]
fn test_slug_reference_and_contributor_doc() {
    let site = create_mock_site();
    docsite(&site)
        .args(["slug", "reference", "en/p5/constants/PI.mdx"])
        .assert()
        .success()
        .stdout("p5/PI\n");

    docsite(&site)
        .args(["slug", "contributor-doc", "contributor-docs/ko/readme"])
        .assert()
        .success()
        .stdout("/contributor-docs/ko/\n");
}

#[test]
fn test_slug_invalid_kind() {
    let site = create_mock_site();
    docsite(&site)
        .args(["slug", "bogus", "en/foo"])
        .assert()
        .failure();
}

#[test]
fn test_escape_from_stdin() {
    let site = create_mock_site();
    docsite(&site)
        .arg("escape")
        .write_stdin("<p>Use <code><b>bold</b></code></p>")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "<code>&lt;b&gt;bold&lt;/b&gt;</code>",
        ))
        .stdout(predicate::str::contains("<p>"));
}

#[test]
fn test_escape_from_file() {
    let site = create_mock_site();
    fs::write(site.path().join("page.html"), "<code><i>x</i></code>").unwrap();

    docsite(&site)
        .args(["escape", "--input", "page.html"])
        .assert()
        .success()
        .stdout("<code>&lt;i&gt;x&lt;/i&gt;</code>");

    docsite(&site)
        .args(["escape", "--input", "page.html", "--literal"])
        .assert()
        .success()
        .stdout("&lt;code&gt;&lt;i&gt;x&lt;/i&gt;&lt;/code&gt;");
}

#[test]
fn test_escape_missing_file() {
    let site = create_mock_site();
    docsite(&site)
        .args(["escape", "--input", "missing.html"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn test_collection_default_locale_text() {
    let site = create_mock_site();
    docsite(&site)
        .args(["collection", "content.yaml", "examples"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Collection: examples ==="))
        .stdout(predicate::str::contains("en/01_shapes/02_circles/description.mdx"))
        .stdout(predicate::str::contains("es/01_shapes").not())
        .stdout(predicate::str::contains("Total entries: 2"));
}

#[test]
fn test_collection_json_format() {
    let site = create_mock_site();
    let output = docsite(&site)
        .args(["collection", "content.yaml", "examples", "--locale", "es", "--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let entries: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = entries.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["id"], "es/01_shapes/02_circles/description.mdx");
}

#[test]
fn test_collection_with_fallbacks() {
    let site = create_mock_site();
    let output = docsite(&site)
        .args([
            "collection",
            "content.yaml",
            "examples",
            "--locale",
            "es",
            "--fallbacks",
            "--format",
            "json",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let entries: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let ids: Vec<&str> = entries
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["id"].as_str().unwrap())
        .collect();
    assert_eq!(
        ids,
        vec![
            "es/01_shapes/02_circles/description.mdx",
            "en/03_noise/01_noise_wave/description.mdx",
        ]
    );
}

#[test]
fn test_collection_non_default_locales() {
    let site = create_mock_site();
    docsite(&site)
        .args(["collection", "content.yaml", "examples", "--non-default"])
        .assert()
        .success()
        .stdout(predicate::str::contains("es/01_shapes/02_circles/description.mdx"))
        .stdout(predicate::str::contains("Total entries: 1"));
}

#[test]
fn test_collection_flag_conflicts() {
    let site = create_mock_site();
    docsite(&site)
        .args(["collection", "content.yaml", "examples", "--fallbacks"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--fallbacks requires --locale"));
}

#[test]
fn test_collection_not_found() {
    let site = create_mock_site();
    docsite(&site)
        .args(["collection", "content.yaml", "tutorials"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("tutorials"));
}

#[test]
fn test_collection_missing_manifest() {
    let site = create_mock_site();
    docsite(&site)
        .args(["collection", "missing.yaml", "examples"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_examples_command() {
    let site = create_mock_site();
    docsite(&site)
        .args(["examples", "content.yaml", "reference", "en/p5/circle.mdx"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== circle() ==="))
        .stdout(predicate::str::contains("--- Example 2 ---"))
        .stdout(predicate::str::contains("circle(50, 50, 10);"));

    docsite(&site)
        .args(["examples", "content.yaml", "reference", "en/p5/PI.mdx"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== PI ==="))
        .stdout(predicate::str::contains("No examples"));
}

#[test]
fn test_examples_library_link_json() {
    let site = create_mock_site();
    let output = docsite(&site)
        .args([
            "examples",
            "content.yaml",
            "libraries",
            "en/p5.sound.yaml",
            "--format",
            "json",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let entry: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(entry["title"], "p5.sound");
    assert_eq!(entry["link"], "https://github.com/processing/p5.sound.js");
    assert_eq!(entry["examples"], serde_json::json!([]));
}

#[test]
fn test_locales_builtin_defaults() {
    let site = create_mock_site();
    docsite(&site)
        .args(["locales", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"default_locale\": \"en\""))
        .stdout(predicate::str::contains("zh-Hans"));
}

#[test]
fn test_locale_config_from_config_directory() {
    let site = create_mock_site();
    fs::create_dir(site.path().join("config")).unwrap();
    fs::write(
        site.path().join("config").join("config.i18n.yaml"),
        LOCALE_CONFIG,
    )
    .unwrap();

    docsite(&site)
        .args(["locales", "--format", "yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("default_locale: es"))
        .stdout(predicate::str::contains("zh-Hans").not());

    // With Spanish as the default locale, the plain listing shows Spanish entries
    docsite(&site)
        .args(["collection", "content.yaml", "examples", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("es/01_shapes/02_circles/description.mdx"))
        .stdout(predicate::str::contains("en/01_shapes").not());
}

#[test]
fn test_explicit_config_flag() {
    let site = create_mock_site();
    fs::write(site.path().join("locales.yaml"), LOCALE_CONFIG).unwrap();

    docsite(&site)
        .args(["--config", "locales.yaml", "locales"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Default locale"));

    docsite(&site)
        .args(["--config", "nope.yaml", "locales"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Locale configuration file not found"));
}

#[test]
fn test_invalid_locale_config() {
    let site = create_mock_site();
    fs::write(
        site.path().join("locales.yaml"),
        r#"id: i18n
name: Locale Configuration
provider: i18n
version: 1.0.0
values:
  default_locale: fr
  supported_locales:
    - en
"#,
    )
    .unwrap();

    docsite(&site)
        .env("DOCSITE_I18N_CONFIG", "locales.yaml")
        .arg("locales")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not listed in supported_locales"));
}
