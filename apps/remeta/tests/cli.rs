//! Integration tests for the remeta binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn remeta_cmd() -> Command {
    Command::cargo_bin("remeta").expect("remeta binary builds")
}

fn write_page(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

const SWAPPABLE_PAGE: &str = "\
<html>
<meta name=\"description\" content=\"PLACEHOLDER\">
<META NAME=\"DESCRIPTION\" CONTENT=\"Adding a publication\">
</html>
";

const PLAIN_PAGE: &str = "\
<html>
<body>nothing to do</body>
</html>
";

#[test]
fn test_no_paths_is_a_usage_error() {
    remeta_cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_single_file_swap() {
    let dir = TempDir::new().unwrap();
    let path = write_page(&dir, "page.html", SWAPPABLE_PAGE);

    remeta_cmd()
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("relocated"))
        .stdout(predicate::str::contains("1 of 1 files updated"));

    let rewritten = fs::read_to_string(&path).unwrap();
    assert!(rewritten.contains("<META NAME=\"DESCRIPTION\" CONTENT=\"Adding a publication\">"));
    assert!(!rewritten.contains("PLACEHOLDER"));
}

#[test]
fn test_batch_summary_counts_updated_files() {
    let dir = TempDir::new().unwrap();
    let first = write_page(&dir, "a.html", PLAIN_PAGE);
    let second = write_page(&dir, "b.html", SWAPPABLE_PAGE);
    let third = write_page(&dir, "c.html", PLAIN_PAGE);

    remeta_cmd()
        .args([&first, &second, &third])
        .assert()
        .success()
        .stdout(predicate::str::contains("unchanged"))
        .stdout(predicate::str::contains("1 of 3 files updated"));

    assert_eq!(fs::read_to_string(&first).unwrap(), PLAIN_PAGE);
    assert_eq!(fs::read_to_string(&third).unwrap(), PLAIN_PAGE);
}

#[test]
fn test_missing_file_fails_and_spares_later_files() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("gone.html");
    let after = write_page(&dir, "after.html", SWAPPABLE_PAGE);

    remeta_cmd()
        .args([&missing, &after])
        .assert()
        .failure()
        .stderr(predicate::str::contains("gone.html"));

    assert_eq!(fs::read_to_string(&after).unwrap(), SWAPPABLE_PAGE);
}

#[test]
fn test_quiet_suppresses_summary() {
    let dir = TempDir::new().unwrap();
    let path = write_page(&dir, "page.html", SWAPPABLE_PAGE);

    remeta_cmd()
        .arg("--quiet")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_description_only_leaves_charset_alone() {
    let page = "\
<html>
<meta http-equiv=\"Content-Type\" content=\"text/html; charset=ISO-8859-1\">
</html>
";
    let dir = TempDir::new().unwrap();
    let path = write_page(&dir, "charset.html", page);

    remeta_cmd()
        .arg("--description-only")
        .arg(&path)
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&path).unwrap(), page);
}

#[test]
fn test_summary_pads_labels_before_coloring() {
    let page = "\
<html>
<meta http-equiv=\"Content-Type\" content=\"text/html; charset=ISO-8859-1\">
</html>
";
    let dir = TempDir::new().unwrap();
    let path = write_page(&dir, "charset.html", page);

    // With colors forced on, the column padding must sit inside the escape
    // sequence; padding applied to the colored string would count escape
    // bytes toward the width and drop the alignment spaces entirely.
    remeta_cmd()
        .env("CLICOLOR_FORCE", "1")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{1b}[36m  charset\u{1b}[0m"));
}

#[test]
fn test_default_mode_normalizes_charset() {
    let page = "\
<html>
<meta http-equiv=\"Content-Type\" content=\"text/html; charset=ISO-8859-1\">
</html>
";
    let dir = TempDir::new().unwrap();
    let path = write_page(&dir, "charset.html", page);

    remeta_cmd().arg(&path).assert().success();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "<html>\n<meta http-equiv=\"Content-Type\" content=\"text/html; charset=utf-8\">\n</html>\n"
    );
}
