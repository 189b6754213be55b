//! Integration tests for the hover-reader CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Settings and state files in a scratch directory
struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    /// A sandbox whose settings point at a book with `lines` numbered lines
    fn with_book(lines: usize, lines_per_page: usize) -> Self {
        let sandbox = Self::new();
        let text: String = (1..=lines).map(|n| format!("line {n}\n")).collect();
        let book = sandbox.path("book.txt");
        fs::write(&book, text).unwrap();
        fs::write(
            sandbox.path("settings.toml"),
            format!(
                "[hoverReader]\nlinesPerPage = {lines_per_page}\ntextFilePath = {:?}\n",
                book.display().to_string()
            ),
        )
        .unwrap();
        sandbox
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("hover-reader").unwrap();
        cmd.env_remove("HOVER_READER_WORKSPACE")
            .arg("--settings")
            .arg(self.path("settings.toml"))
            .arg("--state")
            .arg(self.path("state.json"));
        cmd
    }

    fn state(&self) -> serde_json::Value {
        let text = fs::read_to_string(self.path("state.json")).unwrap();
        serde_json::from_str(&text).unwrap()
    }
}

fn hovered_source(dir: &Path) -> PathBuf {
    let path = dir.join("lib.rs");
    fs::write(&path, "pub fn add(a: i32, b: i32) -> i32 {\n    a + b\n}\n").unwrap();
    path
}

#[test]
fn test_show_bundled_sample_by_default() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Page 1/8\n"));
}

#[test]
fn test_status_when_disabled() {
    let sandbox = Sandbox::with_book(4, 2);
    sandbox
        .cmd()
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[book]\n"))
        .stdout(predicate::str::contains("Open settings"));
}

#[test]
fn test_goto_persists_and_show_follows() {
    let sandbox = Sandbox::with_book(10, 2);
    sandbox
        .cmd()
        .args(["goto", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("page: 3/5"));

    assert_eq!(sandbox.state()["hoverReader"]["currentPage"], 2);

    sandbox
        .cmd()
        .arg("show")
        .assert()
        .success()
        .stdout("Page 3/5\nline 5\nline 6\n");
}

#[test]
fn test_goto_reprompts_until_valid() {
    let sandbox = Sandbox::with_book(10, 2);
    sandbox
        .cmd()
        .args(["goto", "9"])
        .write_stdin("zero\n5\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Please enter a number between 1 and 5").count(2))
        .stdout(predicate::str::contains("page: 5/5"));
}

#[test]
fn test_goto_dismissed_leaves_state_alone() {
    let sandbox = Sandbox::with_book(10, 2);
    sandbox
        .cmd()
        .arg("goto")
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(!sandbox.path("state.json").exists());
}

#[test]
fn test_lines_updates_settings_file() {
    let sandbox = Sandbox::with_book(10, 2);
    sandbox
        .cmd()
        .args(["lines", "0"])
        .write_stdin("5\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Please enter a number greater than 0"))
        .stdout(predicate::str::contains("page: 1/2"));

    let settings = fs::read_to_string(sandbox.path("settings.toml")).unwrap();
    assert!(settings.contains("linesPerPage = 5"));
    assert!(settings.contains("book.txt"));
}

#[test]
fn test_direction_and_reset() {
    let sandbox = Sandbox::with_book(6, 1);
    sandbox.cmd().args(["goto", "4"]).assert().success();

    sandbox
        .cmd()
        .arg("backward")
        .assert()
        .success()
        .stderr(predicate::str::contains("Paging backward"));
    assert_eq!(sandbox.state()["hoverReader"]["direction"], "backward");
    assert_eq!(sandbox.state()["hoverReader"]["currentPage"], 3);

    sandbox
        .cmd()
        .arg("reset")
        .assert()
        .success()
        .stderr(predicate::str::contains("Reset to first page"));
    assert_eq!(sandbox.state()["hoverReader"]["currentPage"], 0);
    assert_eq!(sandbox.state()["hoverReader"]["direction"], "backward");
}

#[test]
fn test_select_rejects_non_text_files() {
    let sandbox = Sandbox::new();
    let pdf = sandbox.path("book.pdf");
    fs::write(&pdf, "%PDF").unwrap();

    sandbox
        .cmd()
        .arg("select")
        .arg(&pdf)
        .assert()
        .success()
        .stderr(predicate::str::contains("error:"));

    assert!(!sandbox.path("settings.toml").exists());
}

#[test]
fn test_select_loads_file_from_first_page() {
    let sandbox = Sandbox::with_book(6, 2);
    sandbox.cmd().args(["goto", "3"]).assert().success();

    let other = sandbox.path("other.txt");
    fs::write(&other, "alpha\n\nbeta\ngamma\n").unwrap();
    sandbox
        .cmd()
        .arg("select")
        .arg(&other)
        .assert()
        .success()
        .stderr(predicate::str::contains("Loaded file: other.txt"))
        .stdout(predicate::str::contains("page: 1/2"));

    assert_eq!(sandbox.state()["hoverReader"]["currentPage"], 0);
}

#[test]
fn test_missing_file_falls_back_to_placeholder() {
    let sandbox = Sandbox::new();
    fs::write(
        sandbox.path("settings.toml"),
        "[hoverReader]\ntextFilePath = \"/nonexistent/book.txt\"\n",
    )
    .unwrap();

    sandbox
        .cmd()
        .arg("show")
        .assert()
        .success()
        .stderr(predicate::str::contains("Could not read file"))
        .stdout("Page 1/2\nSample text 1\nSample text 2\n");
}

#[test]
fn test_json_status() {
    let sandbox = Sandbox::with_book(3, 1);
    let output = sandbox
        .cmd()
        .args(["--format", "json", "status"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["type"], "status");
    assert_eq!(value["pageCount"], 3);
    assert_eq!(value["enabled"], false);
}

#[test]
fn test_run_debounces_hover_bursts() {
    let sandbox = Sandbox::with_book(6, 2);
    let source = hovered_source(sandbox.dir.path());
    let script = format!(
        "toggle\nhover {0} 1\nhover {0} 2\nsleep 600\nhover {0} 1\nquit\n",
        source.display()
    );

    sandbox
        .cmd()
        .arg("run")
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Page 2/3\nline 3\nline 4\n").count(2))
        .stdout(predicate::str::contains("Page 3/3\nline 5\nline 6\n"));

    assert_eq!(sandbox.state()["hoverReader"]["currentPage"], 2);
}

#[test]
fn test_run_ignores_version_control_noise() {
    let sandbox = Sandbox::with_book(6, 2);
    let log = sandbox.path("git-log.txt");
    fs::write(&log, "commit 1a2b3c4d\nAuthor: someone\n").unwrap();
    let script = format!("toggle\nhover {} 1\n", log.display());

    sandbox
        .cmd()
        .arg("run")
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("(no content)"));

    assert!(!sandbox.path("state.json").exists());
}

#[test]
fn test_run_reports_unknown_events() {
    let sandbox = Sandbox::with_book(2, 1);
    sandbox
        .cmd()
        .arg("run")
        .write_stdin("# warm up\nfly away\nstatus\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Invalid event: fly away"))
        .stdout(predicate::str::contains("page: 1/2"));
}

#[test]
fn test_run_script_file() {
    let sandbox = Sandbox::with_book(4, 1);
    let script = sandbox.path("events.txt");
    fs::write(&script, "goto 4\nshow\n").unwrap();

    sandbox
        .cmd()
        .arg("run")
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::ends_with("Page 4/4\nline 4\n"));
}
