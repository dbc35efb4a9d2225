//! Integration tests for CLI commands.

use serde_json::json;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tempfile::TempDir;

struct TestEnv {
    temp_dir: TempDir,
    config_path: PathBuf,
    db_path: PathBuf,
}

impl TestEnv {
    fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config").join("config.toml");
        let db_path = temp_dir.path().join("reflections.json");
        Self {
            temp_dir,
            config_path,
            db_path,
        }
    }

    fn initialized() -> Self {
        let env = Self::new();
        let (success, _, stderr) = env.run(&["init", "--db-path", env.db_str()]);
        assert!(success, "init failed: {}", stderr);
        env
    }

    fn db_str(&self) -> &str {
        self.db_path.to_str().unwrap()
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut command = Command::new(env!("CARGO_BIN_EXE_reflectionist"));
        command
            .arg("--config")
            .arg(&self.config_path)
            .args(args)
            .env_remove("REFLECTIONIST_CONFIG")
            .env_remove("REFLECTIONIST_LOG")
            .env("HOME", self.temp_dir.path())
            .env_remove("XDG_CONFIG_HOME");
        command
    }

    fn run(&self, args: &[&str]) -> (bool, String, String) {
        let output = self
            .command(args)
            .stdin(Stdio::null())
            .output()
            .expect("Failed to execute CLI");
        collect(output)
    }

    fn run_with_stdin(&self, args: &[&str], stdin: &str) -> (bool, String, String) {
        let mut child = self
            .command(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to execute CLI");
        child
            .stdin
            .take()
            .unwrap()
            .write_all(stdin.as_bytes())
            .unwrap();
        collect(child.wait_with_output().unwrap())
    }
}

fn collect(output: std::process::Output) -> (bool, String, String) {
    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();
    (output.status.success(), stdout, stderr)
}

fn read_store(path: &Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_version() {
    let env = TestEnv::new();
    let (success, stdout, _) = env.run(&["--version"]);
    assert!(success);
    assert!(stdout.starts_with("reflectionist "));
}

#[test]
fn test_init_creates_config_and_database() {
    let env = TestEnv::new();

    let (success, stdout, _) = env.run(&["init", "--db-path", env.db_str()]);
    assert!(success);
    assert!(stdout.contains(&format!("The reflections database is {}", env.db_str())));
    assert_eq!(fs::read_to_string(&env.db_path).unwrap(), "[]");

    let config = fs::read_to_string(&env.config_path).unwrap();
    assert!(config.contains("[general]"));
    assert!(config.contains(env.db_str()));
}

#[test]
fn test_init_default_database_under_home() {
    let env = TestEnv::new();

    let (success, _, _) = env.run(&["init"]);
    assert!(success);

    let user = env.temp_dir.path().file_name().unwrap().to_string_lossy();
    let expected = env.temp_dir.path().join(format!(".{}_reflections.json", user));
    assert!(expected.exists());
}

#[test]
fn test_init_keeps_existing_reflections() {
    let env = TestEnv::initialized();
    env.run(&["create", "--happened", "h", "--felt", "f", "--learned", "l"]);

    let (success, _, _) = env.run(&["init", "--db-path", env.db_str()]);
    assert!(success);
    assert_eq!(read_store(&env.db_path).as_array().unwrap().len(), 1);
}

#[test]
fn test_create_and_list() {
    let env = TestEnv::initialized();

    let (success, stdout, _) = env.run(&[
        "create",
        "--happened",
        "I was a dog",
        "--felt",
        "I was a cat",
        "--learned",
        "I was a mouse",
    ]);
    assert!(success);
    assert!(stdout.contains("Reflection added!"));

    let (success, stdout, _) = env.run(&["list"]);
    assert!(success);
    assert!(stdout.contains("1 reflections:"));
    assert!(stdout.contains("0. situation=I was a dog"));
}

#[test]
fn test_create_prompts_for_missing_fields() {
    let env = TestEnv::initialized();

    let (success, stdout, stderr) = env.run_with_stdin(
        &["create", "--happened", "I was a dog"],
        "I was a cat\nI was a mouse\n",
    );
    assert!(success, "create failed: {}", stderr);
    assert!(stdout.contains("How did I feel then and now?"));
    assert!(stdout.contains("What did I learn about myself?"));
    assert!(!stdout.contains("What happened that affected me?"));

    let store = read_store(&env.db_path);
    assert_eq!(store[0]["felt"], "I was a cat");
    assert_eq!(store[0]["learned"], "I was a mouse");
}

#[test]
fn test_create_without_answers_fails() {
    let env = TestEnv::initialized();

    let (success, _, stderr) = env.run(&["create"]);
    assert!(!success);
    assert!(stderr.contains("No answer given"));
    assert_eq!(read_store(&env.db_path), json!([]));
}

#[test]
fn test_list_newest_first() {
    let env = TestEnv::initialized();
    env.run(&["create", "--happened", "A", "--felt", "f", "--learned", "l"]);
    env.run(&["create", "--happened", "B", "--felt", "f", "--learned", "l"]);

    let (success, stdout, _) = env.run(&["list"]);
    assert!(success);
    let b = stdout.find("0. situation=B").unwrap();
    let a = stdout.find("1. situation=A").unwrap();
    assert!(b < a);
}

#[test]
fn test_list_empty() {
    let env = TestEnv::initialized();

    let (success, stdout, _) = env.run(&["list"]);
    assert!(success);
    assert!(stdout.contains("There are no reflections yet"));
}

#[test]
fn test_list_json() {
    let env = TestEnv::initialized();
    env.run(&["create", "--happened", "h", "--felt", "f", "--learned", "l"]);

    let (success, stdout, _) = env.run(&["list", "--json"]);
    assert!(success);
    let listed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(listed, read_store(&env.db_path));
}

#[test]
fn test_list_corrupt_database_fails() {
    let env = TestEnv::initialized();
    fs::write(&env.db_path, "not json").unwrap();

    let (success, _, stderr) = env.run(&["list"]);
    assert!(!success);
    assert!(stderr.contains("json error"));
}

#[test]
fn test_describe() {
    let env = TestEnv::initialized();
    env.run(&["create", "--happened", "h", "--felt", "f", "--learned", "l"]);

    let (success, stdout, _) = env.run(&["describe", "0"]);
    assert!(success);
    let described: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(described, read_store(&env.db_path)[0]);
}

#[test]
fn test_describe_out_of_range() {
    let env = TestEnv::initialized();

    let (success, _, stderr) = env.run(&["describe", "0"]);
    assert!(!success);
    assert!(stderr.contains("id error"));

    let (success, _, stderr) = env.run(&["describe", "-1"]);
    assert!(!success);
    assert!(stderr.contains("id error"));
}

#[test]
fn test_missing_config() {
    let env = TestEnv::new();

    let (success, _, stderr) = env.run(&["list"]);
    assert!(!success);
    assert!(stderr.contains("Config file not found"));
}

#[test]
fn test_missing_database() {
    let env = TestEnv::initialized();
    fs::remove_file(&env.db_path).unwrap();

    let (success, _, stderr) = env.run(&["describe", "0"]);
    assert!(!success);
    assert!(stderr.contains("Database not found"));
}

#[test]
fn test_create_replaces_corrupt_database() {
    let env = TestEnv::initialized();
    fs::write(&env.db_path, "{ broken").unwrap();

    let (success, _, _) = env.run(&["create", "--happened", "h", "--felt", "f", "--learned", "l"]);
    assert!(success);
    assert_eq!(read_store(&env.db_path).as_array().unwrap().len(), 1);
}

#[test]
fn test_logs_go_to_stderr() {
    let env = TestEnv::initialized();

    let (success, stdout, stderr) = env.run(&["--log-level", "debug", "list"]);
    assert!(success);
    assert!(stdout.contains("There are no reflections yet"));
    assert!(!stdout.contains("DEBUG"));
    assert!(stderr.contains("read store"));
}
