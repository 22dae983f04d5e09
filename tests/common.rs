#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub fn eb() -> Command {
    cargo_bin_cmd!("eventboard")
}

/// Binary pointed at a config path inside `dir` (absent unless written),
/// with colors off so output can be matched literally.
pub fn eb_in(dir: &TempDir) -> Command {
    let mut cmd = eb();
    cmd.arg("--config")
        .arg(config_path(dir))
        .arg("--no-color")
        .env_remove("EVENTBOARD_LOG")
        .env_remove("DEBUG");
    cmd
}

pub fn config_path(dir: &TempDir) -> PathBuf {
    dir.path().join("eventboard.yaml")
}

pub fn write_config(dir: &TempDir, yaml: &str) {
    fs::write(config_path(dir), yaml).expect("write config");
}

/// Write a script file inside `dir` and return its path.
pub fn write_script(dir: &TempDir, name: &str, lines: &[&str]) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, lines.join("\n")).expect("write script");
    path
}

/// Rows of the rendered list: lines that start with an event id.
pub fn event_rows(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .filter(|line| line.trim_start().starts_with(|c: char| c.is_ascii_digit()))
        .map(str::to_string)
        .collect()
}
