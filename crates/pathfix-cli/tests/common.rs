#![allow(dead_code)]

use std::{fs, path::Path};

use assert_cmd::{assert::Assert, cargo::cargo_bin_cmd, Command};
use serde_json::Value;
use tempfile::TempDir;

pub const INTERPRETER: &str = "/usr/bin/python3.12";

pub fn pathfix() -> Command {
    let mut cmd = cargo_bin_cmd!("pathfix");
    cmd.env_remove("PATHFIX_INTERPRETER").env("NO_COLOR", "1");
    cmd
}

pub fn prepare_tree(prefix: &str, files: &[(&str, &str)]) -> TempDir {
    let temp = tempfile::Builder::new()
        .prefix(prefix)
        .tempdir()
        .expect("tempdir");
    for (name, contents) in files {
        write_file(temp.path(), name, contents.as_bytes());
    }
    temp
}

pub fn write_file(root: &Path, name: &str, contents: &[u8]) {
    let path = root.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent");
    }
    fs::write(&path, contents).expect("write file");
}

pub fn stdout_of(assert: &Assert) -> String {
    String::from_utf8(assert.get_output().stdout.clone()).expect("utf8 stdout")
}

pub fn stderr_of(assert: &Assert) -> String {
    String::from_utf8(assert.get_output().stderr.clone()).expect("utf8 stderr")
}

pub fn parse_json(assert: &Assert) -> Value {
    serde_json::from_slice(&assert.get_output().stdout).expect("valid json")
}
