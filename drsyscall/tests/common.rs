// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gustavo Noronha Silva <gustavo@noronha.dev.br>

use std::path::PathBuf;

use assert_cmd::Command;

/// `drsys` against the x86_64 Linux tables, whatever the host.
pub fn drsys_linux() -> Command {
    let mut cmd = Command::cargo_bin("drsys").unwrap();
    cmd.args(["--os", "linux", "--personality", "x86_64"]);
    cmd
}

/// `drsys` against the built-in Windows 10 x64 numbers.
pub fn drsys_windows() -> Command {
    let mut cmd = Command::cargo_bin("drsys").unwrap();
    cmd.args([
        "--os",
        "windows",
        "--personality",
        "x86_64",
        "--windows-build",
        "19045",
    ]);
    cmd
}

pub fn data_file(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}
