// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gustavo Noronha Silva <gustavo@noronha.dev.br>

use indoc::indoc;
use predicates::prelude::*;

mod common;
use common::{data_file, drsys_linux, drsys_windows};

#[test]
fn list_in_table_order() {
    drsys_linux()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(indoc! {"
            219 restart_syscall
            60 exit
            57 fork
            0 read
        "}))
        .stdout(predicate::str::contains("\n16 ioctl\n"))
        .stdout(predicate::str::contains("ioctl.TCGETS").not());
}

#[test]
fn args_one_per_line() {
    drsys_linux()
        .args(["args", "read"])
        .assert()
        .success()
        .stdout(indoc! {"
            #0 int [4] in|inlined
            #1 <struct> [8] out
            #2 unsigned int [8] in|inlined
            ret int [8]
        "});
}

#[test]
fn args_multi_line() {
    drsys_linux()
        .args(["--format", "multi-line", "args", "read"])
        .assert()
        .success()
        .stdout(
            "0\n\tread(\n\t    #0 int [4] in|inlined,\n\t    #1 <struct> [8] out,\n\t    \
             #2 unsigned int [8] in|inlined\n\t) = int [8]\n",
        );
}

#[test]
fn show_by_name_and_number() {
    drsys_linux()
        .args(["show", "getcwd"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("79 getcwd("))
        .stdout(predicate::str::contains("type: Kernel\nknown: true\n"));

    drsys_linux()
        .args(["show", "79"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("79 getcwd("));

    drsys_linux()
        .args(["show", "16.21505"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("16.21505 ioctl.TCGETS("));
}

#[test]
fn show_unknown_call_fails() {
    drsys_linux()
        .args(["show", "no_such_call"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no system call no_such_call"));
}

#[test]
fn windows_names_resolve_through_aliases() {
    drsys_windows()
        .args(["show", "NtReadFile"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("6 NtReadFile("));

    drsys_windows()
        .args(["show", "zwquerykey"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("22 NtQueryKey("));
}

#[test]
fn check_sysnum_file() {
    drsys_linux()
        .arg("check-sysnum-file")
        .arg(data_file("win32k.drsyscall"))
        .assert()
        .success()
        .stdout(indoc! {"
            version 1, differentiator NtGetContextThread, 1 blocks
            START=0xf2: 3 numbers, 1 not in the tables
        "});
}

#[test]
fn check_missing_sysnum_file() {
    drsys_linux()
        .arg("check-sysnum-file")
        .arg(data_file("missing.drsyscall"))
        .assert()
        .failure();
}
