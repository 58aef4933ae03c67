// SPDX-FileCopyrightText: 2025 xfnw
//
// SPDX-License-Identifier: MIT

use std::{
    ffi::OsStr,
    path::Path,
    process::{Command, Output},
};

static BIN: &str = env!("CARGO_BIN_EXE_range2ent");
static DATA_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data");

fn command_output(args: impl IntoIterator<Item = impl AsRef<OsStr>>) -> Output {
    Command::new(BIN).args(args).output().unwrap()
}

fn snapshot(name: &str, args: &[&str]) {
    let output = command_output(args);

    dbg!(str::from_utf8(&output.stderr).unwrap());
    assert!(output.status.success());
    assert!(output.stderr.is_empty());

    let output = String::from_utf8(output.stdout).unwrap();
    let mut lines = output.lines();
    let sample =
        std::fs::read_to_string(Path::new(DATA_DIR).join(name).with_extension("txt")).unwrap();

    for (n, sl) in sample.lines().enumerate() {
        assert_eq!(lines.next().unwrap(), sl, "line {}", n + 1);
    }

    assert_eq!(lines.next(), None);
}

fn failure(args: &[&str]) {
    let output = command_output(args);
    dbg!(str::from_utf8(&output.stderr).unwrap());
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

macro_rules! snap {
    ($name:ident, $($arg:expr),*) => {
        #[test]
        fn $name() {
            snapshot(stringify!($name), &[$($arg),*]);
        }
    };
}

snap!(five_to_ten, "5", "10");
snap!(hex_block, "0x100", "0x1ff", "--count");
snap!(whole_space, "0", "0xffffffff");
snap!(ipv4_range, "10.0.0.0", "10.0.1.127");
snap!(optimize_split, "1", "254", "-o", "-c");
snap!(optimize_direct, "100", "200", "--optimize", "--count");
snap!(optimize_ipv4, "192.168.0.1", "192.168.0.254", "--optimize");

#[test]
fn range_too_large() {
    failure(&["5", "0xffffffff"]);
}

#[test]
fn too_many_entries() {
    failure(&["1", "4294967294"]);
}

#[test]
fn inverted() {
    failure(&["10", "5"]);
}

#[test]
fn not_a_number() {
    failure(&["meow", "5"]);
    failure(&["1.2.3", "5"]);
    failure(&["5", "256.0.0.1"]);
}

#[test]
fn missing_end() {
    failure(&["5"]);
}
