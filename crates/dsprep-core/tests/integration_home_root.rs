//! Integration test: a `~/...` dataset root resolves under the home directory.
//!
//! Kept in its own test binary because it points `HOME` at a temp dir.

#![cfg(unix)]

mod common;

use dsprep_core::prepare_dataset;
use std::fs;
use tempfile::tempdir;

#[test]
fn tilde_root_expands_to_home() {
    let home = tempdir().unwrap();
    std::env::set_var("HOME", home.path());
    let server = common::archive_server::start(common::tar_gz(&[("data.csv", "a\n")]));

    let out = prepare_dataset(&server.url("foo.tar.gz"), "~/datasets").unwrap();

    assert_eq!(out, home.path().join("datasets/foo"));
    assert_eq!(fs::read(out.join("data.csv")).unwrap(), b"a\n");
    assert!(home.path().join("datasets/foo.tar.gz").exists());
    assert!(!std::path::Path::new("~").exists());
}
