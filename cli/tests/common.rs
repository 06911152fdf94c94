//! # zscope CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration tests: a preconfigured `zscope` command
//! and builders that write small tar, tar.gz and zip fixtures to a temporary
//! directory. Fixtures are generated at test time so no binary files are kept
//! in the repository.
//!

// Not every test file uses every helper.
#![allow(dead_code)]

pub use assert_cmd::Command;
use flate2::{write::GzEncoder, Compression};
use std::fs;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use zip::write::SimpleFileOptions;

pub const PREFIX: &str = "zless-22.1.dev0";

/// Members of the test package, in archive order.
pub const MEMBERS: [(&str, &str); 6] = [
    ("README.rst", "zless\n=====\n\nPage through archive members.\n"),
    ("pyproject.toml", "[build-system]\nrequires = [\"setuptools\"]\n"),
    ("src/zless/__init__.py", "__version__ = \"22.1.dev0\"\n"),
    ("src/zless/__main__.py", "from zless.cli import main\n\nmain()\n"),
    ("setup.py", "from setuptools import setup\n\nsetup()\n"),
    (
        "PKG-INFO",
        "Metadata-Version: 2.1\nName: zless\nVersion: 22.1.dev0\n",
    ),
];

/// `MEMBERS` names with the package prefix, one per line, as `--list` prints them.
pub fn expected_listing() -> String {
    MEMBERS
        .iter()
        .map(|(name, _)| format!("{PREFIX}/{name}\n"))
        .collect()
}

/// Contents of the member `name` (without prefix).
pub fn member_text(name: &str) -> &'static str {
    MEMBERS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, text)| *text)
        .expect("unknown fixture member")
}

/// A temporary working directory holding fixtures and an empty config file.
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        fs::write(dir.path().join("config.toml"), "").expect("Failed to write config");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write(&self, name: &str, bytes: &[u8]) -> PathBuf {
        let path = self.path().join(name);
        fs::write(&path, bytes).expect("Failed to write fixture");
        path
    }

    /// # Get zscope Command (`zscope_cmd`)
    ///
    /// Returns a `zscope` command that runs inside this workspace, reads the
    /// empty config file and has no `PAGER` set.
    pub fn zscope_cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("zscope").expect("Failed to find zscope binary for testing");
        cmd.current_dir(self.path())
            .env("ZSCOPE_CONFIG", self.path().join("config.toml"))
            .env_remove("PAGER")
            .env_remove("RUST_LOG");
        cmd
    }
}

pub fn tar_bytes() -> Vec<u8> {
    let mut builder = tar::Builder::new(Vec::new());
    for (name, text) in MEMBERS {
        let mut header = tar::Header::new_gnu();
        header.set_size(text.len() as u64);
        header.set_mode(0o644);
        header.set_entry_type(tar::EntryType::Regular);
        header.set_cksum();
        builder
            .append_data(&mut header, format!("{PREFIX}/{name}"), text.as_bytes())
            .expect("Failed to append tar member");
    }
    builder.into_inner().expect("Failed to finish tar")
}

pub fn tar_gz_bytes() -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(&tar_bytes()).expect("Failed to gzip");
    encoder.finish().expect("Failed to finish gzip")
}

pub fn zip_bytes() -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);
    for (name, text) in MEMBERS {
        writer
            .start_file(format!("{PREFIX}/{name}"), options)
            .expect("Failed to start zip member");
        writer.write_all(text.as_bytes()).expect("Failed to write zip member");
    }
    writer.finish().expect("Failed to finish zip").into_inner()
}
