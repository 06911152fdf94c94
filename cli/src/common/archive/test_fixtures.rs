//! Archive fixtures built in memory for unit tests.
//!
//! The standard fixture mirrors a Python sdist: six members under
//! `zless-22.1.dev0/`, written in the order `contents()` must report them.

use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use zip::write::SimpleFileOptions;

pub const PREFIX: &str = "zless-22.1.dev0";

pub const PKG_INFO: &str = "Metadata-Version: 2.1\n\
Name: zless\n\
Version: 22.1.dev0\n\
Summary: Page through files inside archives\n\
Requires-Python: >=3.8\n";

pub const MEMBERS: [(&str, &str); 6] = [
    ("README.rst", "zless\n=====\n\nPage through archive members.\n"),
    ("pyproject.toml", "[build-system]\nrequires = [\"setuptools\"]\n"),
    ("src/zless/__init__.py", "__version__ = \"22.1.dev0\"\n"),
    ("src/zless/__main__.py", "from zless.cli import main\n\nmain()\n"),
    ("setup.py", "from setuptools import setup\n\nsetup()\n"),
    ("PKG-INFO", PKG_INFO),
];

/// Full member names of the standard fixture, in archive order.
pub fn member_names() -> Vec<String> {
    MEMBERS
        .iter()
        .map(|(name, _)| format!("{PREFIX}/{name}"))
        .collect()
}

pub fn append_file<W: Write>(builder: &mut tar::Builder<W>, name: &str, data: &[u8]) {
    let mut header = tar::Header::new_gnu();
    header.set_entry_type(tar::EntryType::Regular);
    header.set_size(data.len() as u64);
    header.set_mode(0o644);
    builder
        .append_data(&mut header, name, data)
        .expect("append tar file");
}

pub fn append_dir<W: Write>(builder: &mut tar::Builder<W>, name: &str) {
    let mut header = tar::Header::new_gnu();
    header.set_entry_type(tar::EntryType::Directory);
    header.set_size(0);
    header.set_mode(0o755);
    builder
        .append_data(&mut header, name, std::io::empty())
        .expect("append tar directory");
}

pub fn append_symlink<W: Write>(builder: &mut tar::Builder<W>, name: &str, target: &str) {
    let mut header = tar::Header::new_gnu();
    header.set_entry_type(tar::EntryType::Symlink);
    header.set_size(0);
    header.set_mode(0o777);
    builder
        .append_link(&mut header, name, target)
        .expect("append tar symlink");
}

/// Appends a member with its name and link target written byte for byte.
///
/// `tar::Builder::append_data` strips a leading `./`; archives made with
/// `tar -cf x.tar .` keep it, so tests that need such names go through here.
pub fn append_raw<W: Write>(
    builder: &mut tar::Builder<W>,
    name: &str,
    entry_type: tar::EntryType,
    link: Option<&str>,
    data: &[u8],
) {
    let mut header = tar::Header::new_gnu();
    {
        let old = header.as_old_mut();
        old.name[..name.len()].copy_from_slice(name.as_bytes());
        if let Some(link) = link {
            old.linkname[..link.len()].copy_from_slice(link.as_bytes());
        }
    }
    header.set_entry_type(entry_type);
    header.set_size(data.len() as u64);
    header.set_mode(0o644);
    header.set_cksum();
    builder.append(&header, data).expect("append raw tar member");
}

/// Builds a tarball with the standard members followed by whatever `extra` appends.
pub fn tar_with(extra: impl FnOnce(&mut tar::Builder<Vec<u8>>)) -> Vec<u8> {
    let mut builder = tar::Builder::new(Vec::new());
    for (name, content) in MEMBERS {
        append_file(&mut builder, &format!("{PREFIX}/{name}"), content.as_bytes());
    }
    extra(&mut builder);
    builder.into_inner().expect("finish tar")
}

pub fn standard_tar() -> Vec<u8> {
    tar_with(|_| {})
}

pub fn gzip(data: &[u8]) -> Vec<u8> {
    let mut encoder = flate2::write::GzEncoder::new(Vec::new(), flate2::Compression::default());
    encoder.write_all(data).expect("gzip write");
    encoder.finish().expect("gzip finish")
}

/// Builds a zip with the standard members followed by whatever `extra` adds.
pub fn zip_with(extra: impl FnOnce(&mut zip::ZipWriter<Cursor<Vec<u8>>>)) -> Vec<u8> {
    let options =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    for (name, content) in MEMBERS {
        writer
            .start_file(format!("{PREFIX}/{name}"), options)
            .expect("start zip file");
        writer.write_all(content.as_bytes()).expect("write zip file");
    }
    extra(&mut writer);
    writer.finish().expect("finish zip").into_inner()
}

pub fn standard_zip() -> Vec<u8> {
    zip_with(|_| {})
}

pub fn write_fixture(dir: &Path, file_name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(file_name);
    std::fs::write(&path, bytes).expect("write fixture");
    path
}
