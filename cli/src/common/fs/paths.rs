//! # Output Path Resolution (`common::fs::paths`)
//!
//! File: cli/src/common/fs/paths.rs
//!
//! Decides where `zscope -o PATH` writes an extracted entry. When `PATH` is an
//! existing directory the entry keeps its base name inside that directory;
//! otherwise `PATH` is used verbatim as the destination file.
//!
use std::path::{Path, PathBuf};

/// Computes the destination file for the archive member `source`.
///
/// `source` is the slash-separated member name; only its last component is
/// used. Member names without a usable base name (e.g. `..`) fall back to
/// `dest` verbatim.
pub fn output_path(source: &str, dest: &Path) -> PathBuf {
    if dest.is_dir() {
        if let Some(base) = Path::new(source).file_name() {
            return dest.join(base);
        }
    }
    dest.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const SOURCE: &str = "zless-22.1.dev0/PKG-INFO";

    #[test]
    fn test_existing_directory_gets_base_name() {
        let dir = tempdir().unwrap();
        assert_eq!(output_path(SOURCE, dir.path()), dir.path().join("PKG-INFO"));

        let with_slash = PathBuf::from(format!("{}/", dir.path().display()));
        assert_eq!(output_path(SOURCE, &with_slash), dir.path().join("PKG-INFO"));
    }

    #[test]
    fn test_file_destination_is_verbatim() {
        let dir = tempdir().unwrap();
        let explicit = dir.path().join("PKG-INFO");
        assert_eq!(output_path(SOURCE, &explicit), explicit);

        let renamed = dir.path().join("blah");
        assert_eq!(output_path(SOURCE, &renamed), renamed);
    }

    #[test]
    fn test_existing_file_is_overwritten_in_place() {
        let dir = tempdir().unwrap();
        let existing = dir.path().join("notes.txt");
        std::fs::write(&existing, "old").unwrap();
        assert_eq!(output_path(SOURCE, &existing), existing);
    }

    #[test]
    fn test_top_level_member() {
        let dir = tempdir().unwrap();
        assert_eq!(output_path("setup.py", dir.path()), dir.path().join("setup.py"));
    }
}
