//! File existence checks used by loaders that sit on top of the transforms.
//!
//! Two strategies are provided: a metadata lookup ([`file_exists_quick`]) and
//! an open/close probe ([`file_exists`]) for filesystems where metadata is
//! unreliable. Neither reads file contents.

use std::fs::{self, File};
use std::path::Path;

/// Check for a file using filesystem metadata only.
pub fn file_exists_quick<P: AsRef<Path>>(path: P) -> bool {
    fs::metadata(path).is_ok()
}

/// Check for a file by opening it for reading and closing it again.
pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
    File::open(path).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_is_found_by_both_strategies() {
        let manifest = concat!(env!("CARGO_MANIFEST_DIR"), "/Cargo.toml");
        assert!(file_exists_quick(manifest));
        assert!(file_exists(manifest));
    }

    #[test]
    fn missing_file_is_reported() {
        let missing = concat!(env!("CARGO_MANIFEST_DIR"), "/no-such-spectrum.dat");
        assert!(!file_exists_quick(missing));
        assert!(!file_exists(missing));
    }
}
