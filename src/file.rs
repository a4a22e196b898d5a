//! Custom override file naming and discovery.
//!
//! Given a base path `dir/name.ext`, the override sequence is:
//!
//! ```text
//! dir/name.custom.ext
//! dir/name.custom.01.ext
//! dir/name.custom.02.ext
//! ...
//! dir/name.custom.99.ext
//! ```
//!
//! The extension is everything from the last `.` of the file name, so
//! `app.tar.yaml` yields `app.tar.custom.yaml` and a base without a dot yields
//! `name.custom`, `name.custom.01`, ....
//!
//! The sequence is contiguous: the loader walks it in order and stops at the
//! first file that does not exist. `name.custom.02.ext` is only reachable when
//! both `name.custom.ext` and `name.custom.01.ext` exist. Index 100 is never
//! produced.

use std::io;
use std::path::{Path, PathBuf};

/// Highest numbered override index that is ever probed.
pub const MAX_CUSTOM_INDEX: u32 = 99;

const CUSTOM_MARKER: &str = ".custom";

/// Split a path's file name into `(stem, ext)` where `ext` keeps its leading dot.
fn split_file_name(base: &Path) -> (String, String) {
    let name = base
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    match name.rfind('.') {
        Some(dot) => (name[..dot].to_string(), name[dot..].to_string()),
        None => (name, String::new()),
    }
}

/// The first override: `dir/name.custom.ext`.
pub fn custom_path(base: &Path) -> PathBuf {
    let (stem, ext) = split_file_name(base);
    base.with_file_name(format!("{stem}{CUSTOM_MARKER}{ext}"))
}

/// A numbered override: `dir/name.custom.NN.ext`, `NN` zero-padded to two digits.
pub fn numbered_custom_path(base: &Path, index: u32) -> PathBuf {
    let (stem, ext) = split_file_name(base);
    base.with_file_name(format!("{stem}{CUSTOM_MARKER}.{index:02}{ext}"))
}

/// Every candidate override path for `base`, in application order.
///
/// Yields `name.custom.ext` followed by `name.custom.01.ext` through
/// `name.custom.99.ext`. Candidates are computed lazily; existence is the
/// caller's concern.
pub fn override_paths(base: &Path) -> OverridePaths {
    OverridePaths {
        base: base.to_path_buf(),
        next: Some(0),
    }
}

/// Iterator returned by [`override_paths`].
#[derive(Debug, Clone)]
pub struct OverridePaths {
    base: PathBuf,
    /// `0` is the unnumbered `.custom` file; `None` once exhausted.
    next: Option<u32>,
}

impl Iterator for OverridePaths {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        let index = self.next?;
        self.next = (index < MAX_CUSTOM_INDEX).then_some(index + 1);
        let path = match index {
            0 => custom_path(&self.base),
            n => numbered_custom_path(&self.base, n),
        };
        Some(path)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self
            .next
            .map_or(0, |i| (MAX_CUSTOM_INDEX - i + 1) as usize);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for OverridePaths {}

/// Read a document, treating a missing file as `None`.
///
/// Any other I/O error (permissions, a directory in the file's place) is
/// propagated. The bytes are returned as-is; decoding them is the caller's job.
pub(crate) fn read_optional(path: &Path) -> io::Result<Option<Vec<u8>>> {
    match std::fs::read(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}
