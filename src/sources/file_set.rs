//! File set trait.

use std::path::{Path, PathBuf};

/// Anything that can report which files a configuration was built from.
///
/// Implement this trait for whatever the configuration loader produces after a
/// parse, so that it can be handed straight to a rebuild.
pub trait FileSet {
    /// The files to watch. Order is preserved but carries no meaning.
    fn files(&self) -> Vec<PathBuf>;
}

impl<P: AsRef<Path>> FileSet for [P] {
    fn files(&self) -> Vec<PathBuf> {
        self.iter().map(|p| p.as_ref().to_path_buf()).collect()
    }
}

impl<P: AsRef<Path>> FileSet for Vec<P> {
    fn files(&self) -> Vec<PathBuf> {
        self.as_slice().files()
    }
}

impl<P: AsRef<Path>, const N: usize> FileSet for [P; N] {
    fn files(&self) -> Vec<PathBuf> {
        self.as_slice().files()
    }
}
