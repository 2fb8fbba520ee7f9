//! Parsed configuration blocks.

use super::FileSet;
use std::collections::HashSet;
use std::path::PathBuf;

/// A single parsed configuration block and the file it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerBlock {
    /// Keys (addresses, names) that open the block
    pub keys: Vec<String>,
    /// File the block was parsed from
    pub file: PathBuf,
}

impl ServerBlock {
    /// Create a block with the given keys read from `file`.
    pub fn new<K, S>(keys: K, file: impl Into<PathBuf>) -> Self
    where
        K: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            file: file.into(),
        }
    }
}

/// The blocks produced by one configuration parse.
///
/// # Examples
///
/// ```rust
/// use reload_notify::sources::{FileSet, ServerBlock, ServerBlocks};
///
/// let blocks = ServerBlocks::new(vec![
///     ServerBlock::new(["example.com"], "Caddyfile"),
///     ServerBlock::new(["api.example.com"], "sites/api.conf"),
///     ServerBlock::new(["www.example.com"], "Caddyfile"),
/// ]);
///
/// assert_eq!(blocks.files().len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerBlocks(Vec<ServerBlock>);

impl ServerBlocks {
    /// Wrap the blocks of a parse.
    pub fn new(blocks: Vec<ServerBlock>) -> Self {
        Self(blocks)
    }

    /// The blocks in parse order.
    pub fn blocks(&self) -> &[ServerBlock] {
        &self.0
    }

    /// Number of blocks.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the parse produced no blocks.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<ServerBlock>> for ServerBlocks {
    fn from(blocks: Vec<ServerBlock>) -> Self {
        Self::new(blocks)
    }
}

impl FileSet for ServerBlocks {
    /// Each distinct file once, in the order it was first seen.
    fn files(&self) -> Vec<PathBuf> {
        let mut seen = HashSet::new();
        self.0
            .iter()
            .filter(|block| seen.insert(&block.file))
            .map(|block| block.file.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_files_deduplicated_in_first_seen_order() {
        let blocks = ServerBlocks::new(vec![
            ServerBlock::new(["a.example"], "b.conf"),
            ServerBlock::new(["b.example"], "a.conf"),
            ServerBlock::new(["c.example"], "b.conf"),
        ]);

        assert_eq!(
            blocks.files(),
            vec![PathBuf::from("b.conf"), PathBuf::from("a.conf")]
        );
    }

    #[test]
    fn test_empty_blocks() {
        let blocks = ServerBlocks::default();
        assert!(blocks.is_empty());
        assert!(blocks.files().is_empty());
    }

    #[test]
    fn test_block_keys() {
        let block = ServerBlock::new(["localhost:8080", "127.0.0.1:8080"], "Caddyfile");
        assert_eq!(block.keys.len(), 2);
        assert_eq!(block.file, PathBuf::from("Caddyfile"));
    }
}
