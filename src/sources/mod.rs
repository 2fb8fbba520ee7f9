//! Sources of the file list a watch session observes.

mod blocks;
mod file_set;

pub use blocks::{ServerBlock, ServerBlocks};
pub use file_set::FileSet;
