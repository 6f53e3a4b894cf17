//! Local filesystem adapters

mod directory_tree;

pub use directory_tree::LocalDirectoryTree;
