//! Tree construction module

mod builder;
mod node;
pub mod traversal;

pub use builder::{Strategy, TreeBuilder, TreeError};
pub use node::{Tree, TreeNode};
