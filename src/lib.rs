//! Rebuild binary trees from their preorder and inorder traversals
//!
//! ```
//! use retree::tree::{traversal, TreeBuilder};
//!
//! let tree = TreeBuilder::build(&[3, 9, 20, 15, 7], &[9, 3, 15, 20, 7]).unwrap();
//! assert_eq!(traversal::postorder(&tree), vec![9, 15, 7, 20, 3]);
//! ```

pub mod cases;
pub mod cli;
pub mod config;
pub mod output;
pub mod tree;
