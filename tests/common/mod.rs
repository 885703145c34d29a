//! Common test utilities

#![allow(dead_code)]

use std::path::PathBuf;

use retree::tree::{Tree, TreeNode};

/// Get the path to the fixtures directory
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Build a binary search tree by inserting `values` in order
pub fn bst_from(values: &[i64]) -> Tree<i64> {
    let mut root: Tree<i64> = None;
    for &v in values {
        insert(&mut root, v);
    }
    root
}

fn insert(tree: &mut Tree<i64>, v: i64) {
    match tree {
        None => *tree = Some(TreeNode::leaf(v)),
        Some(node) if v < node.val => insert(&mut node.left, v),
        Some(node) => insert(&mut node.right, v),
    }
}

/// Deterministic permutation of `0..n` (multiplicative step coprime with n)
pub fn permutation(n: usize, seed: usize) -> Vec<i64> {
    if n == 0 {
        return Vec::new();
    }

    let mut step = seed * 7919 % n + 1;
    while gcd(step, n) != 1 {
        step += 1;
    }

    (0..n).map(|i| ((i * step + seed) % n) as i64).collect()
}

fn gcd(a: usize, b: usize) -> usize {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

/// A chain of `n` nodes where every child hangs on the same side
pub fn chain(n: i64, left: bool) -> Tree<i64> {
    let mut tree: Tree<i64> = None;

    for v in (0..n).rev() {
        let mut node = TreeNode::new(v);
        if left {
            node.left = tree.take();
        } else {
            node.right = tree.take();
        }
        tree = Some(Box::new(node));
    }

    tree
}
