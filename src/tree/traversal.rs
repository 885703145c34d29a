//! Tree walks
//!
//! All walks use an explicit stack or queue, so they are safe on skewed trees
//! of any depth.

use std::collections::VecDeque;

use super::node::{Tree, TreeNode};

/// Root, left subtree, right subtree
pub fn preorder<T: Clone>(tree: &Tree<T>) -> Vec<T> {
    let mut out = Vec::new();
    let mut stack: Vec<&TreeNode<T>> = tree.as_deref().into_iter().collect();

    while let Some(node) = stack.pop() {
        out.push(node.val.clone());
        stack.extend(node.right.as_deref());
        stack.extend(node.left.as_deref());
    }

    out
}

/// Left subtree, root, right subtree
pub fn inorder<T: Clone>(tree: &Tree<T>) -> Vec<T> {
    let mut out = Vec::new();
    let mut stack: Vec<&TreeNode<T>> = Vec::new();
    let mut cursor = tree.as_deref();

    loop {
        while let Some(node) = cursor {
            stack.push(node);
            cursor = node.left.as_deref();
        }
        let Some(node) = stack.pop() else {
            break;
        };
        out.push(node.val.clone());
        cursor = node.right.as_deref();
    }

    out
}

/// Left subtree, right subtree, root
pub fn postorder<T: Clone>(tree: &Tree<T>) -> Vec<T> {
    // Reverse of root, right, left
    let mut out = Vec::new();
    let mut stack: Vec<&TreeNode<T>> = tree.as_deref().into_iter().collect();

    while let Some(node) = stack.pop() {
        out.push(node.val.clone());
        stack.extend(node.left.as_deref());
        stack.extend(node.right.as_deref());
    }

    out.reverse();
    out
}

/// Breadth first, left to right within a level
pub fn level_order<T: Clone>(tree: &Tree<T>) -> Vec<T> {
    let mut out = Vec::new();
    let mut queue: VecDeque<&TreeNode<T>> = tree.as_deref().into_iter().collect();

    while let Some(node) = queue.pop_front() {
        out.push(node.val.clone());
        queue.extend(node.left.as_deref());
        queue.extend(node.right.as_deref());
    }

    out
}

/// Number of nodes
pub fn size<T>(tree: &Tree<T>) -> usize {
    let mut count = 0;
    let mut stack: Vec<&TreeNode<T>> = tree.as_deref().into_iter().collect();

    while let Some(node) = stack.pop() {
        count += 1;
        stack.extend(node.left.as_deref());
        stack.extend(node.right.as_deref());
    }

    count
}

/// Number of nodes on the longest root-to-leaf path; 0 for the empty tree
pub fn height<T>(tree: &Tree<T>) -> usize {
    let mut deepest = 0;
    let mut stack: Vec<(&TreeNode<T>, usize)> =
        tree.as_deref().into_iter().map(|root| (root, 1)).collect();

    while let Some((node, depth)) = stack.pop() {
        deepest = deepest.max(depth);
        stack.extend(node.left.as_deref().map(|n| (n, depth + 1)));
        stack.extend(node.right.as_deref().map(|n| (n, depth + 1)));
    }

    deepest
}
