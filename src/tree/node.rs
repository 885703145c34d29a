//! Owned binary tree node

/// An owned, possibly empty binary tree
pub type Tree<T> = Option<Box<TreeNode<T>>>;

/// A node in a binary tree
///
/// Each node exclusively owns its children, so a tree is dropped as a unit
/// when its root goes out of scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode<T> {
    pub val: T,
    pub left: Tree<T>,
    pub right: Tree<T>,
}

impl<T> TreeNode<T> {
    /// Create a leaf node holding `val`
    pub fn new(val: T) -> Self {
        Self {
            val,
            left: None,
            right: None,
        }
    }

    /// Create a boxed leaf node, ready to be attached as a child
    pub fn leaf(val: T) -> Box<Self> {
        Box::new(Self::new(val))
    }

    /// Set the left child and return the node (for building fixtures)
    pub fn with_left(mut self, left: TreeNode<T>) -> Self {
        self.left = Some(Box::new(left));
        self
    }

    /// Set the right child and return the node (for building fixtures)
    pub fn with_right(mut self, right: TreeNode<T>) -> Self {
        self.right = Some(Box::new(right));
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

impl<T> Drop for TreeNode<T> {
    // Unlink children onto a heap stack so a skewed tree does not recurse once per level
    fn drop(&mut self) {
        let mut stack: Vec<Box<TreeNode<T>>> = Vec::new();
        stack.extend(self.left.take());
        stack.extend(self.right.take());

        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}
