//! Binary tree reconstruction from preorder and inorder traversals

use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;
use std::ops::Range;

use serde::Deserialize;
use thiserror::Error;
use tracing::{instrument, trace, warn};

use super::node::{Tree, TreeNode};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("preorder has {preorder} values but inorder has {inorder}")]
    LengthMismatch { preorder: usize, inorder: usize },

    #[error("value {0} appears more than once")]
    DuplicateValue(String),

    #[error("preorder value {0} does not appear in inorder")]
    MissingValue(String),

    #[error(
        "traversals disagree: root {value} sits at inorder position {position}, outside its subtree span {start}..{end}"
    )]
    InconsistentTraversals {
        value: String,
        position: usize,
        start: usize,
        end: usize,
    },
}

/// How the builder walks the subproblems
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// One call frame per node
    #[default]
    Recursive,
    /// Explicit work-list, constant call depth
    Iterative,
}

/// Value to inorder position
type IndexMap<'a, T> = HashMap<&'a T, usize>;

#[derive(Debug, Clone, Copy)]
enum Side {
    Left,
    Right,
}

/// One pending subproblem of the iterative builder
struct Frame {
    /// Preorder position of the subtree root
    root: usize,
    /// Inorder span of the subtree
    span: Range<usize>,
    /// Where the finished subtree gets linked
    parent: Option<(usize, Side)>,
}

/// Rebuilds binary trees from a preorder and an inorder traversal
#[derive(Debug, Clone, Copy)]
pub struct TreeBuilder {
    strategy: Strategy,
    validate: bool,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self {
            strategy: Strategy::default(),
            validate: true,
        }
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Skip input validation and run [`TreeBuilder::build_unchecked`]
    ///
    /// Only honoured by the recursive strategy; the iterative builder always
    /// validates.
    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn validates(&self) -> bool {
        self.validate
    }

    /// Build using the configured strategy
    pub fn build_with<T>(&self, preorder: &[T], inorder: &[T]) -> Result<Tree<T>, TreeError>
    where
        T: Eq + Hash + Clone + Debug,
    {
        match (self.strategy, self.validate) {
            (Strategy::Recursive, true) => Self::build(preorder, inorder),
            (Strategy::Recursive, false) => Ok(Self::build_unchecked(preorder, inorder)),
            (Strategy::Iterative, validate) => {
                if !validate {
                    warn!("the iterative builder always validates its input, ignoring validate = false");
                }
                Self::build_iterative(preorder, inorder)
            }
        }
    }

    /// Build the unique tree whose traversals are `preorder` and `inorder`
    ///
    /// Both sequences must hold the same pairwise-distinct values and describe
    /// an actual tree; anything else is reported as a [`TreeError`] before a
    /// node is returned. Returns `None` when both sequences are empty.
    #[instrument(level = "debug", skip_all, fields(len = inorder.len()))]
    pub fn build<T>(preorder: &[T], inorder: &[T]) -> Result<Tree<T>, TreeError>
    where
        T: Eq + Hash + Clone + Debug,
    {
        let index = Self::validate(preorder, inorder)?;
        Self::dfs(preorder, &index, 0, 0..inorder.len())
    }

    /// Same result as [`TreeBuilder::build`] without recursing once per tree level
    ///
    /// Subproblems go on a heap work-list and nodes are linked by preorder
    /// position; the boxed tree is assembled afterwards from the deepest
    /// preorder position up, since every child comes after its parent.
    #[instrument(level = "debug", skip_all, fields(len = inorder.len()))]
    pub fn build_iterative<T>(preorder: &[T], inorder: &[T]) -> Result<Tree<T>, TreeError>
    where
        T: Eq + Hash + Clone + Debug,
    {
        let index = Self::validate(preorder, inorder)?;
        let n = inorder.len();

        let mut links: Vec<(Option<usize>, Option<usize>)> = vec![(None, None); n];
        let mut work = vec![Frame {
            root: 0,
            span: 0..n,
            parent: None,
        }];

        while let Some(Frame { root, span, parent }) = work.pop() {
            if span.is_empty() {
                continue;
            }

            let m = Self::split(preorder, &index, root, &span)?;

            match parent {
                Some((p, Side::Left)) => links[p].0 = Some(root),
                Some((p, Side::Right)) => links[p].1 = Some(root),
                None => {}
            }

            work.push(Frame {
                root: root + 1 + (m - span.start),
                span: m + 1..span.end,
                parent: Some((root, Side::Right)),
            });
            work.push(Frame {
                root: root + 1,
                span: span.start..m,
                parent: Some((root, Side::Left)),
            });
        }

        let mut built: Vec<Tree<T>> = (0..n).map(|_| None).collect();
        for k in (0..n).rev() {
            let (left, right) = links[k];
            let mut node = TreeNode::new(preorder[k].clone());
            node.left = left.and_then(|c| built[c].take());
            node.right = right.and_then(|c| built[c].take());
            built[k] = Some(Box::new(node));
        }

        Ok(built.into_iter().next().flatten())
    }

    /// Build without checking the inputs
    ///
    /// Callers guarantee equal lengths, pairwise-distinct values and that both
    /// sequences come from the same tree.
    ///
    /// # Panics
    ///
    /// Panics when a preorder value is missing from `inorder` or a preorder
    /// position runs past the end. Duplicates and traversals of different trees
    /// either hit one of those panics or return a malformed tree.
    pub fn build_unchecked<T>(preorder: &[T], inorder: &[T]) -> Tree<T>
    where
        T: Eq + Hash + Clone,
    {
        let index: IndexMap<'_, T> = inorder.iter().enumerate().map(|(i, v)| (v, i)).collect();
        Self::dfs_unchecked(preorder, &index, 0, 0..inorder.len())
    }

    fn dfs_unchecked<T>(
        preorder: &[T],
        index: &IndexMap<'_, T>,
        i: usize,
        span: Range<usize>,
    ) -> Tree<T>
    where
        T: Eq + Hash + Clone,
    {
        if span.is_empty() {
            return None;
        }

        let m = index[&preorder[i]];
        let left_len = m.saturating_sub(span.start);

        let mut root = TreeNode::new(preorder[i].clone());
        root.left = Self::dfs_unchecked(preorder, index, i + 1, span.start..m);
        root.right = Self::dfs_unchecked(preorder, index, i + 1 + left_len, m + 1..span.end);
        Some(Box::new(root))
    }

    fn dfs<T>(
        preorder: &[T],
        index: &IndexMap<'_, T>,
        i: usize,
        span: Range<usize>,
    ) -> Result<Tree<T>, TreeError>
    where
        T: Eq + Hash + Clone + Debug,
    {
        if span.is_empty() {
            return Ok(None);
        }

        let m = Self::split(preorder, index, i, &span)?;

        let mut root = TreeNode::new(preorder[i].clone());
        root.left = Self::dfs(preorder, index, i + 1, span.start..m)?;
        root.right = Self::dfs(preorder, index, i + 1 + (m - span.start), m + 1..span.end)?;
        Ok(Some(Box::new(root)))
    }

    /// Inorder position of the subtree root `preorder[i]`, which must lie in `span`
    fn split<T>(
        preorder: &[T],
        index: &IndexMap<'_, T>,
        i: usize,
        span: &Range<usize>,
    ) -> Result<usize, TreeError>
    where
        T: Eq + Hash + Debug,
    {
        let value = &preorder[i];
        let m = index[value];

        if !span.contains(&m) {
            return Err(TreeError::InconsistentTraversals {
                value: format!("{value:?}"),
                position: m,
                start: span.start,
                end: span.end,
            });
        }

        trace!(
            root = ?value,
            split = m,
            left = m - span.start,
            right = span.end - m - 1,
            "split subtree"
        );
        Ok(m)
    }

    /// Check the traversal pair and build the value to inorder position map
    fn validate<'a, T>(preorder: &[T], inorder: &'a [T]) -> Result<IndexMap<'a, T>, TreeError>
    where
        T: Eq + Hash + Debug,
    {
        if preorder.len() != inorder.len() {
            return Err(TreeError::LengthMismatch {
                preorder: preorder.len(),
                inorder: inorder.len(),
            });
        }

        let mut index = HashMap::with_capacity(inorder.len());
        for (i, value) in inorder.iter().enumerate() {
            if index.insert(value, i).is_some() {
                return Err(TreeError::DuplicateValue(format!("{value:?}")));
            }
        }

        let mut seen = HashSet::with_capacity(preorder.len());
        for value in preorder {
            if !index.contains_key(value) {
                return Err(TreeError::MissingValue(format!("{value:?}")));
            }
            if !seen.insert(value) {
                return Err(TreeError::DuplicateValue(format!("{value:?}")));
            }
        }

        Ok(index)
    }
}
