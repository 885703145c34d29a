//! Text tree output rendering

use std::fmt::Display;
use std::fs;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

use crate::tree::{Tree, TreeNode};

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Render a tree and write it to a file
pub fn render_tree<T: Display>(tree: &Tree<T>, output_path: &Path) -> Result<(), OutputError> {
    let content = render_to_string(tree);

    // Create parent directories if needed
    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut file = fs::File::create(output_path)?;
    file.write_all(content.as_bytes())?;

    Ok(())
}

/// Render a tree to a string, one node per line, children tagged `L:` / `R:`
pub fn render_to_string<T: Display>(tree: &Tree<T>) -> String {
    let Some(root) = tree.as_deref() else {
        return "(empty)\n".to_string();
    };

    let mut output = format!("{}\n", root.val);

    // (node, side tag, prefix, is last sibling), popped in display order
    let mut stack: Vec<(&TreeNode<T>, &str, String, bool)> = Vec::new();
    push_children(&mut stack, root, "");

    while let Some((node, side, prefix, is_last)) = stack.pop() {
        let connector = if is_last { "└── " } else { "├── " };
        output.push_str(&prefix);
        output.push_str(connector);
        output.push_str(side);
        output.push_str(&node.val.to_string());
        output.push('\n');

        let child_prefix = format!("{}{}", prefix, if is_last { "    " } else { "│   " });
        push_children(&mut stack, node, &child_prefix);
    }

    output
}

fn push_children<'a, T>(
    stack: &mut Vec<(&'a TreeNode<T>, &'static str, String, bool)>,
    node: &'a TreeNode<T>,
    prefix: &str,
) {
    let has_right = node.right.is_some();

    if let Some(right) = node.right.as_deref() {
        stack.push((right, "R: ", prefix.to_string(), true));
    }
    if let Some(left) = node.left.as_deref() {
        stack.push((left, "L: ", prefix.to_string(), !has_right));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_tree_rendering() {
        let tree = Some(Box::new(
            TreeNode::new(3)
                .with_left(TreeNode::new(9))
                .with_right(
                    TreeNode::new(20)
                        .with_left(TreeNode::new(15))
                        .with_right(TreeNode::new(7)),
                ),
        ));

        let output = render_to_string(&tree);
        let expected = "\
3
├── L: 9
└── R: 20
    ├── L: 15
    └── R: 7
";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_single_child_is_last() {
        let tree = Some(Box::new(
            TreeNode::new(1).with_left(TreeNode::new(2).with_right(TreeNode::new(3))),
        ));

        let expected = "\
1
└── L: 2
    └── R: 3
";
        assert_eq!(render_to_string(&tree), expected);
    }

    #[test]
    fn test_empty_tree_rendering() {
        let tree: Tree<i32> = None;
        assert_eq!(render_to_string(&tree), "(empty)\n");
    }

    #[test]
    fn test_render_tree_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("one.tree");
        let tree = Some(TreeNode::leaf(5));

        render_tree(&tree, &path).unwrap();

        assert_eq!(fs::read_to_string(path).unwrap(), "5\n");
    }
}
