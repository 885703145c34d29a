//! Case-file batch builds

mod common;

use std::fs;

use common::fixtures_dir;
use retree::cases::{find_case_files, Case};
use retree::cli::build_batch;
use retree::tree::TreeBuilder;

#[test]
fn test_fixture_cases_load() {
    let case = Case::load(&fixtures_dir().join("balanced.toml")).unwrap();

    assert_eq!(case.name, "leetcode_105");
    assert_eq!(case.preorder, vec![3, 9, 20, 15, 7]);
    assert_eq!(case.inorder, vec![9, 3, 15, 20, 7]);
}

#[test]
fn test_batch_writes_one_tree_per_valid_case() {
    let out = tempfile::tempdir().unwrap();

    let count = build_batch(&TreeBuilder::new(), &fixtures_dir(), out.path()).unwrap();

    // Both files under malformed/ are skipped
    assert_eq!(find_case_files(&fixtures_dir()).unwrap().len(), 5);
    assert_eq!(count, 3);

    let balanced = fs::read_to_string(out.path().join("leetcode_105.tree")).unwrap();
    assert_eq!(
        balanced,
        "3\n├── L: 9\n└── R: 20\n    ├── L: 15\n    └── R: 7\n"
    );

    let left = fs::read_to_string(out.path().join("left_skewed.tree")).unwrap();
    assert_eq!(left, "3\n└── L: 2\n    └── L: 1\n");

    let right = fs::read_to_string(out.path().join("right_skewed.tree")).unwrap();
    assert_eq!(right, "1\n└── R: 2\n    └── R: 3\n");

    assert!(!out.path().join("inconsistent.tree").exists());
}

#[test]
fn test_batch_on_empty_directory() {
    let cases = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();

    let count = build_batch(&TreeBuilder::new(), cases.path(), out.path()).unwrap();
    assert_eq!(count, 0);
}

#[test]
fn test_batch_on_missing_directory() {
    let out = tempfile::tempdir().unwrap();
    let missing = out.path().join("nope");

    assert!(build_batch(&TreeBuilder::new(), &missing, out.path()).is_err());
}

#[test]
fn test_batch_validates_even_when_builder_does_not() {
    let out = tempfile::tempdir().unwrap();
    let builder = TreeBuilder::new().with_validation(false);

    let count = build_batch(&builder, &fixtures_dir(), out.path()).unwrap();

    assert_eq!(count, 3);
    assert!(!out.path().join("malformed").join("inconsistent.tree").exists());
}

#[test]
fn test_batch_mirrors_subdirectories() {
    let cases = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    fs::create_dir_all(cases.path().join("sub")).unwrap();
    fs::write(cases.path().join("a.toml"), "preorder = [1]\ninorder = [1]\n").unwrap();
    fs::write(
        cases.path().join("sub").join("a.toml"),
        "preorder = [2, 1]\ninorder = [1, 2]\n",
    )
    .unwrap();

    let count = build_batch(&TreeBuilder::new(), cases.path(), out.path()).unwrap();

    assert_eq!(count, 2);
    assert_eq!(fs::read_to_string(out.path().join("a.tree")).unwrap(), "1\n");
    assert_eq!(
        fs::read_to_string(out.path().join("sub").join("a.tree")).unwrap(),
        "2\n└── L: 1\n"
    );
}

#[test]
fn test_batch_skips_cases_that_would_overwrite() {
    let cases = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    fs::write(
        cases.path().join("first.toml"),
        "name = \"same\"\npreorder = [1]\ninorder = [1]\n",
    )
    .unwrap();
    fs::write(
        cases.path().join("second.toml"),
        "name = \"same\"\npreorder = [2]\ninorder = [2]\n",
    )
    .unwrap();

    let count = build_batch(&TreeBuilder::new(), cases.path(), out.path()).unwrap();

    assert_eq!(count, 1);
    assert_eq!(fs::read_to_string(out.path().join("same.tree")).unwrap(), "1\n");
}

#[test]
fn test_batch_skips_names_with_path_separators() {
    let cases = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let out_dir = out.path().join("trees");
    fs::write(
        cases.path().join("escape.toml"),
        "name = \"../x\"\npreorder = [1]\ninorder = [1]\n",
    )
    .unwrap();

    let count = build_batch(&TreeBuilder::new(), cases.path(), &out_dir).unwrap();

    assert_eq!(count, 0);
    assert!(!out.path().join("x.tree").exists());
}
