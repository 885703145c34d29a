//! Traversal case files
//!
//! A case file is a TOML document holding one traversal pair:
//!
//! ```toml
//! name = "balanced"
//! preorder = [3, 9, 20, 15, 7]
//! inorder = [9, 3, 15, 20, 7]
//! ```
//!
//! `name` is optional and defaults to the file stem.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum CaseError {
    #[error("Failed to read case file {path:?}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse case file {path:?}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Case directory {0:?} does not exist")]
    DirectoryNotFound(PathBuf),

    #[error("Case file {path:?} has invalid name '{name}': names cannot be empty or contain path separators")]
    InvalidName { path: PathBuf, name: String },
}

#[derive(Debug, Deserialize)]
struct CaseFile {
    name: Option<String>,
    preorder: Vec<i64>,
    inorder: Vec<i64>,
}

/// A named preorder/inorder pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Case {
    pub name: String,
    pub preorder: Vec<i64>,
    pub inorder: Vec<i64>,
}

impl Case {
    pub fn load(path: &Path) -> Result<Self, CaseError> {
        let content = fs::read_to_string(path).map_err(|source| CaseError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        let file: CaseFile = toml::from_str(&content).map_err(|source| CaseError::ParseError {
            path: path.to_path_buf(),
            source,
        })?;

        let name = file.name.unwrap_or_else(|| {
            path.file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| "tree".to_string())
        });

        if !is_valid_name(&name) {
            return Err(CaseError::InvalidName {
                path: path.to_path_buf(),
                name,
            });
        }

        Ok(Self {
            name,
            preorder: file.preorder,
            inorder: file.inorder,
        })
    }
}

/// Names become output file stems, so they must stay a single path component
fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains(['/', '\\'])
}

/// Find all `.toml` case files under `dir`, sorted by path
pub fn find_case_files(dir: &Path) -> Result<Vec<PathBuf>, CaseError> {
    if !dir.is_dir() {
        return Err(CaseError::DirectoryNotFound(dir.to_path_buf()));
    }

    let mut cases = Vec::new();

    for entry in WalkDir::new(dir).into_iter().filter_map(|e| e.ok()) {
        if entry.file_type().is_file() {
            if let Some(ext) = entry.path().extension() {
                if ext == "toml" {
                    cases.push(entry.path().to_path_buf());
                }
            }
        }
    }

    cases.sort();
    Ok(cases)
}
