//! retree.toml discovery and configuration

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::tree::{Strategy, TreeBuilder};

pub const CONFIG_FILE: &str = "retree.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read retree.toml: {0}")]
    ConfigReadError(#[from] std::io::Error),

    #[error("Failed to parse retree.toml: {0}")]
    ConfigParseError(#[from] toml::de::Error),
}

#[derive(Debug, Deserialize, Default)]
struct ConfigFile {
    build: Option<BuildSection>,
}

#[derive(Debug, Deserialize, Default)]
struct BuildSection {
    strategy: Option<Strategy>,
    validate: Option<bool>,
    output_dir: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Directory holding the config file, if one was found
    pub root: Option<PathBuf>,
    pub strategy: Strategy,
    pub validate: bool,
    pub output_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: None,
            strategy: Strategy::default(),
            validate: true,
            output_dir: PathBuf::from("trees"),
        }
    }
}

impl Config {
    /// Search the current directory and its parents for retree.toml
    ///
    /// Falls back to defaults when no file exists anywhere up the tree.
    pub fn discover() -> Result<Self, ConfigError> {
        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    pub fn discover_from(start: &Path) -> Result<Self, ConfigError> {
        match Self::find_config_root(start) {
            Some(root) => Self::load(&root.join(CONFIG_FILE)),
            None => Ok(Self::default()),
        }
    }

    /// Parse one config file; relative paths resolve against its directory
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let file: ConfigFile = toml::from_str(&content)?;
        let root = path.parent().map(Path::to_path_buf);

        let build = file.build.unwrap_or_default();
        let defaults = Self::default();

        let output_dir = build
            .output_dir
            .map(PathBuf::from)
            .unwrap_or(defaults.output_dir);
        let output_dir = match &root {
            Some(root) if output_dir.is_relative() => root.join(output_dir),
            _ => output_dir,
        };

        Ok(Self {
            root,
            strategy: build.strategy.unwrap_or(defaults.strategy),
            validate: build.validate.unwrap_or(defaults.validate),
            output_dir,
        })
    }

    fn find_config_root(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();

        loop {
            if current.join(CONFIG_FILE).exists() {
                return Some(current);
            }

            if !current.pop() {
                return None;
            }
        }
    }

    /// A builder set up the way this config asks for
    pub fn builder(&self) -> TreeBuilder {
        TreeBuilder::new()
            .with_strategy(self.strategy)
            .with_validation(self.validate)
    }
}
