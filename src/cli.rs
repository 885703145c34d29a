use clap::{Parser, Subcommand};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::cases::{find_case_files, Case};
use crate::config::Config;
use crate::output::{render_to_string, render_tree};
use crate::tree::{traversal, Strategy, Tree, TreeBuilder};

/// retree - rebuild binary trees from preorder and inorder traversals
#[derive(Parser)]
#[command(name = "retree")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build one tree from traversals given on the command line
    Build {
        /// Preorder traversal, comma separated (e.g. 3,9,20,15,7)
        #[arg(long, value_delimiter = ',', num_args = 0.., required = true, allow_negative_numbers = true)]
        preorder: Vec<i64>,

        /// Inorder traversal, comma separated (e.g. 9,3,15,20,7)
        #[arg(long, value_delimiter = ',', num_args = 0.., required = true, allow_negative_numbers = true)]
        inorder: Vec<i64>,

        /// Use the explicit work-list builder instead of recursion
        #[arg(long)]
        iterative: bool,

        /// Trust the input and skip validation
        #[arg(long)]
        no_validate: bool,

        /// Write the rendered tree to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Build a tree for every .toml case file under a directory
    Batch {
        /// Directory holding case files
        #[arg(value_name = "DIR")]
        dir: PathBuf,

        /// Output directory (default: output_dir from retree.toml, else trees/)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

impl Cli {
    pub fn run(self) -> Result<(), Box<dyn std::error::Error>> {
        let config = Config::discover()?;
        match &config.root {
            Some(root) => info!("Using config from {:?}", root),
            None => debug!("No retree.toml found, using defaults"),
        }

        match self.command {
            Commands::Build {
                preorder,
                inorder,
                iterative,
                no_validate,
                output,
            } => {
                let builder = resolve_builder(&config, iterative, no_validate);
                build_one(&builder, &preorder, &inorder, output.as_deref())
            }
            Commands::Batch { dir, output } => {
                let output_dir = output.unwrap_or_else(|| config.output_dir.clone());
                let count = build_batch(&config.builder(), &dir, &output_dir)?;
                println!("Generated {} trees total", count);
                Ok(())
            }
        }
    }
}

/// Apply command-line overrides on top of the configured builder
fn resolve_builder(config: &Config, iterative: bool, no_validate: bool) -> TreeBuilder {
    let mut builder = config.builder();
    if iterative {
        builder = builder.with_strategy(Strategy::Iterative);
    }
    if no_validate {
        builder = builder.with_validation(false);
    }
    builder
}

fn build_one(
    builder: &TreeBuilder,
    preorder: &[i64],
    inorder: &[i64],
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    info!(
        "Building tree from {} values ({:?})",
        inorder.len(),
        builder.strategy()
    );
    let tree = builder.build_with(preorder, inorder)?;

    match output {
        Some(path) => {
            render_tree(&tree, path)?;
            println!("Generated tree at: {:?}", path);
        }
        None => {
            print!("{}", render_to_string(&tree));
            print!("{}", describe(&tree));
        }
    }

    Ok(())
}

/// Traversal summary printed under the rendered tree
fn describe(tree: &Tree<i64>) -> String {
    format!(
        "\npreorder:    {:?}\ninorder:     {:?}\npostorder:   {:?}\nlevel order: {:?}\nsize: {}, height: {}\n",
        traversal::preorder(tree),
        traversal::inorder(tree),
        traversal::postorder(tree),
        traversal::level_order(tree),
        traversal::size(tree),
        traversal::height(tree),
    )
}

/// Build every case under `dir`, skipping the ones that fail
///
/// Case files are always validated, whatever the builder's setting: one bad
/// file must not take the batch down. Each tree lands at the case's path
/// relative to `dir`, mirrored under `output_dir`. Returns the number of
/// trees written.
pub fn build_batch(
    builder: &TreeBuilder,
    dir: &Path,
    output_dir: &Path,
) -> Result<usize, Box<dyn std::error::Error>> {
    let case_files = find_case_files(dir)?;
    if case_files.is_empty() {
        println!("No case files found in {:?}", dir);
        return Ok(0);
    }

    if !builder.validates() {
        debug!("Batch builds always validate case files");
    }
    let builder = builder.with_validation(true);

    println!("Found {} case files", case_files.len());
    let mut written: HashSet<PathBuf> = HashSet::new();

    for file_path in case_files {
        let case = match Case::load(&file_path) {
            Ok(c) => c,
            Err(e) => {
                warn!("Skipping {:?}: {}", file_path, e);
                eprintln!("Warning: {}", e);
                continue;
            }
        };

        let tree = match builder.build_with(&case.preorder, &case.inorder) {
            Ok(t) => t,
            Err(e) => {
                warn!("Skipping case {}: {}", case.name, e);
                eprintln!("Warning: case '{}' in {:?}: {}", case.name, file_path, e);
                continue;
            }
        };

        let output_path = output_path_for(dir, &file_path, output_dir, &case.name);
        if written.contains(&output_path) {
            warn!("Skipping case {}: {:?} already written", case.name, output_path);
            eprintln!(
                "Warning: case '{}' in {:?} would overwrite {:?}, skipped",
                case.name, file_path, output_path
            );
            continue;
        }

        render_tree(&tree, &output_path)?;

        println!("  -> {:?}", output_path);
        written.insert(output_path);
    }

    Ok(written.len())
}

/// `<output_dir>/<case dir relative to dir>/<name>.tree`
fn output_path_for(dir: &Path, file_path: &Path, output_dir: &Path, name: &str) -> PathBuf {
    let sub_dir = file_path
        .strip_prefix(dir)
        .ok()
        .and_then(Path::parent)
        .unwrap_or_else(|| Path::new(""));

    output_dir.join(sub_dir).join(format!("{}.tree", name))
}
