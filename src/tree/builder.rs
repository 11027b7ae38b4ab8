//! TreeBuilder - populates a root node from the filesystem

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use snafu::ResultExt;
use tracing::{debug, info, trace};

use crate::error::{DirectoryScanFailedSnafu, Result};

use super::node::Node;
use super::query::Tree;

/// Walks a directory and attaches every entry below it to the root node.
///
/// Expansion uses an explicit work stack rather than recursion, so deeply
/// nested hierarchies cannot exhaust the native stack.
#[derive(Debug, Clone, Default)]
pub struct TreeBuilder;

impl TreeBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Populate `root` and wrap it in a [`Tree`].
    ///
    /// Any scan or node construction failure aborts the build; `root` is
    /// consumed either way, so a partially populated graph never escapes.
    pub fn build(&self, root: Node) -> Result<Tree> {
        let expanded = self.populate(&root)?;
        let tree = Tree::new(root);

        let stats = tree.stats();
        info!(
            root = %tree.root().path().display(),
            expanded,
            directories = stats.directories,
            files = stats.files,
            "built directory tree"
        );

        Ok(tree)
    }

    /// Expand every directory reachable from `root`. Returns how many were expanded.
    fn populate(&self, root: &Node) -> Result<usize> {
        let mut stack = vec![root.clone()];
        let mut expanded = 0;

        while let Some(current) = stack.pop() {
            if !current.is_dir() {
                continue;
            }

            debug!(location = current.location(), "expanding directory");
            let entries = read_entries(current.path())?;

            let (mut dirs, mut files): (Vec<Node>, Vec<Node>) = entries
                .iter()
                .map(|entry| {
                    Node::new(entry, Some(&current)).inspect_err(|e| {
                        debug!(entry = %entry.display(), error = %e, "cannot attach entry");
                    })
                })
                .collect::<Result<Vec<_>>>()?
                .into_iter()
                .partition(Node::is_dir);

            dirs.sort_by(|a, b| a.name().as_bytes().cmp(b.name().as_bytes()));
            files.sort_by(|a, b| a.name().as_bytes().cmp(b.name().as_bytes()));

            for child in dirs.iter().chain(files.iter()) {
                trace!(location = child.location(), "attaching child");
                current.add_child(child.clone())?;
            }

            expanded += 1;
            stack.extend(dirs);
        }

        Ok(expanded)
    }
}

/// List the immediate entries of a directory. `read_dir` never yields `.` or `..`.
fn read_entries(path: &Path) -> Result<Vec<PathBuf>> {
    fs::read_dir(path)
        .context(DirectoryScanFailedSnafu { path })?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<io::Result<Vec<_>>>()
        .context(DirectoryScanFailedSnafu { path })
}
