//! Error type shared by node construction, tree building and rendering

use std::io;
use std::path::PathBuf;

use snafu::Snafu;

/// Every failure surfaced by the crate.
///
/// Construction and build errors are reported where they happen; a build that
/// returns an error leaves no usable tree behind.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum TreeError {
    #[snafu(display("Root node cannot be a symbolic link: {}", path.display()))]
    InvalidRoot { path: PathBuf },

    #[snafu(display("Path does not exist: {}", path.display()))]
    NotFound { path: PathBuf },

    #[snafu(display("Path is not readable: {}", path.display()))]
    NotReadable { path: PathBuf },

    #[snafu(display("Cannot resolve real path: {}", path.display()))]
    UnresolvablePath { path: PathBuf, source: io::Error },

    #[snafu(display(
        "Node is not a descendant of its parent: {} is outside {}",
        path.display(),
        parent.display()
    ))]
    NotDescendant { path: PathBuf, parent: PathBuf },

    #[snafu(display("Cannot add child to non-directory node: {node}"))]
    NotADirectory { node: String },

    #[snafu(display("Failed to scan directory: {}", path.display()))]
    DirectoryScanFailed { path: PathBuf, source: io::Error },

    #[snafu(display("Provided path is not a directory: {}", path.display()))]
    NotADirectoryRoot { path: PathBuf },

    #[snafu(display("Invalid format: {format}. Allowed values: {allowed}"))]
    InvalidFormat { format: String, allowed: String },

    #[snafu(display("Failed to encode directory tree to JSON"))]
    Serialize { source: serde_json::Error },

    #[snafu(display("Failed to write output"))]
    Write { source: io::Error },
}

pub type Result<T, E = TreeError> = std::result::Result<T, E>;
