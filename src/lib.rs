//! dirtree - ordered in-memory snapshots of directory hierarchies
//!
//! Build a [`Tree`] from a root [`Node`] with [`TreeBuilder`], query it for
//! ancestors, siblings and descendants, then render it with one of the
//! formatters in [`output`] or in a single call through [`Viewer`].

pub mod error;
pub mod output;
pub mod tree;
pub mod viewer;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{Result, TreeError};
pub use output::{
    HtmlFormatter, IndentedFormatter, JsonFormatter, MarkdownFormatter, RenderConfig,
    TreeFormatter, TreeRenderer, XmlFormatter,
};
pub use tree::{Node, Tree, TreeBuilder, TreeStats};
pub use viewer::{Format, Viewer};
