//! Directory tree model
//!
//! A snapshot is built in three steps:
//!
//! - `Node`: one filesystem entry, created from a path and checked against its parent
//! - `TreeBuilder`: walks the filesystem with an explicit stack and attaches children
//!   (directories first, each group sorted by name)
//! - `Tree`: owns the built root and answers ancestor/sibling/descendant queries

mod builder;
mod node;
mod query;

pub use builder::TreeBuilder;
pub use node::Node;
pub use query::{Tree, TreeStats};
