//! Read-only queries over a built tree

use std::collections::VecDeque;

use super::node::{Node, join_location};

/// Directory and file counts below the root.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeStats {
    pub directories: usize,
    pub files: usize,
}

/// A fully built snapshot, owning its root node.
///
/// Queries only follow links already in the graph and never touch the
/// filesystem. The graph must not be mutated once wrapped.
#[derive(Debug, Clone)]
pub struct Tree {
    root: Node,
}

impl Tree {
    pub fn new(root: Node) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Ancestors of `node`, nearest parent first and root last.
    pub fn ancestors(&self, node: &Node) -> Vec<Node> {
        std::iter::successors(node.parent(), Node::parent).collect()
    }

    /// The other children of `node`'s parent, in stored order.
    pub fn siblings(&self, node: &Node) -> Vec<Node> {
        let Some(parent) = node.parent() else {
            return Vec::new();
        };

        parent
            .children()
            .unwrap_or_default()
            .into_iter()
            .filter(|sibling| sibling.location() != node.location())
            .collect()
    }

    /// Every node below `node` in breadth-first level order, excluding `node`.
    pub fn descendants(&self, node: &Node) -> Vec<Node> {
        let mut descendants = Vec::new();
        let mut queue = VecDeque::from([node.clone()]);

        while let Some(current) = queue.pop_front() {
            for child in current.children().unwrap_or_default() {
                descendants.push(child.clone());
                queue.push_back(child);
            }
        }

        descendants
    }

    /// Resolve a logical location such as `project/src/main.rs`.
    pub fn find(&self, location: &str) -> Option<Node> {
        let mut current = self.root.clone();

        loop {
            if current.location() == location {
                return Some(current);
            }

            let rest = location.strip_prefix(current.location())?;
            let rest = rest.strip_prefix('/').unwrap_or(rest);
            let segment = rest.split('/').next().filter(|s| !s.is_empty())?;
            current = current.child(&join_location(current.location(), segment))?;
        }
    }

    /// Total number of nodes, root included.
    pub fn len(&self) -> usize {
        1 + self.descendants(&self.root).len()
    }

    /// Always false: a tree has at least its root.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn stats(&self) -> TreeStats {
        self.descendants(&self.root)
            .iter()
            .fold(TreeStats::default(), |mut stats, node| {
                if node.is_dir() {
                    stats.directories += 1;
                } else {
                    stats.files += 1;
                }
                stats
            })
    }
}
