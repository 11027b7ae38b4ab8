//! Markdown output formatting
//!
//! This module provides `MarkdownFormatter` which outputs the tree as a
//! nested markdown list, suitable for documentation or LLM context.

use crate::error::Result;
use crate::tree::{Node, Tree};

use super::TreeRenderer;
use super::config::RenderConfig;
use super::utils::indent;

/// Markdown output formatter - the root directory as a bare heading line,
/// everything below it as nested list items.
pub struct MarkdownFormatter {
    config: RenderConfig,
}

impl MarkdownFormatter {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn format(&self, tree: &Tree) -> String {
        let mut output = String::new();
        self.format_node(tree.root(), 0, &mut output);
        output
    }

    fn format_node(&self, node: &Node, depth: usize, output: &mut String) {
        let is_root = node.is_root() && node.is_dir();

        if !is_root {
            output.push_str(&indent(depth, self.config.indent_size));
            output.push_str("- ");
        }
        output.push_str(node.name());
        output.push('\n');

        for child in node.children().unwrap_or_default() {
            self.format_node(&child, depth + 1, output);
        }
    }
}

impl TreeRenderer for MarkdownFormatter {
    fn render(&self, tree: &Tree) -> Result<String> {
        Ok(self.format(tree))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_support::sample_tree;

    #[test]
    fn test_markdown_list() {
        let (_dir, tree) = sample_tree();
        let output = MarkdownFormatter::new(RenderConfig::default()).format(&tree);
        let lines: Vec<&str> = output.lines().collect();

        // Root is a bare line without a list marker
        assert_eq!(lines[0], tree.root().name());
        assert!(lines.contains(&"  - level1a"));
        assert!(lines.contains(&"    - level2a"));
        assert!(lines.contains(&"      - level3a"));
        assert!(lines.contains(&"  - level1b"));
        assert!(lines.contains(&"    - file.txt"));
        assert_eq!(lines.len(), 8);
    }

    #[test]
    fn test_file_root_is_a_list_item() {
        let dir = tempfile::TempDir::new().unwrap();
        let file = dir.path().join("notes.md");
        std::fs::write(&file, "").unwrap();
        let tree = crate::tree::TreeBuilder::new()
            .build(Node::new(&file, None).unwrap())
            .unwrap();

        let output = MarkdownFormatter::new(RenderConfig::default()).format(&tree);
        assert_eq!(output, "- notes.md\n");
    }
}
