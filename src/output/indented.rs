//! Indented plain-text output

use crate::error::Result;
use crate::tree::{Node, Tree};

use super::TreeRenderer;
use super::config::RenderConfig;
use super::utils::indent;

/// One entry per line, indented by depth.
pub struct IndentedFormatter {
    config: RenderConfig,
}

impl IndentedFormatter {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn format(&self, tree: &Tree) -> String {
        let mut output = String::new();
        self.format_node(tree.root(), 0, &mut output);
        output
    }

    fn format_node(&self, node: &Node, depth: usize, output: &mut String) {
        output.push_str(&indent(depth, self.config.indent_size));
        output.push_str(node.name());
        output.push('\n');

        for child in node.children().unwrap_or_default() {
            self.format_node(&child, depth + 1, output);
        }
    }
}

impl TreeRenderer for IndentedFormatter {
    fn render(&self, tree: &Tree) -> Result<String> {
        Ok(self.format(tree))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_support::sample_tree;

    #[test]
    fn test_default_indent() {
        let (_dir, tree) = sample_tree();
        let output = IndentedFormatter::new(RenderConfig::default()).format(&tree);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], tree.root().name());
        assert_eq!(
            &lines[1..],
            [
                "  level1a",
                "    level2a",
                "      level3a",
                "    level2b",
                "  level1b",
                "    file.txt",
                "  readme.md",
            ]
        );
    }

    #[test]
    fn test_custom_indent_size() {
        let (_dir, tree) = sample_tree();
        let config = RenderConfig {
            indent_size: 4,
            ..Default::default()
        };
        let output = IndentedFormatter::new(config).format(&tree);

        assert!(output.contains("\n    level1a\n"));
        assert!(output.contains("\n        level2a\n"));
    }
}
