//! HTML nested list output

use crate::error::Result;
use crate::tree::{Node, Tree};

use super::TreeRenderer;
use super::utils::escape_html;

/// Renders the tree as nested `<ul>`/`<li>` elements.
///
/// Each item carries `data-location` (portable identity) and `data-path`
/// (host path) attributes.
#[derive(Default)]
pub struct HtmlFormatter;

impl HtmlFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn format(&self, tree: &Tree) -> String {
        let mut output = String::from("<ul>");
        self.format_node(tree.root(), &mut output);
        output.push_str("</ul>");
        output
    }

    fn format_node(&self, node: &Node, output: &mut String) {
        output.push_str(&format!(
            "<li data-location=\"{}\" data-path=\"{}\">{}",
            escape_html(node.location()),
            escape_html(&node.path().to_string_lossy()),
            escape_html(node.name())
        ));

        if let Some(children) = node.children() {
            output.push_str("<ul>");
            for child in &children {
                self.format_node(child, output);
            }
            output.push_str("</ul>");
        }

        output.push_str("</li>");
    }
}

impl TreeRenderer for HtmlFormatter {
    fn render(&self, tree: &Tree) -> Result<String> {
        Ok(self.format(tree))
    }
}
