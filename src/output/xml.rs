//! XML output
//!
//! The document element is a bare `<directory>` wrapping the root entry, so a
//! tree always serializes to a single well-formed document even when the
//! root is a file.

use crate::error::Result;
use crate::tree::{Node, Tree};

use super::TreeRenderer;
use super::utils::escape_xml;

const XML_DECLARATION: &str = "<?xml version=\"1.0\"?>\n";

#[derive(Default)]
pub struct XmlFormatter;

impl XmlFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn format(&self, tree: &Tree) -> String {
        let mut output = String::from(XML_DECLARATION);
        output.push_str("<directory>");
        self.format_node(tree.root(), &mut output);
        output.push_str("</directory>\n");
        output
    }

    fn format_node(&self, node: &Node, output: &mut String) {
        let attributes = format!(
            "location=\"{}\" path=\"{}\"",
            escape_xml(node.location()),
            escape_xml(&node.path().to_string_lossy())
        );

        match node.children() {
            Some(children) => {
                output.push_str(&format!("<directory {attributes}>"));
                for child in &children {
                    self.format_node(child, output);
                }
                output.push_str("</directory>");
            }
            None => output.push_str(&format!("<file {attributes}/>")),
        }
    }
}

impl TreeRenderer for XmlFormatter {
    fn render(&self, tree: &Tree) -> Result<String> {
        Ok(self.format(tree))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_support::sample_tree;

    #[test]
    fn test_xml_document_shape() {
        let (_dir, tree) = sample_tree();
        let xml = XmlFormatter::new().format(&tree);
        let root = tree.root();

        assert!(xml.starts_with("<?xml version=\"1.0\"?>\n<directory><directory "));
        assert!(xml.ends_with("</directory></directory>\n"));
        assert!(xml.contains(&format!(
            "<directory location=\"{}\" path=\"{}\">",
            root.location(),
            root.path().display()
        )));
    }

    #[test]
    fn test_files_are_self_closing() {
        let (_dir, tree) = sample_tree();
        let xml = XmlFormatter::new().format(&tree);
        let file = tree.find(&format!("{}/level1b/file.txt", tree.root().location())).unwrap();

        assert!(xml.contains(&format!(
            "<file location=\"{}\" path=\"{}\"/>",
            file.location(),
            file.path().display()
        )));
    }

    #[test]
    fn test_elements_balance() {
        let (_dir, tree) = sample_tree();
        let xml = XmlFormatter::new().format(&tree);

        let opened = xml.matches("<directory").count();
        let closed = xml.matches("</directory>").count();
        assert_eq!(opened, closed);
        assert_eq!(opened, 7);
        assert_eq!(xml.matches("<file ").count(), 2);
    }

    #[test]
    fn test_attribute_values_escaped() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(dir.path().join("say \"hi\" & bye"), "").unwrap();
        let tree = crate::tree::TreeBuilder::new()
            .build(Node::new(dir.path(), None).unwrap())
            .unwrap();

        let xml = XmlFormatter::new().format(&tree);
        assert!(xml.contains("say &quot;hi&quot; &amp; bye\""));
    }
}
