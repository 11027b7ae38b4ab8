//! JSON output formatting

use serde::Serialize;
use snafu::ResultExt;

use crate::error::{Result, SerializeSnafu};
use crate::tree::{Node, Tree};

use super::TreeRenderer;

/// Serializable view of a node.
///
/// `children` is present (possibly empty) for directories and omitted for files.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonNode {
    pub path: String,
    pub location: String,
    pub parent_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<JsonNode>>,
}

impl From<&Node> for JsonNode {
    fn from(node: &Node) -> Self {
        Self {
            path: node.path().to_string_lossy().to_string(),
            location: node.location().to_string(),
            parent_location: node.parent().map(|p| p.location().to_string()),
            children: node
                .children()
                .map(|children| children.iter().map(JsonNode::from).collect()),
        }
    }
}

/// Pretty-printed JSON renderer.
#[derive(Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn to_value(&self, tree: &Tree) -> JsonNode {
        JsonNode::from(tree.root())
    }
}

impl TreeRenderer for JsonFormatter {
    fn render(&self, tree: &Tree) -> Result<String> {
        serde_json::to_string_pretty(&self.to_value(tree)).context(SerializeSnafu)
    }
}
