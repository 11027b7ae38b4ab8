//! Tree formatting and display
//!
//! This module provides formatters for rendering a built `Tree`:
//! - Text tree with box-drawing connectors (buffered or colored to stdout)
//! - Indented plain text
//! - Markdown list
//! - HTML nested list
//! - JSON
//! - XML
//!
//! Every formatter reads only the public node API and walks children in
//! their stored order.

mod config;
mod html;
mod indented;
mod json;
mod markdown;
mod tree;
mod utils;
mod xml;

use crate::error::Result;
use crate::tree::Tree;

pub use config::RenderConfig;
pub use html::HtmlFormatter;
pub use indented::IndentedFormatter;
pub use json::{JsonFormatter, JsonNode};
pub use markdown::MarkdownFormatter;
pub use tree::TreeFormatter;
pub use utils::{escape_html, escape_xml};
pub use xml::XmlFormatter;

/// Renders a complete tree into a string.
pub trait TreeRenderer {
    fn render(&self, tree: &Tree) -> Result<String>;
}
