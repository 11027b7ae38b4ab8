//! Output configuration types

const DEFAULT_INDENT_SIZE: usize = 2;

/// Configuration shared by every renderer.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Colour directory names when printing the text tree to a terminal.
    pub use_color: bool,
    /// Spaces per depth level for the indented and Markdown renderers.
    pub indent_size: usize,
    /// Append the "N directories, M files" line to the text tree.
    pub summary: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            use_color: true,
            indent_size: DEFAULT_INDENT_SIZE,
            summary: true,
        }
    }
}
