//! Path-to-string rendering: build a tree for a directory and format it

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use snafu::ensure;
use tracing::debug;

use crate::error::{InvalidFormatSnafu, NotADirectoryRootSnafu, Result, TreeError};
use crate::output::{
    HtmlFormatter, IndentedFormatter, JsonFormatter, MarkdownFormatter, RenderConfig,
    TreeFormatter, TreeRenderer, XmlFormatter,
};
use crate::tree::{Node, Tree, TreeBuilder};

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    TextTree,
    TextIndented,
    MarkdownList,
    HtmlList,
    Json,
    Xml,
}

impl Format {
    pub const ALL: [Format; 6] = [
        Format::TextTree,
        Format::TextIndented,
        Format::MarkdownList,
        Format::HtmlList,
        Format::Json,
        Format::Xml,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Format::TextTree => "tree",
            Format::TextIndented => "indented",
            Format::MarkdownList => "markdown",
            Format::HtmlList => "html",
            Format::Json => "json",
            Format::Xml => "xml",
        }
    }

    /// Renderer for this format.
    pub fn renderer(self, config: RenderConfig) -> Box<dyn TreeRenderer> {
        match self {
            Format::TextTree => Box::new(TreeFormatter::new(config)),
            Format::TextIndented => Box::new(IndentedFormatter::new(config)),
            Format::MarkdownList => Box::new(MarkdownFormatter::new(config)),
            Format::HtmlList => Box::new(HtmlFormatter::new()),
            Format::Json => Box::new(JsonFormatter::new()),
            Format::Xml => Box::new(XmlFormatter::new()),
        }
    }

    fn allowed_names() -> String {
        Format::ALL.map(Format::name).join(", ")
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = TreeError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        if let Ok(code) = wanted.parse::<u8>() {
            return Format::try_from(code);
        }

        Format::ALL
            .into_iter()
            .find(|format| format.name() == wanted)
            .ok_or_else(|| {
                InvalidFormatSnafu {
                    format: s,
                    allowed: Format::allowed_names(),
                }
                .build()
            })
    }
}

/// Numeric codes 1-4 select the four text formats.
impl TryFrom<u8> for Format {
    type Error = TreeError;

    fn try_from(code: u8) -> Result<Self> {
        match code {
            1 => Ok(Format::TextTree),
            2 => Ok(Format::TextIndented),
            3 => Ok(Format::MarkdownList),
            4 => Ok(Format::HtmlList),
            _ => InvalidFormatSnafu {
                format: code.to_string(),
                allowed: "1 (TEXT_TREE), 2 (TEXT_INDENTED), 3 (MARKDOWN_LIST), 4 (HTML_LIST)",
            }
            .fail(),
        }
    }
}

/// Builds and renders directory trees in one call.
#[derive(Debug, Clone, Default)]
pub struct Viewer {
    config: RenderConfig,
}

impl Viewer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Build the tree rooted at a directory.
    pub fn build(&self, path: &Path) -> Result<Tree> {
        ensure!(path.is_dir(), NotADirectoryRootSnafu { path });

        debug!(path = %path.display(), "building tree");
        TreeBuilder::new().build(Node::new(path, None)?)
    }

    pub fn render(&self, path: &Path, format: Format) -> Result<String> {
        let tree = self.build(path)?;
        format.renderer(self.config.clone()).render(&tree)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn project() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("src")).unwrap();
        fs::write(dir.path().join("src/main.rs"), "fn main() {}").unwrap();
        fs::write(dir.path().join("Cargo.toml"), "").unwrap();
        dir
    }

    #[test]
    fn test_format_from_name() {
        assert_eq!("tree".parse::<Format>().unwrap(), Format::TextTree);
        assert_eq!("Markdown".parse::<Format>().unwrap(), Format::MarkdownList);
        assert_eq!(" json ".parse::<Format>().unwrap(), Format::Json);
        for format in Format::ALL {
            assert_eq!(format.to_string().parse::<Format>().unwrap(), format);
        }
    }

    #[test]
    fn test_format_from_numeric_code() {
        assert_eq!(Format::try_from(1u8).unwrap(), Format::TextTree);
        assert_eq!("4".parse::<Format>().unwrap(), Format::HtmlList);
    }

    #[test]
    fn test_invalid_format() {
        let err = "yaml".parse::<Format>().unwrap_err();
        assert!(matches!(err, TreeError::InvalidFormat { .. }), "got {err:?}");
        assert!(err.to_string().contains("tree, indented, markdown, html, json, xml"));

        let err = Format::try_from(9u8).unwrap_err();
        assert!(err.to_string().contains("Invalid format: 9"));
    }

    #[test]
    fn test_render_text_tree() {
        let dir = project();
        let viewer = Viewer::new(RenderConfig {
            use_color: false,
            summary: false,
            ..Default::default()
        });
        let output = viewer.render(dir.path(), Format::TextTree).unwrap();

        assert!(output.contains("├── src\n"));
        assert!(output.contains("│   └── main.rs\n"));
        assert!(output.contains("└── Cargo.toml\n"));
    }

    #[test]
    fn test_render_rejects_file() {
        let dir = project();
        let err = Viewer::default()
            .render(&dir.path().join("Cargo.toml"), Format::TextTree)
            .unwrap_err();
        assert!(
            matches!(err, TreeError::NotADirectoryRoot { .. }),
            "got {err:?}"
        );
    }

    #[test]
    fn test_trailing_separator_accepted() {
        let dir = project();
        let with_slash = format!("{}/", dir.path().display());
        let tree = Viewer::default().build(Path::new(&with_slash)).unwrap();
        assert_eq!(tree.len(), 4);
    }
}
