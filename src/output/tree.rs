//! Text tree formatter
//!
//! This module provides `TreeFormatter` which draws a built `Tree` with
//! box-drawing connectors, either into a string or to stdout with colors.

use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::error::Result;
use crate::tree::{Node, Tree, TreeStats};

use super::TreeRenderer;
use super::config::RenderConfig;
use super::utils::{child_prefix, connector, summary_line};

/// Formatter for `tree`-style output.
pub struct TreeFormatter {
    config: RenderConfig,
}

impl TreeFormatter {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn format(&self, tree: &Tree) -> String {
        let mut output = String::new();
        let stats = self.format_node(tree.root(), &mut output, "", true);
        if self.config.summary {
            output.push('\n');
            output.push_str(&summary_line(stats));
            output.push('\n');
        }
        output
    }

    pub fn print(&self, tree: &Tree) -> io::Result<()> {
        let choice = if self.config.use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);
        let stats = self.print_node(tree.root(), &mut stdout, "", true)?;
        if self.config.summary {
            writeln!(stdout)?;
            writeln!(stdout, "{}", summary_line(stats))?;
        }
        Ok(())
    }

    fn format_node(
        &self,
        node: &Node,
        output: &mut String,
        prefix: &str,
        is_last: bool,
    ) -> TreeStats {
        let is_root = node.is_root() && node.is_dir();

        if !is_root {
            output.push_str(prefix);
            output.push_str(connector(is_last));
        }
        output.push_str(node.name());
        output.push('\n');

        let Some(children) = node.children() else {
            return TreeStats::default();
        };

        let new_prefix = if is_root {
            String::new()
        } else {
            child_prefix(prefix, is_last)
        };

        let mut stats = TreeStats::default();
        for (i, child) in children.iter().enumerate() {
            let child_is_last = i == children.len() - 1;
            let nested = self.format_node(child, output, &new_prefix, child_is_last);
            stats.directories += nested.directories;
            stats.files += nested.files;
            if child.is_dir() {
                stats.directories += 1;
            } else {
                stats.files += 1;
            }
        }

        stats
    }

    fn print_node(
        &self,
        node: &Node,
        stdout: &mut StandardStream,
        prefix: &str,
        is_last: bool,
    ) -> io::Result<TreeStats> {
        let is_root = node.is_root() && node.is_dir();

        if !is_root {
            write!(stdout, "{}{}", prefix, connector(is_last))?;
        }

        let Some(children) = node.children() else {
            writeln!(stdout, "{}", node.name())?;
            return Ok(TreeStats::default());
        };

        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
        write!(stdout, "{}", node.name())?;
        stdout.reset()?;
        writeln!(stdout)?;

        let new_prefix = if is_root {
            String::new()
        } else {
            child_prefix(prefix, is_last)
        };

        let mut stats = TreeStats::default();
        for (i, child) in children.iter().enumerate() {
            let child_is_last = i == children.len() - 1;
            let nested = self.print_node(child, stdout, &new_prefix, child_is_last)?;
            stats.directories += nested.directories;
            stats.files += nested.files;
            if child.is_dir() {
                stats.directories += 1;
            } else {
                stats.files += 1;
            }
        }

        Ok(stats)
    }
}

impl TreeRenderer for TreeFormatter {
    fn render(&self, tree: &Tree) -> Result<String> {
        Ok(self.format(tree))
    }
}
