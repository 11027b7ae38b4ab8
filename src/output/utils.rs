//! Shared utility functions for output formatting

use crate::tree::TreeStats;

/// Prefix for the children of an entry drawn with `prefix` in the text tree.
pub fn child_prefix(prefix: &str, is_last: bool) -> String {
    if is_last {
        format!("{}    ", prefix)
    } else {
        format!("{}│   ", prefix)
    }
}

/// Tree connector for an entry.
pub fn connector(is_last: bool) -> &'static str {
    if is_last { "└── " } else { "├── " }
}

/// Leading whitespace for a node at `depth`.
pub fn indent(depth: usize, indent_size: usize) -> String {
    " ".repeat(depth * indent_size)
}

/// The trailing summary line, e.g. "2 directories, 5 files".
pub fn summary_line(stats: TreeStats) -> String {
    format!("{} directories, {} files", stats.directories, stats.files)
}

/// Escape text for HTML content and attribute values, quotes included.
pub fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Escape text for an XML attribute value.
pub fn escape_xml(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
