//! Node - one filesystem entry in a directory snapshot

use std::cell::RefCell;
use std::fmt;
use std::fs::{self, Metadata};
use std::io;
use std::path::{MAIN_SEPARATOR, Path, PathBuf};
use std::rc::{Rc, Weak};
use std::sync::LazyLock;

use hashlink::LinkedHashMap;
use regex::Regex;
use snafu::{ResultExt, ensure};
use tracing::trace;

use crate::error::{
    InvalidRootSnafu, NotADirectorySnafu, NotDescendantSnafu, NotFoundSnafu, NotReadableSnafu,
    Result, UnresolvablePathSnafu,
};

/// Archive-style scheme prefix (`phar://`, `zip://`, ...) marking a virtual path.
/// Two or more characters so Windows drive letters never match.
static ARCHIVE_SCHEME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.-]+://").unwrap());

/// Children keyed by location, in insertion order.
type ChildMap = LinkedHashMap<String, Node>;

enum NodeKind {
    Directory(RefCell<ChildMap>),
    File,
}

struct NodeInner {
    path: PathBuf,
    name: String,
    location: String,
    parent: Option<Weak<NodeInner>>,
    kind: NodeKind,
}

/// A shared handle to a file or directory in the tree.
///
/// Cloning a `Node` clones the handle, not the entry. Parents own their
/// children; a child only holds a weak link back to its parent, so the whole
/// graph is released when the root handle (or the [`Tree`](super::Tree)
/// holding it) is dropped.
#[derive(Clone)]
pub struct Node(Rc<NodeInner>);

impl Node {
    /// Create a node for `path`, checking it against the optional `parent`.
    ///
    /// The path is canonicalized unless it carries an archive-style scheme
    /// prefix, in which case it is taken verbatim. Fails if a root is a
    /// symbolic link, if the path cannot be resolved, does not exist, is not
    /// readable, or does not live strictly below `parent`.
    ///
    /// Trailing separators are ignored, so `link/` is checked as `link`.
    pub fn new(path: impl AsRef<Path>, parent: Option<&Node>) -> Result<Self> {
        let raw = strip_trailing_separators(path.as_ref());

        if parent.is_none() && raw.is_symlink() {
            return InvalidRootSnafu { path: raw }.fail();
        }

        let path = resolve_path(raw)?;
        let metadata = match fs::metadata(&path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return NotFoundSnafu { path }.fail();
            }
            Err(_) => return NotReadableSnafu { path }.fail(),
        };
        ensure!(is_readable(&path, &metadata), NotReadableSnafu { path: &path });

        if let Some(parent) = parent {
            ensure!(
                is_strict_descendant(&path, parent.path()),
                NotDescendantSnafu {
                    path: &path,
                    parent: parent.path(),
                }
            );
        }

        let name = entry_name(raw, &path);
        let location = match parent {
            Some(parent) => join_location(parent.location(), &name),
            None => name.clone(),
        };
        let kind = if metadata.is_dir() {
            NodeKind::Directory(RefCell::new(ChildMap::new()))
        } else {
            NodeKind::File
        };

        trace!(location = %location, path = %path.display(), "created node");

        Ok(Self(Rc::new(NodeInner {
            path,
            name,
            location,
            parent: parent.map(|p| Rc::downgrade(&p.0)),
            kind,
        })))
    }

    /// Canonical absolute path, with no trailing separator.
    pub fn path(&self) -> &Path {
        &self.0.path
    }

    /// Logical `/`-joined path relative to the root, starting with the root's name.
    pub fn location(&self) -> &str {
        &self.0.location
    }

    /// Display name: the entry's own basename.
    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// The parent node, or `None` for a root (or once the parent has been dropped).
    pub fn parent(&self) -> Option<Node> {
        self.0.parent.as_ref()?.upgrade().map(Node)
    }

    pub fn is_root(&self) -> bool {
        self.0.parent.is_none()
    }

    pub fn is_dir(&self) -> bool {
        matches!(self.0.kind, NodeKind::Directory(_))
    }

    pub fn is_file(&self) -> bool {
        matches!(self.0.kind, NodeKind::File)
    }

    /// Children in stored order.
    ///
    /// `None` means this node is a file; an empty directory yields `Some(vec![])`.
    pub fn children(&self) -> Option<Vec<Node>> {
        match &self.0.kind {
            NodeKind::Directory(children) => Some(children.borrow().values().cloned().collect()),
            NodeKind::File => None,
        }
    }

    /// Look up a direct child by its location.
    pub fn child(&self, location: &str) -> Option<Node> {
        match &self.0.kind {
            NodeKind::Directory(children) => children.borrow().get(location).cloned(),
            NodeKind::File => None,
        }
    }

    /// Attach `child` under its location.
    ///
    /// An existing entry with the same location is replaced and moves to the
    /// end of the child order.
    pub fn add_child(&self, child: Node) -> Result<()> {
        let NodeKind::Directory(children) = &self.0.kind else {
            return NotADirectorySnafu {
                node: self.location(),
            }
            .fail();
        };

        let key = child.location().to_string();
        children.borrow_mut().insert(key, child);
        Ok(())
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Node {}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Node");
        s.field("path", &self.0.path)
            .field("location", &self.0.location);
        match &self.0.kind {
            NodeKind::Directory(children) => s.field("children", &children.borrow().len()),
            NodeKind::File => s.field("children", &None::<usize>),
        };
        s.finish()
    }
}

/// Join a parent location and a child name into the child's location.
pub(crate) fn join_location(parent: &str, name: &str) -> String {
    format!("{}/{}", parent.trim_end_matches('/'), name)
}

/// `dir/` becomes `dir`, so the lstat in the root check sees the link itself.
fn strip_trailing_separators(path: &Path) -> &Path {
    let Some(raw) = path.to_str() else {
        return path;
    };
    let trimmed = raw.trim_end_matches(['/', MAIN_SEPARATOR]);
    if trimmed.is_empty() {
        path
    } else {
        Path::new(trimmed)
    }
}

fn is_archive_path(path: &Path) -> bool {
    path.to_str().is_some_and(|s| ARCHIVE_SCHEME.is_match(s))
}

/// Canonicalize `path`, or strip trailing separators from an archive path.
fn resolve_path(path: &Path) -> Result<PathBuf> {
    if is_archive_path(path) {
        let raw = path.to_string_lossy();
        let scheme_len = ARCHIVE_SCHEME.find(&raw).map_or(0, |m| m.end());
        let (scheme, rest) = raw.split_at(scheme_len);
        return Ok(PathBuf::from(format!("{}{}", scheme, rest.trim_end_matches('/'))));
    }

    match fs::canonicalize(path) {
        Ok(resolved) => Ok(resolved),
        // Nothing at all at the path: report it missing rather than unresolvable.
        Err(e) if e.kind() == io::ErrorKind::NotFound && path.symlink_metadata().is_err() => {
            NotFoundSnafu { path }.fail()
        }
        Err(e) => Err(e).context(UnresolvablePathSnafu { path }),
    }
}

fn is_readable(path: &Path, metadata: &Metadata) -> bool {
    if metadata.is_dir() {
        fs::read_dir(path).is_ok()
    } else if metadata.is_file() {
        fs::File::open(path).is_ok()
    } else {
        // Opening a FIFO would block, so fall back to permission bits.
        has_read_permission(metadata)
    }
}

#[cfg(unix)]
fn has_read_permission(metadata: &Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode() & 0o444 != 0
}

#[cfg(not(unix))]
fn has_read_permission(_metadata: &Metadata) -> bool {
    true
}

/// `path` lies below `parent` by at least one whole component.
fn is_strict_descendant(path: &Path, parent: &Path) -> bool {
    path != parent && path.starts_with(parent)
}

/// Basename of the entry as named on disk, falling back to the resolved
/// path for `.`, `..` and filesystem roots.
///
/// Two sibling symlinks resolving to the same target still get distinct
/// locations, since each keeps its own link name.
fn entry_name(raw: &Path, resolved: &Path) -> String {
    raw.file_name()
        .or_else(|| resolved.file_name())
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| resolved.to_string_lossy().to_string())
}
