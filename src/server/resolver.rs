//! Request-target resolution under the content root.

use std::path::{Path, PathBuf};

/// What a resolved target points at on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    /// A regular file.
    File,
    /// A directory without a servable default document.
    Directory,
    /// Nothing readable at the resolved location.
    Missing,
}

/// The sanitized, root-relative location computed from a request target.
#[derive(Debug, Clone)]
pub struct ResolvedPath {
    /// Path relative to the content root, `/`-separated, never empty.
    pub relative: String,
    /// The joined on-disk path.
    pub absolute: PathBuf,
    /// Classification of the on-disk path.
    pub kind: PathKind,
}

/// Resolves request targets to filesystem paths under the content root.
///
/// Resolution is a security boundary: targets are normalized segment by
/// segment before touching the filesystem, so the result can never name
/// anything above the root.
#[derive(Debug, Clone)]
pub struct PathResolver {
    root: PathBuf,
    default_document: String,
}

impl PathResolver {
    /// Create a resolver for the given content root and default document.
    pub fn new(root: impl Into<PathBuf>, default_document: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            default_document: default_document.into(),
        }
    }

    /// The content root this resolver serves from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Turn a raw request target into a classified on-disk path.
    ///
    /// The query component is dropped, the path is normalized (empty and `.`
    /// segments skipped, `..` pops the previous segment but never climbs
    /// above the root), and an empty result falls back to the default
    /// document. A directory containing the default document re-resolves to
    /// that file; one without it stays [`PathKind::Directory`] so the caller
    /// can refuse it.
    pub fn resolve(&self, target: &str) -> ResolvedPath {
        let path = target.split_once('?').map_or(target, |(path, _)| path);

        let mut relative = normalize(path);
        if relative.is_empty() {
            relative = self.default_document.clone();
        }

        let absolute = self.root.join(&relative);
        match classify(&absolute) {
            PathKind::Directory => {
                let index = absolute.join(&self.default_document);
                if classify(&index) == PathKind::File {
                    ResolvedPath {
                        relative: format!("{relative}/{}", self.default_document),
                        absolute: index,
                        kind: PathKind::File,
                    }
                } else {
                    ResolvedPath {
                        relative,
                        absolute,
                        kind: PathKind::Directory,
                    }
                }
            }
            kind => ResolvedPath {
                relative,
                absolute,
                kind,
            },
        }
    }
}

/// Collapse a request path to clean root-relative segments.
///
/// `..` removes the previously kept segment and is otherwise dropped, which
/// makes escaping the root impossible by construction. Targets are not
/// percent-decoded, so encoded separators name literal files.
fn normalize(path: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }
    segments.join("/")
}

fn classify(path: &Path) -> PathKind {
    match std::fs::metadata(path) {
        Ok(metadata) if metadata.is_dir() => PathKind::Directory,
        Ok(_) => PathKind::File,
        Err(_) => PathKind::Missing,
    }
}
