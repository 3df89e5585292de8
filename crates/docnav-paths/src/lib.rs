//! Section path registry for docnav.
//!
//! Maps section keys to URL paths. Root sections are registered with an
//! absolute path; derived sections are registered under an existing parent
//! and capture the parent's path by value at registration time. Parents
//! must therefore be registered before their children (topological
//! construction), which makes circular definitions impossible and keeps
//! every lookup a single `HashMap` access.
//!
//! The registry is populated once during configuration evaluation and
//! treated as read-only afterwards.
//!
//! # Example
//!
//! ```
//! use docnav_paths::PathRegistry;
//!
//! let mut registry = PathRegistry::new();
//! registry.register("how_to", "/how_to").unwrap();
//! registry
//!     .register_under("deploy_web_server", "how_to", "deploy_web_server")
//!     .unwrap();
//!
//! assert_eq!(
//!     registry.resolve("deploy_web_server"),
//!     Some("/how_to/deploy_web_server")
//! );
//! ```

use std::collections::HashMap;

/// Path registration error.
///
/// All variants are configuration-authoring mistakes surfaced while the
/// registry is being populated; lookups on a built registry cannot fail.
#[derive(Debug, thiserror::Error)]
pub enum PathError {
    /// Section key already registered.
    #[error("Duplicate section key: {0}")]
    DuplicateKey(String),
    /// Parent key not registered yet.
    #[error("Unknown parent '{parent}' for section '{key}' (parents must be declared first)")]
    UnknownParent {
        /// Section key being registered.
        key: String,
        /// Parent key that was not found.
        parent: String,
    },
    /// Path does not start with `/`.
    #[error("Invalid path '{path}' for section '{key}': paths must start with '/'")]
    InvalidPath {
        /// Section key being registered.
        key: String,
        /// Rejected path value.
        path: String,
    },
    /// Sub-segment is empty or contains `/`.
    #[error("Invalid segment '{segment}' for section '{key}': segments must be non-empty and must not contain '/'")]
    InvalidSegment {
        /// Section key being registered.
        key: String,
        /// Rejected segment value.
        segment: String,
    },
    /// Section key is empty.
    #[error("Section key cannot be empty")]
    EmptyKey,
}

/// Registry of section keys and their URL paths.
///
/// Paths are stored flat; a derived path is computed once from its
/// parent's stored value, never by recursive traversal. Registration
/// order is preserved for deterministic iteration.
#[derive(Debug, Default)]
pub struct PathRegistry {
    paths: HashMap<String, String>,
    keys: Vec<String>,
}

impl PathRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a root section with an absolute path.
    ///
    /// # Errors
    ///
    /// Returns [`PathError`] if the key is empty or already registered,
    /// or if the path does not start with `/`.
    pub fn register(&mut self, key: &str, path: &str) -> Result<(), PathError> {
        self.check_key(key)?;
        if !path.starts_with('/') {
            return Err(PathError::InvalidPath {
                key: key.to_owned(),
                path: path.to_owned(),
            });
        }
        self.insert(key, path.to_owned());
        Ok(())
    }

    /// Register a section under an already-registered parent.
    ///
    /// The resulting path is the parent's path plus `/segment`, captured
    /// by value. The parent must be registered first.
    ///
    /// # Errors
    ///
    /// Returns [`PathError`] if the key is empty or already registered,
    /// the parent is unknown, or the segment is empty or contains `/`.
    pub fn register_under(
        &mut self,
        key: &str,
        parent: &str,
        segment: &str,
    ) -> Result<(), PathError> {
        self.check_key(key)?;
        if segment.is_empty() || segment.contains('/') {
            return Err(PathError::InvalidSegment {
                key: key.to_owned(),
                segment: segment.to_owned(),
            });
        }
        let Some(base) = self.paths.get(parent) else {
            return Err(PathError::UnknownParent {
                key: key.to_owned(),
                parent: parent.to_owned(),
            });
        };
        let path = join_segment(base, segment);
        self.insert(key, path);
        Ok(())
    }

    /// Resolve a section key to its registered path.
    ///
    /// A missing key is an authoring mistake handled by the caller, not a
    /// fault at this layer.
    #[must_use]
    pub fn resolve(&self, key: &str) -> Option<&str> {
        self.paths.get(key).map(String::as_str)
    }

    /// Resolve a section key and append sub-segments to its path.
    ///
    /// Pure string concatenation over the stored base path: deterministic
    /// and idempotent for identical inputs.
    #[must_use]
    pub fn join(&self, key: &str, segments: &[&str]) -> Option<String> {
        let base = self.paths.get(key)?;
        let mut path = base.clone();
        for segment in segments {
            path = join_segment(&path, segment);
        }
        Some(path)
    }

    /// Registered keys in registration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    /// Number of registered sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// True if no sections are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    fn check_key(&self, key: &str) -> Result<(), PathError> {
        if key.is_empty() {
            return Err(PathError::EmptyKey);
        }
        if self.paths.contains_key(key) {
            return Err(PathError::DuplicateKey(key.to_owned()));
        }
        Ok(())
    }

    fn insert(&mut self, key: &str, path: String) {
        self.paths.insert(key.to_owned(), path);
        self.keys.push(key.to_owned());
    }
}

/// Append one segment to a base path with exactly one separating `/`.
fn join_segment(base: &str, segment: &str) -> String {
    if base.ends_with('/') {
        format!("{base}{segment}")
    } else {
        format!("{base}/{segment}")
    }
}
