//! Dotted module paths used as import sources

use std::fmt;

/// Pseudo-module for names that never need an import
const BUILTINS: &str = "builtins";

/// Module path an import record points to
///
/// Local modules of the generated package are stored with a leading dot
/// (e.g., ".type_defs") and render as relative imports.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImportString {
    path: String,
}

impl ImportString {
    pub fn new(path: &str) -> Self {
        Self {
            path: path.to_string(),
        }
    }

    /// The built-ins pseudo-module
    pub fn builtins() -> Self {
        Self::new(BUILTINS)
    }

    /// A module of the generated package (e.g., "type_defs" -> ".type_defs")
    pub fn local(module: &str) -> Self {
        Self {
            path: format!(".{}", module),
        }
    }

    pub fn typing() -> Self {
        Self::new("typing")
    }

    pub fn typing_extensions() -> Self {
        Self::new("typing_extensions")
    }

    pub fn as_str(&self) -> &str {
        &self.path
    }

    pub fn is_builtins(&self) -> bool {
        self.path == BUILTINS
    }

    pub fn is_local(&self) -> bool {
        self.path.starts_with('.')
    }

    /// Whether this path is the given local module
    pub fn is_local_module(&self, module: &str) -> bool {
        self.path
            .strip_prefix('.')
            .is_some_and(|name| name == module)
    }
}

impl fmt::Display for ImportString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}
