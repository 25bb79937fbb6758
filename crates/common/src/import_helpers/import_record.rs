//! A single `(source, name, alias)` import requirement

use super::ImportString;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A symbol (or whole module, when `name` is empty) that generated code imports
///
/// Equality, ordering and hashing only consider `(source, name)`.
#[derive(Debug, Clone)]
pub struct ImportRecord {
    pub source: ImportString,
    pub name: String,
    pub alias: Option<String>,
}

impl ImportRecord {
    pub fn new(source: ImportString, name: &str) -> Self {
        Self {
            source,
            name: name.to_string(),
            alias: None,
        }
    }

    pub fn with_alias(source: ImportString, name: &str, alias: &str) -> Self {
        Self {
            source,
            name: name.to_string(),
            alias: Some(alias.to_string()),
        }
    }

    /// Whole-module import (`import source`)
    pub fn module(source: ImportString) -> Self {
        Self {
            source,
            name: String::new(),
            alias: None,
        }
    }

    /// Record for names that need no import
    pub fn builtins() -> Self {
        Self::module(ImportString::builtins())
    }

    pub fn is_builtins(&self) -> bool {
        self.source.is_builtins()
    }

    /// `name as alias`, or just `name`
    pub fn render_name(&self) -> String {
        match &self.alias {
            Some(alias) => format!("{} as {}", self.name, alias),
            None => self.name.clone(),
        }
    }

    /// Render as a single import statement
    pub fn render(&self) -> String {
        if self.name.is_empty() {
            return match &self.alias {
                Some(alias) => format!("import {} as {}", self.source, alias),
                None => format!("import {}", self.source),
            };
        }
        format!("from {} import {}", self.source, self.render_name())
    }
}

impl PartialEq for ImportRecord {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.name == other.name
    }
}

impl Eq for ImportRecord {}

impl PartialOrd for ImportRecord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ImportRecord {
    fn cmp(&self, other: &Self) -> Ordering {
        (&self.source, &self.name).cmp(&(&other.source, &other.name))
    }
}

impl Hash for ImportRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.source.hash(state);
        self.name.hash(state);
    }
}

impl fmt::Display for ImportRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render() {
        let record = ImportRecord::new(ImportString::typing(), "List");
        assert_eq!(record.render(), "from typing import List");

        let aliased = ImportRecord::with_alias(ImportString::new("boto3"), "Session", "Boto3Session");
        assert_eq!(aliased.render(), "from boto3 import Session as Boto3Session");

        let module = ImportRecord::module(ImportString::new("boto3"));
        assert_eq!(module.render(), "import boto3");
    }

    #[test]
    fn test_equality_ignores_alias() {
        let a = ImportRecord::new(ImportString::typing(), "Dict");
        let b = ImportRecord::with_alias(ImportString::typing(), "Dict", "D");
        assert_eq!(a, b);
    }

    #[test]
    fn test_ordering_by_source_then_name() {
        let mut records = vec![
            ImportRecord::new(ImportString::typing(), "List"),
            ImportRecord::new(ImportString::new("datetime"), "datetime"),
            ImportRecord::new(ImportString::typing(), "Dict"),
        ];
        records.sort();
        let rendered: Vec<String> = records.iter().map(ImportRecord::render).collect();
        assert_eq!(
            rendered,
            vec![
                "from datetime import datetime",
                "from typing import Dict",
                "from typing import List",
            ]
        );
    }
}
