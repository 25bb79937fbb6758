//! References to types defined outside the annotated node

use crate::import_helpers::{ImportRecord, ImportString};

/// A type imported from another module (e.g., `datetime.datetime`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalImport {
    pub source: ImportString,
    pub name: String,
    pub alias: Option<String>,
}

impl ExternalImport {
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

    pub fn render(&self) -> String {
        self.alias.clone().unwrap_or_else(|| self.name.clone())
    }

    pub fn get_import_record(&self) -> ImportRecord {
        match &self.alias {
            Some(alias) => ImportRecord::with_alias(self.source.clone(), &self.name, alias),
            None => ImportRecord::new(self.source.clone(), &self.name),
        }
    }
}

/// A type defined elsewhere in the generated output
///
/// Without a module the type lives in the same generated file and needs no
/// import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InternalImport {
    pub name: String,
    pub module: Option<ImportString>,
}

impl InternalImport {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            module: None,
        }
    }

    /// Type defined in another module of the generated package
    pub fn from_module(name: &str, module: &str) -> Self {
        Self {
            name: name.to_string(),
            module: Some(ImportString::local(module)),
        }
    }

    pub fn render(&self) -> String {
        self.name.clone()
    }

    pub fn get_import_record(&self) -> ImportRecord {
        match &self.module {
            Some(module) => ImportRecord::new(module.clone(), &self.name),
            None => ImportRecord::builtins(),
        }
    }
}
