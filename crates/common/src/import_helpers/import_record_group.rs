//! Coalescing of import records that share a source module

use super::{ImportRecord, ImportString};

/// Import records from one source, rendered as a single statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportRecordGroup {
    pub source: ImportString,
    pub records: Vec<ImportRecord>,
}

impl ImportRecordGroup {
    fn new(record: ImportRecord) -> Self {
        Self {
            source: record.source.clone(),
            records: vec![record],
        }
    }

    /// Whether the group belongs to the built-ins pseudo-module
    ///
    /// Renderers omit such groups.
    pub fn is_builtins(&self) -> bool {
        self.source.is_builtins()
    }

    fn accepts(&self, record: &ImportRecord) -> bool {
        self.source == record.source
            && self.records.first().is_some_and(|first| !first.name.is_empty())
            && !record.name.is_empty()
    }

    pub fn render(&self) -> String {
        match self.records.as_slice() {
            [single] => single.render(),
            records => {
                let names: Vec<String> = records.iter().map(ImportRecord::render_name).collect();
                format!("from {} import {}", self.source, names.join(", "))
            }
        }
    }
}

/// Group import records for compact, deterministic rendering
///
/// Records are stable-sorted by `(source, name)`, then consecutive records
/// are merged while the source matches and both the group's first record and
/// the incoming record have a name. Whole-module imports (empty name) always
/// get a group of their own.
pub fn group_import_records<I>(records: I) -> Vec<ImportRecordGroup>
where
    I: IntoIterator<Item = ImportRecord>,
{
    let mut sorted: Vec<ImportRecord> = records.into_iter().collect();
    sorted.sort();

    let mut groups: Vec<ImportRecordGroup> = Vec::new();
    for record in sorted {
        match groups.last_mut() {
            Some(group) if group.accepts(&record) => group.records.push(record),
            _ => groups.push(ImportRecordGroup::new(record)),
        }
    }
    groups
}
