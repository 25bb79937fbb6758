//! Import records and their grouping into import statements

mod import_record;
mod import_record_group;
mod import_string;

pub use import_record::ImportRecord;
pub use import_record_group::{group_import_records, ImportRecordGroup};
pub use import_string::ImportString;
