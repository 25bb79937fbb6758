//! Schema bundle loading
//!
//! A schema bundle is a versioned JSON description of one SDK service:
//! the low-level service model (operations and shapes), paginator and waiter
//! configurations, the resource model and per-method documentation.
//!
//! ## Usage
//! ```rust,ignore
//! use sdk_stubgen_parser::schema::SchemaParser;
//!
//! let schema = SchemaParser::from_file("schemas/s3.json")?.parse()?;
//! let operation = schema.get_operation("ListObjects")?;
//! ```

mod parser;
mod types;

pub use parser::SchemaParser;
pub use types::*;
