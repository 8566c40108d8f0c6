pub mod error;
pub mod parse;
pub mod report;
pub mod schema;
pub mod validate;
pub mod wasm;

pub use report::{Issue, IssueKind, ValidationReport};
pub use validate::{validate, validate_file, validate_json};
