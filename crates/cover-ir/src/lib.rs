pub mod parse;
pub mod types;
pub mod validate;

pub use parse::{parse_instance, ParseError};
pub use types::{Element, Selection, Solution, Subset, SubsetCollection};
pub use validate::{check_extension, validate_instance, ExtensionError, PathRole, ValidationError};
