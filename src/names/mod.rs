//! Name records and the strategies that produce them.

pub mod parser;
pub mod record;
pub mod suffix;

pub use parser::NameParser;
pub use record::{NameRecord, NAME_HEADERS};
pub use suffix::SuffixSet;
