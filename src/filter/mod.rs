pub mod error;
pub mod filter;
pub mod filter_clause;
pub mod types;

pub use error::FilterError;
pub use filter::Filter;
pub use types::{FilterField, FilterPredicate};
