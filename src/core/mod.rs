pub mod engine;
pub mod finder;
pub mod report;

pub use crate::domain::model::{Report, ResultSet, WordLengthGroup};
pub use crate::domain::ports::WordLookup;
pub use crate::utils::error::Result;
