pub mod generator;
pub mod parser;

pub use crate::domain::model::{OrderedPair, ProductStatistics, SetElement};
pub use crate::utils::error::Result;
