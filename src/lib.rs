pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use app::session::ProductSession;
pub use config::{CliConfig, OutputFormat};
pub use core::{generator::ProductGenerator, parser::SetParser};
pub use domain::model::{OrderedPair, ProductStatistics, SetElement};
pub use utils::error::{InvalidSetError, Result};
