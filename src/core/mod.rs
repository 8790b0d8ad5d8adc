pub mod config;
pub mod error;
pub mod types;

pub use error::{BoardError, Result};
pub use types::{Continent, CountryYearRecord, Metric};
