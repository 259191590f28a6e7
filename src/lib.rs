pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::ProductCatalog;

pub use crate::core::{compute_target_date, shift_by_days, shift_by_months, StampEngine};
pub use domain::model::{format_stamp, parse_stamp, RawShelfLife, ShelfLife, StampReport};
pub use domain::ports::ShelfLifeSource;
pub use utils::error::{Result, StampError};
