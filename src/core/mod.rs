pub mod engine;
pub mod parser;
pub mod shifter;

pub use crate::domain::model::{RawShelfLife, ShelfLife, StampReport};
pub use crate::domain::ports::ShelfLifeSource;
pub use crate::utils::error::Result;
pub use engine::{compute_target_date, Calculation, StampEngine};
pub use parser::parse_shelf_life;
pub use shifter::{days_in_month, is_leap_year, shift_by_days, shift_by_months};
