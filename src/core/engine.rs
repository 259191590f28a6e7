use crate::core::parser::parse_shelf_life;
use crate::core::shifter::{shift_by_days, shift_by_months};
use crate::domain::model::{RawShelfLife, ShelfLife, StampReport};
use crate::domain::ports::ShelfLifeSource;
use crate::utils::error::{Result, StampError};
use chrono::NaiveDate;

/// The normalized shelf life together with the date it produced. Returned
/// alongside the target so callers can show "months: 6" / "days: 120".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calculation {
    pub shelf_life: ShelfLife,
    pub target: NaiveDate,
}

/// Parses a raw shelf-life value and dispatches to the matching shifter.
///
/// Pure and deterministic: identical inputs always produce identical
/// outputs, and the first error aborts the calculation unchanged.
pub fn compute_target_date(raw: &RawShelfLife, manufactured: NaiveDate) -> Result<Calculation> {
    let shelf_life = parse_shelf_life(raw)?;

    let target = match shelf_life {
        ShelfLife::Days(days) => shift_by_days(manufactured, days)?,
        ShelfLife::Months(months) => shift_by_months(manufactured, months)?,
    };

    Ok(Calculation { shelf_life, target })
}

/// Runs stamp calculations against a product catalog.
pub struct StampEngine<S: ShelfLifeSource> {
    source: S,
}

impl<S: ShelfLifeSource> StampEngine<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Looks up `product`, then computes its target stamp from
    /// `manufactured`. A missing date or unknown product fails before any
    /// arithmetic runs.
    pub fn run(&self, product: &str, manufactured: Option<NaiveDate>) -> Result<StampReport> {
        let manufactured = manufactured.ok_or(StampError::MissingDate)?;

        let raw = self
            .source
            .raw_shelf_life(product)
            .ok_or_else(|| StampError::UnknownProduct {
                name: product.to_string(),
            })?;

        tracing::debug!("shelf-life entry for {:?}: {}", product, raw);
        let calc = compute_target_date(&raw, manufactured)?;
        tracing::debug!(
            "computed target for {:?}: {} ({})",
            product,
            calc.target,
            calc.shelf_life
        );

        Ok(StampReport {
            product: product.to_string(),
            manufactured,
            shelf_life: calc.shelf_life,
            target: calc.target,
        })
    }

    /// Catalog product names containing `fragment` (the autocomplete
    /// behavior of the original UI). An all-whitespace fragment matches
    /// nothing.
    pub fn matching_products(&self, fragment: &str) -> Vec<String> {
        let fragment = fragment.trim();
        if fragment.is_empty() {
            return Vec::new();
        }
        self.source
            .product_names()
            .into_iter()
            .filter(|name| name.contains(fragment))
            .collect()
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}
