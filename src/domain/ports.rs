use crate::domain::model::RawShelfLife;

/// Read-only lookup from product name to its raw shelf-life encoding.
///
/// The engine never mutates or persists the mapping; how it is populated is
/// the caller's concern.
pub trait ShelfLifeSource {
    /// Returns the raw shelf-life entry for `product`, if the catalog knows
    /// the product.
    fn raw_shelf_life(&self, product: &str) -> Option<RawShelfLife>;

    /// All product names the source knows, for listings and suggestions.
    fn product_names(&self) -> Vec<String>;
}
