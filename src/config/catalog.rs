use crate::domain::model::RawShelfLife;
use crate::domain::ports::ShelfLifeSource;
use crate::utils::error::{Result, StampError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Product catalog: the read-only mapping from product name to raw
/// shelf-life encoding.
///
/// Loadable from a TOML file with a `[products]` table or from a JSON
/// object; entries may be bare integers (months) or strings (`"120"`,
/// `"d120"`). The engine only reads it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductCatalog {
    products: BTreeMap<String, RawShelfLife>,
}

impl ProductCatalog {
    /// Loads a catalog file, picking the parser from the file extension:
    /// `.json` is parsed as a JSON object, everything else as TOML.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let catalog = if is_json {
            Self::from_json_str(&content)?
        } else {
            Self::from_toml_str(&content)?
        };

        tracing::debug!(
            "loaded {} products from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let catalog: ProductCatalog = toml::from_str(content)?;
        catalog.reject_empty()
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let products: BTreeMap<String, RawShelfLife> = serde_json::from_str(content)?;
        ProductCatalog { products }.reject_empty()
    }

    /// The catalog shipped with the original calculator, kept as a working
    /// default and as test data.
    pub fn sample() -> Self {
        let mut products = BTreeMap::new();
        products.insert("KFC 딸기쨈 (디스펜팩)".to_string(), RawShelfLife::Number(6));
        products.insert("Light Sugar 딸기쨈(조흥)".to_string(), RawShelfLife::Number(3));
        products.insert("Light Sugar 사과쨈(조흥)".to_string(), RawShelfLife::Number(3));
        products.insert(
            "LIGHT&JOY 당을 줄인 김천자두쨈".to_string(),
            RawShelfLife::Number(12),
        );
        products.insert(
            "LIGHT&JOY 당을 줄인 논산딸기쨈".to_string(),
            RawShelfLife::Number(12),
        );
        products.insert(
            "LIGHT&JOY 당을 줄인 청송사과쨈".to_string(),
            RawShelfLife::Number(12),
        );
        ProductCatalog { products }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    fn reject_empty(self) -> Result<Self> {
        if self.products.is_empty() {
            return Err(StampError::Config {
                message: "catalog contains no products".to_string(),
            });
        }
        Ok(self)
    }
}

impl FromIterator<(String, RawShelfLife)> for ProductCatalog {
    fn from_iter<I: IntoIterator<Item = (String, RawShelfLife)>>(iter: I) -> Self {
        ProductCatalog {
            products: iter.into_iter().collect(),
        }
    }
}

impl ShelfLifeSource for ProductCatalog {
    fn raw_shelf_life(&self, product: &str) -> Option<RawShelfLife> {
        self.products.get(product).cloned()
    }

    fn product_names(&self) -> Vec<String> {
        self.products.keys().cloned().collect()
    }
}
