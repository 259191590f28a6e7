use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "datemark")]
#[command(about = "Shelf-life date stamp calculator")]
pub struct CliConfig {
    /// Catalog file mapping product names to shelf-life values
    /// (TOML `[products]` table, or a JSON object for .json files)
    #[arg(long, default_value = "./catalog.toml")]
    pub catalog: String,

    /// Exact product name to look up
    #[arg(long)]
    pub product: Option<String>,

    /// Manufacturing date in YYYY.MM.DD form
    #[arg(long)]
    pub date: Option<String>,

    /// List catalog products containing the given fragment
    #[arg(long)]
    pub search: Option<String>,

    /// List all catalog products
    #[arg(long)]
    pub list: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("catalog", &self.catalog)?;

        if let Some(product) = &self.product {
            validate_non_empty_string("product", product)?;
        }

        Ok(())
    }
}
