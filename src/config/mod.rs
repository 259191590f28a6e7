pub mod catalog;
#[cfg(feature = "cli")]
pub mod cli;

pub use catalog::ProductCatalog;
#[cfg(feature = "cli")]
pub use cli::CliConfig;
