use thiserror::Error;

#[derive(Error, Debug)]
pub enum StampError {
    #[error("unknown product: {name:?}, enter an exact catalog name or pick one from the list")]
    UnknownProduct { name: String },

    #[error("no manufacturing date supplied")]
    MissingDate,

    #[error("invalid shelf-life value: {raw} (expected a month count like 120 or a day count like \"d120\")")]
    ShelfLifeFormat { raw: String },

    #[error("day-based shelf life must be at least 1, got d{days}")]
    NonPositiveDuration { days: i64 },

    #[error("invalid date {value:?} (expected the YYYY.MM.DD form)")]
    DateFormat {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("computed date falls outside the supported calendar range: {details}")]
    DateOutOfRange { details: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("catalog TOML error: {0}")]
    CatalogToml(#[from] toml::de::Error),

    #[error("catalog JSON error: {0}")]
    CatalogJson(#[from] serde_json::Error),

    #[error("configuration error: {message}")]
    Config { message: String },
}

impl StampError {
    /// True for errors that point at bad catalog data rather than bad user
    /// input. The CLI words these as data-quality warnings and uses a
    /// distinct exit code.
    pub fn is_catalog_defect(&self) -> bool {
        matches!(
            self,
            StampError::ShelfLifeFormat { .. } | StampError::NonPositiveDuration { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, StampError>;
