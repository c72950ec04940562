use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid listen address: {0}")]
    InvalidAddress(String),

    #[error("Duplicate book identifier: {0}")]
    DuplicateBookId(i32),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
