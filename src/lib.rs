pub mod catalog;
pub mod config;
pub mod error;
pub mod graphql;
pub mod logging;
pub mod metrics;
pub mod server;

pub use catalog::{Book, BookStore, Catalog, Heading, Student};
pub use config::ServiceConfig;
pub use error::{CatalogError, Result};
