//! Card system: definitions and the catalog.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for card definitions
//! - `CardDefinition`: Static card data and dominance sets
//! - `CardCatalog`: Validated, ordered card lookup

pub mod catalog;
pub mod definition;

pub use catalog::{CardCatalog, CatalogError};
pub use definition::{CardDefinition, CardId, CardSet};
