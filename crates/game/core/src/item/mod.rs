//! Item metadata: identifiers, kinds, display text, and definitions.
//!
//! [`ItemDefinition`] doubles as the authored data asset linked from a
//! [`CatalogRow`] and as the per-pickup snapshot built on every initialization.
mod definition;
mod id;
mod kind;
mod row;

pub use definition::ItemDefinition;
pub use id::ItemId;
pub use kind::{ItemKind, ItemText};
pub use row::CatalogRow;
