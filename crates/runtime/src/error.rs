//! Errors surfaced by the world API.
//!
//! Pickup lifecycle failures are not errors here: they are logged and
//! published as events. These cover misuse of the host API itself.
use thiserror::Error;

use pickup_core::PickupId;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    #[error("{0} does not exist in this world")]
    UnknownPickup(PickupId),

    #[error("catalog '{0}' is not registered")]
    UnknownCatalog(String),
}
