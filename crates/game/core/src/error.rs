//! Common error infrastructure for pickup-core.
//!
//! Domain-specific errors (e.g., [`InitializeError`](crate::pickup::InitializeError),
//! [`AssetError`](crate::asset::AssetError)) are defined alongside the operations
//! that produce them. This module provides the shared classification used to
//! decide how loudly a failure is reported.
//!
//! # Design Principles
//!
//! - **Never fatal**: every failure path degrades to "pickup has no representation"
//! - **Severity Classification**: errors are categorized for logging level
//! - **Stable codes**: each variant exposes a static code for tests and diagnostics

/// Severity level of an error, used for categorization and logging.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Transient condition; a later attempt (e.g. the next respawn) may succeed.
    ///
    /// Examples: mesh asset missing from the asset store
    Recoverable,

    /// Invalid authored data; retrying without changes will not help.
    ///
    /// Examples: empty item id, id not present in the catalog
    Validation,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for all pickup-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
