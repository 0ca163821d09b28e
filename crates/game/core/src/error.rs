//! Common error infrastructure for game-core.
//!
//! Domain-specific errors (e.g., `GridError`, `MoveError`, `TickError`) are
//! defined next to the operations that produce them. This module provides the
//! shared classification used by the runtime when deciding how loudly to log
//! a failure and whether the simulation can carry on.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the agent or tick can simply be skipped
/// - **Validation**: a caller passed input outside the contract
/// - **Internal**: an invariant of the simulation no longer holds
/// - **Fatal**: the simulation cannot be constructed or continued
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ErrorSeverity {
    Recoverable,
    Validation,
    Internal,
    Fatal,
}

/// Common trait for all game-core errors.
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
