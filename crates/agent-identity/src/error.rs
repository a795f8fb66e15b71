//! Error types for AgentIdentity.
//!
//! Validation failures are strongly typed and returned synchronously from
//! the constructor. Nothing in this crate panics on bad input.

/// Identity error types covering all validation failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum IdentityError {
    #[error("agent identifier must not be empty")]
    EmptyIdentifier,
}

/// Convenience Result alias.
pub type Result<T> = std::result::Result<T, IdentityError>;
