//! AgentIdentity — validated identifiers for software agents.
//!
//! An [`AgentIdentity`] is an immutable, non-empty identifier naming an
//! agent within a larger trust or coordination system. Construction is the
//! only place validation happens; once a value exists it is valid for its
//! entire lifetime.

pub mod error;
pub mod identity;

// Re-export primary types
pub use error::{IdentityError, Result};
pub use identity::{validate_identifier, AgentIdentity};
