//! Agent identity — construction, validation, access.
//!
//! The identity module provides the core `AgentIdentity` type and the
//! single validation routine every construction path goes through.

pub mod agent;

pub use agent::{validate_identifier, AgentIdentity};
