//! Agent identity — the validated agent identifier.
//!
//! An agent identity wraps the identifier string an agent is known by.
//! The only rule enforced is that the identifier is non-empty; the
//! candidate is otherwise stored exactly as given, with no trimming,
//! normalization, or case-folding.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{IdentityError, Result};

/// Check a candidate identifier against the validity contract.
///
/// Every construction path (constructor, parsing, conversion,
/// deserialization) goes through this function.
pub fn validate_identifier(candidate: &str) -> Result<()> {
    if candidate.is_empty() {
        return Err(IdentityError::EmptyIdentifier);
    }
    Ok(())
}

/// Immutable identifier for an agent.
///
/// Serialized as a bare string. Deserialization re-runs validation, so an
/// empty string is rejected the same way [`AgentIdentity::new`] rejects it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AgentIdentity {
    id: String,
}

impl AgentIdentity {
    /// Create a new agent identity from a candidate identifier.
    ///
    /// Fails with [`IdentityError::EmptyIdentifier`] if `candidate` is empty.
    pub fn new(candidate: impl Into<String>) -> Result<Self> {
        let id = candidate.into();
        if let Err(e) = validate_identifier(&id) {
            log::debug!("rejected agent identifier: {e}");
            return Err(e);
        }
        log::trace!("constructed agent identity {id:?}");
        Ok(Self { id })
    }

    /// Return the identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Consume the identity and return the owned identifier.
    pub fn into_inner(self) -> String {
        self.id
    }
}

impl std::fmt::Display for AgentIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.id)
    }
}

impl AsRef<str> for AgentIdentity {
    fn as_ref(&self) -> &str {
        &self.id
    }
}

impl FromStr for AgentIdentity {
    type Err = IdentityError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for AgentIdentity {
    type Error = IdentityError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<&str> for AgentIdentity {
    type Error = IdentityError;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl From<AgentIdentity> for String {
    fn from(identity: AgentIdentity) -> Self {
        identity.id
    }
}
