//! Python bindings via PyO3.
//!
//! Exposes agent identities to Python as the `agentid` extension module:
//!
//! ```python
//! from agentid import PyAgent
//!
//! agent = PyAgent("demo-agent-123")
//! print(agent.id)
//!
//! try:
//!     PyAgent("")
//! except ValueError as e:
//!     print(e)  # agent identifier must not be empty
//! ```
//!
//! The `#[pymethods]` surface and module init require the `python` feature;
//! build the importable extension with `--features extension-module`.
//! The handle type and its Rust-side constructor are always compiled.

#[cfg(feature = "python")]
use pyo3::exceptions::PyValueError;
#[cfg(feature = "python")]
use pyo3::prelude::*;

use agent_identity::{AgentIdentity, Result};

/// Python-facing agent handle.
///
/// Owns its [`AgentIdentity`]; the class is frozen so Python code cannot
/// rebind or mutate the wrapped value.
#[cfg_attr(feature = "python", pyclass(name = "PyAgent", module = "agentid", frozen))]
#[derive(Clone, Debug)]
pub struct PyAgent {
    inner: AgentIdentity,
}

impl PyAgent {
    /// Construct a handle, forwarding `candidate` unchanged to the core.
    pub fn create(candidate: &str) -> Result<Self> {
        Ok(Self {
            inner: AgentIdentity::new(candidate)?,
        })
    }

    /// Return the wrapped identifier.
    pub fn id(&self) -> &str {
        self.inner.id()
    }

    /// Return the wrapped identity.
    pub fn identity(&self) -> &AgentIdentity {
        &self.inner
    }

    /// Return the Python `repr()` text for this handle.
    pub fn repr(&self) -> String {
        format!("PyAgent(id={:?})", self.inner.id())
    }
}

// ──────────────────────────────────────────────
// PyO3 surface (only with python feature)
// ──────────────────────────────────────────────

#[cfg(feature = "python")]
fn to_py_err(e: agent_identity::IdentityError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

#[cfg(feature = "python")]
#[pymethods]
impl PyAgent {
    /// Create a new agent with the given ID.
    #[new]
    fn py_new(id: &str) -> PyResult<Self> {
        Self::create(id).map_err(to_py_err)
    }

    /// The agent's ID.
    #[getter(id)]
    fn py_id(&self) -> String {
        self.inner.id().to_owned()
    }

    fn __repr__(&self) -> String {
        self.repr()
    }

    fn __str__(&self) -> String {
        self.inner.to_string()
    }
}

/// Python module for AgentID.
#[cfg(feature = "python")]
#[pymodule]
fn agentid(_py: Python<'_>, m: &PyModule) -> PyResult<()> {
    m.add_class::<PyAgent>()?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    Ok(())
}
