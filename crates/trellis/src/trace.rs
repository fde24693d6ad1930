//! Model-checker trace data.
//!
//! A trace is an ordered list of states. Each state is an [`Instance`]: a
//! snapshot in which atoms are grouped into named signatures and related to
//! each other through named fields.
//!
//! [`Trace`] and [`StateInstance`] are an in-memory implementation that can be
//! deserialised from JSON:
//!
//! ```json
//! {
//!   "loopback": 1,
//!   "states": [
//!     {
//!       "signatures": { "Server": ["Server0", "Server1"] },
//!       "fields": {
//!         "role": { "Server0": ["Leader"], "Server1": ["Follower"] },
//!         "votedFor": { "Server1": ["Server0"] }
//!       }
//!     }
//!   ]
//! }
//! ```
//!
//! Other trace sources can be rendered by implementing [`Instance`].

use std::{collections::BTreeMap, fmt};

use log::debug;
use serde::Deserialize;
use thiserror::Error;

/// Errors raised while reading or querying a trace.
#[derive(Debug, Error)]
pub enum TraceError {
    #[error("failed to parse trace: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("trace contains no states")]
    Empty,

    #[error("unknown signature `{0}`")]
    UnknownSignature(String),

    #[error("unknown field `{0}`")]
    UnknownField(String),

    #[error("loopback index {loopback} is out of range for a trace of {states} states")]
    LoopbackOutOfRange { loopback: usize, states: usize },
}

/// An identified entity of a trace state, such as a participant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Atom {
    id: String,
}

impl Atom {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// Returns the stable display identifier.
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

/// Query interface of a single trace state.
pub trait Instance {
    /// Returns the atoms of `signature` in a stable order.
    ///
    /// # Errors
    ///
    /// Returns [`TraceError::UnknownSignature`] if the state has no such signature.
    fn atoms(&self, signature: &str) -> Result<Vec<Atom>, TraceError>;

    /// Resolves `field` for `atom`, returning the related atoms.
    ///
    /// An atom without a tuple in the relation yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`TraceError::UnknownField`] if the state has no such field.
    fn join(&self, atom: &Atom, field: &str) -> Result<Vec<Atom>, TraceError>;
}

/// One state of a trace, stored as plain maps of atom identifiers.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StateInstance {
    #[serde(default)]
    signatures: BTreeMap<String, Vec<String>>,

    /// field name -> source atom id -> related atom ids
    #[serde(default)]
    fields: BTreeMap<String, BTreeMap<String, Vec<String>>>,
}

impl StateInstance {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the atoms of a signature (builder style).
    pub fn with_atoms<I, S>(mut self, signature: &str, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.signatures
            .entry(signature.to_string())
            .or_default()
            .extend(ids.into_iter().map(Into::into));
        self
    }

    /// Relates `atom` to `targets` through `field` (builder style).
    ///
    /// Declaring a field with no targets still makes the field known.
    pub fn with_tuples<I, S>(mut self, field: &str, atom: &str, targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields
            .entry(field.to_string())
            .or_default()
            .entry(atom.to_string())
            .or_default()
            .extend(targets.into_iter().map(Into::into));
        self
    }
}

impl Instance for StateInstance {
    fn atoms(&self, signature: &str) -> Result<Vec<Atom>, TraceError> {
        self.signatures
            .get(signature)
            .map(|ids| ids.iter().map(Atom::new).collect())
            .ok_or_else(|| TraceError::UnknownSignature(signature.to_string()))
    }

    fn join(&self, atom: &Atom, field: &str) -> Result<Vec<Atom>, TraceError> {
        let relation = self
            .fields
            .get(field)
            .ok_or_else(|| TraceError::UnknownField(field.to_string()))?;

        Ok(relation
            .get(atom.id())
            .map(|ids| ids.iter().map(Atom::new).collect())
            .unwrap_or_default())
    }
}

/// An ordered sequence of states with an optional loop-back marker.
///
/// The loop-back index names the state a lasso-shaped trace returns to.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Trace {
    states: Vec<StateInstance>,

    #[serde(default)]
    loopback: Option<usize>,
}

impl Trace {
    pub fn new(states: Vec<StateInstance>) -> Self {
        Self {
            states,
            loopback: None,
        }
    }

    /// Parses a trace from its JSON form.
    ///
    /// # Errors
    ///
    /// Returns [`TraceError::Parse`] if the input is not a valid trace document.
    pub fn from_json(source: &str) -> Result<Self, TraceError> {
        let trace: Self = serde_json::from_str(source)?;
        debug!(states = trace.states.len(), loopback:? = trace.loopback; "Parsed trace");
        Ok(trace)
    }

    /// Sets the loop-back index (builder style).
    pub fn with_loopback(mut self, loopback: Option<usize>) -> Self {
        self.loopback = loopback;
        self
    }

    pub fn set_loopback(&mut self, loopback: Option<usize>) {
        self.loopback = loopback;
    }

    pub fn states(&self) -> &[StateInstance] {
        &self.states
    }

    pub fn loopback(&self) -> Option<usize> {
        self.loopback
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
