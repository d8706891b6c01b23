use std::fmt;

use thiserror::Error;

use super::id::{HedgeId, VertexId};

/// Reason why storage could not be grown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum GrowError {
    #[error("the graph has exhausted its capacity")]
    CapacityOverflow,
    #[error("memory allocation failed")]
    OutOfMemory,
}

#[derive(Debug, Error, PartialEq)]
#[error("adding vertex failed: {kind}")]
pub struct AddVertexError<V> {
    pub attr: V,
    pub kind: AddVertexErrorKind,
}

impl<V> AddVertexError<V> {
    pub fn new(attr: V, kind: AddVertexErrorKind) -> Self {
        Self { attr, kind }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddVertexErrorKind {
    CapacityOverflow,
    OutOfMemory,
}

impl From<GrowError> for AddVertexErrorKind {
    fn from(error: GrowError) -> Self {
        match error {
            GrowError::CapacityOverflow => AddVertexErrorKind::CapacityOverflow,
            GrowError::OutOfMemory => AddVertexErrorKind::OutOfMemory,
        }
    }
}

impl fmt::Display for AddVertexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            AddVertexErrorKind::CapacityOverflow => "the graph has exhausted its capacity",
            AddVertexErrorKind::OutOfMemory => "memory allocation failed",
        };
        f.write_str(reason)
    }
}

#[derive(Debug, Error, PartialEq)]
#[error("adding hyper-edge failed: {kind}")]
pub struct AddHedgeError<E> {
    pub attr: E,
    pub kind: AddHedgeErrorKind,
}

impl<E> AddHedgeError<E> {
    pub fn new(attr: E, kind: AddHedgeErrorKind) -> Self {
        Self { attr, kind }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddHedgeErrorKind {
    VertexAbsent(VertexId),
    CapacityOverflow,
    OutOfMemory,
}

impl From<GrowError> for AddHedgeErrorKind {
    fn from(error: GrowError) -> Self {
        match error {
            GrowError::CapacityOverflow => AddHedgeErrorKind::CapacityOverflow,
            GrowError::OutOfMemory => AddHedgeErrorKind::OutOfMemory,
        }
    }
}

impl fmt::Display for AddHedgeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddHedgeErrorKind::VertexAbsent(id) => write!(f, "vertex {id} does not exist"),
            AddHedgeErrorKind::CapacityOverflow => {
                f.write_str("the graph has exhausted its capacity")
            }
            AddHedgeErrorKind::OutOfMemory => f.write_str("memory allocation failed"),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
#[error("vertex does not exist")]
pub struct ReplaceVertexError<V>(pub V);

#[derive(Debug, Error, PartialEq)]
#[error("hyper-edge does not exist")]
pub struct ReplaceHedgeError<E>(pub E);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum LinkError {
    #[error("linking failed: vertex {0} does not exist")]
    VertexAbsent(VertexId),
    #[error("linking failed: hyper-edge {0} does not exist")]
    HedgeAbsent(HedgeId),
}
