//! Core types of the hypergraph: ids, errors and the growth policy.

pub mod error;
pub mod growth;
pub mod id;

pub use error::*;
pub use id::{HedgeId, IdType, VertexId};
