//! Weighted hypergraph container with export into a textual graph
//! description.
//!
//! See [`Hypergraph`] for the data structure and [`infra::export`] for the
//! serialization.

pub mod common;
pub mod core;
pub mod hypergraph;
pub mod infra;

pub use hypergraph::Hypergraph;

pub mod prelude {
    pub use crate::{
        core::id::{HedgeId, IdType, VertexId},
        hypergraph::Hypergraph,
        infra::export::{Dot, Export},
    };
}
