use std::fmt;

use proptest::{
    collection::vec,
    sample::subsequence,
    strategy::{BoxedStrategy, Just, Strategy},
};
use rustc_hash::FxHashSet;

use crate::{
    core::id::{HedgeId, IdType, VertexId},
    hypergraph::Hypergraph,
};

/// A generated hypergraph together with the data it was built from.
#[derive(Clone)]
pub struct HypergraphCase<V, E> {
    pub graph: Hypergraph<V, E>,
    /// Members of every hyper-edge in the order they were linked.
    pub members: Vec<Vec<VertexId>>,
    pub hedge_weights: Vec<E>,
    /// All incidence pairs.
    pub links: FxHashSet<(VertexId, HedgeId)>,
}

impl<V: fmt::Debug, E: fmt::Debug> fmt::Debug for HypergraphCase<V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "let mut graph = Hypergraph::new();")?;

        for (_, vertex) in self.graph.vertices() {
            writeln!(f, "graph.add_vertex({vertex:?});")?;
        }

        for (members, weight) in self.members.iter().zip(self.hedge_weights.iter()) {
            let indices = members
                .iter()
                .map(|v| format!("{}usize", v.as_usize()))
                .collect::<Vec<_>>();
            writeln!(
                f,
                "graph.link_vertices([{}], {weight:?});",
                indices.join(", ")
            )?;
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrategyParams {
    max_vertices: usize,
    max_hedges: usize,
}

impl Default for StrategyParams {
    fn default() -> Self {
        Self {
            max_vertices: 32,
            max_hedges: 32,
        }
    }
}

impl StrategyParams {
    pub fn max_vertices(self, value: usize) -> Self {
        Self {
            max_vertices: value,
            ..self
        }
    }

    pub fn max_hedges(self, value: usize) -> Self {
        Self {
            max_hedges: value,
            ..self
        }
    }
}

pub fn hypergraph<V, E>(vertex: V, hedge: E) -> BoxedStrategy<HypergraphCase<V::Value, E::Value>>
where
    V: Strategy + 'static,
    E: Strategy + Clone + 'static,
    V::Value: Clone,
    E::Value: Clone,
{
    hypergraph_with_params(vertex, hedge, StrategyParams::default())
}

/// Generates a hypergraph by adding random vertices and then creating random
/// hyper-edges over them, each with members in random order.
pub fn hypergraph_with_params<V, E>(
    vertex: V,
    hedge: E,
    params: StrategyParams,
) -> BoxedStrategy<HypergraphCase<V::Value, E::Value>>
where
    V: Strategy + 'static,
    E: Strategy + Clone + 'static,
    V::Value: Clone,
    E::Value: Clone,
{
    vec(vertex, 0..=params.max_vertices)
        .prop_flat_map(move |vertices| {
            let n = vertices.len();
            let members = subsequence((0..n).collect::<Vec<_>>(), 0..=n).prop_shuffle();

            (
                Just(vertices),
                vec((hedge.clone(), members), 0..=params.max_hedges),
            )
        })
        .prop_map(|(vertices, hedges)| build(vertices, hedges))
        .boxed()
}

fn build<V, E: Clone>(vertices: Vec<V>, hedges: Vec<(E, Vec<usize>)>) -> HypergraphCase<V, E> {
    let mut graph = Hypergraph::new();

    let ids = vertices
        .into_iter()
        .map(|vertex| graph.add_vertex(vertex))
        .collect::<Vec<_>>();

    let mut members = Vec::with_capacity(hedges.len());
    let mut hedge_weights = Vec::with_capacity(hedges.len());
    let mut links = FxHashSet::default();

    for (weight, indices) in hedges {
        let vertices = indices.into_iter().map(|i| ids[i]).collect::<Vec<_>>();
        let id = graph.link_vertices(vertices.iter().copied(), weight.clone());

        links.extend(vertices.iter().map(|v| (*v, id)));
        members.push(vertices);
        hedge_weights.push(weight);
    }

    HypergraphCase {
        graph,
        members,
        hedge_weights,
        links,
    }
}
