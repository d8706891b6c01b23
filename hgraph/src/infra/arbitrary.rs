use std::fmt;

use arbitrary::Arbitrary;

use crate::{
    core::{
        error::{AddHedgeError, AddVertexError, LinkError, ReplaceHedgeError, ReplaceVertexError},
        id::{HedgeId, IdType, VertexId},
    },
    hypergraph::Hypergraph,
};

#[derive(Debug, Arbitrary, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Index(pub usize);

impl Index {
    /// Maps the index into `0..=m`. The upper bound is included on purpose so
    /// that one-past-the-end ids are generated too.
    pub fn get(&self, m: usize) -> usize {
        self.0 % (m + 1)
    }

    pub fn map(self, m: usize) -> Index {
        Index(self.get(m))
    }
}

#[derive(Debug, Arbitrary, Clone)]
pub enum MutOp<V, E> {
    AddVertex(V),
    SetVertexWeight(Index, V),
    SetHedgeWeight(Index, E),
    LinkVertex(Index, Index),
    LinkVertices(Vec<Index>, E),
}

#[derive(Debug, PartialEq)]
pub enum MutOpResult<V, E> {
    AddVertex(Result<VertexId, AddVertexError<V>>),
    SetVertexWeight(Result<V, ReplaceVertexError<V>>),
    SetHedgeWeight(Result<E, ReplaceHedgeError<E>>),
    LinkVertex(Result<(), LinkError>),
    LinkVertices(Result<HedgeId, AddHedgeError<E>>),
}

impl<V, E> MutOp<V, E> {
    pub fn apply(self, graph: &mut Hypergraph<V, E>) -> MutOpResult<V, E> {
        let n = graph.vertex_count();
        let m = graph.hedge_count();

        match self {
            MutOp::AddVertex(vertex) => MutOpResult::AddVertex(graph.try_add_vertex(vertex)),
            MutOp::SetVertexWeight(index, vertex) => MutOpResult::SetVertexWeight(
                graph.try_set_vertex_weight(VertexId::from_usize(index.get(n)), vertex),
            ),
            MutOp::SetHedgeWeight(index, hedge) => MutOpResult::SetHedgeWeight(
                graph.try_set_hedge_weight(HedgeId::from_usize(index.get(m)), hedge),
            ),
            MutOp::LinkVertex(vertex, hedge) => MutOpResult::LinkVertex(graph.try_link_vertex(
                VertexId::from_usize(vertex.get(n)),
                HedgeId::from_usize(hedge.get(m)),
            )),
            MutOp::LinkVertices(vertices, hedge) => {
                let vertices = vertices
                    .into_iter()
                    .map(|index| VertexId::from_usize(index.get(n)));
                MutOpResult::LinkVertices(graph.try_link_vertices(vertices, hedge))
            }
        }
    }
}

#[derive(Arbitrary)]
pub struct MutOpsSeq<V, E>(pub Vec<MutOp<V, E>>);

impl<V, E> IntoIterator for MutOpsSeq<V, E> {
    type Item = MutOp<V, E>;
    type IntoIter = std::vec::IntoIter<MutOp<V, E>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<V, E> MutOpsSeq<V, E> {
    /// Applies the operations and prints equivalent code, with indices
    /// already mapped, for reproducing a failure in a unit test.
    pub fn replay(self, graph: &mut Hypergraph<V, E>)
    where
        V: fmt::Debug,
        E: fmt::Debug,
    {
        println!("let mut graph = Hypergraph::new();");
        println!();

        for op in self {
            let n = graph.vertex_count();
            let m = graph.hedge_count();

            let op = match op {
                MutOp::SetVertexWeight(index, vertex) => {
                    MutOp::SetVertexWeight(index.map(n), vertex)
                }
                MutOp::SetHedgeWeight(index, hedge) => MutOp::SetHedgeWeight(index.map(m), hedge),
                MutOp::LinkVertex(vertex, hedge) => {
                    MutOp::LinkVertex(vertex.map(n), hedge.map(m))
                }
                MutOp::LinkVertices(vertices, hedge) => MutOp::LinkVertices(
                    vertices.into_iter().map(|index| index.map(n)).collect(),
                    hedge,
                ),
                op => op,
            };

            match &op {
                MutOp::AddVertex(vertex) => println!("graph.try_add_vertex({vertex:?});"),
                MutOp::SetVertexWeight(index, vertex) => {
                    println!("graph.try_set_vertex_weight({}usize, {vertex:?});", index.0)
                }
                MutOp::SetHedgeWeight(index, hedge) => {
                    println!("graph.try_set_hedge_weight({}usize, {hedge:?});", index.0)
                }
                MutOp::LinkVertex(vertex, hedge) => {
                    println!(
                        "graph.try_link_vertex({}usize, {}usize);",
                        vertex.0, hedge.0
                    )
                }
                MutOp::LinkVertices(vertices, hedge) => {
                    let indices = vertices
                        .iter()
                        .map(|index| format!("{}usize", index.0))
                        .collect::<Vec<_>>();
                    println!(
                        "graph.try_link_vertices([{}], {hedge:?});",
                        indices.join(", ")
                    )
                }
            }

            op.apply(graph);
        }

        println!();
        println!("check_consistency(&graph).unwrap();");
    }
}

impl<V: fmt::Debug, E: fmt::Debug> fmt::Debug for MutOpsSeq<V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "MutOpsSeq(vec![")?;

        for op in self.0.iter() {
            writeln!(f, "    MutOp::{:?},", op)?;
        }

        writeln!(f, "])")?;
        writeln!(f, ".replay(&mut graph);")?;
        writeln!(f)?;
        writeln!(f, "// use `cargo test fuzz_replay_mut_ops_seq`")
    }
}
