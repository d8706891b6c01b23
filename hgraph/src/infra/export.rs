//! Serialization of a hypergraph into a textual graph description.
//!
//! Every incidence pair (vertex, hyper-edge) becomes one undirected edge
//! statement between a vertex node and a hyper-edge node:
//!
//! ```text
//! graph {
//!     V0_50 -- E0_240;
//!     V1_0 -- E0_240;
//! }
//! ```
//!
//! Node names are the id followed by the weight rendered by a label strategy
//! (see [`label`]). Statements are grouped by hyper-edge in ascending order
//! and by vertex in ascending order within a hyper-edge. Hyper-edges without
//! any vertex produce no output. The labels are not escaped.

pub mod label;

use std::{
    fmt::Display,
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use num_traits::AsPrimitive;

use crate::{core::id::IdType, hypergraph::Hypergraph};

/// File name used by [`file_name`] when the graph has no usable tag.
pub const DEFAULT_FILE_NAME: &str = "hgraph.dot";

pub trait Export<G> {
    fn export<W: Write>(&self, graph: &G, out: &mut W) -> io::Result<()>;
}

pub struct Dot<V, E> {
    get_vertex_label: Box<dyn Fn(&V) -> String>,
    get_hedge_label: Box<dyn Fn(&E) -> String>,
}

impl<V, E> Dot<V, E> {
    pub fn new<FV, FE>(get_vertex_label: FV, get_hedge_label: FE) -> Self
    where
        FV: Fn(&V) -> String + 'static,
        FE: Fn(&E) -> String + 'static,
    {
        Self {
            get_vertex_label: Box::new(get_vertex_label),
            get_hedge_label: Box::new(get_hedge_label),
        }
    }

    pub fn to_string(&self, graph: &Hypergraph<V, E>) -> String {
        let mut out = Vec::new();
        self.export(graph, &mut out)
            .expect("writing to vec does not fail");

        String::from_utf8(out).expect("dot format is text format")
    }

    /// Writes the description into a file at `path`.
    ///
    /// The whole description is rendered in memory first and then written by
    /// a single call, so a failure while rendering never produces a file.
    pub fn export_to_path<P: AsRef<Path>>(
        &self,
        graph: &Hypergraph<V, E>,
        path: P,
    ) -> io::Result<()> {
        let mut out = Vec::new();
        self.export(graph, &mut out)?;
        fs::write(path.as_ref(), out)?;

        log::debug!("hypergraph description written to {}", path.as_ref().display());
        Ok(())
    }
}

impl<V: Display + 'static, E: Display + 'static> Dot<V, E> {
    pub fn with_display() -> Self {
        Self::new(label::display, label::display)
    }
}

impl<V: AsPrimitive<u64>, E: AsPrimitive<u64>> Dot<V, E> {
    /// Renders weights as unsigned integers.
    pub fn unsigned() -> Self {
        Self::new(label::unsigned, label::unsigned)
    }
}

impl<V: AsPrimitive<f32>, E: AsPrimitive<f32>> Dot<V, E> {
    /// Renders weights as single precision floats with six decimals.
    pub fn float() -> Self {
        Self::new(label::float, label::float)
    }
}

impl<V: AsPrimitive<f64>, E: AsPrimitive<f64>> Dot<V, E> {
    /// Renders weights as double precision floats with six decimals.
    pub fn double() -> Self {
        Self::new(label::double, label::double)
    }
}

impl<V, E> Export<Hypergraph<V, E>> for Dot<V, E> {
    fn export<W: Write>(&self, graph: &Hypergraph<V, E>, out: &mut W) -> io::Result<()> {
        let vertex_weights = graph.vertex_weights();
        let mut statements = 0;

        out.write_all(b"graph {\n")?;

        for (hedge, weight) in graph.hedges() {
            let mut vertices = graph.incident_vertices(hedge).peekable();

            if vertices.peek().is_none() {
                continue;
            }

            let hedge_label = (self.get_hedge_label)(weight);

            for vertex in vertices {
                let vertex_label = (self.get_vertex_label)(&vertex_weights[vertex.as_usize()]);
                writeln!(out, "\t{vertex}_{vertex_label} -- {hedge}_{hedge_label};")?;
                statements += 1;
            }
        }

        out.write_all(b"}\n")?;

        log::debug!(
            "exported hypergraph {:?} as {statements} incidence statements",
            graph.tag()
        );

        Ok(())
    }
}

/// Suggested file name for the description of `graph`: its tag with `.dot`
/// extension, or [`DEFAULT_FILE_NAME`] if the graph has no tag or the tag is
/// not a plain file name.
pub fn file_name<V, E>(graph: &Hypergraph<V, E>) -> PathBuf {
    match graph.tag() {
        Some(tag) if is_plain_file_name(tag) => PathBuf::from(format!("{tag}.dot")),
        _ => PathBuf::from(DEFAULT_FILE_NAME),
    }
}

fn is_plain_file_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(|c: char| c == '/' || c == '\\' || c.is_control())
}
