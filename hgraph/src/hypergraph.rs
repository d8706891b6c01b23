//! Weighted hypergraph backed by an incidence matrix.
//!
//! A [`Hypergraph`] stores a weight for every vertex and every hyper-edge
//! together with a boolean incidence matrix, where rows correspond to
//! hyper-edges and columns to vertices. A hyper-edge connects an arbitrary
//! subset of vertices. Vertices and hyper-edges are identified by their
//! creation order and are never removed, so their ids are stable.
//!
//! # Growth
//!
//! Storage is allocated lazily. When the vertex (or hyper-edge) storage is
//! full, its capacity grows to
//! [`INITIAL_CAPACITY`](crate::core::growth::INITIAL_CAPACITY) if it was
//! unallocated and doubles otherwise. The incidence matrix is resized to the
//! new `hedge_capacity` × `vertex_capacity` shape on every such growth.
//!
//! |                    | complexity       |
//! |--------------------|------------------|
//! | add vertex         | _O*(H)_          |
//! | link vertices      | _O*(V + k)_      |
//! | link vertex        | _O(1)_           |
//! | set weight         | _O(1)_           |
//! | incident vertices  | _O(V)_           |
//! | incident hedges    | _O(H)_           |
//! | space              | _O(V × H)_       |
//!
//! * _V_ – vertex capacity
//! * _H_ – hyper-edge capacity
//! * _k_ – number of linked vertices
//! * _O*(..)_ – amortized complexity
//!
//! # Examples
//!
//! ```
//! use hgraph::Hypergraph;
//!
//! let mut graph = Hypergraph::<u32, u32>::with_tag("sample");
//!
//! let a = graph.add_vertex(50);
//! let b = graph.add_vertex(0);
//! let c = graph.add_vertex(5);
//!
//! let e = graph.link_vertices([a, b, c], 240);
//!
//! assert!(graph.is_linked(b, e));
//! assert_eq!(graph.incident_vertices(e).count(), 3);
//! ```

use std::mem;

use crate::{
    common::BitMatrix,
    core::{
        growth,
        id::{HedgeId, IdType, RangeIds, VertexId},
        AddHedgeError, AddHedgeErrorKind, AddVertexError, GrowError, LinkError,
        ReplaceHedgeError, ReplaceVertexError,
    },
};

#[derive(Debug, Clone)]
pub struct Hypergraph<V = u32, E = u32> {
    tag: Option<String>,
    vertices: Vec<V>,
    hedges: Vec<E>,
    // Rows are hyper-edges, columns are vertices. The shape of the matrix is
    // the pair of capacities.
    links: BitMatrix,
}

impl<V, E> Hypergraph<V, E> {
    /// Creates an empty hypergraph without a tag. Nothing is allocated until
    /// the first vertex or hyper-edge is added.
    pub fn new() -> Self {
        Self {
            tag: None,
            vertices: Vec::new(),
            hedges: Vec::new(),
            links: BitMatrix::new(),
        }
    }

    /// Creates an empty hypergraph that owns a copy of `tag`.
    pub fn with_tag(tag: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            ..Self::new()
        }
    }

    /// Creates an empty hypergraph with room for given number of vertices and
    /// hyper-edges.
    ///
    /// # Panics
    ///
    /// Panics if the storage for the requested capacities can't be allocated.
    pub fn with_capacity(vertex_capacity: usize, hedge_capacity: usize) -> Self {
        match Self::try_with_capacity(vertex_capacity, hedge_capacity) {
            Ok(graph) => graph,
            Err(error) => panic!("{error}"),
        }
    }

    pub fn try_with_capacity(
        vertex_capacity: usize,
        hedge_capacity: usize,
    ) -> Result<Self, GrowError> {
        let links = BitMatrix::with_shape(hedge_capacity, vertex_capacity)?;

        let mut vertices = Vec::new();
        growth::reserve_total(&mut vertices, vertex_capacity)?;

        let mut hedges = Vec::new();
        growth::reserve_total(&mut hedges, hedge_capacity)?;

        Ok(Self {
            tag: None,
            vertices,
            hedges,
            links,
        })
    }

    /// Destroys the hypergraph.
    ///
    /// Vertex weights, hyper-edge weights and the incidence matrix are
    /// released in this order. If `release_tag` is `true`, the tag is
    /// released as well and `None` is returned. Otherwise the tag is not
    /// touched and its ownership is handed back to the caller.
    pub fn destroy(self, release_tag: bool) -> Option<String> {
        let Self {
            tag,
            vertices,
            hedges,
            links,
        } = self;

        log::debug!(
            "destroying hypergraph {:?} with {} vertices and {} hyper-edges",
            tag,
            vertices.len(),
            hedges.len()
        );

        drop(vertices);
        drop(hedges);
        drop(links);

        if release_tag {
            drop(tag);
            None
        } else {
            tag
        }
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn hedge_count(&self) -> usize {
        self.hedges.len()
    }

    pub fn vertex_capacity(&self) -> usize {
        self.links.cols()
    }

    pub fn hedge_capacity(&self) -> usize {
        self.links.rows()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.hedges.is_empty()
    }

    pub fn vertex(&self, id: impl Into<VertexId>) -> Option<&V> {
        self.vertices.get(id.into().as_usize())
    }

    pub fn hedge(&self, id: impl Into<HedgeId>) -> Option<&E> {
        self.hedges.get(id.into().as_usize())
    }

    /// Vertex weights indexed by vertex id.
    pub fn vertex_weights(&self) -> &[V] {
        &self.vertices
    }

    /// Hyper-edge weights indexed by hyper-edge id.
    pub fn hedge_weights(&self) -> &[E] {
        &self.hedges
    }

    pub fn vertex_ids(&self) -> RangeIds<VertexId> {
        (0..self.vertex_count()).into()
    }

    pub fn hedge_ids(&self) -> RangeIds<HedgeId> {
        (0..self.hedge_count()).into()
    }

    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &V)> + '_ {
        self.vertex_ids().zip(self.vertices.iter())
    }

    pub fn hedges(&self) -> impl Iterator<Item = (HedgeId, &E)> + '_ {
        self.hedge_ids().zip(self.hedges.iter())
    }

    /// The raw incidence matrix. Its shape is `hedge_capacity` ×
    /// `vertex_capacity`.
    pub fn incidence(&self) -> &BitMatrix {
        &self.links
    }

    /// Returns `true` if the vertex belongs to the hyper-edge. Absent ids are
    /// never linked.
    pub fn is_linked(&self, vertex: impl Into<VertexId>, hedge: impl Into<HedgeId>) -> bool {
        let vertex = vertex.into().as_usize();
        let hedge = hedge.into().as_usize();

        vertex < self.vertex_count()
            && hedge < self.hedge_count()
            && self.links.contains(hedge, vertex)
    }

    /// Vertices of the hyper-edge in ascending order. Empty if the hyper-edge
    /// does not exist.
    pub fn incident_vertices(
        &self,
        hedge: impl Into<HedgeId>,
    ) -> impl Iterator<Item = VertexId> + '_ {
        let hedge = hedge.into().as_usize();
        let vertex_count = self.vertex_count();

        (hedge < self.hedge_count())
            .then(|| self.links.row_ones(hedge, vertex_count))
            .into_iter()
            .flatten()
            .map(VertexId::from_usize)
    }

    /// Hyper-edges containing the vertex in ascending order. Empty if the
    /// vertex does not exist.
    pub fn incident_hedges(
        &self,
        vertex: impl Into<VertexId>,
    ) -> impl Iterator<Item = HedgeId> + '_ {
        let vertex = vertex.into().as_usize();
        let hedge_count = self.hedge_count();

        (vertex < self.vertex_count())
            .then(|| self.links.col_ones(vertex, hedge_count))
            .into_iter()
            .flatten()
            .map(HedgeId::from_usize)
    }

    pub fn try_add_vertex(&mut self, vertex: V) -> Result<VertexId, AddVertexError<V>> {
        if growth::is_full(self.vertex_count(), self.vertex_capacity()) {
            if let Err(error) = self.grow_vertices() {
                return Err(AddVertexError::new(vertex, error.into()));
            }
        }

        let index = self.vertices.len();
        self.vertices.push(vertex);
        Ok(VertexId::from_usize(index))
    }

    /// Adds a vertex and returns its id. Ids are assigned as `0, 1, 2, ...`
    /// in call order.
    ///
    /// # Panics
    ///
    /// Panics if the vertex storage can't grow.
    pub fn add_vertex(&mut self, vertex: V) -> VertexId {
        match self.try_add_vertex(vertex) {
            Ok(id) => id,
            Err(error) => panic!("{error}"),
        }
    }

    pub fn try_set_vertex_weight(
        &mut self,
        id: impl Into<VertexId>,
        vertex: V,
    ) -> Result<V, ReplaceVertexError<V>> {
        match self.vertices.get_mut(id.into().as_usize()) {
            Some(slot) => Ok(mem::replace(slot, vertex)),
            None => Err(ReplaceVertexError(vertex)),
        }
    }

    /// Overwrites the weight of an existing vertex and returns the previous
    /// one.
    ///
    /// # Panics
    ///
    /// Panics if the vertex does not exist.
    pub fn set_vertex_weight(&mut self, id: impl Into<VertexId>, vertex: V) -> V {
        match self.try_set_vertex_weight(id, vertex) {
            Ok(original) => original,
            Err(error) => panic!("{error}"),
        }
    }

    pub fn try_set_hedge_weight(
        &mut self,
        id: impl Into<HedgeId>,
        hedge: E,
    ) -> Result<E, ReplaceHedgeError<E>> {
        match self.hedges.get_mut(id.into().as_usize()) {
            Some(slot) => Ok(mem::replace(slot, hedge)),
            None => Err(ReplaceHedgeError(hedge)),
        }
    }

    /// Overwrites the weight of an existing hyper-edge and returns the
    /// previous one.
    ///
    /// # Panics
    ///
    /// Panics if the hyper-edge does not exist.
    pub fn set_hedge_weight(&mut self, id: impl Into<HedgeId>, hedge: E) -> E {
        match self.try_set_hedge_weight(id, hedge) {
            Ok(original) => original,
            Err(error) => panic!("{error}"),
        }
    }

    pub fn try_link_vertex(
        &mut self,
        vertex: impl Into<VertexId>,
        hedge: impl Into<HedgeId>,
    ) -> Result<(), LinkError> {
        let vertex = vertex.into();
        let hedge = hedge.into();

        if vertex.as_usize() >= self.vertex_count() {
            return Err(LinkError::VertexAbsent(vertex));
        }

        if hedge.as_usize() >= self.hedge_count() {
            return Err(LinkError::HedgeAbsent(hedge));
        }

        self.link_unchecked(vertex, hedge);
        Ok(())
    }

    /// Makes the vertex a member of the hyper-edge. Linking an already
    /// linked pair has no effect.
    ///
    /// # Panics
    ///
    /// Panics if the vertex or the hyper-edge does not exist.
    pub fn link_vertex(&mut self, vertex: impl Into<VertexId>, hedge: impl Into<HedgeId>) {
        if let Err(error) = self.try_link_vertex(vertex, hedge) {
            panic!("{error}");
        }
    }

    pub fn try_link_vertices<I>(
        &mut self,
        vertices: I,
        hedge: E,
    ) -> Result<HedgeId, AddHedgeError<E>>
    where
        I: IntoIterator,
        I::Item: Into<VertexId>,
    {
        let vertices = vertices.into_iter().map(Into::into).collect::<Vec<_>>();

        // Validate everything before the hyper-edge is created so that a
        // failure leaves the graph untouched.
        let vertex_count = self.vertex_count();
        if let Some(absent) = vertices.iter().find(|v| v.as_usize() >= vertex_count) {
            return Err(AddHedgeError::new(
                hedge,
                AddHedgeErrorKind::VertexAbsent(*absent),
            ));
        }

        let id = self.add_hedge(hedge)?;

        for vertex in vertices {
            self.link_unchecked(vertex, id);
        }

        Ok(id)
    }

    /// Creates a new hyper-edge with given weight, links all `vertices` to
    /// it in the given order and returns its id.
    ///
    /// # Panics
    ///
    /// Panics if any of the vertices does not exist or if the hyper-edge
    /// storage can't grow. Nothing is created in that case.
    pub fn link_vertices<I>(&mut self, vertices: I, hedge: E) -> HedgeId
    where
        I: IntoIterator,
        I::Item: Into<VertexId>,
    {
        match self.try_link_vertices(vertices, hedge) {
            Ok(id) => id,
            Err(error) => panic!("{error}"),
        }
    }

    fn add_hedge(&mut self, hedge: E) -> Result<HedgeId, AddHedgeError<E>> {
        if growth::is_full(self.hedge_count(), self.hedge_capacity()) {
            if let Err(error) = self.grow_hedges() {
                return Err(AddHedgeError::new(hedge, error.into()));
            }
        }

        let index = self.hedges.len();
        self.hedges.push(hedge);
        Ok(HedgeId::from_usize(index))
    }

    fn link_unchecked(&mut self, vertex: VertexId, hedge: HedgeId) {
        let already = self.links.insert(hedge.as_usize(), vertex.as_usize());
        log::trace!("link {vertex} -- {hedge} (already linked: {already})");
    }

    fn grow_vertices(&mut self) -> Result<(), GrowError> {
        let prev = self.vertex_capacity();
        let capacity = growth::next_capacity(prev)?;

        // The reservation may succeed and the matrix resize fail afterwards.
        // The spare room in the vector is harmless, the logical capacity is
        // still given by the matrix shape.
        growth::reserve_total(&mut self.vertices, capacity)?;
        self.links.resize(self.hedge_capacity(), capacity)?;

        log::debug!("vertex capacity grown from {prev} to {capacity}");
        Ok(())
    }

    fn grow_hedges(&mut self) -> Result<(), GrowError> {
        let prev = self.hedge_capacity();
        let capacity = growth::next_capacity(prev)?;

        growth::reserve_total(&mut self.hedges, capacity)?;
        self.links.resize(capacity, self.vertex_capacity())?;

        log::debug!("hyper-edge capacity grown from {prev} to {capacity}");
        Ok(())
    }
}

impl<V, E> Default for Hypergraph<V, E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use proptest::prelude::*;

    use super::*;
    use crate::{
        core::growth::INITIAL_CAPACITY,
        infra::{proptest::hypergraph, testing::check_consistency},
    };

    fn sample() -> (Hypergraph, Vec<VertexId>, Vec<HedgeId>) {
        let mut graph = Hypergraph::with_tag("testgraph");

        let v = [50, 0, 0, 5, 10]
            .into_iter()
            .map(|w| graph.add_vertex(w))
            .collect::<Vec<_>>();

        let e0 = graph.link_vertices([v[0], v[1], v[2]], 240);
        let e1 = graph.link_vertices([v[2], v[3]], 180);
        let e2 = graph.link_vertices([v[3], v[4]], 120);

        (graph, v, vec![e0, e1, e2])
    }

    #[test]
    fn new_is_empty_and_unallocated() {
        let graph = Hypergraph::<u32, u32>::new();

        assert!(graph.is_empty());
        assert_eq!(graph.tag(), None);
        assert_eq!(graph.vertex_count(), 0);
        assert_eq!(graph.hedge_count(), 0);
        assert_eq!(graph.vertex_capacity(), 0);
        assert_eq!(graph.hedge_capacity(), 0);
        assert_eq!(graph.incidence().linear_len(), 0);
        check_consistency(&graph).unwrap();
    }

    #[test]
    fn tag_is_owned_copy() {
        let name = String::from("testgraph");
        let graph = Hypergraph::<u32, u32>::with_tag(name.as_str());
        drop(name);

        assert_eq!(graph.tag(), Some("testgraph"));
    }

    #[test]
    fn destroy_hands_back_tag() {
        let graph = Hypergraph::<u32, u32>::with_tag("keep");
        assert_eq!(graph.destroy(false), Some(String::from("keep")));
    }

    #[test]
    fn destroy_releases_tag() {
        let (graph, _, _) = sample();
        assert_eq!(graph.destroy(true), None);
    }

    #[test]
    fn destroy_without_tag() {
        let graph = Hypergraph::<u32, u32>::new();
        assert_eq!(graph.destroy(false), None);
    }

    #[test]
    fn add_vertex_assigns_consecutive_ids() {
        let mut graph = Hypergraph::<u32, u32>::new();

        for i in 0..10usize {
            assert_eq!(graph.add_vertex(i as u32), VertexId::from(i));
        }

        assert_eq!(graph.vertex_count(), 10);
        assert_eq!(graph.vertex_capacity(), INITIAL_CAPACITY);
        assert_eq!(graph.hedge_capacity(), 0);
    }

    #[test]
    fn growth_is_transparent() {
        for n in [0, 1, 127, 128, 129, 1000] {
            let mut graph = Hypergraph::<usize, usize>::new();

            let vertices = (0..n).map(|i| graph.add_vertex(i)).collect::<Vec<_>>();
            let hedges = vertices
                .iter()
                .map(|v| graph.link_vertices([*v], v.as_usize() * 2))
                .collect::<Vec<_>>();

            assert_eq!(graph.vertex_count(), n);
            assert_eq!(graph.hedge_count(), n);

            for (i, (v, e)) in vertices.iter().zip(hedges.iter()).enumerate() {
                assert_eq!(graph.vertex(*v), Some(&i));
                assert_eq!(graph.hedge(*e), Some(&(i * 2)));
                assert_eq!(graph.incident_vertices(*e).collect::<Vec<_>>(), vec![*v]);
                assert_eq!(graph.incident_hedges(*v).collect::<Vec<_>>(), vec![*e]);
            }

            check_consistency(&graph).unwrap();
        }
    }

    #[test]
    fn capacity_doubles() {
        let mut graph = Hypergraph::<u8, u8>::new();

        for _ in 0..=INITIAL_CAPACITY {
            graph.add_vertex(0);
        }

        assert_eq!(graph.vertex_capacity(), 2 * INITIAL_CAPACITY);
        assert_eq!(graph.incidence().cols(), 2 * INITIAL_CAPACITY);
    }

    #[test]
    fn links_survive_vertex_growth() {
        let mut graph = Hypergraph::<u32, u32>::new();

        let a = graph.add_vertex(1);
        let b = graph.add_vertex(2);
        let e = graph.link_vertices([a, b], 3);

        for i in 0..300 {
            graph.add_vertex(i);
        }

        let c = graph.add_vertex(4);
        graph.link_vertex(c, e);

        assert_eq!(graph.incident_vertices(e).collect::<Vec<_>>(), vec![a, b, c]);
        check_consistency(&graph).unwrap();
    }

    #[test]
    fn with_capacity_preallocates() {
        let mut graph = Hypergraph::<u32, u32>::with_capacity(3, 2);

        assert_eq!(graph.vertex_capacity(), 3);
        assert_eq!(graph.hedge_capacity(), 2);

        for i in 0..4 {
            graph.add_vertex(i);
        }

        // Growth continues from the requested capacity.
        assert_eq!(graph.vertex_capacity(), 6);
        check_consistency(&graph).unwrap();
    }

    #[test]
    fn try_with_capacity_overflow() {
        assert_matches!(
            Hypergraph::<u32, u32>::try_with_capacity(usize::MAX, 2),
            Err(GrowError::CapacityOverflow)
        );
    }

    #[test]
    fn link_vertices_returns_increasing_ids() {
        let (graph, v, e) = sample();

        assert_eq!(e, vec![HedgeId::from(0usize), HedgeId::from(1usize), HedgeId::from(2usize)]);

        assert!(graph.is_linked(v[0], e[0]));
        assert!(graph.is_linked(v[2], e[0]));
        assert!(graph.is_linked(v[2], e[1]));
        assert!(!graph.is_linked(v[0], e[1]));
        assert!(!graph.is_linked(v[4], e[0]));

        assert_eq!(graph.incident_hedges(v[2]).collect::<Vec<_>>(), vec![e[0], e[1]]);
        assert_eq!(graph.incident_hedges(v[3]).collect::<Vec<_>>(), vec![e[1], e[2]]);
    }

    #[test]
    fn link_vertex_is_idempotent() {
        let (mut graph, v, e) = sample();
        let before = graph.incidence().clone();

        graph.link_vertex(v[0], e[0]);
        graph.link_vertex(v[0], e[0]);
        assert_eq!(graph.incidence(), &before);

        graph.link_vertex(v[4], e[0]);
        graph.link_vertex(v[4], e[0]);
        assert_eq!(graph.incidence().count_ones(), before.count_ones() + 1);
    }

    #[test]
    fn link_vertices_with_duplicates() {
        let mut graph = Hypergraph::<u32, u32>::new();
        let a = graph.add_vertex(0);

        let e = graph.link_vertices([a, a, a], 1);

        assert_eq!(graph.incident_vertices(e).count(), 1);
    }

    #[test]
    fn link_vertices_empty_set() {
        let mut graph = Hypergraph::<u32, u32>::new();

        let e = graph.link_vertices(std::iter::empty::<VertexId>(), 7);

        assert_eq!(graph.hedge(e), Some(&7));
        assert_eq!(graph.incident_vertices(e).count(), 0);
    }

    #[test]
    fn link_vertices_accepts_plain_indices() {
        let mut graph = Hypergraph::<u32, u32>::new();
        graph.add_vertex(1);
        graph.add_vertex(2);

        let indices: [usize; 2] = [1, 0];
        let e = graph.link_vertices(indices, 3);

        assert!(graph.is_linked(VertexId::from(0usize), e));
        assert!(graph.is_linked(VertexId::from(1usize), e));
    }

    #[test]
    fn link_vertices_rejects_absent_vertex() {
        let (mut graph, v, _) = sample();
        let absent = VertexId::from(graph.vertex_count());

        let result = graph.try_link_vertices([v[0], absent], 99);

        assert_matches!(
            result,
            Err(AddHedgeError { attr: 99, kind: AddHedgeErrorKind::VertexAbsent(id) }) if id == absent
        );

        // Nothing was created.
        assert_eq!(graph.hedge_count(), 3);
        check_consistency(&graph).unwrap();
    }

    #[test]
    #[should_panic(expected = "vertex V5 does not exist")]
    fn link_vertices_panics_on_absent_vertex() {
        let (mut graph, _, _) = sample();
        let indices: [usize; 1] = [5];
        graph.link_vertices(indices, 0);
    }

    #[test]
    fn link_vertex_rejects_absent_ids() {
        let (mut graph, v, e) = sample();

        assert_eq!(
            graph.try_link_vertex(VertexId::from(5usize), e[0]),
            Err(LinkError::VertexAbsent(VertexId::from(5usize)))
        );
        assert_eq!(
            graph.try_link_vertex(v[0], HedgeId::from(3usize)),
            Err(LinkError::HedgeAbsent(HedgeId::from(3usize)))
        );
    }

    #[test]
    fn link_vertex_on_empty_graph() {
        let mut graph = Hypergraph::<u32, u32>::new();
        let a = graph.add_vertex(0);

        assert_eq!(
            graph.try_link_vertex(a, HedgeId::from(0usize)),
            Err(LinkError::HedgeAbsent(HedgeId::from(0usize)))
        );
    }

    #[test]
    fn set_weights() {
        let (mut graph, v, e) = sample();

        assert_eq!(graph.set_vertex_weight(v[1], 7), 0);
        assert_eq!(graph.vertex(v[1]), Some(&7));

        assert_eq!(graph.set_hedge_weight(e[2], 121), 120);
        assert_eq!(graph.hedge(e[2]), Some(&121));

        // No structural effect.
        assert_eq!(graph.incident_vertices(e[2]).count(), 2);
    }

    #[test]
    fn set_weight_out_of_range() {
        let (mut graph, _, _) = sample();

        assert_eq!(
            graph.try_set_vertex_weight(VertexId::from(graph.vertex_count()), 1),
            Err(ReplaceVertexError(1))
        );
        assert_eq!(
            graph.try_set_hedge_weight(HedgeId::from(graph.hedge_count()), 2),
            Err(ReplaceHedgeError(2))
        );
        assert_eq!(graph.vertex_weights(), &[50, 0, 0, 5, 10]);
        assert_eq!(graph.hedge_weights(), &[240, 180, 120]);
    }

    #[test]
    #[should_panic(expected = "vertex does not exist")]
    fn set_vertex_weight_panics_out_of_range() {
        let (mut graph, _, _) = sample();
        graph.set_vertex_weight(VertexId::from(5usize), 0);
    }

    #[test]
    fn queries_on_absent_ids() {
        let (graph, _, _) = sample();

        assert_eq!(graph.vertex(VertexId::from(5usize)), None);
        assert_eq!(graph.hedge(HedgeId::from(3usize)), None);
        assert!(!graph.is_linked(VertexId::from(5usize), HedgeId::from(0usize)));
        assert_eq!(graph.incident_vertices(HedgeId::from(3usize)).count(), 0);
        assert_eq!(graph.incident_hedges(VertexId::from(5usize)).count(), 0);
    }

    #[test]
    fn iterators() {
        let (graph, _, _) = sample();

        let vertices = graph.vertices().map(|(id, w)| (id.as_usize(), *w)).collect::<Vec<_>>();
        assert_eq!(vertices, vec![(0, 50), (1, 0), (2, 0), (3, 5), (4, 10)]);

        let hedges = graph.hedges().map(|(id, w)| (id.as_usize(), *w)).collect::<Vec<_>>();
        assert_eq!(hedges, vec![(0, 240), (1, 180), (2, 120)]);
    }

    proptest! {
        #[test]
        fn proptest_links_match_model(case in hypergraph(any::<u16>(), any::<u16>())) {
            let graph = &case.graph;

            check_consistency(graph).unwrap();

            for v in graph.vertex_ids() {
                for e in graph.hedge_ids() {
                    prop_assert_eq!(graph.is_linked(v, e), case.links.contains(&(v, e)));
                }
            }

            prop_assert_eq!(graph.incidence().count_ones(), case.links.len());
        }

        #[test]
        fn proptest_hedge_ids_follow_creation_order(case in hypergraph(any::<u8>(), any::<u8>())) {
            let graph = &case.graph;

            prop_assert_eq!(graph.hedge_count(), case.members.len());

            for (i, (id, weight)) in graph.hedges().enumerate() {
                prop_assert_eq!(id.as_usize(), i);
                prop_assert_eq!(*weight, case.hedge_weights[i]);
            }
        }

        #[test]
        fn proptest_relinking_is_idempotent(case in hypergraph(any::<()>(), any::<()>())) {
            let mut graph = case.graph;
            let before = graph.incidence().clone();

            for (e, members) in case.members.iter().enumerate() {
                for v in members {
                    graph.link_vertex(*v, HedgeId::from(e));
                }
            }

            prop_assert_eq!(graph.incidence(), &before);
        }
    }
}
