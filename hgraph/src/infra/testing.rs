use thiserror::Error;

use crate::hypergraph::Hypergraph;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConsistencyCheckError {
    #[error("vertex count ({0}) exceeds vertex capacity ({1})")]
    VertexCapacityExceeded(usize, usize),
    #[error("hyper-edge count ({0}) exceeds hyper-edge capacity ({1})")]
    HedgeCapacityExceeded(usize, usize),
    #[error("incidence matrix length ({0}) does not match its shape ({1})")]
    MatrixLenMismatch(usize, usize),
    #[error("vertex ids iterator count ({0}) is not equal to vertex count ({1})")]
    VertexIdsVertexCountMismatch(usize, usize),
    #[error("hyper-edge ids iterator count ({0}) is not equal to hyper-edge count ({1})")]
    HedgeIdsHedgeCountMismatch(usize, usize),
    #[error("vertices iterator count ({0}) is not equal to vertex count ({1})")]
    VerticesVertexCountMismatch(usize, usize),
    #[error("hyper-edges iterator count ({0}) is not equal to hyper-edge count ({1})")]
    HedgesHedgeCountMismatch(usize, usize),
    #[error("{0} links are outside of existing vertices and hyper-edges")]
    StrayLinks(usize),
    #[error("sum of hyper-edge sizes ({0}) is not equal to sum of vertex degrees ({1})")]
    IncidenceSumMismatch(usize, usize),
    #[error("sum of hyper-edge sizes ({0}) is not equal to the number of links ({1})")]
    LinkCountMismatch(usize, usize),
}

/// Checks structural invariants of the hypergraph.
pub fn check_consistency<V, E>(graph: &Hypergraph<V, E>) -> Result<(), ConsistencyCheckError> {
    fn equal<F>(actual: usize, expected: usize, error: F) -> Result<(), ConsistencyCheckError>
    where
        F: FnOnce(usize, usize) -> ConsistencyCheckError,
    {
        if actual == expected {
            Ok(())
        } else {
            Err(error(actual, expected))
        }
    }

    fn at_most<F>(actual: usize, bound: usize, error: F) -> Result<(), ConsistencyCheckError>
    where
        F: FnOnce(usize, usize) -> ConsistencyCheckError,
    {
        if actual <= bound {
            Ok(())
        } else {
            Err(error(actual, bound))
        }
    }

    let vertex_count = graph.vertex_count();
    let hedge_count = graph.hedge_count();
    let links = graph.incidence();

    at_most(
        vertex_count,
        graph.vertex_capacity(),
        ConsistencyCheckError::VertexCapacityExceeded,
    )?;
    at_most(
        hedge_count,
        graph.hedge_capacity(),
        ConsistencyCheckError::HedgeCapacityExceeded,
    )?;
    equal(
        links.linear_len(),
        links.rows() * links.cols(),
        ConsistencyCheckError::MatrixLenMismatch,
    )?;

    equal(
        graph.vertex_ids().count(),
        vertex_count,
        ConsistencyCheckError::VertexIdsVertexCountMismatch,
    )?;
    equal(
        graph.hedge_ids().count(),
        hedge_count,
        ConsistencyCheckError::HedgeIdsHedgeCountMismatch,
    )?;
    equal(
        graph.vertices().count(),
        vertex_count,
        ConsistencyCheckError::VerticesVertexCountMismatch,
    )?;
    equal(
        graph.hedges().count(),
        hedge_count,
        ConsistencyCheckError::HedgesHedgeCountMismatch,
    )?;

    let stray = links.count_ones_outside(hedge_count, vertex_count);
    if stray > 0 {
        return Err(ConsistencyCheckError::StrayLinks(stray));
    }

    let size_sum = graph
        .hedge_ids()
        .map(|id| graph.incident_vertices(id).count())
        .sum::<usize>();

    let deg_sum = graph
        .vertex_ids()
        .map(|id| graph.incident_hedges(id).count())
        .sum::<usize>();

    equal(size_sum, deg_sum, ConsistencyCheckError::IncidenceSumMismatch)?;
    equal(
        size_sum,
        links.count_ones(),
        ConsistencyCheckError::LinkCountMismatch,
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_consistent() {
        check_consistency(&Hypergraph::<(), ()>::new()).unwrap();
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            ConsistencyCheckError::StrayLinks(3).to_string(),
            "3 links are outside of existing vertices and hyper-edges"
        );
        assert_eq!(
            ConsistencyCheckError::VertexCapacityExceeded(5, 4).to_string(),
            "vertex count (5) exceeds vertex capacity (4)"
        );
    }
}
