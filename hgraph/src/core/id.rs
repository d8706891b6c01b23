//! Types used for identifying vertices and hyper-edges in a hypergraph.
//!
//! Both kinds of ids are plain creation-order indices wrapped in distinct
//! types, so that a vertex id can never be passed where a hyper-edge id is
//! expected. Ids are never reused or renumbered.

use std::{fmt, hash::Hash};

/// A unique identification of a vertex or hyper-edge in a hypergraph.
///
/// Conceptually the id is an `usize` index into a contiguous array. The
/// backing integer is `u64` so that ids have the same size on all platforms.
pub trait IdType: Copy + Ord + Hash + fmt::Debug + From<usize> + Into<usize> {
    /// Converts an id into the corresponding `u64`.
    fn as_bits(&self) -> u64;

    /// Converts an `u64` into the corresponding id.
    fn from_bits(bits: u64) -> Self;

    /// Converts an id into the corresponding `usize`.
    fn as_usize(&self) -> usize {
        self.as_bits() as usize
    }

    /// Converts an `usize` into the corresponding id.
    fn from_usize(id: usize) -> Self {
        Self::from_bits(id as u64)
    }
}

/// Id of a vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(u64);

/// Id of a hyper-edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HedgeId(u64);

macro_rules! impl_id_type {
    ($id_ty:ident, $prefix:literal) => {
        impl IdType for $id_ty {
            #[inline]
            fn as_bits(&self) -> u64 {
                self.0
            }

            #[inline]
            fn from_bits(bits: u64) -> Self {
                Self(bits)
            }
        }

        impl From<usize> for $id_ty {
            fn from(index: usize) -> Self {
                Self::from_usize(index)
            }
        }

        impl From<$id_ty> for usize {
            fn from(id: $id_ty) -> Self {
                id.as_usize()
            }
        }

        impl From<$id_ty> for u64 {
            fn from(id: $id_ty) -> Self {
                id.as_bits()
            }
        }

        impl fmt::Display for $id_ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "{}"), self.0)
            }
        }
    };
}

impl_id_type!(VertexId, "V");
impl_id_type!(HedgeId, "E");

/// Iterator over a contiguous range of ids.
#[derive(Debug, Clone)]
pub struct RangeIds<I> {
    range: std::ops::Range<usize>,
    ty: std::marker::PhantomData<fn() -> I>,
}

impl<I> From<std::ops::Range<usize>> for RangeIds<I> {
    fn from(range: std::ops::Range<usize>) -> Self {
        Self {
            range,
            ty: std::marker::PhantomData,
        }
    }
}

impl<I: IdType> Iterator for RangeIds<I> {
    type Item = I;

    fn next(&mut self) -> Option<Self::Item> {
        self.range.next().map(I::from_usize)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl<I: IdType> DoubleEndedIterator for RangeIds<I> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.range.next_back().map(I::from_usize)
    }
}

impl<I: IdType> ExactSizeIterator for RangeIds<I> {}
