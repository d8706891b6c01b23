//! Capacity growth policy shared by the vertex and hyper-edge storages.
//!
//! Capacity grows geometrically: an unallocated storage starts at
//! [`INITIAL_CAPACITY`], an allocated one doubles. Appending is therefore
//! amortized _O(1)_ (not counting the incidence matrix, which is resized
//! together with the storages).

use std::mem;

use super::error::GrowError;

/// Capacity of a storage after its first growth.
pub const INITIAL_CAPACITY: usize = 128;

/// Returns the capacity that follows `capacity`.
///
/// Doubling that would overflow `usize` is reported as
/// [`GrowError::CapacityOverflow`] instead of wrapping around.
pub fn next_capacity(capacity: usize) -> Result<usize, GrowError> {
    if capacity == 0 {
        Ok(INITIAL_CAPACITY)
    } else {
        capacity.checked_mul(2).ok_or(GrowError::CapacityOverflow)
    }
}

/// Returns `true` if a storage with given `len` and `capacity` is full and
/// must grow before the next append.
#[inline]
pub fn is_full(len: usize, capacity: usize) -> bool {
    len == capacity
}

/// Reserves room in `vec` so that it can hold `capacity` items in total.
///
/// Reservation failure is reported as [`GrowError`] and leaves `vec`
/// unchanged.
pub fn reserve_total<T>(vec: &mut Vec<T>, capacity: usize) -> Result<(), GrowError> {
    let additional = capacity.saturating_sub(vec.len());
    vec.try_reserve_exact(additional).map_err(|error| {
        log::debug!("reserving {additional} slots failed: {error}");

        let fits = capacity
            .checked_mul(mem::size_of::<T>())
            .is_some_and(|bytes| bytes <= isize::MAX as usize);

        if fits {
            GrowError::OutOfMemory
        } else {
            GrowError::CapacityOverflow
        }
    })
}
