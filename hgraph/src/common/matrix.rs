use std::fmt;

use bitvec::{order::Lsb0, slice::BitSlice, vec::BitVec};

use crate::core::error::GrowError;

/// Returns the number of bits needed for a `rows` × `cols` matrix.
///
/// Shapes that cannot be represented by a bit vector are reported as
/// [`GrowError::CapacityOverflow`].
pub fn linear_len(rows: usize, cols: usize) -> Result<usize, GrowError> {
    rows.checked_mul(cols)
        .filter(|len| *len <= BitSlice::<usize, Lsb0>::MAX_BITS)
        .ok_or(GrowError::CapacityOverflow)
}

#[inline]
pub fn index(row: usize, col: usize, cols: usize) -> usize {
    row * cols + col
}

/// Rectangular boolean matrix stored row by row in a single bit vector, the
/// stride being the column count.
///
/// The matrix only ever grows. Growing the row dimension appends zeroed rows
/// at the end; growing the column dimension rebuilds the storage with the new
/// stride, extending every existing row with zeroes.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct BitMatrix {
    bits: BitVec,
    rows: usize,
    cols: usize,
}

impl BitMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_shape(rows: usize, cols: usize) -> Result<Self, GrowError> {
        let len = linear_len(rows, cols)?;
        Ok(Self {
            bits: BitVec::repeat(false, len),
            rows,
            cols,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Grows the matrix to at least `rows` × `cols`.
    ///
    /// The new shape is validated before anything changes, so on error the
    /// matrix keeps its previous shape and content.
    pub fn resize(&mut self, rows: usize, cols: usize) -> Result<(), GrowError> {
        let rows = rows.max(self.rows);
        let cols = cols.max(self.cols);

        if rows == self.rows && cols == self.cols {
            // This routine is only for growing.
            return Ok(());
        }

        let len = linear_len(rows, cols)?;

        if cols == self.cols {
            // Just add the bottom rectangle.
            self.bits.resize(len, false);
        } else {
            let mut next = BitVec::with_capacity(len);

            for row in 0..self.rows {
                next.extend_from_bitslice(self.row(row));
                // New columns at the end of the row.
                next.resize(next.len() + cols - self.cols, false);
            }

            // Add the bottom rectangle.
            next.resize(len, false);
            self.bits = next;
        }

        log::debug!(
            "incidence matrix resized from {}x{} to {}x{}",
            self.rows,
            self.cols,
            rows,
            cols
        );

        self.rows = rows;
        self.cols = cols;

        Ok(())
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols && self.bits[index(row, col, self.cols)]
    }

    /// Sets the cell and returns its previous value.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside of the matrix shape.
    pub fn insert(&mut self, row: usize, col: usize) -> bool {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) is outside of {}x{} matrix",
            self.rows,
            self.cols
        );

        self.bits.replace(index(row, col, self.cols), true)
    }

    pub fn row(&self, row: usize) -> &BitSlice {
        let start = index(row, 0, self.cols);
        &self.bits[start..start + self.cols]
    }

    /// Columns set in `row`, restricted to the first `bound` columns.
    pub fn row_ones(&self, row: usize, bound: usize) -> impl Iterator<Item = usize> + '_ {
        self.row(row)[..bound.min(self.cols)].iter_ones()
    }

    /// Rows set in `col`, restricted to the first `bound` rows.
    pub fn col_ones(&self, col: usize, bound: usize) -> impl Iterator<Item = usize> + '_ {
        (0..bound.min(self.rows)).filter(move |row| self.contains(*row, col))
    }

    pub fn count_ones(&self) -> usize {
        self.bits.count_ones()
    }

    /// Number of set cells outside of the leading `rows` × `cols` block.
    pub fn count_ones_outside(&self, rows: usize, cols: usize) -> usize {
        (0..self.rows)
            .map(|row| {
                if row >= rows {
                    self.row(row).count_ones()
                } else {
                    self.row(row)[cols.min(self.cols)..].count_ones()
                }
            })
            .sum()
    }

    pub fn linear_len(&self) -> usize {
        self.bits.len()
    }
}

impl fmt::Debug for BitMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            writeln!(f, "BitMatrix {{")?;
            for row in 0..self.rows {
                write!(f, "    ")?;
                for (col, bit) in self.row(row).iter().by_vals().enumerate() {
                    if col > 0 {
                        write!(f, " ")?;
                    }

                    write!(f, "{}", bit as usize)?;
                }
                writeln!(f)?;
            }
            writeln!(f, "}}")
        } else {
            f.debug_struct("BitMatrix")
                .field("rows", &self.rows)
                .field("cols", &self.cols)
                .field("ones", &self.count_ones())
                .finish()
        }
    }
}
