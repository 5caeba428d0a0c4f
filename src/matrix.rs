/*!
# Growable Dense Matrices

This module provides [`Matrix`], a dense 2D store over a single flat buffer.

- A contiguous `data: Vec<T>` stores all cells row-major, i.e. cell `(row, column)`
  lives at offset `row * columns + column`.
- `rows` and `columns` are both non-zero and `data.len() == rows * columns`.

These invariants are established by every constructor and kept by every mutation, so a
`Matrix` is always valid by construction.

### Growth
[`Matrix::add_rows`], [`Matrix::add_columns`] and [`Matrix::expand`] grow the matrix in
place. Every existing cell keeps its `(row, column)` coordinate and every new cell is
`T::default()`. Adding rows keeps the stride and simply appends to the buffer, adding
columns changes the stride and therefore relocates every cell into a fresh buffer.

Growth is atomic: the complete new buffer is reserved before anything is touched, so a
failed growth leaves the matrix exactly as it was.
*/

use std::ops::{Index, IndexMut};

use log::trace;

use crate::error::{GraphError, GraphResult};

/// Dense row-major matrix with bounds-checked access and in-place growth.
///
/// # Examples
/// ```
/// use wgraphs::matrix::Matrix;
///
/// let mut m: Matrix<i32> = Matrix::new(2, 2).unwrap();
/// m.update(0, 1, 42).unwrap();
///
/// m.expand(1).unwrap();
/// assert_eq!(m.shape(), (3, 3));
/// assert_eq!(m.at(0, 1), Ok(&42));
/// assert_eq!(m.at(2, 2), Ok(&0));
/// assert!(m.at(3, 0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    columns: usize,
}

impl<T> Matrix<T> {
    /// Constructs a matrix from row-major `data`.
    ///
    /// # Errors
    /// - [`GraphError::InvalidDimensions`] if `rows == 0` or `columns == 0`
    /// - [`GraphError::LengthMismatch`] if `data.len() != rows * columns`
    ///
    /// # Examples
    /// ```
    /// use wgraphs::matrix::Matrix;
    ///
    /// let m = Matrix::from_vec(2, 3, vec![0, 1, 2, 10, 11, 12]).unwrap();
    /// assert_eq!(m[(1, 2)], 12);
    /// assert!(Matrix::from_vec(2, 2, vec![1, 2, 3]).is_err());
    /// ```
    pub fn from_vec(rows: usize, columns: usize, data: Vec<T>) -> GraphResult<Self> {
        let len = Self::checked_len(rows, columns)?;
        if data.len() != len {
            return Err(GraphError::LengthMismatch {
                expected: len,
                actual: data.len(),
            });
        }

        Ok(Self {
            data,
            rows,
            columns,
        })
    }

    /// Returns the number of rows
    #[inline(always)]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns
    #[inline(always)]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Returns `(rows, columns)`
    #[inline(always)]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    /// Returns the total number of cells
    #[allow(clippy::len_without_is_empty)]
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns the number of bytes a single cell occupies
    pub fn element_size(&self) -> usize {
        std::mem::size_of::<T>()
    }

    /// Returns *true* if the matrix has as many rows as columns
    pub fn is_square(&self) -> bool {
        self.rows == self.columns
    }

    /// Returns a reference to cell `(row, column)`.
    ///
    /// # Errors
    /// Returns [`GraphError::CellOutOfBounds`] if `row >= rows` or `column >= columns`.
    pub fn at(&self, row: usize, column: usize) -> GraphResult<&T> {
        let offset = self.offset(row, column)?;
        Ok(&self.data[offset])
    }

    /// Returns a reference to cell `(row, column)` or `None` if it is out of bounds
    pub fn get(&self, row: usize, column: usize) -> Option<&T> {
        self.offset(row, column)
            .ok()
            .map(|offset| &self.data[offset])
    }

    /// Returns a mutable reference to cell `(row, column)` or `None` if it is out of bounds
    pub fn get_mut(&mut self, row: usize, column: usize) -> Option<&mut T> {
        match self.offset(row, column) {
            Ok(offset) => Some(&mut self.data[offset]),
            Err(_) => None,
        }
    }

    /// Overwrites cell `(row, column)` with `value`.
    ///
    /// # Errors
    /// Returns [`GraphError::CellOutOfBounds`] if `row >= rows` or `column >= columns`.
    pub fn update(&mut self, row: usize, column: usize, value: T) -> GraphResult<()> {
        let offset = self.offset(row, column)?;
        self.data[offset] = value;
        Ok(())
    }

    /// Returns the cells of `row` as a slice
    pub fn row(&self, row: usize) -> Option<&[T]> {
        (row < self.rows).then(|| &self.data[row * self.columns..(row + 1) * self.columns])
    }

    /// Returns the cells of `row` as a mutable slice
    pub fn row_mut(&mut self, row: usize) -> Option<&mut [T]> {
        if row >= self.rows {
            return None;
        }
        let columns = self.columns;
        Some(&mut self.data[row * columns..(row + 1) * columns])
    }

    /// Returns an iterator over all rows as slices
    pub fn rows_iter(&self) -> impl Iterator<Item = &[T]> + '_ {
        self.data.chunks_exact(self.columns)
    }

    /// Returns a reference to the complete row-major buffer
    #[inline(always)]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consumes the matrix and returns its row-major buffer
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    fn offset(&self, row: usize, column: usize) -> GraphResult<usize> {
        if row >= self.rows || column >= self.columns {
            return Err(GraphError::CellOutOfBounds {
                row,
                column,
                rows: self.rows,
                columns: self.columns,
            });
        }

        Ok(row * self.columns + column)
    }

    fn checked_len(rows: usize, columns: usize) -> GraphResult<usize> {
        if rows == 0 || columns == 0 {
            return Err(GraphError::InvalidDimensions { rows, columns });
        }

        rows.checked_mul(columns)
            .ok_or(GraphError::CapacityOverflow)
    }
}

impl<T: Clone + Default> Matrix<T> {
    /// Creates a `rows x columns` matrix with every cell set to `T::default()`.
    ///
    /// # Errors
    /// - [`GraphError::InvalidDimensions`] if `rows == 0` or `columns == 0`
    /// - [`GraphError::CapacityOverflow`] / [`GraphError::Allocation`] if the buffer cannot be provided
    pub fn new(rows: usize, columns: usize) -> GraphResult<Self> {
        let len = Self::checked_len(rows, columns)?;

        let mut data = Vec::new();
        data.try_reserve_exact(len)?;
        data.resize(len, T::default());

        Ok(Self {
            data,
            rows,
            columns,
        })
    }

    /// Creates a deep copy, reporting allocation failure instead of aborting
    pub fn try_clone(&self) -> GraphResult<Self> {
        let mut data = Vec::new();
        data.try_reserve_exact(self.data.len())?;
        data.extend_from_slice(&self.data);

        Ok(Self {
            data,
            rows: self.rows,
            columns: self.columns,
        })
    }

    /// Writes `value` into `(row, column)` as well as `(column, row)`.
    /// Both cells are checked before either one is written.
    ///
    /// # Errors
    /// Returns [`GraphError::CellOutOfBounds`] if any of the two cells is out of bounds.
    pub fn update_symmetric(&mut self, row: usize, column: usize, value: T) -> GraphResult<()> {
        let first = self.offset(row, column)?;
        let second = self.offset(column, row)?;

        self.data[first] = value.clone();
        self.data[second] = value;
        Ok(())
    }

    /// Appends `extra_rows` default-filled rows.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidNewRows`] if `extra_rows == 0`; growth errors leave
    /// the matrix untouched.
    pub fn add_rows(&mut self, extra_rows: usize) -> GraphResult<()> {
        if extra_rows == 0 {
            return Err(GraphError::InvalidNewRows);
        }

        let rows = self
            .rows
            .checked_add(extra_rows)
            .ok_or(GraphError::CapacityOverflow)?;
        self.grow_to(rows, self.columns)
    }

    /// Appends `extra_columns` default-filled columns.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidNewColumns`] if `extra_columns == 0`; growth errors
    /// leave the matrix untouched.
    pub fn add_columns(&mut self, extra_columns: usize) -> GraphResult<()> {
        if extra_columns == 0 {
            return Err(GraphError::InvalidNewColumns);
        }

        let columns = self
            .columns
            .checked_add(extra_columns)
            .ok_or(GraphError::CapacityOverflow)?;
        self.grow_to(self.rows, columns)
    }

    /// Grows the matrix by `extra` rows *and* `extra` columns in a single step.
    /// A square matrix stays square.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidNewRows`] if `extra == 0`; growth errors leave the
    /// matrix untouched (there is no state where only the rows have grown).
    pub fn expand(&mut self, extra: usize) -> GraphResult<()> {
        if extra == 0 {
            return Err(GraphError::InvalidNewRows);
        }

        let rows = self
            .rows
            .checked_add(extra)
            .ok_or(GraphError::CapacityOverflow)?;
        let columns = self
            .columns
            .checked_add(extra)
            .ok_or(GraphError::CapacityOverflow)?;
        self.grow_to(rows, columns)
    }

    /// Resizes to `rows x columns` with `rows >= self.rows` and `columns >= self.columns`.
    fn grow_to(&mut self, rows: usize, columns: usize) -> GraphResult<()> {
        debug_assert!(rows >= self.rows && columns >= self.columns);
        let len = Self::checked_len(rows, columns)?;

        if columns == self.columns {
            self.data.try_reserve_exact(len - self.data.len())?;
            self.data.resize(len, T::default());
        } else {
            let mut data = Vec::new();
            data.try_reserve_exact(len)?;

            let new_cells = columns - self.columns;
            for row in self.data.chunks_exact(self.columns) {
                data.extend_from_slice(row);
                data.extend(std::iter::repeat_n(T::default(), new_cells));
            }
            data.resize(len, T::default());

            self.data = data;
        }

        trace!(
            "matrix grown from {}x{} to {rows}x{columns}",
            self.rows, self.columns
        );

        self.rows = rows;
        self.columns = columns;
        Ok(())
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    /// ** Panics if the cell is out of bounds **
    fn index(&self, (row, column): (usize, usize)) -> &Self::Output {
        match self.offset(row, column) {
            Ok(offset) => &self.data[offset],
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    /// ** Panics if the cell is out of bounds **
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut Self::Output {
        match self.offset(row, column) {
            Ok(offset) => &mut self.data[offset],
            Err(err) => panic!("{err}"),
        }
    }
}
