use std::ops::{Index, IndexMut};
use crate::PaletteError;

/// A fixed size two dimensional grid of samples, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    height: usize,
    width: usize,
    data: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// Creates a grid of the given size with every cell set to `fill`.
    ///
    /// # Panics
    /// * If `height * width` overflows `usize`.
    pub fn new(height: usize, width: usize, fill: T) -> Self {
        Grid { height, width, data: vec![fill; cell_count(height, width)] }
    }
}

impl<T> Grid<T> {
    /// Wraps a row-major buffer.
    ///
    /// # Returns
    /// * The grid, or `PaletteError::InvalidDimensions` if the buffer length does not equal
    ///   `height * width`.
    pub fn from_vec(height: usize, width: usize, data: Vec<T>) -> Result<Self, PaletteError> {
        let expected = height.checked_mul(width).ok_or_else(|| {
            PaletteError::InvalidDimensions(format!("{height}x{width} overflows usize"))
        })?;
        if data.len() != expected {
            return Err(PaletteError::InvalidDimensions(format!(
                "{height}x{width} grid needs {expected} samples, but {} were given",
                data.len()
            )));
        }
        Ok(Grid { height, width, data })
    }

    /// Builds a grid from a list of rows. All rows must have the same length.
    ///
    /// # Examples
    /// ```
    ///use palette_mst::{ColorSample, Grid};
    ///
    ///let black = ColorSample::new(0, 0, 0);
    ///let white = ColorSample::new(255, 255, 255);
    ///let grid = Grid::from_rows(vec![vec![black, white], vec![white, black]]).unwrap();
    ///assert_eq!((2, 2), (grid.height(), grid.width()));
    ///assert_eq!(white, grid[(0, 1)]);
    /// ```
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, PaletteError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(height * width);
        for (n, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(PaletteError::InvalidDimensions(format!(
                    "0th row has {width} samples, but {n}th has {}",
                    row.len()
                )));
            }
            data.extend(row);
        }
        Ok(Grid { height, width, data })
    }

    /// Builds a grid by calling `f(row, col)` for every cell in row-major order.
    ///
    /// # Panics
    /// * If `height * width` overflows `usize`.
    pub fn from_fn<F>(height: usize, width: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let mut data = Vec::with_capacity(cell_count(height, width));
        for row in 0..height {
            for col in 0..width {
                data.push(f(row, col));
            }
        }
        Grid { height, width, data }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.height && col < self.width {
            self.data.get(row * self.width + col)
        } else {
            None
        }
    }

    pub fn row(&self, row: usize) -> &[T] {
        &self.data[row * self.width..(row + 1) * self.width]
    }

    /// Iterates over the samples in row-major order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn map<U, F: FnMut(&T) -> U>(&self, f: F) -> Grid<U> {
        Grid { height: self.height, width: self.width, data: self.data.iter().map(f).collect() }
    }
}

fn cell_count(height: usize, width: usize) -> usize {
    match height.checked_mul(width) {
        Some(count) => count,
        None => panic!("{height}x{width} grid overflows usize"),
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(row < self.height && col < self.width, "({row}, {col}) is outside the grid");
        &self.data[row * self.width + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(row < self.height && col < self.width, "({row}, {col}) is outside the grid");
        &mut self.data[row * self.width + col]
    }
}
