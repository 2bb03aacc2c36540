use super::GaussianKernel;
use crate::{ColorSample, Grid};
use num_traits::Float;

pub(crate) struct SmoothingFilter<'a, T> {
    grid: &'a Grid<ColorSample>,
    kernel: &'a GaussianKernel<T>,
}

impl<'a, T: Float> SmoothingFilter<'a, T> {
    pub(crate) fn new(grid: &'a Grid<ColorSample>, kernel: &'a GaussianKernel<T>) -> Self {
        Self { grid, kernel }
    }

    pub(crate) fn smooth(&self) -> Grid<ColorSample> {
        let (height, width) = (self.grid.height(), self.grid.width());
        let vertical = Grid::from_fn(height, width, |row, col| {
            self.kernel.vertical_tap_sum(self.grid, row, col)
        });
        Grid::from_fn(height, width, |row, col| {
            self.kernel.horizontal_tap_sum(&vertical, row, col)
        })
    }
}
