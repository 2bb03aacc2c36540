#![cfg(feature = "parallel")]
use super::GaussianKernel;
use crate::color::ColorSampleF;
use crate::{ColorSample, Grid};
use num_traits::Float;
use rayon::prelude::*;

pub(crate) struct SmoothingFilterPar<'a, T> {
    grid: &'a Grid<ColorSample>,
    kernel: &'a GaussianKernel<T>,
}

impl<'a, T: Float + Send + Sync> SmoothingFilterPar<'a, T> {
    pub(crate) fn new(grid: &'a Grid<ColorSample>, kernel: &'a GaussianKernel<T>) -> Self {
        Self { grid, kernel }
    }

    pub(crate) fn smooth(&self) -> Grid<ColorSample> {
        let (height, width) = (self.grid.height(), self.grid.width());

        let mut vertical = Grid::new(height, width, ColorSampleF::zero());
        vertical
            .as_mut_slice()
            .par_chunks_mut(width)
            .enumerate()
            .for_each(|(row, out)| {
                for (col, sample) in out.iter_mut().enumerate() {
                    *sample = self.kernel.vertical_tap_sum(self.grid, row, col);
                }
            });

        let mut smoothed = Grid::new(height, width, ColorSample::default());
        smoothed
            .as_mut_slice()
            .par_chunks_mut(width)
            .enumerate()
            .for_each(|(row, out)| {
                for (col, sample) in out.iter_mut().enumerate() {
                    *sample = self.kernel.horizontal_tap_sum(&vertical, row, col);
                }
            });
        smoothed
    }
}
