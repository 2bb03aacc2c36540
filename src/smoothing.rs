use num_traits::Float;
use crate::color::ColorSampleF;
use crate::validation::{validate_grid, validate_sigma};
use crate::{ColorSample, Grid, PaletteError};

#[cfg(feature = "parallel")]
pub(crate) mod parallel;
pub(crate) mod serial;

/// The largest mask size `GaussianKernel::new` accepts.
pub const MAX_FILTER_SIZE: usize = 4095;

/// A normalised one dimensional Gaussian mask.
#[derive(Debug, Clone, PartialEq)]
pub struct GaussianKernel<T> {
    weights: Vec<T>,
}

impl<T: Float> GaussianKernel<T> {
    /// Builds the mask `exp(-y² / 2σ²)` for offsets `y` in `[-size/2, size/2]`, scaled so the
    /// weights sum to one. An even size is increased by one.
    ///
    /// # Returns
    /// * The kernel, or `PaletteError::InvalidKernel` if sigma is not a positive finite number
    ///   or the size is larger than `MAX_FILTER_SIZE`.
    ///
    /// # Examples
    /// ```
    ///use palette_mst::GaussianKernel;
    ///
    ///let kernel = GaussianKernel::new(4, 1.0_f64).unwrap();
    ///assert_eq!(5, kernel.size());
    ///let total: f64 = kernel.weights().iter().sum();
    ///assert!((total - 1.0).abs() < 1e-12);
    /// ```
    pub fn new(size: usize, sigma: T) -> Result<Self, PaletteError> {
        validate_sigma(sigma)?;
        if size > MAX_FILTER_SIZE {
            return Err(PaletteError::InvalidKernel(format!(
                "mask size {size} exceeds the maximum of {MAX_FILTER_SIZE}"
            )));
        }
        let size = if size % 2 == 0 { size + 1 } else { size };
        let two_sigma_sq = (T::one() + T::one()) * sigma * sigma;
        if two_sigma_sq <= T::zero() {
            return Err(PaletteError::InvalidKernel(String::from(
                "sigma is too small to build a Gaussian mask",
            )));
        }

        let half_size = size / 2;
        let mut weights = Vec::with_capacity(size);
        for tap in 0..size {
            let offset = offset_to_float::<T>(tap, half_size)?;
            weights.push((-(offset * offset) / two_sigma_sq).exp());
        }
        let total = weights.iter().fold(T::zero(), |acc, &w| acc + w);
        weights.iter_mut().for_each(|w| *w = *w / total);

        Ok(GaussianKernel { weights })
    }

    pub fn size(&self) -> usize {
        self.weights.len()
    }

    pub fn half_size(&self) -> usize {
        self.weights.len() / 2
    }

    pub fn weights(&self) -> &[T] {
        &self.weights
    }

    /// The weighted vertical sum around `(row, col)`. Taps that fall outside the grid are
    /// skipped and the remaining weights are not rescaled.
    pub(crate) fn vertical_tap_sum(
        &self,
        grid: &Grid<ColorSample>,
        row: usize,
        col: usize,
    ) -> ColorSampleF<T> {
        let mut sum = ColorSampleF::zero();
        for (tap, weight) in self.weights.iter().enumerate() {
            if let Some(source_row) = self.source_index(row, tap, grid.height()) {
                sum.add_weighted(*weight, &grid[(source_row, col)]);
            }
        }
        sum
    }

    /// The weighted horizontal sum around `(row, col)` of the vertically filtered grid,
    /// truncated back to whole channel values.
    pub(crate) fn horizontal_tap_sum(
        &self,
        vertical: &Grid<ColorSampleF<T>>,
        row: usize,
        col: usize,
    ) -> ColorSample {
        let mut sum = ColorSampleF::zero();
        for (tap, weight) in self.weights.iter().enumerate() {
            if let Some(source_col) = self.source_index(col, tap, vertical.width()) {
                sum.add_weighted_f(*weight, &vertical[(row, source_col)]);
            }
        }
        sum.truncate()
    }

    fn source_index(&self, centre: usize, tap: usize, bound: usize) -> Option<usize> {
        (centre + tap)
            .checked_sub(self.half_size())
            .filter(|&index| index < bound)
    }
}

fn offset_to_float<T: Float>(tap: usize, half_size: usize) -> Result<T, PaletteError> {
    let (tap, half_size) = match (T::from(tap), T::from(half_size)) {
        (Some(tap), Some(half_size)) => (tap, half_size),
        _ => {
            return Err(PaletteError::InvalidKernel(format!(
                "mask of size {} cannot be represented",
                half_size * 2 + 1
            )))
        }
    };
    Ok(tap - half_size)
}

/// Applies a separable Gaussian filter to a grid: first down the columns into a floating point
/// intermediate, then along the rows of that intermediate.
///
/// # Parameters
/// * `grid` - the colours to smooth.
/// * `filter_size` - the mask size. Even sizes are increased by one.
/// * `sigma` - the spread of the Gaussian. Must be positive.
///
/// # Returns
/// * A grid of the same dimensions, or an error if the grid is empty or sigma is invalid.
///
/// # Examples
/// ```
///use palette_mst::{gaussian_smooth, ColorSample, Grid};
///
///let grey = ColorSample::new(128, 128, 128);
///let grid = Grid::new(1, 1, grey);
/// // A single pixel only sees the centre tap of the mask
///let smoothed = gaussian_smooth(&grid, 3, 1.0_f64).unwrap();
///assert!(smoothed[(0, 0)].red < 128);
/// ```
pub fn gaussian_smooth<T: Float>(
    grid: &Grid<ColorSample>,
    filter_size: usize,
    sigma: T,
) -> Result<Grid<ColorSample>, PaletteError> {
    validate_grid(grid)?;
    let kernel = GaussianKernel::new(filter_size, sigma)?;
    let filter = serial::SmoothingFilter::new(grid, &kernel);
    Ok(filter.smooth())
}

/// Applies the same filter as `gaussian_smooth`, processing rows in parallel. The output is
/// identical to the serial version.
#[cfg(feature = "parallel")]
pub fn gaussian_smooth_par<T: Float + Send + Sync>(
    grid: &Grid<ColorSample>,
    filter_size: usize,
    sigma: T,
) -> Result<Grid<ColorSample>, PaletteError> {
    validate_grid(grid)?;
    let kernel = GaussianKernel::new(filter_size, sigma)?;
    let filter = parallel::SmoothingFilterPar::new(grid, &kernel);
    Ok(filter.smooth())
}
