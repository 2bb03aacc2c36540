use num_traits::Float;
use crate::{ColorSample, Grid, MstParams, PaletteError};

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct DataValidator<'a> {
    grid: &'a Grid<ColorSample>,
    params: &'a MstParams,
}

impl<'a> DataValidator<'a> {
    pub(crate) fn new(grid: &'a Grid<ColorSample>, params: &'a MstParams) -> Self {
        Self { grid, params }
    }

    pub(crate) fn validate_input_data(&self) -> Result<(), PaletteError> {
        validate_grid(self.grid)?;
        if self.params.smoothing {
            validate_sigma(self.params.sigma)?;
        }
        Ok(())
    }
}

pub(crate) fn validate_grid<T>(grid: &Grid<T>) -> Result<(), PaletteError> {
    if grid.height() == 0 || grid.width() == 0 {
        return Err(PaletteError::InvalidDimensions(format!(
            "Grid must have at least one row and one column, got {}x{}",
            grid.height(),
            grid.width()
        )));
    }
    Ok(())
}

pub(crate) fn validate_sigma<T: Float>(sigma: T) -> Result<(), PaletteError> {
    if !sigma.is_finite() || sigma <= T::zero() {
        let sigma = sigma.to_f64().unwrap_or(f64::NAN);
        return Err(PaletteError::InvalidKernel(format!(
            "sigma must be a positive finite number, got {sigma}"
        )));
    }
    Ok(())
}
