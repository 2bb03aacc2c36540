#[cfg(feature = "parallel")]
use crate::prims::prims_min_spanning_tree_par;
#[cfg(feature = "parallel")]
use crate::smoothing::parallel::SmoothingFilterPar;
use crate::prims::prims_min_spanning_tree;
use crate::smoothing::serial::SmoothingFilter;
use crate::validation::DataValidator;
use crate::{
    ColorSample, DistinctColors, GaussianKernel, Grid, MinSpanningTree, MstParams, PaletteError,
};
use log::debug;
use num_traits::Float;
use std::borrow::Cow;

/// The distinct colour graph of an image. Smooths the image, collects its distinct colours as
/// vertices and grows a minimum spanning tree over the complete graph between them.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorGraph<'a, T> {
    grid: &'a Grid<ColorSample>,
    params: MstParams,
    _precision: std::marker::PhantomData<T>,
}

impl<'a, T: Float + Send + Sync> ColorGraph<'a, T> {
    /// Creates a colour graph pipeline using a custom parameter configuration.
    ///
    /// # Parameters
    /// * `grid` - a reference to the image colours.
    /// * `params` - the parameter configuration.
    ///
    /// # Returns
    /// * The colour graph pipeline instance.
    ///
    /// # Examples
    /// ```
    ///use palette_mst::{ColorGraph, ColorSample, Grid, MstParams};
    ///
    ///let grid = Grid::new(4, 4, ColorSample::new(10, 20, 30));
    ///let params = MstParams::builder()
    ///    .filter_size(3)
    ///    .sigma(0.8)
    ///    .build();
    ///let graph: ColorGraph<f64> = ColorGraph::new(&grid, params);
    /// ```
    pub fn new(grid: &'a Grid<ColorSample>, params: MstParams) -> Self {
        ColorGraph { grid, params, _precision: std::marker::PhantomData }
    }

    /// Creates a colour graph pipeline using the default parameters.
    ///
    /// # Parameters
    /// * `grid` - a reference to the image colours.
    ///
    /// # Returns
    /// * The colour graph pipeline instance.
    pub fn default_params(grid: &'a Grid<ColorSample>) -> Self {
        ColorGraph::new(grid, MstParams::default())
    }

    /// The parameters this pipeline smooths with.
    pub fn params(&self) -> &MstParams {
        &self.params
    }

    /// Runs the whole pipeline: smoothing (if enabled), distinct colour extraction and Prim's
    /// algorithm rooted at the first colour found.
    ///
    /// # Returns
    /// * A result that, if successful, contains the spanning tree. An error is returned if the
    ///   grid has no pixels or the smoothing parameters are invalid.
    ///
    /// # Examples
    /// ```
    ///use palette_mst::{ColorGraph, ColorSample, Grid, MstParams};
    ///
    ///let grid = Grid::from_rows(vec![
    ///    vec![ColorSample::new(0, 0, 0), ColorSample::new(255, 0, 0)],
    ///    vec![ColorSample::new(0, 255, 0), ColorSample::new(0, 0, 255)],
    ///]).unwrap();
    ///let params = MstParams::builder().smoothing(false).build();
    ///let mst = ColorGraph::<f64>::new(&grid, params).min_spanning_tree().unwrap();
    ///assert_eq!(4, mst.n_vertices());
    ///assert_eq!(765.0, mst.total_weight());
    /// ```
    #[cfg(feature = "serial")]
    pub fn min_spanning_tree(&self) -> Result<MinSpanningTree<T>, PaletteError> {
        let validator = DataValidator::new(self.grid, &self.params);
        validator.validate_input_data()?;
        let smoothed = self.smooth_if_enabled(|grid, kernel| {
            SmoothingFilter::new(grid, kernel).smooth()
        })?;
        let vertices = self.extract_vertices(&smoothed);
        prims_min_spanning_tree(vertices.as_slice())
    }

    /// Runs the whole pipeline with the smoothing passes and the per vertex scans of Prim's
    /// algorithm spread over a thread pool. Not recommended for small images.
    ///
    /// # Returns
    /// * The same tree as `min_spanning_tree`.
    #[cfg(feature = "parallel")]
    pub fn min_spanning_tree_par(&self) -> Result<MinSpanningTree<T>, PaletteError> {
        let validator = DataValidator::new(self.grid, &self.params);
        validator.validate_input_data()?;
        let smoothed = self.smooth_if_enabled(|grid, kernel| {
            SmoothingFilterPar::new(grid, kernel).smooth()
        })?;
        let vertices = self.extract_vertices(&smoothed);
        prims_min_spanning_tree_par(vertices.as_slice())
    }

    /// The grid as the graph sees it: smoothed with the configured mask, or the original grid
    /// if smoothing is disabled.
    pub fn smoothed_grid(&self) -> Result<Grid<ColorSample>, PaletteError> {
        let validator = DataValidator::new(self.grid, &self.params);
        validator.validate_input_data()?;
        let smoothed = self.smooth_if_enabled(|grid, kernel| {
            SmoothingFilter::new(grid, kernel).smooth()
        })?;
        Ok(smoothed.into_owned())
    }

    fn smooth_if_enabled<F>(&self, smooth: F) -> Result<Cow<'a, Grid<ColorSample>>, PaletteError>
    where
        F: Fn(&Grid<ColorSample>, &GaussianKernel<T>) -> Grid<ColorSample>,
    {
        if !self.params.smoothing {
            return Ok(Cow::Borrowed(self.grid));
        }
        let sigma = T::from(self.params.sigma).ok_or_else(|| {
            PaletteError::InvalidKernel(format!(
                "sigma {} cannot be represented at this precision",
                self.params.sigma
            ))
        })?;
        let kernel = GaussianKernel::new(self.params.filter_size, sigma)?;
        debug!(
            "Smoothing {}x{} grid with a {} tap mask, sigma {}",
            self.grid.height(),
            self.grid.width(),
            kernel.size(),
            self.params.sigma
        );
        Ok(Cow::Owned(smooth(self.grid, &kernel)))
    }

    fn extract_vertices(&self, grid: &Grid<ColorSample>) -> DistinctColors {
        let vertices = DistinctColors::extract(grid);
        debug!("Found {} distinct colours", vertices.len());
        vertices
    }
}
