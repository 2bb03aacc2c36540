use log::warn;

// Defaults for parameters
const FILTER_SIZE_DEFAULT: usize = 5;
const SIGMA_DEFAULT: f64 = 1.0;
const SMOOTHING_DEFAULT: bool = true;

/// A wrapper around the parameters of the colour graph pipeline.
/// Only use if you want to tune the smoothing step. Otherwise use
/// `ColorGraph::default_params()` to run with the defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct MstParams {
    pub(crate) filter_size: usize,
    pub(crate) sigma: f64,
    pub(crate) smoothing: bool,
}

/// Builder object to set custom parameters.
#[derive(Debug, Clone, Default)]
pub struct ParamBuilder {
    filter_size: Option<usize>,
    sigma: Option<f64>,
    smoothing: Option<bool>,
}

impl MstParams {
    /// Enters the builder pattern, allowing custom parameters to be set using various setter
    /// methods.
    ///
    /// # Returns
    /// * the parameter configuration builder
    pub fn builder() -> ParamBuilder {
        ParamBuilder::default()
    }

    pub fn filter_size(&self) -> usize {
        self.filter_size
    }

    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    pub fn smoothing(&self) -> bool {
        self.smoothing
    }
}

impl Default for MstParams {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl ParamBuilder {
    /// Sets the size of the Gaussian mask used to smooth the image before the distinct colours
    /// are extracted. The mask must be odd sized, so an even size is increased by one.
    /// Defaults to 5.
    ///
    /// # Parameters
    /// * filter_size - the number of taps in the one dimensional mask
    ///
    /// # Returns
    /// * the parameter configuration builder
    pub fn filter_size(mut self, filter_size: usize) -> ParamBuilder {
        self.filter_size = Some(ParamBuilder::make_odd(filter_size));
        self
    }

    /// Sets the spread of the Gaussian mask. Larger values blur more, merging near identical
    /// colours and so reducing the number of vertices in the graph. Must be positive.
    /// Defaults to 1.0.
    ///
    /// # Parameters
    /// * sigma - the standard deviation of the Gaussian
    ///
    /// # Returns
    /// * the parameter configuration builder
    pub fn sigma(mut self, sigma: f64) -> ParamBuilder {
        self.sigma = Some(sigma);
        self
    }

    /// Sets whether to smooth the image before building the graph. With smoothing disabled the
    /// graph is built from the raw pixel colours. Defaults to true.
    ///
    /// # Parameters
    /// * smoothing - whether to apply the Gaussian filter
    ///
    /// # Returns
    /// * the parameter configuration builder
    pub fn smoothing(mut self, smoothing: bool) -> ParamBuilder {
        self.smoothing = Some(smoothing);
        self
    }

    /// Finishes the building of the parameter configuration. A call to this method is required
    /// to exit the builder pattern and complete the construction of the parameters.
    ///
    /// # Returns
    /// * The completed pipeline parameter configuration.
    pub fn build(self) -> MstParams {
        MstParams {
            filter_size: self.filter_size.unwrap_or(FILTER_SIZE_DEFAULT),
            sigma: self.sigma.unwrap_or(SIGMA_DEFAULT),
            smoothing: self.smoothing.unwrap_or(SMOOTHING_DEFAULT),
        }
    }

    fn make_odd(filter_size: usize) -> usize {
        if filter_size % 2 == 0 {
            let odd_size = filter_size + 1;
            warn!("filter_size ({filter_size}) must be odd. Set to {odd_size}.");
            odd_size
        } else {
            filter_size
        }
    }
}
