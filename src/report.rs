use std::fmt::{Display, Formatter};
use num_traits::Float;

/// A plain text summary of a spanning tree over the distinct colours of an image.
///
/// # Examples
/// ```
///use palette_mst::MstReport;
///
///let report = MstReport::new(4, 765.0_f64);
///assert_eq!(
///    "Number of Distinct colors: 4\nSum of MST is: 765",
///    report.to_string()
///);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MstReport<T> {
    pub n_distinct_colors: usize,
    pub total_weight: T,
}

impl<T: Float> MstReport<T> {
    pub fn new(n_distinct_colors: usize, total_weight: T) -> Self {
        MstReport { n_distinct_colors, total_weight }
    }
}

impl<T: Float> Display for MstReport<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let total_weight = self.total_weight.to_f64().unwrap_or(f64::NAN);
        writeln!(f, "Number of Distinct colors: {}", self.n_distinct_colors)?;
        write!(f, "Sum of MST is: {total_weight}")
    }
}
