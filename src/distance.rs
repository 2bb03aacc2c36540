use num_traits::Float;
use crate::color::{channel_to_float, ColorSample};

/// The weight of the edge between two colours in the distinct colour graph: the Euclidean
/// distance between them in RGB space.
///
/// # Examples
/// ```
///use palette_mst::{edge_weight, ColorSample};
///
///let black = ColorSample::new(0, 0, 0);
///let red = ColorSample::new(255, 0, 0);
///assert_eq!(255.0, edge_weight::<f64>(&black, &red));
///assert_eq!(0.0, edge_weight::<f64>(&red, &red));
/// ```
pub fn edge_weight<T: Float>(a: &ColorSample, b: &ColorSample) -> T {
    euclidean_distance(&to_float_channels(a), &to_float_channels(b))
}

pub(crate) fn euclidean_distance<T: Float>(a: &[T], b: &[T]) -> T {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (*x - *y) * (*x - *y))
        .fold(T::zero(), std::ops::Add::add)
        .sqrt()
}

fn to_float_channels<T: Float>(color: &ColorSample) -> [T; 3] {
    color.channels().map(channel_to_float)
}
