//! Minimum spanning trees over the distinct colours of an image, the first step of MST based
//! colour quantisation. Generic over floating point numeric types.
//!
//! The pipeline runs in four stages:
//!  1. The image is smoothed with a separable Gaussian filter, merging colours that differ only
//!     by noise;
//!  2. Every distinct colour left in the image becomes a vertex of a graph, indexed in the order
//!     it is first seen scanning the rows from top to bottom;
//!  3. The graph is complete: every pair of colours is joined by an edge weighted by their
//!     Euclidean distance in RGB space. Edges are computed on demand and never stored; and
//!  4. Prim's algorithm, driven by an indexed binary min heap with decrease-key, grows the
//!     minimum spanning tree from the first colour found.
//!
//! Cutting the tree into clusters to build a palette is left to the caller.
//!
//! # Examples
//! ```
//!use palette_mst::{ColorGraph, ColorSample, Grid, MstParams};
//!
//!let black = ColorSample::new(0, 0, 0);
//!let red = ColorSample::new(255, 0, 0);
//!let green = ColorSample::new(0, 255, 0);
//!let blue = ColorSample::new(0, 0, 255);
//!let grid = Grid::from_rows(vec![vec![black, red], vec![green, blue]]).unwrap();
//!
//!let params = MstParams::builder().smoothing(false).build();
//!let graph: ColorGraph<f64> = ColorGraph::new(&grid, params);
//!let mst = graph.min_spanning_tree().unwrap();
//!assert_eq!(
//!    "Number of Distinct colors: 4\nSum of MST is: 765",
//!    mst.report().to_string()
//!);
//! ```
//!
//! # References
//! * [Prim, R. C. Shortest connection networks and some generalizations.](https://doi.org/10.1002/j.1538-7305.1957.tb01515.x)

pub use crate::color::{ColorSample, ColorSampleF};
pub use crate::color_graph::ColorGraph;
pub use crate::data_wrappers::{HeapNode, MstEdge, MstEntry};
pub use crate::distance::edge_weight;
pub use crate::distinct_colors::DistinctColors;
pub use crate::error::PaletteError;
pub use crate::grid::Grid;
pub use crate::hyper_parameters::{MstParams, ParamBuilder};
pub use crate::image_io::{grid_to_rgb_image, open_grid, save_grid};
pub use crate::min_heap::IndexedMinHeap;
#[cfg(feature = "parallel")]
pub use crate::prims::prims_min_spanning_tree_par;
pub use crate::prims::{prims_min_spanning_tree, MinSpanningTree};
pub use crate::report::MstReport;
#[cfg(feature = "parallel")]
pub use crate::smoothing::gaussian_smooth_par;
pub use crate::smoothing::{gaussian_smooth, GaussianKernel, MAX_FILTER_SIZE};

mod color;
mod color_graph;
mod data_wrappers;
mod distance;
mod distinct_colors;
mod error;
mod grid;
mod hyper_parameters;
mod image_io;
mod min_heap;
mod prims;
mod report;
mod smoothing;
mod validation;
