use std::collections::HashMap;
use crate::{ColorSample, Grid};

/// The vertices of the distinct colour graph: every colour present in a grid exactly once,
/// indexed in the order it was first seen during a row-major scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistinctColors {
    colors: Vec<ColorSample>,
    indices: HashMap<ColorSample, usize>,
}

impl DistinctColors {
    /// Scans the grid once and assigns each unseen colour the next index, starting from 0.
    ///
    /// # Examples
    /// ```
    ///use palette_mst::{ColorSample, DistinctColors, Grid};
    ///
    ///let red = ColorSample::new(255, 0, 0);
    ///let blue = ColorSample::new(0, 0, 255);
    ///let grid = Grid::from_rows(vec![vec![blue, red], vec![red, blue]]).unwrap();
    ///let vertices = DistinctColors::extract(&grid);
    ///assert_eq!(&[blue, red], vertices.as_slice());
    ///assert_eq!(Some(1), vertices.index_of(&red));
    /// ```
    pub fn extract(grid: &Grid<ColorSample>) -> Self {
        let mut colors = Vec::new();
        let mut indices = HashMap::new();
        for color in grid.iter() {
            indices.entry(*color).or_insert_with(|| {
                colors.push(*color);
                colors.len() - 1
            });
        }
        DistinctColors { colors, indices }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ColorSample> {
        self.colors.get(index)
    }

    pub fn index_of(&self, color: &ColorSample) -> Option<usize> {
        self.indices.get(color).copied()
    }

    pub fn as_slice(&self) -> &[ColorSample] {
        &self.colors
    }

    pub fn into_vec(self) -> Vec<ColorSample> {
        self.colors
    }
}
