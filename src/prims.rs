use log::debug;
use num_traits::Float;
use crate::data_wrappers::{HeapNode, MstEdge, MstEntry};
use crate::report::MstReport;
use crate::{edge_weight, ColorSample, IndexedMinHeap, PaletteError};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// The vertex every tree is grown from: the first colour found by the extractor.
pub(crate) const ROOT_VERTEX: usize = 0;

/// The minimum spanning tree of a distinct colour graph.
#[derive(Debug, Clone, PartialEq)]
pub struct MinSpanningTree<T> {
    vertices: Vec<ColorSample>,
    entries: Vec<MstEntry<T>>,
    total_weight: T,
}

impl<T: Float> MinSpanningTree<T> {
    /// The colours the tree spans, indexed by vertex.
    pub fn vertices(&self) -> &[ColorSample] {
        &self.vertices
    }

    pub fn n_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn root(&self) -> usize {
        ROOT_VERTEX
    }

    /// One entry per vertex. The root entry has no parent and an infinite weight.
    pub fn entries(&self) -> &[MstEntry<T>] {
        &self.entries
    }

    pub fn parent(&self, vertex: usize) -> Option<usize> {
        self.entries.get(vertex).and_then(|entry| entry.parent)
    }

    /// The weight of the edge joining a vertex to its parent, or `None` for the root and for
    /// vertices outside the tree.
    pub fn weight(&self, vertex: usize) -> Option<T> {
        self.entries
            .get(vertex)
            .filter(|entry| entry.parent.is_some())
            .map(|entry| entry.weight)
    }

    /// The sum of all edge weights in the tree.
    pub fn total_weight(&self) -> T {
        self.total_weight
    }

    /// The `n - 1` tree edges, in vertex order of the child.
    pub fn edges(&self) -> impl Iterator<Item = MstEdge<T>> + '_ {
        self.entries.iter().enumerate().filter_map(|(child, entry)| {
            entry.parent.map(|parent| MstEdge { parent, child, weight: entry.weight })
        })
    }

    /// The text summary of the tree: its number of vertices and total weight.
    pub fn report(&self) -> MstReport<T> {
        MstReport::new(self.n_vertices(), self.total_weight)
    }
}

/// Computes the minimum spanning tree of the complete graph over the given colours, where each
/// edge is weighted by the Euclidean distance between its two colours. Uses Prim's algorithm
/// grown from vertex 0, with an indexed min heap. Edges are computed on demand and never stored.
///
/// # Parameters
/// * `vertices` - the distinct colours, as produced by `DistinctColors`.
///
/// # Returns
/// * The tree, or `PaletteError::EmptyGraph` if there are no vertices.
///
/// # Examples
/// ```
///use palette_mst::{prims_min_spanning_tree, ColorSample};
///
///let vertices = vec![
///    ColorSample::new(0, 0, 0),
///    ColorSample::new(0, 0, 3),
///    ColorSample::new(0, 4, 3),
///];
///let mst = prims_min_spanning_tree::<f64>(&vertices).unwrap();
///assert_eq!(7.0, mst.total_weight());
///assert_eq!(Some(1), mst.parent(2));
/// ```
pub fn prims_min_spanning_tree<T: Float>(
    vertices: &[ColorSample],
) -> Result<MinSpanningTree<T>, PaletteError> {
    PrimsEngine::new(vertices)?.run(relax_serial::<T>)
}

/// Computes the same tree as `prims_min_spanning_tree`, scanning the unsettled vertices in
/// parallel after each extraction. Not recommended for small numbers of colours.
#[cfg(feature = "parallel")]
pub fn prims_min_spanning_tree_par<T: Float + Send + Sync>(
    vertices: &[ColorSample],
) -> Result<MinSpanningTree<T>, PaletteError> {
    PrimsEngine::new(vertices)?.run(relax_par::<T>)
}

/// Per vertex state while the tree is being grown.
struct PrimsEngine<'a, T> {
    vertices: &'a [ColorSample],
    in_heap: Vec<bool>,
    best_keys: Vec<T>,
    entries: Vec<MstEntry<T>>,
    heap: IndexedMinHeap<T>,
}

impl<'a, T: Float> PrimsEngine<'a, T> {
    fn new(vertices: &'a [ColorSample]) -> Result<Self, PaletteError> {
        if vertices.is_empty() {
            return Err(PaletteError::EmptyGraph);
        }
        let n_vertices = vertices.len();
        let mut best_keys = vec![T::infinity(); n_vertices];
        best_keys[ROOT_VERTEX] = T::zero();

        let mut heap = IndexedMinHeap::with_capacity(n_vertices);
        for (vertex, &key) in best_keys.iter().enumerate() {
            heap.insert(HeapNode { vertex, key });
        }

        Ok(PrimsEngine {
            vertices,
            in_heap: vec![true; n_vertices],
            best_keys,
            entries: vec![MstEntry { parent: None, weight: T::infinity() }; n_vertices],
            heap,
        })
    }

    fn run<F>(mut self, relax: F) -> Result<MinSpanningTree<T>, PaletteError>
    where
        F: Fn(&[ColorSample], &[bool], &[T], usize) -> Vec<(usize, T)>,
    {
        debug!("Growing spanning tree over {} colours", self.vertices.len());
        while let Some(HeapNode { vertex: settled, .. }) = self.heap.extract_min() {
            self.in_heap[settled] = false;
            for (vertex, weight) in relax(self.vertices, &self.in_heap, &self.best_keys, settled) {
                self.best_keys[vertex] = weight;
                self.entries[vertex] = MstEntry { parent: Some(settled), weight };
                self.heap.decrease_key(vertex, weight);
            }
        }

        let total_weight = self
            .entries
            .iter()
            .filter(|entry| entry.parent.is_some())
            .fold(T::zero(), |acc, entry| acc + entry.weight);
        debug!("Spanning tree complete");

        Ok(MinSpanningTree { vertices: self.vertices.to_vec(), entries: self.entries, total_weight })
    }
}

/// Finds every unsettled vertex whose distance to the newly settled vertex beats its current
/// best key.
fn relax_serial<T: Float>(
    vertices: &[ColorSample],
    in_heap: &[bool],
    best_keys: &[T],
    settled: usize,
) -> Vec<(usize, T)> {
    let settled_color = &vertices[settled];
    (0..vertices.len())
        .filter(|&vertex| in_heap[vertex])
        .filter_map(|vertex| {
            let weight = edge_weight::<T>(settled_color, &vertices[vertex]);
            (weight < best_keys[vertex]).then_some((vertex, weight))
        })
        .collect()
}

#[cfg(feature = "parallel")]
fn relax_par<T: Float + Send + Sync>(
    vertices: &[ColorSample],
    in_heap: &[bool],
    best_keys: &[T],
    settled: usize,
) -> Vec<(usize, T)> {
    let settled_color = &vertices[settled];
    (0..vertices.len())
        .into_par_iter()
        .filter(|&vertex| in_heap[vertex])
        .filter_map(|vertex| {
            let weight = edge_weight::<T>(settled_color, &vertices[vertex]);
            (weight < best_keys[vertex]).then_some((vertex, weight))
        })
        .collect()
}
