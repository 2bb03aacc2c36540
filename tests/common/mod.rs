#![allow(dead_code)]
use palette_mst::{
    edge_weight, gaussian_smooth, ColorGraph, ColorSample, DistinctColors, Grid,
    MinSpanningTree, MstParams, PaletteError, MAX_FILTER_SIZE,
};

const TOLERANCE: f64 = 1e-9;

type MstResult = Result<MinSpanningTree<f64>, PaletteError>;

pub fn test_primaries_connect_to_black(mst_fn: fn(&ColorGraph<f64>) -> MstResult) {
    let grid = primaries_grid();
    let graph = ColorGraph::new(&grid, unsmoothed());
    let mst = mst_fn(&graph).unwrap();

    assert_eq!(4, mst.n_vertices());
    assert_eq!(765.0, mst.total_weight());
    // Black is seen first, so it is the root and every primary hangs off it
    assert_eq!(None, mst.parent(0));
    for vertex in 1..4 {
        assert_eq!(Some(0), mst.parent(vertex));
        assert_eq!(Some(255.0), mst.weight(vertex));
    }
    assert_eq!(
        "Number of Distinct colors: 4\nSum of MST is: 765",
        mst.report().to_string()
    );
}

pub fn test_single_colour(mst_fn: fn(&ColorGraph<f64>) -> MstResult) {
    let grid = Grid::new(3, 5, ColorSample::new(12, 200, 77));
    let graph = ColorGraph::new(&grid, unsmoothed());
    let mst = mst_fn(&graph).unwrap();

    assert_eq!(1, mst.n_vertices());
    assert_eq!(0.0, mst.total_weight());
    assert_eq!(0, mst.edges().count());
    assert_eq!(
        "Number of Distinct colors: 1\nSum of MST is: 0",
        mst.report().to_string()
    );
}

pub fn test_all_distinct_colours(mst_fn: fn(&ColorGraph<f64>) -> MstResult) {
    let grid = Grid::from_fn(6, 7, |row, col| {
        ColorSample::new((row * 40) as u8, (col * 30) as u8, ((row * 7 + col) * 3) as u8)
    });
    let graph = ColorGraph::new(&grid, unsmoothed());
    let mst = mst_fn(&graph).unwrap();

    assert_eq!(grid.len(), mst.n_vertices());
    assert_eq!(grid.len() - 1, mst.edges().count());
}

pub fn test_matches_brute_force(mst_fn: fn(&ColorGraph<f64>) -> MstResult) {
    let grid = Grid::from_rows(vec![
        vec![ColorSample::new(10, 10, 10), ColorSample::new(200, 40, 90)],
        vec![ColorSample::new(15, 12, 40), ColorSample::new(180, 60, 100)],
        vec![ColorSample::new(90, 250, 30), ColorSample::new(10, 10, 10)],
        vec![ColorSample::new(0, 128, 255), ColorSample::new(100, 240, 20)],
    ])
    .unwrap();
    let graph = ColorGraph::new(&grid, unsmoothed());
    let mst = mst_fn(&graph).unwrap();

    assert_eq!(7, mst.n_vertices());
    let expected = brute_force_mst_weight(mst.vertices());
    assert!((expected - mst.total_weight()).abs() < TOLERANCE);
}

pub fn test_tree_is_consistent(mst_fn: fn(&ColorGraph<f64>) -> MstResult) {
    let grid = noisy_grid(12, 9, 11);
    let graph = ColorGraph::new(&grid, unsmoothed());
    let mst = mst_fn(&graph).unwrap();

    let vertices = mst.vertices();
    let mut edge_total = 0.0;
    for edge in mst.edges() {
        let expected = edge_weight::<f64>(&vertices[edge.parent], &vertices[edge.child]);
        assert!((expected - edge.weight).abs() < TOLERANCE);
        edge_total += edge.weight;
    }
    assert_eq!(mst.n_vertices() - 1, mst.edges().count());
    assert!((edge_total - mst.total_weight()).abs() < TOLERANCE);

    // Following parents from any vertex must reach the root
    for start in 0..mst.n_vertices() {
        let mut vertex = start;
        let mut steps = 0;
        while let Some(parent) = mst.parent(vertex) {
            vertex = parent;
            steps += 1;
            assert!(steps < mst.n_vertices(), "cycle through vertex {start}");
        }
        assert_eq!(mst.root(), vertex);
    }
}

pub fn test_smoothed_vertices(mst_fn: fn(&ColorGraph<f64>) -> MstResult) {
    let grid = noisy_grid(10, 10, 3);
    let params = MstParams::builder().filter_size(3).sigma(1.5).build();
    let graph = ColorGraph::new(&grid, params);
    assert_eq!(3, graph.params().filter_size());
    let mst = mst_fn(&graph).unwrap();

    let smoothed = gaussian_smooth(&grid, 3, 1.5_f64).unwrap();
    let expected = DistinctColors::extract(&smoothed);
    assert_eq!(expected.as_slice(), mst.vertices());
    assert_eq!(smoothed, graph.smoothed_grid().unwrap());
}

pub fn test_empty_grid(mst_fn: fn(&ColorGraph<f64>) -> MstResult) {
    let grid = Grid::from_vec(0, 0, Vec::new()).unwrap();
    let graph = ColorGraph::default_params(&grid);
    let result = mst_fn(&graph);
    assert!(matches!(result, Err(PaletteError::InvalidDimensions(..))));
}

pub fn test_invalid_sigma(mst_fn: fn(&ColorGraph<f64>) -> MstResult) {
    let grid = primaries_grid();
    for sigma in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let params = MstParams::builder().sigma(sigma).build();
        let graph = ColorGraph::new(&grid, params);
        let result = mst_fn(&graph);
        assert!(matches!(result, Err(PaletteError::InvalidKernel(..))));
    }
}

pub fn test_oversized_filter(mst_fn: fn(&ColorGraph<f64>) -> MstResult) {
    let grid = primaries_grid();
    for filter_size in [MAX_FILTER_SIZE + 2, usize::MAX] {
        let params = MstParams::builder().filter_size(filter_size).build();
        let graph = ColorGraph::new(&grid, params);
        assert!(matches!(mst_fn(&graph), Err(PaletteError::InvalidKernel(..))));
        assert!(matches!(graph.smoothed_grid(), Err(PaletteError::InvalidKernel(..))));
    }

    let params = MstParams::builder().filter_size(MAX_FILTER_SIZE).build();
    let graph = ColorGraph::new(&grid, params);
    assert_eq!(4, mst_fn(&graph).unwrap().n_vertices());
}

pub fn test_sigma_ignored_without_smoothing(mst_fn: fn(&ColorGraph<f64>) -> MstResult) {
    let grid = primaries_grid();
    let params = MstParams::builder().sigma(-1.0).smoothing(false).build();
    let graph = ColorGraph::new(&grid, params);
    assert!(mst_fn(&graph).is_ok());
}

pub fn primaries_grid() -> Grid<ColorSample> {
    Grid::from_rows(vec![
        vec![ColorSample::new(0, 0, 0), ColorSample::new(255, 0, 0)],
        vec![ColorSample::new(0, 255, 0), ColorSample::new(0, 0, 255)],
    ])
    .unwrap()
}

pub fn unsmoothed() -> MstParams {
    MstParams::builder().smoothing(false).build()
}

/// A grid of pseudo random colours drawn from a small palette, so some colours repeat.
pub fn noisy_grid(height: usize, width: usize, seed: u64) -> Grid<ColorSample> {
    let mut state = seed;
    Grid::from_fn(height, width, |_, _| {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        let bits = state >> 33;
        ColorSample::new(
            ((bits & 0x7) * 36) as u8,
            (((bits >> 3) & 0x7) * 36) as u8,
            (((bits >> 6) & 0x3) * 85) as u8,
        )
    })
}

/// The weight of the minimum spanning tree found by trying every set of `n - 1` edges.
pub fn brute_force_mst_weight(vertices: &[ColorSample]) -> f64 {
    let n = vertices.len();
    if n < 2 {
        return 0.0;
    }
    let edges: Vec<(usize, usize, f64)> = (0..n)
        .flat_map(|a| ((a + 1)..n).map(move |b| (a, b)))
        .map(|(a, b)| (a, b, edge_weight::<f64>(&vertices[a], &vertices[b])))
        .collect();
    assert!(edges.len() <= 24, "too many edges to enumerate");

    let mut best = f64::INFINITY;
    for mask in 0u32..(1 << edges.len()) {
        if mask.count_ones() as usize != n - 1 {
            continue;
        }
        let mut component: Vec<usize> = (0..n).collect();
        let mut total = 0.0;
        let mut is_tree = true;
        for (i, &(a, b, weight)) in edges.iter().enumerate() {
            if mask & (1 << i) == 0 {
                continue;
            }
            let (root_a, root_b) = (find(&component, a), find(&component, b));
            if root_a == root_b {
                is_tree = false;
                break;
            }
            component[root_a] = root_b;
            total += weight;
        }
        if is_tree && total < best {
            best = total;
        }
    }
    best
}

fn find(component: &[usize], mut vertex: usize) -> usize {
    while component[vertex] != vertex {
        vertex = component[vertex];
    }
    vertex
}
