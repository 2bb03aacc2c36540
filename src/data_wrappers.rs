/// An entry in the indexed min heap: a vertex of the colour graph and its current key.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeapNode<T> {
    pub vertex: usize,
    pub key: T,
}

/// One row of the minimum spanning tree: the parent a vertex was attached to and the weight of
/// the connecting edge. The root has no parent and an infinite weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MstEntry<T> {
    pub parent: Option<usize>,
    pub weight: T,
}

/// An edge of the minimum spanning tree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MstEdge<T> {
    pub parent: usize,
    pub child: usize,
    pub weight: T,
}
