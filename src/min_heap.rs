use num_traits::Float;
use crate::data_wrappers::HeapNode;

const SENTINEL_SLOT: usize = 0;
const ROOT_SLOT: usize = 1;

/// An array backed binary min heap over graph vertices that supports decrease-key.
///
/// Slots are 1-indexed. Slot 0 holds a sentinel with a key of negative infinity so bubbling up
/// always stops at the root. A second array maps each vertex to the slot currently holding it,
/// giving O(1) lookup for `decrease_key`; both arrays are updated together on every swap.
///
/// # Examples
/// ```
///use palette_mst::{HeapNode, IndexedMinHeap};
///
///let mut heap = IndexedMinHeap::with_capacity(3);
///heap.insert(HeapNode { vertex: 0, key: 4.0 });
///heap.insert(HeapNode { vertex: 1, key: 2.0 });
///heap.insert(HeapNode { vertex: 2, key: 3.0 });
///heap.decrease_key(0, 1.0);
///assert_eq!(Some(0), heap.extract_min().map(|node| node.vertex));
///assert_eq!(Some(1), heap.extract_min().map(|node| node.vertex));
/// ```
#[derive(Debug, Clone)]
pub struct IndexedMinHeap<T> {
    nodes: Vec<HeapNode<T>>,
    positions: Vec<usize>,
    size: usize,
}

impl<T: Float> IndexedMinHeap<T> {
    /// Creates an empty heap able to hold the vertices `0..n_vertices`.
    pub fn with_capacity(n_vertices: usize) -> Self {
        let mut nodes = Vec::with_capacity(n_vertices + 1);
        nodes.push(HeapNode { vertex: usize::MAX, key: T::neg_infinity() });
        IndexedMinHeap { nodes, positions: vec![SENTINEL_SLOT; n_vertices], size: 0 }
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn contains(&self, vertex: usize) -> bool {
        self.slot_of(vertex).is_some()
    }

    pub fn key_of(&self, vertex: usize) -> Option<T> {
        self.slot_of(vertex).map(|slot| self.nodes[slot].key)
    }

    pub fn peek(&self) -> Option<&HeapNode<T>> {
        self.nodes.get(ROOT_SLOT)
    }

    /// Appends a node in the last slot and bubbles it up.
    ///
    /// # Panics
    /// If the vertex is outside the capacity the heap was created with, or is already in the heap.
    pub fn insert(&mut self, node: HeapNode<T>) {
        assert!(
            node.vertex < self.positions.len(),
            "Vertex {} is outside the heap capacity of {}",
            node.vertex,
            self.positions.len()
        );
        assert!(!self.contains(node.vertex), "Vertex {} is already in the heap", node.vertex);
        self.size += 1;
        self.positions[node.vertex] = self.size;
        self.nodes.push(node);
        self.bubble_up(self.size);
    }

    /// Removes and returns the node with the smallest key.
    pub fn extract_min(&mut self) -> Option<HeapNode<T>> {
        if self.is_empty() {
            return None;
        }
        let last = self.nodes.pop()?;
        self.size -= 1;
        self.positions[last.vertex] = SENTINEL_SLOT;
        if self.is_empty() {
            return Some(last);
        }

        let last_vertex = last.vertex;
        let min = std::mem::replace(&mut self.nodes[ROOT_SLOT], last);
        self.positions[min.vertex] = SENTINEL_SLOT;
        self.positions[last_vertex] = ROOT_SLOT;
        self.sink_down(ROOT_SLOT);
        Some(min)
    }

    /// Lowers the key of a vertex and restores heap order.
    ///
    /// The new key must not be greater than the current key. This is not checked: raising a key
    /// through this path breaks the heap order.
    ///
    /// # Returns
    /// * false if the vertex is not in the heap, in which case nothing changes.
    pub fn decrease_key(&mut self, vertex: usize, key: T) -> bool {
        match self.slot_of(vertex) {
            Some(slot) => {
                self.nodes[slot].key = key;
                self.bubble_up(slot);
                true
            }
            None => false,
        }
    }

    fn slot_of(&self, vertex: usize) -> Option<usize> {
        match self.positions.get(vertex) {
            Some(&slot) if slot != SENTINEL_SLOT => Some(slot),
            _ => None,
        }
    }

    fn bubble_up(&mut self, mut slot: usize) {
        let mut parent = slot / 2;
        while self.nodes[parent].key > self.nodes[slot].key {
            self.swap(slot, parent);
            slot = parent;
            parent = slot / 2;
        }
    }

    fn sink_down(&mut self, mut slot: usize) {
        loop {
            let left = 2 * slot;
            let right = left + 1;
            let mut smallest = slot;
            if left <= self.size && self.nodes[left].key < self.nodes[smallest].key {
                smallest = left;
            }
            if right <= self.size && self.nodes[right].key < self.nodes[smallest].key {
                smallest = right;
            }
            if smallest == slot {
                break;
            }
            self.swap(slot, smallest);
            slot = smallest;
        }
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.nodes.swap(a, b);
        self.positions[self.nodes[a].vertex] = a;
        self.positions[self.nodes[b].vertex] = b;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_heap_invariants(heap: &IndexedMinHeap<f64>) {
        assert_eq!(heap.size + 1, heap.nodes.len());
        for slot in (ROOT_SLOT + 1)..=heap.size {
            assert!(
                heap.nodes[slot / 2].key <= heap.nodes[slot].key,
                "slot {slot} is smaller than its parent"
            );
        }
        for slot in ROOT_SLOT..=heap.size {
            assert_eq!(slot, heap.positions[heap.nodes[slot].vertex]);
        }
        let n_tracked = heap.positions.iter().filter(|&&slot| slot != SENTINEL_SLOT).count();
        assert_eq!(heap.size, n_tracked);
    }

    fn filled_heap(keys: &[f64]) -> IndexedMinHeap<f64> {
        let mut heap = IndexedMinHeap::with_capacity(keys.len());
        for (vertex, &key) in keys.iter().enumerate() {
            heap.insert(HeapNode { vertex, key });
            assert_heap_invariants(&heap);
        }
        heap
    }

    #[test]
    fn extracts_in_key_order() {
        let keys = [7.0, 3.0, 9.0, 1.0, 4.0, 8.0, 2.0, 6.0, 5.0, 0.5];
        let mut heap = filled_heap(&keys);
        let mut extracted = Vec::new();
        while let Some(node) = heap.extract_min() {
            assert_heap_invariants(&heap);
            assert!(!heap.contains(node.vertex));
            extracted.push(node.key);
        }
        let mut sorted = keys.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(sorted, extracted);
        assert!(heap.extract_min().is_none());
    }

    #[test]
    fn decrease_key_moves_vertex_up() {
        let mut heap = filled_heap(&[5.0, 6.0, 7.0, 8.0, 9.0, 10.0]);
        assert!(heap.decrease_key(5, 1.0));
        assert_heap_invariants(&heap);
        assert_eq!(5, heap.peek().unwrap().vertex);
        assert_eq!(Some(1.0), heap.key_of(5));

        assert!(heap.decrease_key(3, 5.5));
        assert_heap_invariants(&heap);
        let order: Vec<usize> = std::iter::from_fn(|| heap.extract_min())
            .map(|node| node.vertex)
            .collect();
        assert_eq!(vec![5, 0, 3, 1, 2, 4], order);
    }

    #[test]
    fn decrease_key_of_extracted_vertex_is_ignored() {
        let mut heap = filled_heap(&[1.0, 2.0, 3.0]);
        let min = heap.extract_min().unwrap();
        assert_eq!(0, min.vertex);
        assert!(!heap.decrease_key(0, 0.0));
        assert!(!heap.decrease_key(42, 0.0));
        assert_heap_invariants(&heap);
        assert_eq!(2, heap.len());
    }

    #[test]
    fn infinite_keys_with_single_zero_root() {
        let mut keys = vec![f64::INFINITY; 8];
        keys[0] = 0.0;
        let mut heap = filled_heap(&keys);
        assert_eq!(0, heap.extract_min().unwrap().vertex);
        assert_heap_invariants(&heap);
        for (vertex, key) in [(6, 3.0), (2, 1.0), (7, 2.0), (2, 0.5)] {
            heap.decrease_key(vertex, key);
            assert_heap_invariants(&heap);
        }
        let order: Vec<usize> = std::iter::from_fn(|| heap.extract_min())
            .take(3)
            .map(|node| node.vertex)
            .collect();
        assert_eq!(vec![2, 7, 6], order);
    }

    #[test]
    fn ties_sink_toward_left_child() {
        let mut heap = filled_heap(&[0.0, 1.0, 1.0]);
        heap.extract_min();
        assert_heap_invariants(&heap);
        // Vertex 2 moved to the root and compares equal to vertex 1, so it stays.
        assert_eq!(2, heap.peek().unwrap().vertex);
    }

    #[test]
    fn interleaved_operations_keep_invariants() {
        let n = 64;
        let mut heap = IndexedMinHeap::with_capacity(n);
        for vertex in 0..n {
            let key = ((vertex * 37) % 101) as f64;
            heap.insert(HeapNode { vertex, key });
        }
        assert_heap_invariants(&heap);
        let mut last = f64::NEG_INFINITY;
        let mut step = 0;
        while let Some(node) = heap.extract_min() {
            assert!(node.key >= last);
            last = node.key;
            for vertex in (step % 5..n).step_by(7) {
                if let Some(key) = heap.key_of(vertex) {
                    let lowered = (key - 3.0).max(last);
                    heap.decrease_key(vertex, lowered);
                }
            }
            assert_heap_invariants(&heap);
            step += 1;
        }
        assert_eq!(n, step);
    }
}
