use num_traits::Float;

use crate::distance::DistanceMetric;
use crate::graph::{Edge, Vertex};
use crate::heap::MinHeap;

/// Builds the minimum spanning tree of the complete graph over a
/// sequence of vertices, where edge weights are the distances between
/// the vertex pairs, using a lazy-deletion variant of Prim's algorithm.
///
/// Each build is from scratch: O(V² log V) in the number of vertices.
/// The trees this crate targets are small (tens to low hundreds of
/// vertices), so rebuilding is preferred over maintaining a dynamic
/// spanning tree structure across insertions.
pub(crate) struct PrimsTreeBuilder<'a, T> {
    vertices: &'a [Vertex<T>],
    dist_metric: DistanceMetric,
}

impl<'a, T: Float> PrimsTreeBuilder<'a, T> {
    pub(crate) fn new(vertices: &'a [Vertex<T>], dist_metric: DistanceMetric) -> Self {
        PrimsTreeBuilder { vertices, dist_metric }
    }

    /// Computes the spanning edge set. Pure over the borrowed vertices;
    /// the heap and visited markers live only for the duration of the
    /// call. Returns an empty set for fewer than two vertices.
    pub(crate) fn build(&self) -> Vec<Edge<T>> {
        let n_vertices = self.vertices.len();
        if n_vertices <= 1 {
            return Vec::new();
        }
        let mut heap = MinHeap::with_capacity(n_vertices, |edge: &Edge<T>| edge.weight);
        let mut in_tree = vec![false; n_vertices];
        let mut edges = Vec::with_capacity(n_vertices - 1);

        // The tree always grows from vertex 0, so the result is
        // deterministic for a given vertex order.
        let mut latest = 0;
        in_tree[0] = true;

        while edges.len() < n_vertices - 1 {
            // Offer an edge from the vertex that joined the tree most
            // recently to every vertex still outside it.
            for right_id in 0..n_vertices {
                if !in_tree[right_id] {
                    heap.push(self.edge_between(latest, right_id));
                }
            }
            // The heap may still hold edges from earlier rounds whose far
            // endpoint has since joined the tree. Those are discarded as
            // they surface rather than removed eagerly. The graph is
            // complete, so an edge crossing the cut is always found.
            while let Some(edge) = heap.pop() {
                if in_tree[edge.right_id] {
                    continue;
                }
                in_tree[edge.right_id] = true;
                latest = edge.right_id;
                edges.push(edge);
                break;
            }
        }
        edges
    }

    fn edge_between(&self, left_id: usize, right_id: usize) -> Edge<T> {
        let weight = self
            .dist_metric
            .calc_dist(&self.vertices[left_id], &self.vertices[right_id]);
        Edge::new(left_id, right_id, weight)
    }
}
