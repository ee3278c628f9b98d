//! Incremental construction of Euclidean minimum spanning trees ("MST")
//! over a growing set of 2D points. Generic over floating point numeric
//! types.
//!
//! A [`SpanningTree`] owns an ordered sequence of vertices and the edge
//! set of the minimum spanning tree over them: the cheapest set of
//! edges that connects every vertex without forming a cycle, where an
//! edge costs the distance between its two endpoints. Every insertion
//! recomputes the tree from scratch with a heap-driven, lazy-deletion
//! variant of Prim's algorithm. That keeps the structure simple and is
//! well suited to the interactive, small point sets this crate targets;
//! it makes no attempt at amortised incremental maintenance.
//!
//! # Examples
//! ```
//!use spantree::SpanningTree;
//!
//!let mut tree: SpanningTree<f64> = SpanningTree::new();
//!tree.add_vertex(0.0, 0.0);
//!tree.add_vertex(3.0, 4.0);
//!tree.add_vertex(6.0, 8.0);
//!
//!assert_eq!(tree.vertices().len(), 3);
//!assert_eq!(tree.edges().len(), 2);
//!assert!((tree.total_weight() - 10.0).abs() < 1e-12);
//! ```
//!
//! # References
//! * [Prim, R.C. Shortest connection networks and some generalizations.](https://ieeexplore.ieee.org/document/6773228)

use num_traits::Float;

use crate::prim::PrimsTreeBuilder;
#[cfg(debug_assertions)]
use crate::union_find::UnionFind;

pub use crate::distance::DistanceMetric;
pub use crate::graph::{Edge, Vertex};
pub use crate::heap::MinHeap;

mod distance;
mod graph;
mod heap;
mod prim;
// Only reachable from the debug integrity check and the test suite.
#[cfg(any(test, debug_assertions))]
mod union_find;

/// A minimum spanning tree over an ordered sequence of 2D vertices.
///
/// The tree starts empty and is grown one vertex at a time with
/// [`SpanningTree::add_vertex`]. After every insertion the stored edge
/// set is the minimum spanning tree of all vertices added so far, so a
/// rendering layer can read [`SpanningTree::vertices`] and
/// [`SpanningTree::edges`] at any point between insertions.
#[derive(Clone, Debug)]
pub struct SpanningTree<T> {
    vertices: Vec<Vertex<T>>,
    edges: Vec<Edge<T>>,
    dist_metric: DistanceMetric,
}

impl<T: Float> SpanningTree<T> {
    /// Creates an empty tree weighing edges by Euclidean distance.
    pub fn new() -> Self {
        SpanningTree::with_metric(DistanceMetric::default())
    }

    /// Creates an empty tree weighing edges by the given distance
    /// metric.
    ///
    /// # Examples
    /// ```
    ///use spantree::{DistanceMetric, SpanningTree};
    ///
    ///let mut tree = SpanningTree::with_metric(DistanceMetric::Manhattan);
    ///tree.add_vertex(0.0, 0.0);
    ///tree.add_vertex(3.0, 4.0);
    ///assert_eq!(tree.edges()[0].weight, 7.0);
    /// ```
    pub fn with_metric(dist_metric: DistanceMetric) -> Self {
        SpanningTree {
            vertices: Vec::new(),
            edges: Vec::new(),
            dist_metric,
        }
    }

    /// Appends a vertex at the given coordinates and recomputes the
    /// spanning edge set over the updated vertex sequence.
    ///
    /// The recomputation completes before this method returns. With one
    /// vertex the edge set is empty; with `n >= 2` vertices it holds
    /// exactly `n - 1` edges afterwards. Non-finite coordinates are not
    /// rejected; they propagate into the affected edge weights.
    ///
    /// # Parameters
    /// * `x` - the horizontal coordinate of the new vertex.
    /// * `y` - the vertical coordinate of the new vertex.
    pub fn add_vertex(&mut self, x: T, y: T) {
        self.vertices.push(Vertex::new(x, y));
        self.rebuild();
    }

    /// Removes all vertices and edges, returning the tree to its empty
    /// state. The tree remains usable afterwards.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.edges.clear();
    }

    /// The vertices of the tree, in insertion order. Edge endpoints are
    /// indices into this slice.
    pub fn vertices(&self) -> &[Vertex<T>] {
        &self.vertices
    }

    /// The edges of the most recently computed spanning tree.
    pub fn edges(&self) -> &[Edge<T>] {
        &self.edges
    }

    /// The sum of all edge weights in the current spanning tree, or
    /// zero if the tree has fewer than two vertices.
    pub fn total_weight(&self) -> T {
        self.edges
            .iter()
            .map(|edge| edge.weight)
            .fold(T::zero(), std::ops::Add::add)
    }

    fn rebuild(&mut self) {
        self.edges = PrimsTreeBuilder::new(&self.vertices, self.dist_metric).build();
        log::debug!(
            "rebuilt spanning tree over {} vertices ({} edges)",
            self.vertices.len(),
            self.edges.len()
        );
        #[cfg(debug_assertions)]
        self.check_tree_integrity();
    }

    /// Debug-only check that the stored edges form a spanning tree of
    /// the stored vertices. Compiled out of release builds.
    #[cfg(debug_assertions)]
    fn check_tree_integrity(&self) {
        debug_assert_eq!(
            self.vertices.len().saturating_sub(1),
            self.edges.len(),
            "spanning tree of {} vertices has {} edges",
            self.vertices.len(),
            self.edges.len()
        );
        let mut components = UnionFind::new(self.vertices.len());
        for edge in &self.edges {
            debug_assert!(
                edge.left_id < self.vertices.len() && edge.right_id < self.vertices.len(),
                "edge {} -> {} references a vertex outside the sequence",
                edge.left_id,
                edge.right_id
            );
            debug_assert!(
                components.union(edge.left_id, edge.right_id),
                "edge {} -> {} closes a cycle",
                edge.left_id,
                edge.right_id
            );
        }
    }
}

impl<T: Float> Default for SpanningTree<T> {
    fn default() -> Self {
        SpanningTree::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let tree: SpanningTree<f64> = SpanningTree::new();
        assert!(tree.vertices().is_empty());
        assert!(tree.edges().is_empty());
        assert_eq!(0.0, tree.total_weight());
    }

    #[test]
    fn single_vertex_has_no_edges() {
        let mut tree = SpanningTree::new();
        tree.add_vertex(5.0, 5.0);
        assert_eq!(1, tree.vertices().len());
        assert!(tree.edges().is_empty());
    }

    #[test]
    fn edge_count_tracks_vertex_count() {
        let mut tree = SpanningTree::new();
        for n in 0..20 {
            tree.add_vertex(f64::from(n), f64::from(n % 7));
            assert_eq!(tree.vertices().len() - 1, tree.edges().len());
        }
    }

    #[test]
    fn three_four_five_triangle() {
        let mut tree = SpanningTree::new();
        tree.add_vertex(0.0, 0.0);
        tree.add_vertex(3.0, 4.0);
        tree.add_vertex(6.0, 8.0);
        assert_eq!(
            vec![Edge::new(0, 1, 5.0), Edge::new(1, 2, 5.0)],
            tree.edges().to_vec()
        );
        assert_eq!(10.0, tree.total_weight());
    }

    #[test]
    fn clear_resets_any_state() {
        let mut tree = SpanningTree::new();
        tree.clear();
        assert!(tree.vertices().is_empty());

        for n in 0..5 {
            tree.add_vertex(f64::from(n), 0.0);
        }
        tree.clear();
        assert!(tree.vertices().is_empty());
        assert!(tree.edges().is_empty());

        // Still usable after clearing
        tree.add_vertex(1.0, 1.0);
        tree.add_vertex(2.0, 1.0);
        assert_eq!(1, tree.edges().len());
    }

    #[test]
    fn non_finite_coordinates_propagate() {
        let mut tree = SpanningTree::new();
        tree.add_vertex(0.0, 0.0);
        tree.add_vertex(f64::NAN, 1.0);
        tree.add_vertex(2.0, 2.0);
        assert_eq!(2, tree.edges().len());
        assert!(tree.total_weight().is_nan());
    }

    #[test]
    fn manhattan_metric_is_used_throughout() {
        let mut tree = SpanningTree::with_metric(DistanceMetric::Manhattan);
        tree.add_vertex(0.0, 0.0);
        tree.add_vertex(3.0, 4.0);
        tree.add_vertex(3.0, 5.0);
        assert_eq!(8.0, tree.total_weight());
    }
}
