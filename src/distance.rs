use num_traits::Float;

use crate::graph::Vertex;

/// Possible distance metrics that can be used when weighing the edges
/// between vertices of the spanning tree.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum DistanceMetric {
    #[default]
    Euclidean,
    Manhattan,
}

impl DistanceMetric {
    pub(crate) fn calc_dist<T: Float>(&self, a: &Vertex<T>, b: &Vertex<T>) -> T {
        match *self {
            Self::Euclidean => euclidean_distance(a, b),
            Self::Manhattan => manhattan_distance(a, b),
        }
    }
}

pub(crate) fn euclidean_distance<T: Float>(a: &Vertex<T>, b: &Vertex<T>) -> T {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

pub(crate) fn manhattan_distance<T: Float>(a: &Vertex<T>, b: &Vertex<T>) -> T {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn euclidean() {
        let a = Vertex::new(0.0, 0.0);
        let b = Vertex::new(3.0, 4.0);
        assert_eq!(5.0, euclidean_distance(&a, &b));
    }

    #[test]
    fn manhattan() {
        let a = Vertex::new(1.0, 1.0);
        let b = Vertex::new(3.0, 4.0);
        assert_eq!(5.0, manhattan_distance(&a, &b));
    }

    #[test]
    fn metric_dispatch() {
        let a = Vertex::new(0.0, 0.0);
        let b = Vertex::new(3.0, 4.0);
        assert_eq!(5.0, DistanceMetric::Euclidean.calc_dist(&a, &b));
        assert_eq!(7.0, DistanceMetric::Manhattan.calc_dist(&a, &b));
    }
}
