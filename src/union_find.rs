pub(crate) struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl UnionFind {
    pub(crate) fn new(n: usize) -> Self {
        UnionFind {
            parent: (0..n).collect(),
            size: vec![1; n],
        }
    }

    pub(crate) fn find(&mut self, mut n: usize) -> usize {
        while self.parent[n] != n {
            self.parent[n] = self.parent[self.parent[n]];
            n = self.parent[n];
        }
        n
    }

    /// Merges the sets containing `m` and `n`. Returns false if they
    /// were already in the same set.
    pub(crate) fn union(&mut self, m: usize, n: usize) -> bool {
        let root_m = self.find(m);
        let root_n = self.find(n);
        if root_m == root_n {
            return false;
        }
        let (smaller, larger) = if self.size[root_m] < self.size[root_n] {
            (root_m, root_n)
        } else {
            (root_n, root_m)
        };
        self.parent[smaller] = larger;
        self.size[larger] += self.size[smaller];
        true
    }

    pub(crate) fn size_of(&mut self, n: usize) -> usize {
        let root = self.find(n);
        self.size[root]
    }
}
