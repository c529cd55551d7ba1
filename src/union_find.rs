/// Disjoint set forest over node indices, with path compression and union by size.
pub(crate) struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
    n_components: usize,
}

impl UnionFind {

    pub(crate) fn new(n_nodes: usize) -> Self {
        UnionFind {
            parent: (0..n_nodes).collect(),
            size: vec![1; n_nodes],
            n_components: n_nodes,
        }
    }

    /// Merges the sets holding `m` and `n`. Returns false if they were already joined.
    pub(crate) fn union(&mut self, m: usize, n: usize) -> bool {
        let (mut root_m, mut root_n) = (self.find(m), self.find(n));
        if root_m == root_n {
            return false;
        }
        if self.size[root_m] < self.size[root_n] {
            std::mem::swap(&mut root_m, &mut root_n);
        }
        self.parent[root_n] = root_m;
        self.size[root_m] += self.size[root_n];
        self.n_components -= 1;
        true
    }

    pub(crate) fn find(&mut self, mut n: usize) -> usize {
        let mut root = n;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        while self.parent[n] != root {
            let next = self.parent[n];
            self.parent[n] = root;
            n = next;
        }
        root
    }

    pub(crate) fn n_components(&self) -> usize {
        self.n_components
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_components() {
        let mut union_find = UnionFind::new(5);
        assert_eq!(5, union_find.n_components());
        assert!(union_find.union(0, 1));
        assert!(union_find.union(3, 4));
        assert!(union_find.union(1, 4));
        assert!(!union_find.union(0, 3));
        assert_eq!(2, union_find.n_components());
        assert_eq!(union_find.find(0), union_find.find(4));
        assert_ne!(union_find.find(0), union_find.find(2));
    }
}
