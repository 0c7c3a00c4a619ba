/// Disjoint sets over the cells of a `rows x cols` board.
///
/// Cell (row, col) is node `row * cols + col`. The forest is stored as two
/// parallel arrays; `size` is only meaningful at roots.
#[derive(Debug, Clone)]
pub struct UnionFind {
    cols: usize,
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl UnionFind {
    /// Every cell starts in its own singleton set.
    ///
    /// Dimensions come from an existing [`Grid`](crate::simulation::Grid), so
    /// `rows * cols` has already passed `Grid::cell_count`.
    pub fn new(rows: usize, cols: usize) -> Self {
        let count = rows * cols;
        Self {
            cols,
            parent: (0..count).collect(),
            size: vec![1; count],
        }
    }

    /// Node id of (row, col)
    pub fn id(&self, row: usize, col: usize) -> usize {
        debug_assert!(col < self.cols, "column {} out of range", col);
        let id = row * self.cols + col;
        debug_assert!(id < self.parent.len(), "cell ({}, {}) out of range", row, col);
        id
    }

    /// Root id of the set containing (row, col).
    ///
    /// Every node visited on the way is re-parented directly onto the root.
    pub fn find(&mut self, row: usize, col: usize) -> usize {
        let id = self.id(row, col);
        self.find_root(id)
    }

    /// Merge the sets containing the two cells and return the surviving root.
    ///
    /// The smaller tree goes under the larger; on a tie the second cell's
    /// root goes under the first's.
    pub fn union(&mut self, row1: usize, col1: usize, row2: usize, col2: usize) -> usize {
        let a = self.find(row1, col1);
        let b = self.find(row2, col2);
        if a == b {
            return a;
        }

        let (root, child) = if self.size[a] >= self.size[b] { (a, b) } else { (b, a) };
        self.parent[child] = root;
        self.size[root] += self.size[child];
        root
    }

    /// Number of cells in the set containing (row, col)
    pub fn set_size(&mut self, row: usize, col: usize) -> usize {
        let root = self.find(row, col);
        self.size[root]
    }

    fn find_root(&mut self, id: usize) -> usize {
        let mut root = id;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = id;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singletons() {
        let mut uf = UnionFind::new(3, 4);
        for row in 0..3 {
            for col in 0..4 {
                assert_eq!(uf.find(row, col), row * 4 + col);
                assert_eq!(uf.set_size(row, col), 1);
            }
        }
    }

    #[test]
    fn test_union_merges_sets() {
        let mut uf = UnionFind::new(2, 2);
        uf.union(0, 0, 1, 1);
        assert_eq!(uf.find(0, 0), uf.find(1, 1));
        assert_ne!(uf.find(0, 0), uf.find(0, 1));
        assert_eq!(uf.set_size(1, 1), 2);
    }

    #[test]
    fn test_union_is_idempotent() {
        let mut uf = UnionFind::new(1, 3);
        let first = uf.union(0, 0, 0, 1);
        let second = uf.union(0, 1, 0, 0);
        assert_eq!(first, second);
        assert_eq!(uf.set_size(0, 0), 2);
    }

    #[test]
    fn test_tie_keeps_first_root() {
        let mut uf = UnionFind::new(1, 2);
        assert_eq!(uf.union(0, 1, 0, 0), 1);
        assert_eq!(uf.find(0, 0), 1);
    }

    #[test]
    fn test_smaller_tree_attaches_under_larger() {
        let mut uf = UnionFind::new(1, 5);
        let big = uf.union(0, 0, 0, 1);
        uf.union(0, 0, 0, 2);
        // Singleton passed first still ends up under the larger tree's root
        assert_eq!(uf.union(0, 4, 0, 2), big);
        assert_eq!(uf.set_size(0, 4), 4);
        assert_eq!(uf.set_size(0, 3), 1);
    }

    #[test]
    fn test_path_compression_points_at_root() {
        let mut uf = UnionFind::new(1, 6);
        for col in 1..6 {
            uf.union(0, col - 1, 0, col);
        }
        let root = uf.find(0, 5);
        for col in 0..6 {
            assert_eq!(uf.find(0, col), root);
            let id = uf.id(0, col);
            assert_eq!(uf.parent[id], root);
        }
        assert_eq!(uf.set_size(0, 3), 6);
    }
}
