//! Triangular lattice storage and the price lattice builder.

use std::ops::{Index, IndexMut};

use num_traits::Float;

/// Recombining lattice stored as a packed lower triangle.
///
/// Node (i, j) is time step `i` after `j` down moves, with `0 ≤ j ≤ i ≤ N`.
/// Row `i` starts at offset `i(i+1)/2` of a single contiguous buffer, so the
/// lattice holds exactly (N+1)(N+2)/2 values and no filler.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::lattice::TriangularLattice;
///
/// let mut lattice = TriangularLattice::filled(2, 0.0_f64);
/// lattice[(2, 1)] = 3.0;
/// assert_eq!(lattice.row(2), &[0.0, 3.0, 0.0]);
/// assert_eq!(lattice.get(1, 2), None);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TriangularLattice<T> {
    n_steps: usize,
    nodes: Vec<T>,
}

#[inline]
fn row_offset(i: usize) -> usize {
    i * (i + 1) / 2
}

impl<T: Copy> TriangularLattice<T> {
    /// Lattice of `n_steps` steps with every node set to `value`.
    pub fn filled(n_steps: usize, value: T) -> Self {
        Self {
            n_steps,
            nodes: vec![value; Self::node_count_for(n_steps)],
        }
    }

    /// Node count of a lattice with `n_steps` steps.
    #[inline]
    pub fn node_count_for(n_steps: usize) -> usize {
        row_offset(n_steps + 1)
    }

    /// Number of time steps N.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Total number of stored nodes.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Node (i, j), or `None` outside the triangle.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Option<T> {
        if i > self.n_steps || j > i {
            return None;
        }
        Some(self.nodes[row_offset(i) + j])
    }

    /// Row `i` (i + 1 nodes).
    ///
    /// # Panics
    ///
    /// Panics if `i > N`.
    #[inline]
    pub fn row(&self, i: usize) -> &[T] {
        assert!(i <= self.n_steps, "row {} outside lattice of {} steps", i, self.n_steps);
        let start = row_offset(i);
        &self.nodes[start..start + i + 1]
    }

    /// Mutable row `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i > N`.
    #[inline]
    pub fn row_mut(&mut self, i: usize) -> &mut [T] {
        assert!(i <= self.n_steps, "row {} outside lattice of {} steps", i, self.n_steps);
        let start = row_offset(i);
        &mut self.nodes[start..start + i + 1]
    }

    /// Row `i` mutably together with row `i + 1` for reading.
    ///
    /// # Panics
    ///
    /// Panics if `i >= N`.
    pub fn row_and_successor(&mut self, i: usize) -> (&mut [T], &[T]) {
        assert!(i < self.n_steps, "row {} has no successor in lattice of {} steps", i, self.n_steps);
        let start = row_offset(i);
        let split = row_offset(i + 1);
        let (head, tail) = self.nodes.split_at_mut(split);
        (&mut head[start..split], &tail[..i + 2])
    }

    /// Iterator over rows from i = 0 to i = N.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..=self.n_steps).map(move |i| self.row(i))
    }

    /// Root node (0, 0).
    #[inline]
    pub fn root(&self) -> T {
        self.nodes[0]
    }
}

impl<T: Copy> Index<(usize, usize)> for TriangularLattice<T> {
    type Output = T;

    fn index(&self, (i, j): (usize, usize)) -> &T {
        assert!(
            i <= self.n_steps && j <= i,
            "node ({}, {}) outside lattice of {} steps",
            i,
            j,
            self.n_steps
        );
        &self.nodes[row_offset(i) + j]
    }
}

impl<T: Copy> IndexMut<(usize, usize)> for TriangularLattice<T> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        assert!(
            i <= self.n_steps && j <= i,
            "node ({}, {}) outside lattice of {} steps",
            i,
            j,
            self.n_steps
        );
        &mut self.nodes[row_offset(i) + j]
    }
}

/// Builds the stock price lattice.
///
/// price(i, j) = s0 · (u^(i−j) · v^j). Non-finite inputs propagate into
/// the nodes unchanged.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::lattice::build_price_lattice;
///
/// let prices = build_price_lattice(2, 100.0_f64, 1.1, 0.9);
/// assert_eq!(prices[(0, 0)], 100.0);
/// assert!((prices[(2, 0)] - 121.0).abs() < 1e-12);
/// assert!((prices[(2, 1)] - 99.0).abs() < 1e-12);
/// assert!((prices[(2, 2)] - 81.0).abs() < 1e-12);
/// ```
pub fn build_price_lattice<T: Float>(n_steps: usize, spot: T, up: T, down: T) -> TriangularLattice<T> {
    let mut lattice = TriangularLattice::filled(n_steps, T::zero());
    for i in 0..=n_steps {
        for (j, node) in lattice.row_mut(i).iter_mut().enumerate() {
            *node = spot * (up.powi((i - j) as i32) * down.powi(j as i32));
        }
    }
    lattice
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_node_count() {
        assert_eq!(TriangularLattice::<f64>::node_count_for(0), 1);
        assert_eq!(TriangularLattice::<f64>::node_count_for(1), 3);
        assert_eq!(TriangularLattice::<f64>::node_count_for(4), 15);
        assert_eq!(TriangularLattice::filled(200, 0.0_f64).node_count(), 201 * 202 / 2);
    }

    #[test]
    fn test_row_lengths() {
        let lattice = TriangularLattice::filled(5, 1.0_f64);
        for (i, row) in lattice.rows().enumerate() {
            assert_eq!(row.len(), i + 1);
        }
        assert_eq!(lattice.rows().count(), 6);
    }

    #[test]
    fn test_get_outside_triangle() {
        let lattice = TriangularLattice::filled(3, 1.0_f64);
        assert_eq!(lattice.get(3, 3), Some(1.0));
        assert_eq!(lattice.get(2, 3), None);
        assert_eq!(lattice.get(4, 0), None);
    }

    #[test]
    #[should_panic(expected = "outside lattice")]
    fn test_index_above_diagonal_panics() {
        let lattice = TriangularLattice::filled(3, 1.0_f64);
        let _ = lattice[(1, 2)];
    }

    #[test]
    fn test_rows_do_not_overlap() {
        let mut lattice = TriangularLattice::filled(3, 0_u32);
        for i in 0..=3 {
            for j in 0..=i {
                lattice[(i, j)] = (10 * i + j) as u32;
            }
        }
        assert_eq!(lattice.row(0), &[0]);
        assert_eq!(lattice.row(1), &[10, 11]);
        assert_eq!(lattice.row(2), &[20, 21, 22]);
        assert_eq!(lattice.row(3), &[30, 31, 32, 33]);
    }

    #[test]
    fn test_row_and_successor() {
        let mut lattice = TriangularLattice::filled(2, 0_u32);
        lattice.row_mut(2).copy_from_slice(&[1, 2, 3]);
        let (row, next) = lattice.row_and_successor(1);
        assert_eq!(row.len(), 2);
        assert_eq!(next, &[1, 2, 3]);
        row[0] = next[0] + next[1];
        row[1] = next[1] + next[2];
        assert_eq!(lattice.row(1), &[3, 5]);
    }

    #[test]
    fn test_price_lattice_reference() {
        let prices = build_price_lattice(4, 100.0_f64, 1.1, 0.9);
        assert_eq!(prices.root(), 100.0);
        assert_relative_eq!(prices[(1, 0)], 110.0, epsilon = 1e-12);
        assert_relative_eq!(prices[(1, 1)], 90.0, epsilon = 1e-12);
        assert_relative_eq!(prices[(4, 0)], 146.41, epsilon = 1e-10);
        assert_relative_eq!(prices[(4, 2)], 98.01, epsilon = 1e-10);
        assert_relative_eq!(prices[(4, 4)], 65.61, epsilon = 1e-10);
    }

    #[test]
    fn test_price_lattice_recombines() {
        let (up, down) = (1.05_f64, 0.96);
        let prices = build_price_lattice(30, 50.0, up, down);
        for i in 0..30 {
            for j in 0..=i {
                assert_relative_eq!(prices[(i + 1, j + 1)], prices[(i, j)] * down, max_relative = 1e-12);
                assert_relative_eq!(prices[(i + 1, j)], prices[(i, j)] * up, max_relative = 1e-12);
            }
        }
    }

    #[test]
    fn test_price_lattice_propagates_nan() {
        let prices = build_price_lattice(2, f64::NAN, 1.1, 0.9);
        assert!(prices.rows().flatten().all(|p| p.is_nan()));
    }
}
