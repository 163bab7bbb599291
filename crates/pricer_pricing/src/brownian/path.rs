//! Sampled path container.

/// One sampled path: grid times and the walk's value at each time.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BrownianPath {
    step_count: usize,
    times: Vec<f64>,
    values: Vec<f64>,
}

impl BrownianPath {
    /// Pairs a time grid with path values.
    ///
    /// # Panics
    ///
    /// Panics if `times` and `values` differ in length.
    pub fn new(step_count: usize, times: Vec<f64>, values: Vec<f64>) -> Self {
        assert_eq!(
            times.len(),
            values.len(),
            "time grid and values must have the same length"
        );
        Self {
            step_count,
            times,
            values,
        }
    }

    /// Step count the path was sampled with.
    #[inline]
    pub fn step_count(&self) -> usize {
        self.step_count
    }

    /// Number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True for a path with no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Grid times on [0, 1].
    #[inline]
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Walk values.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// (time, value) pairs, the shape chart widgets consume.
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.times.iter().copied().zip(self.values.iter().copied()).collect()
    }

    /// Smallest and largest value, or `None` for an empty path.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        let mut values = self.values.iter().copied();
        let first = values.next()?;
        Some(values.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
    }
}
