//! Pairwise distance distributions
//!
//! The radius is a low percentile of all pairwise distances between sample
//! rows. For a single column the `k(k − 1)/2` distances are never stored:
//! [`LineDistances`] answers order-statistic queries by bisection on the
//! distance value, counting pairs within a distance with a two-pointer scan
//! of the sorted points. Multi-column rows fall back to [`DenseDistances`].

use pareto_core::{utils, OrderStatistics};

/// Distances between all pairs of points on a line
#[derive(Debug, Clone)]
pub struct LineDistances {
    points: Vec<f64>,
}

impl LineDistances {
    /// Build from finite points in any order
    pub fn new(points: &[f64]) -> Self {
        Self {
            points: utils::sorted(points),
        }
    }

    /// Number of pairs `i < j` with `|x_j − x_i| <= d`
    pub fn count_within(&self, d: f64) -> usize {
        let x = &self.points;
        let n = x.len();
        let mut count = 0;
        let mut j = 0;
        for i in 0..n {
            j = j.max(i + 1);
            while j < n && x[j] - x[i] <= d {
                j += 1;
            }
            count += j - i - 1;
        }
        count
    }

    fn span(&self) -> f64 {
        match (self.points.first(), self.points.last()) {
            (Some(lo), Some(hi)) => hi - lo,
            _ => 0.0,
        }
    }
}

impl OrderStatistics for LineDistances {
    fn count(&self) -> usize {
        let n = self.points.len();
        n * n.saturating_sub(1) / 2
    }

    /// Smallest distance `d` with at least `k + 1` pairs within `d`
    ///
    /// Non-negative doubles order like their bit patterns, so the search
    /// runs over `u64` and lands on an exact pairwise difference.
    fn order_statistic(&self, k: usize) -> f64 {
        let mut lo = 0u64;
        let mut hi = self.span().to_bits();
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if self.count_within(f64::from_bits(mid)) > k {
                hi = mid;
            } else {
                lo = mid + 1;
            }
        }
        f64::from_bits(lo)
    }
}

/// Sorted Euclidean distances between all pairs of rows
#[derive(Debug, Clone)]
pub struct DenseDistances {
    sorted: Vec<f64>,
}

impl DenseDistances {
    /// Build from a row-major matrix with `ncols` columns
    pub fn from_rows(cells: &[f64], ncols: usize) -> Self {
        let rows: Vec<&[f64]> = cells.chunks_exact(ncols.max(1)).collect();
        let mut distances = Vec::with_capacity(rows.len() * rows.len().saturating_sub(1) / 2);
        for (i, a) in rows.iter().enumerate() {
            for b in &rows[i + 1..] {
                let squared: f64 = a.iter().zip(b.iter()).map(|(u, v)| (u - v) * (u - v)).sum();
                distances.push(squared.sqrt());
            }
        }
        distances.sort_unstable_by(f64::total_cmp);
        Self { sorted: distances }
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.sorted
    }
}

impl OrderStatistics for DenseDistances {
    fn count(&self) -> usize {
        self.sorted.len()
    }

    fn order_statistic(&self, k: usize) -> f64 {
        self.sorted[k]
    }
}

/// Distance distribution of the rows selected for radius estimation
#[derive(Debug, Clone)]
pub enum Distances {
    Line(LineDistances),
    Dense(DenseDistances),
}

impl Distances {
    /// Pick the representation for a row-major matrix
    pub fn from_rows(cells: &[f64], ncols: usize) -> Self {
        if ncols == 1 {
            Self::Line(LineDistances::new(cells))
        } else {
            Self::Dense(DenseDistances::from_rows(cells, ncols))
        }
    }
}

impl OrderStatistics for Distances {
    fn count(&self) -> usize {
        match self {
            Self::Line(d) => d.count(),
            Self::Dense(d) => d.count(),
        }
    }

    fn order_statistic(&self, k: usize) -> f64 {
        match self {
            Self::Line(d) => d.order_statistic(k),
            Self::Dense(d) => d.order_statistic(k),
        }
    }
}
