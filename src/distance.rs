//! Weighted edit distance via dynamic programming.
//!
//! The engine computes the minimum total cost to transform one string into
//! another using substitution, insertion, deletion, and (when its weight is
//! positive) transposition of adjacent characters. Unit weights with
//! transposition disabled give the classic Levenshtein distance; a positive
//! transposition weight gives Damerau-Levenshtein.
//!
//! Characters (Unicode scalar values) are the sequence elements, not bytes.
//! The distinction matters for UTF-8 text where byte count != char count.

use crate::types::{EditOp, EditWeights, WeightedEdit};

/// Minimum total weighted cost to transform `a` into `b`.
///
/// O(m*n) time and space for inputs of m and n characters. The DP table is
/// local to one call and discarded after the final cost is read out.
///
/// Empty-string cases fall out of the table seeding: an empty `a` costs
/// `n * insertion`, an empty `b` costs `m * deletion`, both empty cost 0.
pub fn edit_distance(a: &str, b: &str, weights: &EditWeights) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let m = a.len();
    let n = b.len();

    // Flat (m+1) x (n+1) grid, row-major. Row 0 and column 0 carry the
    // cumulative cost of building one string from nothing.
    let mut table = Grid::new(m, n, weights);

    for i in 1..=m {
        for j in 1..=n {
            let cell = if a[i - 1] == b[j - 1] {
                // No penalty: carry the diagonal cost forward unchanged.
                WeightedEdit {
                    op: EditOp::Equal,
                    cost: table.get(i - 1, j - 1).cost,
                }
            } else {
                let mut best = min_edit([
                    WeightedEdit {
                        op: EditOp::Substitute,
                        cost: table.get(i - 1, j - 1).cost + weights.substitution,
                    },
                    WeightedEdit {
                        op: EditOp::Insert,
                        cost: table.get(i, j - 1).cost + weights.insertion,
                    },
                    WeightedEdit {
                        op: EditOp::Delete,
                        cost: table.get(i - 1, j).cost + weights.deletion,
                    },
                ]);
                // Adjacent transposition, only in Damerau-Levenshtein mode.
                if weights.transposes()
                    && i > 1
                    && j > 1
                    && a[i - 1] == b[j - 2]
                    && a[i - 2] == b[j - 1]
                {
                    let transpose = WeightedEdit {
                        op: EditOp::Transpose,
                        cost: table.get(i - 2, j - 2).cost + weights.transposition,
                    };
                    if transpose.cost < best.cost {
                        best = transpose;
                    }
                }
                best
            };
            table.set(i, j, cell);
        }
    }

    table.get(m, n).cost
}

/// Pick the candidate with minimal cost.
///
/// Ties are broken by position; which operation wins is unobservable since
/// only the numeric cost survives the computation.
fn min_edit(candidates: [WeightedEdit; 3]) -> WeightedEdit {
    let mut best = candidates[0];
    for candidate in &candidates[1..] {
        if candidate.cost < best.cost {
            best = *candidate;
        }
    }
    best
}

/// Flat 2-D DP table with explicit dimensions.
struct Grid {
    cells: Vec<WeightedEdit>,
    width: usize,
}

impl Grid {
    /// Allocate the table and seed row 0 / column 0 with cumulative weighted
    /// insertion / deletion costs.
    fn new(m: usize, n: usize, weights: &EditWeights) -> Self {
        let width = n + 1;
        let mut grid = Grid {
            cells: vec![
                WeightedEdit {
                    op: EditOp::Equal,
                    cost: 0.0,
                };
                (m + 1) * width
            ],
            width,
        };
        for j in 1..=n {
            grid.set(
                0,
                j,
                WeightedEdit {
                    op: EditOp::Insert,
                    cost: j as f64 * weights.insertion,
                },
            );
        }
        for i in 1..=m {
            grid.set(
                i,
                0,
                WeightedEdit {
                    op: EditOp::Delete,
                    cost: i as f64 * weights.deletion,
                },
            );
        }
        grid
    }

    #[inline]
    fn get(&self, i: usize, j: usize) -> WeightedEdit {
        self.cells[i * self.width + j]
    }

    #[inline]
    fn set(&mut self, i: usize, j: usize, cell: WeightedEdit) {
        self.cells[i * self.width + j] = cell;
    }
}
