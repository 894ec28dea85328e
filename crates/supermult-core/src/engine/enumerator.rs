use crate::core::partitions::su4::{SU4_ROWS, Su4Partition};
use std::collections::HashMap;

/// How many boxes of each of the four symbol values a semistandard filling
/// uses; the components sum to the box count of the shape.
pub type Content = [u32; SU4_ROWS];

/// The weight system of an SU(4) irrep: for every content vector, the number
/// of semistandard fillings realizing it (its Kostka number).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightTable {
    weights: HashMap<Content, u64>,
    box_count: u32,
}

impl WeightTable {
    /// The Kostka number K(f; n); zero for contents outside the support.
    pub fn multiplicity(&self, content: &Content) -> u64 {
        self.weights.get(content).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Content, &u64)> {
        self.weights.iter()
    }

    pub fn distinct_weights(&self) -> usize {
        self.weights.len()
    }

    pub fn box_count(&self) -> u32 {
        self.box_count
    }
}

/// Enumerates the weight multiplicities of `shape` by building semistandard
/// fillings one symbol value at a time.
///
/// After placing all boxes with symbols ≤ k, the filled cells form a
/// sub-diagram whose rows interlace the previous one (weak increase along
/// rows, strict increase down columns). The dynamic program tracks, per
/// (partial shape, partial content) state, the number of fillings reaching
/// it; shapes that can no longer grow into `shape` are pruned. With the
/// alphabet fixed at four symbols the state space stays polynomial in the
/// box count.
pub fn enumerate_weights(shape: Su4Partition) -> WeightTable {
    let target = shape.rows();

    let mut states: HashMap<(Content, Content), u64> = HashMap::new();
    states.insert(([0; SU4_ROWS], [0; SU4_ROWS]), 1);

    for symbol in 1..=SU4_ROWS {
        let mut next: HashMap<(Content, Content), u64> = HashMap::new();
        for ((partial, content), &count) in &states {
            let placed: u32 = partial.iter().sum();
            for grown in interlacing_extensions(*partial, target, symbol) {
                let grown_boxes: u32 = grown.iter().sum();
                let mut extended = *content;
                extended[symbol - 1] = grown_boxes - placed;
                *next.entry((grown, extended)).or_insert(0) += count;
            }
        }
        states = next;
    }

    let mut weights = HashMap::new();
    for ((partial, content), count) in states {
        debug_assert_eq!(partial, target);
        *weights.entry(content).or_insert(0) += count;
    }

    WeightTable {
        weights,
        box_count: shape.box_count(),
    }
}

/// All shapes of `rows` rows that interlace `partial` and can still be
/// completed to `target` with the remaining symbols.
fn interlacing_extensions(partial: Content, target: Content, rows: usize) -> Vec<Content> {
    let mut found = Vec::new();
    let mut candidate = [0u32; SU4_ROWS];
    grow_row(0, rows, &partial, &target, &mut candidate, &mut found);
    found
}

fn grow_row(
    row: usize,
    rows: usize,
    partial: &Content,
    target: &Content,
    candidate: &mut Content,
    found: &mut Vec<Content>,
) {
    if row == rows {
        found.push(*candidate);
        return;
    }

    // Interlacing: the previous shape's row above caps this row, and the row
    // at the same index is a floor (strict column increase forbids shrinking).
    let upper = if row == 0 {
        target[0]
    } else {
        partial[row - 1].min(target[row])
    };
    let interlace_floor = if row + 1 < rows { partial[row] } else { 0 };
    // Rows still to come can only lengthen lower rows, so this row must
    // already cover the target row it will map onto.
    let reach_floor = target[row + SU4_ROWS - rows];
    let lower = interlace_floor.max(reach_floor);

    for length in lower..=upper {
        candidate[row] = length;
        grow_row(row + 1, rows, partial, target, candidate, found);
    }
    candidate[row] = 0;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape(rows: [u32; 4]) -> Su4Partition {
        Su4Partition::new(rows[0], rows[1], rows[2], rows[3]).unwrap()
    }

    /// Character dimension: sum of Kostka numbers over all contents.
    fn weight_sum(table: &WeightTable) -> u64 {
        table.iter().map(|(_, &k)| k).sum()
    }

    #[test]
    fn empty_shape_has_the_trivial_weight() {
        let table = enumerate_weights(Su4Partition::SCALAR);
        assert_eq!(table.distinct_weights(), 1);
        assert_eq!(table.multiplicity(&[0, 0, 0, 0]), 1);
    }

    #[test]
    fn single_box_has_four_unit_weights() {
        let table = enumerate_weights(shape([1, 0, 0, 0]));
        assert_eq!(table.distinct_weights(), 4);
        assert_eq!(table.multiplicity(&[1, 0, 0, 0]), 1);
        assert_eq!(table.multiplicity(&[0, 0, 0, 1]), 1);
    }

    #[test]
    fn antisymmetric_pair_weights_are_strict_columns() {
        let table = enumerate_weights(shape([1, 1, 0, 0]));
        // One filling per unordered pair of distinct symbols.
        assert_eq!(table.distinct_weights(), 6);
        assert_eq!(table.multiplicity(&[1, 1, 0, 0]), 1);
        assert_eq!(table.multiplicity(&[1, 0, 0, 1]), 1);
        assert_eq!(table.multiplicity(&[2, 0, 0, 0]), 0);
    }

    #[test]
    fn symmetric_pair_allows_repeats() {
        let table = enumerate_weights(shape([2, 0, 0, 0]));
        assert_eq!(table.distinct_weights(), 10);
        assert_eq!(table.multiplicity(&[2, 0, 0, 0]), 1);
        assert_eq!(table.multiplicity(&[1, 1, 0, 0]), 1);
    }

    #[test]
    fn weight_sums_reproduce_gl4_dimensions() {
        for rows in [[1, 0, 0, 0], [2, 1, 1, 0], [3, 2, 1, 0], [8, 5, 5, 0]] {
            let p = shape(rows);
            assert_eq!(weight_sum(&enumerate_weights(p)), p.dimension());
        }
    }

    #[test]
    fn mixed_symmetry_kostka_number() {
        // K((2,1), (1,1,1)) = 2: two standard tableaux of the hook shape.
        let table = enumerate_weights(shape([2, 1, 0, 0]));
        assert_eq!(table.multiplicity(&[1, 1, 1, 0]), 2);
        assert_eq!(table.multiplicity(&[2, 1, 0, 0]), 1);
        assert_eq!(table.multiplicity(&[3, 0, 0, 0]), 0);
    }

    #[test]
    fn contents_are_dominated_by_the_shape() {
        let p = shape([3, 1, 0, 0]);
        let table = enumerate_weights(p);
        for (content, &k) in table.iter() {
            assert!(k > 0);
            assert_eq!(content.iter().sum::<u32>(), p.box_count());
            // Dominance: no partial sum of the content, sorted descending,
            // may exceed the shape's partial sum.
            let mut sorted = *content;
            sorted.sort_unstable_by(|a, b| b.cmp(a));
            let mut shape_sum = 0u32;
            let mut content_sum = 0u32;
            for (s, c) in p.rows().iter().zip(sorted.iter()) {
                shape_sum += s;
                content_sum += c;
                assert!(content_sum <= shape_sum);
            }
        }
    }
}
