use super::enumerator::WeightTable;
use super::error::EngineError;
use crate::core::models::half_int::HalfInt;
use crate::core::models::multiplet::Multiplet;
use crate::core::partitions::su4::Su4Partition;
use std::collections::HashMap;

/// Projection multiplicities n(Sz, Tz), keyed by doubled projections.
type ProjectionTable = HashMap<(i64, i64), u64>;

/// Extracts the (S, T) irrep multiplicities of `shape` from its weight
/// system.
///
/// The four symbol values carry the spin-isospin projections
/// 1 ↦ (+1/2, +1/2), 2 ↦ (+1/2, −1/2), 3 ↦ (−1/2, +1/2), 4 ↦ (−1/2, −1/2),
/// so a content vector (n1, n2, n3, n4) sits at 2Sz = n1+n2−n3−n4 and
/// 2Tz = n1−n2+n3−n4. Collapsing the weights onto these two projections and
/// applying highest-weight subtraction in both quantum numbers at once gives
///
/// m(S, T) = n(S, T) − n(S+1, T) − n(S, T+1) + n(S+1, T+1).
///
/// A negative value can only come from an internal defect and is fatal.
/// The returned multiplets are sorted by decreasing S, then decreasing T.
pub fn extract_multiplets(
    shape: Su4Partition,
    weights: &WeightTable,
) -> Result<Vec<Multiplet>, EngineError> {
    let projections = collapse_to_projections(weights);

    // Both doubled projections share the parity of the box count, and
    // neither can exceed it.
    let reach = weights.box_count() as i64;
    let parity = reach % 2;

    let mut multiplets = Vec::new();
    let mut twice_s = parity;
    while twice_s <= reach {
        let mut twice_t = parity;
        while twice_t <= reach {
            let multiplicity = projection(&projections, twice_s, twice_t)
                - projection(&projections, twice_s + 2, twice_t)
                - projection(&projections, twice_s, twice_t + 2)
                + projection(&projections, twice_s + 2, twice_t + 2);

            if multiplicity < 0 {
                return Err(EngineError::BranchingInconsistency {
                    partition: shape,
                    spin: HalfInt::from_twice(twice_s),
                    isospin: HalfInt::from_twice(twice_t),
                    multiplicity,
                });
            }
            if multiplicity > 0 {
                multiplets.push(Multiplet::new(
                    HalfInt::from_twice(twice_s),
                    HalfInt::from_twice(twice_t),
                    multiplicity as u64,
                ));
            }
            twice_t += 2;
        }
        twice_s += 2;
    }

    multiplets.sort_by(|a, b| {
        b.spin
            .cmp(&a.spin)
            .then_with(|| b.isospin.cmp(&a.isospin))
    });
    Ok(multiplets)
}

fn collapse_to_projections(weights: &WeightTable) -> ProjectionTable {
    let mut projections = ProjectionTable::new();
    for (content, &kostka) in weights.iter() {
        let [n1, n2, n3, n4] = content.map(i64::from);
        let twice_sz = n1 + n2 - n3 - n4;
        let twice_tz = n1 - n2 + n3 - n4;
        *projections.entry((twice_sz, twice_tz)).or_insert(0) += kostka;
    }
    projections
}

fn projection(projections: &ProjectionTable, twice_sz: i64, twice_tz: i64) -> i64 {
    projections
        .get(&(twice_sz, twice_tz))
        .copied()
        .unwrap_or(0) as i64
}
