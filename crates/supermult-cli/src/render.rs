use std::fmt::Write;
use supermultiplet::core::partitions::su4::Su4Info;
use supermultiplet::workflows::branch::BranchingResult;

const RULE_WIDTH: usize = 64;

/// Renders the irrep summary block: labels in the three notations, the
/// quadratic Casimir and the dimension.
pub fn info_block(info: &Su4Info) -> String {
    let mut out = String::new();
    writeln!(out, "● SU(4) representation {}", info.partition).unwrap();
    writeln!(
        out,
        "  (p1, p2, p3) = ({}, {}, {})",
        info.p1, info.p2, info.p3
    )
    .unwrap();
    writeln!(
        out,
        "  (α, β, γ)    = ({}, {}, {})",
        info.alpha, info.beta, info.gamma
    )
    .unwrap();
    writeln!(out, "  C2[SU(4)]    = {}", info.casimir).unwrap();
    writeln!(out, "  dimension    = {}", info.dimension).unwrap();
    out
}

/// Renders the branching table with the cumulative-dimension column and a
/// totals footer.
pub fn branching_table(result: &BranchingResult) -> String {
    let mut out = String::new();
    writeln!(
        out,
        "● Branching rules to (S, T): {} multiplet(s)",
        result.multiplets.len()
    )
    .unwrap();
    writeln!(out, "{}", "-".repeat(RULE_WIDTH)).unwrap();
    writeln!(
        out,
        "{:>8} {:>8} {:>6} {:>10} {:>12}",
        "S", "T", "mult", "dim(S,T)", "cumulative"
    )
    .unwrap();

    for row in result.summary() {
        writeln!(
            out,
            "{:>8} {:>8} {:>6} {:>10} {:>12}",
            row.spin.to_string(),
            row.isospin.to_string(),
            row.multiplicity,
            row.dimension,
            row.cumulative_dimension
        )
        .unwrap();
    }

    writeln!(out, "{}", "-".repeat(RULE_WIDTH)).unwrap();
    writeln!(out, "Total dimension: {}", result.total_dimension).unwrap();
    out
}
