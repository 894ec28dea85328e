use crate::core::models::half_int::HalfInt;
use crate::core::models::multiplet::Multiplet;
use crate::core::partitions::su4::{Su4Info, Su4Partition};
use crate::engine::enumerator::enumerate_weights;
use crate::engine::error::EngineError;
use crate::engine::extractor::extract_multiplets;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::verifier::verify_dimension;
use serde::Serialize;
use tracing::{info, instrument};

/// The complete decomposition of one SU(4) irrep into (S, T) supermultiplets.
///
/// `multiplets` is sorted by decreasing S, then decreasing T, and the
/// dimension cross-check has already passed when a result is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchingResult {
    pub info: Su4Info,
    pub multiplets: Vec<Multiplet>,
    pub total_dimension: u64,
}

/// One line of the aggregated summary view: a multiplet plus the running
/// dimension total up to and including it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SummaryRow {
    pub spin: HalfInt,
    pub isospin: HalfInt,
    pub multiplicity: u64,
    pub dimension: u64,
    pub cumulative_dimension: u64,
}

impl BranchingResult {
    /// The multiplet listing with a cumulative-dimension column; the last
    /// row's total equals [`Self::total_dimension`].
    pub fn summary(&self) -> Vec<SummaryRow> {
        let mut running = 0;
        self.multiplets
            .iter()
            .map(|m| {
                running += m.total_dimension();
                SummaryRow {
                    spin: m.spin,
                    isospin: m.isospin,
                    multiplicity: m.multiplicity,
                    dimension: m.dimension,
                    cumulative_dimension: running,
                }
            })
            .collect()
    }
}

/// Normalizes raw row lengths (three or four integers) and runs the
/// branching workflow.
pub fn run_rows(rows: &[i64], reporter: &ProgressReporter) -> Result<BranchingResult, EngineError> {
    let shape = Su4Partition::from_entries(rows)?;
    run(shape, reporter)
}

/// Runs the full branching computation for one SU(4) partition:
/// weight enumeration, multiplicity extraction, dimension verification.
#[instrument(skip_all, name = "branching_workflow", fields(partition = %shape))]
pub fn run(
    shape: Su4Partition,
    reporter: &ProgressReporter,
) -> Result<BranchingResult, EngineError> {
    reporter.report(Progress::PhaseStart {
        name: "Enumerating weights",
    });
    info!(
        boxes = shape.box_count(),
        "Enumerating semistandard fillings."
    );
    let weights = enumerate_weights(shape);
    reporter.report(Progress::StatusUpdate {
        text: format!("{} distinct weights", weights.distinct_weights()),
    });
    reporter.report(Progress::PhaseFinish);

    reporter.report(Progress::PhaseStart {
        name: "Extracting (S, T) multiplets",
    });
    let multiplets = extract_multiplets(shape, &weights)?;
    info!(
        multiplets = multiplets.len(),
        "Highest-weight extraction complete."
    );
    reporter.report(Progress::PhaseFinish);

    reporter.report(Progress::PhaseStart {
        name: "Verifying dimensions",
    });
    let total_dimension = verify_dimension(shape, &multiplets)?;
    reporter.report(Progress::Message(format!(
        "Dimension check passed: {}",
        total_dimension
    )));
    reporter.report(Progress::PhaseFinish);

    info!(total_dimension, "Branching complete.");
    Ok(BranchingResult {
        info: shape.info(),
        multiplets,
        total_dimension,
    })
}
