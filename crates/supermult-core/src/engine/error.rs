use thiserror::Error;

use crate::core::models::half_int::HalfInt;
use crate::core::partitions::partition::PartitionError;
use crate::core::partitions::su4::Su4Partition;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    InvalidPartition(#[from] PartitionError),

    #[error(
        "branching inconsistency for {partition}: extraction produced multiplicity \
         {multiplicity} at (S, T) = ({spin}, {isospin})"
    )]
    BranchingInconsistency {
        partition: Su4Partition,
        spin: HalfInt,
        isospin: HalfInt,
        multiplicity: i64,
    },

    #[error(
        "dimension mismatch for {partition}: closed-form formula gives {expected} \
         but the multiplets sum to {actual}"
    )]
    DimensionMismatch {
        partition: Su4Partition,
        expected: u64,
        actual: u64,
    },
}
