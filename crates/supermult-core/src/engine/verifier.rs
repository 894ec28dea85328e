use super::error::EngineError;
use crate::core::models::multiplet::Multiplet;
use crate::core::partitions::su4::Su4Partition;

/// Cross-checks a decomposition against the closed-form Weyl dimension:
/// Σ m(S,T)·(2S+1)(2T+1) must equal dim(f). Returns the verified total.
///
/// A mismatch means the enumeration or extraction is defective and is never
/// silently corrected.
pub fn verify_dimension(
    shape: Su4Partition,
    multiplets: &[Multiplet],
) -> Result<u64, EngineError> {
    let expected = shape.dimension();
    let actual: u64 = multiplets.iter().map(Multiplet::total_dimension).sum();

    if actual != expected {
        return Err(EngineError::DimensionMismatch {
            partition: shape,
            expected,
            actual,
        });
    }
    Ok(expected)
}
