use super::partition::{Partition, PartitionError};
use crate::core::models::half_int::HalfInt;
use serde::Serialize;
use std::fmt;

/// Number of rows of an SU(4) Young diagram, one per spin-isospin state
/// of a nucleon.
pub const SU4_ROWS: usize = 4;

/// The Young-diagram label [f1, f2, f3, f4] of an SU(4) irreducible
/// representation, with f1 ≥ f2 ≥ f3 ≥ f4 ≥ 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Su4Partition {
    rows: [u32; SU4_ROWS],
}

impl Su4Partition {
    /// The one-dimensional scalar representation [0, 0, 0, 0].
    pub const SCALAR: Self = Self { rows: [0; SU4_ROWS] };

    pub fn new(f1: u32, f2: u32, f3: u32, f4: u32) -> Result<Self, PartitionError> {
        Self::from_entries(&[f1 as i64, f2 as i64, f3 as i64, f4 as i64])
    }

    /// Validates and normalizes up to four row lengths; shorter input is
    /// padded with empty rows, so `[2, 1, 1]` means `[2, 1, 1, 0]`.
    pub fn from_entries(entries: &[i64]) -> Result<Self, PartitionError> {
        Self::from_partition(&Partition::new(entries, SU4_ROWS)?)
    }

    pub fn from_partition(partition: &Partition) -> Result<Self, PartitionError> {
        let entries: Vec<i64> = partition.rows().iter().map(|&r| r as i64).collect();
        let normalized = Partition::new(&entries, SU4_ROWS)?;
        let mut rows = [0u32; SU4_ROWS];
        rows.copy_from_slice(normalized.rows());
        Ok(Self { rows })
    }

    pub fn rows(self) -> [u32; SU4_ROWS] {
        self.rows
    }

    /// Total number of boxes N = f1 + f2 + f3 + f4.
    pub fn box_count(self) -> u32 {
        self.rows.iter().sum()
    }

    /// The row differences (α, β, γ) = (f1−f2, f2−f3, f3−f4) labelling the
    /// irrep in Dynkin form.
    pub fn row_differences(self) -> (u32, u32, u32) {
        let [f1, f2, f3, f4] = self.rows;
        (f1 - f2, f2 - f3, f3 - f4)
    }

    /// The half-integer highest-weight labels (p1, p2, p3). Only p3 can be
    /// negative.
    pub fn highest_weight(self) -> (HalfInt, HalfInt, HalfInt) {
        let [f1, f2, f3, f4] = self.rows.map(i64::from);
        (
            HalfInt::from_twice(f1 + f2 - f3 - f4),
            HalfInt::from_twice(f1 - f2 + f3 - f4),
            HalfInt::from_twice(f1 - f2 - f3 + f4),
        )
    }

    /// The Weyl dimension formula for SU(4),
    /// dim = Π_{i<j} (f_i − f_j + j − i) / (j − i).
    pub fn dimension(self) -> u64 {
        let [f1, f2, f3, f4] = self.rows.map(u64::from);
        (f1 - f2 + 1)
            * (f1 - f3 + 2)
            * (f1 - f4 + 3)
            * (f2 - f3 + 1)
            * (f2 - f4 + 2)
            * (f3 - f4 + 1)
            / 12
    }

    /// The quadratic Casimir eigenvalue in the (α, β, γ) labelling.
    pub fn casimir(self) -> u64 {
        let (alpha, beta, gamma) = self.row_differences();
        let (a, b, g) = (alpha as u64, beta as u64, gamma as u64);
        3 * a * (a + 4) + 4 * b * (b + 4) + 3 * g * (g + 4) + 4 * b * (a + g) + 2 * a * g
    }

    /// Strips complete columns of height four, which carry no SU(4) content:
    /// [f1, f2, f3, f4] and [f1−f4, f2−f4, f3−f4, 0] label the same irrep.
    pub fn reduced(self) -> Self {
        let [f1, f2, f3, f4] = self.rows;
        Self {
            rows: [f1 - f4, f2 - f4, f3 - f4, 0],
        }
    }

    pub fn info(self) -> Su4Info {
        let (p1, p2, p3) = self.highest_weight();
        let (alpha, beta, gamma) = self.row_differences();
        Su4Info {
            partition: self,
            p1,
            p2,
            p3,
            alpha,
            beta,
            gamma,
            casimir: self.casimir(),
            dimension: self.dimension(),
        }
    }
}

impl fmt::Display for Su4Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [f1, f2, f3, f4] = self.rows;
        write!(f, "[{}, {}, {}, {}]", f1, f2, f3, f4)
    }
}

/// Summary record of an SU(4) irrep: its labels in the three common
/// notations, the quadratic Casimir and the dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Su4Info {
    pub partition: Su4Partition,
    pub p1: HalfInt,
    pub p2: HalfInt,
    pub p3: HalfInt,
    pub alpha: u32,
    pub beta: u32,
    pub gamma: u32,
    pub casimir: u64,
    pub dimension: u64,
}
