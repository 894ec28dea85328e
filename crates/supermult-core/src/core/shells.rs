//! Conversion of shell-model configuration labels to SU(4) partitions.
//!
//! A configuration of A nucleons in a major oscillator shell carries a
//! spatial U(Ω) Young diagram (Ω = 6 for the sd shell, Ω = 10 for the pf
//! shell). Under the complementary pairing of spatial and spin-isospin
//! symmetry, its SU(4) label is the conjugate (transposed) diagram. Each
//! spatial orbital holds at most four nucleons (two spin × two isospin
//! states), so a diagram whose first row exceeds four boxes is unphysical.

use super::partitions::partition::{Partition, PartitionError};
use super::partitions::su4::Su4Partition;
use std::fmt;
use thiserror::Error;

/// Nucleons that fit in one spatial orbital: two spin times two isospin states.
pub const ORBITAL_CAPACITY: u32 = 4;

/// The supported single-particle spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellSpace {
    /// The sd shell, with a six-dimensional spatial U(6) symmetry.
    Sd,
    /// The pf shell, with a ten-dimensional spatial U(10) symmetry.
    Pf,
}

impl ShellSpace {
    /// Number of spatial orbitals, i.e. the rank of the unitary group.
    pub fn orbital_count(self) -> usize {
        match self {
            ShellSpace::Sd => 6,
            ShellSpace::Pf => 10,
        }
    }

    pub fn group_label(self) -> &'static str {
        match self {
            ShellSpace::Sd => "U(6)",
            ShellSpace::Pf => "U(10)",
        }
    }
}

impl fmt::Display for ShellSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.group_label())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShellError {
    #[error(transparent)]
    InvalidDiagram(#[from] PartitionError),

    #[error(
        "Pauli exclusion violated for the {space} diagram: first row holds {occupancy} boxes, \
         but a spatial orbital accommodates at most {ORBITAL_CAPACITY} nucleons"
    )]
    PauliViolation { space: ShellSpace, occupancy: u32 },
}

/// Converts a spatial Young diagram of `space` into its SU(4) spin-isospin
/// label: validate, check the Pauli constraint, conjugate, then strip full
/// four-box columns. The empty diagram (closed shell) maps to the scalar.
pub fn to_su4(space: ShellSpace, diagram: &[i64]) -> Result<Su4Partition, ShellError> {
    let spatial = Partition::new(diagram, space.orbital_count())?;

    let occupancy = spatial.rows().first().copied().unwrap_or(0);
    if occupancy > ORBITAL_CAPACITY {
        return Err(ShellError::PauliViolation { space, occupancy });
    }

    // The Pauli check bounds the conjugate to at most four rows, so the
    // SU(4) normalization below cannot fail.
    let conjugate = spatial.conjugate();
    let su4 = Su4Partition::from_partition(&conjugate)?;
    Ok(su4.reduced())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_nucleon_maps_to_the_fundamental() {
        let sd = to_su4(ShellSpace::Sd, &[1, 0, 0, 0, 0, 0]).unwrap();
        assert_eq!(sd.rows(), [1, 0, 0, 0]);

        let pf = to_su4(ShellSpace::Pf, &[1, 0, 0, 0, 0, 0, 0, 0, 0, 0]).unwrap();
        assert_eq!(pf.rows(), [1, 0, 0, 0]);
    }

    #[test]
    fn sd_shell_example_configuration() {
        // {2, 1, 1} has columns of heights 3 and 1.
        let su4 = to_su4(ShellSpace::Sd, &[2, 1, 1, 0, 0, 0]).unwrap();
        assert_eq!(su4.rows(), [3, 1, 0, 0]);
    }

    #[test]
    fn pf_shell_example_configuration() {
        let su4 = to_su4(ShellSpace::Pf, &[2, 2, 1, 1, 0, 0, 0, 0, 0, 0]).unwrap();
        assert_eq!(su4.rows(), [4, 2, 0, 0]);
    }

    #[test]
    fn closed_shell_maps_to_the_scalar() {
        let vacuum = to_su4(ShellSpace::Sd, &[0; 6]).unwrap();
        assert_eq!(vacuum, Su4Partition::SCALAR);

        let filled = to_su4(ShellSpace::Sd, &[4, 4, 4, 4, 4, 4]).unwrap();
        assert_eq!(filled, Su4Partition::SCALAR);
    }

    #[test]
    fn rejects_overfilled_orbitals() {
        let result = to_su4(ShellSpace::Sd, &[5, 0, 0, 0, 0, 0]);
        assert!(matches!(
            result,
            Err(ShellError::PauliViolation {
                space: ShellSpace::Sd,
                occupancy: 5
            })
        ));
    }

    #[test]
    fn rejects_malformed_diagrams() {
        let result = to_su4(ShellSpace::Sd, &[1, 2, 0, 0, 0, 0]);
        assert!(matches!(result, Err(ShellError::InvalidDiagram(_))));

        let negative = to_su4(ShellSpace::Pf, &[2, -1, 0, 0, 0, 0, 0, 0, 0, 0]);
        assert!(matches!(negative, Err(ShellError::InvalidDiagram(_))));
    }
}
