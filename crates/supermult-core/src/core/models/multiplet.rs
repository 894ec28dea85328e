use super::half_int::HalfInt;
use serde::Serialize;

/// One irreducible representation of SU(2)_S ⊗ SU(2)_T appearing in a
/// branching decomposition, together with how many times it occurs.
///
/// `dimension` is the dimension (2S+1)(2T+1) of a single copy; the space the
/// multiplet spans inside the parent irrep is [`Self::total_dimension`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Multiplet {
    pub spin: HalfInt,
    pub isospin: HalfInt,
    pub multiplicity: u64,
    pub dimension: u64,
}

impl Multiplet {
    pub fn new(spin: HalfInt, isospin: HalfInt, multiplicity: u64) -> Self {
        let dimension = (spin.degeneracy() * isospin.degeneracy()) as u64;
        Self {
            spin,
            isospin,
            multiplicity,
            dimension,
        }
    }

    /// Dimension contributed to the parent irrep: multiplicity × (2S+1)(2T+1).
    pub fn total_dimension(&self) -> u64 {
        self.multiplicity * self.dimension
    }
}
