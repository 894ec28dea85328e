//! # Workflows Module
//!
//! High-level entry points tying the engine stages together.
//!
//! A workflow takes a validated input label, runs the full pipeline with
//! progress reporting at each checkpoint, and returns the completed result
//! tables. [`branch`] implements the SU(4) → SU(2)_S ⊗ SU(2)_T branching
//! computation.

pub mod branch;
