//! # Quantum-Number Models
//!
//! Exact value types for the quantum numbers appearing in spin-isospin
//! decompositions: half-integer angular momenta represented without floating
//! point, and the (S, T) multiplet record with its multiplicity and dimension.

pub mod half_int;
pub mod multiplet;
