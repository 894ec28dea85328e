//! # Supermultiplet Core Library
//!
//! A library for decomposing irreducible representations of SU(4) into
//! irreducible representations of SU(2)_S ⊗ SU(2)_T, the spin-isospin
//! supermultiplet structure of Wigner's theory of nuclear spectra.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a clear
//! separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains stateless value types: Young-diagram
//!   partitions and their conjugation, half-integer angular momenta, (S, T)
//!   multiplets, and the shell-model U(6)/U(10) label conversions.
//!
//! - **[`engine`]: The Logic Core.** The computational pipeline: semistandard-tableau
//!   weight enumeration (Kostka numbers), spin-isospin multiplicity extraction by
//!   highest-weight subtraction, and independent dimension verification.
//!
//! - **[`workflows`]: The Public API.** The highest-level, user-facing layer. It ties
//!   the `engine` and `core` together to run a complete branching computation and
//!   return the multiplet tables, providing a simple entry point for end-users.

pub mod core;
pub mod engine;
pub mod workflows;
