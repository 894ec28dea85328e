//! # Core Module
//!
//! This module provides the fundamental value types and closed-form group theory
//! used throughout the supermultiplet library.
//!
//! ## Overview
//!
//! Everything here is a stateless, immutable value object: Young-diagram partitions
//! with validation and conjugation, the SU(4) irrep label with its dimension and
//! Casimir formulas, exact half-integer quantum numbers, and the conversion of
//! shell-model U(6) and U(10) configuration labels into SU(4) partitions.
//!
//! ## Architecture
//!
//! - **Partition Handling** ([`partitions`]) - Validated Young-diagram partitions,
//!   conjugation, and the four-row SU(4) label with its closed-form invariants
//! - **Quantum-Number Types** ([`models`]) - Exact half-integers and (S, T) multiplets
//! - **Shell Spaces** ([`shells`]) - U(6) sd-shell and U(10) pf-shell conversion to
//!   SU(4) labels, including the Pauli occupation constraint

pub mod models;
pub mod partitions;
pub mod shells;
