//! # Engine Module
//!
//! The computational pipeline turning an SU(4) partition into its (S, T)
//! supermultiplet content.
//!
//! ## Overview
//!
//! The engine is purely functional: every stage maps immutable input to an
//! immutable result, with no shared state, caching, or I/O. A branching
//! computation runs three stages in sequence:
//!
//! - **Weight Enumeration** ([`enumerator`]) - Kostka numbers of every content
//!   vector, via a row-by-row dynamic program over interlacing shapes
//! - **Multiplicity Extraction** ([`extractor`]) - projection multiplicities
//!   collapsed to (S, T) irrep multiplicities by highest-weight subtraction
//! - **Dimension Verification** ([`verifier`]) - independent closed-form
//!   cross-check of the decomposition's total dimension
//!
//! [`progress`] carries optional diagnostic callbacks through the pipeline and
//! [`error`] defines the typed failures every stage reports.

pub mod enumerator;
pub mod error;
pub mod extractor;
pub mod progress;
pub mod verifier;
