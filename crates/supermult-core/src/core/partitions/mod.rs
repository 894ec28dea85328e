//! # Partition Handling
//!
//! Young-diagram partitions and the four-row SU(4) label.
//!
//! A partition is a non-increasing sequence of non-negative integers giving
//! the row lengths of a Young diagram. [`partition`] provides validated
//! general-length partitions and diagram conjugation (transposition);
//! [`su4`] provides the fixed four-row SU(4) irrep label together with its
//! closed-form dimension and quadratic Casimir.

pub mod partition;
pub mod su4;
