//! A library to rank competing alternatives, each described by a vector of
//! minimised criterion values, with one of four classical multi-criteria
//! decision analysis procedures: TOPSIS, the Reference Set Method (RSM), a
//! skeleton-line compromise method (SP-CS) and a simplified additive-utility
//! method (UTA-DIS).
//!
//! The building blocks are exposed alongside the scorers: Pareto-dominance
//! extraction and layering in [`crate::utils::dominance`], column
//! normalisation in [`crate::core::Normaliser`] and distance metrics in
//! [`crate::metrics`]. Each scorer
//! composes them differently but shares the same conventions: all criteria
//! are minimised (callers must invert maximised columns first), weights are
//! scaling factors applied after normalisation, and the returned ranking
//! always reads "higher score = better".
//!
//! ```
//! use outrank::algorithms::{Method, RankOptions};
//! use outrank::core::DecisionMatrix;
//!
//! let matrix = DecisionMatrix::new(vec![
//!     vec![34_000.0, 7.5, 140.0],
//!     vec![28_500.0, 8.1, 155.0],
//!     vec![41_000.0, 6.2, 120.0],
//! ])?;
//! let ranking = Method::Topsis.rank(&matrix, RankOptions::default())?;
//! assert_eq!(ranking.len(), 3);
//! # Ok::<(), outrank::core::RankError>(())
//! ```
pub mod algorithms;
pub mod core;
pub mod metrics;
pub mod utils;
