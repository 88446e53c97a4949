//! tetrad-core
//!
//! Pure domain types for the Dark Tetrad assessment: scales, item
//! responses, score records, and population statistics. No I/O and no AWS
//! dependency — this is the shared vocabulary of the tetrad system.

pub mod error;
pub mod models;
