//! Halstead complexity metrics for contract IR graphs.
//!
//! The library is a pure, stateless transform: an externally built
//! Unit → Function → Node → Operation graph goes in, per-unit
//! operator/operand counts and the classical Halstead metric suite come
//! out, rendered as a labeled table with descriptive prose lines.
//!
//! Pipeline stages, each independent and reentrant:
//!
//! 1. [`halstead::count_units`]: traversal and deduplicated counting;
//! 2. [`halstead::compute_units`]: the derived-formula suite with
//!    explicit domain errors;
//! 3. [`report`]: table and text assembly.
//!
//! Hosts embed the pipeline through the [`registry`] catalog or the
//! [`commands`] layer; the core itself performs no I/O.

pub mod commands;
pub mod halstead;
pub mod ir;
pub mod registry;
pub mod report;

pub use halstead::{HalsteadMetrics, MetricsError, OpCounts};
