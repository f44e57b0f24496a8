//! Whole-chain benchmarks.
//!
//! These run every stage from time grid to filtered estimate, as the
//! `amlab` binary does before drawing.

mod pipeline;

pub use pipeline::bench_pipeline;
