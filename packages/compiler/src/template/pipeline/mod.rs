//! The template pipeline: lowers an ingested template IR into its final instruction sequence.
//!
//! A [`CompilationJob`](compilation::CompilationJob) is produced by template ingestion and
//! mutated in place by a fixed sequence of [`phases`]. Run the whole pipeline with
//! [`transform`].

pub mod compilation;
pub mod error;
pub mod ir;
pub mod phases;

pub use compilation::{CompilationJob, ViewCompilationUnit};
pub use error::{PipelineError, Result};
pub use phases::transform;
