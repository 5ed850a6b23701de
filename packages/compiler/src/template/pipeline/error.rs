//! Fatal errors raised by pipeline phases.

use thiserror::Error;

use crate::template::pipeline::ir::enums::OpKind;
use crate::template::pipeline::ir::handle::XrefId;

pub type Result<T, E = PipelineError> = std::result::Result<T, E>;

/// A fatal condition encountered while lowering a template. Any error aborts the job; no phase
/// recovers or continues past one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    /// The op graph violates an invariant an earlier stage was supposed to establish: a dangling
    /// xref, a missing i18n context, an end marker with no matching start.
    #[error("{phase}: structural inconsistency at {op_kind:?} {xref}: {detail}")]
    StructuralInconsistency {
        phase: &'static str,
        op_kind: OpKind,
        xref: XrefId,
        detail: String,
    },

    /// The input uses a construct this pipeline does not handle yet.
    #[error("{phase}: unsupported construct: {detail}")]
    UnsupportedConstruct { phase: &'static str, detail: String },
}
