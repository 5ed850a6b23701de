//! Extracts ICUs out of i18n blocks and rewrites their update ops into i18n expressions.

use std::collections::HashMap;

use crate::i18n::i18n_ast::Message;
use crate::template::pipeline::compilation::CompilationJob;
use crate::template::pipeline::error::{PipelineError, Result};
use crate::template::pipeline::ir::enums::{I18nParamResolutionTime, OpKind};
use crate::template::pipeline::ir::expression::Expression;
use crate::template::pipeline::ir::handle::{SlotHandle, XrefId};
use crate::template::pipeline::ir::ops::create::CreateOp;
use crate::template::pipeline::ir::ops::update::{create_i18n_expression_op, UpdateOp};

pub(super) const NAME: &str = "icu_extraction";

/// An ICU lifted out of the create list, waiting for its update op to be rewritten.
struct ExtractedIcu {
    message: Message,

    /// Context, xref and slot of the owning i18n block.
    context: XrefId,
    block: XrefId,
    handle: SlotHandle,
}

/// Deletes `Icu` markers from the create list and replaces each `IcuUpdate` op, in place, with
/// an `I18nExpression` evaluating the ICU's switch variable into its expression placeholder.
///
/// The ICU's own representation is static from here on: it lives entirely inside the i18n
/// message, and only the extracted expression survives as an op.
pub fn extract_icus(job: &mut CompilationJob) -> Result<()> {
    for unit in job.units_mut() {
        let mut icus: HashMap<XrefId, ExtractedIcu> = HashMap::new();
        let mut current_block: Option<(XrefId, XrefId, SlotHandle)> = None;

        let mut pos = unit.create.head();
        while let Some(p) = pos {
            match unit.create.get(p) {
                CreateOp::I18nStart(op) => {
                    let context =
                        op.context
                            .ok_or_else(|| PipelineError::StructuralInconsistency {
                                phase: NAME,
                                op_kind: OpKind::I18nStart,
                                xref: op.xref,
                                detail: "i18n block has no context".to_string(),
                            })?;
                    current_block = Some((op.xref, context, op.handle));
                }
                CreateOp::I18nEnd(_) => {
                    current_block = None;
                }
                CreateOp::Icu(op) => {
                    let (block, context, handle) =
                        current_block.ok_or_else(|| PipelineError::StructuralInconsistency {
                            phase: NAME,
                            op_kind: OpKind::Icu,
                            xref: op.xref,
                            detail: "ICU outside of an i18n block".to_string(),
                        })?;
                    icus.insert(
                        op.xref,
                        ExtractedIcu {
                            message: op.message.clone(),
                            context,
                            block,
                            handle,
                        },
                    );
                    unit.create.remove(p);
                }
                _ => {}
            }
            pos = unit.create.next_after(p);
        }

        let mut pos = unit.update.head();
        while let Some(p) = pos {
            let xref = match unit.update.get(p) {
                UpdateOp::IcuUpdate(op) => Some(op.xref),
                _ => None,
            };
            if let Some(xref) = xref {
                let icu =
                    icus.get(&xref)
                        .ok_or_else(|| PipelineError::StructuralInconsistency {
                            phase: NAME,
                            op_kind: OpKind::IcuUpdate,
                            xref,
                            detail: "no ICU was extracted for this update op".to_string(),
                        })?;
                let node =
                    icu.message
                        .icu()
                        .ok_or_else(|| PipelineError::StructuralInconsistency {
                            phase: NAME,
                            op_kind: OpKind::IcuUpdate,
                            xref,
                            detail: "could not find an ICU in the message".to_string(),
                        })?;
                let placeholder = node.expression_placeholder.clone().ok_or_else(|| {
                    PipelineError::StructuralInconsistency {
                        phase: NAME,
                        op_kind: OpKind::IcuUpdate,
                        xref,
                        detail: "ICU is missing its expression placeholder".to_string(),
                    }
                })?;
                unit.update.replace(
                    p,
                    create_i18n_expression_op(
                        icu.context,
                        icu.block,
                        icu.handle,
                        Expression::lexical_read(node.expression.clone()),
                        placeholder,
                        I18nParamResolutionTime::Postprocessing,
                    ),
                );
            }
            pos = unit.update.next_after(p);
        }
    }
    Ok(())
}
