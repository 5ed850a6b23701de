//! Retargets i18n expressions at the last slot consumer of their i18n block.

use std::collections::HashMap;

use crate::template::pipeline::compilation::CompilationJob;
use crate::template::pipeline::error::{PipelineError, Result};
use crate::template::pipeline::ir::enums::OpKind;
use crate::template::pipeline::ir::handle::XrefId;
use crate::template::pipeline::ir::ops::create::CreateOp;
use crate::template::pipeline::ir::ops::update::UpdateOp;

pub(super) const NAME: &str = "assign_i18n_slot_dependencies";

/// Updates the target of every `I18nExpression` op from its i18n block to the last
/// slot-consuming create op inside that block.
///
/// An i18n expression must execute while the active slot context is still inside its block, so
/// that the runtime flushes the pending message update at the right moment. The block's last
/// slot consumer is the latest point that holds. For a block with no slot-consuming content,
/// the block's own start op is the last consumer, since starting the block consumes a slot.
pub fn assign_i18n_slot_dependencies(job: &mut CompilationJob) -> Result<()> {
    // Anchor of each i18n block, by block xref.
    let mut last_slot_consumers: HashMap<XrefId, XrefId> = HashMap::new();

    // Owning block of each i18n context, by context xref.
    let mut context_blocks: HashMap<XrefId, XrefId> = HashMap::new();

    let mut last_slot_consumer: Option<XrefId> = None;
    let mut current_block: Option<XrefId> = None;

    for unit in job.units_mut() {
        // Record the last consumed slot before each i18n end marker.
        for op in unit.create.iter() {
            if op.consumes_slot() {
                last_slot_consumer = Some(op.xref());
            }

            match op {
                CreateOp::I18nStart(op) => {
                    current_block = Some(op.xref);
                }
                CreateOp::I18nEnd(op) => {
                    let block = current_block.take().ok_or_else(|| {
                        PipelineError::StructuralInconsistency {
                            phase: NAME,
                            op_kind: OpKind::I18nEnd,
                            xref: op.xref,
                            detail: "i18n end marker with no i18n block open".to_string(),
                        }
                    })?;
                    let anchor =
                        last_slot_consumer.ok_or_else(|| PipelineError::StructuralInconsistency {
                            phase: NAME,
                            op_kind: OpKind::I18nEnd,
                            xref: op.xref,
                            detail: "no slot consumer precedes the end of the i18n block"
                                .to_string(),
                        })?;
                    last_slot_consumers.insert(block, anchor);
                }
                CreateOp::I18nContext(op) => {
                    context_blocks.insert(op.xref, op.i18n_block);
                }
                _ => {}
            }
        }

        // Retarget i18n expressions at their block's anchor.
        let mut pos = unit.update.head();
        while let Some(p) = pos {
            if let UpdateOp::I18nExpression(op) = unit.update.get_mut(p) {
                let block = context_blocks.get(&op.context).copied().ok_or_else(|| {
                    PipelineError::StructuralInconsistency {
                        phase: NAME,
                        op_kind: OpKind::I18nExpression,
                        xref: op.context,
                        detail: "i18n expression references an unknown i18n context".to_string(),
                    }
                })?;
                let target = last_slot_consumers.get(&block).copied().ok_or_else(|| {
                    PipelineError::StructuralInconsistency {
                        phase: NAME,
                        op_kind: OpKind::I18nExpression,
                        xref: block,
                        detail: "no anchor was recorded for the i18n block".to_string(),
                    }
                })?;
                op.target = target;
            }
            pos = unit.update.next_after(p);
        }
    }
    Ok(())
}
