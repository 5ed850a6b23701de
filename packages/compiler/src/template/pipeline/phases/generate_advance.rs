//! Inserts `Advance` ops to position the slot context ahead of slot-dependent update ops.

use std::collections::HashMap;

use crate::template::pipeline::compilation::CompilationJob;
use crate::template::pipeline::error::{PipelineError, Result};
use crate::template::pipeline::ir::handle::XrefId;
use crate::template::pipeline::ir::ops::update::create_advance_op;

pub(super) const NAME: &str = "generate_advance";

/// Walks each unit's update ops tracking the implicit slot context, which starts at slot 0, and
/// inserts an `Advance` op in front of every slot-dependent op whose target sits ahead of the
/// current context.
///
/// Update ops execute in slot order, so the context only ever moves forward.
pub fn generate_advance(job: &mut CompilationJob) -> Result<()> {
    for unit in job.units_mut() {
        // Slot of every slot-consuming create op, by xref.
        let mut slots: HashMap<XrefId, usize> = HashMap::new();
        for op in unit.create.iter() {
            if let Some(handle) = op.slot_handle() {
                let slot = handle
                    .slot
                    .ok_or_else(|| PipelineError::StructuralInconsistency {
                        phase: NAME,
                        op_kind: op.kind(),
                        xref: op.xref(),
                        detail: "op has consumed but unallocated slot".to_string(),
                    })?;
                slots.insert(op.xref(), slot);
            }
        }

        let mut slot_context = 0usize;
        let mut pos = unit.update.head();
        while let Some(p) = pos {
            if let Some(target) = unit.update.get(p).depends_on_slot_context() {
                let kind = unit.update.get(p).kind();
                let slot = slots.get(&target).copied().ok_or_else(|| {
                    PipelineError::StructuralInconsistency {
                        phase: NAME,
                        op_kind: kind,
                        xref: target,
                        detail: "slot-dependent op targets an op with no slot".to_string(),
                    }
                })?;
                if slot != slot_context {
                    let delta = slot.checked_sub(slot_context).ok_or_else(|| {
                        PipelineError::StructuralInconsistency {
                            phase: NAME,
                            op_kind: kind,
                            xref: target,
                            detail: "slot context would move backwards".to_string(),
                        }
                    })?;
                    unit.update.insert_before(p, create_advance_op(delta));
                    slot_context = slot;
                }
            }
            pos = unit.update.next_after(p);
        }
    }
    Ok(())
}
