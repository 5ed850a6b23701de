//! Assigns data slots to slot-consuming create ops and counts each view's declarations.

use std::collections::HashMap;

use crate::template::pipeline::compilation::CompilationJob;
use crate::template::pipeline::error::{PipelineError, Result};
use crate::template::pipeline::ir::enums::OpKind;
use crate::template::pipeline::ir::handle::XrefId;
use crate::template::pipeline::ir::ops::create::CreateOp;

pub(super) const NAME: &str = "slot_allocation";

/// Assigns consecutive slot indices, per view, to every create op that consumes a slot, records
/// the per-view slot total in `decls`, and propagates each embedded view's total into the
/// `Template` op declaring it.
pub fn allocate_slots(job: &mut CompilationJob) -> Result<()> {
    let root_xref = job.root.xref;

    // Slot totals of embedded views, for propagation into their Template ops.
    let mut view_decls: HashMap<XrefId, usize> = HashMap::new();

    for unit in job.units_mut() {
        let mut slot_count = 0;
        let mut pos = unit.create.head();
        while let Some(p) = pos {
            if let Some(handle) = unit.create.get_mut(p).slot_handle_mut() {
                handle.slot = Some(slot_count);
                slot_count += 1;
            }
            pos = unit.create.next_after(p);
        }
        unit.decls = Some(slot_count);
        if unit.xref != root_xref {
            view_decls.insert(unit.xref, slot_count);
        }
    }

    for unit in job.units_mut() {
        let mut pos = unit.create.head();
        while let Some(p) = pos {
            if let CreateOp::Template(op) = unit.create.get_mut(p) {
                let decls = view_decls.get(&op.xref).copied().ok_or_else(|| {
                    PipelineError::StructuralInconsistency {
                        phase: NAME,
                        op_kind: OpKind::Template,
                        xref: op.xref,
                        detail: "template op declares a view that does not exist".to_string(),
                    }
                })?;
                op.decls = Some(decls);
            }
            pos = unit.create.next_after(p);
        }
    }

    Ok(())
}
