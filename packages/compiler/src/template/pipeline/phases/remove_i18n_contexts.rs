//! Deletes i18n context ops once every phase that resolves through them has run.

use crate::template::pipeline::compilation::CompilationJob;
use crate::template::pipeline::error::Result;
use crate::template::pipeline::ir::ops::create::CreateOp;

pub(super) const NAME: &str = "remove_i18n_contexts";

/// Removes every `I18nContext` op and clears the context reference on `I18nStart` ops. Contexts
/// carry no instruction of their own; they exist only for earlier phases to resolve against.
pub fn remove_i18n_contexts(job: &mut CompilationJob) -> Result<()> {
    for unit in job.units_mut() {
        let mut pos = unit.create.head();
        while let Some(p) = pos {
            if matches!(unit.create.get(p), CreateOp::I18nContext(_)) {
                unit.create.remove(p);
            } else if let CreateOp::I18nStart(op) = unit.create.get_mut(p) {
                op.context = None;
            }
            pos = unit.create.next_after(p);
        }
    }
    Ok(())
}
