//! The lowering phases and the order they run in.

use tracing::debug;

use crate::template::pipeline::compilation::CompilationJob;
use crate::template::pipeline::error::Result;

pub mod assign_i18n_slot_dependencies;
pub mod generate_advance;
pub mod icu_extraction;
pub mod remove_i18n_contexts;
pub mod resolve_sanitizers;
pub mod slot_allocation;
pub mod static_style_attribute_parsing;

/// A single pipeline phase: a whole-job transformation with a stable name.
pub struct Phase {
    pub name: &'static str,
    run: fn(&mut CompilationJob) -> Result<()>,
}

impl Phase {
    pub fn run(&self, job: &mut CompilationJob) -> Result<()> {
        (self.run)(job)
    }
}

/// The phase sequence, in execution order. Each phase may rely on everything the phases before
/// it established:
///
/// - sanitizer resolution and static style splitting run first, on the parser's output;
///   splitting runs before slot work so the ops it emits are positioned like any other binding;
/// - slot allocation must precede ICU extraction, which captures the owning block's slot into
///   the replacement expressions it creates;
/// - ICU extraction must precede i18n slot-dependency assignment, so the replacements are
///   retargeted along with every other i18n expression;
/// - advance generation needs final targets and allocated slots, so it runs after both;
/// - i18n contexts are deleted last, once no phase resolves through them anymore.
pub const PHASES: &[Phase] = &[
    Phase {
        name: resolve_sanitizers::NAME,
        run: resolve_sanitizers::resolve_sanitizers,
    },
    Phase {
        name: static_style_attribute_parsing::NAME,
        run: static_style_attribute_parsing::parse_static_style_attributes,
    },
    Phase {
        name: slot_allocation::NAME,
        run: slot_allocation::allocate_slots,
    },
    Phase {
        name: icu_extraction::NAME,
        run: icu_extraction::extract_icus,
    },
    Phase {
        name: assign_i18n_slot_dependencies::NAME,
        run: assign_i18n_slot_dependencies::assign_i18n_slot_dependencies,
    },
    Phase {
        name: generate_advance::NAME,
        run: generate_advance::generate_advance,
    },
    Phase {
        name: remove_i18n_contexts::NAME,
        run: remove_i18n_contexts::remove_i18n_contexts,
    },
];

/// Runs every phase over the job, in order. The first error aborts the run and leaves the job
/// in whatever state the failing phase reached.
pub fn transform(job: &mut CompilationJob) -> Result<()> {
    debug!(
        component = %job.component_name,
        views = job.views.len() + 1,
        "lowering template"
    );
    for phase in PHASES {
        debug!(phase = phase.name, "running phase");
        phase.run(job)?;
    }
    Ok(())
}
