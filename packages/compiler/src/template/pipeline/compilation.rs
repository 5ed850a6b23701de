//! The state of a template compilation as it moves through the pipeline.

use indexmap::IndexMap;

use crate::template::pipeline::ir::enums::CompatibilityMode;
use crate::template::pipeline::ir::handle::XrefId;
use crate::template::pipeline::ir::operations::OpList;
use crate::template::pipeline::ir::ops::create::CreateOp;
use crate::template::pipeline::ir::ops::update::UpdateOp;

/// One view being compiled: the component's root template or an embedded view.
#[derive(Debug)]
pub struct ViewCompilationUnit {
    pub xref: XrefId,

    /// The unit declaring the `Template` op for this view, or `None` for the root.
    pub parent: Option<XrefId>,
    pub compatibility: CompatibilityMode,

    /// Ops executed when the view is instantiated, in document order.
    pub create: OpList<CreateOp>,

    /// Ops executed on every change-detection pass, in execution order.
    pub update: OpList<UpdateOp>,

    /// The number of declaration slots used by this view. Populated during slot allocation.
    pub decls: Option<usize>,
}

impl ViewCompilationUnit {
    fn new(xref: XrefId, parent: Option<XrefId>, compatibility: CompatibilityMode) -> Self {
        ViewCompilationUnit {
            xref,
            parent,
            compatibility,
            create: OpList::new(),
            update: OpList::new(),
            decls: None,
        }
    }
}

/// The compilation of a component's template: the root view, every embedded view, and the xref
/// allocator that links them.
#[derive(Debug)]
pub struct CompilationJob {
    pub component_name: String,
    pub compatibility: CompatibilityMode,

    /// The root view.
    pub root: ViewCompilationUnit,

    /// Embedded views, keyed by their xref. Insertion order is the order the views were
    /// declared in, and iteration respects it.
    pub views: IndexMap<XrefId, ViewCompilationUnit>,

    next_xref_id: usize,
}

impl CompilationJob {
    pub fn new(component_name: impl Into<String>, compatibility: CompatibilityMode) -> Self {
        let root_xref = XrefId::new(0);
        CompilationJob {
            component_name: component_name.into(),
            compatibility,
            root: ViewCompilationUnit::new(root_xref, None, compatibility),
            views: IndexMap::new(),
            next_xref_id: 1,
        }
    }

    /// Allocates a fresh xref, unique within this job.
    pub fn allocate_xref_id(&mut self) -> XrefId {
        let id = XrefId::new(self.next_xref_id);
        self.next_xref_id += 1;
        id
    }

    /// Allocates an embedded view. The returned xref identifies both the new unit and the
    /// `Template` op that declares it in the parent.
    pub fn allocate_view(&mut self, parent: XrefId) -> XrefId {
        let xref = self.allocate_xref_id();
        self.views.insert(
            xref,
            ViewCompilationUnit::new(xref, Some(parent), self.compatibility),
        );
        xref
    }

    pub fn view(&self, xref: XrefId) -> Option<&ViewCompilationUnit> {
        if self.root.xref == xref {
            Some(&self.root)
        } else {
            self.views.get(&xref)
        }
    }

    /// All units of the job, root first.
    pub fn units(&self) -> impl Iterator<Item = &ViewCompilationUnit> {
        std::iter::once(&self.root).chain(self.views.values())
    }

    pub fn units_mut(&mut self) -> impl Iterator<Item = &mut ViewCompilationUnit> {
        std::iter::once(&mut self.root).chain(self.views.values_mut())
    }
}
