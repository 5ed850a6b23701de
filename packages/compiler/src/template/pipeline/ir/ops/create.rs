//! Creation operations: the structure of a view, in document order.

use crate::i18n::i18n_ast::Message;
use crate::template::pipeline::ir::enums::OpKind;
use crate::template::pipeline::ir::handle::{SlotHandle, XrefId};

/// An op describing a node or marker created when a view is instantiated.
#[derive(Debug, Clone)]
pub enum CreateOp {
    ElementStart(ElementStartOp),
    Element(ElementOp),
    ElementEnd(ElementEndOp),
    ContainerStart(ContainerStartOp),
    Container(ContainerOp),
    ContainerEnd(ContainerEndOp),
    Template(TemplateOp),
    Text(TextOp),
    I18nStart(I18nStartOp),
    I18nEnd(I18nEndOp),
    I18nContext(I18nContextOp),
    Icu(IcuOp),
}

impl CreateOp {
    pub fn kind(&self) -> OpKind {
        match self {
            CreateOp::ElementStart(_) => OpKind::ElementStart,
            CreateOp::Element(_) => OpKind::Element,
            CreateOp::ElementEnd(_) => OpKind::ElementEnd,
            CreateOp::ContainerStart(_) => OpKind::ContainerStart,
            CreateOp::Container(_) => OpKind::Container,
            CreateOp::ContainerEnd(_) => OpKind::ContainerEnd,
            CreateOp::Template(_) => OpKind::Template,
            CreateOp::Text(_) => OpKind::Text,
            CreateOp::I18nStart(_) => OpKind::I18nStart,
            CreateOp::I18nEnd(_) => OpKind::I18nEnd,
            CreateOp::I18nContext(_) => OpKind::I18nContext,
            CreateOp::Icu(_) => OpKind::Icu,
        }
    }

    /// The xref of the entity this op creates or marks.
    ///
    /// End markers carry the xref of the entity they close.
    pub fn xref(&self) -> XrefId {
        match self {
            CreateOp::ElementStart(op) => op.xref,
            CreateOp::Element(op) => op.xref,
            CreateOp::ElementEnd(op) => op.xref,
            CreateOp::ContainerStart(op) => op.xref,
            CreateOp::Container(op) => op.xref,
            CreateOp::ContainerEnd(op) => op.xref,
            CreateOp::Template(op) => op.xref,
            CreateOp::Text(op) => op.xref,
            CreateOp::I18nStart(op) => op.xref,
            CreateOp::I18nEnd(op) => op.xref,
            CreateOp::I18nContext(op) => op.xref,
            CreateOp::Icu(op) => op.xref,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ElementStartOp {
    pub xref: XrefId,
    pub handle: SlotHandle,
    pub tag: String,
}

#[derive(Debug, Clone)]
pub struct ElementOp {
    pub xref: XrefId,
    pub handle: SlotHandle,
    pub tag: String,
}

#[derive(Debug, Clone)]
pub struct ElementEndOp {
    pub xref: XrefId,
}

#[derive(Debug, Clone)]
pub struct ContainerStartOp {
    pub xref: XrefId,
    pub handle: SlotHandle,
}

#[derive(Debug, Clone)]
pub struct ContainerOp {
    pub xref: XrefId,
    pub handle: SlotHandle,
}

#[derive(Debug, Clone)]
pub struct ContainerEndOp {
    pub xref: XrefId,
}

/// Declares an embedded view. The op's xref is also the xref of the
/// [`ViewCompilationUnit`](crate::template::pipeline::compilation::ViewCompilationUnit) holding
/// the embedded view's ops.
#[derive(Debug, Clone)]
pub struct TemplateOp {
    pub xref: XrefId,
    pub handle: SlotHandle,
    pub tag: Option<String>,

    /// The number of declaration slots used by the embedded view. Populated during slot
    /// allocation.
    pub decls: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct TextOp {
    pub xref: XrefId,
    pub handle: SlotHandle,
    pub initial_value: String,
}

/// Opens an i18n block.
#[derive(Debug, Clone)]
pub struct I18nStartOp {
    pub xref: XrefId,
    pub handle: SlotHandle,
    pub message: Message,

    /// The [`I18nContextOp`] accumulating this block's message parameters. Always present once
    /// ingestion is complete; cleared when contexts are deleted at the end of the pipeline.
    pub context: Option<XrefId>,
}

/// Closes the i18n block opened by the [`I18nStartOp`] with the same xref.
#[derive(Debug, Clone)]
pub struct I18nEndOp {
    pub xref: XrefId,
}

/// Accumulates the dynamic parameters of an i18n message on behalf of an i18n block.
#[derive(Debug, Clone)]
pub struct I18nContextOp {
    pub xref: XrefId,

    /// The i18n block this context belongs to.
    pub i18n_block: XrefId,
    pub message: Message,
}

/// Marks the position of an ICU expression inside an i18n block. Consumed by ICU extraction and
/// absent from the final op sequence.
#[derive(Debug, Clone)]
pub struct IcuOp {
    pub xref: XrefId,
    pub message: Message,
}

pub fn create_element_start_op(xref: XrefId, tag: impl Into<String>) -> CreateOp {
    CreateOp::ElementStart(ElementStartOp {
        xref,
        handle: SlotHandle::new(),
        tag: tag.into(),
    })
}

pub fn create_element_op(xref: XrefId, tag: impl Into<String>) -> CreateOp {
    CreateOp::Element(ElementOp {
        xref,
        handle: SlotHandle::new(),
        tag: tag.into(),
    })
}

pub fn create_element_end_op(xref: XrefId) -> CreateOp {
    CreateOp::ElementEnd(ElementEndOp { xref })
}

pub fn create_container_start_op(xref: XrefId) -> CreateOp {
    CreateOp::ContainerStart(ContainerStartOp {
        xref,
        handle: SlotHandle::new(),
    })
}

pub fn create_container_op(xref: XrefId) -> CreateOp {
    CreateOp::Container(ContainerOp {
        xref,
        handle: SlotHandle::new(),
    })
}

pub fn create_container_end_op(xref: XrefId) -> CreateOp {
    CreateOp::ContainerEnd(ContainerEndOp { xref })
}

pub fn create_template_op(xref: XrefId, tag: Option<String>) -> CreateOp {
    CreateOp::Template(TemplateOp {
        xref,
        handle: SlotHandle::new(),
        tag,
        decls: None,
    })
}

pub fn create_text_op(xref: XrefId, initial_value: impl Into<String>) -> CreateOp {
    CreateOp::Text(TextOp {
        xref,
        handle: SlotHandle::new(),
        initial_value: initial_value.into(),
    })
}

pub fn create_i18n_start_op(xref: XrefId, message: Message, context: Option<XrefId>) -> CreateOp {
    CreateOp::I18nStart(I18nStartOp {
        xref,
        handle: SlotHandle::new(),
        message,
        context,
    })
}

pub fn create_i18n_end_op(xref: XrefId) -> CreateOp {
    CreateOp::I18nEnd(I18nEndOp { xref })
}

pub fn create_i18n_context_op(xref: XrefId, i18n_block: XrefId, message: Message) -> CreateOp {
    CreateOp::I18nContext(I18nContextOp {
        xref,
        i18n_block,
        message,
    })
}

pub fn create_icu_op(xref: XrefId, message: Message) -> CreateOp {
    CreateOp::Icu(IcuOp { xref, message })
}
