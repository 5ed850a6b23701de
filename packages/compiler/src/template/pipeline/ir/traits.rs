//! Capability groupings over op kinds.
//!
//! Membership in a capability is decided entirely by op kind. Phases branch on these accessors
//! rather than hardcoding kind lists.

use crate::template::pipeline::ir::handle::{SlotHandle, XrefId};
use crate::template::pipeline::ir::ops::create::CreateOp;
use crate::template::pipeline::ir::ops::update::UpdateOp;

impl CreateOp {
    /// The slot handle of this op, if it consumes a data slot in its view.
    ///
    /// End markers, i18n contexts and ICU markers produce no runtime instruction of their own
    /// and consume no slot.
    pub fn slot_handle(&self) -> Option<&SlotHandle> {
        match self {
            CreateOp::ElementStart(op) => Some(&op.handle),
            CreateOp::Element(op) => Some(&op.handle),
            CreateOp::ContainerStart(op) => Some(&op.handle),
            CreateOp::Container(op) => Some(&op.handle),
            CreateOp::Template(op) => Some(&op.handle),
            CreateOp::Text(op) => Some(&op.handle),
            CreateOp::I18nStart(op) => Some(&op.handle),
            _ => None,
        }
    }

    pub fn slot_handle_mut(&mut self) -> Option<&mut SlotHandle> {
        match self {
            CreateOp::ElementStart(op) => Some(&mut op.handle),
            CreateOp::Element(op) => Some(&mut op.handle),
            CreateOp::ContainerStart(op) => Some(&mut op.handle),
            CreateOp::Container(op) => Some(&mut op.handle),
            CreateOp::Template(op) => Some(&mut op.handle),
            CreateOp::Text(op) => Some(&mut op.handle),
            CreateOp::I18nStart(op) => Some(&mut op.handle),
            _ => None,
        }
    }

    pub fn consumes_slot(&self) -> bool {
        self.slot_handle().is_some()
    }

    /// True for ops that introduce an element-like owner that bindings can target.
    pub fn is_element_or_container(&self) -> bool {
        matches!(
            self,
            CreateOp::ElementStart(_)
                | CreateOp::Element(_)
                | CreateOp::ContainerStart(_)
                | CreateOp::Container(_)
                | CreateOp::Template(_)
        )
    }

    /// The element tag, for ops that create a concrete element.
    pub fn element_tag(&self) -> Option<&str> {
        match self {
            CreateOp::ElementStart(op) => Some(&op.tag),
            CreateOp::Element(op) => Some(&op.tag),
            _ => None,
        }
    }
}

impl UpdateOp {
    /// The create op whose slot must be the active slot context when this op executes, or `None`
    /// for ops that are independent of the slot context.
    pub fn depends_on_slot_context(&self) -> Option<XrefId> {
        match self {
            UpdateOp::InterpolateText(op) => Some(op.target),
            UpdateOp::Property(op) => Some(op.target),
            UpdateOp::InterpolateProperty(op) => Some(op.target),
            UpdateOp::Attribute(op) => Some(op.target),
            UpdateOp::StyleProp(op) => Some(op.target),
            UpdateOp::InterpolateStyleProp(op) => Some(op.target),
            UpdateOp::StyleMap(op) => Some(op.target),
            UpdateOp::InterpolateStyleMap(op) => Some(op.target),
            UpdateOp::ClassProp(op) => Some(op.target),
            UpdateOp::ClassMap(op) => Some(op.target),
            UpdateOp::ParsedStaticStyle(op) => Some(op.target),
            UpdateOp::ParsedStaticClass(op) => Some(op.target),
            UpdateOp::I18nExpression(op) => Some(op.target),
            UpdateOp::IcuUpdate(_) | UpdateOp::Advance(_) => None,
        }
    }
}
