//! Update operations: the bindings re-evaluated during change detection, in execution order.

use crate::core::SecurityContext;
use crate::template::pipeline::ir::enums::{I18nParamResolutionTime, OpKind, SanitizerFn};
use crate::template::pipeline::ir::expression::{BindingExpression, Expression, Interpolation};
use crate::template::pipeline::ir::handle::{SlotHandle, XrefId};

/// An op describing a binding update within a view.
#[derive(Debug, Clone)]
pub enum UpdateOp {
    InterpolateText(InterpolateTextOp),
    Property(PropertyOp),
    InterpolateProperty(InterpolatePropertyOp),
    Attribute(AttributeOp),
    StyleProp(StylePropOp),
    InterpolateStyleProp(InterpolateStylePropOp),
    StyleMap(StyleMapOp),
    InterpolateStyleMap(InterpolateStyleMapOp),
    ClassProp(ClassPropOp),
    ClassMap(ClassMapOp),
    ParsedStaticStyle(ParsedStaticStyleOp),
    ParsedStaticClass(ParsedStaticClassOp),
    IcuUpdate(IcuUpdateOp),
    I18nExpression(I18nExpressionOp),
    Advance(AdvanceOp),
}

impl UpdateOp {
    pub fn kind(&self) -> OpKind {
        match self {
            UpdateOp::InterpolateText(_) => OpKind::InterpolateText,
            UpdateOp::Property(_) => OpKind::Property,
            UpdateOp::InterpolateProperty(_) => OpKind::InterpolateProperty,
            UpdateOp::Attribute(_) => OpKind::Attribute,
            UpdateOp::StyleProp(_) => OpKind::StyleProp,
            UpdateOp::InterpolateStyleProp(_) => OpKind::InterpolateStyleProp,
            UpdateOp::StyleMap(_) => OpKind::StyleMap,
            UpdateOp::InterpolateStyleMap(_) => OpKind::InterpolateStyleMap,
            UpdateOp::ClassProp(_) => OpKind::ClassProp,
            UpdateOp::ClassMap(_) => OpKind::ClassMap,
            UpdateOp::ParsedStaticStyle(_) => OpKind::ParsedStaticStyle,
            UpdateOp::ParsedStaticClass(_) => OpKind::ParsedStaticClass,
            UpdateOp::IcuUpdate(_) => OpKind::IcuUpdate,
            UpdateOp::I18nExpression(_) => OpKind::I18nExpression,
            UpdateOp::Advance(_) => OpKind::Advance,
        }
    }
}

#[derive(Debug, Clone)]
pub struct InterpolateTextOp {
    /// The text node being interpolated into.
    pub target: XrefId,
    pub interpolation: Interpolation,
}

#[derive(Debug, Clone)]
pub struct PropertyOp {
    pub target: XrefId,
    pub name: String,
    pub expression: Expression,
    pub security_context: SecurityContext,

    /// Populated during sanitizer resolution.
    pub sanitizer: Option<SanitizerFn>,
}

#[derive(Debug, Clone)]
pub struct InterpolatePropertyOp {
    pub target: XrefId,
    pub name: String,
    pub interpolation: Interpolation,
    pub security_context: SecurityContext,
    pub sanitizer: Option<SanitizerFn>,
}

#[derive(Debug, Clone)]
pub struct AttributeOp {
    pub target: XrefId,
    pub name: String,
    pub expression: BindingExpression,
    pub security_context: SecurityContext,

    /// True if this attribute was a literal in the template source, as opposed to an
    /// `[attr.name]` binding.
    pub is_text_attribute: bool,
}

#[derive(Debug, Clone)]
pub struct StylePropOp {
    pub target: XrefId,
    pub name: String,
    pub expression: Expression,

    /// A unit suffix (`px`, `%`) appended to the value.
    pub unit: Option<String>,
    pub security_context: SecurityContext,
    pub sanitizer: Option<SanitizerFn>,
}

#[derive(Debug, Clone)]
pub struct InterpolateStylePropOp {
    pub target: XrefId,
    pub name: String,
    pub interpolation: Interpolation,
    pub unit: Option<String>,
    pub security_context: SecurityContext,
    pub sanitizer: Option<SanitizerFn>,
}

#[derive(Debug, Clone)]
pub struct StyleMapOp {
    pub target: XrefId,
    pub expression: Expression,
    pub security_context: SecurityContext,
    pub sanitizer: Option<SanitizerFn>,
}

#[derive(Debug, Clone)]
pub struct InterpolateStyleMapOp {
    pub target: XrefId,
    pub interpolation: Interpolation,
    pub security_context: SecurityContext,
    pub sanitizer: Option<SanitizerFn>,
}

#[derive(Debug, Clone)]
pub struct ClassPropOp {
    pub target: XrefId,
    pub name: String,
    pub expression: Expression,
}

#[derive(Debug, Clone)]
pub struct ClassMapOp {
    pub target: XrefId,
    pub expression: Expression,
}

/// A single static style property split out of a literal `style` attribute.
#[derive(Debug, Clone)]
pub struct ParsedStaticStyleOp {
    pub target: XrefId,
    pub name: String,
    pub value: String,
}

/// A single static class name split out of a literal `class` attribute.
#[derive(Debug, Clone)]
pub struct ParsedStaticClassOp {
    pub target: XrefId,
    pub name: String,
}

/// Placeholder for the update side of an ICU. Rewritten into an [`I18nExpressionOp`] during ICU
/// extraction and absent from the final op sequence.
#[derive(Debug, Clone)]
pub struct IcuUpdateOp {
    /// The xref of the corresponding [`IcuOp`](super::create::IcuOp).
    pub xref: XrefId,
}

/// Contributes a dynamic value to an i18n message.
#[derive(Debug, Clone)]
pub struct I18nExpressionOp {
    /// The i18n context that the value is collected into.
    pub context: XrefId,

    /// The create op this expression narrows in on during change detection. Starts out as the
    /// owning i18n block and is retargeted to the block's last slot consumer so that the
    /// expression executes while that slot is still the active slot context.
    pub target: XrefId,
    pub handle: SlotHandle,
    pub expression: Expression,

    /// The message placeholder the value is recorded under.
    pub i18n_placeholder: String,
    pub resolution_time: I18nParamResolutionTime,
}

/// Moves the implicit slot context forward by `delta` slots. Inserted during advance generation;
/// never produced by ingestion.
#[derive(Debug, Clone)]
pub struct AdvanceOp {
    pub delta: usize,
}

pub fn create_interpolate_text_op(target: XrefId, interpolation: Interpolation) -> UpdateOp {
    UpdateOp::InterpolateText(InterpolateTextOp {
        target,
        interpolation,
    })
}

pub fn create_property_op(
    target: XrefId,
    name: impl Into<String>,
    expression: Expression,
    security_context: SecurityContext,
) -> UpdateOp {
    UpdateOp::Property(PropertyOp {
        target,
        name: name.into(),
        expression,
        security_context,
        sanitizer: None,
    })
}

pub fn create_interpolate_property_op(
    target: XrefId,
    name: impl Into<String>,
    interpolation: Interpolation,
    security_context: SecurityContext,
) -> UpdateOp {
    UpdateOp::InterpolateProperty(InterpolatePropertyOp {
        target,
        name: name.into(),
        interpolation,
        security_context,
        sanitizer: None,
    })
}

pub fn create_attribute_op(
    target: XrefId,
    name: impl Into<String>,
    expression: impl Into<BindingExpression>,
    security_context: SecurityContext,
    is_text_attribute: bool,
) -> UpdateOp {
    UpdateOp::Attribute(AttributeOp {
        target,
        name: name.into(),
        expression: expression.into(),
        security_context,
        is_text_attribute,
    })
}

pub fn create_style_prop_op(
    target: XrefId,
    name: impl Into<String>,
    expression: Expression,
    unit: Option<String>,
    security_context: SecurityContext,
) -> UpdateOp {
    UpdateOp::StyleProp(StylePropOp {
        target,
        name: name.into(),
        expression,
        unit,
        security_context,
        sanitizer: None,
    })
}

pub fn create_interpolate_style_prop_op(
    target: XrefId,
    name: impl Into<String>,
    interpolation: Interpolation,
    unit: Option<String>,
    security_context: SecurityContext,
) -> UpdateOp {
    UpdateOp::InterpolateStyleProp(InterpolateStylePropOp {
        target,
        name: name.into(),
        interpolation,
        unit,
        security_context,
        sanitizer: None,
    })
}

pub fn create_style_map_op(
    target: XrefId,
    expression: Expression,
    security_context: SecurityContext,
) -> UpdateOp {
    UpdateOp::StyleMap(StyleMapOp {
        target,
        expression,
        security_context,
        sanitizer: None,
    })
}

pub fn create_interpolate_style_map_op(
    target: XrefId,
    interpolation: Interpolation,
    security_context: SecurityContext,
) -> UpdateOp {
    UpdateOp::InterpolateStyleMap(InterpolateStyleMapOp {
        target,
        interpolation,
        security_context,
        sanitizer: None,
    })
}

pub fn create_class_prop_op(
    target: XrefId,
    name: impl Into<String>,
    expression: Expression,
) -> UpdateOp {
    UpdateOp::ClassProp(ClassPropOp {
        target,
        name: name.into(),
        expression,
    })
}

pub fn create_class_map_op(target: XrefId, expression: Expression) -> UpdateOp {
    UpdateOp::ClassMap(ClassMapOp { target, expression })
}

pub fn create_parsed_static_style_op(
    target: XrefId,
    name: impl Into<String>,
    value: impl Into<String>,
) -> UpdateOp {
    UpdateOp::ParsedStaticStyle(ParsedStaticStyleOp {
        target,
        name: name.into(),
        value: value.into(),
    })
}

pub fn create_parsed_static_class_op(target: XrefId, name: impl Into<String>) -> UpdateOp {
    UpdateOp::ParsedStaticClass(ParsedStaticClassOp {
        target,
        name: name.into(),
    })
}

pub fn create_icu_update_op(xref: XrefId) -> UpdateOp {
    UpdateOp::IcuUpdate(IcuUpdateOp { xref })
}

pub fn create_i18n_expression_op(
    context: XrefId,
    target: XrefId,
    handle: SlotHandle,
    expression: Expression,
    i18n_placeholder: impl Into<String>,
    resolution_time: I18nParamResolutionTime,
) -> UpdateOp {
    UpdateOp::I18nExpression(I18nExpressionOp {
        context,
        target,
        handle,
        expression,
        i18n_placeholder: i18n_placeholder.into(),
        resolution_time,
    })
}

pub fn create_advance_op(delta: usize) -> UpdateOp {
    UpdateOp::Advance(AdvanceOp { delta })
}
