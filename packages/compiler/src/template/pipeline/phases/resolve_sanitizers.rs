//! Resolves the sanitizer function guarding each security-sensitive binding.

use std::collections::HashMap;

use crate::core::SecurityContext;
use crate::schema::dom_security_schema::is_iframe_security_sensitive_attr;
use crate::template::pipeline::compilation::CompilationJob;
use crate::template::pipeline::error::{PipelineError, Result};
use crate::template::pipeline::ir::enums::{OpKind, SanitizerFn};
use crate::template::pipeline::ir::handle::XrefId;
use crate::template::pipeline::ir::operations::OpList;
use crate::template::pipeline::ir::ops::create::CreateOp;
use crate::template::pipeline::ir::ops::update::UpdateOp;

pub(super) const NAME: &str = "resolve_sanitizers";

/// The sanitizer guarding each security context.
fn sanitizer_for_context(ctx: SecurityContext) -> Option<SanitizerFn> {
    match ctx {
        SecurityContext::Html => Some(SanitizerFn::Html),
        SecurityContext::Script => Some(SanitizerFn::Script),
        SecurityContext::Style => Some(SanitizerFn::Style),
        SecurityContext::Url => Some(SanitizerFn::Url),
        SecurityContext::ResourceUrl => Some(SanitizerFn::ResourceUrl),
        SecurityContext::None => None,
    }
}

/// Stamps property and style bindings with the sanitizer their security context calls for.
///
/// Property bindings with no sanitizer of their own additionally get the iframe attribute
/// sanitizer when they bind a security-sensitive attribute of an `<iframe>`.
pub fn resolve_sanitizers(job: &mut CompilationJob) -> Result<()> {
    for unit in job.units_mut() {
        let elements = element_owners(&unit.create);

        let mut pos = unit.update.head();
        while let Some(p) = pos {
            match unit.update.get_mut(p) {
                UpdateOp::Property(op) => {
                    op.sanitizer = property_sanitizer(
                        OpKind::Property,
                        op.target,
                        &op.name,
                        op.security_context,
                        &elements,
                    )?;
                }
                UpdateOp::InterpolateProperty(op) => {
                    op.sanitizer = property_sanitizer(
                        OpKind::InterpolateProperty,
                        op.target,
                        &op.name,
                        op.security_context,
                        &elements,
                    )?;
                }
                UpdateOp::StyleProp(op) => {
                    op.sanitizer = style_sanitizer(op.security_context);
                }
                UpdateOp::InterpolateStyleProp(op) => {
                    op.sanitizer = style_sanitizer(op.security_context);
                }
                UpdateOp::StyleMap(op) => {
                    op.sanitizer = style_sanitizer(op.security_context);
                }
                UpdateOp::InterpolateStyleMap(op) => {
                    op.sanitizer = style_sanitizer(op.security_context);
                }
                UpdateOp::Attribute(op) => {
                    // Dynamic attribute bindings into sensitive sinks have no sanitization path
                    // yet and must not be emitted unguarded.
                    if !op.is_text_attribute && sanitizer_for_context(op.security_context).is_some()
                    {
                        return Err(PipelineError::UnsupportedConstruct {
                            phase: NAME,
                            detail: format!(
                                "sanitization of attribute binding '{}' ({:?} context)",
                                op.name, op.security_context
                            ),
                        });
                    }
                }
                _ => {}
            }
            pos = unit.update.next_after(p);
        }
    }
    Ok(())
}

fn element_owners(create: &OpList<CreateOp>) -> HashMap<XrefId, &CreateOp> {
    create
        .iter()
        .filter(|op| op.is_element_or_container())
        .map(|op| (op.xref(), op))
        .collect()
}

fn property_sanitizer(
    kind: OpKind,
    target: XrefId,
    name: &str,
    ctx: SecurityContext,
    elements: &HashMap<XrefId, &CreateOp>,
) -> Result<Option<SanitizerFn>> {
    if let Some(sanitizer) = sanitizer_for_context(ctx) {
        return Ok(Some(sanitizer));
    }
    let owner = elements
        .get(&target)
        .ok_or_else(|| PipelineError::StructuralInconsistency {
            phase: NAME,
            op_kind: kind,
            xref: target,
            detail: format!("property '{name}' has no element-like owner"),
        })?;
    let is_iframe = owner
        .element_tag()
        .is_some_and(|tag| tag.eq_ignore_ascii_case("iframe"));
    if is_iframe && is_iframe_security_sensitive_attr(name) {
        Ok(Some(SanitizerFn::IframeAttribute))
    } else {
        Ok(None)
    }
}

/// Single-property and map style bindings in the `Style` context are escaped by the style
/// renderer itself and carry no sanitizer.
fn style_sanitizer(ctx: SecurityContext) -> Option<SanitizerFn> {
    if ctx == SecurityContext::Style {
        None
    } else {
        sanitizer_for_context(ctx)
    }
}
