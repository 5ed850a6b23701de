//! Splits literal `style` and `class` attributes into one op per property or class name.

use crate::template::pipeline::compilation::CompilationJob;
use crate::template::pipeline::error::Result;
use crate::template::pipeline::ir::enums::CompatibilityMode;
use crate::template::pipeline::ir::expression::BindingExpression;
use crate::template::pipeline::ir::handle::XrefId;
use crate::template::pipeline::ir::ops::update::{
    create_parsed_static_class_op, create_parsed_static_style_op, UpdateOp,
};
use crate::view::style_parser;

pub(super) const NAME: &str = "static_style_attribute_parsing";

/// Replaces each `style` or `class` attribute op holding a string literal with the sequence of
/// parsed single-property ops, in place. Interpolated and non-literal values stay untouched.
pub fn parse_static_style_attributes(job: &mut CompilationJob) -> Result<()> {
    for unit in job.units_mut() {
        let compatibility = unit.compatibility;

        let mut pos = unit.update.head();
        while let Some(p) = pos {
            if let Some(split) = splittable_attribute(unit.update.get(p), compatibility) {
                match split {
                    Split::Style(target, value) => {
                        for pair in style_parser::parse(&value).chunks_exact(2) {
                            unit.update.insert_before(
                                p,
                                create_parsed_static_style_op(
                                    target,
                                    pair[0].as_str(),
                                    pair[1].as_str(),
                                ),
                            );
                        }
                    }
                    Split::Class(target, value) => {
                        for class in value.split_whitespace() {
                            unit.update
                                .insert_before(p, create_parsed_static_class_op(target, class));
                        }
                    }
                }
                unit.update.remove(p);
            }
            pos = unit.update.next_after(p);
        }
    }
    Ok(())
}

enum Split {
    Style(XrefId, String),
    Class(XrefId, String),
}

fn splittable_attribute(op: &UpdateOp, compatibility: CompatibilityMode) -> Option<Split> {
    let attr = match op {
        UpdateOp::Attribute(attr) if attr.name == "style" || attr.name == "class" => attr,
        _ => return None,
    };
    // The previous generation of the compiler only ever split attributes that were literal text
    // in the template source.
    if compatibility == CompatibilityMode::TemplateDefinitionBuilder && !attr.is_text_attribute {
        return None;
    }
    let value = match &attr.expression {
        BindingExpression::Expression(expr) => expr.as_string_literal()?,
        BindingExpression::Interpolation(_) => return None,
    };
    if attr.name == "style" {
        Some(Split::Style(attr.target, value.to_string()))
    } else {
        Some(Split::Class(attr.target, value.to_string()))
    }
}
