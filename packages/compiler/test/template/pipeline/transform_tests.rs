use template_compiler::core::SecurityContext;
use template_compiler::i18n::i18n_ast::{Icu, IcuCase, Message, Node, Text};
use template_compiler::template::pipeline::ir::{
    create_attribute_op, create_element_op, create_i18n_context_op, create_i18n_end_op,
    create_i18n_start_op, create_icu_op, create_icu_update_op, create_property_op,
    create_template_op, create_text_op, CompatibilityMode, CreateOp, Expression,
    I18nParamResolutionTime, OpKind, SanitizerFn, UpdateOp, XrefId,
};
use template_compiler::template::pipeline::phases::PHASES;
use template_compiler::template::pipeline::{transform, CompilationJob, PipelineError};

fn update_kinds(job: &CompilationJob) -> Vec<OpKind> {
    job.root.update.iter().map(UpdateOp::kind).collect()
}

fn push_element(job: &mut CompilationJob, tag: &str) -> XrefId {
    let xref = job.allocate_xref_id();
    job.root.create.push(create_element_op(xref, tag));
    xref
}

#[test]
fn phases_run_in_lowering_order() {
    let names: Vec<_> = PHASES.iter().map(|phase| phase.name).collect();
    assert_eq!(
        names,
        vec![
            "resolve_sanitizers",
            "static_style_attribute_parsing",
            "slot_allocation",
            "icu_extraction",
            "assign_i18n_slot_dependencies",
            "generate_advance",
            "remove_i18n_contexts",
        ]
    );
}

#[test]
fn lowers_a_statically_styled_element() {
    let mut job = CompilationJob::new("TestCmp", CompatibilityMode::Normal);
    let div = push_element(&mut job, "div");
    job.root.update.push(create_attribute_op(
        div,
        "style",
        Expression::string("width: 3px; color: red"),
        SecurityContext::None,
        true,
    ));
    job.root.update.push(create_attribute_op(
        div,
        "class",
        Expression::string("foo bar"),
        SecurityContext::None,
        true,
    ));
    job.root.update.push(create_property_op(
        div,
        "innerHTML",
        Expression::lexical_read("html"),
        SecurityContext::Html,
    ));

    transform(&mut job).unwrap();

    // The element owns slot 0 and every binding targets it, so no advances appear.
    match job.root.create.iter().next().unwrap() {
        CreateOp::Element(op) => assert_eq!(op.handle.slot, Some(0)),
        other => panic!("expected element, got {:?}", other.kind()),
    }
    assert_eq!(job.root.decls, Some(1));

    let ops: Vec<_> = job.root.update.iter().collect();
    assert_eq!(ops.len(), 5);
    match ops[0] {
        UpdateOp::ParsedStaticStyle(op) => {
            assert_eq!(op.name, "width");
            assert_eq!(op.value, "3px");
        }
        other => panic!("expected static style, got {:?}", other.kind()),
    }
    match ops[1] {
        UpdateOp::ParsedStaticStyle(op) => {
            assert_eq!(op.name, "color");
            assert_eq!(op.value, "red");
        }
        other => panic!("expected static style, got {:?}", other.kind()),
    }
    match ops[2] {
        UpdateOp::ParsedStaticClass(op) => assert_eq!(op.name, "foo"),
        other => panic!("expected static class, got {:?}", other.kind()),
    }
    match ops[3] {
        UpdateOp::ParsedStaticClass(op) => assert_eq!(op.name, "bar"),
        other => panic!("expected static class, got {:?}", other.kind()),
    }
    match ops[4] {
        UpdateOp::Property(op) => {
            assert_eq!(op.name, "innerHTML");
            assert_eq!(op.sanitizer, Some(SanitizerFn::Html));
        }
        other => panic!("expected property, got {:?}", other.kind()),
    }
}

#[test]
fn generates_advances_between_slot_contexts() {
    let mut job = CompilationJob::new("TestCmp", CompatibilityMode::Normal);
    let elements: Vec<_> = (0..6).map(|_| push_element(&mut job, "div")).collect();
    for target in [elements[2], elements[2], elements[5]] {
        job.root.update.push(create_property_op(
            target,
            "title",
            Expression::lexical_read("value"),
            SecurityContext::None,
        ));
    }

    transform(&mut job).unwrap();

    assert_eq!(
        update_kinds(&job),
        vec![
            OpKind::Advance,
            OpKind::Property,
            OpKind::Property,
            OpKind::Advance,
            OpKind::Property,
        ]
    );
    let deltas: Vec<_> = job
        .root
        .update
        .iter()
        .filter_map(|op| match op {
            UpdateOp::Advance(op) => Some(op.delta),
            _ => None,
        })
        .collect();
    assert_eq!(deltas, vec![2, 3]);
}

#[test]
fn a_binding_on_slot_zero_needs_no_advance() {
    let mut job = CompilationJob::new("TestCmp", CompatibilityMode::Normal);
    let div = push_element(&mut job, "div");
    job.root.update.push(create_property_op(
        div,
        "title",
        Expression::lexical_read("value"),
        SecurityContext::None,
    ));

    transform(&mut job).unwrap();

    assert_eq!(update_kinds(&job), vec![OpKind::Property]);
}

#[test]
fn propagates_decl_counts_into_template_ops() {
    let mut job = CompilationJob::new("TestCmp", CompatibilityMode::Normal);
    push_element(&mut job, "div");
    let root_xref = job.root.xref;
    let view = job.allocate_view(root_xref);
    job.root.create.push(create_template_op(view, None));
    for _ in 0..3 {
        let text = job.allocate_xref_id();
        job.views
            .get_mut(&view)
            .unwrap()
            .create
            .push(create_text_op(text, "hi"));
    }

    transform(&mut job).unwrap();

    assert_eq!(job.root.decls, Some(2));
    assert_eq!(job.view(view).unwrap().decls, Some(3));
    let template = job
        .root
        .create
        .iter()
        .find_map(|op| match op {
            CreateOp::Template(op) => Some(op),
            _ => None,
        })
        .expect("no template op");
    assert_eq!(template.decls, Some(3));
}

#[test]
fn lowers_an_i18n_block_with_an_icu() {
    let mut job = CompilationJob::new("TestCmp", CompatibilityMode::Normal);
    let ctx = job.allocate_xref_id();
    let blk = job.allocate_xref_id();
    let text = job.allocate_xref_id();
    let icu = job.allocate_xref_id();
    let message = Message::new(
        "msg.plural",
        vec![Node::Icu(Icu {
            expression: "count".to_string(),
            expression_placeholder: Some("ICU".to_string()),
            cases: vec![IcuCase {
                value: "other".to_string(),
                nodes: vec![Node::Text(Text::new("items"))],
            }],
        })],
    );

    job.root
        .create
        .push(create_i18n_start_op(blk, message.clone(), Some(ctx)));
    job.root.create.push(create_text_op(text, ""));
    job.root.create.push(create_icu_op(icu, message.clone()));
    job.root.create.push(create_i18n_end_op(blk));
    job.root
        .create
        .push(create_i18n_context_op(ctx, blk, message));
    job.root.update.push(create_icu_update_op(icu));

    transform(&mut job).unwrap();

    // The ICU marker and the context are gone; the block itself survives.
    let create_kinds: Vec<_> = job.root.create.iter().map(CreateOp::kind).collect();
    assert_eq!(
        create_kinds,
        vec![OpKind::I18nStart, OpKind::Text, OpKind::I18nEnd]
    );
    match job.root.create.iter().next().unwrap() {
        CreateOp::I18nStart(op) => assert!(op.context.is_none()),
        other => panic!("expected i18n start, got {:?}", other.kind()),
    }

    // The ICU's update op became an i18n expression anchored at the block's
    // last slot consumer, behind an advance to that slot.
    assert_eq!(
        update_kinds(&job),
        vec![OpKind::Advance, OpKind::I18nExpression]
    );
    let ops: Vec<_> = job.root.update.iter().collect();
    match ops[0] {
        UpdateOp::Advance(op) => assert_eq!(op.delta, 1),
        other => panic!("expected advance, got {:?}", other.kind()),
    }
    match ops[1] {
        UpdateOp::I18nExpression(op) => {
            assert_eq!(op.context, ctx);
            assert_eq!(op.target, text);
            assert_eq!(op.handle.slot, Some(0));
            assert_eq!(op.expression, Expression::lexical_read("count"));
            assert_eq!(op.i18n_placeholder, "ICU");
            assert_eq!(op.resolution_time, I18nParamResolutionTime::Postprocessing);
        }
        other => panic!("expected i18n expression, got {:?}", other.kind()),
    }
}

#[test]
fn compatibility_mode_only_splits_literal_text_attributes() {
    for (compatibility, expected) in [
        (CompatibilityMode::Normal, vec![OpKind::ParsedStaticStyle]),
        (
            CompatibilityMode::TemplateDefinitionBuilder,
            vec![OpKind::Attribute],
        ),
    ] {
        let mut job = CompilationJob::new("TestCmp", compatibility);
        let div = push_element(&mut job, "div");
        job.root.update.push(create_attribute_op(
            div,
            "style",
            Expression::string("width: 3px"),
            SecurityContext::None,
            false,
        ));

        transform(&mut job).unwrap();

        assert_eq!(update_kinds(&job), expected, "{:?}", compatibility);
    }
}

#[test]
fn a_blank_class_attribute_just_disappears() {
    let mut job = CompilationJob::new("TestCmp", CompatibilityMode::Normal);
    let div = push_element(&mut job, "div");
    job.root.update.push(create_attribute_op(
        div,
        "class",
        Expression::string("   "),
        SecurityContext::None,
        true,
    ));

    transform(&mut job).unwrap();

    assert_eq!(job.root.update.iter().count(), 0);
}

#[test]
fn a_phase_error_aborts_the_run() {
    let mut job = CompilationJob::new("TestCmp", CompatibilityMode::Normal);
    let icu = job.allocate_xref_id();
    job.root
        .create
        .push(create_icu_op(icu, Message::text("m", "stray")));

    let err = transform(&mut job).unwrap_err();
    assert!(matches!(
        err,
        PipelineError::StructuralInconsistency {
            op_kind: OpKind::Icu,
            ..
        }
    ));
}

#[test]
fn update_ops_out_of_slot_order_are_an_error() {
    let mut job = CompilationJob::new("TestCmp", CompatibilityMode::Normal);
    let first = push_element(&mut job, "div");
    push_element(&mut job, "div");
    let third = push_element(&mut job, "div");
    for target in [third, first] {
        job.root.update.push(create_property_op(
            target,
            "title",
            Expression::lexical_read("value"),
            SecurityContext::None,
        ));
    }

    let err = transform(&mut job).unwrap_err();
    assert!(matches!(
        err,
        PipelineError::StructuralInconsistency {
            op_kind: OpKind::Property,
            ..
        }
    ));
}
