//! Classification of security-sensitive DOM sinks.
//!
//! Do not extend these tables without a security review. Every entry widens what the sanitizers
//! are expected to catch at runtime.

use crate::core::SecurityContext;
use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

/// Map from `tagName|propertyName` to [`SecurityContext`]. Properties applying to all tags use
/// a `*` tag. All names are lower-cased for lookup.
static SECURITY_SCHEMA: Lazy<HashMap<String, SecurityContext>> = Lazy::new(|| {
    let mut schema = HashMap::new();

    register_context(
        &mut schema,
        SecurityContext::Html,
        &["iframe|srcdoc", "*|innerhtml", "*|outerhtml"],
    );

    register_context(&mut schema, SecurityContext::Style, &["*|style"]);

    // NB: no Script contexts here, the parser strips script elements outright.

    register_context(
        &mut schema,
        SecurityContext::Url,
        &[
            "*|formaction",
            "area|href",
            "area|ping",
            "audio|src",
            "a|href",
            "a|ping",
            "blockquote|cite",
            "body|background",
            "del|cite",
            "form|action",
            "img|src",
            "input|src",
            "ins|cite",
            "q|cite",
            "source|src",
            "track|src",
            "video|poster",
            "video|src",
        ],
    );

    register_context(
        &mut schema,
        SecurityContext::ResourceUrl,
        &[
            "applet|code",
            "applet|codebase",
            "base|href",
            "embed|src",
            "frame|src",
            "head|profile",
            "html|manifest",
            "iframe|src",
            "link|href",
            "media|src",
            "object|codebase",
            "object|data",
            "script|src",
        ],
    );

    schema
});

fn register_context(
    schema: &mut HashMap<String, SecurityContext>,
    ctx: SecurityContext,
    specs: &[&str],
) {
    for spec in specs {
        schema.insert(spec.to_lowercase(), ctx);
    }
}

/// The security context of binding `name` on a `tag` element.
///
/// Looks up the tag-specific entry first, then the `*` wildcard, and treats everything else as
/// not security-sensitive.
pub fn security_context(tag: &str, name: &str) -> SecurityContext {
    let key = format!("{}|{}", tag.to_lowercase(), name.to_lowercase());
    if let Some(ctx) = SECURITY_SCHEMA.get(&key) {
        return *ctx;
    }
    let wildcard = format!("*|{}", name.to_lowercase());
    SECURITY_SCHEMA
        .get(&wildcard)
        .copied()
        .unwrap_or(SecurityContext::None)
}

/// The security-sensitive attributes of an `<iframe>` that must only ever be applied as static
/// attributes, so that they are all in place before the frame loads.
static IFRAME_SECURITY_SENSITIVE_ATTRS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    let mut set = HashSet::new();
    set.insert("sandbox");
    set.insert("allow");
    set.insert("allowfullscreen");
    set.insert("referrerpolicy");
    set.insert("csp");
    set.insert("fetchpriority");
    set
});

/// Whether `attr_name` might be a security-sensitive attribute of an `<iframe>`.
pub fn is_iframe_security_sensitive_attr(attr_name: &str) -> bool {
    // The setAttribute DOM API is case-insensitive.
    IFRAME_SECURITY_SENSITIVE_ATTRS.contains(attr_name.to_lowercase().as_str())
}
