//! Types shared between the template pipeline and the runtime contract it compiles against.

use serde::{Deserialize, Serialize};

/// The security context of a binding site in the DOM.
///
/// Assigned during template parsing from the [schema](crate::schema::dom_security_schema) and
/// consumed when sanitizers are resolved. A context of `None` means values bound at the site
/// cannot be abused for script injection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SecurityContext {
    None,
    Html,
    Style,
    Script,
    Url,
    ResourceUrl,
}
