//! Closed enumerations shared across the template pipeline IR.

use serde::{Deserialize, Serialize};

/// Distinguishes the kinds of IR operations.
///
/// Includes both creation and update operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpKind {
    /// An element start whose children are in a following op sequence.
    ElementStart,

    /// An element with no children.
    Element,

    /// The end of an element started with `ElementStart`.
    ElementEnd,

    /// The start of a logical container (an element-less grouping of ops).
    ContainerStart,

    /// An empty logical container.
    Container,

    /// The end of a container started with `ContainerStart`.
    ContainerEnd,

    /// An embedded view declaration.
    Template,

    /// A text node.
    Text,

    /// The start of an i18n block.
    I18nStart,

    /// The end of an i18n block started with `I18nStart`.
    I18nEnd,

    /// A collection of parameters for an i18n message, keyed by the owning block.
    I18nContext,

    /// An ICU message nested inside an i18n block.
    Icu,

    /// A text interpolation binding on a text node.
    InterpolateText,

    /// A property binding with a single expression.
    Property,

    /// A property binding with an interpolated value.
    InterpolateProperty,

    /// An attribute binding.
    Attribute,

    /// A binding of a single style property.
    StyleProp,

    /// A binding of a single style property with an interpolated value.
    InterpolateStyleProp,

    /// A binding of the full style map.
    StyleMap,

    /// A binding of the full style map with an interpolated value.
    InterpolateStyleMap,

    /// A binding of a single class.
    ClassProp,

    /// A binding of the full class map.
    ClassMap,

    /// A static style property extracted from a literal `style` attribute.
    ParsedStaticStyle,

    /// A static class name extracted from a literal `class` attribute.
    ParsedStaticClass,

    /// A placeholder update op for an ICU, rewritten during ICU extraction.
    IcuUpdate,

    /// An expression contributing a dynamic value to an i18n message.
    I18nExpression,

    /// An advance of the implicit slot context during change detection.
    Advance,
}

/// Whether the pipeline should produce output compatible with the previous generation of the
/// template compiler. Some phases behave differently in compatibility mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompatibilityMode {
    Normal,
    TemplateDefinitionBuilder,
}

/// When an i18n expression's value is resolved into the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum I18nParamResolutionTime {
    /// Resolved when the message parameters are serialized.
    Creation,

    /// Resolved during post-processing, after the message has been serialized.
    Postprocessing,
}

/// The sanitizer applied to a security-sensitive binding before its value reaches the DOM.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SanitizerFn {
    Html,
    Script,
    Style,
    Url,
    ResourceUrl,
    IframeAttribute,
}
