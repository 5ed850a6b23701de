//! The parsed form of an i18n message, as attached to i18n IR operations.

/// A translatable message.
#[derive(Debug, Clone)]
pub struct Message {
    /// The message id assigned during extraction.
    pub id: String,
    pub nodes: Vec<Node>,
}

impl Message {
    pub fn new(id: impl Into<String>, nodes: Vec<Node>) -> Self {
        Message {
            id: id.into(),
            nodes,
        }
    }

    /// A message consisting of a single text node. Mostly useful in tests.
    pub fn text(id: impl Into<String>, value: impl Into<String>) -> Self {
        Message::new(id, vec![Node::Text(Text::new(value))])
    }

    /// The first ICU node in this message, if any.
    pub fn icu(&self) -> Option<&Icu> {
        self.nodes.iter().find_map(|node| match node {
            Node::Icu(icu) => Some(icu),
            _ => None,
        })
    }
}

#[derive(Debug, Clone)]
pub enum Node {
    Text(Text),
    Placeholder(Placeholder),
    Icu(Icu),
}

/// Literal message text.
#[derive(Debug, Clone)]
pub struct Text {
    pub value: String,
}

impl Text {
    pub fn new(value: impl Into<String>) -> Self {
        Text {
            value: value.into(),
        }
    }
}

/// A named placeholder standing in for markup or an expression in the translated text.
#[derive(Debug, Clone)]
pub struct Placeholder {
    pub name: String,
}

impl Placeholder {
    pub fn new(name: impl Into<String>) -> Self {
        Placeholder { name: name.into() }
    }
}

/// An ICU expression (plural or select).
#[derive(Debug, Clone)]
pub struct Icu {
    /// The name of the variable the ICU switches on.
    pub expression: String,

    /// The placeholder under which the switch value is recorded in the message, assigned during
    /// message serialization.
    pub expression_placeholder: Option<String>,

    pub cases: Vec<IcuCase>,
}

#[derive(Debug, Clone)]
pub struct IcuCase {
    pub value: String,
    pub nodes: Vec<Node>,
}
