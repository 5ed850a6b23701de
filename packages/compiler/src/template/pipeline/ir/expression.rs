//! Expression trees carried by update operations.
//!
//! Phases never evaluate expressions. They treat them as opaque payloads, with two exceptions:
//! string literals feed static style/class splitting, and lexical reads are synthesized when an
//! ICU is rewritten into an i18n expression.

/// A value expression referenced by an update operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Literal(LiteralExpr),
    LexicalRead(LexicalReadExpr),
}

impl Expression {
    pub fn string(value: impl Into<String>) -> Self {
        Expression::Literal(LiteralExpr {
            value: LiteralValue::String(value.into()),
        })
    }

    pub fn number(value: f64) -> Self {
        Expression::Literal(LiteralExpr {
            value: LiteralValue::Number(value),
        })
    }

    /// A read of a local variable or context property by name.
    pub fn lexical_read(name: impl Into<String>) -> Self {
        Expression::LexicalRead(LexicalReadExpr { name: name.into() })
    }

    /// The string value if this expression is a string literal.
    pub fn as_string_literal(&self) -> Option<&str> {
        match self {
            Expression::Literal(LiteralExpr {
                value: LiteralValue::String(value),
            }) => Some(value),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LiteralExpr {
    pub value: LiteralValue,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    Null,
    String(String),
    Number(f64),
    Bool(bool),
}

#[derive(Debug, Clone, PartialEq)]
pub struct LexicalReadExpr {
    pub name: String,
}

/// An interpolated value, alternating static strings with dynamic expressions.
///
/// `strings` always has exactly one more entry than `expressions`; the leading and trailing
/// strings may be empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Interpolation {
    pub strings: Vec<String>,
    pub expressions: Vec<Expression>,
}

impl Interpolation {
    pub fn new(strings: Vec<String>, expressions: Vec<Expression>) -> Self {
        Interpolation {
            strings,
            expressions,
        }
    }
}

/// The value side of a binding that accepts either a plain expression or an interpolation.
#[derive(Debug, Clone, PartialEq)]
pub enum BindingExpression {
    Expression(Expression),
    Interpolation(Interpolation),
}

impl From<Expression> for BindingExpression {
    fn from(expression: Expression) -> Self {
        BindingExpression::Expression(expression)
    }
}

impl From<Interpolation> for BindingExpression {
    fn from(interpolation: Interpolation) -> Self {
        BindingExpression::Interpolation(interpolation)
    }
}
