//! Tuple expressions: the literal form of a statement tree.
//!
//! ```text
//! ("container", "error", [
//!     ("leaf", "code", [("type", "int32")]),
//!     ("leaf", "message", [("type", "string")]),
//! ])
//! ```
//!
//! With the `json` feature the same shape is accepted as a JSON array:
//! `["container", "error", [["leaf", "code", [["type", "int32"]]]]]`.

use smol_str::SmolStr;

use super::input::Argument;
use crate::node::Node;
use crate::tree::Statement;

/// A child expression: a live node, a detached statement or a tuple.
#[derive(Debug, Clone)]
pub enum Expr {
    Node(Node),
    Statement(Statement),
    Tuple {
        keyword: SmolStr,
        argument: Option<String>,
        children: Vec<Expr>,
    },
}

impl Expr {
    /// `(keyword, argument?, children)`
    pub fn tuple(
        keyword: impl Into<SmolStr>,
        argument: Option<Argument>,
        children: Vec<Expr>,
    ) -> Self {
        Expr::Tuple {
            keyword: keyword.into(),
            argument: argument.map(Argument::into_string),
            children,
        }
    }

    /// Replace live nodes by detached copies, recursively.
    pub fn detached(&self) -> Self {
        match self {
            Expr::Node(node) => Expr::Statement(node.to_statement()),
            Expr::Statement(_) => self.clone(),
            Expr::Tuple {
                keyword,
                argument,
                children,
            } => Expr::Tuple {
                keyword: keyword.clone(),
                argument: argument.clone(),
                children: children.iter().map(Expr::detached).collect(),
            },
        }
    }
}

impl From<Node> for Expr {
    fn from(node: Node) -> Self {
        Expr::Node(node)
    }
}

impl From<&Node> for Expr {
    fn from(node: &Node) -> Self {
        Expr::Node(node.clone())
    }
}

impl From<Statement> for Expr {
    fn from(statement: Statement) -> Self {
        Expr::Statement(statement)
    }
}

impl From<(&str,)> for Expr {
    fn from((keyword,): (&str,)) -> Self {
        Expr::tuple(keyword, None, Vec::new())
    }
}

macro_rules! expr_from_pair {
    ($($ty:ty),*) => {
        $(
            impl From<(&str, $ty)> for Expr {
                fn from((keyword, argument): (&str, $ty)) -> Self {
                    Expr::tuple(keyword, Some(argument.into()), Vec::new())
                }
            }
        )*
    };
}

expr_from_pair!(&str, String, bool, i32, i64, u32, u64, usize);

impl<T: Into<Expr>> From<(&str, Vec<T>)> for Expr {
    fn from((keyword, children): (&str, Vec<T>)) -> Self {
        Expr::tuple(keyword, None, children.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Expr>> From<(&str, &str, Vec<T>)> for Expr {
    fn from((keyword, argument, children): (&str, &str, Vec<T>)) -> Self {
        Expr::tuple(
            keyword,
            Some(argument.into()),
            children.into_iter().map(Into::into).collect(),
        )
    }
}

#[cfg(feature = "json")]
mod json {
    use serde_json::Value;

    use super::Expr;
    use crate::builder::input::Argument;
    use crate::error::{Error, Result};

    impl TryFrom<&Value> for Expr {
        type Error = Error;

        /// `["keyword", argument?, [children…]?]`, where the argument is a
        /// string, boolean, number or null.
        fn try_from(value: &Value) -> Result<Self> {
            let Value::Array(items) = value else {
                return Err(Error::invalid_argument(format!(
                    "expression should be an array, {} given",
                    kind(value)
                )));
            };

            let (keyword, rest) = match items.split_first() {
                Some((Value::String(keyword), rest)) => (keyword.as_str(), rest),
                Some((other, _)) => {
                    return Err(Error::invalid_argument(format!(
                        "expression keyword should be a string, {} given",
                        kind(other)
                    )));
                }
                None => return Err(Error::invalid_argument("empty expression")),
            };

            let (argument, children) = match rest {
                [] => (None, None),
                [Value::Array(children)] => (None, Some(children)),
                [argument] => (argument_from(argument)?, None),
                [argument, Value::Array(children)] => (argument_from(argument)?, Some(children)),
                [_, other] => {
                    return Err(Error::invalid_argument(format!(
                        "expression children should be an array, {} given",
                        kind(other)
                    )));
                }
                _ => {
                    return Err(Error::invalid_argument(format!(
                        "expression `{keyword}` has {} elements, at most 3 allowed",
                        items.len()
                    )));
                }
            };

            let children = children
                .map(|children| children.iter().map(Expr::try_from).collect::<Result<Vec<_>>>())
                .transpose()?
                .unwrap_or_default();

            Ok(Expr::tuple(keyword, argument, children))
        }
    }

    impl TryFrom<Value> for Expr {
        type Error = Error;

        fn try_from(value: Value) -> Result<Self> {
            Expr::try_from(&value)
        }
    }

    fn argument_from(value: &Value) -> Result<Option<Argument>> {
        match value {
            Value::Null => Ok(None),
            Value::String(text) => Ok(Some(text.as_str().into())),
            Value::Bool(flag) => Ok(Some((*flag).into())),
            Value::Number(number) => Ok(Some(number.to_string().into())),
            other => Err(Error::invalid_argument(format!(
                "expression argument should be a string, boolean or number, {} given",
                kind(other)
            ))),
        }
    }

    fn kind(value: &Value) -> &'static str {
        match value {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }
}
