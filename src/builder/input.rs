//! Statement arguments and the argument-or-children payload of a build call.

use std::fmt;

use super::expr::Expr;
use crate::node::Node;
use crate::tree::Statement;

/// Argument of a statement, normalized to text.
///
/// Booleans render as `true`/`false`, numbers in decimal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Argument(String);

impl Argument {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Argument {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Argument {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&String> for Argument {
    fn from(value: &String) -> Self {
        Self(value.clone())
    }
}

impl From<bool> for Argument {
    fn from(value: bool) -> Self {
        Self(if value { "true" } else { "false" }.to_string())
    }
}

macro_rules! argument_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Argument {
                fn from(value: $ty) -> Self {
                    Self(value.to_string())
                }
            }
        )*
    };
}

argument_from_number!(i32, i64, u32, u64, usize);

/// What follows the keyword in a build call.
///
/// The positional slot after the keyword can hold either an argument or the
/// children; the variant says which, so no runtime type inspection is needed.
#[derive(Debug, Clone, Default)]
pub enum Input {
    #[default]
    Empty,
    Arg(Argument),
    Children(Vec<Expr>),
    Full(Argument, Vec<Expr>),
}

impl Input {
    pub fn new(argument: Option<Argument>, children: Vec<Expr>) -> Self {
        match (argument, children.is_empty()) {
            (None, true) => Input::Empty,
            (None, false) => Input::Children(children),
            (Some(argument), true) => Input::Arg(argument),
            (Some(argument), false) => Input::Full(argument, children),
        }
    }

    pub fn into_parts(self) -> (Option<String>, Vec<Expr>) {
        match self {
            Input::Empty => (None, Vec::new()),
            Input::Arg(argument) => (Some(argument.into_string()), Vec::new()),
            Input::Children(children) => (None, children),
            Input::Full(argument, children) => (Some(argument.into_string()), children),
        }
    }

    /// Same input with every live node replaced by a detached copy, so the
    /// input can be built several times without moving the originals.
    pub fn detached(&self) -> Self {
        match self {
            Input::Empty | Input::Arg(_) => self.clone(),
            Input::Children(children) => Input::Children(detach_all(children)),
            Input::Full(argument, children) => {
                Input::Full(argument.clone(), detach_all(children))
            }
        }
    }
}

fn detach_all(children: &[Expr]) -> Vec<Expr> {
    children.iter().map(Expr::detached).collect()
}

impl From<()> for Input {
    fn from(_: ()) -> Self {
        Input::Empty
    }
}

impl From<Argument> for Input {
    fn from(argument: Argument) -> Self {
        Input::Arg(argument)
    }
}

macro_rules! input_from_argument {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Input {
                fn from(value: $ty) -> Self {
                    Input::Arg(value.into())
                }
            }
        )*
    };
}

input_from_argument!(&str, String, &String, bool, i32, i64, u32, u64, usize);

impl From<Node> for Input {
    fn from(node: Node) -> Self {
        Input::Children(vec![Expr::Node(node)])
    }
}

impl From<&Node> for Input {
    fn from(node: &Node) -> Self {
        Input::Children(vec![Expr::Node(node.clone())])
    }
}

impl From<Statement> for Input {
    fn from(statement: Statement) -> Self {
        Input::Children(vec![Expr::Statement(statement)])
    }
}

impl From<Expr> for Input {
    fn from(expr: Expr) -> Self {
        Input::Children(vec![expr])
    }
}

impl<T: Into<Expr>> From<Vec<T>> for Input {
    fn from(children: Vec<T>) -> Self {
        Input::Children(children.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Expr>, const N: usize> From<[T; N]> for Input {
    fn from(children: [T; N]) -> Self {
        Input::Children(children.into_iter().map(Into::into).collect())
    }
}

impl<A: Into<Argument>, T: Into<Expr>> From<(A, Vec<T>)> for Input {
    fn from((argument, children): (A, Vec<T>)) -> Self {
        Input::Full(argument.into(), children.into_iter().map(Into::into).collect())
    }
}

impl<A: Into<Argument>, T: Into<Expr>, const N: usize> From<(A, [T; N])> for Input {
    fn from((argument, children): (A, [T; N])) -> Self {
        Input::Full(argument.into(), children.into_iter().map(Into::into).collect())
    }
}

impl<A: Into<Argument>> From<(A, Node)> for Input {
    fn from((argument, child): (A, Node)) -> Self {
        Input::Full(argument.into(), vec![Expr::Node(child)])
    }
}
