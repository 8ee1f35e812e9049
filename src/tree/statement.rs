use std::fmt;

use smol_str::SmolStr;

/// A detached statement tree, owned by value.
///
/// This is the "raw node" form: it belongs to no [`Tree`](super::Tree) and
/// can be handed to any builder, which copies it into its own document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Statement {
    pub keyword: SmolStr,
    pub argument: Option<String>,
    pub children: Vec<Statement>,
}

impl Statement {
    /// Create an argument-less statement.
    pub fn new(keyword: impl Into<SmolStr>) -> Self {
        Self {
            keyword: keyword.into(),
            argument: None,
            children: Vec::new(),
        }
    }

    /// Set the argument.
    pub fn with_argument(mut self, argument: impl Into<String>) -> Self {
        self.argument = Some(argument.into());
        self
    }

    /// Append one substatement.
    pub fn with_child(mut self, child: Statement) -> Self {
        self.children.push(child);
        self
    }

    /// Append several substatements, in order.
    pub fn with_children(mut self, children: impl IntoIterator<Item = Statement>) -> Self {
        self.children.extend(children);
        self
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.argument {
            Some(argument) => write!(f, "{} {}", self.keyword, argument),
            None => write!(f, "{}", self.keyword),
        }
    }
}
