//! Queries over statement trees: `find` among direct children and
//! pre-order `walk` over a whole subtree.


use crate::tree::keywords::{is_comment_keyword, strip_prefix};
use crate::tree::{NodeId, Tree};

/// Match criteria for [`find`].
///
/// Unset criteria match anything. With `ignore_prefix`, the namespace prefix
/// (text before the first `:`) is stripped from both the candidate and the
/// criteria before comparing, so `ext:myext` matches a `myext` query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub keyword: Option<String>,
    pub argument: Option<String>,
    pub ignore_prefix: bool,
}

impl Query {
    /// Matches every statement.
    pub fn any() -> Self {
        Self::default()
    }

    pub fn keyword(keyword: impl Into<String>) -> Self {
        Self::any().with_keyword(keyword)
    }

    pub fn argument(argument: impl Into<String>) -> Self {
        Self::any().with_argument(argument)
    }

    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    pub fn with_argument(mut self, argument: impl Into<String>) -> Self {
        self.argument = Some(argument.into());
        self
    }

    /// Compare keywords and arguments without their namespace prefix.
    pub fn ignore_prefix(mut self) -> Self {
        self.ignore_prefix = true;
        self
    }

    /// Whether a statement with this keyword and argument matches.
    pub fn matches(&self, keyword: &str, argument: Option<&str>) -> bool {
        let keyword_ok = self
            .keyword
            .as_deref()
            .is_none_or(|expected| self.same(expected, keyword));
        let argument_ok = match self.argument.as_deref() {
            None => true,
            Some(expected) => argument.is_some_and(|actual| self.same(expected, actual)),
        };
        keyword_ok && argument_ok
    }

    fn same(&self, expected: &str, actual: &str) -> bool {
        if self.ignore_prefix {
            strip_prefix(expected) == strip_prefix(actual)
        } else {
            expected == actual
        }
    }
}

impl From<&str> for Query {
    fn from(keyword: &str) -> Self {
        Query::keyword(keyword)
    }
}

impl From<String> for Query {
    fn from(keyword: String) -> Self {
        Query::keyword(keyword)
    }
}

impl From<(&str, &str)> for Query {
    fn from((keyword, argument): (&str, &str)) -> Self {
        Query::keyword(keyword).with_argument(argument)
    }
}

/// Which children a [`walk`] descends into.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Descend {
    /// Every substatement, comments and blank lines included.
    #[default]
    All,
    /// Only real statements; comment and blank-line nodes are skipped.
    Statements,
}

impl Descend {
    fn admits(self, tree: &Tree, id: NodeId) -> bool {
        match self {
            Descend::All => true,
            Descend::Statements => !is_comment_keyword(tree.keyword(id)),
        }
    }
}

/// Filter `candidates` (normally the direct children of one statement),
/// keeping their original order.
pub fn find(tree: &Tree, candidates: &[NodeId], query: &Query) -> Vec<NodeId> {
    let found: Vec<NodeId> = candidates
        .iter()
        .copied()
        .filter(|id| query.matches(tree.keyword(*id), tree.argument(*id)))
        .collect();
    tracing::trace!(?query, candidates = candidates.len(), found = found.len(), "find");
    found
}

/// Pre-order ids of the subtree rooted at `root`.
pub fn preorder(tree: &Tree, root: NodeId, descend: Descend) -> Vec<NodeId> {
    let mut order = Vec::new();
    let mut stack = vec![root];
    while let Some(id) = stack.pop() {
        order.push(id);
        stack.extend(
            tree.children(id)
                .iter()
                .rev()
                .copied()
                .filter(|child| descend.admits(tree, *child)),
        );
    }
    order
}

/// Depth-first, pre-order traversal of the subtree rooted at `root`.
///
/// `select` filters the result set only: descent is unconditional, so the
/// children of a rejected node are still visited. `apply` maps every
/// selected node to the collected value.
pub fn walk<T>(
    tree: &Tree,
    root: NodeId,
    mut select: impl FnMut(&Tree, NodeId) -> bool,
    mut apply: impl FnMut(&Tree, NodeId) -> T,
    descend: Descend,
) -> Vec<T> {
    preorder(tree, root, descend)
        .into_iter()
        .filter(|id| select(tree, *id))
        .map(|id| apply(tree, id))
        .collect()
}
