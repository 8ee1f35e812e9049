//! Statement factory.
//!
//! A [`Builder`] owns one document tree and creates every statement in it.
//! Statements are returned wrapped as [`Node`] handles:
//!
//! ```
//! use yang_builder::{Builder, stmt};
//!
//! # fn main() -> yang_builder::Result<()> {
//! let y = Builder::new("example");
//! let leaf = stmt!(y, leaf_list, ("allow-user", [
//!     y.build("type", "string")?,
//!     y.build("description", "username")?,
//! ]))?;
//! assert_eq!(
//!     leaf.dump(),
//!     "leaf-list allow-user {\n  type string;\n  description \"username\";\n}\n"
//! );
//! # Ok(())
//! # }
//! ```
//!
//! # Single writer
//!
//! The root statement is builder state: building `module`/`submodule`
//! rewrites the existing root in place instead of allocating a new one. Use
//! one builder per tree; a builder is neither `Send` nor `Sync`.

mod expr;
mod input;
pub mod names;

use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

use smol_str::SmolStr;

pub use expr::Expr;
pub use input::{Argument, Input};
pub use names::keyword_for;

use crate::error::{Error, Result};
use crate::node::Node;
use crate::tree::keywords::{COMMENT_KEYWORD, is_root_keyword};
use crate::tree::{DEFAULT_SOURCE, NodeId, Statement, Tree};

/// Statement generator for one YANG document.
///
/// Cloning a builder yields another handle to the same document.
#[derive(Clone)]
pub struct Builder {
    tree: Rc<RefCell<Tree>>,
}

impl Default for Builder {
    fn default() -> Self {
        Self::new(DEFAULT_SOURCE)
    }
}

impl std::fmt::Debug for Builder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tree = self.tree();
        f.debug_struct("Builder")
            .field("source", &tree.source())
            .field("statements", &tree.len())
            .finish()
    }
}

impl Builder {
    /// Create a builder whose document root is `module <name>`.
    ///
    /// `name` is also the origin tag reported by diagnostics.
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self::from_tree(Tree::new(name, "module"))
    }

    /// Create a builder around a pre-existing outermost statement.
    pub fn with_top(top: &Statement) -> Self {
        Self::from_tree(Tree::from_statement(top))
    }

    fn from_tree(tree: Tree) -> Self {
        Self {
            tree: Rc::new(RefCell::new(tree)),
        }
    }

    /// Handle to the document root.
    pub fn root(&self) -> Node {
        let root = self.tree().root();
        self.node(root)
    }

    /// Origin tag of the document.
    pub fn source(&self) -> SmolStr {
        SmolStr::new(self.tree().source())
    }

    /// Build a statement. See [`Builder::build_in`].
    pub fn build(&self, keyword: &str, input: impl Into<Input>) -> Result<Node> {
        self.build_in(keyword, input, None)
    }

    /// Build a statement, recording `parent` as its owner.
    ///
    /// Every child expression is materialized and moved under the new
    /// statement, in order. The parent's own child list is left untouched;
    /// [`Node::build`] is what inserts the result there.
    ///
    /// Root keywords (`module`, `submodule`) do not allocate: the document
    /// root is rewritten in place and its children are replaced.
    pub fn build_in(
        &self,
        keyword: &str,
        input: impl Into<Input>,
        parent: Option<&Node>,
    ) -> Result<Node> {
        if keyword.is_empty() {
            return Err(Error::invalid_argument("statement keyword must not be empty"));
        }
        let parent = parent.map(|p| self.local_id(p)).transpose()?;

        let (argument, children) = input.into().into_parts();
        self.check_movable(&children, parent, false)?;
        let children = children
            .into_iter()
            .map(|child| self.adopt(child, false))
            .collect::<Result<Vec<_>>>()?;

        let mut tree = self.tree_mut();
        let id = if is_root_keyword(keyword) {
            let root = tree.root();
            tracing::debug!(keyword, ?argument, "rewriting document root");
            let data = tree.get_mut(root);
            data.keyword = keyword.into();
            data.argument = argument;
            tree.replace_children(root, &children)?;
            root
        } else {
            let id = tree.alloc(keyword, argument);
            tree.set_parent(id, parent);
            for child in children {
                tree.attach(id, child)?;
            }
            id
        };
        drop(tree);

        Ok(self.node(id))
    }

    /// Build a statement whose keyword is spelled as a method name.
    pub fn call(&self, method: &str, input: impl Into<Input>) -> Result<Node> {
        self.build(&keyword_for(method, None), input)
    }

    /// Like [`Builder::call`], qualifying the keyword with `prefix`.
    pub fn call_with_prefix(
        &self,
        method: &str,
        prefix: &str,
        input: impl Into<Input>,
    ) -> Result<Node> {
        self.build(&keyword_for(method, Some(prefix)), input)
    }

    /// Comment node. One line renders as `// text`; several lines (or none)
    /// as a `/* … */` block with ` * ` leaders.
    pub fn comment(&self, text: &str) -> Result<Node> {
        self.build(COMMENT_KEYWORD, comment_text(text))
    }

    /// Node rendered as an empty line.
    pub fn blankline(&self) -> Result<Node> {
        self.build(COMMENT_KEYWORD, " ")
    }

    /// Materialize a tuple expression. Nodes pass through unchanged and
    /// detached statements are copied into this document.
    pub fn from_expression(&self, expr: impl Into<Expr>) -> Result<Node> {
        self.from_expression_in(expr, None)
    }

    pub fn from_expression_in(&self, expr: impl Into<Expr>, parent: Option<&Node>) -> Result<Node> {
        match expr.into() {
            Expr::Node(node) => Ok(node),
            Expr::Statement(statement) => {
                let parent = parent.map(|p| self.local_id(p)).transpose()?;
                let mut tree = self.tree_mut();
                let id = tree.import(&statement);
                tree.set_parent(id, parent);
                drop(tree);
                Ok(self.node(id))
            }
            Expr::Tuple {
                keyword,
                argument,
                children,
            } => self.build_in(
                &keyword,
                Input::new(argument.map(Argument::from), children),
                parent,
            ),
        }
    }

    /// Materialize a JSON tuple expression such as
    /// `["leaf", "counter", [["type", "int32"]]]`.
    #[cfg(feature = "json")]
    pub fn from_json(&self, value: &serde_json::Value) -> Result<Node> {
        self.from_expression(Expr::try_from(value)?)
    }

    pub(crate) fn tree(&self) -> Ref<'_, Tree> {
        self.tree.borrow()
    }

    pub(crate) fn tree_mut(&self) -> RefMut<'_, Tree> {
        self.tree.borrow_mut()
    }

    pub(crate) fn same_document(&self, other: &Builder) -> bool {
        Rc::ptr_eq(&self.tree, &other.tree)
    }

    pub(crate) fn node(&self, id: NodeId) -> Node {
        Node::new(self.clone(), id)
    }

    /// Fail, before anything moves, if materializing `exprs` under `parent`
    /// would nest the document root or place a node beneath itself. Nodes
    /// that are copied (`copy`) never move; nodes inside tuples always do.
    pub(crate) fn check_movable(
        &self,
        exprs: &[Expr],
        parent: Option<NodeId>,
        copy: bool,
    ) -> Result<()> {
        let tree = self.tree();
        self.check_exprs(&tree, exprs, parent, copy)
    }

    fn check_exprs(
        &self,
        tree: &Tree,
        exprs: &[Expr],
        parent: Option<NodeId>,
        copy: bool,
    ) -> Result<()> {
        for expr in exprs {
            match expr {
                Expr::Node(node) if !copy && node.builder().same_document(self) => {
                    tree.check_attach(parent, node.id())?;
                }
                Expr::Tuple { children, .. } => self.check_exprs(tree, children, parent, false)?,
                Expr::Node(_) | Expr::Statement(_) => {}
            }
        }
        Ok(())
    }

    /// Bring an expression into this document and return its id, ready to
    /// be attached. Same-document nodes are moved (or deep-copied when
    /// `copy`); nodes of another document are copied and, unless `copy`,
    /// detached from their old parent.
    pub(crate) fn adopt(&self, expr: Expr, copy: bool) -> Result<NodeId> {
        match expr {
            Expr::Node(node) if node.builder().same_document(self) => {
                if copy {
                    let mut tree = self.tree_mut();
                    let snapshot = tree.snapshot(node.id());
                    Ok(tree.import(&snapshot))
                } else {
                    Ok(node.id())
                }
            }
            Expr::Node(node) => {
                tracing::debug!(keyword = %node.keyword(), copy, "copying node across documents");
                let id = self.tree_mut().deep_copy_from(&node.builder().tree(), node.id());
                if !copy {
                    node.builder().tree_mut().detach(node.id());
                }
                Ok(id)
            }
            Expr::Statement(statement) => Ok(self.tree_mut().import(&statement)),
            tuple @ Expr::Tuple { .. } => Ok(self.from_expression(tuple)?.id()),
        }
    }

    fn local_id(&self, node: &Node) -> Result<NodeId> {
        if node.builder().same_document(self) {
            Ok(node.id())
        } else {
            Err(Error::invalid_argument(format!(
                "parent `{}` belongs to another document",
                node.keyword()
            )))
        }
    }
}

fn comment_text(text: &str) -> String {
    let lines: Vec<&str> = text.trim().lines().collect();
    match lines.as_slice() {
        [line] => format!("// {line}"),
        lines => {
            let body: Vec<String> = lines.iter().map(|line| format!("* {line}")).collect();
            format!("/*\n{}\n*/", body.join("\n"))
        }
    }
}

#[cfg(test)]
mod tests;
