//! Chainable statement handles.
//!
//! A [`Node`] binds one statement to the [`Builder`] that owns its document.
//! Building through a node appends the result to that node's children, so a
//! tree can be grown in place:
//!
//! ```
//! use yang_builder::Builder;
//!
//! # fn main() -> yang_builder::Result<()> {
//! let y = Builder::default();
//! let list = y.call("leaf_list", "text-lines")?;
//! list.build("type", "string")?;
//! list.build("description", "lines of a text")?;
//! assert_eq!(
//!     list.dump(),
//!     "leaf-list text-lines {\n  type string;\n  description \"lines of a text\";\n}\n"
//! );
//! # Ok(())
//! # }
//! ```

mod list;


use std::fmt;

use smol_str::SmolStr;

pub use list::HandleList;

use crate::builder::{Builder, Expr, Input, keyword_for};
use crate::dump::{self, DumpOptions};
use crate::error::{Error, Result};
use crate::query::{self, Descend, Query};
use crate::tree::keywords::{is_comment_keyword, is_root_keyword};
use crate::tree::{NodeId, Statement};
use crate::validate::{self, ValidationContext, Validator, Verdict};

/// Handle to one statement of a builder's document.
///
/// Handles are cheap to clone; two handles are equal when they refer to the
/// very same statement.
#[derive(Clone)]
pub struct Node {
    builder: Builder,
    id: NodeId,
}

impl Node {
    pub(crate) fn new(builder: Builder, id: NodeId) -> Self {
        Self { builder, id }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn builder(&self) -> &Builder {
        &self.builder
    }

    pub fn keyword(&self) -> SmolStr {
        self.builder.tree().keyword(self.id).into()
    }

    pub fn argument(&self) -> Option<String> {
        self.builder.tree().argument(self.id).map(str::to_string)
    }

    /// Direct children, in order.
    pub fn children(&self) -> HandleList {
        let ids = self.builder.tree().children(self.id).to_vec();
        self.handles(ids)
    }

    pub fn parent(&self) -> Option<Node> {
        let parent = self.builder.tree().parent(self.id)?;
        Some(self.builder.node(parent))
    }

    /// The outermost statement of the document this node belongs to.
    pub fn document(&self) -> Node {
        self.builder.root()
    }

    /// Origin tag of the owning document.
    pub fn source(&self) -> SmolStr {
        self.builder.source()
    }

    pub fn is_root(&self) -> bool {
        self.builder.tree().root() == self.id
    }

    pub fn is_comment(&self) -> bool {
        is_comment_keyword(self.builder.tree().keyword(self.id))
    }

    /// Detached copy of this subtree.
    pub fn to_statement(&self) -> Statement {
        self.builder.tree().snapshot(self.id)
    }

    // ------------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------------

    /// Build a statement and append it to this node's children.
    pub fn build(&self, keyword: &str, input: impl Into<Input>) -> Result<Node> {
        if is_root_keyword(keyword) {
            return Err(Error::invalid_argument(format!(
                "`{keyword}` is a document root and cannot be nested under `{}`",
                self.keyword()
            )));
        }
        let child = self.builder.build_in(keyword, input, Some(self))?;
        self.builder.tree_mut().attach(self.id, child.id)?;
        Ok(child)
    }

    /// [`Builder::call`], appending the result to this node.
    pub fn call(&self, method: &str, input: impl Into<Input>) -> Result<Node> {
        self.build(&keyword_for(method, None), input)
    }

    /// [`Builder::call_with_prefix`], appending the result to this node.
    pub fn call_with_prefix(
        &self,
        method: &str,
        prefix: &str,
        input: impl Into<Input>,
    ) -> Result<Node> {
        self.build(&keyword_for(method, Some(prefix)), input)
    }

    pub fn comment(&self, text: &str) -> Result<Node> {
        let child = self.builder.comment(text)?;
        self.builder.tree_mut().attach(self.id, child.id)?;
        Ok(child)
    }

    pub fn blankline(&self) -> Result<Node> {
        let child = self.builder.blankline()?;
        self.builder.tree_mut().attach(self.id, child.id)?;
        Ok(child)
    }

    /// Materialize an expression and append it to this node.
    pub fn from_expression(&self, expr: impl Into<Expr>) -> Result<Node> {
        let expr = expr.into();
        self.builder
            .check_movable(std::slice::from_ref(&expr), Some(self.id), false)?;
        let id = self.builder.adopt(expr, false)?;
        self.builder.tree_mut().attach(self.id, id)?;
        Ok(self.builder.node(id))
    }

    /// Append existing statements as children.
    ///
    /// Without `copy`, each item is moved: it leaves its previous parent and
    /// keeps its identity (items from another document are copied over and
    /// detached from their old parent). With `copy`, a deep copy is appended
    /// and the original is untouched. Nothing moves if any item would nest
    /// the root or land beneath itself.
    pub fn append<I>(&self, items: I, copy: bool) -> Result<&Self>
    where
        I: IntoIterator,
        I::Item: Into<Expr>,
    {
        let exprs: Vec<Expr> = items.into_iter().map(Into::into).collect();
        self.builder.check_movable(&exprs, Some(self.id), copy)?;
        for expr in exprs {
            let id = self.builder.adopt(expr, copy)?;
            self.builder.tree_mut().attach(self.id, id)?;
        }
        Ok(self)
    }

    /// Move a single statement under this node.
    pub fn append_one(&self, item: impl Into<Expr>) -> Result<&Self> {
        self.append([item.into()], false)
    }

    // ------------------------------------------------------------------------
    // Output
    // ------------------------------------------------------------------------

    /// Canonical text of this subtree with default options.
    pub fn dump(&self) -> String {
        self.dump_with(&DumpOptions::default())
    }

    pub fn dump_with(&self, options: &DumpOptions) -> String {
        dump::dump(&self.builder.tree(), self.id, options)
    }

    // ------------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------------

    /// Direct children matching `query`.
    pub fn find(&self, query: impl Into<Query>) -> HandleList {
        let ids = {
            let tree = self.builder.tree();
            query::find(&tree, tree.children(self.id), &query.into())
        };
        self.handles(ids)
    }

    /// Every node of this subtree, in pre-order, this node first.
    pub fn walk(&self) -> HandleList {
        self.walk_select(|_| true)
    }

    /// Nodes of this subtree accepted by `select`, in pre-order.
    pub fn walk_select(&self, select: impl FnMut(&Node) -> bool) -> HandleList {
        self.walk_with(select, Node::clone, Descend::All).into_iter().collect()
    }

    /// `apply` mapped over the selected nodes of this subtree, in pre-order.
    pub fn walk_map<T>(
        &self,
        select: impl FnMut(&Node) -> bool,
        apply: impl FnMut(&Node) -> T,
    ) -> Vec<T> {
        self.walk_with(select, apply, Descend::All)
    }

    /// Pre-order traversal. Selection filters the result only; descent into
    /// children is unconditional. The callbacks run with the document
    /// unlocked, so they may build or append.
    pub fn walk_with<T>(
        &self,
        mut select: impl FnMut(&Node) -> bool,
        mut apply: impl FnMut(&Node) -> T,
        descend: Descend,
    ) -> Vec<T> {
        let order = query::preorder(&self.builder.tree(), self.id, descend);
        order
            .into_iter()
            .map(|id| self.builder.node(id))
            .filter(|node| select(node))
            .map(|node| apply(&node))
            .collect()
    }

    // ------------------------------------------------------------------------
    // Validation
    // ------------------------------------------------------------------------

    /// Validate the document rooted at this node.
    ///
    /// Fails with [`Error::InvalidState`] unless this is a `module` or
    /// `submodule` statement. Diagnostics already present in `context` are
    /// left untouched; this run's diagnostics are returned in the verdict.
    /// The document is valid when the validator accepts it without errors
    /// and, unless `allow_warnings`, without warnings.
    pub fn validate(
        &self,
        validator: &dyn Validator,
        context: Option<&mut ValidationContext>,
        allow_warnings: bool,
    ) -> Result<Verdict> {
        validate::run(validator, self, context, allow_warnings)
    }

    /// Like [`Node::validate`], but an invalid verdict is an
    /// [`Error::ValidationFailure`].
    pub fn validate_strict(
        &self,
        validator: &dyn Validator,
        context: Option<&mut ValidationContext>,
        allow_warnings: bool,
    ) -> Result<Verdict> {
        let verdict = self.validate(validator, context, allow_warnings)?;
        if verdict.valid {
            Ok(verdict)
        } else {
            Err(Error::validation_failure(verdict.diagnostics))
        }
    }

    fn handles(&self, ids: Vec<NodeId>) -> HandleList {
        ids.into_iter().map(|id| self.builder.node(id)).collect()
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.builder.same_document(&other.builder)
    }
}

impl Eq for Node {}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tree = self.builder.tree();
        match tree.argument(self.id) {
            Some(argument) => write!(f, "Node({} {:?})", tree.keyword(self.id), argument),
            None => write!(f, "Node({})", tree.keyword(self.id)),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        dump::dump_into(f, &self.builder.tree(), self.id, &DumpOptions::default())
    }
}
