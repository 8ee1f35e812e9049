//! Statement tree storage.
//!
//! A document is stored as an arena: every statement lives in the node table
//! of exactly one [`Tree`] and refers to its parent and children by
//! [`NodeId`]. The outermost statement (the `module`/`submodule`) is the
//! tree's root and acts as the owning document of every node in the table.
//!
//! ```text
//! Tree
//! ├── nodes: Vec<StmtData>   (index == NodeId)
//! ├── root: NodeId           (owning document of every node)
//! └── source: SmolStr        (origin tag for diagnostics)
//! ```
//!
//! Parent links are plain indices, so there is no ownership cycle between a
//! node and its children.

pub mod keywords;
mod statement;

#[cfg(test)]
mod tests;

use smol_str::SmolStr;

use crate::error::{Error, Result};
pub use statement::Statement;

/// Default origin tag for trees whose builder was not given a name.
pub const DEFAULT_SOURCE: &str = "builder-generated";

/// Index of a statement inside its [`Tree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// Position of the statement in the node table.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// One statement: keyword, optional argument and ordered substatements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StmtData {
    pub keyword: SmolStr,
    pub argument: Option<String>,
    pub children: Vec<NodeId>,
    pub parent: Option<NodeId>,
}

/// Arena holding every statement of one document.
///
/// # Invariants
/// - `nodes[c].parent == Some(p)` for every `c` in `nodes[p].children`
/// - a node appears in the children of at most one parent
/// - the root never has a parent
#[derive(Debug, Clone)]
pub struct Tree {
    nodes: Vec<StmtData>,
    root: NodeId,
    source: SmolStr,
}

impl Tree {
    /// Create a tree whose root is `<root_keyword> <source>`.
    pub fn new(source: impl Into<SmolStr>, root_keyword: &str) -> Self {
        let source = source.into();
        let root = StmtData {
            keyword: root_keyword.into(),
            argument: Some(source.to_string()),
            children: Vec::new(),
            parent: None,
        };
        Self {
            nodes: vec![root],
            root: NodeId(0),
            source,
        }
    }

    /// Create a tree that adopts an existing outermost statement as its root.
    ///
    /// The origin tag is the statement's argument, or [`DEFAULT_SOURCE`].
    pub fn from_statement(top: &Statement) -> Self {
        let source = top.argument.as_deref().unwrap_or(DEFAULT_SOURCE);
        let mut tree = Self::new(source, &top.keyword);
        tree.nodes[0].argument = top.argument.clone();
        for child in &top.children {
            let id = tree.import(child);
            tree.link(tree.root, id);
        }
        tree
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Origin tag shared by every node of this document.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Number of statements ever allocated in this tree (attached or not).
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Allocate a detached statement.
    pub fn alloc(&mut self, keyword: &str, argument: Option<String>) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        tracing::trace!(id = id.index(), keyword, "allocated statement");
        self.nodes.push(StmtData {
            keyword: keyword.into(),
            argument,
            children: Vec::new(),
            parent: None,
        });
        id
    }

    pub fn get(&self, id: NodeId) -> &StmtData {
        &self.nodes[id.index()]
    }

    pub fn get_mut(&mut self, id: NodeId) -> &mut StmtData {
        &mut self.nodes[id.index()]
    }

    pub fn keyword(&self, id: NodeId) -> &str {
        &self.get(id).keyword
    }

    pub fn argument(&self, id: NodeId) -> Option<&str> {
        self.get(id).argument.as_deref()
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.get(id).children
    }

    /// Parent of `id`, only when `id` is actually listed among its children.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id)
            .parent
            .filter(|p| self.get(*p).children.contains(&id))
    }

    /// Record `parent` as the owner of `id` without inserting it in the
    /// parent's child ordering. The insertion is done by [`Tree::attach`].
    pub fn set_parent(&mut self, id: NodeId, parent: Option<NodeId>) {
        if id != self.root {
            self.get_mut(id).parent = parent;
        }
    }

    /// Whether `ancestor` is `node` itself or one of its attached ancestors.
    pub fn is_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.parent(id);
        }
        false
    }

    /// Move `child` to the end of `parent`'s children.
    ///
    /// The child is first detached from its previous parent, so a node is
    /// never listed under two parents.
    pub fn attach(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        self.check_attach(Some(parent), child)?;
        self.detach(child);
        self.link(parent, child);
        tracing::trace!(parent = parent.index(), child = child.index(), "attached statement");
        Ok(())
    }

    /// Whether `child` may be moved under `parent` (or under a statement that
    /// will be attached to `parent`): the root is never nested and a node is
    /// never placed beneath itself.
    pub fn check_attach(&self, parent: Option<NodeId>, child: NodeId) -> Result<()> {
        if child == self.root {
            return Err(Error::invalid_argument(format!(
                "the document root `{}` cannot be nested",
                self.keyword(child)
            )));
        }
        match parent {
            Some(parent) if self.is_ancestor(child, parent) => Err(Error::invalid_argument(
                format!("cannot append `{}` beneath itself", self.keyword(child)),
            )),
            _ => Ok(()),
        }
    }

    /// Remove `child` from its parent's children, if it has one.
    pub fn detach(&mut self, child: NodeId) {
        if let Some(parent) = self.get(child).parent {
            self.get_mut(parent).children.retain(|c| *c != child);
        }
        self.get_mut(child).parent = None;
    }

    /// Replace all children of `parent`; previous children become detached.
    pub fn replace_children(&mut self, parent: NodeId, children: &[NodeId]) -> Result<()> {
        let previous = std::mem::take(&mut self.get_mut(parent).children);
        for id in previous {
            self.get_mut(id).parent = None;
        }
        for &child in children {
            self.attach(parent, child)?;
        }
        Ok(())
    }

    /// Detached deep copy of the subtree rooted at `id`.
    pub fn snapshot(&self, id: NodeId) -> Statement {
        let data = self.get(id);
        Statement {
            keyword: data.keyword.clone(),
            argument: data.argument.clone(),
            children: data.children.iter().map(|c| self.snapshot(*c)).collect(),
        }
    }

    /// Allocate a copy of `statement` (and its subtree); the copy is detached.
    pub fn import(&mut self, statement: &Statement) -> NodeId {
        let id = self.alloc(&statement.keyword, statement.argument.clone());
        for child in &statement.children {
            let child_id = self.import(child);
            self.link(id, child_id);
        }
        id
    }

    /// Copy the subtree rooted at `id` of another tree into this one; the
    /// copy is detached.
    pub fn deep_copy_from(&mut self, other: &Tree, id: NodeId) -> NodeId {
        self.import(&other.snapshot(id))
    }

    fn link(&mut self, parent: NodeId, child: NodeId) {
        self.get_mut(parent).children.push(child);
        self.get_mut(child).parent = Some(parent);
    }
}
