//! Ordered collections of handles with broadcast verbs.

use std::ops::{Add, AddAssign, Index, RangeBounds};

use smol_str::SmolStr;

use super::Node;
use crate::builder::{Input, keyword_for};
use crate::error::Result;
use crate::query::Query;

/// Ordered list of [`Node`] handles.
///
/// Query verbs are broadcast to every member and their results flattened
/// one level, so chains compose across members:
/// `container.find("leaf").find("type")` yields the `type` of every leaf,
/// leaf by leaf.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct HandleList {
    nodes: Vec<Node>,
}

impl HandleList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    pub fn first(&self) -> Option<&Node> {
        self.nodes.first()
    }

    pub fn last(&self) -> Option<&Node> {
        self.nodes.last()
    }

    pub fn into_vec(self) -> Vec<Node> {
        self.nodes
    }

    /// Project every member, in order.
    pub fn pick<T>(&self, f: impl FnMut(&Node) -> T) -> Vec<T> {
        self.nodes.iter().map(f).collect()
    }

    pub fn keywords(&self) -> Vec<SmolStr> {
        self.pick(Node::keyword)
    }

    pub fn arguments(&self) -> Vec<Option<String>> {
        self.pick(Node::argument)
    }

    /// Call `f` on every member and collect the results.
    pub fn invoke<T>(&self, f: impl FnMut(&Node) -> T) -> Vec<T> {
        self.pick(f)
    }

    /// Like [`HandleList::invoke`], stopping at the first error.
    pub fn try_invoke<T>(&self, f: impl FnMut(&Node) -> Result<T>) -> Result<Vec<T>> {
        self.nodes.iter().map(f).collect()
    }

    /// Call `f` on every member and concatenate the returned lists.
    pub fn invoke_extend<I>(&self, mut f: impl FnMut(&Node) -> I) -> HandleList
    where
        I: IntoIterator<Item = Node>,
    {
        self.nodes.iter().flat_map(|node| f(node)).collect()
    }

    /// Children matching `query` of every member.
    pub fn find(&self, query: impl Into<Query>) -> HandleList {
        let query = query.into();
        self.invoke_extend(|node| node.find(query.clone()))
    }

    /// Pre-order walk of every member's subtree, concatenated.
    pub fn walk(&self) -> HandleList {
        self.invoke_extend(Node::walk)
    }

    pub fn walk_select(&self, mut select: impl FnMut(&Node) -> bool) -> HandleList {
        self.invoke_extend(|node| node.walk_select(&mut select))
    }

    /// Build the same statement under every member.
    ///
    /// Child expressions that are existing nodes are copied for each member,
    /// so the originals stay where they are.
    pub fn build(&self, keyword: &str, input: impl Into<Input>) -> Result<HandleList> {
        let input = input.into();
        self.nodes
            .iter()
            .map(|node| node.build(keyword, input.detached()))
            .collect()
    }

    pub fn call(&self, method: &str, input: impl Into<Input>) -> Result<HandleList> {
        self.build(&keyword_for(method, None), input)
    }

    /// The members repeated `n` times.
    pub fn repeat(&self, n: usize) -> HandleList {
        std::iter::repeat_n(&self.nodes, n)
            .flatten()
            .cloned()
            .collect()
    }

    pub fn slice(&self, range: impl RangeBounds<usize>) -> HandleList {
        use std::ops::Bound;

        let start = match range.start_bound() {
            Bound::Included(&i) => i,
            Bound::Excluded(&i) => i.saturating_add(1),
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&i) => i.saturating_add(1),
            Bound::Excluded(&i) => i,
            Bound::Unbounded => self.nodes.len(),
        };
        let end = end.min(self.nodes.len());
        let start = start.min(end);
        self.nodes[start..end].iter().cloned().collect()
    }

    pub fn reversed(&self) -> HandleList {
        self.nodes.iter().rev().cloned().collect()
    }

    pub fn reverse(&mut self) {
        self.nodes.reverse();
    }

    pub fn sort_by_key<K: Ord>(&mut self, f: impl FnMut(&Node) -> K) {
        self.nodes.sort_by_key(f);
    }
}

impl std::fmt::Debug for HandleList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(&self.nodes).finish()
    }
}

impl Index<usize> for HandleList {
    type Output = Node;

    fn index(&self, index: usize) -> &Node {
        &self.nodes[index]
    }
}

impl FromIterator<Node> for HandleList {
    fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Self {
        Self {
            nodes: iter.into_iter().collect(),
        }
    }
}

impl Extend<Node> for HandleList {
    fn extend<I: IntoIterator<Item = Node>>(&mut self, iter: I) {
        self.nodes.extend(iter);
    }
}

impl From<Vec<Node>> for HandleList {
    fn from(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }
}

impl IntoIterator for HandleList {
    type Item = Node;
    type IntoIter = std::vec::IntoIter<Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}

impl<'a> IntoIterator for &'a HandleList {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

impl Add for HandleList {
    type Output = HandleList;

    fn add(mut self, rhs: HandleList) -> HandleList {
        self.nodes.extend(rhs.nodes);
        self
    }
}

impl AddAssign for HandleList {
    fn add_assign(&mut self, rhs: HandleList) {
        self.nodes.extend(rhs.nodes);
    }
}
