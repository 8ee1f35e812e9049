//! Canonical YANG text rendering of statement trees.
//!
//! The output follows the brace-delimited statement syntax:
//!
//! ```text
//! module test {
//!   namespace "urn:yang:test";
//!   prefix test;
//! }
//! ```
//!
//! Identifier-like arguments are printed bare, free text and extension
//! arguments are double-quoted. Comment nodes are emitted verbatim at the
//! indentation of their position. Rendering is deterministic: identical trees
//! always produce byte-identical text.

mod options;

#[cfg(test)]
mod tests;

use std::fmt::{self, Write};

pub use options::DumpOptions;

use crate::tree::keywords::{
    ArgKind, BODY_RANK, arg_kind, canonical_rank, is_comment_keyword, is_root_keyword,
};
use crate::tree::{NodeId, Tree};

/// Render the subtree rooted at `id`.
pub fn dump(tree: &Tree, id: NodeId, options: &DumpOptions) -> String {
    let mut output = String::new();
    // Writing into a String cannot fail.
    let _ = dump_into(&mut output, tree, id, options);
    output
}

/// Render the subtree rooted at `id` into any [`fmt::Write`] sink.
pub fn dump_into<W: Write>(
    output: &mut W,
    tree: &Tree,
    id: NodeId,
    options: &DumpOptions,
) -> fmt::Result {
    let mut emitter = Emitter {
        tree,
        options,
        output,
    };
    emitter.statement(id, options.base_indent)
}

struct Emitter<'a, W> {
    tree: &'a Tree,
    options: &'a DumpOptions,
    output: &'a mut W,
}

impl<W: Write> Emitter<'_, W> {
    fn statement(&mut self, id: NodeId, level: usize) -> fmt::Result {
        let tree = self.tree;
        let data = tree.get(id);
        let indent = self.options.indent(level);

        if is_comment_keyword(&data.keyword) {
            return self.comment(data.argument.as_deref().unwrap_or_default(), &indent);
        }

        write!(self.output, "{indent}{}", data.keyword)?;
        if let Some(argument) = &data.argument {
            self.argument(&data.keyword, argument, &indent)?;
        }

        if data.children.is_empty() {
            return writeln!(self.output, ";");
        }

        writeln!(self.output, " {{")?;
        for child in self.ordered_children(id) {
            self.statement(child, level + 1)?;
        }
        writeln!(self.output, "{indent}}}")
    }

    fn argument(&mut self, keyword: &str, argument: &str, indent: &str) -> fmt::Result {
        if arg_kind(keyword) == ArgKind::Identifier && !needs_quoting(argument) {
            return write!(self.output, " {argument}");
        }

        let escaped = escape(argument);
        let mut lines = escaped.split('\n');
        write!(self.output, " \"{}", lines.next().unwrap_or_default())?;

        // continuation lines start one column past the opening quote
        let quote_pad = format!("{indent}{}", " ".repeat(keyword.chars().count() + 1));
        for line in lines {
            writeln!(self.output)?;
            if !line.is_empty() {
                write!(self.output, "{quote_pad} {line}")?;
            }
        }
        if escaped.ends_with('\n') {
            write!(self.output, "{quote_pad}")?;
        }
        write!(self.output, "\"")
    }

    fn comment(&mut self, text: &str, indent: &str) -> fmt::Result {
        if text.trim().is_empty() {
            return writeln!(self.output);
        }
        for line in text.lines() {
            if line.starts_with('*') {
                writeln!(self.output, "{indent} {line}")?;
            } else {
                writeln!(self.output, "{indent}{line}")?;
            }
        }
        Ok(())
    }

    /// Children in output order. Only module-level statements are reordered,
    /// and only in canonical mode; comments travel with the next statement.
    fn ordered_children(&self, id: NodeId) -> Vec<NodeId> {
        let data = self.tree.get(id);
        let children = data.children.clone();
        if !self.options.canonical || !is_root_keyword(&data.keyword) {
            return children;
        }

        let mut ranks = vec![BODY_RANK; children.len()];
        let mut next = BODY_RANK;
        for (i, child) in children.iter().enumerate().rev() {
            let keyword = self.tree.keyword(*child);
            if !is_comment_keyword(keyword) {
                next = canonical_rank(keyword);
            }
            ranks[i] = next;
        }

        let mut order: Vec<usize> = (0..children.len()).collect();
        order.sort_by_key(|&i| ranks[i]);
        order.into_iter().map(|i| children[i]).collect()
    }
}

/// Whether an identifier-like argument must still be quoted.
pub fn needs_quoting(argument: &str) -> bool {
    argument.is_empty()
        || argument
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '"' | '\'' | ';' | '{' | '}'))
        || argument.contains("//")
        || argument.contains("/*")
        || argument.contains("*/")
}

/// Escape an argument for a double-quoted string.
pub fn escape(argument: &str) -> String {
    let mut escaped = String::with_capacity(argument.len());
    for c in argument.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\t' => escaped.push_str("\\t"),
            _ => escaped.push(c),
        }
    }
    escaped
}
