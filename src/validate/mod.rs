//! Validation of complete documents.
//!
//! Semantic checking belongs to an external engine plugged in through the
//! [`Validator`] trait. Trees are never checked while they are built; a
//! document is validated once, from its root, when it is complete.
//!
//! [`StructuralValidator`] is a small built-in implementation covering
//! header completeness and prefix usage only.

mod diagnostics;
mod structural;


pub use diagnostics::{Diagnostic, Severity, codes};
pub use structural::StructuralValidator;

use crate::error::{Error, Result};
use crate::node::Node;
use crate::tree::keywords::is_root_keyword;

/// Mutable state shared across validation runs.
#[derive(Debug, Clone, Default)]
pub struct ValidationContext {
    pub diagnostics: Vec<Diagnostic>,
}

impl ValidationContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_error())
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| !d.is_error())
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    pub fn clear(&mut self) {
        self.diagnostics.clear();
    }
}

/// Validation engine for complete documents.
pub trait Validator {
    /// Fresh context, used when the caller does not supply one.
    fn create_context(&self) -> ValidationContext {
        ValidationContext::new()
    }

    /// Check the document rooted at `root`, pushing diagnostics into `ctx`.
    /// Returns whether the engine considers the document valid.
    fn validate(&self, root: &Node, ctx: &mut ValidationContext) -> bool;
}

/// Outcome of one validation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub valid: bool,
    pub diagnostics: Vec<Diagnostic>,
}

impl Verdict {
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_error())
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| !d.is_error())
    }
}

/// Run `validator` on `root` with the diagnostics of this run isolated from
/// whatever the supplied context already held.
pub(crate) fn run(
    validator: &dyn Validator,
    root: &Node,
    context: Option<&mut ValidationContext>,
    allow_warnings: bool,
) -> Result<Verdict> {
    let keyword = root.keyword();
    if !is_root_keyword(&keyword) {
        return Err(Error::invalid_state(format!(
            "cannot validate `{keyword}`, only top-level statements (module, submodule)"
        )));
    }

    let mut created;
    let ctx = match context {
        Some(ctx) => ctx,
        None => {
            created = validator.create_context();
            &mut created
        }
    };

    let saved = std::mem::take(&mut ctx.diagnostics);
    let accepted = validator.validate(root, ctx);
    let diagnostics = std::mem::replace(&mut ctx.diagnostics, saved);

    for diagnostic in &diagnostics {
        if diagnostic.is_error() {
            tracing::debug!(%diagnostic, "validation error");
        } else {
            tracing::warn!(%diagnostic, "validation warning");
        }
    }

    let has_errors = diagnostics.iter().any(Diagnostic::is_error);
    let has_warnings = diagnostics.iter().any(|d| !d.is_error());
    let valid = accepted && !has_errors && (allow_warnings || !has_warnings);
    tracing::debug!(
        source = %root.source(),
        valid,
        diagnostics = diagnostics.len(),
        "validated document"
    );

    Ok(Verdict { valid, diagnostics })
}
