//! # yang-builder
//!
//! Programmatic construction, querying and canonical text output of YANG
//! statement trees.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! validate  → Validator trait, diagnostics, structural checks
//!   ↓
//! node      → Node handles and HandleList (chaining, broadcast verbs)
//!   ↓
//! builder   → Builder, tuple expressions, method-name translation
//!   ↓
//! query     → find / pre-order walk over the arena
//! dump      → canonical YANG text
//!   ↓
//! tree      → Arena storage, Statement, keyword tables
//! ```
//!
//! ## Example
//!
//! ```
//! use yang_builder::{Builder, stmt};
//!
//! # fn main() -> yang_builder::Result<()> {
//! let y = Builder::new("example");
//! let module = y.build("module", ("example", [
//!     y.build("namespace", "urn:example")?,
//!     y.build("prefix", "ex")?,
//! ]))?;
//! stmt!(module, leaf, ("name", [y.build("type", "string")?]))?;
//!
//! assert_eq!(
//!     module.dump(),
//!     "module example {\n  namespace \"urn:example\";\n  prefix ex;\n  leaf name {\n    type string;\n  }\n}\n"
//! );
//! # Ok(())
//! # }
//! ```

// ============================================================================
// MODULES (dependency order: tree → dump/query → builder → node → validate)
// ============================================================================

/// Error type shared by every fallible operation
pub mod error;

/// Arena storage: NodeId, Tree, Statement, keyword tables
pub mod tree;

/// Canonical YANG text serialization
pub mod dump;

/// Statement search: find by keyword/argument, pre-order walk
pub mod query;

/// Statement factory and tuple expressions
pub mod builder;

/// Chainable handles over tree nodes
pub mod node;

/// Validation of complete documents
pub mod validate;

// Re-export the public surface
pub use builder::{Argument, Builder, Expr, Input, keyword_for};
pub use dump::DumpOptions;
pub use error::{Error, Result};
pub use node::{HandleList, Node};
pub use query::{Descend, Query};
pub use tree::Statement;
pub use validate::{
    Diagnostic, Severity, StructuralValidator, ValidationContext, Validator, Verdict,
};

/// Build a statement whose keyword is written as an identifier.
///
/// `stmt!(target, leaf_list, input)` expands to
/// `target.call("leaf_list", input)`, so `__` becomes `:` and `_` becomes
/// `-`. The target may be a [`Builder`] or a [`Node`].
///
/// ```
/// use yang_builder::{Builder, stmt};
///
/// # fn main() -> yang_builder::Result<()> {
/// let y = Builder::default();
/// assert_eq!(stmt!(y, ext__c_define, "X")?.keyword(), "ext:c-define");
/// assert_eq!(stmt!(y, c_define, "X", prefix = "ext")?.keyword(), "ext:c-define");
/// assert_eq!(stmt!(y, input)?.argument(), None);
/// # Ok(())
/// # }
/// ```
#[macro_export]
macro_rules! stmt {
    ($target:expr, $name:ident) => {
        $target.call(stringify!($name), ())
    };
    ($target:expr, $name:ident, $input:expr) => {
        $target.call(stringify!($name), $input)
    };
    ($target:expr, $name:ident, $input:expr, prefix = $prefix:expr) => {
        $target.call_with_prefix(stringify!($name), $prefix, $input)
    };
}
