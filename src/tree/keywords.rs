//! Keyword tables for YANG statements.
//!
//! These tables only drive presentation (quoting, canonical ordering) and the
//! root-rewrite rule of the builder. They never reject a keyword: any
//! keyword/argument combination can be built.

/// Keywords of the outermost statement of a document.
pub const ROOT_KEYWORDS: &[&str] = &["module", "submodule"];

/// Pseudo keyword of comment and blank-line nodes.
pub const COMMENT_KEYWORD: &str = "_comment";

/// Separator between an extension prefix and its keyword (`ext:c-define`).
pub const PREFIX_SEPARATOR: char = ':';

pub fn is_root_keyword(keyword: &str) -> bool {
    ROOT_KEYWORDS.contains(&keyword)
}

pub fn is_comment_keyword(keyword: &str) -> bool {
    keyword == COMMENT_KEYWORD
}

/// Split `prefix:name` on the first separator.
pub fn split_prefix(value: &str) -> (Option<&str>, &str) {
    match value.split_once(PREFIX_SEPARATOR) {
        Some((prefix, name)) => (Some(prefix), name),
        None => (None, value),
    }
}

/// Drop the namespace prefix, if any: `ext:myext` → `myext`.
pub fn strip_prefix(value: &str) -> &str {
    split_prefix(value).1
}

/// How the argument of a statement is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgKind {
    /// Identifiers, dates, numbers and enumerated values: printed bare
    /// unless the value itself needs quoting.
    Identifier,
    /// Free text (and every extension argument): always double-quoted.
    Text,
}

/// Argument kind of a core keyword. Prefixed (extension) and unknown
/// keywords are treated as free text.
pub fn arg_kind(keyword: &str) -> ArgKind {
    match keyword {
        "module" | "submodule" | "yang-version" | "import" | "include" | "prefix"
        | "belongs-to" | "revision" | "revision-date" | "extension" | "argument"
        | "yin-element" | "identity" | "base" | "feature" | "if-feature" | "typedef"
        | "type" | "fraction-digits" | "bit" | "position" | "require-instance" | "status"
        | "config" | "mandatory" | "ordered-by" | "min-elements" | "max-elements"
        | "value" | "grouping" | "container" | "leaf" | "leaf-list" | "list" | "choice"
        | "case" | "anyxml" | "anydata" | "uses" | "rpc" | "action" | "notification"
        | "deviate" => ArgKind::Identifier,
        _ => ArgKind::Text,
    }
}

/// Rank of statements that belong to the module body.
pub const BODY_RANK: u8 = 9;

/// Section rank of a module-level statement in canonical order:
/// header, linkage, meta, revision, then body.
pub fn canonical_rank(keyword: &str) -> u8 {
    match keyword {
        "yang-version" => 0,
        "namespace" | "belongs-to" => 1,
        "prefix" => 2,
        "import" | "include" => 3,
        "organization" => 4,
        "contact" => 5,
        "description" => 6,
        "reference" => 7,
        "revision" => 8,
        _ => BODY_RANK,
    }
}
