//! Header and prefix checks that need no schema knowledge.

use std::collections::HashSet;

use super::{Diagnostic, ValidationContext, Validator, codes};
use crate::node::Node;
use crate::query::{self, Descend, Query};
use crate::tree::keywords::split_prefix;
use crate::tree::{NodeId, Tree};

/// Keywords whose arguments are prose or URIs and never reference a prefix.
const PROSE_KEYWORDS: &[&str] = &[
    "namespace",
    "organization",
    "contact",
    "description",
    "reference",
    "error-message",
];

/// Minimal [`Validator`]: required header statements, declared extension
/// prefixes and unused imports. It does not check the YANG grammar.
#[derive(Debug, Clone, Copy, Default)]
pub struct StructuralValidator;

impl Validator for StructuralValidator {
    fn validate(&self, root: &Node, ctx: &mut ValidationContext) -> bool {
        let builder = root.builder();
        let tree = builder.tree();
        let id = root.id();
        let node_at = |id: NodeId| builder.node(id);

        if tree.argument(id).is_none() {
            ctx.push(
                Diagnostic::error("top-level statement has no name")
                    .with_code(codes::MISSING_ROOT_NAME)
                    .at(root),
            );
        }

        let required: &[(&str, &str)] = match tree.keyword(id) {
            "module" => &[
                ("namespace", codes::MISSING_NAMESPACE),
                ("prefix", codes::MISSING_PREFIX),
            ],
            "submodule" => &[("belongs-to", codes::MISSING_BELONGS_TO)],
            _ => &[],
        };
        for &(keyword, code) in required {
            if child(&tree, id, keyword).is_none() {
                ctx.push(
                    Diagnostic::error(format!("missing `{keyword}` statement"))
                        .with_code(code)
                        .at(root),
                );
            }
        }

        let own_prefix = child(&tree, id, "prefix")
            .or_else(|| child(&tree, id, "belongs-to").and_then(|b| child(&tree, b, "prefix")))
            .and_then(|p| tree.argument(p));
        let imports: Vec<(NodeId, &str)> =
            query::find(&tree, tree.children(id), &Query::keyword("import"))
                .into_iter()
                .filter_map(|import| {
                    let prefix = child(&tree, import, "prefix")?;
                    Some((import, tree.argument(prefix)?))
                })
                .collect();
        let declared: HashSet<&str> = own_prefix
            .into_iter()
            .chain(imports.iter().map(|(_, prefix)| *prefix))
            .collect();

        let statements = query::walk(&tree, id, |_, _| true, |_, id| id, Descend::Statements);
        let mut used: HashSet<&str> = HashSet::new();
        for &statement in &statements {
            let keyword = tree.keyword(statement);
            if let (Some(prefix), _) = split_prefix(keyword) {
                used.insert(prefix);
                if !declared.contains(prefix) {
                    ctx.push(
                        Diagnostic::error(format!("prefix `{prefix}` is not declared"))
                            .with_code(codes::UNKNOWN_PREFIX)
                            .at(&node_at(statement)),
                    );
                }
            }
            if PROSE_KEYWORDS.contains(&keyword) {
                continue;
            }
            if let Some(argument) = tree.argument(statement) {
                used.extend(referenced_prefixes(argument));
            }
        }

        for (import, prefix) in &imports {
            if !used.contains(prefix) {
                ctx.push(
                    Diagnostic::warning(format!("imported prefix `{prefix}` is never used"))
                        .with_code(codes::UNUSED_IMPORT)
                        .at(&node_at(*import)),
                );
            }
        }

        !ctx.has_errors()
    }
}

fn child(tree: &Tree, parent: NodeId, keyword: &str) -> Option<NodeId> {
    query::find(tree, tree.children(parent), &Query::keyword(keyword))
        .first()
        .copied()
}

/// Prefixes of the qualified names in an argument such as
/// `/if:interfaces/if:interface[if:name = current()]`.
fn referenced_prefixes(argument: &str) -> impl Iterator<Item = &str> {
    argument
        .split(|c: char| c.is_whitespace() || "/[]()=|+,'\"".contains(c))
        .filter_map(|token| split_prefix(token).0)
        .filter(|prefix| !prefix.is_empty())
}
