use super::*;
use crate::query::Query;

#[test]
fn test_builder_starts_with_named_module_root() {
    let y = Builder::new("my-module");
    let root = y.root();
    assert_eq!(root.keyword(), "module");
    assert_eq!(root.argument().as_deref(), Some("my-module"));
    assert_eq!(y.source(), "my-module");
}

#[test]
fn test_default_builder_source() {
    assert_eq!(Builder::default().source(), DEFAULT_SOURCE);
}

#[test]
fn test_build_argument_only() {
    let y = Builder::default();
    let prefix = y.build("prefix", "test").unwrap();
    assert_eq!(prefix.keyword(), "prefix");
    assert_eq!(prefix.argument().as_deref(), Some("test"));
    assert!(prefix.children().is_empty());
}

#[test]
fn test_build_children_in_argument_slot() {
    let y = Builder::default();
    let input = y.build("input", y.build("leaf", "name").unwrap()).unwrap();
    assert_eq!(input.argument(), None);
    assert_eq!(input.children().len(), 1);
}

#[test]
fn test_build_boolean_argument() {
    let y = Builder::default();
    assert_eq!(y.build("config", false).unwrap().argument().as_deref(), Some("false"));
    assert_eq!(y.build("mandatory", true).unwrap().argument().as_deref(), Some("true"));
}

#[test]
fn test_build_rejects_empty_keyword() {
    let y = Builder::default();
    assert!(matches!(y.build("", "x"), Err(Error::InvalidArgument(_))));
}

#[test]
fn test_build_reparents_children_in_order() {
    let y = Builder::default();
    let a = y.build("leaf", "a").unwrap();
    let b = y.build("leaf", "b").unwrap();
    let container = y.build("container", ("c", [a.clone(), b.clone()])).unwrap();

    assert_eq!(container.children().arguments(), vec![Some("a".into()), Some("b".into())]);
    assert_eq!(a.parent(), Some(container.clone()));
    assert_eq!(b.parent(), Some(container));
}

#[test]
fn test_build_moves_child_out_of_previous_parent() {
    let y = Builder::default();
    let leaf = y.build("leaf", "a").unwrap();
    let first = y.build("container", ("first", vec![leaf.clone()])).unwrap();
    let second = y.build("container", ("second", vec![leaf.clone()])).unwrap();

    assert!(first.children().is_empty());
    assert_eq!(second.children().len(), 1);
}

#[test]
fn test_root_keyword_rewrites_existing_root() {
    let y = Builder::new("initial");
    let module = y.build("module", "test").unwrap();

    assert_eq!(module, y.root());
    assert_eq!(module.argument().as_deref(), Some("test"));

    let submodule = y.build("submodule", "sub").unwrap();
    assert_eq!(submodule, module);
    assert_eq!(module.keyword(), "submodule");
}

#[test]
fn test_root_rewrite_replaces_children() {
    let y = Builder::default();
    let module = y.build("module", ("test", [y.build("prefix", "a").unwrap()])).unwrap();
    assert_eq!(module.children().len(), 1);

    y.build("module", ("test", [y.build("prefix", "b").unwrap()])).unwrap();
    assert_eq!(module.children().arguments(), vec![Some("b".into())]);
}

#[test]
fn test_build_in_records_parent_without_inserting() {
    let y = Builder::default();
    let container = y.build("container", "c").unwrap();
    let leaf = y.build_in("leaf", "l", Some(&container)).unwrap();

    assert!(container.children().is_empty());
    assert_eq!(y.tree().get(leaf.id()).parent, Some(container.id()));
}

#[test]
fn test_build_in_rejects_foreign_parent() {
    let y = Builder::default();
    let other = Builder::default();
    let container = other.build("container", "c").unwrap();
    assert!(y.build_in("leaf", "l", Some(&container)).is_err());
}

#[test]
fn test_call_translates_method_names() {
    let y = Builder::default();
    assert_eq!(y.call("leaf_list", "x").unwrap().keyword(), "leaf-list");
    assert_eq!(y.call("ext__c_define", "x").unwrap().keyword(), "ext:c-define");
    assert_eq!(
        y.call_with_prefix("c_define", "ext", "x").unwrap().keyword(),
        "ext:c-define"
    );
}

#[test]
fn test_comment_payloads() {
    let y = Builder::default();
    let single = y.comment("  hello  ").unwrap();
    assert_eq!(single.argument().as_deref(), Some("// hello"));

    let block = y.comment("a\nb").unwrap();
    assert_eq!(block.argument().as_deref(), Some("/*\n* a\n* b\n*/"));
    assert!(block.is_comment());

    let blank = y.blankline().unwrap();
    assert_eq!(blank.argument().as_deref(), Some(" "));
}

#[test]
fn test_empty_comment_is_an_empty_block() {
    let y = Builder::default();
    let empty = y.comment("  \n ").unwrap();
    assert_eq!(empty.argument().as_deref(), Some("/*\n\n*/"));
    assert_eq!(empty.dump(), "/*\n\n */\n");
}

#[test]
fn test_from_expression_node_is_identity() {
    let y = Builder::default();
    let leaf = y.build("leaf", "a").unwrap();
    let same = y.from_expression(&leaf).unwrap();
    assert_eq!(same, leaf);
}

#[test]
fn test_from_expression_tuple() {
    let y = Builder::default();
    let leaf = y
        .from_expression(("leaf", "counter", vec![Expr::from(("type", "int32"))]))
        .unwrap();
    assert_eq!(leaf.dump(), "leaf counter {\n  type int32;\n}\n");
}

#[test]
fn test_from_expression_statement_is_copied() {
    let y = Builder::default();
    let statement = Statement::new("leaf").with_argument("x");
    let node = y.from_expression(statement.clone()).unwrap();
    assert_eq!(node.to_statement(), statement);
}

#[test]
fn test_foreign_child_is_copied_and_detached() {
    let y = Builder::default();
    let other = Builder::default();
    let container = other.build("container", ("c", [other.build("leaf", "l").unwrap()])).unwrap();
    let leaf = container.find("leaf")[0].clone();

    let target = y.build("container", ("target", [leaf.clone()])).unwrap();

    assert!(container.children().is_empty());
    let children = target.children();
    let moved = &children[0];
    assert_ne!(moved, &leaf);
    assert_eq!(moved.to_statement(), leaf.to_statement());
}

#[test]
fn test_with_top_adopts_statement() {
    let top = Statement::new("module")
        .with_argument("given")
        .with_child(Statement::new("prefix").with_argument("g"));
    let y = Builder::with_top(&top);
    assert_eq!(y.source(), "given");
    assert_eq!(y.root().find(Query::keyword("prefix")).len(), 1);
}

#[cfg(feature = "json")]
mod json {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_builds_nested_tree() {
        let y = Builder::default();
        let container = y
            .from_json(&json!(["container", "error", [
                ["leaf", "code", [["type", "int32"]]],
                ["leaf", "message", [["type", "string"]]]
            ]]))
            .unwrap();
        assert_eq!(
            container.dump(),
            "container error {\n  leaf code {\n    type int32;\n  }\n  leaf message {\n    type string;\n  }\n}\n"
        );
    }

    #[test]
    fn test_from_json_children_without_argument() {
        let y = Builder::default();
        let input = y.from_json(&json!(["input", [["leaf", "x"]]])).unwrap();
        assert_eq!(input.argument(), None);
        assert_eq!(input.children().len(), 1);
    }

    #[test]
    fn test_from_json_scalar_arguments() {
        let y = Builder::default();
        assert_eq!(
            y.from_json(&json!(["default", 0])).unwrap().argument().as_deref(),
            Some("0")
        );
        assert_eq!(
            y.from_json(&json!(["config", true])).unwrap().argument().as_deref(),
            Some("true")
        );
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        let y = Builder::default();
        for value in [
            json!("leaf"),
            json!([]),
            json!([1, "x"]),
            json!(["leaf", {"a": 1}]),
            json!(["leaf", "x", "y"]),
            json!(["leaf", "x", [], 4]),
            json!(["leaf", "x", ["nested-not-array"]]),
        ] {
            assert!(
                matches!(y.from_json(&value), Err(Error::InvalidArgument(_))),
                "accepted {value}"
            );
        }
    }
}
